//! Resolution context shared by the mergers of one pass
//!
//! Maps document ids to the objects produced for them. Later mergers look up
//! what earlier ones registered; the relations merger reads almost nothing
//! else. Entries can carry a namespace (the id of the entity that owns a
//! sideband directive) so directives can be listed per owner.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::foundation::collections::NodeKey;
use crate::physics::RigidBody;
use crate::render::{Animation, Light, Material, Mesh, Skeleton};
use crate::scene::UserValue;

/// Custom parameters registered for one id, in document order
pub type CustomParams = Vec<(String, UserValue)>;

/// Build the synthetic key holding a material's render bucket directive
pub fn render_bucket_key(material_id: &str) -> String {
    format!("G~{material_id}~RenderBucket")
}

/// Kind of object stored at a key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKind {
    /// Scene node
    Node,
    /// Mesh
    Mesh,
    /// Material
    Material,
    /// Light
    Light,
    /// Skeleton
    Skeleton,
    /// Animation clip
    Animation,
    /// Rigid body
    PhysicsBody,
    /// Custom parameter list
    CustomParams,
    /// Scalar directive
    Scalar,
}

impl fmt::Display for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Node => "node",
            Self::Mesh => "mesh",
            Self::Material => "material",
            Self::Light => "light",
            Self::Skeleton => "skeleton",
            Self::Animation => "animation",
            Self::PhysicsBody => "physics body",
            Self::CustomParams => "custom params",
            Self::Scalar => "scalar",
        };
        f.write_str(name)
    }
}

/// Object registered in the context
#[derive(Debug, Clone)]
pub enum ContextValue {
    /// Scene node created for a node record
    Node(NodeKey),
    /// Mesh
    Mesh(Arc<Mesh>),
    /// Fully populated material
    Material(Arc<Material>),
    /// Light
    Light(Arc<Light>),
    /// Skeleton
    Skeleton(Arc<Skeleton>),
    /// Animation clip
    Animation(Arc<Animation>),
    /// Rigid body
    PhysicsBody(Arc<RigidBody>),
    /// Custom parameter list
    CustomParams(Arc<CustomParams>),
    /// Numeric sideband directive
    Scalar(f32),
}

impl ContextValue {
    /// Kind of this value
    pub fn kind(&self) -> ContextKind {
        match self {
            Self::Node(_) => ContextKind::Node,
            Self::Mesh(_) => ContextKind::Mesh,
            Self::Material(_) => ContextKind::Material,
            Self::Light(_) => ContextKind::Light,
            Self::Skeleton(_) => ContextKind::Skeleton,
            Self::Animation(_) => ContextKind::Animation,
            Self::PhysicsBody(_) => ContextKind::PhysicsBody,
            Self::CustomParams(_) => ContextKind::CustomParams,
            Self::Scalar(_) => ContextKind::Scalar,
        }
    }
}

/// Context lookup errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContextError {
    /// Nothing is registered under the key
    #[error("Nothing registered under '{0}'")]
    NotFound(String),

    /// The key holds another kind of object
    #[error("'{key}' holds a {found}, expected a {expected}")]
    WrongKind {
        /// Requested key
        key: String,
        /// Kind the caller asked for
        expected: ContextKind,
        /// Kind actually stored
        found: ContextKind,
    },
}

#[derive(Debug, Clone)]
struct Entry {
    value: ContextValue,
    namespace: Option<String>,
}

macro_rules! typed_accessor {
    ($(#[$doc:meta])* $name:ident, $variant:ident, $out:ty) => {
        $(#[$doc])*
        #[allow(clippy::clone_on_copy)]
        pub fn $name(&self, key: &str) -> Result<$out, ContextError> {
            match self.get(key)? {
                ContextValue::$variant(v) => Ok(v.clone()),
                other => Err(ContextError::WrongKind {
                    key: key.to_string(),
                    expected: ContextKind::$variant,
                    found: other.kind(),
                }),
            }
        }
    };
}

/// Id to object map for one merge pass
#[derive(Debug, Clone, Default)]
pub struct ResolutionContext {
    entries: HashMap<String, Entry>,
}

impl ResolutionContext {
    /// Create an empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a value, returning the one it replaces
    ///
    /// Ids are written once per pass; a replacement means a merger wrote the
    /// same id twice and is logged.
    pub fn put(&mut self, key: impl Into<String>, value: ContextValue) -> Option<ContextValue> {
        self.insert(key.into(), Entry { value, namespace: None })
    }

    /// Register a sideband value owned by the entity `namespace`
    pub fn put_namespaced(
        &mut self,
        key: impl Into<String>,
        value: ContextValue,
        namespace: impl Into<String>,
    ) -> Option<ContextValue> {
        self.insert(key.into(), Entry { value, namespace: Some(namespace.into()) })
    }

    fn insert(&mut self, key: String, entry: Entry) -> Option<ContextValue> {
        let previous = self.entries.insert(key.clone(), entry).map(|e| e.value);
        if let Some(prev) = &previous {
            log::warn!("Context key '{}' registered twice, replacing the previous {}", key, prev.kind());
        }
        previous
    }

    /// Value registered under a key
    pub fn get(&self, key: &str) -> Result<&ContextValue, ContextError> {
        self.entries
            .get(key)
            .map(|e| &e.value)
            .ok_or_else(|| ContextError::NotFound(key.to_string()))
    }

    /// Whether anything is registered under a key
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of registered entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the context is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries registered under a namespace, in no particular order
    pub fn namespace<'a>(&'a self, namespace: &'a str) -> impl Iterator<Item = (&'a str, &'a ContextValue)> + 'a {
        self.entries
            .iter()
            .filter(move |(_, e)| e.namespace.as_deref() == Some(namespace))
            .map(|(k, e)| (k.as_str(), &e.value))
    }

    typed_accessor!(
        /// Scene node registered under a key
        node, Node, NodeKey
    );
    typed_accessor!(
        /// Mesh registered under a key
        mesh, Mesh, Arc<Mesh>
    );
    typed_accessor!(
        /// Material registered under a key
        material, Material, Arc<Material>
    );
    typed_accessor!(
        /// Light registered under a key
        light, Light, Arc<Light>
    );
    typed_accessor!(
        /// Skeleton registered under a key
        skeleton, Skeleton, Arc<Skeleton>
    );
    typed_accessor!(
        /// Animation registered under a key
        animation, Animation, Arc<Animation>
    );
    typed_accessor!(
        /// Rigid body registered under a key
        physics_body, PhysicsBody, Arc<RigidBody>
    );
    typed_accessor!(
        /// Custom parameters registered under a key
        custom_params, CustomParams, Arc<CustomParams>
    );
    typed_accessor!(
        /// Scalar directive registered under a key
        scalar, Scalar, f32
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::MaterialDef;

    fn material() -> ContextValue {
        ContextValue::Material(Arc::new(Material::new(Arc::new(MaterialDef::debug_checker()))))
    }

    #[test]
    fn test_put_and_get() {
        let mut ctx = ResolutionContext::new();
        assert!(ctx.put("m1", material()).is_none());

        assert!(ctx.contains("m1"));
        assert_eq!(ctx.get("m1").unwrap().kind(), ContextKind::Material);
        assert!(ctx.material("m1").is_ok());
    }

    #[test]
    fn test_missing_key() {
        let ctx = ResolutionContext::new();
        assert_eq!(ctx.get("nope").unwrap_err(), ContextError::NotFound("nope".to_string()));
    }

    #[test]
    fn test_wrong_kind() {
        let mut ctx = ResolutionContext::new();
        ctx.put("m1", material());

        let err = ctx.light("m1").unwrap_err();
        assert_eq!(
            err,
            ContextError::WrongKind {
                key: "m1".to_string(),
                expected: ContextKind::Light,
                found: ContextKind::Material,
            }
        );
    }

    #[test]
    fn test_second_put_replaces() {
        let mut ctx = ResolutionContext::new();
        ctx.put("x", ContextValue::Scalar(1.0));
        let previous = ctx.put("x", ContextValue::Scalar(2.0));

        assert!(matches!(previous, Some(ContextValue::Scalar(v)) if (v - 1.0).abs() < f32::EPSILON));
        assert_eq!(ctx.scalar("x").unwrap(), 2.0);
        assert_eq!(ctx.len(), 1);
    }

    #[test]
    fn test_namespaced_entries() {
        let mut ctx = ResolutionContext::new();
        ctx.put("m1", material());
        ctx.put_namespaced(render_bucket_key("m1"), ContextValue::Scalar(1.0), "m1");
        ctx.put_namespaced(render_bucket_key("m2"), ContextValue::Scalar(2.0), "m2");

        let owned: Vec<_> = ctx.namespace("m1").map(|(k, _)| k.to_string()).collect();
        assert_eq!(owned, vec!["G~m1~RenderBucket".to_string()]);
        assert_eq!(ctx.scalar(&render_bucket_key("m2")).unwrap(), 2.0);
    }
}
