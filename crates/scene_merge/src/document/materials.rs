//! Material records and property assignments

use serde::{Deserialize, Serialize};

use super::TextureRef;

/// Decoded material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialRecord {
    /// Stable id, unique among materials
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Asset path of the material definition
    pub mat_id: String,
    /// Property assignments in document order
    #[serde(default)]
    pub properties: Vec<MatProperty>,
}

impl MaterialRecord {
    /// Create a record without properties
    pub fn new(id: impl Into<String>, mat_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            mat_id: mat_id.into(),
            properties: Vec::new(),
        }
    }

    /// Append a property assignment
    pub fn with_property(mut self, property: MatProperty) -> Self {
        self.properties.push(property);
        self
    }
}

/// One property assignment as decoded: at most one payload field is expected
/// to be populated
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatProperty {
    /// Parameter name (or a sideband directive id)
    pub id: String,
    /// Scalar payload
    pub value: Option<f32>,
    /// Color payload `[r, g, b, a]`
    pub color: Option<[f32; 4]>,
    /// Texture payload
    pub texture: Option<TextureRef>,
    /// Two component vector payload
    pub vec2: Option<[f32; 2]>,
    /// Three component vector payload
    pub vec3: Option<[f32; 3]>,
}

/// The populated payload of a [`MatProperty`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyPayload<'a> {
    /// Scalar, converted according to the declared parameter kind
    Scalar(f32),
    /// Color
    Color([f32; 4]),
    /// Texture reference
    Texture(&'a TextureRef),
    /// Two component vector
    Vec2([f32; 2]),
    /// Three component vector
    Vec3([f32; 3]),
}

impl MatProperty {
    fn named(id: impl Into<String>) -> Self {
        Self { id: id.into(), ..Default::default() }
    }

    /// Scalar assignment
    pub fn scalar(id: impl Into<String>, value: f32) -> Self {
        Self { value: Some(value), ..Self::named(id) }
    }

    /// Color assignment
    pub fn color(id: impl Into<String>, color: [f32; 4]) -> Self {
        Self { color: Some(color), ..Self::named(id) }
    }

    /// Texture assignment
    pub fn texture(id: impl Into<String>, texture: TextureRef) -> Self {
        Self { texture: Some(texture), ..Self::named(id) }
    }

    /// Two component vector assignment
    pub fn vec2(id: impl Into<String>, v: [f32; 2]) -> Self {
        Self { vec2: Some(v), ..Self::named(id) }
    }

    /// Three component vector assignment
    pub fn vec3(id: impl Into<String>, v: [f32; 3]) -> Self {
        Self { vec3: Some(v), ..Self::named(id) }
    }

    /// The payload selected by the first populated field, checked in the
    /// order value, color, texture, vec3, vec2
    pub fn payload(&self) -> Option<PropertyPayload<'_>> {
        if let Some(v) = self.value {
            Some(PropertyPayload::Scalar(v))
        } else if let Some(c) = self.color {
            Some(PropertyPayload::Color(c))
        } else if let Some(t) = &self.texture {
            Some(PropertyPayload::Texture(t))
        } else if let Some(v) = self.vec3 {
            Some(PropertyPayload::Vec3(v))
        } else {
            self.vec2.map(PropertyPayload::Vec2)
        }
    }
}
