//! Material instances
//!
//! A [`Material`] is an instance of a [`MaterialDef`]: every parameter set on
//! it must be declared by the definition with a compatible kind.

pub mod material_def;

pub use material_def::{MatParamDef, MaterialDef, VarType};

use std::collections::BTreeMap;
use std::sync::Arc;

use thiserror::Error;

use super::{ColorRGBA, Texture};
use crate::foundation::math::{Vec2, Vec3, Vec4};

/// Value stored in a material parameter
#[derive(Debug, Clone)]
pub enum MatParamValue {
    /// Float value
    Float(f32),
    /// Integer value
    Int(i32),
    /// Boolean value
    Boolean(bool),
    /// Two component vector
    Vector2(Vec2),
    /// Three component vector
    Vector3(Vec3),
    /// Four component vector
    Vector4(Vec4),
    /// RGBA color
    Color(ColorRGBA),
    /// 2D texture
    Texture2D(Texture),
}

impl MatParamValue {
    /// Whether a parameter declared as `declared` can hold this value
    pub fn fits(&self, declared: VarType) -> bool {
        matches!(
            (self, declared),
            (Self::Float(_), VarType::Float)
                | (Self::Int(_), VarType::Int)
                | (Self::Boolean(_), VarType::Boolean)
                | (Self::Vector2(_), VarType::Vector2)
                | (Self::Vector3(_), VarType::Vector3)
                | (Self::Vector4(_), VarType::Vector4)
                | (Self::Color(_), VarType::Color | VarType::Vector4)
                | (Self::Texture2D(_), VarType::Texture2D)
        )
    }
}

/// Errors raised when setting material parameters
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MaterialError {
    /// The definition has no parameter with this name
    #[error("Parameter '{param}' is not declared by material definition '{definition}'")]
    UnknownParam {
        /// Requested parameter
        param: String,
        /// Definition name
        definition: String,
    },

    /// The parameter exists but is declared with another kind
    #[error("Parameter '{param}' is declared as {declared:?}")]
    TypeMismatch {
        /// Requested parameter
        param: String,
        /// Declared kind
        declared: VarType,
    },
}

/// Material instance created from a definition
#[derive(Debug, Clone)]
pub struct Material {
    name: String,
    definition: Arc<MaterialDef>,
    params: BTreeMap<String, MatParamValue>,
}

impl Material {
    /// Create an empty material from its definition
    pub fn new(definition: Arc<MaterialDef>) -> Self {
        Self {
            name: String::new(),
            definition,
            params: BTreeMap::new(),
        }
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the display name
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The definition this material instantiates
    pub fn definition(&self) -> &MaterialDef {
        &self.definition
    }

    /// Current value of a parameter, if it has been set
    pub fn param(&self, name: &str) -> Option<&MatParamValue> {
        self.params.get(name)
    }

    /// Names of the parameters that currently hold a value
    pub fn set_param_names(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    /// Set a parameter after checking it against the definition
    pub fn set_param(&mut self, name: &str, value: MatParamValue) -> Result<(), MaterialError> {
        let declared = self.definition.param(name).ok_or_else(|| MaterialError::UnknownParam {
            param: name.to_string(),
            definition: self.definition.name.clone(),
        })?;
        if !value.fits(declared.var_type) {
            return Err(MaterialError::TypeMismatch {
                param: name.to_string(),
                declared: declared.var_type,
            });
        }
        self.params.insert(name.to_string(), value);
        Ok(())
    }

    /// Set a float parameter
    pub fn set_float(&mut self, name: &str, value: f32) -> Result<(), MaterialError> {
        self.set_param(name, MatParamValue::Float(value))
    }

    /// Set an integer parameter
    pub fn set_int(&mut self, name: &str, value: i32) -> Result<(), MaterialError> {
        self.set_param(name, MatParamValue::Int(value))
    }

    /// Set a boolean parameter
    pub fn set_boolean(&mut self, name: &str, value: bool) -> Result<(), MaterialError> {
        self.set_param(name, MatParamValue::Boolean(value))
    }

    /// Set a color parameter
    pub fn set_color(&mut self, name: &str, value: ColorRGBA) -> Result<(), MaterialError> {
        self.set_param(name, MatParamValue::Color(value))
    }

    /// Set a texture parameter
    pub fn set_texture(&mut self, name: &str, value: Texture) -> Result<(), MaterialError> {
        self.set_param(name, MatParamValue::Texture2D(value))
    }

    /// Set a two component vector parameter
    pub fn set_vector2(&mut self, name: &str, value: Vec2) -> Result<(), MaterialError> {
        self.set_param(name, MatParamValue::Vector2(value))
    }

    /// Set a three component vector parameter
    pub fn set_vector3(&mut self, name: &str, value: Vec3) -> Result<(), MaterialError> {
        self.set_param(name, MatParamValue::Vector3(value))
    }

    /// Float value of a parameter, if set as a float
    pub fn float(&self, name: &str) -> Option<f32> {
        match self.params.get(name)? {
            MatParamValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Color value of a parameter, if set as a color
    pub fn color(&self, name: &str) -> Option<ColorRGBA> {
        match self.params.get(name)? {
            MatParamValue::Color(c) => Some(*c),
            _ => None,
        }
    }

    /// Texture value of a parameter, if set as a texture
    pub fn texture(&self, name: &str) -> Option<&Texture> {
        match self.params.get(name)? {
            MatParamValue::Texture2D(t) => Some(t),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_def() -> Arc<MaterialDef> {
        Arc::new(MaterialDef::new(
            "Lit",
            vec![
                MatParamDef::new("Shininess", VarType::Float),
                MatParamDef::new("Diffuse", VarType::Vector4),
                MatParamDef::new("UseAlpha", VarType::Boolean),
            ],
        ))
    }

    #[test]
    fn test_set_declared_param() {
        let mut mat = Material::new(lit_def());
        mat.set_float("Shininess", 4.0).unwrap();
        assert_eq!(mat.float("Shininess"), Some(4.0));
    }

    #[test]
    fn test_color_fits_vector4() {
        let mut mat = Material::new(lit_def());
        mat.set_color("Diffuse", ColorRGBA::BLACK).unwrap();
        assert_eq!(mat.color("Diffuse"), Some(ColorRGBA::BLACK));
    }

    #[test]
    fn test_unknown_param_rejected() {
        let mut mat = Material::new(lit_def());
        let err = mat.set_float("Glossy", 1.0).unwrap_err();
        assert!(matches!(err, MaterialError::UnknownParam { .. }));
        assert!(mat.param("Glossy").is_none());
    }

    #[test]
    fn test_kind_mismatch_rejected() {
        let mut mat = Material::new(lit_def());
        let err = mat.set_int("UseAlpha", 1).unwrap_err();
        assert_eq!(
            err,
            MaterialError::TypeMismatch { param: "UseAlpha".to_string(), declared: VarType::Boolean }
        );
    }
}
