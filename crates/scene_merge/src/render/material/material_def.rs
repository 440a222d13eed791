//! Material definitions
//!
//! A definition is the external schema of a material: the legal parameter
//! names and the kind of value each one takes. Definitions are loaded from
//! the asset store (RON files for [`crate::assets::FileAssetStore`]).

use serde::{Deserialize, Serialize};

/// Declared kind of a material parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VarType {
    /// 32-bit float
    Float,
    /// 32-bit signed integer
    Int,
    /// Boolean switch
    Boolean,
    /// Two component vector
    Vector2,
    /// Three component vector
    Vector3,
    /// Four component vector
    Vector4,
    /// RGBA color
    Color,
    /// 2D texture
    Texture2D,
    /// Cube map texture
    TextureCubeMap,
    /// 4x4 matrix
    Matrix4,
}

/// One declared parameter of a [`MaterialDef`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatParamDef {
    /// Parameter name
    pub name: String,
    /// Declared kind
    pub var_type: VarType,
}

impl MatParamDef {
    /// Declare a parameter
    pub fn new(name: impl Into<String>, var_type: VarType) -> Self {
        Self { name: name.into(), var_type }
    }
}

/// Material definition: a named list of declared parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialDef {
    /// Definition name
    pub name: String,
    /// Declared parameters, in declaration order
    pub params: Vec<MatParamDef>,
}

impl MaterialDef {
    /// Create a definition
    pub fn new(name: impl Into<String>, params: Vec<MatParamDef>) -> Self {
        Self { name: name.into(), params }
    }

    /// Built-in debug definition backing the default material when the
    /// configured one is not available
    pub fn debug_checker() -> Self {
        Self::new(
            "MatCap",
            vec![
                MatParamDef::new("DiffuseMap", VarType::Texture2D),
                MatParamDef::new("Multiply_Color", VarType::Color),
                MatParamDef::new("ChessSize", VarType::Float),
            ],
        )
    }

    /// Look up a declared parameter by name
    pub fn param(&self, name: &str) -> Option<&MatParamDef> {
        self.params.iter().find(|p| p.name == name)
    }

    /// Names of all declared parameters
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|p| p.name.as_str())
    }
}
