//! Light sources

use super::ColorRGBA;

/// Light types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightType {
    /// Directional light (like sunlight)
    Directional,
    /// Point light (like a lightbulb)
    Point,
    /// Spot light (like a flashlight)
    Spot,
    /// Ambient light
    Ambient,
}

/// Light source. Position and direction come from the node it is attached to.
#[derive(Debug, Clone)]
pub struct Light {
    /// Light name
    pub name: String,
    /// Light type
    pub light_type: LightType,
    /// Light color
    pub color: ColorRGBA,
    /// Light intensity
    pub intensity: f32,
    /// Light range (for point/spot lights)
    pub range: f32,
    /// Inner cone angle for spot lights (in radians)
    pub inner_cone_angle: f32,
    /// Outer cone angle for spot lights (in radians)
    pub outer_cone_angle: f32,
    /// Whether the light casts shadows
    pub cast_shadow: bool,
}

impl Light {
    /// Create a light of the given type with neutral parameters
    pub fn new(name: impl Into<String>, light_type: LightType) -> Self {
        Self {
            name: name.into(),
            light_type,
            color: ColorRGBA::WHITE,
            intensity: 1.0,
            range: 0.0,
            inner_cone_angle: 0.0,
            outer_cone_angle: 0.0,
            cast_shadow: false,
        }
    }
}
