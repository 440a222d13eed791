//! Engine object model populated by the merge pipeline
//!
//! These are the renderer-facing objects the mergers produce: materials and
//! their definitions, textures, meshes, lights, skeletons and animation clips.
//! They are plain CPU-side data; GPU upload is the runtime's concern.

pub mod color;
pub mod texture;
pub mod material;
pub mod mesh;
pub mod lighting;
pub mod skeleton;
pub mod animation;

pub use color::ColorRGBA;
pub use texture::{ColorSpace, Image, ImageFormat, MagFilter, MinFilter, Texture, WrapMode};
pub use material::{MatParamDef, MatParamValue, Material, MaterialDef, MaterialError, VarType};
pub use mesh::{Mesh, Topology};
pub use lighting::{Light, LightType};
pub use skeleton::{Bone, Skeleton};
pub use animation::{Animation, Track};
