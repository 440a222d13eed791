//! Physics bodies produced from the document
//!
//! Only the description of a body is built here; simulation belongs to the
//! physics runtime that consumes it.

pub mod rigid_body;

pub use rigid_body::{BodyType, CollisionShape, RigidBody};
