pub mod bounds;
pub mod ray;

pub use bounds::{BoundingSphere, BoundingVolume, AABB};
pub use ray::Ray;
