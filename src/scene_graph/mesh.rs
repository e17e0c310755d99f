use id_arena::Id;

use crate::math::BoundingVolume;

pub type MeshId = Id<Mesh>;

/// Geometry shared between an object and all of its clones.
pub struct Mesh {
    pub name: String,
    pub bounds: BoundingVolume,
}

impl Mesh {
    pub fn new(name: impl Into<String>, bounds: BoundingVolume) -> Self {
        Self {
            name: name.into(),
            bounds,
        }
    }
}
