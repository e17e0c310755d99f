use glam::Vec3;
use id_arena::Id;

use crate::scene_graph::mesh::MeshId;
use crate::scene_graph::material::Material;
use crate::scene_graph::transform::Transform;

pub type ObjectId = Id<Object3D>;

pub struct Object3D {
    pub name: String,
    pub transform: Transform,
    pub mesh_id: Option<MeshId>,
    pub material: Material,
    pub parent_id: Option<ObjectId>,
    pub child_ids: Vec<ObjectId>,
    /// Present only while the object coasts after a throw.
    pub velocity: Option<Vec3>,
    /// Ticks spent in free motion since the last throw.
    pub trail_counter: u32,
}

impl Object3D {
    pub fn mesh(name: impl Into<String>, mesh_id: MeshId, material: Material) -> Self {
        Self {
            name: name.into(),
            mesh_id: Some(mesh_id),
            material,
            ..Default::default()
        }
    }

    pub fn group(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn is_moving(&self) -> bool {
        self.velocity.is_some()
    }

    /// Copies transform, mesh reference and material. The copy starts
    /// detached, at rest, and without children.
    pub fn duplicate(&self) -> Self {
        let transform = self.transform.clone();
        transform.invalidate_local();

        Self {
            name: self.name.clone(),
            transform,
            mesh_id: self.mesh_id,
            material: self.material,
            ..Default::default()
        }
    }
}

impl Default for Object3D {
    fn default() -> Self {
        Self {
            name: String::new(),
            transform: Transform::from_translation(Vec3::ZERO),
            mesh_id: None,
            material: Material::default(),
            parent_id: None,
            child_ids: Vec::new(),
            velocity: None,
            trail_counter: 0,
        }
    }
}
