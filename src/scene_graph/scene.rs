use glam::{Mat4, Quat, Vec3};
use id_arena::Arena;

use crate::scene_graph::mesh::{Mesh, MeshId};
use crate::scene_graph::object3d::{Object3D, ObjectId};
use crate::scene_graph::transform::Transform;

pub struct Scene {
    pub objects: Arena<Object3D>,
    pub meshes: Arena<Mesh>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Arena::new(),
            meshes: Arena::new(),
        }
    }

    pub fn add_object(&mut self, object: Object3D) -> ObjectId {
        self.objects.alloc(object)
    }

    /// Adds an object and attaches it under `parent` in one step.
    pub fn spawn(&mut self, object: Object3D, parent: Option<ObjectId>) -> ObjectId {
        let object_id = self.add_object(object);
        if parent.is_some() {
            self.set_object_parent(object_id, parent);
        }
        object_id
    }

    pub fn get_object(&self, id: ObjectId) -> Option<&Object3D> {
        self.objects.get(id)
    }

    pub fn get_object_mut(&mut self, id: ObjectId) -> Option<&mut Object3D> {
        self.objects.get_mut(id)
    }

    pub fn get_object_by_name(&self, name: &str) -> Option<ObjectId> {
        self.objects
            .iter()
            .find(|(_, object)| object.name == name)
            .map(|(id, _)| id)
    }

    pub fn add_mesh(&mut self, mesh: Mesh) -> MeshId {
        self.meshes.alloc(mesh)
    }

    pub fn get_mesh(&self, id: MeshId) -> Option<&Mesh> {
        self.meshes.get(id)
    }

    pub fn parent_of(&self, object_id: ObjectId) -> Option<ObjectId> {
        self.objects
            .get(object_id)
            .and_then(|object| object.parent_id)
    }

    pub fn children(&self, object_id: ObjectId) -> &[ObjectId] {
        self.objects
            .get(object_id)
            .map(|object| object.child_ids.as_slice())
            .unwrap_or(&[])
    }

    /// Allocates a detached copy of an object. Mesh is shared, material is copied.
    pub fn clone_object(&mut self, object_id: ObjectId) -> Option<ObjectId> {
        let copy = self.objects.get(object_id)?.duplicate();
        Some(self.add_object(copy))
    }

    /// World matrix composed from the cached local matrices up the parent chain.
    pub fn world_matrix(&self, object_id: ObjectId) -> Mat4 {
        let Some(object) = self.objects.get(object_id) else {
            return Mat4::IDENTITY;
        };

        let local_matrix = *object.transform.get_local_matrix();
        match object.parent_id {
            Some(parent_id) => self.world_matrix(parent_id) * local_matrix,
            None => local_matrix,
        }
    }

    pub fn world_position(&self, object_id: ObjectId) -> Vec3 {
        self.world_matrix(object_id).w_axis.truncate()
    }

    /// Sets the parent of an object and updates child relationships.
    /// The local transform is kept as is, see `spatial::transfer_preserving_world_pose`
    /// for a reparent that keeps the world pose instead.
    pub fn set_object_parent(&mut self, child_id: ObjectId, new_parent_id: Option<ObjectId>) {
        if let Some(child) = self.objects.get(child_id) {
            if let Some(old_parent_id) = child.parent_id {
                if let Some(old_parent) = self.objects.get_mut(old_parent_id) {
                    old_parent.child_ids.retain(|&id| id != child_id);
                }
            }
        }

        if let Some(child) = self.objects.get_mut(child_id) {
            child.parent_id = new_parent_id;

            if let Some(new_parent_id) = new_parent_id {
                if let Some(new_parent) = self.objects.get_mut(new_parent_id) {
                    new_parent.child_ids.push(child_id);
                }
            }
        }
    }

    pub fn set_object_translation(&mut self, object_id: ObjectId, translation: Vec3) {
        self.update_object_transform(object_id, |transform| {
            transform.set_translation(translation)
        });
    }

    pub fn set_object_rotation(&mut self, object_id: ObjectId, rotation: Quat) {
        self.update_object_transform(object_id, |transform| transform.set_rotation(rotation));
    }

    pub fn set_object_scale(&mut self, object_id: ObjectId, scale: f32) {
        self.update_object_transform(object_id, |transform| transform.set_scale(scale));
    }

    pub fn set_object_transform(
        &mut self,
        object_id: ObjectId,
        translation: Vec3,
        rotation: Quat,
        scale: f32,
    ) {
        self.update_object_transform(object_id, |transform| {
            transform.set_transform(translation, rotation, scale)
        });
    }

    /// Applies an arbitrary edit to a local transform. Descendants pick the
    /// change up through `world_matrix`, nothing else is cached.
    pub fn update_object_transform(
        &mut self,
        object_id: ObjectId,
        update: impl FnOnce(&mut Transform),
    ) {
        if let Some(object) = self.objects.get_mut(object_id) {
            update(&mut object.transform);
        }
    }

    pub fn get_object_transform(&self, object_id: ObjectId) -> Option<&Transform> {
        self.objects.get(object_id).map(|object| &object.transform)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
