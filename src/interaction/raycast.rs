//! Controller beams against scene objects.
//!
//! There is no spatial index, every query walks the candidate list, which is
//! fine for the tens to hundreds of objects a sandbox holds.

use glam::Vec3;

use crate::math::Ray;
use crate::scene_graph::{ObjectId, Scene};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub object: ObjectId,
    pub distance: f32,
    pub point: Vec3,
}

/// Ray from the controller node's world position along its local -Z axis.
/// Scale in the node's world matrix is ignored.
pub fn cast_from_controller(scene: &Scene, controller_node: ObjectId) -> Ray {
    let (_scale, rotation, origin) = scene
        .world_matrix(controller_node)
        .to_scale_rotation_translation();
    Ray::new(origin, rotation * Vec3::NEG_Z)
}

/// Tests a single object's mesh bounds. Objects without a mesh never hit.
pub fn intersect_object(scene: &Scene, ray: &Ray, object_id: ObjectId) -> Option<Intersection> {
    let mesh_id = scene.get_object(object_id)?.mesh_id?;
    let mesh = scene.get_mesh(mesh_id)?;

    let world_matrix = scene.world_matrix(object_id);
    if world_matrix.determinant().abs() <= f32::EPSILON {
        return None;
    }

    let local_ray = ray.transform(&world_matrix.inverse());
    let distance = mesh.bounds.intersect_ray(&local_ray)?;

    Some(Intersection {
        object: object_id,
        distance,
        point: ray.point_at(distance),
    })
}

/// Nearest hit among `candidates`. Equal distances keep the earlier candidate.
pub fn first_hit(scene: &Scene, ray: &Ray, candidates: &[ObjectId]) -> Option<Intersection> {
    candidates
        .iter()
        .filter_map(|&candidate| intersect_object(scene, ray, candidate))
        .fold(None, |nearest: Option<Intersection>, hit| match nearest {
            Some(current) if current.distance <= hit.distance => Some(current),
            _ => Some(hit),
        })
}
