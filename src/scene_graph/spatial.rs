//! Reparenting and pivot scaling that keep what the user sees in place.

use glam::Vec3;

use crate::scene_graph::object3d::ObjectId;
use crate::scene_graph::scene::Scene;

/// Moves `object_id` under `new_parent` without changing its world pose.
///
/// With `clone_first` the original stays where it is and a copy (shared mesh,
/// own material) is transferred instead. Returns the object that ended up under
/// `new_parent`, or `None` if either node no longer exists.
pub fn transfer_preserving_world_pose(
    scene: &mut Scene,
    object_id: ObjectId,
    new_parent: ObjectId,
    clone_first: bool,
) -> Option<ObjectId> {
    scene.get_object(new_parent)?;
    scene.get_object(object_id)?;

    // Taken from the source object, a fresh clone has no parent yet.
    let world_matrix = scene.world_matrix(object_id);
    let target_id = if clone_first {
        scene.clone_object(object_id)?
    } else {
        object_id
    };

    let local_matrix = scene.world_matrix(new_parent).inverse() * world_matrix;
    scene.update_object_transform(target_id, |transform| {
        transform.set_from_matrix(&local_matrix)
    });
    scene.set_object_parent(target_id, Some(new_parent));

    Some(target_id)
}

/// Rescales `pivot_id` by `scale_factor` so that whatever sits at `world_point`
/// stays there. The pivot's children are shifted to compensate for moving the
/// pivot onto the point. Only uniform pivot scale is supported.
pub fn scale_around_point(
    scene: &mut Scene,
    pivot_id: ObjectId,
    world_point: Vec3,
    scale_factor: f32,
) {
    let Some(pivot) = scene.get_object(pivot_id) else {
        return;
    };

    let scale = pivot.transform.scale();
    if scale == 0.0 {
        return;
    }

    let offset =
        pivot.transform.rotation().inverse() * (pivot.transform.translation() - world_point) / scale;
    let children = pivot.child_ids.clone();

    for child_id in children {
        scene.update_object_transform(child_id, |transform| transform.translate(offset));
    }

    scene.update_object_transform(pivot_id, |transform| {
        transform.set_translation(world_point);
        transform.set_scale(scale * scale_factor);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene_graph::Object3D;
    use glam::Quat;

    fn nested_rig() -> (Scene, ObjectId, ObjectId, ObjectId) {
        let mut scene = Scene::new();
        let pivot = scene.add_object(Object3D::group("pivot"));
        scene.set_object_transform(pivot, Vec3::new(0.5, 0.0, -1.0), Quat::IDENTITY, 1.5);
        let group = scene.spawn(Object3D::group("group"), Some(pivot));
        scene.set_object_translation(group, Vec3::new(0.0, 0.2, 0.0));
        let object = scene.spawn(Object3D::group("object"), Some(group));
        scene.set_object_transform(
            object,
            Vec3::new(0.0, 0.5, -2.0),
            Quat::from_rotation_y(0.3),
            0.8,
        );
        (scene, pivot, group, object)
    }

    #[test]
    fn test_transfer_keeps_world_pose() {
        let (mut scene, _pivot, _group, object) = nested_rig();
        let hand = scene.add_object(Object3D::group("hand"));
        scene.set_object_transform(
            hand,
            Vec3::new(0.2, 1.1, 0.4),
            Quat::from_rotation_x(-0.6),
            1.0,
        );

        let before = scene.world_matrix(object);
        let moved = transfer_preserving_world_pose(&mut scene, object, hand, false).unwrap();

        assert_eq!(moved, object);
        assert_eq!(scene.parent_of(object), Some(hand));
        assert!(scene.world_matrix(object).abs_diff_eq(before, 1e-5));
    }

    #[test]
    fn test_transfer_with_clone_leaves_original() {
        let (mut scene, _pivot, group, object) = nested_rig();
        let hand = scene.add_object(Object3D::group("hand"));
        scene.set_object_translation(hand, Vec3::new(0.0, 1.0, 0.0));

        let before = scene.world_matrix(object);
        let copy = transfer_preserving_world_pose(&mut scene, object, hand, true).unwrap();

        assert_ne!(copy, object);
        assert_eq!(scene.parent_of(object), Some(group));
        assert_eq!(scene.parent_of(copy), Some(hand));
        assert!(scene.world_matrix(copy).abs_diff_eq(before, 1e-5));
        assert!(scene.world_matrix(object).abs_diff_eq(before, 1e-6));
    }

    #[test]
    fn test_transfer_to_unknown_parent_is_noop() {
        let (mut scene, _pivot, group, object) = nested_rig();
        let mut other = Scene::new();
        let foreign = other.add_object(Object3D::group("foreign"));

        assert_eq!(
            transfer_preserving_world_pose(&mut scene, object, foreign, false),
            None
        );
        assert_eq!(scene.parent_of(object), Some(group));
    }

    #[test]
    fn test_scale_around_point_keeps_anchor() {
        for factor in [0.25, 0.99, 1.01, 3.0] {
            let (mut scene, pivot, group, _object) = nested_rig();
            let anchor = Vec3::new(0.3, 0.6, -2.5);

            let local_anchor = scene.world_matrix(group).inverse().transform_point3(anchor);
            scale_around_point(&mut scene, pivot, anchor, factor);
            let after = scene.world_matrix(group).transform_point3(local_anchor);

            assert!(after.abs_diff_eq(anchor, 1e-4), "factor {factor}: {after}");
            let pivot_transform = scene.get_object_transform(pivot).unwrap();
            assert!((pivot_transform.scale() - 1.5 * factor).abs() < 1e-5);
            assert!(pivot_transform.translation().abs_diff_eq(anchor, 1e-6));
        }
    }

    #[test]
    fn test_scale_around_point_with_rotated_pivot() {
        let (mut scene, pivot, group, _object) = nested_rig();
        scene.set_object_rotation(pivot, Quat::from_rotation_y(1.1));
        let anchor = Vec3::new(-0.4, 0.1, 0.7);

        let local_anchor = scene.world_matrix(group).inverse().transform_point3(anchor);
        scale_around_point(&mut scene, pivot, anchor, 2.0);
        let after = scene.world_matrix(group).transform_point3(local_anchor);

        assert!(after.abs_diff_eq(anchor, 1e-4));
    }

    #[test]
    fn test_scale_around_point_leaves_object_locals_alone() {
        let (mut scene, pivot, _group, object) = nested_rig();
        let before = scene.get_object_transform(object).unwrap().translation();

        scale_around_point(&mut scene, pivot, Vec3::ONE, 2.0);

        let after = scene.get_object_transform(object).unwrap().translation();
        assert_eq!(before, after);
    }
}
