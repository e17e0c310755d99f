//! Inertial coasting of thrown objects.

use crate::config::InteractionConfig;
use crate::interaction::WorldNodes;
use crate::scene_graph::{ObjectId, Scene};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MotionReport {
    /// Objects that were coasting at the start of the step.
    pub moving: usize,
    /// Objects that came to rest during the step.
    pub settled: usize,
    pub trails: Vec<ObjectId>,
}

/// Advances every coasting child of the world group by one tick.
///
/// Trail clones are spawned into the group at the object's pose before it moves,
/// and are never removed again. A `trail_interval` of zero spawns none.
pub fn integrate(scene: &mut Scene, world: WorldNodes, config: &InteractionConfig) -> MotionReport {
    let mut report = MotionReport::default();

    let pivot_scale = scene
        .get_object_transform(world.pivot)
        .map(|transform| transform.scale())
        .unwrap_or(1.0);
    if pivot_scale == 0.0 {
        return report;
    }

    let children = scene.children(world.group).to_vec();
    for object_id in children {
        let Some(object) = scene.get_object_mut(object_id) else {
            continue;
        };
        let Some(velocity) = object.velocity else {
            continue;
        };
        report.moving += 1;

        object.trail_counter += 1;
        let spawn_trail = object.trail_counter.checked_rem(config.trail_interval) == Some(0);

        let decayed = velocity / config.friction;
        object.velocity = if decayed.length() < config.rest_speed {
            report.settled += 1;
            None
        } else {
            Some(decayed)
        };

        if spawn_trail {
            if let Some(trail) = scene.clone_object(object_id) {
                scene.set_object_parent(trail, Some(world.group));
                log::debug!("Spawned motion trail {:?} behind {:?}", trail, object_id);
                report.trails.push(trail);
            }
        }

        scene.update_object_transform(object_id, |transform| {
            transform.translate(velocity / pivot_scale)
        });
    }

    report
}
