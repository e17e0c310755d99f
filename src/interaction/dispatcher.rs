use std::time::Duration;

use glam::Vec3;

use crate::config::InteractionConfig;
use crate::interaction::controller::{
    ButtonEvent, ControllerRole, ControllerSnapshot, ControllerState,
};
use crate::interaction::motion::{self, MotionReport};
use crate::interaction::raycast::{cast_from_controller, first_hit};
use crate::interaction::WorldNodes;
use crate::scene_graph::spatial::{scale_around_point, transfer_preserving_world_pose};
use crate::scene_graph::{ObjectId, Scene};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TickReport {
    pub motion: MotionReport,
    /// Controllers whose snapshot was missing or malformed this tick.
    pub skipped: usize,
}

/// Turns per-frame controller snapshots into object and world manipulation.
pub struct Dispatcher {
    world: WorldNodes,
    controllers: [ControllerState; 2],
    /// Objects tinted by a beam during the last tick.
    intersected: Vec<ObjectId>,
}

impl Dispatcher {
    /// `controllers` must be ordered by `ControllerRole::index`.
    pub fn new(world: WorldNodes, controllers: [ControllerState; 2]) -> Self {
        Self {
            world,
            controllers,
            intersected: Vec::new(),
        }
    }

    pub fn world(&self) -> WorldNodes {
        self.world
    }

    pub fn controller(&self, role: ControllerRole) -> &ControllerState {
        &self.controllers[role.index()]
    }

    pub fn intersected(&self) -> &[ObjectId] {
        &self.intersected
    }

    /// Runs one frame. Snapshots are indexed by `ControllerRole::index`; a
    /// missing or invalid one skips that controller for this tick only.
    pub fn tick(
        &mut self,
        scene: &mut Scene,
        snapshots: &[Option<ControllerSnapshot>],
        now: Duration,
        config: &InteractionConfig,
    ) -> TickReport {
        self.clear_intersected(scene);

        let motion = motion::integrate(scene, self.world, config);

        for controller in &mut self.controllers {
            if let Some(palette) = controller.palette.as_mut() {
                palette.advance(scene, config, now);
            }
        }

        let mut skipped = 0;
        let mut active = [false; 2];
        for role in ControllerRole::ALL {
            let Some(snapshot) = snapshots.get(role.index()).and_then(Option::as_ref) else {
                skipped += 1;
                continue;
            };
            if let Err(error) = snapshot.validate() {
                log::warn!("Skipping {:?} controller this tick: {:#}", role, error);
                skipped += 1;
                continue;
            }
            active[role.index()] = true;

            self.apply_pose(scene, role, snapshot);
            for &event in &snapshot.events {
                self.handle_event(scene, role, event, now, config);
            }
            self.record_held_position(scene, role);

            if snapshot.buttons.grip {
                self.grip(scene, role, config);
            }
            if snapshot.buttons.thumbpad {
                self.pan_world(scene, role, snapshot, config);
            }
        }

        for role in ControllerRole::ALL {
            if active[role.index()] {
                self.highlight(scene, role, config);
            }
        }

        TickReport { motion, skipped }
    }

    fn clear_intersected(&mut self, scene: &mut Scene) {
        for object_id in self.intersected.drain(..) {
            if let Some(object) = scene.get_object_mut(object_id) {
                object.material.emissive.x = 0.0;
            }
        }
    }

    fn apply_pose(&self, scene: &mut Scene, role: ControllerRole, snapshot: &ControllerSnapshot) {
        let node = self.controller(role).node;
        scene.set_object_transform(
            node,
            snapshot.position,
            snapshot.orientation.normalize(),
            1.0,
        );
    }

    fn handle_event(
        &mut self,
        scene: &mut Scene,
        role: ControllerRole,
        event: ButtonEvent,
        now: Duration,
        config: &InteractionConfig,
    ) {
        match event {
            ButtonEvent::TriggerDown => self.on_trigger_down(scene, role),
            ButtonEvent::TriggerUp => self.on_trigger_up(scene, role, config),
            ButtonEvent::MenuDown => {
                if let Some(palette) = self.controllers[role.index()].palette.as_mut() {
                    palette.show(scene, config, now);
                }
            }
            ButtonEvent::MenuUp => {
                if let Some(palette) = self.controllers[role.index()].palette.as_mut() {
                    palette.hide(scene, config, now);
                }
            }
        }
    }

    /// Shape library of a palette that is currently shown, if any.
    fn visible_shape_library(&self) -> Option<ObjectId> {
        self.controllers
            .iter()
            .filter_map(|controller| controller.palette.as_ref())
            .find(|palette| palette.is_visible())
            .map(|palette| palette.shape_library)
    }

    fn on_trigger_down(&mut self, scene: &mut Scene, role: ControllerRole) {
        let controller = self.controller(role);
        if controller.is_holding() {
            return;
        }

        let ray = cast_from_controller(scene, controller.node);
        if let Some(hit) = first_hit(scene, &ray, scene.children(self.world.group)) {
            self.pick_up(scene, role, hit.object, false);
            return;
        }

        if role != ControllerRole::Secondary {
            return;
        }
        let Some(library) = self.visible_shape_library() else {
            return;
        };
        if let Some(hit) = first_hit(scene, &ray, scene.children(library)) {
            self.pick_up(scene, role, hit.object, true);
        }
    }

    fn pick_up(
        &mut self,
        scene: &mut Scene,
        role: ControllerRole,
        object_id: ObjectId,
        clone_first: bool,
    ) {
        let controller = &mut self.controllers[role.index()];
        let Some(held) =
            transfer_preserving_world_pose(scene, object_id, controller.node, clone_first)
        else {
            return;
        };

        if let Some(object) = scene.get_object_mut(held) {
            object.material.set_color_hex(random_color());
            object.material.emissive.x = 0.0;
            object.velocity = None;
        }

        controller.begin_hold(held);
        controller.beam.visible = false;
        log::debug!(
            "{:?} controller picked up {:?}{}",
            role,
            held,
            if clone_first { " from the palette" } else { "" }
        );
    }

    fn on_trigger_up(&mut self, scene: &mut Scene, role: ControllerRole, config: &InteractionConfig) {
        let controller = &mut self.controllers[role.index()];
        let Some(release) = controller.end_hold() else {
            return;
        };
        controller.beam.visible = config.beams;

        if transfer_preserving_world_pose(scene, release.object, self.world.group, false).is_none() {
            return;
        }

        if let Some(object) = scene.get_object_mut(release.object) {
            object.material.set_color_hex(random_color());
            object.material.emissive.z = 0.0;
            object.velocity = release.velocity;
            object.trail_counter = 0;
        }

        log::debug!(
            "{:?} controller dropped {:?} with velocity {:?}",
            role,
            release.object,
            release.velocity
        );
    }

    fn record_held_position(&mut self, scene: &Scene, role: ControllerRole) {
        let controller = &mut self.controllers[role.index()];
        if let Some(object_id) = controller.selected() {
            controller.record_position(scene.world_position(object_id));
        }
    }

    fn grip_factor(role: ControllerRole, config: &InteractionConfig) -> f32 {
        match role {
            ControllerRole::Primary => 1.0 / config.scale_speed,
            ControllerRole::Secondary => config.scale_speed,
        }
    }

    /// Scales the held object in place, or zooms the world around the beam hit.
    fn grip(&mut self, scene: &mut Scene, role: ControllerRole, config: &InteractionConfig) {
        let factor = Self::grip_factor(role, config);
        let controller = self.controller(role);

        match controller.selected() {
            Some(object_id) => {
                scene.update_object_transform(object_id, |transform| {
                    transform.set_scale(transform.scale() * factor)
                });
            }
            None => {
                let ray = cast_from_controller(scene, controller.node);
                if let Some(hit) = first_hit(scene, &ray, scene.children(self.world.group)) {
                    scale_around_point(scene, self.world.pivot, hit.point, factor);
                }
            }
        }
    }

    fn pan_world(
        &mut self,
        scene: &mut Scene,
        role: ControllerRole,
        snapshot: &ControllerSnapshot,
        config: &InteractionConfig,
    ) {
        let (_scale, rotation, _translation) = scene
            .world_matrix(self.controller(role).node)
            .to_scale_rotation_translation();
        let direction = rotation * Vec3::NEG_Z;
        let distance = snapshot.vertical_axis() * config.move_speed;

        scene.update_object_transform(self.world.pivot, |transform| {
            transform.translate_on_axis(direction, distance)
        });
    }

    fn highlight(&mut self, scene: &mut Scene, role: ControllerRole, config: &InteractionConfig) {
        let controller = &mut self.controllers[role.index()];
        if controller.is_holding() {
            return;
        }

        let ray = cast_from_controller(scene, controller.node);
        match first_hit(scene, &ray, scene.children(self.world.group)) {
            Some(hit) => {
                if let Some(object) = scene.get_object_mut(hit.object) {
                    object.material.emissive.x = config.highlight;
                }
                self.intersected.push(hit.object);
                controller.beam.length = hit.distance;
            }
            None => controller.beam.length = config.long_beam,
        }
    }
}

fn random_color() -> u32 {
    rand::random::<u32>() & 0xffffff
}
