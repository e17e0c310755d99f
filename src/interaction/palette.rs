use std::time::Duration;

use glam::{EulerRot, Quat, Vec3};

use crate::animation::{Easing, Tween};
use crate::config::InteractionConfig;
use crate::scene_graph::{ObjectId, Scene};

/// Shape picker attached to the primary controller. Shown and hidden by
/// tweening its scale and rotation; one tween per property, restarting one
/// cancels the previous.
pub struct Palette {
    pub node: ObjectId,
    pub shape_library: ObjectId,
    /// Euler XYZ angles, the value the rotation tween animates.
    rotation: Vec3,
    visible: bool,
    scale_tween: Option<Tween<f32>>,
    rotation_tween: Option<Tween<Vec3>>,
}

impl Palette {
    /// Wraps an already built palette node and applies the hidden pose to it.
    pub fn hidden(
        scene: &mut Scene,
        node: ObjectId,
        shape_library: ObjectId,
        config: &InteractionConfig,
    ) -> Self {
        let rotation = config.palette_hidden_rotation;
        scene.update_object_transform(node, |transform| {
            transform.set_scale(config.palette_hidden_scale);
            transform.set_rotation(euler_to_quat(rotation));
        });

        Self {
            node,
            shape_library,
            rotation,
            visible: false,
            scale_tween: None,
            rotation_tween: None,
        }
    }

    /// True while the palette is shown or still shrinking away.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn show(&mut self, scene: &Scene, config: &InteractionConfig, now: Duration) {
        log::debug!("Showing palette");
        self.visible = true;
        self.start(
            scene,
            config.palette_shown_scale,
            config.palette_shown_rotation,
            config.palette_tween,
            now,
        );
    }

    pub fn hide(&mut self, scene: &Scene, config: &InteractionConfig, now: Duration) {
        log::debug!("Hiding palette");
        self.start(
            scene,
            config.palette_hidden_scale,
            config.palette_hidden_rotation,
            config.palette_tween,
            now,
        );
    }

    fn start(
        &mut self,
        scene: &Scene,
        scale: f32,
        rotation: Vec3,
        duration: Duration,
        now: Duration,
    ) {
        let current_scale = scene
            .get_object_transform(self.node)
            .map(|transform| transform.scale())
            .unwrap_or(scale);

        // Replacing the slots drops any tween still in flight.
        self.scale_tween = Some(Tween::new(
            current_scale,
            scale,
            now,
            duration,
            Easing::QuadraticOut,
        ));
        self.rotation_tween = Some(Tween::new(
            self.rotation,
            rotation,
            now,
            duration,
            Easing::QuadraticOut,
        ));
    }

    /// Writes the current tween values to the palette node and retires
    /// finished tweens.
    pub fn advance(&mut self, scene: &mut Scene, config: &InteractionConfig, now: Duration) {
        if let Some(tween) = &self.scale_tween {
            let scale = tween.value_at(now);
            scene.set_object_scale(self.node, scale);

            if tween.is_finished(now) {
                if tween.target() <= config.palette_hidden_scale {
                    self.visible = false;
                }
                self.scale_tween = None;
            }
        }

        if let Some(tween) = &self.rotation_tween {
            self.rotation = tween.value_at(now);
            scene.set_object_rotation(self.node, euler_to_quat(self.rotation));

            if tween.is_finished(now) {
                self.rotation_tween = None;
            }
        }
    }
}

fn euler_to_quat(angles: Vec3) -> Quat {
    Quat::from_euler(EulerRot::XYZ, angles.x, angles.y, angles.z)
}
