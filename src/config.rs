use std::f32::consts::PI;
use std::time::Duration;

use anyhow::ensure;
use glam::Vec3;

/// Tuning constants for the interaction core.
#[derive(Debug, Clone)]
pub struct InteractionConfig {
    /// Per-tick grip scale factor. The primary controller applies its inverse.
    pub scale_speed: f32,
    /// World pan distance per tick at full thumbpad deflection.
    pub move_speed: f32,
    /// Velocity is divided by this every tick while an object coasts.
    pub friction: f32,
    /// Speed under which a coasting object comes to rest.
    pub rest_speed: f32,
    /// Ticks between motion-trail clones.
    pub trail_interval: u32,
    pub long_beam: f32,
    pub beams: bool,
    /// Red emissive level of a hovered object.
    pub highlight: f32,
    pub palette_tween: Duration,
    pub palette_shown_scale: f32,
    pub palette_hidden_scale: f32,
    pub palette_shown_rotation: Vec3,
    pub palette_hidden_rotation: Vec3,
}

impl InteractionConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.friction > 1.0,
            "friction must be greater than 1, got {}",
            self.friction
        );
        ensure!(
            self.scale_speed > 0.0,
            "scale_speed must be positive, got {}",
            self.scale_speed
        );
        ensure!(
            self.rest_speed > 0.0,
            "rest_speed must be positive, got {}",
            self.rest_speed
        );
        ensure!(self.trail_interval > 0, "trail_interval must be at least 1");
        ensure!(
            !self.palette_tween.is_zero(),
            "palette_tween must be longer than zero"
        );
        ensure!(
            self.palette_hidden_scale > 0.0 && self.palette_shown_scale > 0.0,
            "palette scales must be positive"
        );

        Ok(())
    }
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            scale_speed: 101.0 / 100.0,
            move_speed: 1.0 / 30.0,
            friction: 100.0 / 98.0,
            rest_speed: 0.001,
            trail_interval: 40,
            long_beam: 5.0,
            beams: true,
            highlight: 0.1,
            palette_tween: Duration::from_millis(200),
            palette_shown_scale: 1.0,
            palette_hidden_scale: 0.001,
            palette_shown_rotation: Vec3::ZERO,
            palette_hidden_rotation: Vec3::new(0.0, PI / 3.0, 0.0),
        }
    }
}
