//! Scripted controller input for running the sandbox without a headset.

use std::f32::consts::FRAC_PI_2;
use std::ops::Range;

use glam::{Quat, Vec3};

use crate::engine::InputSource;
use crate::interaction::{edge_events, ButtonState, ControllerRole, ControllerSnapshot};

const GRAB: Range<u64> = 30..45;
const SWING_STEP: f32 = 0.02;
const MENU: Range<u64> = 60..140;
const REACH_PALETTE: Range<u64> = 90..120;
const PALETTE_GRAB: Range<u64> = 100..115;
const TRACKING_LOST: Range<u64> = 130..134;
const ZOOM: Range<u64> = 150..200;
const PAN: Range<u64> = 200..230;

/// One throw with the secondary controller, a palette pick while the primary
/// holds the menu button, then a world zoom and pan from the primary.
pub struct ScriptedSession {
    previous: [ButtonState; 2],
}

impl ScriptedSession {
    pub const LENGTH: u64 = 400;

    pub fn new() -> Self {
        Self {
            previous: [ButtonState::default(); 2],
        }
    }

    fn primary(&self, frame: u64) -> (Vec3, Quat, ButtonState, f32) {
        let buttons = ButtonState {
            menu: MENU.contains(&frame),
            grip: ZOOM.contains(&frame),
            thumbpad: PAN.contains(&frame),
            ..Default::default()
        };
        let axis = if PAN.contains(&frame) { 0.5 } else { 0.0 };
        (Vec3::new(0.1, 0.5, 1.0), Quat::IDENTITY, buttons, axis)
    }

    fn secondary(&self, frame: u64) -> (Vec3, Quat, ButtonState, f32) {
        if REACH_PALETTE.contains(&frame) {
            // Hover above the first palette shape, pointing down.
            let buttons = ButtonState {
                trigger: PALETTE_GRAB.contains(&frame),
                ..Default::default()
            };
            return (
                Vec3::new(0.35, 0.9, 1.0),
                Quat::from_rotation_x(-FRAC_PI_2),
                buttons,
                0.0,
            );
        }

        let swing = frame.clamp(GRAB.start, GRAB.end) - GRAB.start;
        let position = Vec3::new(swing as f32 * SWING_STEP, 0.5, 1.0);
        let buttons = ButtonState {
            trigger: GRAB.contains(&frame),
            ..Default::default()
        };
        (position, Quat::IDENTITY, buttons, 0.0)
    }
}

impl Default for ScriptedSession {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for ScriptedSession {
    fn poll(&mut self, role: ControllerRole, frame: u64) -> Option<ControllerSnapshot> {
        if role == ControllerRole::Secondary && TRACKING_LOST.contains(&frame) {
            return None;
        }

        let (position, orientation, buttons, axis) = match role {
            ControllerRole::Primary => self.primary(frame),
            ControllerRole::Secondary => self.secondary(frame),
        };

        let before = std::mem::replace(&mut self.previous[role.index()], buttons);
        let mut snapshot = ControllerSnapshot::new(position, orientation)
            .with_buttons(buttons)
            .with_vertical_axis(axis);
        snapshot.events = edge_events(before, buttons);

        Some(snapshot)
    }
}
