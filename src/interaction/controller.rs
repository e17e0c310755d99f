use std::collections::VecDeque;

use anyhow::ensure;
use glam::{Quat, Vec3};
use itertools::Itertools;

use crate::interaction::palette::Palette;
use crate::scene_graph::ObjectId;

/// Only the two most recent samples feed the release velocity.
const POSITION_HISTORY_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControllerRole {
    /// Carries the palette, shrinks with grip.
    Primary,
    /// Picks from the palette, grows with grip.
    Secondary,
}

impl ControllerRole {
    pub const ALL: [ControllerRole; 2] = [ControllerRole::Primary, ControllerRole::Secondary];

    pub fn index(self) -> usize {
        match self {
            ControllerRole::Primary => 0,
            ControllerRole::Secondary => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEvent {
    TriggerDown,
    TriggerUp,
    MenuDown,
    MenuUp,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonState {
    pub trigger: bool,
    pub grip: bool,
    pub menu: bool,
    pub thumbpad: bool,
}

/// Discrete edges between two polled button states, in a fixed order.
pub fn edge_events(before: ButtonState, now: ButtonState) -> Vec<ButtonEvent> {
    let mut events = Vec::new();

    if now.trigger != before.trigger {
        events.push(if now.trigger {
            ButtonEvent::TriggerDown
        } else {
            ButtonEvent::TriggerUp
        });
    }
    if now.menu != before.menu {
        events.push(if now.menu {
            ButtonEvent::MenuDown
        } else {
            ButtonEvent::MenuUp
        });
    }

    events
}

/// Tracking and button state of one controller for one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerSnapshot {
    pub position: Vec3,
    pub orientation: Quat,
    pub buttons: ButtonState,
    /// Analog axes, index 1 is the vertical thumbpad axis.
    pub axes: Vec<f32>,
    /// Edges queued by the input layer since the previous tick.
    pub events: Vec<ButtonEvent>,
}

impl ControllerSnapshot {
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
            buttons: ButtonState::default(),
            axes: vec![0.0, 0.0],
            events: Vec::new(),
        }
    }

    pub fn with_buttons(mut self, buttons: ButtonState) -> Self {
        self.buttons = buttons;
        self
    }

    pub fn with_event(mut self, event: ButtonEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn with_vertical_axis(mut self, value: f32) -> Self {
        if self.axes.len() < 2 {
            self.axes.resize(2, 0.0);
        }
        self.axes[1] = value;
        self
    }

    pub fn vertical_axis(&self) -> f32 {
        self.axes.get(1).copied().unwrap_or(0.0)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.position.is_finite(),
            "non-finite controller position {}",
            self.position
        );
        ensure!(
            self.orientation.is_finite() && self.orientation.length_squared() > 1e-6,
            "degenerate controller orientation {}",
            self.orientation
        );
        ensure!(
            self.axes.iter().all(|axis| axis.is_finite()),
            "non-finite controller axes {:?}",
            self.axes
        );

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Beam {
    pub visible: bool,
    pub length: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    Holding(ObjectId),
}

/// An object let go by a controller, with the velocity it was thrown at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Release {
    pub object: ObjectId,
    pub velocity: Option<Vec3>,
}

pub struct ControllerState {
    pub role: ControllerRole,
    /// Scene node following the tracked pose, parent of a held object.
    pub node: ObjectId,
    pub beam: Beam,
    pub palette: Option<Palette>,
    selected: Option<ObjectId>,
    /// Most recent world position first.
    position_history: VecDeque<Vec3>,
}

impl ControllerState {
    pub fn new(role: ControllerRole, node: ObjectId, beam: Beam) -> Self {
        Self {
            role,
            node,
            beam,
            palette: None,
            selected: None,
            position_history: VecDeque::with_capacity(POSITION_HISTORY_LEN),
        }
    }

    pub fn state(&self) -> InteractionState {
        match self.selected {
            Some(object) => InteractionState::Holding(object),
            None => InteractionState::Idle,
        }
    }

    pub fn selected(&self) -> Option<ObjectId> {
        self.selected
    }

    pub fn is_holding(&self) -> bool {
        self.selected.is_some()
    }

    pub fn begin_hold(&mut self, object: ObjectId) {
        self.selected = Some(object);
        self.position_history.clear();
    }

    pub fn record_position(&mut self, position: Vec3) {
        self.position_history.push_front(position);
        self.position_history.truncate(POSITION_HISTORY_LEN);
    }

    /// Leaves `Holding`. The velocity is the difference of the two most recent
    /// samples, or `None` if fewer than two were recorded.
    pub fn end_hold(&mut self) -> Option<Release> {
        let object = self.selected.take()?;
        let velocity = self
            .position_history
            .iter()
            .next_tuple()
            .map(|(latest, previous)| *latest - *previous);
        self.position_history.clear();

        Some(Release { object, velocity })
    }

    pub fn palette_visible(&self) -> bool {
        self.palette
            .as_ref()
            .is_some_and(|palette| palette.is_visible())
    }
}
