pub mod controller;
pub mod dispatcher;
pub mod motion;
pub mod palette;
pub mod raycast;

pub use controller::{
    edge_events, Beam, ButtonEvent, ButtonState, ControllerRole, ControllerSnapshot,
    ControllerState, InteractionState, Release,
};
pub use dispatcher::{Dispatcher, TickReport};
pub use motion::MotionReport;
pub use palette::Palette;
pub use raycast::Intersection;

use crate::scene_graph::ObjectId;

/// The two nested world nodes: pan and zoom act on `pivot`, manipulable
/// objects live directly under `group`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorldNodes {
    pub pivot: ObjectId,
    pub group: ObjectId,
}
