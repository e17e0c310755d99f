//! Interaction core for a room-scale VR sandbox: two tracked controllers pick,
//! throw and scale objects, and pan and zoom the world through a pivot node.

pub mod animation;
pub mod config;
pub mod engine;
pub mod interaction;
pub mod math;
pub mod playback;
pub mod sandbox;
pub mod scene_graph;

pub use config::InteractionConfig;
pub use sandbox::Sandbox;
