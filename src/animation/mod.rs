pub mod tween;

pub use tween::{Easing, Lerp, Tween};
