use std::time::Duration;

use crate::interaction::{ControllerRole, ControllerSnapshot, TickReport};
use crate::sandbox::Sandbox;

/// Tracked controller state, polled once per frame per controller.
pub trait InputSource {
    /// `None` when tracking for `role` is lost this frame.
    fn poll(&mut self, role: ControllerRole, frame: u64) -> Option<ControllerSnapshot>;
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionStats {
    pub frames: u64,
    pub trails: usize,
    /// Objects that came to rest after a throw.
    pub settled: usize,
    pub skipped: usize,
    /// Most objects coasting at once.
    pub peak_moving: usize,
}

pub fn update(
    sandbox: &mut Sandbox,
    source: &mut impl InputSource,
    time: Duration,
) -> TickReport {
    let frame = sandbox.frame();
    let snapshots = ControllerRole::ALL.map(|role| source.poll(role, frame));
    sandbox.tick(&snapshots, time)
}

/// Drives `frames` ticks at a fixed `frame_time`, standing in for the display loop.
pub fn run(
    sandbox: &mut Sandbox,
    source: &mut impl InputSource,
    frames: u64,
    frame_time: Duration,
) -> SessionStats {
    let mut stats = SessionStats::default();

    for _ in 0..frames {
        let time = Duration::from_secs_f64(frame_time.as_secs_f64() * sandbox.frame() as f64);
        let report = update(sandbox, source, time);

        stats.frames += 1;
        stats.trails += report.motion.trails.len();
        stats.settled += report.motion.settled;
        stats.skipped += report.skipped;
        stats.peak_moving = stats.peak_moving.max(report.motion.moving);
    }

    stats
}
