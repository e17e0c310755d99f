use std::time::Duration;

use anyhow::Result;

use vrsandbox::engine;
use vrsandbox::playback::ScriptedSession;
use vrsandbox::Sandbox;

const FRAME_TIME: Duration = Duration::from_micros(11_111);

fn main() -> Result<()> {
    pretty_env_logger::init();

    let mut sandbox = Sandbox::new()?;
    let mut session = ScriptedSession::new();
    let stats = engine::run(
        &mut sandbox,
        &mut session,
        ScriptedSession::LENGTH,
        FRAME_TIME,
    );

    let world = sandbox.world();
    let pivot = sandbox
        .scene
        .get_object_transform(world.pivot)
        .map(|transform| (transform.translation(), transform.scale()));

    log::info!(
        "Ran {} frames: {} objects in the world, {} trail clones, {} controller frames skipped",
        stats.frames,
        sandbox.scene.children(world.group).len(),
        stats.trails,
        stats.skipped
    );
    log::info!(
        "{} throws came to rest, at most {} objects coasting at once",
        stats.settled,
        stats.peak_moving
    );
    if let Some((translation, scale)) = pivot {
        log::info!("World pivot at {} with scale {:.3}", translation, scale);
    }

    Ok(())
}
