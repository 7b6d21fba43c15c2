//! Demo host: two synthetic players play one classic match to its finish,
//! reported through the logger.
//!
//! Usage: `host_headless [seed] [--realtime]`. The default clock steps at a
//! simulated 60 Hz without sleeping; `--realtime` paces frames on the wall
//! clock instead. `RUST_LOG=debug` shows per-frame positions.

use host_headless::{ChaseInput, Driver, FixedStepClock, FrameClock, LogRenderer, RefreshClock};
use log::info;
use match_core::Config;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut seed = 12345u64;
    let mut realtime = false;
    for arg in std::env::args().skip(1) {
        if arg == "--realtime" {
            realtime = true;
        } else if let Ok(parsed) = arg.parse() {
            seed = parsed;
        }
    }

    info!("starting match, seed {}", seed);
    if realtime {
        run_match(RefreshClock::new(60.0), seed);
    } else {
        run_match(FixedStepClock::sixty_hz(), seed);
    }
}

fn run_match<C: FrameClock>(clock: C, seed: u64) {
    let mut driver = Driver::new(
        Config::default(),
        seed,
        clock,
        ChaseInput::both(),
        LogRenderer::default(),
    );

    // the loop itself has no stop condition; bound the demo anyway
    let mut frames = 0usize;
    driver.run_until(|_state, events| {
        frames += 1;
        events.match_finished || frames >= 500_000
    });

    let score = driver.state.score;
    info!(
        "match over: {:?} wins {} : {}",
        driver.events.winner, score.left, score.right
    );
}
