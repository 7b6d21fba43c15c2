pub mod components;
pub mod config;
pub mod fsm;
pub mod input;
pub mod params;
pub mod resources;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use input::*;
pub use params::*;
pub use resources::*;
pub use state::*;

use systems::*;

/// Advance the match by one host frame.
///
/// Runs the phase machine on the sampled input and, while the match is
/// Active, the physics step, throttled by the minimum tick interval. The
/// host renders `state.frame()` after every call regardless of phase; the
/// tick itself never draws.
pub fn tick(
    state: &mut MatchState,
    config: &Config,
    input: &InputSnapshot,
    now_ms: f64,
    events: &mut Events,
    rng: &mut MatchRng,
) {
    // Clear events at start of frame
    events.clear();

    let confirm_edge = input.is_held(Key::Confirm) && !state.confirm_held;
    state.confirm_held = input.is_held(Key::Confirm);

    match state.phase {
        Phase::NotStarted | Phase::Finished => {
            if confirm_edge {
                if let Some(next) = state.phase.next(MatchAction::Confirm) {
                    if state.phase.is_finished() {
                        state.reset_for_restart(config, rng);
                    }
                    state.phase = next;
                    events.match_started = true;
                }
            }
        }
        Phase::Active => {
            if state.tick_due(now_ms) {
                state.last_tick_ms = Some(now_ms);
                physics_step(state, config, input, events, rng);
            }
        }
    }
}

/// One physics tick, in the fixed order: paddles, wall, paddle collision,
/// scoring, speed ramp, integration
fn physics_step(
    state: &mut MatchState,
    config: &Config,
    input: &InputSnapshot,
    events: &mut Events,
    rng: &mut MatchRng,
) {
    // 1. Move paddles from held keys
    move_paddles(&mut state.paddle_left, &mut state.paddle_right, input, config);

    // 2. Bounce off top/bottom walls
    check_wall_collision(&mut state.ball, config, events);

    // 3. Deflect off paddles
    check_paddle_collision(&mut state.ball, &state.paddle_left, events);
    check_paddle_collision(&mut state.ball, &state.paddle_right, events);

    // 4. Goal lines
    if check_scoring(&mut state.ball, &mut state.score, config, events, rng).is_some() {
        if let Some(winner) = state.score.has_winner(config.win_threshold) {
            if let Some(next) = state.phase.next(MatchAction::WinReached) {
                state.phase = next;
                events.match_finished = true;
                events.winner = Some(winner);
            }
        }
        // Rally over: the fresh serve first moves on the next tick, so the
        // reset position survives the frame
        return;
    }

    // 5. Accelerate the rally
    apply_speed_ramp(&mut state.ball, config);

    // 6. Integrate
    integrate_ball(&mut state.ball, config);
}
