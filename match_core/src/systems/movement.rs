use crate::components::{Ball, Paddle};
use crate::config::Config;
use crate::input::{InputSnapshot, Key};

/// Step paddles from held keys, clamped to the field's vertical bound.
/// Right paddle moves on Up/Down, left on W/S.
pub fn move_paddles(
    left: &mut Paddle,
    right: &mut Paddle,
    input: &InputSnapshot,
    config: &Config,
) {
    step_paddle(right, input.is_held(Key::Up), input.is_held(Key::Down), config);
    step_paddle(left, input.is_held(Key::W), input.is_held(Key::S), config);
}

fn step_paddle(paddle: &mut Paddle, up: bool, down: bool, config: &Config) {
    if up {
        paddle.pos.y = config.clamp_paddle_y(paddle.pos.y + config.paddle_step);
    }
    if down {
        paddle.pos.y = config.clamp_paddle_y(paddle.pos.y - config.paddle_step);
    }
}

/// Per-tick rally acceleration; uncapped on purpose (see `Config::speed_ramp`)
pub fn apply_speed_ramp(ball: &mut Ball, config: &Config) {
    ball.vel *= config.speed_ramp;
}

/// Explicit Euler step. The wall band is re-applied afterwards so the ball
/// never ends a frame beyond it.
pub fn integrate_ball(ball: &mut Ball, config: &Config) {
    ball.pos += ball.vel;
    let limit = config.wall_limit();
    ball.pos.y = ball.pos.y.clamp(-limit, limit);
}
