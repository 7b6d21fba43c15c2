use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::resources::Events;

/// Bounce off the top/bottom walls: invert the vertical velocity and clamp
/// the ball exactly to the boundary
pub fn check_wall_collision(ball: &mut Ball, config: &Config, events: &mut Events) {
    let limit = config.wall_limit();
    if ball.pos.y.abs() >= limit {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = limit.copysign(ball.pos.y);
        events.ball_hit_wall = true;
    }
}

/// Invert the horizontal velocity when the ball sits inside a paddle's
/// collision band: one paddle width deep, on the side facing the field
/// center, over the paddle's vertical extent.
pub fn check_paddle_collision(ball: &mut Ball, paddle: &Paddle, events: &mut Events) {
    let (band_min, band_max) = match paddle.side {
        Side::Left => (paddle.pos.x, paddle.pos.x + paddle.size.x),
        Side::Right => (paddle.pos.x - paddle.size.x, paddle.pos.x),
    };

    let within_band = ball.pos.x >= band_min && ball.pos.x <= band_max;
    let within_extent = (ball.pos.y - paddle.pos.y).abs() <= paddle.half_height();

    if within_band && within_extent {
        ball.vel.x = -ball.vel.x;
        events.ball_hit_paddle = true;
    }
}
