use glam::Vec2;

use crate::components::Side;
use crate::params::Params;

/// How the ball is served after a point
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ServePolicy {
    /// Same velocity after every point
    Fixed(Vec2),
    /// Per-axis magnitude rolled in 0..=5, one coin flip picks the shared
    /// sign; a rolled-zero horizontal component is forced to 1 so the ball
    /// never stalls
    RandomizedNonZero,
}

/// Match configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_step: f32,
    pub paddle_margin: f32,
    pub ball_width: f32,
    pub ball_height: f32,
    pub serve_velocity: Vec2,
    pub speed_ramp: f32,
    /// `None` plays an endless match that never reaches Finished
    pub win_threshold: Option<u8>,
    pub serve_policy: ServePolicy,
    pub min_tick_interval_ms: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_step: Params::PADDLE_STEP,
            paddle_margin: Params::PADDLE_MARGIN,
            ball_width: Params::BALL_WIDTH,
            ball_height: Params::BALL_HEIGHT,
            serve_velocity: Params::SERVE_VELOCITY,
            speed_ramp: Params::SPEED_RAMP,
            win_threshold: Some(Params::WIN_THRESHOLD),
            serve_policy: ServePolicy::RandomizedNonZero,
            min_tick_interval_ms: Params::MIN_TICK_INTERVAL_MS,
        }
    }
}

impl Config {
    /// Classic profile: first to 4, randomized serve
    pub fn new() -> Self {
        Self::default()
    }

    /// Simpler profile: no winner, fixed serve velocity
    pub fn endless() -> Self {
        Self {
            win_threshold: None,
            serve_policy: ServePolicy::Fixed(Params::SERVE_VELOCITY),
            ..Self::default()
        }
    }

    /// Get X position for a paddle's center
    pub fn paddle_x(&self, side: Side) -> f32 {
        let offset = self.field_width / 2.0 - self.paddle_margin;
        match side {
            Side::Left => -offset,
            Side::Right => offset,
        }
    }

    /// Vertical bound for paddle centers
    pub fn paddle_bound(&self) -> f32 {
        self.field_height / 2.0 - self.paddle_step
    }

    /// Clamp a paddle Y to the field's vertical bound
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let bound = self.paddle_bound();
        y.clamp(-bound, bound)
    }

    /// |ball.y| at which the ball touches a wall
    pub fn wall_limit(&self) -> f32 {
        self.field_height / 2.0 - self.ball_height / 2.0
    }

    /// |ball.x| at which the ball crosses a goal line
    pub fn goal_line(&self) -> f32 {
        self.field_width / 2.0 - self.ball_width / 2.0
    }
}
