use glam::Vec2;

use crate::config::{Config, ServePolicy};
use crate::params::Params;
use crate::resources::MatchRng;

/// Which player a paddle belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Paddle - a player's bat
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub size: Vec2,
    pub color: [f32; 4],
}

impl Paddle {
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            pos: Vec2::new(config.paddle_x(side), 0.0),
            size: Vec2::new(config.paddle_width, config.paddle_height),
            color: Params::PADDLE_COLOR,
        }
    }

    pub fn half_height(&self) -> f32 {
        self.size.y / 2.0
    }
}

/// Ball - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub color: [f32; 4],
}

impl Ball {
    pub fn new(config: &Config) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: config.serve_velocity,
            size: Vec2::new(config.ball_width, config.ball_height),
            color: Params::BALL_COLOR,
        }
    }

    /// Reset to field center with a serve velocity per the configured policy
    pub fn serve(&mut self, config: &Config, rng: &mut MatchRng) {
        self.pos = Vec2::ZERO;
        self.vel = match config.serve_policy {
            ServePolicy::Fixed(vel) => vel,
            ServePolicy::RandomizedNonZero => {
                use rand::Rng;
                let sign = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
                let mut vx = rng.0.gen_range(0..=Params::SERVE_MAX_COMPONENT) as f32;
                let vy = rng.0.gen_range(0..=Params::SERVE_MAX_COMPONENT) as f32;
                // a dead horizontal serve would never reach a goal line
                if vx == 0.0 {
                    vx = 1.0;
                }
                Vec2::new(vx * sign, vy * sign)
            }
        };
    }

    pub fn half_width(&self) -> f32 {
        self.size.x / 2.0
    }

    pub fn half_height(&self) -> f32 {
        self.size.y / 2.0
    }
}

/// Static center-line element; rendered, never simulated
#[derive(Debug, Clone, Copy)]
pub struct MiddleLine {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: [f32; 4],
}

impl MiddleLine {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            size: Params::MIDDLE_LINE_SIZE,
            color: Params::MIDDLE_LINE_COLOR,
        }
    }
}

impl Default for MiddleLine {
    fn default() -> Self {
        Self::new()
    }
}
