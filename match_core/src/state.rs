use crate::components::{Ball, MiddleLine, Paddle, Side};
use crate::config::Config;
use crate::fsm::Phase;
use crate::resources::{MatchRng, Score};

/// The whole of a match, owned as one value and passed explicitly into
/// [`crate::tick`]
#[derive(Debug, Clone)]
pub struct MatchState {
    pub phase: Phase,
    pub paddle_left: Paddle,
    pub paddle_right: Paddle,
    pub ball: Ball,
    pub middle_line: MiddleLine,
    pub score: Score,
    /// Timestamp of the last processed physics tick, ms
    pub last_tick_ms: Option<f64>,
    /// Throttle: physics runs only when this much time has elapsed
    pub min_tick_interval_ms: f64,
    /// Confirm state from the previous frame, for edge detection
    pub(crate) confirm_held: bool,
}

impl MatchState {
    pub fn new(config: &Config) -> Self {
        Self {
            phase: Phase::NotStarted,
            paddle_left: Paddle::new(Side::Left, config),
            paddle_right: Paddle::new(Side::Right, config),
            ball: Ball::new(config),
            middle_line: MiddleLine::new(),
            score: Score::new(),
            last_tick_ms: None,
            min_tick_interval_ms: config.min_tick_interval_ms,
            confirm_held: false,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.paddle_left,
            Side::Right => &self.paddle_right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.paddle_left,
            Side::Right => &mut self.paddle_right,
        }
    }

    /// True when enough time has passed since the last processed tick
    pub(crate) fn tick_due(&self, now_ms: f64) -> bool {
        match self.last_tick_ms {
            Some(last) => now_ms - last >= self.min_tick_interval_ms,
            None => true,
        }
    }

    /// Put entities back to their initial constants, wipe the score, and
    /// serve a fresh ball
    pub(crate) fn reset_for_restart(&mut self, config: &Config, rng: &mut MatchRng) {
        self.score.reset();
        self.paddle_left = Paddle::new(Side::Left, config);
        self.paddle_right = Paddle::new(Side::Right, config);
        self.ball = Ball::new(config);
        self.ball.serve(config, rng);
        self.last_tick_ms = None;
    }

    /// Everything a renderer needs for one frame
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            paddle_left: &self.paddle_left,
            paddle_right: &self.paddle_right,
            ball: &self.ball,
            middle_line: &self.middle_line,
            score_left: self.score.left,
            score_right: self.score.right,
            phase: self.phase,
        }
    }
}

/// Read-only view handed to the renderer after every frame
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub paddle_left: &'a Paddle,
    pub paddle_right: &'a Paddle,
    pub ball: &'a Ball,
    pub middle_line: &'a MiddleLine,
    pub score_left: u8,
    pub score_right: u8,
    pub phase: Phase,
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_new_match_is_at_initial_constants() {
        let config = Config::new();
        let state = MatchState::new(&config);

        assert_eq!(state.phase, Phase::NotStarted);
        assert_eq!(state.score, Score::new());
        assert_eq!(state.ball.pos, Vec2::ZERO);
        assert_eq!(state.paddle_left.pos, Vec2::new(-350.0, 0.0));
        assert_eq!(state.paddle_right.pos, Vec2::new(350.0, 0.0));
        assert_eq!(state.last_tick_ms, None);
    }

    #[test]
    fn test_tick_due_respects_interval() {
        let mut config = Config::new();
        config.min_tick_interval_ms = 100.0;
        let mut state = MatchState::new(&config);

        assert!(state.tick_due(0.0), "First tick is always due");
        state.last_tick_ms = Some(0.0);
        assert!(!state.tick_due(99.0));
        assert!(state.tick_due(100.0), "Interval boundary counts as elapsed");
        assert!(state.tick_due(250.0));
    }

    #[test]
    fn test_restart_resets_everything() {
        let config = Config::new();
        let mut rng = MatchRng::new(3);
        let mut state = MatchState::new(&config);

        state.score.increment(Side::Left);
        state.paddle_left.pos.y = 200.0;
        state.ball.pos = Vec2::new(395.0, -10.0);
        state.last_tick_ms = Some(5000.0);

        state.reset_for_restart(&config, &mut rng);

        assert_eq!(state.score, Score::new());
        assert_eq!(state.paddle_left.pos.y, 0.0);
        assert_eq!(state.ball.pos, Vec2::ZERO);
        assert_eq!(state.last_tick_ms, None);
    }
}
