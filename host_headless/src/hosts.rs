//! Stock collaborator implementations: deterministic and wall-clock frame
//! clocks, scripted and synthetic input sources, and renderers for headless
//! runs.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use log::{debug, info};
use match_core::{Frame, InputSnapshot, Key, MatchState, Phase};

use crate::driver::{FrameClock, InputSource, Renderer};

/// Deterministic clock: advances a fixed step per frame without waiting
pub struct FixedStepClock {
    now_ms: f64,
    step_ms: f64,
}

impl FixedStepClock {
    pub fn new(step_ms: f64) -> Self {
        Self {
            now_ms: 0.0,
            step_ms,
        }
    }

    /// 60 frames per second
    pub fn sixty_hz() -> Self {
        Self::new(1000.0 / 60.0)
    }
}

impl FrameClock for FixedStepClock {
    fn next_frame(&mut self) -> f64 {
        self.now_ms += self.step_ms;
        self.now_ms
    }
}

/// Wall clock pacing frames to a target refresh rate by sleeping until each
/// frame's deadline
pub struct RefreshClock {
    start: Instant,
    frame: Duration,
    deadline: Duration,
}

impl RefreshClock {
    pub fn new(refresh_hz: f64) -> Self {
        Self {
            start: Instant::now(),
            frame: Duration::from_secs_f64(1.0 / refresh_hz),
            deadline: Duration::ZERO,
        }
    }
}

impl FrameClock for RefreshClock {
    fn next_frame(&mut self) -> f64 {
        self.deadline += self.frame;
        let elapsed = self.start.elapsed();
        if elapsed < self.deadline {
            std::thread::sleep(self.deadline - elapsed);
        }
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

/// Replays a prerecorded snapshot per frame; an exhausted script holds
/// nothing down
#[derive(Default)]
pub struct ScriptedInput {
    frames: VecDeque<InputSnapshot>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputSnapshot>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn snapshot(&mut self, _state: &MatchState) -> InputSnapshot {
        self.frames.pop_front().unwrap_or_default()
    }
}

/// Synthetic player: holds whichever key moves a paddle toward the ball,
/// and holds Confirm whenever the match is waiting for one
pub struct ChaseInput {
    left: bool,
    right: bool,
    deadband: f32,
}

impl ChaseInput {
    pub fn both() -> Self {
        Self {
            left: true,
            right: true,
            deadband: 6.0,
        }
    }

    pub fn left_only() -> Self {
        Self {
            left: true,
            right: false,
            deadband: 6.0,
        }
    }

    pub fn right_only() -> Self {
        Self {
            left: false,
            right: true,
            deadband: 6.0,
        }
    }
}

impl InputSource for ChaseInput {
    fn snapshot(&mut self, state: &MatchState) -> InputSnapshot {
        let mut snap = InputSnapshot::new();
        if !state.phase.is_active() {
            snap.press(Key::Confirm);
            return snap;
        }

        let target = state.ball.pos.y;
        if self.right {
            let dy = target - state.paddle_right.pos.y;
            if dy > self.deadband {
                snap.press(Key::Up);
            } else if dy < -self.deadband {
                snap.press(Key::Down);
            }
        }
        if self.left {
            let dy = target - state.paddle_left.pos.y;
            if dy > self.deadband {
                snap.press(Key::W);
            } else if dy < -self.deadband {
                snap.press(Key::S);
            }
        }
        snap
    }
}

/// Renderer that draws nothing; counts frames so harnesses can assert the
/// loop rendered in every phase
#[derive(Default)]
pub struct NullRenderer {
    pub frames: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, _frame: &Frame<'_>) {
        self.frames += 1;
    }
}

/// Renders through the `log` crate: positions per frame at debug level,
/// score and phase changes at info level
#[derive(Default)]
pub struct LogRenderer {
    last_score: (u8, u8),
    last_phase: Option<Phase>,
}

impl Renderer for LogRenderer {
    fn render(&mut self, frame: &Frame<'_>) {
        debug!(
            "ball ({:6.1}, {:6.1}) vel ({:5.2}, {:5.2}) paddles L {:6.1} R {:6.1}",
            frame.ball.pos.x,
            frame.ball.pos.y,
            frame.ball.vel.x,
            frame.ball.vel.y,
            frame.paddle_left.pos.y,
            frame.paddle_right.pos.y,
        );

        let score = (frame.score_left, frame.score_right);
        if score != self.last_score {
            info!("score {} : {}", score.0, score.1);
            self.last_score = score;
        }
        if self.last_phase != Some(frame.phase) {
            info!("phase {:?}", frame.phase);
            self.last_phase = Some(frame.phase);
        }
    }
}
