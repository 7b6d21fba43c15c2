use match_core::{tick, Config, Events, Frame, InputSnapshot, MatchRng, MatchState};

/// Issues drawing side effects for one frame. Nothing is returned to the
/// loop.
pub trait Renderer {
    fn render(&mut self, frame: &Frame<'_>);
}

/// Samples the host's input device once per frame.
///
/// Most sources ignore `state`; synthetic players read it to aim. Either
/// way the source only observes, it never writes loop state.
pub trait InputSource {
    fn snapshot(&mut self, state: &MatchState) -> InputSnapshot;
}

/// Blocks until the next display refresh and returns its timestamp in
/// milliseconds. Timestamps must increase monotonically.
pub trait FrameClock {
    fn next_frame(&mut self) -> f64;
}

/// Cooperative frame driver.
///
/// Each frame is one bounded turn: wait for the clock, sample input, tick,
/// hand the frame to the renderer. The renderer runs in every phase —
/// Finished frames keep drawing with physics skipped. The loop itself has no
/// stop condition; callers bound it with [`Driver::run_frames`] or
/// [`Driver::run_until`].
pub struct Driver<C, I, R> {
    pub clock: C,
    pub input: I,
    pub renderer: R,
    pub config: Config,
    pub state: MatchState,
    pub events: Events,
    pub rng: MatchRng,
}

impl<C: FrameClock, I: InputSource, R: Renderer> Driver<C, I, R> {
    pub fn new(config: Config, seed: u64, clock: C, input: I, renderer: R) -> Self {
        let state = MatchState::new(&config);
        Self {
            clock,
            input,
            renderer,
            config,
            state,
            events: Events::new(),
            rng: MatchRng::new(seed),
        }
    }

    /// Run exactly one frame
    pub fn run_frame(&mut self) {
        let now_ms = self.clock.next_frame();
        let snapshot = self.input.snapshot(&self.state);
        tick(
            &mut self.state,
            &self.config,
            &snapshot,
            now_ms,
            &mut self.events,
            &mut self.rng,
        );
        self.renderer.render(&self.state.frame());
    }

    /// Drive a fixed number of frames
    pub fn run_frames(&mut self, frames: usize) {
        for _ in 0..frames {
            self.run_frame();
        }
    }

    /// Drive frames until `stop` returns true for the frame just completed
    pub fn run_until(&mut self, mut stop: impl FnMut(&MatchState, &Events) -> bool) {
        loop {
            self.run_frame();
            if stop(&self.state, &self.events) {
                break;
            }
        }
    }
}
