use host_headless::{ChaseInput, Driver, FixedStepClock, NullRenderer, ScriptedInput};
use match_core::{Config, InputSnapshot, Key, Phase};

#[test]
fn test_driver_renders_every_frame_before_start() {
    let mut driver = Driver::new(
        Config::new(),
        1,
        FixedStepClock::sixty_hz(),
        ScriptedInput::default(),
        NullRenderer::default(),
    );

    driver.run_frames(10);

    assert_eq!(driver.renderer.frames, 10, "NotStarted frames still render");
    assert_eq!(driver.state.phase, Phase::NotStarted);
}

#[test]
fn test_scripted_confirm_starts_match() {
    let script = ScriptedInput::new([InputSnapshot::new().with(Key::Confirm)]);
    let mut driver = Driver::new(
        Config::new(),
        1,
        FixedStepClock::sixty_hz(),
        script,
        NullRenderer::default(),
    );

    driver.run_frames(5);

    assert_eq!(driver.state.phase, Phase::Active);
    assert_ne!(
        driver.state.ball.pos,
        glam::Vec2::ZERO,
        "Ball is in flight once the match is running"
    );
}

#[test]
fn test_driver_renders_while_finished() {
    let mut driver = Driver::new(
        Config::new(),
        1,
        FixedStepClock::sixty_hz(),
        ScriptedInput::default(),
        NullRenderer::default(),
    );
    driver.state.phase = Phase::Finished;

    driver.run_frames(7);

    assert_eq!(driver.renderer.frames, 7, "Finished frames still render");
    assert_eq!(
        driver.state.phase,
        Phase::Finished,
        "No confirm edge, no restart"
    );
}

#[test]
fn test_synthetic_players_finish_a_classic_match() {
    let mut driver = Driver::new(
        Config::default(),
        12345,
        FixedStepClock::sixty_hz(),
        ChaseInput::both(),
        NullRenderer::default(),
    );

    let mut frames = 0usize;
    driver.run_until(|_state, events| {
        frames += 1;
        events.match_finished || frames >= 300_000
    });

    assert!(
        driver.events.match_finished,
        "Match should finish within the frame budget"
    );
    assert_eq!(driver.state.phase, Phase::Finished);
    let score = driver.state.score;
    assert!(
        score.left == 4 || score.right == 4,
        "One side reached the threshold, got {} : {}",
        score.left,
        score.right
    );
    assert!(driver.events.winner.is_some());
}
