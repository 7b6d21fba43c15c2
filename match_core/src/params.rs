use glam::Vec2;

/// Tuning parameters for the classic match profile
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Paddles
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_STEP: f32 = 5.0;
    pub const PADDLE_MARGIN: f32 = 50.0; // goal line to paddle center

    // Ball
    pub const BALL_WIDTH: f32 = 20.0;
    pub const BALL_HEIGHT: f32 = 20.0;
    pub const SERVE_VELOCITY: Vec2 = Vec2::new(4.0, 4.0);
    pub const SERVE_MAX_COMPONENT: i32 = 5;
    pub const SPEED_RAMP: f32 = 1.001; // per tick, uncapped

    // Match
    pub const WIN_THRESHOLD: u8 = 4;
    pub const MIN_TICK_INTERVAL_MS: f64 = 0.0;

    // Middle line (render-only)
    pub const MIDDLE_LINE_SIZE: Vec2 = Vec2::new(1.0, 6000.0);

    // Colors (RGBA)
    pub const PADDLE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BALL_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const MIDDLE_LINE_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
