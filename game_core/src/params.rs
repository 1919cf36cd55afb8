/// Game tuning parameters, in pixels and pixels per frame
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Surface
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 500.0;

    // Paddle (portrait)
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 80.0;
    pub const PADDLE_MARGIN: f32 = 30.0;
    pub const PADDLE_SPEED: f32 = 6.0;

    // Ball
    pub const BALL_SIZE: f32 = 24.0;
    pub const BALL_SPEED: f32 = 6.0;

    // AI
    pub const AI_DEAD_ZONE: f32 = 10.0;
}
