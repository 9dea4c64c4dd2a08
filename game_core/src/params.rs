/// Game tuning parameters for Pong
///
/// Distances are canvas pixels, speeds are pixels per second.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 300.0; // 5 px per frame at 60fps

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED_INITIAL: f32 = 240.0; // 4 px per frame at 60fps
    pub const BALL_SPEED_INCREMENT: f32 = 30.0; // Added on every paddle hit
    pub const BALL_MAX_BOUNCE_ANGLE: f32 = 0.785; // ~45 degrees
    pub const TRAIL_LENGTH: usize = 12;
    pub const MAX_TRAIL_LENGTH: usize = 256;
    pub const SERVE_DELAY: f32 = 0.75;

    // AI tracking factor per 1/60s frame
    pub const AI_FACTOR_EASY: f32 = 0.04;
    pub const AI_FACTOR_NORMAL: f32 = 0.08;
    pub const AI_FACTOR_HARD: f32 = 0.14;

    // Power-ups
    pub const POWERUP_RADIUS: f32 = 14.0;
    pub const POWERUP_INTERVAL: f32 = 10.0;
    pub const POWERUP_DURATION: f32 = 5.0;
    pub const POWERUP_SPEED_BOOST: f32 = 1.6;
    pub const POWERUP_FIELD_MARGIN: f32 = 150.0; // Keep spawns away from the goal lines

    // Score
    pub const WIN_SCORE: u8 = 5;
    pub const ROUNDS_TO_WIN: u8 = 2; // Best of three

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 60.0;
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
