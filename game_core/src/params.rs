/// Game tuning parameters for Pong
///
/// Distances are in court units (pixels of the reference canvas), speeds in
/// units per tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court
    pub const COURT_WIDTH: f64 = 800.0;
    pub const COURT_HEIGHT: f64 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f64 = 14.0;
    pub const PADDLE_HEIGHT: f64 = 120.0;
    pub const PADDLE_MARGIN: f64 = 34.0;
    pub const OPPONENT_SPEED: f64 = 9.0;
    pub const PLAYER_EASING: f64 = 0.19;

    // Ball
    pub const BALL_SIZE: f64 = 18.0;
    pub const BALL_SPEED: f64 = 7.5;
    pub const BALL_MAX_ANGLE: f64 = std::f64::consts::FRAC_PI_4;
    pub const BALL_ACCEL: f64 = 0.08; // Added to speed on every paddle hit

    // Score
    pub const WIN_SCORE: u32 = 7;
}
