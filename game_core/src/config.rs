use thiserror::Error;

use crate::{Court, Params, Side};

/// Rejected configuration values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("court dimensions must be positive, got {width}x{height}")]
    InvalidCourt { width: f64, height: f64 },
    #[error("paddle dimensions must be positive, got {width}x{height}")]
    InvalidPaddle { width: f64, height: f64 },
    #[error("paddle height {paddle} does not fit a court {court} tall")]
    PaddleTooTall { paddle: f64, court: f64 },
    #[error("ball size {size} must be positive and smaller than the court")]
    InvalidBall { size: f64 },
    #[error("easing factor {0} must lie in (0, 1]")]
    InvalidEasing(f64),
    #[error("max bounce angle {0} must be finite and lie in [0, pi)")]
    InvalidAngle(f64),
    #[error("{field} must be finite and non-negative, got {value}")]
    InvalidRate { field: &'static str, value: f64 },
    #[error("win score must be at least 1")]
    ZeroWinScore,
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub court_width: f64,
    pub court_height: f64,
    pub paddle_width: f64,
    pub paddle_height: f64,
    pub paddle_margin: f64,
    pub opponent_speed: f64,
    pub player_easing: f64,
    pub ball_size: f64,
    pub ball_speed: f64,
    pub ball_max_angle: f64,
    pub ball_accel: f64,
    pub win_score: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            court_width: Params::COURT_WIDTH,
            court_height: Params::COURT_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            opponent_speed: Params::OPPONENT_SPEED,
            player_easing: Params::PLAYER_EASING,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            ball_max_angle: Params::BALL_MAX_ANGLE,
            ball_accel: Params::BALL_ACCEL,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn court(&self) -> Court {
        Court::new(self.court_width, self.court_height)
    }

    /// Get X position (left edge) of the paddle column for a side
    pub fn paddle_x(&self, side: Side) -> f64 {
        match side {
            Side::Human => self.paddle_margin,
            Side::Opponent => self.court_width - self.paddle_width - self.paddle_margin,
        }
    }

    /// Clamp paddle top edge to court bounds
    pub fn clamp_paddle_y(&self, y: f64) -> f64 {
        self.court().clamp_y(y, self.paddle_height)
    }

    /// Top edge of a vertically centered paddle
    pub fn paddle_center_y(&self) -> f64 {
        self.court().paddle_spawn(self.paddle_height)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.court_width > 0.0 && self.court_height > 0.0) {
            return Err(ConfigError::InvalidCourt {
                width: self.court_width,
                height: self.court_height,
            });
        }
        if !(self.paddle_width > 0.0 && self.paddle_height > 0.0) {
            return Err(ConfigError::InvalidPaddle {
                width: self.paddle_width,
                height: self.paddle_height,
            });
        }
        if self.paddle_height > self.court_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                court: self.court_height,
            });
        }
        if !(self.ball_size > 0.0
            && self.ball_size < self.court_height
            && self.ball_size < self.court_width)
        {
            return Err(ConfigError::InvalidBall {
                size: self.ball_size,
            });
        }
        if !(self.player_easing > 0.0 && self.player_easing <= 1.0) {
            return Err(ConfigError::InvalidEasing(self.player_easing));
        }
        if !(self.ball_max_angle >= 0.0 && self.ball_max_angle < std::f64::consts::PI) {
            return Err(ConfigError::InvalidAngle(self.ball_max_angle));
        }
        for (field, value) in [
            ("ball_speed", self.ball_speed),
            ("ball_accel", self.ball_accel),
            ("opponent_speed", self.opponent_speed),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidRate { field, value });
            }
        }
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        Ok(())
    }
}
