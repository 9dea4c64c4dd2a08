use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Params;

/// Errors raised while building a [`Config`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("arena must have positive dimensions, got {width}x{height}")]
    InvalidArena { width: f32, height: f32 },
    #[error("paddle of {width}x{height} does not fit the arena")]
    InvalidPaddle { width: f32, height: f32 },
    #[error("ball radius must be positive and smaller than half the arena height, got {0}")]
    InvalidBall(f32),
    #[error("{0} must be positive")]
    NotPositive(&'static str),
    #[error("power-up interval must be at least one frame, got {0}")]
    IntervalTooShort(f32),
    #[error(
        "trail length {0} is over the limit of {max}",
        max = Params::MAX_TRAIL_LENGTH
    )]
    TrailTooLong(usize),
    #[error("win score must be at least 1")]
    ZeroWinScore,
    #[error("tournament needs at least one round to win")]
    ZeroRounds,
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// AI strength preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    /// Fraction of the ball offset the AI closes per 1/60s frame
    pub fn factor(self) -> f32 {
        match self {
            Difficulty::Easy => Params::AI_FACTOR_EASY,
            Difficulty::Normal => Params::AI_FACTOR_NORMAL,
            Difficulty::Hard => Params::AI_FACTOR_HARD,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
        }
    }

    /// Next preset, saturating at Hard
    pub fn harder(self) -> Self {
        let i = Self::ALL.iter().position(|d| *d == self).unwrap_or(1);
        Self::ALL[(i + 1).min(Self::ALL.len() - 1)]
    }

    /// Previous preset, saturating at Easy
    pub fn easier(self) -> Self {
        let i = Self::ALL.iter().position(|d| *d == self).unwrap_or(1);
        Self::ALL[i.saturating_sub(1)]
    }
}

/// Game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_increment: f32,
    pub trail_length: usize,
    pub serve_delay: f32,
    pub difficulty: Difficulty,
    pub powerup_radius: f32,
    pub powerup_interval: f32,
    pub powerup_duration: f32,
    pub powerup_speed_boost: f32,
    pub win_score: u8,
    pub rounds_to_win: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
            trail_length: Params::TRAIL_LENGTH,
            serve_delay: Params::SERVE_DELAY,
            difficulty: Difficulty::default(),
            powerup_radius: Params::POWERUP_RADIUS,
            powerup_interval: Params::POWERUP_INTERVAL,
            powerup_duration: Params::POWERUP_DURATION,
            powerup_speed_boost: Params::POWERUP_SPEED_BOOST,
            win_score: Params::WIN_SCORE,
            rounds_to_win: Params::ROUNDS_TO_WIN,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON override; missing fields fall back to [`Params`]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.arena_width <= 0.0 || self.arena_height <= 0.0 {
            return Err(ConfigError::InvalidArena {
                width: self.arena_width,
                height: self.arena_height,
            });
        }
        if self.paddle_width <= 0.0
            || self.paddle_height <= 0.0
            || self.paddle_height > self.arena_height
            || self.paddle_width * 2.0 >= self.arena_width
        {
            return Err(ConfigError::InvalidPaddle {
                width: self.paddle_width,
                height: self.paddle_height,
            });
        }
        if self.ball_radius <= 0.0 || self.ball_radius * 2.0 >= self.arena_height {
            return Err(ConfigError::InvalidBall(self.ball_radius));
        }
        let positive = [
            ("paddle_speed", self.paddle_speed),
            ("ball_speed_initial", self.ball_speed_initial),
            ("ball_speed_increment", self.ball_speed_increment),
            ("powerup_radius", self.powerup_radius),
            ("powerup_interval", self.powerup_interval),
            ("powerup_duration", self.powerup_duration),
            ("powerup_speed_boost", self.powerup_speed_boost),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive(name));
            }
        }
        if self.powerup_interval < Params::FIXED_DT {
            return Err(ConfigError::IntervalTooShort(self.powerup_interval));
        }
        if self.trail_length > Params::MAX_TRAIL_LENGTH {
            return Err(ConfigError::TrailTooLong(self.trail_length));
        }
        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }
        if self.rounds_to_win == 0 {
            return Err(ConfigError::ZeroRounds);
        }
        Ok(())
    }
}
