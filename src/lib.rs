//! Paddle Ball - a single-screen ball and paddle arcade game
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (paddle, ball, round engine)
//! - `highscores`: Persisted high score record
//! - `settings`: Data-driven game configuration

pub mod highscores;
pub mod settings;
pub mod sim;

pub use highscores::{FileScoreStore, MemoryScoreStore, ScoreError, ScoreStore};
pub use settings::Settings;
pub use sim::{BallServe, RoundEngine};

/// Game configuration constants
pub mod consts {
    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 1000.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    /// Delay between simulation frames (ms)
    pub const FRAME_DELAY_MS: u64 = 5;

    /// Lateral distance covered by a single paddle move
    pub const PADDLE_STEP: f32 = 30.0;
    /// Paddle half-length at the start of a round (rally 0)
    pub const PADDLE_HALF_LENGTH: f32 = 50.0;

    /// Ball defaults
    pub const BALL_START_X: f32 = 25.0;
    pub const BALL_START_Y: f32 = 25.0;
    pub const BALL_START_VEL_X: f32 = 1.0;
    pub const BALL_START_VEL_Y: f32 = 1.0;
    /// Constant per-frame acceleration (gravity pulls the ball down, drift pushes right)
    pub const BALL_ACCEL_X: f32 = 0.01;
    pub const BALL_ACCEL_Y: f32 = 0.2;
    pub const BALL_RADIUS: f32 = 25.0;

    /// Default location of the high score record
    pub const SCORE_FILE: &str = "scores.txt";
}
