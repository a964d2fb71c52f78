//! Frame-driven simulation module
//!
//! All gameplay logic lives here. No rendering, windowing or timing:
//! - One `step()` is one frame
//! - Randomness only touches the cosmetic ball color, through a seeded RNG
//! - The platform layer owns the frame scheduler

pub mod autopilot;
pub mod input;
pub mod round;
pub mod shrink;
pub mod state;
pub mod tick;

pub use autopilot::steer;
pub use input::PaddleCommand;
pub use round::{FrameView, RoundEngine};
pub use shrink::{RallyMatch, SHRINK_SCHEDULE, half_length_for};
pub use state::{Arena, Ball, BallColor, BallServe, Paddle, RoundPhase};
pub use tick::MoveOutcome;
