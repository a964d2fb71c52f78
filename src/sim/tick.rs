//! Per-frame ball integration
//!
//! One call to [`Ball::advance`] is one frame. The order of the phases matters:
//! integrate, side walls, paddle, plane, shrink schedule, acceleration.

use glam::Vec2;
use rand::Rng;

use super::state::{Arena, Ball, BallColor, Paddle};

/// What happened to the ball during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Reflected off a side wall
    pub wall_bounce: bool,
    /// Reflected off the paddle (the renderer re-colors the ball)
    pub paddle_bounce: bool,
    /// Passed the plane this frame; true on exactly one frame per round
    pub stopped: bool,
}

impl Ball {
    /// Advance the ball by one frame against the arena walls and the paddle
    ///
    /// The paddle's half-length is updated from the rally count every frame.
    /// Once the ball has stopped this is a no-op.
    pub fn advance(&mut self, arena: Arena, paddle: &mut Paddle, rng: &mut impl Rng) -> MoveOutcome {
        let mut outcome = MoveOutcome::default();
        if self.stopped {
            return outcome;
        }

        self.pos += self.vel;

        // Side walls: reflect and step once more with the new velocity
        if self.pos.x + self.radius > arena.width || self.pos.x - self.radius < 0.0 {
            self.vel.x = -self.vel.x;
            self.pos.x += self.vel.x;
            outcome.wall_bounce = true;
        }

        if self.bottom() > paddle.plane_y && paddle.collides_with(self.pos.x) {
            self.vel.y = -self.vel.y;
            self.pos.y += self.vel.y;
            self.color = BallColor::random(rng);
            outcome.paddle_bounce = true;

            if !paddle.is_below_plane(self.pos.y, self.radius) {
                self.rally_count += 1;
                log::debug!("Paddle bounce, rally {}", self.rally_count);
            }
        }

        if paddle.is_below_plane(self.pos.y, self.radius) {
            self.vel = Vec2::ZERO;
            self.stopped = true;
            outcome.stopped = true;
        }

        paddle.apply_shrink_schedule(self.rally_count);

        // Acceleration runs every frame except the stop frame, where the
        // frozen-at-zero rule wins over "accelerate regardless of state"
        if !self.stopped {
            self.vel += self.accel;
        }

        outcome
    }
}
