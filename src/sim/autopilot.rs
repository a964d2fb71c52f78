//! Demo mode: steer the paddle under the ball
//!
//! Leads the target a little along the ball's horizontal velocity and only
//! moves when the paddle is more than half a step away, so it doesn't jitter.

use super::input::PaddleCommand;
use super::state::{Ball, Paddle};

/// Frames of horizontal travel to lead the ball by
const LEAD_FRAMES: f32 = 20.0;

/// Pick the move that brings the paddle under the ball, if any
pub fn steer(ball: &Ball, paddle: &Paddle) -> Option<PaddleCommand> {
    if ball.is_stopped() {
        return None;
    }

    let target = ball.pos.x + ball.vel.x * LEAD_FRAMES;
    let delta = target - paddle.center_x;
    let dead_zone = paddle.step / 2.0;

    if delta < -dead_zone {
        Some(PaddleCommand::Left)
    } else if delta > dead_zone {
        Some(PaddleCommand::Right)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Arena, BallServe};
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn setup(ball_x: f32, vel_x: f32) -> (Ball, Paddle) {
        let mut rng = Pcg32::seed_from_u64(0);
        let serve = BallServe {
            pos: Vec2::new(ball_x, 100.0),
            vel: Vec2::new(vel_x, 1.0),
            ..Default::default()
        };
        (Ball::new(&serve, &mut rng), Paddle::new(Arena::new(1000.0, 500.0)))
    }

    #[test]
    fn test_steers_toward_ball() {
        let (ball, paddle) = setup(100.0, 0.0);
        assert_eq!(steer(&ball, &paddle), Some(PaddleCommand::Left));

        let (ball, paddle) = setup(900.0, 0.0);
        assert_eq!(steer(&ball, &paddle), Some(PaddleCommand::Right));
    }

    #[test]
    fn test_holds_when_under_ball() {
        let (ball, paddle) = setup(505.0, 0.0);
        assert_eq!(steer(&ball, &paddle), None);
    }

    #[test]
    fn test_leads_moving_ball() {
        // Ball is centered but drifting right fast
        let (ball, paddle) = setup(500.0, 5.0);
        assert_eq!(steer(&ball, &paddle), Some(PaddleCommand::Right));
    }

    #[test]
    fn test_idle_after_stop() {
        let (mut ball, paddle) = setup(100.0, 0.0);
        ball.stopped = true;
        assert_eq!(steer(&ball, &paddle), None);
    }
}
