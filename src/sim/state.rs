//! Round state and core simulation types
//!
//! The paddle only ever moves laterally; its plane (the line the ball must not
//! cross) is fixed for the whole round.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::shrink;
use crate::consts::*;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    /// No round has been started yet
    Idle,
    /// Ball in flight, `step()` advances the simulation
    Running,
    /// Ball passed the plane; further steps are no-ops
    Over,
}

/// Rectangular play field, origin top-left, y grows downward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Cosmetic ball color, re-rolled on every paddle bounce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl BallColor {
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            r: rng.random(),
            g: rng.random(),
            b: rng.random(),
        }
    }

    /// `#RRGGBB` form used by canvas-style renderers
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Spawn parameters for the ball at the start of a round
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallServe {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Added to the velocity every frame
    pub accel: Vec2,
    pub radius: f32,
}

impl Default for BallServe {
    fn default() -> Self {
        Self {
            pos: Vec2::new(BALL_START_X, BALL_START_Y),
            vel: Vec2::new(BALL_START_VEL_X, BALL_START_VEL_Y),
            accel: Vec2::new(BALL_ACCEL_X, BALL_ACCEL_Y),
            radius: BALL_RADIUS,
        }
    }
}

/// The ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    pub vel: Vec2,
    /// Constant for the whole round
    pub accel: Vec2,
    pub radius: f32,
    /// Successful paddle bounces this round
    pub rally_count: u32,
    /// Set exactly once, when the ball passes the paddle plane
    pub stopped: bool,
    pub color: BallColor,
}

impl Ball {
    pub fn new(serve: &BallServe, rng: &mut impl Rng) -> Self {
        Self {
            pos: serve.pos,
            vel: serve.vel,
            accel: serve.accel,
            radius: serve.radius,
            rally_count: 0,
            stopped: false,
            color: BallColor::random(rng),
        }
    }

    /// Bottom edge of the ball
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

/// The player's paddle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    /// Horizontal center
    pub center_x: f32,
    /// Height at which bounce and termination are tested
    pub plane_y: f32,
    /// Shrinks as the rally count grows
    pub half_length: f32,
    pub arena_width: f32,
    /// Distance covered by one lateral move
    pub step: f32,
}

impl Paddle {
    /// Centered paddle at full length, its plane on the arena floor.
    /// In an arena narrower than the paddle it spans the whole width.
    pub fn new(arena: Arena) -> Self {
        Self {
            center_x: arena.width / 2.0,
            plane_y: arena.height,
            half_length: PADDLE_HALF_LENGTH.min(arena.width / 2.0),
            arena_width: arena.width,
            step: PADDLE_STEP,
        }
    }

    #[inline]
    pub fn left_edge(&self) -> f32 {
        self.center_x - self.half_length
    }

    #[inline]
    pub fn right_edge(&self) -> f32 {
        self.center_x + self.half_length
    }

    /// Shift left by one step unless the left edge would leave the arena
    pub fn move_left(&mut self) {
        if self.left_edge() - self.step >= 0.0 {
            self.center_x -= self.step;
        }
    }

    /// Shift right by one step unless the right edge would leave the arena
    pub fn move_right(&mut self) {
        if self.right_edge() + self.step <= self.arena_width {
            self.center_x += self.step;
        }
    }

    /// Strictly inside the paddle span; a ball exactly on an edge misses
    pub fn collides_with(&self, ball_x: f32) -> bool {
        self.left_edge() < ball_x && ball_x < self.right_edge()
    }

    /// Round-termination test against the fixed plane
    pub fn is_below_plane(&self, ball_y: f32, ball_radius: f32) -> bool {
        ball_y + ball_radius > self.plane_y
    }

    /// Exact-match lookup; counts with no entry keep the current length
    pub fn apply_shrink_schedule(&mut self, rally_count: u32) {
        if let Some(half_length) = shrink::half_length_for(rally_count) {
            // Never wider than the arena
            self.half_length = half_length.min(self.arena_width / 2.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn arena() -> Arena {
        Arena::new(1000.0, 500.0)
    }

    #[test]
    fn test_paddle_starts_centered() {
        let paddle = Paddle::new(arena());
        assert_eq!(paddle.center_x, 500.0);
        assert_eq!(paddle.plane_y, 500.0);
        assert_eq!(paddle.half_length, 50.0);
    }

    #[test]
    fn test_paddle_collision_is_strict() {
        let paddle = Paddle::new(arena());
        assert!(paddle.collides_with(500.0));
        assert!(paddle.collides_with(450.5));
        assert!(!paddle.collides_with(450.0));
        assert!(!paddle.collides_with(550.0));
        assert!(!paddle.collides_with(100.0));
    }

    #[test]
    fn test_below_plane() {
        let paddle = Paddle::new(arena());
        assert!(paddle.is_below_plane(500.0, 25.0));
        assert!(paddle.is_below_plane(476.0, 25.0));
        assert!(!paddle.is_below_plane(475.0, 25.0));
        assert!(!paddle.is_below_plane(300.0, 25.0));
    }

    #[test]
    fn test_paddle_stops_at_walls() {
        let mut paddle = Paddle::new(arena());
        for _ in 0..100 {
            paddle.move_left();
        }
        // 500 - 50 = 450 of travel, 15 whole steps
        assert_eq!(paddle.center_x, 50.0);
        assert_eq!(paddle.left_edge(), 0.0);

        for _ in 0..100 {
            paddle.move_right();
        }
        assert_eq!(paddle.center_x, 950.0);
        assert_eq!(paddle.right_edge(), 1000.0);
    }

    #[test]
    fn test_shrink_keeps_length_between_entries() {
        let mut paddle = Paddle::new(arena());
        paddle.apply_shrink_schedule(5);
        assert_eq!(paddle.half_length, 45.0);
        paddle.apply_shrink_schedule(7);
        assert_eq!(paddle.half_length, 45.0);
        paddle.apply_shrink_schedule(10);
        paddle.apply_shrink_schedule(15);
        assert_eq!(paddle.half_length, 30.0);
    }

    #[test]
    fn test_narrow_arena_paddle_fits() {
        let mut paddle = Paddle::new(Arena::new(60.0, 500.0));
        assert_eq!(paddle.left_edge(), 0.0);
        assert_eq!(paddle.right_edge(), 60.0);

        paddle.move_left();
        paddle.move_right();
        paddle.apply_shrink_schedule(0);
        assert_eq!(paddle.left_edge(), 0.0);
        assert_eq!(paddle.right_edge(), 60.0);

        // Shorter entries still apply once they fit
        paddle.apply_shrink_schedule(30);
        assert_eq!(paddle.half_length, 15.0);
    }

    #[test]
    fn test_ball_color_hex() {
        let color = BallColor { r: 255, g: 10, b: 0 };
        assert_eq!(color.to_hex(), "#FF0A00");
    }

    #[test]
    fn test_ball_spawns_from_serve() {
        let mut rng = Pcg32::seed_from_u64(7);
        let ball = Ball::new(&BallServe::default(), &mut rng);
        assert_eq!(ball.pos, Vec2::new(25.0, 25.0));
        assert_eq!(ball.vel, Vec2::new(1.0, 1.0));
        assert_eq!(ball.rally_count, 0);
        assert!(!ball.is_stopped());
    }

    proptest! {
        #[test]
        fn prop_paddle_never_leaves_arena(moves in proptest::collection::vec(any::<bool>(), 0..200)) {
            let mut paddle = Paddle::new(arena());
            for left in moves {
                if left {
                    paddle.move_left();
                } else {
                    paddle.move_right();
                }
                prop_assert!(paddle.left_edge() >= 0.0);
                prop_assert!(paddle.right_edge() <= paddle.arena_width);
            }
        }

        #[test]
        fn prop_paddle_fits_any_arena(
            width in 1u32..2000,
            moves in proptest::collection::vec(any::<bool>(), 0..100),
            mut rallies in proptest::collection::vec(0u32..60, 0..20),
        ) {
            // Whole-unit widths keep edge arithmetic exact
            let width = width as f32;
            // Rally count only grows within a round
            rallies.sort_unstable();
            let mut paddle = Paddle::new(Arena::new(width, 500.0));
            prop_assert!(paddle.left_edge() >= 0.0);
            prop_assert!(paddle.right_edge() <= width);
            for (i, left) in moves.into_iter().enumerate() {
                if left {
                    paddle.move_left();
                } else {
                    paddle.move_right();
                }
                if let Some(&rally) = rallies.get(i) {
                    paddle.apply_shrink_schedule(rally);
                }
                prop_assert!(paddle.left_edge() >= 0.0);
                prop_assert!(paddle.right_edge() <= width);
            }
        }
    }
}
