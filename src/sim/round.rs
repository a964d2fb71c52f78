//! Round engine
//!
//! Owns the paddle, the ball and the score store for a single arena. An outside
//! scheduler calls [`RoundEngine::step`] once per frame; the engine never
//! reschedules itself.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::input::PaddleCommand;
use super::state::{Arena, Ball, BallServe, Paddle, RoundPhase};
use crate::highscores::ScoreStore;

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameView {
    pub ball_x: f32,
    pub ball_y: f32,
    pub ball_radius: f32,
    /// `#RRGGBB`
    pub ball_color: String,
    pub paddle_center_x: f32,
    pub paddle_half_length: f32,
    pub paddle_plane_y: f32,
    pub rally_count: u32,
    pub high_score: u32,
    pub game_over: bool,
}

pub struct RoundEngine<S: ScoreStore> {
    arena: Arena,
    serve: BallServe,
    phase: RoundPhase,
    paddle: Paddle,
    ball: Ball,
    store: S,
    rng: Pcg32,
    rounds_started: u32,
}

impl<S: ScoreStore> RoundEngine<S> {
    /// Engine in the Idle phase; call [`start_new_round`](Self::start_new_round) to play
    pub fn new(arena: Arena, serve: BallServe, store: S, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let paddle = Paddle::new(arena);
        let ball = Ball::new(&serve, &mut rng);
        Self {
            arena,
            serve,
            phase: RoundPhase::Idle,
            paddle,
            ball,
            store,
            rng,
            rounds_started: 0,
        }
    }

    /// Fresh centered paddle and a fresh ball with the rally count reset
    pub fn start_new_round(&mut self) {
        self.paddle = Paddle::new(self.arena);
        self.ball = Ball::new(&self.serve, &mut self.rng);
        self.phase = RoundPhase::Running;
        self.rounds_started += 1;
        log::info!("Round {} started", self.rounds_started);
    }

    /// Advance one frame. Returns true only on the frame the round ends.
    pub fn step(&mut self) -> bool {
        if self.phase != RoundPhase::Running {
            return false;
        }

        let outcome = self.ball.advance(self.arena, &mut self.paddle, &mut self.rng);
        if !outcome.stopped {
            return false;
        }

        self.phase = RoundPhase::Over;
        let rally = self.ball.rally_count;
        let best = self.store.commit(rally);
        log::info!("Round {} over: rally {}, high score {}", self.rounds_started, rally, best);
        true
    }

    /// Apply a lateral move; ignored unless a round is running
    pub fn move_paddle(&mut self, command: PaddleCommand) {
        if self.phase == RoundPhase::Running {
            command.apply(&mut self.paddle);
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == RoundPhase::Over
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn rally_count(&self) -> u32 {
        self.ball.rally_count
    }

    /// Stored high score, 0 if none has been recorded
    pub fn high_score(&self) -> u32 {
        self.store.read().unwrap_or(0)
    }

    pub fn rounds_started(&self) -> u32 {
        self.rounds_started
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn frame(&self) -> FrameView {
        FrameView {
            ball_x: self.ball.pos.x,
            ball_y: self.ball.pos.y,
            ball_radius: self.ball.radius,
            ball_color: self.ball.color.to_hex(),
            paddle_center_x: self.paddle.center_x,
            paddle_half_length: self.paddle.half_length,
            paddle_plane_y: self.paddle.plane_y,
            rally_count: self.ball.rally_count,
            high_score: self.high_score(),
            game_over: self.is_over(),
        }
    }
}
