//! Paddle Ball entry point
//!
//! Headless driver: loads settings, opens the score record and runs rounds on a
//! fixed frame interval, logging each result. Pass a settings JSON path as the
//! first argument (default `paddle_ball.json`).

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use paddle_ball::sim::{RoundEngine, steer};
use paddle_ball::{FileScoreStore, Settings};

const DEFAULT_SETTINGS: &str = "paddle_ball.json";

/// Cap so an endless autopilot rally still returns
const MAX_FRAMES_PER_ROUND: u64 = 1_000_000;

fn main() {
    env_logger::init();
    log::info!("Paddle Ball (headless) starting...");

    let settings_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS));
    let settings = Settings::load_from_path(&settings_path);

    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Color seed {}", seed);

    let store = FileScoreStore::open(&settings.score_path);
    let mut engine = RoundEngine::new(settings.arena(), settings.serve, store, seed);
    let frame_delay = Duration::from_millis(settings.frame_delay_ms);

    for _ in 0..settings.rounds {
        engine.start_new_round();

        let mut frames = 0u64;
        loop {
            if settings.autopilot {
                if let Some(command) = steer(engine.ball(), engine.paddle()) {
                    engine.move_paddle(command);
                }
            }

            frames += 1;
            if engine.step() {
                break;
            }
            if frames >= MAX_FRAMES_PER_ROUND {
                log::warn!("Round abandoned after {} frames", frames);
                break;
            }

            if !frame_delay.is_zero() {
                thread::sleep(frame_delay);
            }
        }

        let frame = engine.frame();
        println!(
            "Round {}: rally {} | high score {} | {} frames",
            engine.rounds_started(),
            frame.rally_count,
            frame.high_score,
            frames
        );
    }
}
