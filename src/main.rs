//! Shape Dodge entry point
//!
//! Runs a headless session driven by the autopilot and reports the score.
//! Usage: `shape-dodge [settings.json]`

use std::time::{SystemTime, UNIX_EPOCH};

use shape_dodge::consts::*;
use shape_dodge::sim::{GameEvent, autopilot_input};
use shape_dodge::{Game, Settings};

fn main() {
    env_logger::init();
    log::info!("Shape Dodge (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(&path).unwrap_or_else(|e| {
            log::warn!("{e}; using default settings");
            Settings::default()
        }),
        None => Settings::default(),
    };

    let seed = settings.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    });
    let difficulty = settings.difficulty();

    let mut game = Game::new(seed);
    game.start();
    log::info!("Difficulty: {}", difficulty.as_str());

    let mut spawned = 0u32;
    let mut apples = 0u32;
    while game.is_running() && game.state().time_ticks < settings.max_ticks {
        game.set_input(autopilot_input(game.state(), difficulty));
        for event in game.update(SIM_DT) {
            match event {
                GameEvent::EnemySpawned { .. } => spawned += 1,
                GameEvent::PowerUpCollected { .. } => apples += 1,
                GameEvent::GameOver { final_score } => {
                    println!("Game over! Final score: {final_score}");
                }
                _ => {}
            }
        }
    }

    if game.is_running() {
        game.stop();
        println!("Survived {} ticks. Score: {}", settings.max_ticks, game.state().score);
    }
    println!("Enemies spawned: {spawned}, apples eaten: {apples}");
}
