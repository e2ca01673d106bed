//! Session runner
//!
//! Owns one [`GameState`] and turns wall-clock frame time into fixed
//! simulation ticks. This is the seam a rendering adapter drives.

use crate::consts::*;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

/// Longest frame we try to catch up on (seconds)
const MAX_FRAME_DT: f32 = 0.1;

/// Game instance holding all state
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    accumulator: f32,
    input: TickInput,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self {
            state: GameState::new(seed),
            accumulator: 0.0,
            input: TickInput::default(),
        }
    }

    /// Current world snapshot for drawing
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running()
    }

    /// Replace the held-keys/difficulty snapshot used by upcoming ticks
    pub fn set_input(&mut self, input: TickInput) {
        self.input = input;
    }

    /// Ready -> Running. Ignored in any other phase; a finished session
    /// needs [`restart`](Self::restart) first.
    pub fn start(&mut self) -> bool {
        if self.state.phase != GamePhase::Ready {
            return false;
        }
        self.state.phase = GamePhase::Running;
        self.accumulator = 0.0;
        log::info!("Game started with seed: {}", self.state.seed);
        true
    }

    /// Halt ticking without tearing down the board
    pub fn stop(&mut self) {
        if self.state.phase == GamePhase::Running {
            self.state.phase = GamePhase::GameOver;
            log::info!("Game stopped at score {}", self.state.score);
        }
        self.accumulator = 0.0;
    }

    /// Reset game state for a new session
    pub fn restart(&mut self, seed: u64) {
        self.state = GameState::new(seed);
        self.accumulator = 0.0;
        self.input = TickInput {
            difficulty: self.input.difficulty,
            ..Default::default()
        };
        log::info!("Game restarted with seed: {}", seed);
    }

    /// Run simulation ticks for `dt` seconds of frame time
    pub fn update(&mut self, dt: f32) -> Vec<GameEvent> {
        let mut events = Vec::new();
        if !self.state.is_running() {
            return events;
        }

        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            events.extend(tick(&mut self.state, &self.input));
            self.accumulator -= SIM_DT;
            substeps += 1;

            if !self.state.is_running() {
                self.accumulator = 0.0;
                break;
            }
        }

        events
    }
}
