//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in [`GameState`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for start
    #[default]
    Ready,
    /// Ticks are advancing
    Running,
    /// Player was caught, session is over
    GameOver,
}

/// Difficulty selector (0 = easy, 1 = medium, 2 = hard)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Difficulty::Easy),
            1 => Some(Difficulty::Medium),
            2 => Some(Difficulty::Hard),
            _ => None,
        }
    }

    pub fn index(&self) -> u8 {
        match self {
            Difficulty::Easy => 0,
            Difficulty::Medium => 1,
            Difficulty::Hard => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Enemy pursuit speed per tick
    pub fn enemy_speed(&self) -> f32 {
        1.0 + self.index() as f32 * 0.5
    }

    /// Per-tick probability of attempting an enemy spawn
    pub fn enemy_spawn_chance(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.005,
            Difficulty::Medium => 0.01,
            Difficulty::Hard => 0.015,
        }
    }

    /// Per-tick probability of spawning an apple when none exists.
    ///
    /// Medium is the stingiest setting, easy the most generous.
    pub fn power_up_spawn_chance(&self) -> f32 {
        match self {
            Difficulty::Easy => 0.15,
            Difficulty::Medium => 0.01,
            Difficulty::Hard => 0.05,
        }
    }

    /// Maximum live enemies, `None` for no cap
    pub fn enemy_cap(&self) -> Option<usize> {
        match self {
            Difficulty::Hard => None,
            _ => Some(ENEMY_CAP),
        }
    }

    /// Whether crossing a score milestone wipes the board
    pub fn clears_on_milestone(&self) -> bool {
        *self != Difficulty::Hard
    }
}

/// The player's shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Center position
    pub pos: Vec2,
    pub size: f32,
    /// Tick at which the speed boost wears off
    pub boost_until: Option<u64>,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            pos: Vec2::new(PLAYFIELD_WIDTH / 2.0, PLAYFIELD_HEIGHT / 2.0),
            size: PLAYER_SIZE,
            boost_until: None,
        }
    }
}

impl Player {
    pub fn is_boosted(&self, now: u64) -> bool {
        self.boost_until.is_some_and(|until| now < until)
    }

    /// Movement per held direction per tick
    pub fn speed(&self, now: u64) -> f32 {
        if self.is_boosted(now) {
            PLAYER_BOOSTED_SPEED
        } else {
            PLAYER_SPEED
        }
    }

    /// Start (or restart) the boost window at `now`.
    ///
    /// Expires at `now + BOOST_DURATION_TICKS`. The pickup tick has already
    /// moved at normal speed, so the player gets `BOOST_DURATION_TICKS - 1`
    /// boosted movement ticks and the flag clears exactly 5000 ms after pickup.
    pub fn boost(&mut self, now: u64) -> u64 {
        let until = now + BOOST_DURATION_TICKS;
        self.boost_until = Some(until);
        until
    }
}

/// Enemy outline (cosmetic only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyShape {
    Square,
    Triangle,
    Diamond,
}

impl EnemyShape {
    pub const ALL: [EnemyShape; 3] = [EnemyShape::Square, EnemyShape::Triangle, EnemyShape::Diamond];
}

/// A pursuing enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub shape: EnemyShape,
    /// Center position
    pub pos: Vec2,
    /// Fixed at spawn time
    pub size: f32,
}

impl Enemy {
    /// Size of an enemy spawned at the given score
    pub fn size_for_score(score: u64) -> f32 {
        ENEMY_BASE_SIZE + (score / SCORE_MILESTONE) as f32 * ENEMY_SIZE_STEP
    }
}

/// The apple power-up
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec2,
}

/// Complete world state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// Session RNG, advanced only by the spawner
    pub rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Survival score
    pub score: u64,
    /// Score milestone of the last board wipe
    pub last_clear_score: u64,
    /// Difficulty read on the most recent tick
    pub difficulty: Difficulty,
    pub phase: GamePhase,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    /// At most one apple at a time
    pub power_up: Option<PowerUp>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh session with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            score: 0,
            last_clear_score: 0,
            difficulty: Difficulty::default(),
            phase: GamePhase::Ready,
            player: Player::default(),
            enemies: Vec::new(),
            power_up: None,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// ID the next allocation will hand out
    pub fn peek_entity_id(&self) -> u32 {
        self.next_id
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}
