//! Shape Dodge - A dodge-the-shapes arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, game state)
//! - `game`: Fixed-step runner and session state machine
//! - `settings`: Player-facing configuration

pub mod game;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Ticks per second at the fixed timestep
    pub const TICKS_PER_SECOND: u64 = 60;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Playfield dimensions, shared with the rendering adapter
    pub const PLAYFIELD_WIDTH: f32 = 1600.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SIZE: f32 = 28.0;
    pub const PLAYER_SPEED: f32 = 6.0;
    pub const PLAYER_BOOSTED_SPEED: f32 = 12.0;
    /// Player hit radius as a fraction of its size
    pub const PLAYER_HIT_FACTOR: f32 = 0.7;

    /// Enemy size at score 0
    pub const ENEMY_BASE_SIZE: f32 = 32.0;
    /// Enemy size added per score milestone
    pub const ENEMY_SIZE_STEP: f32 = 10.0;
    /// Score interval for enemy growth and milestone clears
    pub const SCORE_MILESTONE: u64 = 1000;
    /// Enemy population cap (not applied on hard)
    pub const ENEMY_CAP: usize = 20;
    /// Minimum spawn distance from the player, before adding half the enemy size
    pub const SPAWN_SAFE_RADIUS: f32 = 200.0;
    /// Rejection-sampling attempts before falling back to the far corner
    pub const SPAWN_ATTEMPTS: u32 = 64;

    /// Power-up (apple) radius
    pub const POWER_UP_RADIUS: f32 = 16.0;
    /// Speed boost duration (5000 ms at 60 Hz)
    pub const BOOST_DURATION_TICKS: u64 = 5 * TICKS_PER_SECOND;
}

use consts::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Unit vector pointing from `from` to `to` (zero if the points coincide)
#[inline]
pub fn direction_to(from: Vec2, to: Vec2) -> Vec2 {
    (to - from).normalize_or_zero()
}

/// Clamp a point to [0, width] x [0, height]
#[inline]
pub fn clamp_to_playfield(pos: Vec2) -> Vec2 {
    pos.clamp(Vec2::ZERO, Vec2::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT))
}

/// Whether a point lies further than `margin` outside the playfield
#[inline]
pub fn outside_playfield(pos: Vec2, margin: f32) -> bool {
    pos.x < -margin
        || pos.x > PLAYFIELD_WIDTH + margin
        || pos.y < -margin
        || pos.y > PLAYFIELD_HEIGHT + margin
}
