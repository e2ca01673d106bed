//! Render-intent events
//!
//! Emitted by [`tick`](super::tick) so an adapter can create, update and
//! remove visuals without the simulation touching a display surface.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::EnemyShape;

/// Why an enemy left the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemovalReason {
    /// Drifted further than its own size past the playfield edge
    OutOfBounds,
    /// Board wiped after a score milestone
    MilestoneClear,
    /// Session ended
    GameOver,
}

/// Something the adapter should reflect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    EnemySpawned {
        id: u32,
        shape: EnemyShape,
        pos: Vec2,
        size: f32,
    },
    EnemyRemoved {
        id: u32,
        reason: RemovalReason,
    },
    PowerUpSpawned {
        pos: Vec2,
    },
    /// Apple eaten; boost lasts until `boost_until` (tick)
    PowerUpCollected {
        pos: Vec2,
        boost_until: u64,
    },
    /// Apple removed without being eaten (game over)
    PowerUpRemoved,
    BoostExpired,
    GameOver {
        final_score: u64,
    },
}
