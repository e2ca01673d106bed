//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod events;
pub mod movement;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::autopilot_input;
pub use collision::{player_hits_enemy, player_hits_power_up};
pub use events::{GameEvent, RemovalReason};
pub use spawn::{try_clear_enemies, try_spawn_enemy, try_spawn_power_up};
pub use state::{Difficulty, Enemy, EnemyShape, GamePhase, GameState, Player, PowerUp};
pub use tick::{TickInput, tick};
