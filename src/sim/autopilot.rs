//! Idle/demo mode - picks direction keys so the game can play itself
//!
//! Only produces a [`TickInput`]; the rules are the same as for a human.

use glam::Vec2;

use super::state::{Difficulty, GameState};
use super::tick::TickInput;
use crate::consts::*;
use crate::direction_to;

/// Enemies further than this are ignored
const THREAT_RADIUS: f32 = 260.0;
/// Walls start pushing back inside this margin
const WALL_MARGIN: f32 = 80.0;
/// Ignore steering components smaller than this
const DEADZONE: f32 = 0.2;

/// Choose keys for the next tick
pub fn autopilot_input(state: &GameState, difficulty: Difficulty) -> TickInput {
    let pos = state.player.pos;
    let mut steer = Vec2::ZERO;

    // Flee, weighted by how close each enemy is
    let mut threatened = false;
    for enemy in &state.enemies {
        let reach = THREAT_RADIUS + enemy.size / 2.0;
        let dist = pos.distance(enemy.pos);
        if dist < reach {
            threatened = true;
            steer += direction_to(enemy.pos, pos) * (1.0 - dist / reach) * 2.0;
        }
    }

    // Go get the apple when nothing is close
    if let Some(power_up) = &state.power_up {
        if !threatened {
            steer += direction_to(pos, power_up.pos);
        }
    }

    steer += wall_push(pos);

    TickInput {
        up: steer.y < -DEADZONE,
        down: steer.y > DEADZONE,
        left: steer.x < -DEADZONE,
        right: steer.x > DEADZONE,
        difficulty,
    }
}

fn wall_push(pos: Vec2) -> Vec2 {
    let push = |d: f32| (1.0 - d / WALL_MARGIN).max(0.0) * 1.5;
    Vec2::new(
        push(pos.x) - push(PLAYFIELD_WIDTH - pos.x),
        push(pos.y) - push(PLAYFIELD_HEIGHT - pos.y),
    )
}
