//! Per-tick movement for the player and enemies

use glam::Vec2;

use super::state::{Difficulty, Enemy, Player};
use super::tick::TickInput;
use crate::{clamp_to_playfield, direction_to, outside_playfield};

/// Apply held directions to the player, then clamp to the playfield.
///
/// Axes are independent, so diagonals cover more ground than straight lines.
pub fn move_player(player: &mut Player, input: &TickInput, now: u64) {
    let speed = player.speed(now);
    let mut delta = Vec2::ZERO;
    if input.up {
        delta.y -= speed;
    }
    if input.down {
        delta.y += speed;
    }
    if input.left {
        delta.x -= speed;
    }
    if input.right {
        delta.x += speed;
    }
    player.pos = clamp_to_playfield(player.pos + delta);
}

/// Step an enemy straight at `target`. An enemy already on the target stays put.
pub fn move_enemy(enemy: &mut Enemy, target: Vec2, difficulty: Difficulty) {
    enemy.pos += direction_to(enemy.pos, target) * difficulty.enemy_speed();
}

/// Whether the enemy has left the playfield by more than its own size
#[inline]
pub fn is_out_of_bounds(enemy: &Enemy) -> bool {
    outside_playfield(enemy.pos, enemy.size)
}
