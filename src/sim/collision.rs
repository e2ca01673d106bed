//! Collision checks between the player and other entities
//!
//! Everything is circle-vs-circle on entity centers. The player's hit radius
//! is 70% of its size, which is a little forgiving at the corners of the shape.

use glam::Vec2;

use super::state::{Enemy, Player, PowerUp};
use crate::consts::*;
use crate::distance;

/// Distance below which an enemy catches the player
#[inline]
pub fn enemy_hit_threshold(enemy_size: f32, player_size: f32) -> f32 {
    enemy_size / 2.0 + player_size * PLAYER_HIT_FACTOR
}

/// Distance below which the player eats the apple
#[inline]
pub fn power_up_hit_threshold(player_size: f32) -> f32 {
    player_size * PLAYER_HIT_FACTOR + POWER_UP_RADIUS
}

/// Strictly closer than `threshold`
#[inline]
pub fn circles_touch(a: Vec2, b: Vec2, threshold: f32) -> bool {
    distance(a, b) < threshold
}

pub fn player_hits_enemy(player: &Player, enemy: &Enemy) -> bool {
    circles_touch(player.pos, enemy.pos, enemy_hit_threshold(enemy.size, player.size))
}

pub fn player_hits_power_up(player: &Player, power_up: &PowerUp) -> bool {
    circles_touch(player.pos, power_up.pos, power_up_hit_threshold(player.size))
}
