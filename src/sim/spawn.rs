//! Enemy and power-up spawning
//!
//! All randomness in the simulation flows through here, drawn from the
//! session RNG so a seed replays exactly.

use glam::Vec2;
use rand::Rng;

use super::state::{Difficulty, Enemy, EnemyShape, PowerUp};
use crate::consts::*;
use crate::distance;

/// Roll the per-tick spawn chance, then try to place an enemy
pub fn maybe_spawn_enemy<R: Rng>(
    rng: &mut R,
    difficulty: Difficulty,
    current_count: usize,
    score: u64,
    player_pos: Vec2,
    id: u32,
) -> Option<Enemy> {
    if rng.random::<f32>() >= difficulty.enemy_spawn_chance() {
        return None;
    }
    try_spawn_enemy(rng, difficulty, current_count, score, player_pos, id)
}

/// Place a new enemy away from the player, unless the board is full or no
/// spot on the field keeps the required gap.
///
/// The cap check happens before any RNG draw.
pub fn try_spawn_enemy<R: Rng>(
    rng: &mut R,
    difficulty: Difficulty,
    current_count: usize,
    score: u64,
    player_pos: Vec2,
    id: u32,
) -> Option<Enemy> {
    if let Some(cap) = difficulty.enemy_cap() {
        if current_count >= cap {
            return None;
        }
    }

    let shape = EnemyShape::ALL[rng.random_range(0..EnemyShape::ALL.len())];
    let size = Enemy::size_for_score(score);
    let pos = sample_spawn_position(rng, size, player_pos)?;

    Some(Enemy { id, shape, pos, size })
}

/// Whether a spawn point keeps the required gap from the player
#[inline]
pub fn is_clear_of_player(candidate: Vec2, player_pos: Vec2, size: f32) -> bool {
    // Exactly on the boundary counts as clear
    distance(candidate, player_pos) >= SPAWN_SAFE_RADIUS + size / 2.0
}

/// Uniform sample inside the playfield inset by `size`, rejecting points too
/// close to the player. Gives up after `SPAWN_ATTEMPTS` and tries the inset
/// corner farthest from the player; `None` if even that is too close.
fn sample_spawn_position<R: Rng>(rng: &mut R, size: f32, player_pos: Vec2) -> Option<Vec2> {
    let (min, max) = inset_bounds(size);

    for _ in 0..SPAWN_ATTEMPTS {
        let candidate = Vec2::new(
            rng.random_range(min.x..=max.x),
            rng.random_range(min.y..=max.y),
        );
        if is_clear_of_player(candidate, player_pos, size) {
            return Some(candidate);
        }
    }

    let corner = farthest_corner(min, max, player_pos);
    if is_clear_of_player(corner, player_pos, size) {
        log::debug!("Spawn sampling exhausted, using far corner");
        Some(corner)
    } else {
        log::debug!("No spawn point clear of the player for size {}", size);
        None
    }
}

/// Playfield rectangle shrunk by `inset` on every side. Collapses to the
/// center line on an axis that is too small for the inset.
fn inset_bounds(inset: f32) -> (Vec2, Vec2) {
    let ix = inset.min(PLAYFIELD_WIDTH / 2.0);
    let iy = inset.min(PLAYFIELD_HEIGHT / 2.0);
    (
        Vec2::new(ix, iy),
        Vec2::new(PLAYFIELD_WIDTH - ix, PLAYFIELD_HEIGHT - iy),
    )
}

fn farthest_corner(min: Vec2, max: Vec2, from: Vec2) -> Vec2 {
    let x = if (from.x - min.x).abs() > (max.x - from.x).abs() { min.x } else { max.x };
    let y = if (from.y - min.y).abs() > (max.y - from.y).abs() { min.y } else { max.y };
    Vec2::new(x, y)
}

/// Wipe the board once per score milestone (easy and medium only).
///
/// Returns the removed enemies; `last_clear_score` is snapped down to the
/// milestone that triggered the wipe.
pub fn try_clear_enemies(
    difficulty: Difficulty,
    score: u64,
    last_clear_score: &mut u64,
    enemies: &mut Vec<Enemy>,
) -> Vec<Enemy> {
    if !difficulty.clears_on_milestone()
        || enemies.is_empty()
        || score < *last_clear_score + SCORE_MILESTONE
    {
        return Vec::new();
    }

    *last_clear_score = (score / SCORE_MILESTONE) * SCORE_MILESTONE;
    std::mem::take(enemies)
}

/// Roll for a new apple if none is on the board
pub fn try_spawn_power_up<R: Rng>(rng: &mut R, difficulty: Difficulty, exists: bool) -> Option<PowerUp> {
    if exists {
        return None;
    }
    if rng.random::<f32>() >= difficulty.power_up_spawn_chance() {
        return None;
    }

    let (min, max) = inset_bounds(POWER_UP_RADIUS);
    let pos = Vec2::new(
        rng.random_range(min.x..=max.x),
        rng.random_range(min.y..=max.y),
    );
    Some(PowerUp { pos })
}
