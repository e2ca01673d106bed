//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use serde::{Deserialize, Serialize};

use super::collision::{player_hits_enemy, player_hits_power_up};
use super::events::{GameEvent, RemovalReason};
use super::movement::{is_out_of_bounds, move_enemy, move_player};
use super::spawn::{maybe_spawn_enemy, try_clear_enemies, try_spawn_power_up};
use super::state::{Difficulty, GamePhase, GameState};

/// Input snapshot for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Difficulty selector, read fresh every tick
    pub difficulty: Difficulty,
}

/// Advance the game state by one fixed timestep.
///
/// Returns the render-intent events produced by this tick. Does nothing
/// unless the session is running.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase != GamePhase::Running {
        return events;
    }

    let now = state.time_ticks;

    if state.player.boost_until.is_some_and(|until| now >= until) {
        state.player.boost_until = None;
        events.push(GameEvent::BoostExpired);
    }

    let difficulty = input.difficulty;
    state.difficulty = difficulty;

    move_player(&mut state.player, input, now);

    // Milestone wipe (easy/medium)
    let cleared = try_clear_enemies(
        difficulty,
        state.score,
        &mut state.last_clear_score,
        &mut state.enemies,
    );
    if !cleared.is_empty() {
        log::debug!("Score {}: cleared {} enemies", state.score, cleared.len());
        events.extend(cleared.iter().map(|e| GameEvent::EnemyRemoved {
            id: e.id,
            reason: RemovalReason::MilestoneClear,
        }));
    }

    // Enemy spawn
    let id = state.peek_entity_id();
    if let Some(enemy) = maybe_spawn_enemy(
        &mut state.rng,
        difficulty,
        state.enemies.len(),
        state.score,
        state.player.pos,
        id,
    ) {
        state.next_entity_id();
        log::debug!("Spawned {:?} enemy {} (size {})", enemy.shape, enemy.id, enemy.size);
        events.push(GameEvent::EnemySpawned {
            id: enemy.id,
            shape: enemy.shape,
            pos: enemy.pos,
            size: enemy.size,
        });
        state.enemies.push(enemy);
    }

    // Pursuit, capture and pruning
    let target = state.player.pos;
    let player = &state.player;
    let mut caught = false;
    state.enemies.retain_mut(|enemy| {
        if caught {
            return true;
        }
        move_enemy(enemy, target, difficulty);
        if player_hits_enemy(player, enemy) {
            caught = true;
            return true;
        }
        if is_out_of_bounds(enemy) {
            events.push(GameEvent::EnemyRemoved {
                id: enemy.id,
                reason: RemovalReason::OutOfBounds,
            });
            return false;
        }
        true
    });

    if caught {
        end_session(state, &mut events);
        return events;
    }

    // Apple spawn
    if let Some(power_up) = try_spawn_power_up(&mut state.rng, difficulty, state.power_up.is_some()) {
        events.push(GameEvent::PowerUpSpawned { pos: power_up.pos });
        state.power_up = Some(power_up);
    }

    // Apple pickup; a second apple restarts the boost window
    if let Some(power_up) = state.power_up {
        if player_hits_power_up(&state.player, &power_up) {
            state.power_up = None;
            let boost_until = state.player.boost(now);
            log::debug!("Apple eaten at tick {}, boosted until {}", now, boost_until);
            events.push(GameEvent::PowerUpCollected {
                pos: power_up.pos,
                boost_until,
            });
        }
    }

    state.score += 1;
    state.time_ticks += 1;

    events
}

/// Tear down the board after the player is caught
fn end_session(state: &mut GameState, events: &mut Vec<GameEvent>) {
    events.extend(state.enemies.drain(..).map(|e| GameEvent::EnemyRemoved {
        id: e.id,
        reason: RemovalReason::GameOver,
    }));
    if state.power_up.take().is_some() {
        events.push(GameEvent::PowerUpRemoved);
    }
    state.player.boost_until = None;
    state.phase = GamePhase::GameOver;

    log::info!("Game over: score {} on {}", state.score, state.difficulty.as_str());
    events.push(GameEvent::GameOver {
        final_score: state.score,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{Enemy, EnemyShape, PowerUp};
    use glam::Vec2;
    use proptest::prelude::*;

    fn running_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        state.phase = GamePhase::Running;
        state
    }

    fn enemy(id: u32, x: f32, y: f32) -> Enemy {
        Enemy {
            id,
            shape: EnemyShape::Square,
            pos: Vec2::new(x, y),
            size: 32.0,
        }
    }

    #[test]
    fn test_tick_does_nothing_unless_running() {
        let mut state = GameState::new(1);
        let events = tick(&mut state, &TickInput::default());
        assert!(events.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.time_ticks, 0);

        state.phase = GamePhase::GameOver;
        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_score_increments_per_tick() {
        let mut state = running_state(5);
        for _ in 0..10 {
            tick(&mut state, &TickInput::default());
            state.enemies.clear();
        }
        assert_eq!(state.score, 10);
        assert_eq!(state.time_ticks, 10);
    }

    #[test]
    fn test_coincident_enemy_ends_session() {
        let mut state = running_state(2);
        state.player.pos = Vec2::new(100.0, 100.0);
        state.enemies.push(enemy(99, 100.0, 100.0));
        state.power_up = Some(PowerUp {
            pos: Vec2::new(1200.0, 400.0),
        });

        let events = tick(&mut state, &TickInput::default());

        assert_eq!(state.phase, GamePhase::GameOver);
        assert!(state.enemies.is_empty());
        assert!(state.power_up.is_none());
        assert_eq!(state.score, 0);
        assert!(events.contains(&GameEvent::EnemyRemoved {
            id: 99,
            reason: RemovalReason::GameOver,
        }));
        assert_eq!(events.last(), Some(&GameEvent::GameOver { final_score: 0 }));

        // Stopped for good
        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_milestone_clear_through_tick() {
        let mut state = running_state(3);
        state.score = 1000;
        state.enemies = vec![
            enemy(1, 50.0, 50.0),
            enemy(2, 1550.0, 50.0),
            enemy(3, 1550.0, 550.0),
        ];

        let events = tick(&mut state, &TickInput::default());

        assert_eq!(state.last_clear_score, 1000);
        // At most the enemy spawned after the wipe
        assert!(state.enemies.len() <= 1);
        let cleared = events
            .iter()
            .filter(|e| matches!(e, GameEvent::EnemyRemoved { reason: RemovalReason::MilestoneClear, .. }))
            .count();
        assert_eq!(cleared, 3);
    }

    #[test]
    fn test_no_milestone_clear_on_hard() {
        let mut state = running_state(3);
        state.score = 1000;
        state.enemies = vec![enemy(1, 50.0, 50.0)];
        let input = TickInput {
            difficulty: Difficulty::Hard,
            ..Default::default()
        };

        tick(&mut state, &input);
        assert!(state.enemies.iter().any(|e| e.id == 1));
        assert_eq!(state.last_clear_score, 0);
    }

    #[test]
    fn test_out_of_bounds_enemy_pruned() {
        let mut state = running_state(4);
        // Far outside; pursuit moves it one unit back toward the field
        state.enemies.push(enemy(7, -100.0, 300.0));

        let events = tick(&mut state, &TickInput::default());

        assert!(state.enemies.iter().all(|e| e.id != 7));
        assert!(events.contains(&GameEvent::EnemyRemoved {
            id: 7,
            reason: RemovalReason::OutOfBounds,
        }));
    }

    #[test]
    fn test_power_up_pickup_boosts_player() {
        let mut state = running_state(6);
        state.player.pos = Vec2::new(480.0, 500.0);
        state.power_up = Some(PowerUp {
            pos: Vec2::new(500.0, 500.0),
        });

        let events = tick(&mut state, &TickInput::default());

        assert!(events.contains(&GameEvent::PowerUpCollected {
            pos: Vec2::new(500.0, 500.0),
            boost_until: BOOST_DURATION_TICKS,
        }));
        assert!(state.player.is_boosted(state.time_ticks));
        assert_eq!(state.player.speed(state.time_ticks), 12.0);
        assert!(state.power_up.is_none());
    }

    /// An apple parked in a corner blocks new spawns near the player
    fn parked_apple() -> Option<PowerUp> {
        Some(PowerUp {
            pos: Vec2::new(1584.0, 16.0),
        })
    }

    #[test]
    fn test_boost_expires_after_five_seconds() {
        let mut state = running_state(8);
        state.time_ticks = 1000;
        state.player.pos = Vec2::new(800.0, 300.0);
        state.power_up = Some(PowerUp {
            pos: Vec2::new(810.0, 300.0),
        });

        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.boost_until, Some(1300));

        let mut expired_at = None;
        for _ in 0..400 {
            // Keep the player out of danger and the apple away
            state.enemies.clear();
            state.power_up = parked_apple();
            let at = state.time_ticks;
            let events = tick(&mut state, &TickInput::default());
            if events.contains(&GameEvent::BoostExpired) {
                expired_at = Some(at);
                break;
            }
        }
        assert_eq!(expired_at, Some(1300));
        assert_eq!(state.player.boost_until, None);
    }

    #[test]
    fn test_boosted_moves_between_pickup_and_expiry() {
        let mut state = running_state(12);
        state.player.pos = Vec2::new(100.0, 300.0);
        state.power_up = Some(PowerUp {
            pos: Vec2::new(100.0, 300.0),
        });
        let right = TickInput {
            right: true,
            ..Default::default()
        };

        // Pickup tick moves at base speed
        tick(&mut state, &right);
        assert_eq!(state.player.pos.x, 106.0);
        assert_eq!(state.player.boost_until, Some(BOOST_DURATION_TICKS));

        let mut boosted = 0;
        let mut expired_at = None;
        while expired_at.is_none() {
            state.enemies.clear();
            state.power_up = parked_apple();
            state.player.pos = Vec2::new(100.0, 300.0);
            let at = state.time_ticks;
            let events = tick(&mut state, &right);
            if events.contains(&GameEvent::BoostExpired) {
                expired_at = Some(at);
            }
            if state.player.pos.x == 112.0 {
                boosted += 1;
            }
        }
        assert_eq!(boosted, BOOST_DURATION_TICKS - 1);
        assert_eq!(expired_at, Some(BOOST_DURATION_TICKS));
    }

    #[test]
    fn test_second_pickup_resets_boost() {
        let mut state = running_state(9);
        state.player.pos = Vec2::new(800.0, 300.0);
        state.power_up = Some(PowerUp {
            pos: Vec2::new(800.0, 300.0),
        });
        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.boost_until, Some(300));

        for _ in 0..100 {
            state.enemies.clear();
            state.power_up = parked_apple();
            tick(&mut state, &TickInput::default());
        }
        state.enemies.clear();
        state.power_up = Some(PowerUp {
            pos: Vec2::new(800.0, 300.0),
        });
        tick(&mut state, &TickInput::default());
        assert_eq!(state.player.boost_until, Some(401));
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = running_state(99999);
        let mut state2 = running_state(99999);

        let inputs = [
            TickInput {
                up: true,
                ..Default::default()
            },
            TickInput {
                left: true,
                difficulty: Difficulty::Hard,
                ..Default::default()
            },
            TickInput {
                down: true,
                right: true,
                difficulty: Difficulty::Medium,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for _ in 0..250 {
            for input in &inputs {
                let e1 = tick(&mut state1, input);
                let e2 = tick(&mut state2, input);
                assert_eq!(e1, e2);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.enemies, state2.enemies);
        assert_eq!(state1.power_up, state2.power_up);
        assert_eq!(state1.player.pos, state2.player.pos);
    }

    fn input_strategy() -> impl Strategy<Value = TickInput> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>(), 0u8..3).prop_map(
            |(up, down, left, right, d)| TickInput {
                up,
                down,
                left,
                right,
                difficulty: Difficulty::from_index(d).unwrap_or_default(),
            },
        )
    }

    fn crowded_state(seed: u64, crowd: usize) -> GameState {
        let mut state = running_state(seed);
        for i in 0..crowd {
            let id = state.next_entity_id();
            state.enemies.push(enemy(id, 20.0 + i as f32 * 10.0, 20.0));
        }
        state
    }

    proptest! {
        #[test]
        fn prop_player_stays_in_bounds(
            seed in any::<u64>(),
            inputs in prop::collection::vec(input_strategy(), 1..300),
        ) {
            let mut state = running_state(seed);
            for input in &inputs {
                let before = state.score;
                tick(&mut state, input);

                let p = state.player.pos;
                prop_assert!(p.x >= 0.0 && p.x <= PLAYFIELD_WIDTH);
                prop_assert!(p.y >= 0.0 && p.y <= PLAYFIELD_HEIGHT);
                prop_assert!(state.score >= before);
            }
        }

        #[test]
        fn prop_population_capped_below_hard(
            seed in any::<u64>(),
            crowd in 0usize..=20,
            level in 0u8..2,
            inputs in prop::collection::vec(input_strategy(), 1..300),
        ) {
            let difficulty = Difficulty::from_index(level).unwrap_or_default();
            let mut state = crowded_state(seed, crowd);

            for input in &inputs {
                let input = TickInput { difficulty, ..*input };
                tick(&mut state, &input);

                prop_assert!(state.enemies.len() <= ENEMY_CAP);
                prop_assert!(state.power_up.iter().count() <= 1);

                if state.phase == GamePhase::GameOver {
                    prop_assert!(state.enemies.is_empty());
                    prop_assert!(state.power_up.is_none());
                    break;
                }
            }
        }
    }
}
