//! Enemy spawner
//!
//! A repeating timer owned by the session state. Because it lives inside
//! `GameState`, starting a new session replaces it and an old run can never
//! keep spawning into the new one.

use glam::DVec2;
use rand::Rng;

use super::state::{Color, GameState};
use crate::consts::*;

/// Fixed-period timer counting elapsed simulation time
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    pub interval_ms: f64,
    elapsed_ms: f64,
}

impl SpawnTimer {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms,
            elapsed_ms: 0.0,
        }
    }

    /// Advance by `dt_ms` and return how many periods completed
    pub fn advance(&mut self, dt_ms: f64) -> u32 {
        if self.interval_ms <= 0.0 || dt_ms <= 0.0 {
            return 0;
        }
        self.elapsed_ms += dt_ms;
        let mut due = 0;
        while self.elapsed_ms >= self.interval_ms {
            self.elapsed_ms -= self.interval_ms;
            due += 1;
        }
        due
    }

    /// Time until the next spawn
    pub fn remaining_ms(&self) -> f64 {
        (self.interval_ms - self.elapsed_ms).max(0.0)
    }
}

/// Create one enemy just outside a random edge, aimed at the center
pub fn spawn_enemy(state: &mut GameState) -> u32 {
    let (width, height) = (state.width, state.height);
    let rng = &mut state.rng;

    let radius = rng.random_range(ENEMY_MIN_SPAWN_RADIUS..ENEMY_MAX_SPAWN_RADIUS);

    let pos = if rng.random_bool(0.5) {
        // Left or right edge
        let x = if rng.random_bool(0.5) {
            -radius
        } else {
            width + radius
        };
        DVec2::new(x, rng.random::<f64>() * height)
    } else {
        // Top or bottom edge
        let x = rng.random::<f64>() * width;
        let y = if rng.random_bool(0.5) {
            -radius
        } else {
            height + radius
        };
        DVec2::new(x, y)
    };

    let color = Color::hue(rng.random::<f64>() * 360.0);
    let id = state.spawn_enemy_at(pos, radius, color);
    log::debug!(
        "Spawned enemy {} at ({:.1}, {:.1}) r={:.1}",
        id,
        pos.x,
        pos.y,
        radius
    );
    id
}

/// Advance the spawn timer and create every enemy that came due
pub fn spawn_due(state: &mut GameState, dt_ms: f64) -> u32 {
    let due = state.spawn_timer.advance(dt_ms);
    for _ in 0..due {
        spawn_enemy(state);
    }
    due
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_fires_every_interval() {
        let mut timer = SpawnTimer::new(800.0);
        assert_eq!(timer.advance(799.0), 0);
        assert_eq!(timer.advance(1.0), 1);
        assert_eq!(timer.advance(1600.0), 2);
        assert_eq!(timer.advance(0.0), 0);
        assert_eq!(timer.remaining_ms(), 800.0);
    }

    #[test]
    fn test_timer_ignores_negative_dt() {
        let mut timer = SpawnTimer::new(800.0);
        assert_eq!(timer.advance(-5000.0), 0);
        assert_eq!(timer.remaining_ms(), 800.0);
    }

    #[test]
    fn test_spawned_enemy_invariants() {
        let mut state = GameState::new(42, 1024.0, 768.0);
        for _ in 0..500 {
            spawn_enemy(&mut state);
        }
        assert_eq!(state.enemies.len(), 500);

        let center = state.center();
        for enemy in &state.enemies {
            assert!(enemy.radius >= ENEMY_MIN_SPAWN_RADIUS);
            assert!(enemy.radius < ENEMY_MAX_SPAWN_RADIUS);
            assert!((enemy.vel.length() - ENEMY_SPEED).abs() < 1e-9);

            // Heading toward the center
            let to_center = center - enemy.pos;
            assert!(enemy.vel.dot(to_center) > 0.0);

            // Just outside one of the edges
            let on_vertical_edge = enemy.pos.x == -enemy.radius
                || enemy.pos.x == state.width + enemy.radius;
            let on_horizontal_edge = enemy.pos.y == -enemy.radius
                || enemy.pos.y == state.height + enemy.radius;
            assert!(on_vertical_edge || on_horizontal_edge);

            match enemy.color {
                Color::Hsl {
                    hue,
                    saturation,
                    lightness,
                } => {
                    assert!((0.0..360.0).contains(&hue));
                    assert_eq!(saturation, 50.0);
                    assert_eq!(lightness, 50.0);
                }
                other => panic!("unexpected enemy color {other:?}"),
            }
        }
    }

    #[test]
    fn test_spawn_due_uses_timer() {
        let mut state = GameState::new(7, 800.0, 600.0);
        assert_eq!(spawn_due(&mut state, 500.0), 0);
        assert_eq!(spawn_due(&mut state, 300.0), 1);
        assert_eq!(state.enemies.len(), 1);
    }

    #[test]
    fn test_spawning_is_deterministic() {
        let mut a = GameState::new(99, 800.0, 600.0);
        let mut b = GameState::new(99, 800.0, 600.0);
        for _ in 0..10 {
            spawn_enemy(&mut a);
            spawn_enemy(&mut b);
        }
        for (ea, eb) in a.enemies.iter().zip(&b.enemies) {
            assert_eq!(ea.pos, eb.pos);
            assert_eq!(ea.radius, eb.radius);
        }
    }
}
