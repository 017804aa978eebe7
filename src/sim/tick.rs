//! Per-frame simulation tick
//!
//! Core game loop: drain input, run the spawner, then advance every entity
//! once and resolve collisions.

use glam::DVec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::collision::{circles_touch, outside_canvas};
use super::input::fire_projectile;
use super::spawn::spawn_due;
use super::state::{Color, GameEvent, GameState, Particle};
use crate::consts::*;
use crate::renderer::Renderer;

/// Input gathered since the previous frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Click positions in canvas coordinates, oldest first
    pub clicks: Vec<DVec2>,
}

impl TickInput {
    pub fn is_empty(&self) -> bool {
        self.clicks.is_empty()
    }
}

/// Advance the game state by one frame
///
/// `dt_ms` is the wall time since the previous frame; it drives the spawn
/// timer and the shrink tweens. Entity motion is per-frame, not per-ms.
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: f64, renderer: &mut dyn Renderer) {
    // Loop is halted once the player is hit
    if state.game_over {
        return;
    }

    let dt_ms = dt_ms.max(0.0);
    state.time_ms += dt_ms;
    state.time_ticks += 1;

    for &click in &input.clicks {
        fire_projectile(state, click);
    }

    spawn_due(state, dt_ms);

    update(state, renderer);
}

/// One pass of the updater over every live entity
///
/// Projectiles and enemies that die during the pass are only marked; the
/// collections are compacted after the pass so nothing is removed while it is
/// being iterated. Particles expire in place since nothing else indexes them.
pub fn update(state: &mut GameState, renderer: &mut dyn Renderer) {
    let size = DVec2::new(state.width, state.height);
    renderer.fill_overlay(Color::Black, state.overlay_alpha, size);
    state.player.draw(renderer);

    // Marked for removal at the end of the pass
    let mut dead_projectiles: Vec<u32> = Vec::new();
    let mut dead_enemies: Vec<u32> = Vec::new();

    for projectile in &mut state.projectiles {
        projectile.update(renderer);
        if outside_canvas(projectile.pos, projectile.radius, state.width, state.height) {
            dead_projectiles.push(projectile.id);
        }
    }

    state.particles.retain_mut(|particle| {
        if particle.is_expired() {
            false
        } else {
            particle.update(renderer);
            true
        }
    });

    let now = state.time_ms;
    let player = state.player.clone();

    for enemy in &mut state.enemies {
        enemy.sample_radius(now);
        enemy.update(renderer);

        // The rest of the pass still runs after this fires; hits scored after
        // the loss still count toward the HUD total.
        if circles_touch(player.pos, player.radius, enemy.pos, enemy.radius) && !state.game_over {
            state.game_over = true;
            state.events.push(GameEvent::GameOver { score: state.score });
            log::info!(
                "Game over at tick {} with score {}",
                state.time_ticks,
                state.score
            );
        }

        for projectile in &state.projectiles {
            if !circles_touch(projectile.pos, projectile.radius, enemy.pos, enemy.radius) {
                continue;
            }

            if state.particles_enabled {
                spawn_explosion(
                    &mut state.particles,
                    &mut state.rng,
                    projectile.pos,
                    enemy.radius,
                    enemy.color,
                );
            }

            if enemy.radius - ENEMY_SHRINK_STEP > ENEMY_MIN_RADIUS {
                state.score += SHRINK_SCORE;
                enemy.shrink(now, state.shrink_duration_ms);
                dead_projectiles.push(projectile.id);
                state.events.push(GameEvent::EnemyShrunk { id: enemy.id });
                log::debug!("Enemy {} shrinking to {:.1}", enemy.id, enemy.target_radius());
            } else {
                state.score += KILL_SCORE;
                dead_enemies.push(enemy.id);
                dead_projectiles.push(projectile.id);
                state.events.push(GameEvent::EnemyDestroyed { id: enemy.id });
                log::debug!("Enemy {} destroyed", enemy.id);
            }
            state.events.push(GameEvent::ScoreChanged(state.score));
        }
    }

    // Compact after iteration; marking the same id twice is harmless
    if !dead_projectiles.is_empty() {
        state.projectiles.retain(|p| !dead_projectiles.contains(&p.id));
    }
    if !dead_enemies.is_empty() {
        state.enemies.retain(|e| !dead_enemies.contains(&e.id));
    }
}

/// Burst of debris at `at`, one particle per half unit of enemy radius
pub fn spawn_explosion(
    particles: &mut Vec<Particle>,
    rng: &mut Pcg32,
    at: DVec2,
    enemy_radius: f64,
    color: Color,
) -> usize {
    let count = (enemy_radius * 2.0).floor().max(0.0) as usize;
    particles.reserve(count);
    for _ in 0..count {
        let radius = rng.random::<f64>() * PARTICLE_MAX_RADIUS;
        let vx = (rng.random::<f64>() - 0.5) * (rng.random::<f64>() * PARTICLE_MAX_SPEED);
        let vy = (rng.random::<f64>() - 0.5) * (rng.random::<f64>() * PARTICLE_MAX_SPEED);
        particles.push(Particle::new(at, DVec2::new(vx, vy), radius, color));
    }
    count
}
