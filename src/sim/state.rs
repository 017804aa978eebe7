//! Game state and core simulation types
//!
//! Everything a session owns lives here: the player, the three live
//! collections, the score, the spawn timer and the seeded RNG.

use std::fmt;

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn::SpawnTimer;
use super::tween::RadiusTween;
use crate::consts::*;
use crate::direction_to;
use crate::renderer::{Renderer, draw_circle};

/// Display color token handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
    /// Hue in degrees, saturation/lightness in percent
    Hsl {
        hue: f64,
        saturation: f64,
        lightness: f64,
    },
}

impl Color {
    /// Enemy palette: any hue at 50% saturation and lightness
    pub fn hue(hue: f64) -> Self {
        Color::Hsl {
            hue,
            saturation: 50.0,
            lightness: 50.0,
        }
    }
}

impl fmt::Display for Color {
    /// CSS color string
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
            Color::Hsl {
                hue,
                saturation,
                lightness,
            } => write!(f, "hsl({hue}, {saturation}%, {lightness}%)"),
        }
    }
}

/// The player, parked at the canvas center for the whole session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: DVec2,
    pub radius: f64,
    pub color: Color,
}

impl Player {
    pub fn new(pos: DVec2) -> Self {
        Self {
            pos,
            radius: PLAYER_RADIUS,
            color: Color::White,
        }
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        draw_circle(renderer, self.pos, self.radius, self.color, 1.0);
    }
}

/// A shot fired from the player toward a click point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
    pub color: Color,
}

impl Projectile {
    pub fn new(id: u32, pos: DVec2, vel: DVec2) -> Self {
        Self {
            id,
            pos,
            vel,
            radius: PROJECTILE_RADIUS,
            color: Color::White,
        }
    }

    /// Render, then move by the fixed velocity
    pub fn update(&mut self, renderer: &mut dyn Renderer) {
        draw_circle(renderer, self.pos, self.radius, self.color, 1.0);
        self.pos += self.vel;
    }
}

/// An orb drifting toward the center
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
    pub color: Color,
    /// Active shrink animation, if any
    #[serde(skip)]
    pub tween: Option<RadiusTween>,
}

impl Enemy {
    pub fn new(id: u32, pos: DVec2, vel: DVec2, radius: f64, color: Color) -> Self {
        Self {
            id,
            pos,
            vel,
            radius,
            color,
            tween: None,
        }
    }

    /// Pull the current radius out of the shrink tween
    pub fn sample_radius(&mut self, now_ms: f64) {
        if let Some(tween) = self.tween {
            self.radius = tween.sample(now_ms);
            if tween.is_finished(now_ms) {
                self.tween = None;
            }
        }
    }

    /// Start shrinking by one step from the current radius
    ///
    /// A new hit replaces any tween still in flight. A zero duration applies
    /// the new radius immediately.
    pub fn shrink(&mut self, now_ms: f64, duration_ms: f64) {
        let target = self.radius - ENEMY_SHRINK_STEP;
        if duration_ms <= 0.0 {
            self.radius = target;
            self.tween = None;
        } else {
            self.tween = Some(RadiusTween::new(self.radius, target, now_ms, duration_ms));
        }
    }

    /// Radius this enemy is heading toward (current radius if not shrinking)
    pub fn target_radius(&self) -> f64 {
        self.tween.map_or(self.radius, |t| t.to)
    }

    /// Render, then move by the fixed velocity
    pub fn update(&mut self, renderer: &mut dyn Renderer) {
        draw_circle(renderer, self.pos, self.radius, self.color, 1.0);
        self.pos += self.vel;
    }
}

/// Explosion debris
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub radius: f64,
    pub color: Color,
    /// Opacity, starts at 1 and only ever decreases
    pub alpha: f64,
}

impl Particle {
    pub fn new(pos: DVec2, vel: DVec2, radius: f64, color: Color) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
            alpha: 1.0,
        }
    }

    /// Render at the current alpha, then apply friction, move and fade
    pub fn update(&mut self, renderer: &mut dyn Renderer) {
        draw_circle(renderer, self.pos, self.radius, self.color, self.alpha);
        self.vel *= PARTICLE_FRICTION;
        self.pos += self.vel;
        self.alpha -= PARTICLE_FADE;
    }

    pub fn is_expired(&self) -> bool {
        self.alpha <= 0.0
    }
}

/// Notifications raised by the updater for the session controller
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Score changed to the given total
    ScoreChanged(u64),
    /// Enemy was hit and is shrinking
    EnemyShrunk { id: u32 },
    /// Enemy was hit and will be removed at the end of the tick
    EnemyDestroyed { id: u32 },
    /// An enemy reached the player; carries the score at that moment
    GameOver { score: u64 },
}

/// Complete state of one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    /// Canvas extent
    pub width: f64,
    pub height: f64,
    /// Simulation clock (milliseconds since session start)
    pub time_ms: f64,
    /// Ticks processed
    pub time_ticks: u64,
    pub score: u64,
    /// Set once when an enemy reaches the player
    pub game_over: bool,
    pub player: Player,
    /// Live projectiles (insertion order)
    pub projectiles: Vec<Projectile>,
    /// Live enemies (insertion order)
    pub enemies: Vec<Enemy>,
    /// Live particles (insertion order)
    pub particles: Vec<Particle>,
    pub spawn_timer: SpawnTimer,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
    /// Whether hits spawn explosion particles
    pub particles_enabled: bool,
    /// Alpha of the per-frame black overlay
    pub overlay_alpha: f64,
    /// Length of the enemy shrink animation
    pub shrink_duration_ms: f64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a fresh session state for a canvas of the given size
    pub fn new(seed: u64, width: f64, height: f64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            width,
            height,
            time_ms: 0.0,
            time_ticks: 0,
            score: 0,
            game_over: false,
            player: Player::new(DVec2::new(width / 2.0, height / 2.0)),
            projectiles: Vec::new(),
            enemies: Vec::new(),
            particles: Vec::new(),
            spawn_timer: SpawnTimer::new(SPAWN_INTERVAL_MS),
            events: Vec::new(),
            particles_enabled: true,
            overlay_alpha: TRAIL_FADE_ALPHA,
            shrink_duration_ms: SHRINK_DURATION_MS,
            next_id: 1,
        }
    }

    /// Canvas center, where the player sits and enemies aim
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Add an enemy at `pos` heading for the canvas center
    pub fn spawn_enemy_at(&mut self, pos: DVec2, radius: f64, color: Color) -> u32 {
        let id = self.next_entity_id();
        let vel = direction_to(pos, self.center(), ENEMY_SPEED);
        self.enemies.push(Enemy::new(id, pos, vel, radius, color));
        id
    }

    /// Add a projectile at `pos` with the given velocity
    pub fn spawn_projectile(&mut self, pos: DVec2, vel: DVec2) -> u32 {
        let id = self.next_entity_id();
        self.projectiles.push(Projectile::new(id, pos, vel));
        id
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
