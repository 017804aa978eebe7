//! Simulation module
//!
//! All gameplay logic lives here. This module stays free of platform code:
//! - Seeded RNG only
//! - Stable iteration order (insertion order of each collection)
//! - Drawing goes through the `Renderer` trait

pub mod autopilot;
pub mod collision;
pub mod input;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod tween;

pub use collision::{circles_touch, edge_gap, outside_canvas};
pub use input::fire_projectile;
pub use spawn::{SpawnTimer, spawn_due, spawn_enemy};
pub use state::{Color, Enemy, GameEvent, GameState, Particle, Player, Projectile};
pub use tick::{TickInput, spawn_explosion, tick, update};
pub use tween::RadiusTween;
