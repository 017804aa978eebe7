//! Orb Blaster - A single-screen arcade shooter
//!
//! Core modules:
//! - `sim`: Simulation (entities, spawning, collisions, the per-frame updater)
//! - `session`: Start/reset/game-over state machine and score ownership
//! - `renderer`: Drawing collaborator (Canvas 2D in the browser)
//! - `ui`: Scoreboard and menu collaborators
//! - `settings`: Player preferences loaded from JSON

pub mod error;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod ui;

pub use error::SettingsError;
pub use session::{Session, SessionPhase};
pub use settings::Settings;

use glam::DVec2;

/// Game configuration constants
pub mod consts {
    /// Player defaults - fixed at canvas center
    pub const PLAYER_RADIUS: f64 = 15.0;

    /// Projectile defaults
    pub const PROJECTILE_RADIUS: f64 = 5.0;
    pub const PROJECTILE_SPEED: f64 = 5.0;

    /// Enemy spawn cadence (milliseconds)
    pub const SPAWN_INTERVAL_MS: f64 = 800.0;
    /// Enemy radius range [min, max)
    pub const ENEMY_MIN_SPAWN_RADIUS: f64 = 10.0;
    pub const ENEMY_MAX_SPAWN_RADIUS: f64 = 25.0;
    pub const ENEMY_SPEED: f64 = 1.4;
    /// Radius removed by a single hit
    pub const ENEMY_SHRINK_STEP: f64 = 10.0;
    /// An enemy whose post-shrink radius would not exceed this is destroyed instead
    pub const ENEMY_MIN_RADIUS: f64 = 5.0;
    /// Duration of the radius shrink tween (milliseconds)
    pub const SHRINK_DURATION_MS: f64 = 500.0;

    /// Particle behavior
    pub const PARTICLE_FRICTION: f64 = 0.96;
    pub const PARTICLE_FADE: f64 = 0.02;
    pub const PARTICLE_MAX_RADIUS: f64 = 2.0;
    pub const PARTICLE_MAX_SPEED: f64 = 5.0;

    /// Two circles count as touching once the gap between their edges drops below this
    pub const CONTACT_GAP: f64 = 1.0;

    /// Points awarded per hit
    pub const SHRINK_SCORE: u64 = 10;
    pub const KILL_SCORE: u64 = 15;

    /// Alpha of the black overlay drawn each frame (motion trails)
    pub const TRAIL_FADE_ALPHA: f64 = 0.1;
}

/// Unit vector pointing along `angle` (radians)
#[inline]
pub fn angle_to_unit(angle: f64) -> DVec2 {
    DVec2::new(angle.cos(), angle.sin())
}

/// Velocity of magnitude `speed` pointing from `from` toward `to`
///
/// Goes through `atan2` so a zero-length direction yields `(speed, 0)` rather
/// than NaN.
#[inline]
pub fn direction_to(from: DVec2, to: DVec2, speed: f64) -> DVec2 {
    let delta = to - from;
    angle_to_unit(delta.y.atan2(delta.x)) * speed
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: DVec2, b: DVec2) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_to_unit() {
        let v = angle_to_unit(0.0);
        assert!((v.x - 1.0).abs() < 1e-12);
        assert!(v.y.abs() < 1e-12);

        let v = angle_to_unit(std::f64::consts::FRAC_PI_2);
        assert!(v.x.abs() < 1e-12);
        assert!((v.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_direction_to_scales_to_speed() {
        let v = direction_to(DVec2::new(10.0, 10.0), DVec2::new(13.0, 14.0), 5.0);
        assert!((v.length() - 5.0).abs() < 1e-9);
        assert!((v.x - 3.0).abs() < 1e-9);
        assert!((v.y - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_direction_to_same_point() {
        let p = DVec2::new(3.0, 3.0);
        assert_eq!(direction_to(p, p, 2.0), DVec2::new(2.0, 0.0));
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(DVec2::ZERO, DVec2::new(3.0, 4.0)), 5.0);
        assert_eq!(distance(DVec2::new(1.0, 1.0), DVec2::new(1.0, 1.0)), 0.0);
    }
}
