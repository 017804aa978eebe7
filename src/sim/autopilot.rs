//! Demo-mode aiming
//!
//! Picks the most dangerous enemy and leads the shot so a projectile fired
//! now meets it. Used by the headless runner; the browser build is always
//! player-driven.

use glam::DVec2;

use super::collision::edge_gap;
use super::state::GameState;
use super::tick::TickInput;
use crate::consts::PROJECTILE_SPEED;
use crate::distance;

/// Where to click right now, or `None` when there is nothing to shoot at
pub fn aim(state: &GameState) -> Option<DVec2> {
    let player = &state.player;

    // Closest to reaching the player goes first
    let target = state.enemies.iter().min_by(|a, b| {
        let gap_a = edge_gap(player.pos, player.radius, a.pos, a.radius);
        let gap_b = edge_gap(player.pos, player.radius, b.pos, b.radius);
        gap_a
            .partial_cmp(&gap_b)
            .unwrap_or(std::cmp::Ordering::Equal)
    })?;

    // Lead the target by the projectile's travel time
    let travel_frames = distance(player.pos, target.pos) / PROJECTILE_SPEED;
    Some(target.pos + target.vel * travel_frames)
}

/// Input for one demo frame: fire every `fire_interval` frames
pub fn demo_input(state: &GameState, frame: u64, fire_interval: u32) -> TickInput {
    let interval = u64::from(fire_interval.max(1));
    if frame % interval != 0 {
        return TickInput::default();
    }
    TickInput {
        clicks: aim(state).into_iter().collect(),
    }
}
