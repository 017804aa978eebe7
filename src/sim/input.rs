//! Pointer input: one click, one projectile

use glam::DVec2;

use super::state::GameState;
use crate::consts::PROJECTILE_SPEED;
use crate::direction_to;

/// Fire a projectile from the player toward `target` (canvas coordinates)
///
/// No cooldown: every click produces a projectile.
pub fn fire_projectile(state: &mut GameState, target: DVec2) -> u32 {
    let origin = state.player.pos;
    let vel = direction_to(origin, target, PROJECTILE_SPEED);
    state.spawn_projectile(origin, vel)
}
