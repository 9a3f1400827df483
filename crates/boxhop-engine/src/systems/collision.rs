//! Collision resolver: maps the player's overlap set to gameplay events.
//!
//! Runs every tick after the physics step, so queries see post-step
//! positions.

use glam::Vec2;

use crate::api::types::RoleTag;
use crate::session::context::EngineContext;
use crate::systems::effects::EffectsState;

/// What the resolver did this tick. Both flags may be set at once: a
/// hazard reset never suppresses a finish and vice versa.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// The player touched a hazard and was reset to the spawn position.
    pub hazard_reset: bool,
    /// The player touched the finish zone; the run ends after this tick.
    pub finished: bool,
}

/// Resolve the player's overlaps against the level.
///
/// Hazard contact is a hard reset: burst of particles at the point of
/// death, then the player body is removed from the world and a fresh one
/// (same texture, zero velocity) is created at `spawn`. The finish check
/// runs second and reads the *current* player shape — if the reset moved
/// the player onto the finish zone, the run finishes in the same tick.
pub fn resolve(ctx: &mut EngineContext, effects: &mut EffectsState, spawn: Vec2) -> TickOutcome {
    let mut outcome = TickOutcome::default();

    if ctx.player_overlaps().contains(&RoleTag::Hazard) {
        if let Some(player) = ctx.scene.player() {
            let id = player.id;
            let pos = player.pos;
            let texture = player.texture.clone();

            effects.spawn_burst(pos, RoleTag::Hazard.placeholder_color());
            ctx.despawn(id);
            ctx.spawn_player(spawn, texture);
            outcome.hazard_reset = true;
        }
    }

    if ctx.player_overlaps().contains(&RoleTag::Finish) {
        outcome.finished = true;
    }

    outcome
}
