//! Turns parsed level data into a populated world.

use crate::api::types::EntityId;
use crate::level::format::LevelData;
use crate::session::context::EngineContext;

/// Texture name every player spawns with. Registered (or not) through the
/// texture manifest; missing is fine, the placeholder fill takes over.
pub const PLAYER_TEXTURE: &str = "player";

/// Spawn every fixture and the player into the context.
/// Returns the player's entity id.
pub fn populate(ctx: &mut EngineContext, level: &LevelData) -> EntityId {
    for fixture in &level.fixtures {
        ctx.spawn_fixture(fixture.role, fixture.pos, fixture.size);
    }
    ctx.spawn_player(level.spawn, Some(PLAYER_TEXTURE.to_string()))
}
