pub mod api;
pub mod assets;
pub mod components;
pub mod core;
pub mod input;
pub mod level;
pub mod renderer;
pub mod session;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::types::{EntityId, RoleTag};
pub use assets::manifest::{TextureDescriptor, TextureManifest};
pub use assets::registry::{TextureId, TextureRegistry, TextureSlot};
pub use components::entity::Entity;
pub use core::physics::{
    BodyDesc, BodyType, BoxShape, ColliderMaterial, PhysicsBody, PhysicsWorld, GRAVITY,
};
pub use core::scene::Scene;
pub use core::time::FrameClock;
pub use input::snapshot::{InputEvent, InputSnapshot, InputState, Key};
pub use level::editor::{random_level_name, EditorDoc};
pub use level::format::{FixtureDesc, LevelData, LevelError};
pub use level::library::{scan_levels, LevelEntry, LEVEL_EXT};
pub use renderer::instance::{RenderBuffer, SpriteInstance};
pub use renderer::traits::{FrameData, Frontend, Hud};
pub use session::context::EngineContext;
pub use session::menu::{LevelSelect, PlayReport};
pub use session::run::{RunOutcome, Session};
pub use session::scores::ScoreLedger;
pub use session::settings::Settings;
pub use systems::effects::{EffectsState, Particle, Rng};
pub use systems::render::build_frame;
