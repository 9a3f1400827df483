use glam::Vec2;

use crate::api::types::{EntityId, RoleTag};
use crate::components::entity::Entity;
use crate::core::physics::{BodyDesc, BoxShape, ColliderMaterial, PhysicsWorld};
use crate::core::scene::Scene;

/// Side length of the player's box, world units.
pub const PLAYER_SIZE: f32 = 50.0;

/// Material of the player body: bouncy and grippy.
pub const PLAYER_MATERIAL: ColliderMaterial = ColliderMaterial {
    restitution: 0.8,
    friction: 8.0,
    density: 1.0,
};

/// Material of static level fixtures.
pub const FIXTURE_MATERIAL: ColliderMaterial = ColliderMaterial {
    restitution: 0.4,
    friction: 8.0,
    density: 1.0,
};

/// Mutable world state of one play session: the scene and the physics
/// world it mirrors, plus the entity id counter.
///
/// All body creation and destruction funnels through here so a physics
/// body can never outlive (or survive) its owning entity.
pub struct EngineContext {
    pub scene: Scene,
    pub physics: PhysicsWorld,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            physics: PhysicsWorld::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Spawn an entity with a physics body. Returns the EntityId.
    pub fn spawn_with_body(
        &mut self,
        entity: Entity,
        desc: BodyDesc,
        material: ColliderMaterial,
    ) -> EntityId {
        let id = entity.id;
        let body = self.physics.create_body(id, &desc, material);
        self.scene.spawn(entity.with_body(body));
        id
    }

    /// Spawn a dynamic player box at `pos` with zero velocity.
    pub fn spawn_player(&mut self, pos: Vec2, texture: Option<String>) -> EntityId {
        let id = self.next_id();
        let size = Vec2::splat(PLAYER_SIZE);
        let entity = Entity::new(id, RoleTag::Player)
            .with_pos(pos)
            .with_size(size)
            .with_texture(texture);
        let desc = BodyDesc::dynamic(BoxShape::from_size(size), RoleTag::Player)
            .with_position(pos);
        self.spawn_with_body(entity, desc, PLAYER_MATERIAL)
    }

    /// Spawn a static level fixture (obstacle, hazard or finish zone).
    pub fn spawn_fixture(&mut self, role: RoleTag, pos: Vec2, size: Vec2) -> EntityId {
        let id = self.next_id();
        let entity = Entity::new(id, role).with_pos(pos).with_size(size);
        let desc = BodyDesc::fixed(BoxShape::from_size(size), role).with_position(pos);
        self.spawn_with_body(entity, desc, FIXTURE_MATERIAL)
    }

    /// Despawn an entity, removing its physics body from the world first.
    pub fn despawn(&mut self, id: EntityId) {
        if let Some(entity) = self.scene.despawn(id) {
            if let Some(body) = &entity.body {
                self.physics.remove_body(body);
            }
        }
    }

    /// Set the linear velocity of an entity's physics body.
    pub fn set_velocity(&mut self, id: EntityId, vel: Vec2) {
        if let Some(entity) = self.scene.get(id) {
            if let Some(body) = &entity.body {
                self.physics.set_velocity(body, vel);
            }
        }
    }

    /// Get the linear velocity of an entity's physics body.
    pub fn velocity(&self, id: EntityId) -> Vec2 {
        self.scene
            .get(id)
            .and_then(|e| e.body.as_ref())
            .map(|body| self.physics.velocity(body))
            .unwrap_or(Vec2::ZERO)
    }

    /// The player's entity id, if a player is alive.
    pub fn player_id(&self) -> Option<EntityId> {
        self.scene.player().map(|e| e.id)
    }

    /// Role tags of every shape overlapping the player's shape.
    pub fn player_overlaps(&self) -> Vec<RoleTag> {
        self.scene
            .player()
            .and_then(|e| e.body.as_ref())
            .map(|body| self.physics.query_overlaps(body))
            .unwrap_or_default()
    }

    /// Step the physics simulation by `dt` and sync body positions back to
    /// the entities, so collision queries and rendering see post-step state.
    pub fn step(&mut self, dt: f32) {
        self.physics.step(dt);
        for entity in self.scene.iter_mut() {
            if let Some(body) = &entity.body {
                let (pos, angle) = self.physics.body_position(body);
                entity.pos = pos;
                entity.rotation = angle;
            }
        }
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}
