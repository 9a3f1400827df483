use glam::Vec2;

use crate::api::types::{EntityId, RoleTag};
use crate::core::physics::PhysicsBody;

/// Fat Entity — one struct for every game object, tagged by role.
/// Player, obstacle, hazard and finish zone only differ in their role tag,
/// their physics body type and their material.
#[derive(Debug, Clone)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// Gameplay role; also the collider's tag in the physics world.
    pub role: RoleTag,
    /// Position in world space (synced from physics after every step).
    pub pos: Vec2,
    /// Rotation in radians (synced from physics after every step).
    pub rotation: f32,
    /// Full (width, height) size of the box, fixed at creation.
    pub size: Vec2,
    /// Name of the texture to draw with; `None` (or a name that failed to
    /// register) falls back to the role's placeholder color.
    pub texture: Option<String>,
    /// Physics body handles, if the entity is in the physics world.
    pub body: Option<PhysicsBody>,
}

impl Entity {
    /// Create a new entity with the given ID and role at the origin.
    pub fn new(id: EntityId, role: RoleTag) -> Self {
        Self {
            id,
            role,
            pos: Vec2::ZERO,
            rotation: 0.0,
            size: Vec2::ZERO,
            texture: None,
            body: None,
        }
    }

    // -- Builder pattern --

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_size(mut self, size: Vec2) -> Self {
        self.size = size;
        self
    }

    pub fn with_texture(mut self, texture: Option<String>) -> Self {
        self.texture = texture;
        self
    }

    pub fn with_body(mut self, body: PhysicsBody) -> Self {
        self.body = Some(body);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_fields() {
        let e = Entity::new(EntityId(7), RoleTag::Hazard)
            .with_pos(Vec2::new(1.0, 2.0))
            .with_size(Vec2::new(50.0, 30.0))
            .with_texture(Some("spike".to_string()));

        assert_eq!(e.id, EntityId(7));
        assert_eq!(e.role, RoleTag::Hazard);
        assert_eq!(e.pos, Vec2::new(1.0, 2.0));
        assert_eq!(e.size, Vec2::new(50.0, 30.0));
        assert_eq!(e.texture.as_deref(), Some("spike"));
        assert!(e.body.is_none());
    }
}
