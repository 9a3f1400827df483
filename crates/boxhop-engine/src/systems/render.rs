use crate::assets::registry::TextureRegistry;
use crate::core::scene::Scene;
use crate::renderer::instance::{RenderBuffer, SpriteInstance};
use crate::systems::effects::EffectsState;

/// Side length of a rendered particle square, world units.
pub const PARTICLE_SIZE: f32 = 10.0;

/// Build the frame's sprite instances from the scene and live particles.
///
/// Entities with a registered texture render textured (white tint); an
/// entity with no texture, or whose texture failed to register, renders as
/// a solid rectangle in its role's placeholder color. Particles render as
/// small solid squares after the entities.
pub fn build_frame(
    scene: &Scene,
    effects: &EffectsState,
    registry: &TextureRegistry,
    buffer: &mut RenderBuffer,
) {
    buffer.clear();

    for entity in scene.iter() {
        let instance = match entity.texture.as_deref().and_then(|name| registry.get(name)) {
            Some(texture) => SpriteInstance {
                x: entity.pos.x,
                y: entity.pos.y,
                rotation: entity.rotation,
                width: entity.size.x,
                height: entity.size.y,
                texture: texture.0 as f32,
                r: 1.0,
                g: 1.0,
                b: 1.0,
                a: 1.0,
            },
            None => {
                let [r, g, b, a] = entity.role.placeholder_color();
                SpriteInstance {
                    x: entity.pos.x,
                    y: entity.pos.y,
                    rotation: entity.rotation,
                    width: entity.size.x,
                    height: entity.size.y,
                    texture: SpriteInstance::SOLID_FILL,
                    r,
                    g,
                    b,
                    a,
                }
            }
        };
        buffer.push(instance);
    }

    for particle in &effects.particles {
        let [r, g, b, a] = particle.color;
        buffer.push(SpriteInstance {
            x: particle.pos.x,
            y: particle.pos.y,
            rotation: 0.0,
            width: PARTICLE_SIZE,
            height: PARTICLE_SIZE,
            texture: SpriteInstance::SOLID_FILL,
            r,
            g,
            b,
            a,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{EntityId, RoleTag};
    use crate::components::entity::Entity;
    use glam::Vec2;
    use tempfile::TempDir;

    #[test]
    fn untextured_entity_gets_role_color() {
        let mut scene = Scene::new();
        scene.spawn(
            Entity::new(EntityId(1), RoleTag::Hazard)
                .with_pos(Vec2::new(10.0, 20.0))
                .with_size(Vec2::new(50.0, 30.0)),
        );

        let effects = EffectsState::new(1);
        let registry = TextureRegistry::new();
        let mut buffer = RenderBuffer::new();
        build_frame(&scene, &effects, &registry, &mut buffer);

        assert_eq!(buffer.instance_count(), 1);
        let inst = buffer.instances()[0];
        assert_eq!(inst.texture, SpriteInstance::SOLID_FILL);
        assert_eq!([inst.r, inst.g, inst.b, inst.a], RoleTag::Hazard.placeholder_color());
        assert_eq!(inst.width, 50.0);
        assert_eq!(inst.height, 30.0);
    }

    #[test]
    fn unregistered_texture_falls_back_to_role_color() {
        let mut scene = Scene::new();
        scene.spawn(
            Entity::new(EntityId(1), RoleTag::Obstacle)
                .with_size(Vec2::splat(50.0))
                .with_texture(Some("missing".to_string())),
        );

        let effects = EffectsState::new(1);
        let registry = TextureRegistry::new();
        let mut buffer = RenderBuffer::new();
        build_frame(&scene, &effects, &registry, &mut buffer);

        let inst = buffer.instances()[0];
        assert_eq!(inst.texture, SpriteInstance::SOLID_FILL);
        assert_eq!([inst.r, inst.g, inst.b, inst.a], RoleTag::Obstacle.placeholder_color());
    }

    #[test]
    fn registered_texture_is_referenced_by_slot() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("player.png"), b"img").unwrap();

        let mut registry = TextureRegistry::new();
        let id = registry.register("player", dir.path().join("player.png")).unwrap();

        let mut scene = Scene::new();
        scene.spawn(
            Entity::new(EntityId(1), RoleTag::Player)
                .with_size(Vec2::splat(50.0))
                .with_texture(Some("player".to_string())),
        );

        let effects = EffectsState::new(1);
        let mut buffer = RenderBuffer::new();
        build_frame(&scene, &effects, &registry, &mut buffer);

        let inst = buffer.instances()[0];
        assert_eq!(inst.texture, id.0 as f32);
        assert_eq!([inst.r, inst.g, inst.b, inst.a], [1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn particles_render_after_entities() {
        let mut scene = Scene::new();
        scene.spawn(Entity::new(EntityId(1), RoleTag::Obstacle).with_size(Vec2::splat(50.0)));

        let mut effects = EffectsState::new(1);
        effects.spawn_burst(Vec2::new(5.0, 6.0), [1.0, 0.0, 0.0, 1.0]);

        let registry = TextureRegistry::new();
        let mut buffer = RenderBuffer::new();
        build_frame(&scene, &effects, &registry, &mut buffer);

        assert_eq!(buffer.instance_count() as usize, 1 + effects.len());
        let last = buffer.instances()[buffer.instances().len() - 1];
        assert_eq!(last.width, PARTICLE_SIZE);
        assert_eq!(last.texture, SpriteInstance::SOLID_FILL);
    }
}
