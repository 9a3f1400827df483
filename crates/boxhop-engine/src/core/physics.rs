use glam::Vec2;
use rapier2d::prelude::*;

use crate::api::types::{EntityId, RoleTag};

/// Downward gravity applied to every dynamic body, in world units/s².
/// The coordinate system is Y-down, so positive Y pulls toward the floor.
pub const GRAVITY: f32 = 980.0;

// ---------------------------------------------------------------------------
// Conversion helpers (private) — glam ↔ nalgebra
// ---------------------------------------------------------------------------

fn vec2_to_na(v: Vec2) -> nalgebra::Vector2<f32> {
    nalgebra::Vector2::new(v.x, v.y)
}

fn na_to_vec2(v: &nalgebra::Vector2<f32>) -> Vec2 {
    Vec2::new(v.x, v.y)
}

fn na_iso_to_pos_angle(iso: &nalgebra::Isometry2<f32>) -> (Vec2, f32) {
    let pos = Vec2::new(iso.translation.x, iso.translation.y);
    let angle = iso.rotation.angle();
    (pos, angle)
}

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// The kind of rigid body: dynamic bodies are simulated, fixed bodies are
/// immovable collision geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyType {
    Dynamic,
    Fixed,
}

impl BodyType {
    fn to_rapier(self) -> RigidBodyType {
        match self {
            BodyType::Dynamic => RigidBodyType::Dynamic,
            BodyType::Fixed => RigidBodyType::Fixed,
        }
    }
}

/// Axis-aligned box collision shape. The only shape this game uses.
#[derive(Debug, Clone, Copy)]
pub struct BoxShape {
    pub half_width: f32,
    pub half_height: f32,
}

impl BoxShape {
    /// Build the shape from a full (width, height) size.
    pub fn from_size(size: Vec2) -> Self {
        Self {
            half_width: size.x / 2.0,
            half_height: size.y / 2.0,
        }
    }
}

/// Physical material properties for a collider.
#[derive(Debug, Clone, Copy)]
pub struct ColliderMaterial {
    pub restitution: f32,
    pub friction: f32,
    pub density: f32,
}

impl Default for ColliderMaterial {
    fn default() -> Self {
        Self {
            restitution: 0.4,
            friction: 8.0,
            density: 1.0,
        }
    }
}

/// Builder for describing a rigid body + its tagged box collider.
#[derive(Debug, Clone)]
pub struct BodyDesc {
    pub body_type: BodyType,
    pub position: Vec2,
    pub velocity: Vec2,
    pub shape: BoxShape,
    pub role: RoleTag,
}

impl BodyDesc {
    /// Create a dynamic body description with the given shape and role.
    pub fn dynamic(shape: BoxShape, role: RoleTag) -> Self {
        Self {
            body_type: BodyType::Dynamic,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            shape,
            role,
        }
    }

    /// Create a fixed (static) body description with the given shape and role.
    pub fn fixed(shape: BoxShape, role: RoleTag) -> Self {
        Self {
            body_type: BodyType::Fixed,
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            shape,
            role,
        }
    }

    pub fn with_position(mut self, pos: Vec2) -> Self {
        self.position = pos;
        self
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.velocity = vel;
        self
    }
}

/// Handle pair stored on an Entity, referencing Rapier internals.
#[derive(Debug, Clone, Copy)]
pub struct PhysicsBody {
    pub body_handle: RigidBodyHandle,
    pub collider_handle: ColliderHandle,
}

// ---------------------------------------------------------------------------
// PhysicsWorld
// ---------------------------------------------------------------------------

/// Wraps all Rapier2D boilerplate into a single, easy-to-use struct.
///
/// The world owns nothing gameplay-related: entities hold `PhysicsBody`
/// handles and are responsible for removing their bodies before dropping
/// them (see `EngineContext::despawn`).
pub struct PhysicsWorld {
    gravity: nalgebra::Vector2<f32>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
}

impl PhysicsWorld {
    /// Create a new physics world with the standard downward gravity.
    pub fn new() -> Self {
        Self {
            gravity: nalgebra::Vector2::new(0.0, GRAVITY),
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
        }
    }

    /// Create a rigid body + tagged collider and return handles.
    /// The EntityId lands in the body's `user_data`, the role tag in the
    /// collider's `user_data` for overlap classification.
    pub fn create_body(
        &mut self,
        entity_id: EntityId,
        desc: &BodyDesc,
        material: ColliderMaterial,
    ) -> PhysicsBody {
        let rb = RigidBodyBuilder::new(desc.body_type.to_rapier())
            .translation(vec2_to_na(desc.position))
            .linvel(vec2_to_na(desc.velocity))
            .user_data(entity_id.0 as u128)
            .build();

        let body_handle = self.bodies.insert(rb);

        let collider = ColliderBuilder::cuboid(desc.shape.half_width, desc.shape.half_height)
            .restitution(material.restitution)
            .friction(material.friction)
            .density(material.density)
            .user_data(desc.role.to_user_data())
            .build();

        let collider_handle =
            self.colliders
                .insert_with_parent(collider, body_handle, &mut self.bodies);

        PhysicsBody {
            body_handle,
            collider_handle,
        }
    }

    /// Remove a body and all its colliders from the simulation.
    pub fn remove_body(&mut self, body: &PhysicsBody) {
        self.bodies.remove(
            body.body_handle,
            &mut self.island_manager,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
    }

    /// Advance the simulation by exactly `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.integration_parameters.dt = dt;
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
    }

    /// Broad-phase overlap query: the role tags of every *other* collider
    /// whose bounding box overlaps the given body's collider bounding box.
    /// Bounding boxes only — no exact polygon intersection.
    pub fn query_overlaps(&self, body: &PhysicsBody) -> Vec<RoleTag> {
        let target = match self.colliders.get(body.collider_handle) {
            Some(c) => c,
            None => return Vec::new(),
        };
        let target_aabb = target.compute_aabb();

        let mut tags = Vec::new();
        for (handle, collider) in self.colliders.iter() {
            if handle == body.collider_handle {
                continue;
            }
            let aabb = collider.compute_aabb();
            let overlaps = target_aabb.mins.x <= aabb.maxs.x
                && aabb.mins.x <= target_aabb.maxs.x
                && target_aabb.mins.y <= aabb.maxs.y
                && aabb.mins.y <= target_aabb.maxs.y;
            if !overlaps {
                continue;
            }
            if let Some(role) = RoleTag::from_user_data(collider.user_data) {
                tags.push(role);
            }
        }
        tags
    }

    /// Set the linear velocity of a body directly.
    pub fn set_velocity(&mut self, body: &PhysicsBody, vel: Vec2) {
        if let Some(rb) = self.bodies.get_mut(body.body_handle) {
            rb.set_linvel(vec2_to_na(vel), true);
        }
    }

    /// Get the current linear velocity of a body.
    pub fn velocity(&self, body: &PhysicsBody) -> Vec2 {
        self.bodies
            .get(body.body_handle)
            .map(|rb| na_to_vec2(rb.linvel()))
            .unwrap_or(Vec2::ZERO)
    }

    /// Get the current position and angle of a body.
    pub fn body_position(&self, body: &PhysicsBody) -> (Vec2, f32) {
        self.bodies
            .get(body.body_handle)
            .map(|rb| na_iso_to_pos_angle(rb.position()))
            .unwrap_or((Vec2::ZERO, 0.0))
    }

    /// Number of rigid bodies in the simulation.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
