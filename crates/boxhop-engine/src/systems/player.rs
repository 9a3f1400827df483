//! Player controller: turns the per-tick input snapshot into velocity
//! changes on the player body. Positions are never touched here — that is
//! the physics step's job.

use glam::Vec2;

use crate::input::snapshot::{InputSnapshot, Key};

/// Velocity gained per reference frame while a run key is held.
pub const WALK_ACCEL: f32 = 15.0;
/// Extra velocity per reference frame while the boost modifier is held.
pub const BOOST_ACCEL: f32 = 5.0;
/// Downward velocity per reference frame while fast-fall is held.
pub const FAST_FALL_ACCEL: f32 = 45.0;
/// Cap on controller-driven velocity per axis, units/s.
pub const MAX_SPEED: f32 = 600.0;
/// Velocity change of a discrete jump or dash impulse, units/s.
pub const IMPULSE_SPEED: f32 = 300.0;
/// Frame rate the tuning constants were calibrated against. Held-key
/// acceleration is scaled by `REFERENCE_FPS * dt` so the velocity gained
/// per real second is the same at any tick rate.
pub const REFERENCE_FPS: f32 = 60.0;

/// Continuous steering, applied every tick after the physics step.
///
/// Held Left/Right accelerate horizontally (the boost modifier stacks on
/// top); the horizontal result is clamped to ±`MAX_SPEED`, including the
/// edge-triggered side dashes. Held fast-fall accumulates downward velocity
/// without a cap — drag and collisions are the only brakes.
pub fn steer(vel: Vec2, input: &InputSnapshot, dt: f32) -> Vec2 {
    let scale = REFERENCE_FPS * dt;

    let mut dvx = 0.0;
    if input.held(Key::Left) {
        dvx -= WALK_ACCEL * scale;
        if input.held(Key::Boost) {
            dvx -= BOOST_ACCEL * scale;
        }
    }
    if input.held(Key::Right) {
        dvx += WALK_ACCEL * scale;
        if input.held(Key::Boost) {
            dvx += BOOST_ACCEL * scale;
        }
    }

    let mut vy = vel.y;
    if input.held(Key::FastFall) {
        vy += FAST_FALL_ACCEL * scale;
    }

    let mut vx = (vel.x + dvx).clamp(-MAX_SPEED, MAX_SPEED);

    if input.pressed(Key::DashLeft) {
        vx = (vx - IMPULSE_SPEED).max(-MAX_SPEED);
    }
    if input.pressed(Key::DashRight) {
        vx = (vx + IMPULSE_SPEED).min(MAX_SPEED);
    }

    Vec2::new(vx, vy)
}

/// Discrete jump impulse, applied on the leading edge of the jump key only
/// (before the physics step). Subtracts `IMPULSE_SPEED` from the vertical
/// velocity with a floor of −`MAX_SPEED`.
pub fn jump(vel: Vec2, input: &InputSnapshot) -> Vec2 {
    if input.pressed(Key::Jump) {
        Vec2::new(vel.x, (vel.y - IMPULSE_SPEED).max(-MAX_SPEED))
    } else {
        vel
    }
}
