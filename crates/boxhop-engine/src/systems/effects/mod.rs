//! Visual effects: the hazard-death particle burst.

mod particle;
mod rng;

pub use particle::Particle;
pub use rng::Rng;

use glam::Vec2;

/// Fewest particles in a burst.
pub const BURST_MIN: u32 = 5;
/// Most particles in a burst.
pub const BURST_MAX: u32 = 10;
/// Per-axis velocity bound for burst particles, units/s.
pub const BURST_SPEED: f32 = 300.0;
/// Burst particle lifespan, seconds.
pub const BURST_LIFESPAN: f32 = 0.5;

/// Container for all live particles.
pub struct EffectsState {
    pub particles: Vec<Particle>,
    rng: Rng,
}

impl EffectsState {
    /// Create a new EffectsState with the given RNG seed.
    pub fn new(seed: u64) -> Self {
        EffectsState {
            particles: Vec::new(),
            rng: Rng::new(seed.wrapping_add(7919)),
        }
    }

    /// Spawn a burst of 5–10 particles at `center`, each with a random
    /// velocity in ±`BURST_SPEED` per axis and a fixed half-second lifespan.
    pub fn spawn_burst(&mut self, center: Vec2, color: [f32; 4]) {
        let count = BURST_MIN + self.rng.next_int(BURST_MAX - BURST_MIN + 1);
        for _ in 0..count {
            let vel = Vec2::new(
                self.rng.next_range(-BURST_SPEED, BURST_SPEED),
                self.rng.next_range(-BURST_SPEED, BURST_SPEED),
            );
            self.particles
                .push(Particle::new(center, vel, BURST_LIFESPAN, color));
        }
    }

    /// Advance all particles and drop the expired ones in a single retain
    /// pass (never removes while iterating).
    pub fn tick(&mut self, dt: f32) {
        self.particles.retain_mut(|p| p.tick(dt));
    }

    /// Clear all effects.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    #[test]
    fn burst_count_is_within_bounds() {
        for seed in 0..20 {
            let mut effects = EffectsState::new(seed);
            effects.spawn_burst(Vec2::new(50.0, 50.0), RED);
            let n = effects.len() as u32;
            assert!(
                (BURST_MIN..=BURST_MAX).contains(&n),
                "burst of {} particles",
                n
            );
        }
    }

    #[test]
    fn burst_velocities_are_bounded() {
        let mut effects = EffectsState::new(42);
        effects.spawn_burst(Vec2::ZERO, RED);
        for p in &effects.particles {
            assert!(p.vel.x.abs() <= BURST_SPEED);
            assert!(p.vel.y.abs() <= BURST_SPEED);
            assert_eq!(p.lifespan, BURST_LIFESPAN);
        }
    }

    #[test]
    fn tick_retains_only_live_particles() {
        let mut effects = EffectsState::new(42);
        effects.spawn_burst(Vec2::ZERO, RED);
        assert!(!effects.is_empty());

        // Well past the lifespan: everything dies in one pass.
        effects.tick(BURST_LIFESPAN + 0.1);
        assert!(effects.is_empty());
    }

    #[test]
    fn clear_drops_everything() {
        let mut effects = EffectsState::new(42);
        effects.spawn_burst(Vec2::ZERO, RED);
        effects.clear();
        assert!(effects.is_empty());
    }
}
