//! Ephemeral visual-only particles. Not tracked by the physics world.

use glam::Vec2;

/// A single particle: straight-line motion, fixed lifespan.
#[derive(Debug, Clone)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub age: f32,
    pub lifespan: f32,
    pub color: [f32; 4],
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, lifespan: f32, color: [f32; 4]) -> Self {
        Particle {
            pos,
            vel,
            age: 0.0,
            lifespan,
            color,
        }
    }

    /// Advance the particle. Returns false when expired.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.pos += self.vel * dt;
        self.age += dt;
        self.age < self.lifespan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    #[test]
    fn particle_expires() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::new(1.0, 0.0), 0.1, RED);
        let alive = p.tick(0.2);
        assert!(!alive, "particle should expire");
    }

    #[test]
    fn particle_lives_while_young() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::new(1.0, 0.0), 1.0, RED);
        let alive = p.tick(0.1);
        assert!(alive, "particle should still be alive");
    }

    #[test]
    fn particle_moves_by_velocity() {
        let mut p = Particle::new(Vec2::ZERO, Vec2::new(100.0, -50.0), 1.0, RED);
        p.tick(0.1);
        assert!((p.pos.x - 10.0).abs() < 0.001);
        assert!((p.pos.y - (-5.0)).abs() < 0.001);
    }
}
