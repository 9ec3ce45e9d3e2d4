//! Win celebration particles
//!
//! Ballistic points that fall under a constant gravity and fade out.
//! Bursts are rare and short-lived, so there is no pooling.

use glam::Vec2;
use rand::Rng;

use super::state::Particle;

/// Particles per win burst
pub const BURST_COUNT: usize = 50;
/// Added to vertical velocity every tick (screen y grows downward)
pub const GRAVITY: f32 = 0.1;
/// Life lost per tick
pub const DECAY: f32 = 0.02;
/// Upward kick applied to every particle's initial velocity
pub const UPWARD_BIAS: f32 = 2.0;
/// Absorbs f32 rounding so a full-life particle dies within `1 / DECAY` ticks
const LIFE_EPSILON: f32 = 1e-4;

/// Spawn `count` particles at `origin` with random velocity, hue and size
pub fn emit_burst<R: Rng + ?Sized>(
    particles: &mut Vec<Particle>,
    origin: Vec2,
    count: usize,
    rng: &mut R,
) {
    particles.reserve(count);
    for _ in 0..count {
        let vel = Vec2::new(
            rng.random_range(-5.0..5.0),
            rng.random_range(-5.0..5.0) - UPWARD_BIAS,
        );
        particles.push(Particle {
            pos: origin,
            vel,
            hue: rng.random_range(0.0..360.0),
            size: rng.random_range(2.0..6.0),
            life: 1.0,
        });
    }
}

/// Advance every particle by one tick and drop the dead ones
pub fn update_particles(particles: &mut Vec<Particle>) {
    for particle in particles.iter_mut() {
        particle.pos += particle.vel;
        particle.vel.y += GRAVITY;
        particle.life -= DECAY;
    }
    particles.retain(|p| p.life > LIFE_EPSILON);
}
