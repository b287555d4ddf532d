use rand::Rng;
use std::f32::consts::TAU;
use crate::constants::*;

/// A faint dot drifting up and down on the cover slide.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Position as a fraction of the window.
    pub x: f32,
    pub y: f32,
    pub delay: f32,
    pub duration: f32,
}

impl Particle {
    fn random(rng: &mut impl Rng) -> Self {
        Self {
            x: rng.random_range(0.0..1.0),
            y: rng.random_range(0.0..1.0),
            delay: rng.random_range(0.0..3.0),
            duration: rng.random_range(3.0..5.0),
        }
    }

    pub fn offset_at(&self, time: f32) -> f32 {
        float_offset(time, self.delay, self.duration)
    }
}

pub fn particles(rng: &mut impl Rng) -> Vec<Particle> {
    (0..PARTICLE_COUNT).map(|_| Particle::random(rng)).collect()
}

/// Vertical offset in pixels of a floating decoration. Nothing moves until
/// `delay` has passed; then it completes one up-and-back cycle per `duration`.
pub fn float_offset(time: f32, delay: f32, duration: f32) -> f32 {
    if time < delay || duration <= 0.0 {
        return 0.0;
    }
    let phase = ((time - delay) % duration) / duration;
    -FLOAT_AMPLITUDE * (1.0 - (phase * TAU).cos()) * 0.5
}
