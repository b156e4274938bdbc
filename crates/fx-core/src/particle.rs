use crate::config::BurstParams;
use crate::sampling::{polar_offset, uniform};
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

/// One burst particle. Pure data; the host renders it and runs its animations.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub size: f32,
    /// Offset from the region centre.
    pub origin: Vec2,
    /// Absolute position inside the region (top-left origin).
    pub position: Vec2,
    pub drift: Vec2,
    pub duration_sec: f32,
}

impl Particle {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, region_size: Vec2, params: &BurstParams) -> Self {
        let size = uniform(rng, &params.size);
        let origin = polar_offset(rng, &params.radius);
        let drift_range = -params.drift..params.drift;
        let drift = Vec2::new(uniform(rng, &drift_range), uniform(rng, &drift_range));
        let duration_sec = uniform(rng, &params.float_duration);
        Self {
            size,
            origin,
            position: origin + region_size * 0.5,
            drift,
            duration_sec,
        }
    }
}

pub type ParticleBatch = SmallVec<[Particle; 32]>;

pub fn sample_batch<R: Rng + ?Sized>(
    rng: &mut R,
    region_size: Vec2,
    params: &BurstParams,
) -> ParticleBatch {
    (0..params.count)
        .map(|_| Particle::sample(rng, region_size, params))
        .collect()
}
