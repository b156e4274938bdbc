//! Hover-driven particle bursts.
//!
//! A [`BurstController`] keeps at most one batch per trigger region. Entering
//! a region always clears its previous batch before spawning, so a region
//! holds either zero particles or exactly `BurstParams::count`.

use crate::animation::{AnimationBinding, AnimationDefinition, AnimationRegistry, Bindings};
use crate::config::BurstParams;
use crate::error::FxResult;
use crate::particle::{sample_batch, Particle, ParticleBatch};
use fnv::FnvHashMap;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub u32);

/// Host side of a burst: where particles live and how they are drawn.
pub trait ParticleSurface {
    /// Current rendered size of `region`, or `None` if it no longer exists.
    fn region_bounds(&self, region: RegionId) -> Option<Vec2>;
    fn install_animation(&mut self, definition: &AnimationDefinition) -> FxResult<()>;
    fn clear_particles(&mut self, region: RegionId);
    /// Returns `false` if the particle could not be shown; the controller then
    /// stops tracking it.
    fn attach_particle(&mut self, region: RegionId, particle: &Particle, bindings: &[AnimationBinding]) -> bool;
}

pub struct BurstController {
    params: BurstParams,
    registry: Arc<AnimationRegistry>,
    float_definition: AnimationDefinition,
    batches: FnvHashMap<RegionId, ParticleBatch>,
    rng: StdRng,
}

impl BurstController {
    pub fn new(params: BurstParams, registry: Arc<AnimationRegistry>) -> Self {
        Self::with_rng(params, registry, StdRng::from_entropy())
    }

    pub fn with_rng(params: BurstParams, registry: Arc<AnimationRegistry>, rng: StdRng) -> Self {
        Self {
            params,
            registry,
            float_definition: AnimationDefinition::particle_float(),
            batches: FnvHashMap::default(),
            rng,
        }
    }

    /// Replaces whatever `region` holds with a fresh batch. Returns the number
    /// of particles the surface accepted.
    pub fn on_trigger_enter<S: ParticleSurface>(&mut self, region: RegionId, surface: &mut S) -> usize {
        let Some(bounds) = surface.region_bounds(region) else {
            log::debug!("[burst] region {:?} not found; skipping", region);
            return 0;
        };
        self.on_trigger_leave(region, surface);

        let floating = match self
            .registry
            .ensure(&self.float_definition, |def| surface.install_animation(def))
        {
            Ok(_) => true,
            Err(e) => {
                log::warn!("[burst] {e}; particles will only pulsate");
                false
            }
        };

        let mut batch = sample_batch(&mut self.rng, bounds.max(Vec2::ZERO), &self.params);
        let pulsate_sec = self.params.pulsate_duration_sec;
        batch.retain(|p| surface.attach_particle(region, p, &bindings_for(p, floating, pulsate_sec)));
        let count = batch.len();
        if count < self.params.count {
            log::warn!("[burst] region {} shows {} of {} particles", region.0, count, self.params.count);
        }
        self.batches.insert(region, batch);
        count
    }

    /// Drops every particle on `region` at once, mid-animation or not.
    pub fn on_trigger_leave<S: ParticleSurface>(&mut self, region: RegionId, surface: &mut S) {
        surface.clear_particles(region);
        self.batches.remove(&region);
    }

    pub fn live_count(&self, region: RegionId) -> usize {
        self.batches.get(&region).map_or(0, |b| b.len())
    }

    pub fn particles(&self, region: RegionId) -> &[Particle] {
        self.batches.get(&region).map(|b| b.as_slice()).unwrap_or(&[])
    }
}

fn bindings_for(p: &Particle, floating: bool, pulsate_sec: f32) -> Bindings {
    let mut bindings = Bindings::new();
    if floating {
        bindings.push(AnimationBinding::float(p.duration_sec));
    }
    bindings.push(AnimationBinding::pulsate(pulsate_sec));
    bindings
}
