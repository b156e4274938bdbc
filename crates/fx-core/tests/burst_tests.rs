// Host-side tests for burst spawning, clearing and animation registration.

use fnv::FnvHashMap;
use fx_core::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

/// Records what a DOM surface would show.
#[derive(Default)]
struct RecordingSurface {
    bounds: FnvHashMap<RegionId, Vec2>,
    nodes: FnvHashMap<RegionId, Vec<(Particle, Vec<AnimationBinding>)>>,
    installs: Vec<String>,
    fail_installs: bool,
    /// Nodes a region accepts before refusing more.
    node_limit: Option<usize>,
}

impl RecordingSurface {
    fn with_region(region: RegionId, size: Vec2) -> Self {
        let mut s = Self::default();
        s.bounds.insert(region, size);
        s
    }

    fn node_count(&self, region: RegionId) -> usize {
        self.nodes.get(&region).map_or(0, |n| n.len())
    }
}

impl ParticleSurface for RecordingSurface {
    fn region_bounds(&self, region: RegionId) -> Option<Vec2> {
        self.bounds.get(&region).copied()
    }

    fn install_animation(&mut self, definition: &AnimationDefinition) -> FxResult<()> {
        if self.fail_installs {
            return Err(FxError::StyleUnavailable(definition.name.to_string()));
        }
        self.installs.push(definition.to_css());
        Ok(())
    }

    fn clear_particles(&mut self, region: RegionId) {
        self.nodes.remove(&region);
    }

    fn attach_particle(&mut self, region: RegionId, particle: &Particle, bindings: &[AnimationBinding]) -> bool {
        let nodes = self.nodes.entry(region).or_default();
        if self.node_limit.is_some_and(|limit| nodes.len() >= limit) {
            return false;
        }
        nodes.push((particle.clone(), bindings.to_vec()));
        true
    }
}

const BUTTON: RegionId = RegionId(0);

fn make_controller(seed: u64) -> BurstController {
    BurstController::with_rng(
        BurstParams::default(),
        Arc::new(AnimationRegistry::new()),
        StdRng::seed_from_u64(seed),
    )
}

#[test]
fn enter_spawns_exactly_thirty_and_leave_clears() {
    let mut surface = RecordingSurface::with_region(BUTTON, Vec2::new(120.0, 40.0));
    let mut ctl = make_controller(1);

    assert_eq!(ctl.on_trigger_enter(BUTTON, &mut surface), 30);
    assert_eq!(ctl.live_count(BUTTON), 30);
    assert_eq!(surface.node_count(BUTTON), 30);

    ctl.on_trigger_leave(BUTTON, &mut surface);
    assert_eq!(ctl.live_count(BUTTON), 0);
    assert_eq!(surface.node_count(BUTTON), 0);
}

#[test]
fn repeated_enters_never_accumulate() {
    let mut surface = RecordingSurface::with_region(BUTTON, Vec2::new(100.0, 100.0));
    let mut ctl = make_controller(2);
    for _ in 0..7 {
        ctl.on_trigger_enter(BUTTON, &mut surface);
        assert_eq!(ctl.live_count(BUTTON), 30);
        assert_eq!(surface.node_count(BUTTON), 30);
    }
}

#[test]
fn any_interleaving_keeps_zero_or_thirty() {
    let mut surface = RecordingSurface::with_region(BUTTON, Vec2::new(80.0, 30.0));
    let mut ctl = make_controller(3);
    // enter, enter, leave, leave, enter, leave, enter, enter, enter, leave
    let script = [true, true, false, false, true, false, true, true, true, false];
    for enter in script {
        if enter {
            ctl.on_trigger_enter(BUTTON, &mut surface);
        } else {
            ctl.on_trigger_leave(BUTTON, &mut surface);
        }
        let n = ctl.live_count(BUTTON);
        assert!(n == 0 || n == 30, "partial burst of {n}");
        assert_eq!(n, surface.node_count(BUTTON));
    }
}

#[test]
fn particle_parameters_stay_in_range() {
    let mut surface = RecordingSurface::with_region(BUTTON, Vec2::new(200.0, 60.0));
    let mut ctl = make_controller(4);
    for _ in 0..20 {
        ctl.on_trigger_enter(BUTTON, &mut surface);
        for p in ctl.particles(BUTTON) {
            let r = p.origin.length();
            assert!((39.999..=80.001).contains(&r), "radius {r}");
            assert!((1.0..=5.0).contains(&p.size));
            assert!(p.drift.x.abs() <= 5.0 && p.drift.y.abs() <= 5.0);
            assert!((1.0..=3.0).contains(&p.duration_sec));
            let centre = Vec2::new(100.0, 30.0);
            assert!((p.position - centre - p.origin).length() < 1e-4);
            assert!((p.position.x - centre.x).abs() <= 80.001);
            assert!((p.position.y - centre.y).abs() <= 80.001);
        }
    }
}

#[test]
fn float_definition_registered_once_across_regions() {
    let registry = Arc::new(AnimationRegistry::new());
    let mut surface = RecordingSurface::default();
    let mut controllers = Vec::new();
    for i in 0..5 {
        surface.bounds.insert(RegionId(i), Vec2::new(50.0 + i as f32, 50.0));
        controllers.push(BurstController::with_rng(
            BurstParams::default(),
            registry.clone(),
            StdRng::seed_from_u64(i as u64),
        ));
    }
    for round in 0..3 {
        for (i, ctl) in controllers.iter_mut().enumerate() {
            ctl.on_trigger_enter(RegionId(i as u32), &mut surface);
            if round == 1 {
                ctl.on_trigger_leave(RegionId(i as u32), &mut surface);
            }
        }
    }
    assert_eq!(surface.installs.len(), 1);
    assert_eq!(registry.len(), 1);
    assert!(registry.is_installed("particle-float"));
}

#[test]
fn registry_installs_once_under_contention() {
    let registry = Arc::new(AnimationRegistry::new());
    let installs = Arc::new(AtomicUsize::new(0));
    let workers: Vec<_> = (0..16)
        .map(|_| {
            let registry = registry.clone();
            let installs = installs.clone();
            thread::spawn(move || {
                let def = AnimationDefinition::particle_float();
                for _ in 0..100 {
                    let outcome = registry.ensure(&def, |_| {
                        installs.fetch_add(1, Ordering::SeqCst);
                        Ok(())
                    });
                    assert!(outcome.is_ok());
                }
            })
        })
        .collect();
    for w in workers {
        w.join().unwrap();
    }
    assert_eq!(installs.load(Ordering::SeqCst), 1);
    assert_eq!(registry.len(), 1);
}

#[test]
fn every_particle_gets_float_and_pulsate() {
    let mut surface = RecordingSurface::with_region(BUTTON, Vec2::new(100.0, 100.0));
    let mut ctl = make_controller(5);
    ctl.on_trigger_enter(BUTTON, &mut surface);
    for (p, bindings) in &surface.nodes[&BUTTON] {
        let names: Vec<_> = bindings.iter().map(|b| b.name).collect();
        assert_eq!(names, ["particle-float", "pulsate"]);
        assert_eq!(bindings[0].duration_sec, p.duration_sec);
        assert_eq!(bindings[1].duration_sec, 1.5);
        for b in bindings {
            assert_eq!(b.easing, Easing::EaseInOut);
            assert_eq!(b.iterations, Iterations::Infinite);
            assert_eq!(b.direction, Direction::Alternate);
        }
    }
}

#[test]
fn install_failure_degrades_to_pulsate_only() {
    let mut surface = RecordingSurface::with_region(BUTTON, Vec2::new(100.0, 100.0));
    surface.fail_installs = true;
    let registry = Arc::new(AnimationRegistry::new());
    let mut ctl = BurstController::with_rng(
        BurstParams::default(),
        registry.clone(),
        StdRng::seed_from_u64(6),
    );

    assert_eq!(ctl.on_trigger_enter(BUTTON, &mut surface), 30);
    assert!(registry.is_empty());
    for (_, bindings) in &surface.nodes[&BUTTON] {
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].name, "pulsate");
    }

    // stylesheet shows up later: next burst installs and floats
    surface.fail_installs = false;
    ctl.on_trigger_enter(BUTTON, &mut surface);
    assert_eq!(surface.installs.len(), 1);
    assert_eq!(surface.nodes[&BUTTON][0].1.len(), 2);
}

#[test]
fn missing_region_is_a_no_op() {
    let mut surface = RecordingSurface::default();
    let mut ctl = make_controller(7);
    assert_eq!(ctl.on_trigger_enter(RegionId(9), &mut surface), 0);
    assert_eq!(ctl.live_count(RegionId(9)), 0);
    assert!(surface.installs.is_empty());
}

#[test]
fn zero_sized_region_centres_on_origin() {
    let mut surface = RecordingSurface::with_region(BUTTON, Vec2::ZERO);
    let mut ctl = make_controller(8);
    assert_eq!(ctl.on_trigger_enter(BUTTON, &mut surface), 30);
    for p in ctl.particles(BUTTON) {
        assert_eq!(p.position, p.origin);
    }
}

#[test]
fn hover_scenario_on_square_button() {
    let mut surface = RecordingSurface::with_region(BUTTON, Vec2::new(100.0, 100.0));
    let mut ctl = make_controller(9);

    ctl.on_trigger_enter(BUTTON, &mut surface);
    let first: Vec<Particle> = ctl.particles(BUTTON).to_vec();
    assert_eq!(first.len(), 30);
    for p in &first {
        assert!(p.position.distance(Vec2::new(50.0, 50.0)) <= 80.001);
    }

    ctl.on_trigger_leave(BUTTON, &mut surface);
    assert_eq!(surface.node_count(BUTTON), 0);

    ctl.on_trigger_enter(BUTTON, &mut surface);
    assert_eq!(surface.node_count(BUTTON), 30);
    let second = ctl.particles(BUTTON);
    assert!(first.iter().all(|p| !second.contains(p)));
}

#[test]
fn refused_nodes_are_not_tracked() {
    let mut surface = RecordingSurface::with_region(BUTTON, Vec2::new(100.0, 100.0));
    surface.node_limit = Some(12);
    let mut ctl = make_controller(10);

    assert_eq!(ctl.on_trigger_enter(BUTTON, &mut surface), 12);
    assert_eq!(ctl.live_count(BUTTON), 12);
    assert_eq!(ctl.particles(BUTTON).len(), surface.node_count(BUTTON));

    surface.node_limit = None;
    assert_eq!(ctl.on_trigger_enter(BUTTON, &mut surface), 30);
    assert_eq!(ctl.live_count(BUTTON), surface.node_count(BUTTON));
}
