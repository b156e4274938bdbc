//! Declarative animation descriptors and the registry of installed
//! definitions.
//!
//! Particles never tick their own motion. The core computes a handful of
//! [`AnimationBinding`]s per particle and the host's style engine runs them.
//! Keyframe definitions shared by every burst are installed once per page and
//! tracked in an [`AnimationRegistry`].

use crate::constants::{FLOAT_ANIMATION_NAME, FLOAT_STYLE_ELEMENT_ID, PULSATE_ANIMATION_NAME};
use crate::error::FxResult;
use fnv::FnvHashSet;
use parking_lot::Mutex;
use smallvec::SmallVec;
use std::fmt::Write as _;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    EaseInOut,
}

impl Easing {
    pub fn as_css(self) -> &'static str {
        match self {
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Iterations {
    Infinite,
}

impl Iterations {
    pub fn as_css(self) -> &'static str {
        match self {
            Iterations::Infinite => "infinite",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Alternate,
}

impl Direction {
    pub fn as_css(self) -> &'static str {
        match self {
            Direction::Alternate => "alternate",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Keyframe {
    pub offset_pct: u8,
    pub transform: &'static str,
}

/// Named keyframe set, installed once and referenced by many bindings.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationDefinition {
    pub name: &'static str,
    /// Host element id the definition is installed under.
    pub element_id: &'static str,
    pub keyframes: Vec<Keyframe>,
}

impl AnimationDefinition {
    /// Drift from rest to the per-particle `--dx`/`--dy` offset.
    pub fn particle_float() -> Self {
        Self {
            name: FLOAT_ANIMATION_NAME,
            element_id: FLOAT_STYLE_ELEMENT_ID,
            keyframes: vec![
                Keyframe {
                    offset_pct: 0,
                    transform: "translate(0, 0)",
                },
                Keyframe {
                    offset_pct: 100,
                    transform: "translate(var(--dx), var(--dy))",
                },
            ],
        }
    }

    pub fn to_css(&self) -> String {
        let mut css = format!("@keyframes {} {{", self.name);
        for k in &self.keyframes {
            _ = write!(css, " {}% {{ transform: {}; }}", k.offset_pct, k.transform);
        }
        css.push_str(" }");
        css
    }
}

/// One running animation on one particle.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationBinding {
    pub name: &'static str,
    pub duration_sec: f32,
    pub easing: Easing,
    pub iterations: Iterations,
    pub direction: Direction,
}

impl AnimationBinding {
    /// Looping, alternating, eased binding used for every particle track.
    pub fn looping(name: &'static str, duration_sec: f32) -> Self {
        Self {
            name,
            duration_sec,
            easing: Easing::EaseInOut,
            iterations: Iterations::Infinite,
            direction: Direction::Alternate,
        }
    }

    pub fn float(duration_sec: f32) -> Self {
        Self::looping(FLOAT_ANIMATION_NAME, duration_sec)
    }

    pub fn pulsate(duration_sec: f32) -> Self {
        Self::looping(PULSATE_ANIMATION_NAME, duration_sec)
    }
}

pub type Bindings = SmallVec<[AnimationBinding; 2]>;

/// Comma-joined `animation-*` longhand values for a list of bindings, in
/// binding order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationStyle {
    pub name: String,
    pub duration: String,
    pub timing_function: String,
    pub iteration_count: String,
    pub direction: String,
}

impl AnimationStyle {
    pub fn from_bindings(bindings: &[AnimationBinding]) -> Self {
        Self {
            name: join(bindings, |b| b.name.to_string()),
            duration: join(bindings, |b| format!("{}s", b.duration_sec)),
            timing_function: join(bindings, |b| b.easing.as_css().to_string()),
            iteration_count: join(bindings, |b| b.iterations.as_css().to_string()),
            direction: join(bindings, |b| b.direction.as_css().to_string()),
        }
    }
}

fn join<F>(bindings: &[AnimationBinding], f: F) -> String
where
    F: Fn(&AnimationBinding) -> String,
{
    bindings.iter().map(f).collect::<Vec<_>>().join(", ")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Registration {
    Installed,
    AlreadyPresent,
}

/// Page-wide set of installed animation definitions.
///
/// Owned by the application root and shared into every burst controller. The
/// lock is held across the install call so check-then-insert is atomic even
/// if several controllers race on different threads.
#[derive(Debug, Default)]
pub struct AnimationRegistry {
    installed: Mutex<FnvHashSet<&'static str>>,
}

impl AnimationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs `definition` through `install` unless a definition with the
    /// same name was installed before. A failed install is not recorded, so a
    /// later call retries.
    pub fn ensure<F>(&self, definition: &AnimationDefinition, install: F) -> FxResult<Registration>
    where
        F: FnOnce(&AnimationDefinition) -> FxResult<()>,
    {
        let mut installed = self.installed.lock();
        if installed.contains(definition.name) {
            return Ok(Registration::AlreadyPresent);
        }
        install(definition)?;
        installed.insert(definition.name);
        log::debug!("[anim] installed `{}`", definition.name);
        Ok(Registration::Installed)
    }

    pub fn is_installed(&self, name: &str) -> bool {
        self.installed.lock().contains(name)
    }

    pub fn len(&self) -> usize {
        self.installed.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
