// Host page hooks and renderer tuning used by the web frontend.

// DOM
pub const CANVAS_ID: &str = "bg-canvas";
pub const TRIGGER_SELECTOR: &str = ".magnetic-field-button";
pub const PARTICLE_CLASS: &str = "particle";
pub const PARTICLE_SELECTOR: &str = ".particle";

// Rendering
pub const MIN_POINT_PX: f32 = 1.0; // keep far points from vanishing
pub const QUAD_VERTICES: u32 = 6;

pub static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");
