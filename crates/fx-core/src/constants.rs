// Shared visual tuning constants for the burst and the ambient field.

// Burst
pub const BURST_PARTICLE_COUNT: usize = 30;
pub const PARTICLE_SIZE_MIN: f32 = 1.0; // px
pub const PARTICLE_SIZE_MAX: f32 = 5.0; // px
pub const BURST_RADIUS_MIN: f32 = 40.0; // px from region centre
pub const BURST_RADIUS_MAX: f32 = 80.0;
pub const DRIFT_MAX: f32 = 5.0; // px, symmetric per axis
pub const FLOAT_DURATION_MIN_SEC: f32 = 1.0;
pub const FLOAT_DURATION_MAX_SEC: f32 = 3.0;
pub const PULSATE_DURATION_SEC: f32 = 1.5;

// Animation names and host hooks
pub const FLOAT_ANIMATION_NAME: &str = "particle-float";
pub const FLOAT_STYLE_ELEMENT_ID: &str = "particle-float-style";
pub const PULSATE_ANIMATION_NAME: &str = "pulsate"; // keyframes live in the page stylesheet
pub const DRIFT_X_PROPERTY: &str = "--dx";
pub const DRIFT_Y_PROPERTY: &str = "--dy";

// Point field
pub const POINT_COUNT: usize = 7000;
pub const FIELD_RADIUS: f32 = 2.5;
pub const FIELD_ROTATION_RATE: f32 = 0.02; // rad/s about X and Y

// Point material
pub const POINT_SIZE: f32 = 0.005; // world units
pub const POINT_COLOR_RGB: [f32; 3] = [0x81 as f32 / 255.0, 0x8c as f32 / 255.0, 0xf8 as f32 / 255.0];
pub const POINT_OPACITY: f32 = 0.7;

// Camera
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_START_Z: f32 = 1.5;
pub const PARALLAX_SCALE: f32 = 0.5; // pointer offset from centre -> world units
pub const CAMERA_SMOOTHING: f32 = 0.05; // fraction of remaining distance per frame
pub const SMOOTHING_REFERENCE_HZ: f32 = 60.0;
