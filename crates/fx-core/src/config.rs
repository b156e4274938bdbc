//! Tunable parameters grouped per subsystem.
//!
//! Every `Default` reproduces the values in [`crate::constants`]; the structs
//! exist so tests and hosts can override a single knob without touching the
//! rest.

use crate::constants::*;
use std::ops::Range;

#[derive(Clone, Debug)]
pub struct BurstParams {
    pub count: usize,
    pub size: Range<f32>,
    pub radius: Range<f32>,
    pub drift: f32,
    pub float_duration: Range<f32>,
    pub pulsate_duration_sec: f32,
}

impl Default for BurstParams {
    fn default() -> Self {
        Self {
            count: BURST_PARTICLE_COUNT,
            size: PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX,
            radius: BURST_RADIUS_MIN..BURST_RADIUS_MAX,
            drift: DRIFT_MAX,
            float_duration: FLOAT_DURATION_MIN_SEC..FLOAT_DURATION_MAX_SEC,
            pulsate_duration_sec: PULSATE_DURATION_SEC,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FieldParams {
    pub point_count: usize,
    pub radius: f32,
    pub rotation_rate: f32,
    pub point_size: f32,
    pub color_rgb: [f32; 3],
    pub opacity: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            point_count: POINT_COUNT,
            radius: FIELD_RADIUS,
            rotation_rate: FIELD_ROTATION_RATE,
            point_size: POINT_SIZE,
            color_rgb: POINT_COLOR_RGB,
            opacity: POINT_OPACITY,
        }
    }
}

/// How the camera closes the gap to its pointer target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Smoothing {
    /// Fixed fraction per rendered frame. Convergence speed follows the
    /// display refresh rate.
    PerFrame,
    /// Same feel as `PerFrame` at `reference_hz`, scaled by the real frame
    /// delta.
    FrameRateIndependent { reference_hz: f32 },
}

#[derive(Clone, Debug)]
pub struct CameraParams {
    pub fovy_deg: f32,
    pub near: f32,
    pub far: f32,
    pub start_z: f32,
    pub parallax_scale: f32,
    pub smoothing_factor: f32,
    pub smoothing: Smoothing,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            fovy_deg: CAMERA_FOVY_DEG,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            start_z: CAMERA_START_Z,
            parallax_scale: PARALLAX_SCALE,
            smoothing_factor: CAMERA_SMOOTHING,
            smoothing: Smoothing::PerFrame,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FxConfig {
    pub burst: BurstParams,
    pub field: FieldParams,
    pub camera: CameraParams,
}
