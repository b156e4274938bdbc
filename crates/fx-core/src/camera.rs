//! Perspective camera and the pointer-driven parallax controller.
//!
//! The controller splits input from motion: pointer events only record a
//! position, and the camera moves once per rendered frame in [`CameraController::update`].

use crate::config::{CameraParams, Smoothing};
use glam::{Mat4, Vec2, Vec3};

/// Right-handed perspective camera that always looks at `target`.
#[derive(Clone, Debug, PartialEq)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl PerspectiveCamera {
    pub fn new(params: &CameraParams, width: f32, height: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, params.start_z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: aspect_ratio(width, height),
            fovy_radians: params.fovy_deg.to_radians(),
            znear: params.near,
            zfar: params.far,
        }
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.aspect = aspect_ratio(width, height);
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }
}

#[inline]
fn aspect_ratio(width: f32, height: f32) -> f32 {
    width.max(1.0) / height.max(1.0)
}

/// Pointer input remembered between frames.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraState {
    /// Last pointer position in surface pixels; `None` until the first move.
    pub pointer: Option<Vec2>,
}

#[derive(Clone, Debug)]
pub struct CameraController {
    state: CameraState,
    parallax_scale: f32,
    factor: f32,
    smoothing: Smoothing,
}

impl CameraController {
    pub fn new(params: &CameraParams) -> Self {
        Self {
            state: CameraState::default(),
            parallax_scale: params.parallax_scale,
            factor: params.smoothing_factor,
            smoothing: params.smoothing,
        }
    }

    pub fn on_pointer_move(&mut self, client_x: f32, client_y: f32) {
        self.state.pointer = Some(Vec2::new(client_x, client_y));
    }

    pub fn state(&self) -> CameraState {
        self.state
    }

    /// Parallax target on the camera's x/y plane for the recorded pointer.
    pub fn target(&self, width: f32, height: f32) -> Option<Vec2> {
        let p = self.state.pointer?;
        let tx = (p.x / width.max(1.0) - 0.5) * self.parallax_scale;
        let ty = (p.y / height.max(1.0) - 0.5) * self.parallax_scale;
        Some(Vec2::new(tx, -ty))
    }

    /// Moves the camera a fixed fraction toward the target. Never touches z.
    pub fn update(&self, camera: &mut PerspectiveCamera, width: f32, height: f32, dt_sec: f32) {
        let Some(target) = self.target(width, height) else {
            return;
        };
        let alpha = self.step_alpha(dt_sec);
        camera.position.x += (target.x - camera.position.x) * alpha;
        camera.position.y += (target.y - camera.position.y) * alpha;
    }

    fn step_alpha(&self, dt_sec: f32) -> f32 {
        let alpha = match self.smoothing {
            Smoothing::PerFrame => self.factor,
            Smoothing::FrameRateIndependent { reference_hz } => {
                let frames = (dt_sec * reference_hz).max(0.0);
                1.0 - (1.0 - self.factor).powf(frames)
            }
        };
        alpha.clamp(0.0, 1.0)
    }
}
