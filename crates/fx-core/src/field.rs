//! The ambient point field: a fixed cloud of points, its slow rotation and
//! the parallax camera that views it.

use crate::camera::{CameraController, PerspectiveCamera};
use crate::config::{FieldParams, FxConfig};
use crate::sampling::sample_point_field;
use glam::{EulerRot, Mat4, Quat, Vec2, Vec3, Vec4};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::TAU;
use std::sync::Arc;

/// Everything the renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldFrame {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
    pub point_size: f32,
    /// Straight (non-premultiplied) colour with opacity in `w`.
    pub color: Vec4,
}

impl FieldFrame {
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }
}

pub struct AmbientField {
    params: FieldParams,
    points: Arc<[Vec3]>,
    rotation: Vec2,
    camera: PerspectiveCamera,
    controller: CameraController,
    viewport: Vec2,
}

impl AmbientField {
    pub fn new(config: &FxConfig, width: f32, height: f32) -> Self {
        Self::with_rng(config, width, height, &mut StdRng::from_entropy())
    }

    pub fn with_rng<R: Rng + ?Sized>(config: &FxConfig, width: f32, height: f32, rng: &mut R) -> Self {
        let points: Arc<[Vec3]> =
            sample_point_field(rng, config.field.point_count, config.field.radius).into();
        log::info!("[field] sampled {} points, r={}", points.len(), config.field.radius);
        Self {
            params: config.field.clone(),
            points,
            rotation: Vec2::ZERO,
            camera: PerspectiveCamera::new(&config.camera, width, height),
            controller: CameraController::new(&config.camera),
            viewport: Vec2::new(width, height),
        }
    }

    /// Shared, immutable sample set.
    pub fn points(&self) -> &Arc<[Vec3]> {
        &self.points
    }

    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    pub fn on_pointer_move(&mut self, client_x: f32, client_y: f32) {
        self.controller.on_pointer_move(client_x, client_y);
    }

    /// Advances to `elapsed_sec` since start. Rotation is derived from the
    /// absolute elapsed time so it does not depend on the frame rate; the
    /// camera step uses `dt_sec` only in frame-rate-independent mode.
    pub fn on_frame(&mut self, elapsed_sec: f64, dt_sec: f32) -> FieldFrame {
        // wrap in f64 before narrowing, f32 seconds go coarse after a few days
        let angle = (elapsed_sec * self.params.rotation_rate as f64).rem_euclid(TAU) as f32;
        self.rotation = Vec2::new(angle, angle);
        self.controller
            .update(&mut self.camera, self.viewport.x, self.viewport.y, dt_sec);
        self.frame()
    }

    pub fn on_resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
        self.camera.set_viewport(width, height);
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_quat(Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            0.0,
        ))
    }

    pub fn frame(&self) -> FieldFrame {
        let [r, g, b] = self.params.color_rgb;
        FieldFrame {
            model: self.model_matrix(),
            view: self.camera.view_matrix(),
            projection: self.camera.projection_matrix(),
            point_size: self.params.point_size,
            color: Vec4::new(r, g, b, self.params.opacity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_comes_from_elapsed_time() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = AmbientField::with_rng(&FxConfig::default(), 800.0, 600.0, &mut rng);
        for _ in 0..10 {
            field.on_frame(3.0, 0.5);
        }
        assert!((field.rotation().x - 0.06).abs() < 1e-6);
        assert!((field.rotation().y - 0.06).abs() < 1e-6);
    }

    #[test]
    fn rotation_keeps_frame_resolution_after_days() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut field = AmbientField::with_rng(&FxConfig::default(), 800.0, 600.0, &mut rng);
        let ten_days = 10.0 * 24.0 * 3600.0;
        field.on_frame(ten_days, 1.0 / 60.0);
        let a = field.rotation().x;
        field.on_frame(ten_days + 1.0 / 60.0, 1.0 / 60.0);
        let b = field.rotation().x;
        let step = 0.02 / 60.0;
        assert!(((b - a) - step).abs() < 1e-5, "step {}", b - a);
    }

    #[test]
    fn camera_still_without_pointer() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut field = AmbientField::with_rng(&FxConfig::default(), 800.0, 600.0, &mut rng);
        for i in 0..30 {
            field.on_frame(i as f64 / 60.0, 1.0 / 60.0);
        }
        assert_eq!(field.camera().position, Vec3::new(0.0, 0.0, 1.5));
    }
}
