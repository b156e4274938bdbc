//! Random sampling helpers shared by the burst and the point field.

use glam::{Vec2, Vec3};
use rand::Rng;
use std::f32::consts::TAU;
use std::ops::Range;

/// Uniform value in `range`; an empty range collapses to its start.
#[inline]
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, range: &Range<f32>) -> f32 {
    if range.end > range.start {
        rng.gen_range(range.start..range.end)
    } else {
        range.start
    }
}

/// Offset from a centre with angle uniform in `[0, 2π)` radians and radius
/// uniform in `radius`.
#[inline]
pub fn polar_offset<R: Rng + ?Sized>(rng: &mut R, radius: &Range<f32>) -> Vec2 {
    let angle = rng.gen::<f32>() * TAU;
    let r = uniform(rng, radius);
    Vec2::new(angle.cos() * r, angle.sin() * r)
}

/// Maps three unit uniforms to a point uniformly distributed by volume inside
/// a ball of `radius`.
#[inline]
pub fn ball_point(u: f32, v: f32, w: f32, radius: f32) -> Vec3 {
    let theta = u * TAU;
    let phi = (2.0 * v - 1.0).clamp(-1.0, 1.0).acos();
    let r = w.cbrt() * radius;
    let (sin_phi, cos_phi) = phi.sin_cos();
    Vec3::new(
        r * sin_phi * theta.cos(),
        r * sin_phi * theta.sin(),
        r * cos_phi,
    )
}

#[inline]
pub fn sample_in_ball<R: Rng + ?Sized>(rng: &mut R, radius: f32) -> Vec3 {
    let u = rng.gen::<f32>();
    let v = rng.gen::<f32>();
    let w = rng.gen::<f32>();
    ball_point(u, v, w, radius)
}

pub fn sample_point_field<R: Rng + ?Sized>(rng: &mut R, count: usize, radius: f32) -> Vec<Vec3> {
    (0..count).map(|_| sample_in_ball(rng, radius)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ball_point_poles_and_centre() {
        let north = ball_point(0.0, 1.0, 1.0, 2.5);
        assert!((north - Vec3::new(0.0, 0.0, 2.5)).length() < 1e-5);
        let south = ball_point(0.0, 0.0, 1.0, 2.5);
        assert!((south - Vec3::new(0.0, 0.0, -2.5)).length() < 1e-5);
        assert_eq!(ball_point(0.3, 0.7, 0.0, 2.5), Vec3::ZERO);
    }

    #[test]
    fn cube_root_radius() {
        // w = 1/8 puts the point at half the radius
        let p = ball_point(0.25, 0.5, 0.125, 2.0);
        assert!((p.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn empty_range_is_start() {
        let mut rng = rand::thread_rng();
        assert_eq!(uniform(&mut rng, &(3.0..3.0)), 3.0);
    }
}
