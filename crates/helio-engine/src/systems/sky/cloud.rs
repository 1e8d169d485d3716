use glam::Vec3;
use std::f32::consts::TAU;

use crate::core::rng::Rng;

/// Immutable point set serialized once to the SAB as packed XYZ triples.
pub struct PointCloud {
    points: Vec<Vec3>,
}

impl PointCloud {
    pub fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Points distributed in a spherical shell between `radius` and
    /// `radius + depth`, uniform in direction.
    pub fn sphere_shell(count: usize, radius: f32, depth: f32, rng: &mut Rng) -> Self {
        let mut points = Vec::with_capacity(count);
        for _ in 0..count {
            let u = rng.range(-1.0, 1.0);
            let phi = rng.range(0.0, TAU);
            let s = (1.0 - u * u).max(0.0).sqrt();
            let dir = Vec3::new(s * phi.cos(), u, s * phi.sin());
            let r = radius + rng.next_f32() * depth;
            points.push(dir * r);
        }
        Self { points }
    }

    /// Points distributed uniformly in an origin-centered box with the
    /// given full side lengths.
    pub fn box_volume(count: usize, extents: Vec3, rng: &mut Rng) -> Self {
        let mut points = Vec::with_capacity(count);
        for _ in 0..count {
            points.push(Vec3::new(
                (rng.next_f32() - 0.5) * extents.x,
                (rng.next_f32() - 0.5) * extents.y,
                (rng.next_f32() - 0.5) * extents.z,
            ));
        }
        Self { points }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Raw pointer to packed XYZ data for SAB serialization.
    pub fn as_ptr(&self) -> *const f32 {
        self.points.as_ptr() as *const f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_radii_stay_in_band() {
        let mut rng = Rng::new(11);
        let cloud = PointCloud::sphere_shell(500, 300.0, 150.0, &mut rng);
        assert_eq!(cloud.len(), 500);
        for p in cloud.points() {
            let r = p.length();
            assert!((299.9..=450.1).contains(&r), "radius {}", r);
        }
    }

    #[test]
    fn box_points_stay_inside_extents() {
        let mut rng = Rng::new(12);
        let cloud = PointCloud::box_volume(500, Vec3::new(200.0, 100.0, 200.0), &mut rng);
        for p in cloud.points() {
            assert!(p.x.abs() <= 100.0);
            assert!(p.y.abs() <= 50.0);
            assert!(p.z.abs() <= 100.0);
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let mut a = Rng::new(77);
        let mut b = Rng::new(77);
        let ca = PointCloud::sphere_shell(64, 300.0, 150.0, &mut a);
        let cb = PointCloud::sphere_shell(64, 300.0, 150.0, &mut b);
        assert_eq!(ca.points(), cb.points());
    }

    #[test]
    fn shell_is_not_axis_clumped() {
        let mut rng = Rng::new(13);
        let cloud = PointCloud::sphere_shell(2000, 300.0, 0.0, &mut rng);
        let mean: Vec3 = cloud.points().iter().sum::<Vec3>() / cloud.len() as f32;
        // Directions are uniform, so the mean should sit near the origin.
        assert!(mean.length() < 20.0, "mean {:?}", mean);
    }
}
