// motion/pick.rs
//
// Pointer picking: unproject a screen point into a world-space ray and
// intersect it against sphere click areas.

use glam::{Mat4, Vec3};

/// World-space ray with a normalized direction.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// Build a picking ray from normalized device coordinates.
/// `ndc_x`/`ndc_y` are in [-1, 1] with +Y up; depth follows the WebGPU
/// convention of Z in [0, 1], so the near plane unprojects at z = 0.
pub fn pick_ray(ndc_x: f32, ndc_y: f32, view: Mat4, proj: Mat4) -> Ray {
    let inv = (proj * view).inverse();
    let near = inv.project_point3(Vec3::new(ndc_x, ndc_y, 0.0));
    let far = inv.project_point3(Vec3::new(ndc_x, ndc_y, 1.0));
    Ray {
        origin: near,
        dir: (far - near).normalize(),
    }
}

/// Distance along `ray` to the first intersection with a sphere, or
/// `None` on a miss. A ray starting inside the sphere reports the exit
/// point. Assumes `ray.dir` is normalized.
pub fn ray_sphere_intersect(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.dir);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t_near = -b - sq;
    let t_far = -b + sq;
    if t_near >= 0.0 {
        Some(t_near)
    } else if t_far >= 0.0 {
        Some(t_far)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_ray_hits_front_of_sphere() {
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 10.0),
            dir: Vec3::new(0.0, 0.0, -1.0),
        };
        let t = ray_sphere_intersect(&ray, Vec3::ZERO, 2.0).unwrap();
        assert!((t - 8.0).abs() < 1e-4, "t = {}", t);
    }

    #[test]
    fn offset_ray_misses() {
        let ray = Ray {
            origin: Vec3::new(5.0, 0.0, 10.0),
            dir: Vec3::new(0.0, 0.0, -1.0),
        };
        assert!(ray_sphere_intersect(&ray, Vec3::ZERO, 2.0).is_none());
    }

    #[test]
    fn ray_from_inside_reports_exit() {
        let ray = Ray {
            origin: Vec3::ZERO,
            dir: Vec3::new(1.0, 0.0, 0.0),
        };
        let t = ray_sphere_intersect(&ray, Vec3::ZERO, 3.0).unwrap();
        assert!((t - 3.0).abs() < 1e-4, "t = {}", t);
    }

    #[test]
    fn sphere_behind_ray_is_a_miss() {
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 10.0),
            dir: Vec3::new(0.0, 0.0, 1.0),
        };
        assert!(ray_sphere_intersect(&ray, Vec3::ZERO, 2.0).is_none());
    }

    #[test]
    fn screen_center_ray_points_down_view_axis() {
        let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
        let proj = Mat4::perspective_rh(75.0_f32.to_radians(), 16.0 / 9.0, 0.1, 2000.0);
        let ray = pick_ray(0.0, 0.0, view, proj);
        assert!((ray.dir - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-3, "dir = {:?}", ray.dir);
        let t = ray_sphere_intersect(&ray, Vec3::ZERO, 1.0).unwrap();
        let hit = ray.origin + ray.dir * t;
        assert!((hit - Vec3::new(0.0, 0.0, 1.0)).length() < 1e-2, "hit = {:?}", hit);
    }

    #[test]
    fn upper_screen_ray_tilts_up() {
        let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
        let proj = Mat4::perspective_rh(75.0_f32.to_radians(), 1.0, 0.1, 2000.0);
        let ray = pick_ray(0.0, 0.5, view, proj);
        assert!(ray.dir.y > 0.0);
        assert!(ray.dir.z < 0.0);
    }
}
