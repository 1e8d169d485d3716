// motion/ease.rs
//
// Per-tick interpolation helpers for trailing motion.
// No dependencies on Body/Scene, just math.

use glam::Vec3;

/// Linearly interpolate between two values.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Linearly interpolate between two Vec3 values.
#[inline]
pub fn lerp_vec3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a + (b - a) * t
}

/// Move `current` a fixed fraction of the remaining distance toward `target`.
/// Applied once per fixed tick this gives exponential trailing: fast when
/// far from the target, slow as it settles, and it never overshoots for
/// `rate` in [0, 1].
#[inline]
pub fn approach(current: f32, target: f32, rate: f32) -> f32 {
    current + (target - current) * rate
}

/// Vec3 variant of `approach`.
#[inline]
pub fn approach_vec3(current: Vec3, target: Vec3, rate: f32) -> Vec3 {
    current + (target - current) * rate
}
