// motion/orbit.rs
//
// Circular orbit math shared by rendering and nearest-body selection.
// Both consumers derive angles from the same function so the highlighted
// body always matches what is on screen.

use glam::Vec3;

/// Fraction of orbital speed removed at full scroll depth.
/// At progress 1.0 bodies orbit at half their base rate.
pub const SCROLL_DAMPING: f32 = 0.5;

/// Orbit angle in radians for elapsed time `t` (ticks), base angular
/// speed `speed` (radians per tick) and scroll progress in [0, 1].
#[inline]
pub fn orbit_angle(t: f32, speed: f32, progress: f32) -> f32 {
    t * speed * (1.0 - SCROLL_DAMPING * progress)
}

/// Position on a circular orbit in the XZ plane, centered at the origin.
#[inline]
pub fn orbit_position(radius: f32, angle: f32) -> Vec3 {
    Vec3::new(angle.cos() * radius, 0.0, angle.sin() * radius)
}

/// Index and distance of the point nearest to `target`.
/// Returns `None` for an empty slice; ties keep the first point.
pub fn nearest_index(points: &[Vec3], target: Vec3) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (i, p) in points.iter().enumerate() {
        let d = p.distance(target);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((i, d)),
        }
    }
    best
}
