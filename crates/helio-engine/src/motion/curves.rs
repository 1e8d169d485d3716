// motion/curves.rs
//
// Pure visibility and scale curves over scroll progress.
// Every function is total over f32 and clamps its own output, so callers
// can feed raw (possibly out-of-range) progress values.

/// Scene opacity for decorative elements: 0 at rest, fully visible once
/// progress passes 1/3. Exactly zero at progress 0 so the scene only
/// appears when scrolling starts.
#[inline]
pub fn scene_fade(progress: f32) -> f32 {
    if progress > 0.0 {
        (progress * 3.0).min(1.0)
    } else {
        0.0
    }
}

/// Linear ramp from 0 at `start` to 1 at `end`, clamped outside.
#[inline]
pub fn ramp(progress: f32, start: f32, end: f32) -> f32 {
    ((progress - start) / (end - start)).clamp(0.0, 1.0)
}

/// Deep-space (galaxy) visibility: hidden until 0.35, full at 0.65.
#[inline]
pub fn deep_space_visibility(progress: f32) -> f32 {
    if progress > 0.35 {
        ramp(progress, 0.35, 0.65)
    } else {
        0.0
    }
}

/// Zoom growth factor: 1 at rest, `1 + gain` at full scroll depth.
#[inline]
pub fn zoom_scale(progress: f32, gain: f32) -> f32 {
    1.0 + gain * progress
}

/// Notional camera pull-back distance reported to the page, matching the
/// camera path's Z range.
#[inline]
pub fn camera_distance(progress: f32) -> f32 {
    12.0 + progress * 88.0
}

/// Round to one decimal place for display.
#[inline]
pub fn round_to_tenth(v: f32) -> f32 {
    (v * 10.0).round() / 10.0
}
