use crate::api::types::Color3;

/// Flat annulus component, rendered in the body's local XZ plane.
/// Used for orbit guides, planetary rings, highlight halos and galaxy discs.
#[derive(Debug, Clone, Copy)]
pub struct RingVisual {
    /// Inner radius in world units.
    pub inner: f32,
    /// Outer radius in world units.
    pub outer: f32,
    /// Base color.
    pub color: Color3,
    /// Opacity (0.0 = invisible). Zero-alpha rings are skipped.
    pub alpha: f32,
    /// Tilt around the local X axis, in radians (0 = flat on XZ).
    pub tilt: f32,
}

impl Default for RingVisual {
    fn default() -> Self {
        Self {
            inner: 0.8,
            outer: 1.0,
            color: Color3::WHITE,
            alpha: 1.0,
            tilt: 0.0,
        }
    }
}

impl RingVisual {
    pub fn new(inner: f32, outer: f32, color: Color3) -> Self {
        Self {
            inner,
            outer,
            color,
            ..Default::default()
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_tilt(mut self, tilt: f32) -> Self {
        self.tilt = tilt;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ring_is_flat() {
        let r = RingVisual::new(1.8, 2.4, Color3::WHITE);
        assert_eq!(r.tilt, 0.0);
        assert_eq!(r.alpha, 1.0);
        assert!(r.outer > r.inner);
    }
}
