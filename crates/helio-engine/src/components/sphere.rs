use crate::api::types::Color3;

/// Surface selector for sphere rendering.
/// The host maps each kind to a texture or procedural material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceKind {
    /// Untextured: shaded from the base color only.
    #[default]
    Flat,
    Earth,
    Mars,
    Jupiter,
    Neptune,
    Venus,
    Sun,
}

impl SurfaceKind {
    /// Stable wire encoding, written into the sphere instance stream.
    pub fn id(self) -> f32 {
        match self {
            SurfaceKind::Flat => 0.0,
            SurfaceKind::Earth => 1.0,
            SurfaceKind::Mars => 2.0,
            SurfaceKind::Jupiter => 3.0,
            SurfaceKind::Neptune => 4.0,
            SurfaceKind::Venus => 5.0,
            SurfaceKind::Sun => 6.0,
        }
    }
}

/// Sphere component — the primary visual of the engine.
#[derive(Debug, Clone, Copy)]
pub struct SphereVisual {
    /// Rendered radius in world units.
    pub radius: f32,
    /// Base color.
    pub color: Color3,
    /// Emissive intensity (0.0 = lit surface, higher values self-illuminate).
    pub emissive: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque). Zero-alpha spheres are skipped.
    pub alpha: f32,
    /// Surface selector.
    pub surface: SurfaceKind,
}

impl Default for SphereVisual {
    fn default() -> Self {
        Self {
            radius: 1.0,
            color: Color3::WHITE,
            emissive: 0.0,
            alpha: 1.0,
            surface: SurfaceKind::Flat,
        }
    }
}

impl SphereVisual {
    pub fn new(radius: f32, color: Color3) -> Self {
        Self {
            radius,
            color,
            ..Default::default()
        }
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_surface(mut self, surface: SurfaceKind) -> Self {
        self.surface = surface;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_ids_are_distinct() {
        let kinds = [
            SurfaceKind::Flat,
            SurfaceKind::Earth,
            SurfaceKind::Mars,
            SurfaceKind::Jupiter,
            SurfaceKind::Neptune,
            SurfaceKind::Venus,
            SurfaceKind::Sun,
        ];
        for (i, k) in kinds.iter().enumerate() {
            assert_eq!(k.id(), i as f32);
        }
    }

    #[test]
    fn new_sphere_is_opaque_and_flat() {
        let s = SphereVisual::new(3.0, Color3::new(0.2, 0.4, 0.6));
        assert_eq!(s.alpha, 1.0);
        assert_eq!(s.emissive, 0.0);
        assert_eq!(s.surface, SurfaceKind::Flat);
    }
}
