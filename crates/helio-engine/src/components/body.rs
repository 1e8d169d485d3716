use glam::Vec3;

use crate::api::types::BodyId;
use crate::components::label::LabelVisual;
use crate::components::ring::RingVisual;
use crate::components::sphere::SphereVisual;

/// Fat body: a single struct with optional visual components.
/// Chosen for simplicity over ECS purity; scenes hold hundreds of bodies, not millions.
#[derive(Debug, Clone)]
pub struct Body {
    /// Unique identifier.
    pub id: BodyId,
    /// String tag for finding bodies by name.
    pub tag: String,
    /// Whether this body is active (inactive bodies are skipped by the renderer).
    pub active: bool,
    /// Position in world space.
    pub pos: Vec3,
    /// Rotation around the world Y axis, in radians.
    pub yaw: f32,
    /// Rotation around the world X axis, in radians.
    pub pitch: f32,
    /// Sphere component (optional; bodies without visuals are invisible).
    pub sphere: Option<SphereVisual>,
    /// Flat ring component (optional).
    pub ring: Option<RingVisual>,
    /// Billboard text label component (optional).
    pub label: Option<LabelVisual>,
}

impl Body {
    /// Create a new body with the given ID at the origin.
    pub fn new(id: BodyId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            pos: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            sphere: None,
            ring: None,
            label: None,
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec3) -> Self {
        self.pos = pos;
        self
    }

    pub fn with_yaw(mut self, yaw: f32) -> Self {
        self.yaw = yaw;
        self
    }

    pub fn with_pitch(mut self, pitch: f32) -> Self {
        self.pitch = pitch;
        self
    }

    pub fn with_sphere(mut self, sphere: SphereVisual) -> Self {
        self.sphere = Some(sphere);
        self
    }

    pub fn with_ring(mut self, ring: RingVisual) -> Self {
        self.ring = Some(ring);
        self
    }

    pub fn with_label(mut self, label: LabelVisual) -> Self {
        self.label = Some(label);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::Color3;

    #[test]
    fn new_body_defaults() {
        let b = Body::new(BodyId(5));
        assert!(b.active);
        assert_eq!(b.pos, Vec3::ZERO);
        assert!(b.sphere.is_none());
        assert!(b.ring.is_none());
        assert!(b.label.is_none());
    }

    #[test]
    fn builder_attaches_components() {
        let b = Body::new(BodyId(1))
            .with_tag("core")
            .with_pos(Vec3::new(1.0, 2.0, 3.0))
            .with_sphere(SphereVisual::new(2.5, Color3::WHITE));
        assert_eq!(b.tag, "core");
        assert_eq!(b.pos.z, 3.0);
        assert!(b.sphere.is_some());
    }
}
