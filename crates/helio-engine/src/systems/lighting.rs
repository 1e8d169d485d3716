/// Point light system.
///
/// Apps rebuild the light list each tick from scroll progress; the
/// runner serializes it to the SAB for the host's shading pass.

use glam::Vec3;

use crate::api::types::Color3;

/// A point light with position, color, intensity and falloff radius.
///
/// Wire format (8 floats / 32 bytes):
/// `[x, y, z, r, g, b, intensity, radius]`
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct PointLight {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub intensity: f32,
    /// Falloff distance in world units. 0.0 means unbounded falloff.
    pub radius: f32,
}

impl PointLight {
    /// Create a new point light at the given position.
    ///
    /// - `pos`: world-space position
    /// - `color`: RGB color (typically [0..1] but can exceed 1.0 for HDR)
    /// - `intensity`: light strength multiplier
    /// - `radius`: falloff distance in world units, 0.0 for unbounded
    pub fn new(pos: Vec3, color: Color3, intensity: f32, radius: f32) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            r: color.r,
            g: color.g,
            b: color.b,
            intensity,
            radius,
        }
    }
}

/// Manages active lights and the scene's ambient intensity.
///
/// Holds at most `max` lights; adds past capacity are dropped so the
/// shared-memory light section never grows.
pub struct LightState {
    lights: Vec<PointLight>,
    max: usize,
    ambient: f32,
}

impl LightState {
    pub fn new() -> Self {
        Self::with_capacity(crate::bridge::protocol::DEFAULT_MAX_LIGHTS)
    }

    /// Create a LightState with a specific light capacity.
    pub fn with_capacity(max_lights: usize) -> Self {
        Self {
            lights: Vec::with_capacity(max_lights),
            max: max_lights,
            ambient: 1.0,
        }
    }

    /// Add a point light. Returns false if the light list is full.
    pub fn add(&mut self, light: PointLight) -> bool {
        if self.lights.len() < self.max {
            self.lights.push(light);
            true
        } else {
            false
        }
    }

    /// Remove all lights.
    pub fn clear(&mut self) {
        self.lights.clear();
    }

    /// Get an iterator over active lights.
    pub fn iter(&self) -> impl Iterator<Item = &PointLight> {
        self.lights.iter()
    }

    /// Get a mutable iterator over active lights.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PointLight> {
        self.lights.iter_mut()
    }

    /// Number of active lights.
    pub fn count(&self) -> usize {
        self.lights.len()
    }

    /// Maximum number of lights.
    pub fn capacity(&self) -> usize {
        self.max
    }

    /// Set the ambient intensity (default 1.0 = host shading unscaled).
    pub fn set_ambient(&mut self, intensity: f32) {
        self.ambient = intensity;
    }

    /// Get the ambient intensity.
    pub fn ambient(&self) -> f32 {
        self.ambient
    }

    /// Pointer to the lights data for SAB serialization.
    pub fn buffer_ptr(&self) -> *const f32 {
        self.lights.as_ptr() as *const f32
    }
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::protocol::LIGHT_FLOATS;

    #[test]
    fn point_light_new() {
        let light = PointLight::new(
            Vec3::new(25.0, 20.0, 25.0),
            Color3::new(1.0, 0.5, 0.0),
            2.0,
            150.0,
        );
        assert_eq!(light.x, 25.0);
        assert_eq!(light.y, 20.0);
        assert_eq!(light.z, 25.0);
        assert_eq!(light.r, 1.0);
        assert_eq!(light.g, 0.5);
        assert_eq!(light.b, 0.0);
        assert_eq!(light.intensity, 2.0);
        assert_eq!(light.radius, 150.0);
    }

    #[test]
    fn point_light_matches_wire_size() {
        assert_eq!(std::mem::size_of::<PointLight>(), LIGHT_FLOATS * 4);
    }

    #[test]
    fn light_state_add_and_count() {
        let mut state = LightState::new();
        assert_eq!(state.count(), 0);

        state.add(PointLight::new(Vec3::ZERO, Color3::WHITE, 1.0, 50.0));
        state.add(PointLight::new(Vec3::new(10.0, 20.0, 0.0), Color3::WHITE, 2.0, 100.0));
        assert_eq!(state.count(), 2);
    }

    #[test]
    fn light_state_drops_past_capacity() {
        let mut state = LightState::with_capacity(1);
        assert!(state.add(PointLight::new(Vec3::ZERO, Color3::WHITE, 1.0, 0.0)));
        assert!(!state.add(PointLight::new(Vec3::ZERO, Color3::WHITE, 1.0, 0.0)));
        assert_eq!(state.count(), 1);
    }
}
