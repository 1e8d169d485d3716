use crate::api::types::BodyId;
use crate::components::body::Body;

/// Simple body storage using a flat Vec.
/// Designed for small-to-medium body counts (hundreds, not millions).
pub struct Scene {
    bodies: Vec<Body>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            bodies: Vec::with_capacity(256),
        }
    }

    /// Create a scene with a specific body capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bodies: Vec::with_capacity(capacity),
        }
    }

    /// Add a body to the scene.
    pub fn spawn(&mut self, body: Body) {
        self.bodies.push(body);
    }

    /// Remove a body by ID. Returns the removed body if found.
    pub fn despawn(&mut self, id: BodyId) -> Option<Body> {
        if let Some(idx) = self.bodies.iter().position(|b| b.id == id) {
            Some(self.bodies.swap_remove(idx))
        } else {
            None
        }
    }

    /// Get a reference to a body by ID.
    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Get a mutable reference to a body by ID.
    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.id == id)
    }

    /// Iterate over all bodies.
    pub fn iter(&self) -> impl Iterator<Item = &Body> {
        self.bodies.iter()
    }

    /// Iterate over all bodies mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Body> {
        self.bodies.iter_mut()
    }

    /// Find the first body with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.tag == tag)
    }

    /// Find the first body with the given tag (mutable).
    pub fn find_by_tag_mut(&mut self, tag: &str) -> Option<&mut Body> {
        self.bodies.iter_mut().find(|b| b.tag == tag)
    }

    /// Number of bodies in the scene.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Whether the scene is empty.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Clear all bodies.
    pub fn clear(&mut self) {
        self.bodies.clear();
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn spawn_and_get() {
        let mut scene = Scene::new();
        let id = BodyId(1);
        scene.spawn(Body::new(id).with_pos(Vec3::new(10.0, 20.0, 30.0)));
        let b = scene.get(id).unwrap();
        assert_eq!(b.pos, Vec3::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn despawn_removes_body() {
        let mut scene = Scene::new();
        let id = BodyId(1);
        scene.spawn(Body::new(id));
        assert_eq!(scene.len(), 1);
        scene.despawn(id);
        assert_eq!(scene.len(), 0);
    }

    #[test]
    fn find_by_tag() {
        let mut scene = Scene::new();
        scene.spawn(Body::new(BodyId(1)).with_tag("sun"));
        scene.spawn(Body::new(BodyId(2)).with_tag("rock"));
        let sun = scene.find_by_tag("sun").unwrap();
        assert_eq!(sun.id, BodyId(1));
    }
}
