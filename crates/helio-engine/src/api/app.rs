use crate::api::types::{BodyId, HostEvent};
use crate::assets::labels::LabelTable;
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::renderer::frame::FrameParams;
use crate::systems::lighting::LightState;
use crate::systems::sky::SkyState;

/// Configuration for the engine, provided by the app.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Maximum number of sphere instances (default: 256).
    pub max_spheres: usize,
    /// Maximum number of ring instances (default: 64).
    pub max_rings: usize,
    /// Maximum number of label instances (default: 32).
    pub max_labels: usize,
    /// Maximum number of point lights (default: 8).
    pub max_lights: usize,
    /// Maximum number of host events per frame (default: 64).
    pub max_events: usize,
    /// Number of starfield points written once at init (default: 8000).
    pub star_count: usize,
    /// Number of dust-cloud points written once at init (default: 4000).
    pub dust_count: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_spheres: 256,
            max_rings: 64,
            max_labels: 32,
            max_lights: 8,
            max_events: 64,
            star_count: 8000,
            dust_count: 4000,
        }
    }
}

/// The core contract every scene app must fulfill.
pub trait App {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> AppConfig {
        AppConfig::default()
    }

    /// Setup initial state: register labels, spawn bodies, generate sky points.
    fn init(&mut self, ctx: &mut EngineContext);

    /// One fixed update step. Derive body transforms, lights, frame
    /// parameters and host events from the drained input and elapsed time.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Mutable access to engine state, passed to App::init and App::update.
pub struct EngineContext {
    pub scene: Scene,
    pub lights: LightState,
    pub sky: SkyState,
    pub labels: LabelTable,
    pub frame: FrameParams,
    pub events: Vec<HostEvent>,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            lights: LightState::new(),
            sky: SkyState::new(),
            labels: LabelTable::new(),
            frame: FrameParams::default(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique body ID.
    pub fn next_id(&mut self) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit a host event to be forwarded to the page.
    pub fn emit_event(&mut self, event: HostEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (host events).
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_is_sequential() {
        let mut ctx = EngineContext::new();
        assert_eq!(ctx.next_id(), BodyId(1));
        assert_eq!(ctx.next_id(), BodyId(2));
    }

    #[test]
    fn clear_frame_data_drops_events() {
        let mut ctx = EngineContext::new();
        ctx.emit_event(HostEvent { kind: 1.0, a: 2.0, b: 3.0, c: 4.0 });
        assert_eq!(ctx.events.len(), 1);
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }
}
