use helio_engine::systems::render::build_draw_buffers;
use helio_engine::{
    App, AppConfig, EngineContext, FrameClock, InputEvent, InputQueue, LabelBuffer,
    ProtocolLayout, RingBuffer, SphereBuffer,
};

/// Generic app runner that wires up the engine loop.
///
/// Each concrete scene crate creates a `thread_local!` AppRunner and
/// exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct AppRunner<A: App> {
    app: A,
    ctx: EngineContext,
    input: InputQueue,
    spheres: SphereBuffer,
    rings: RingBuffer,
    labels: LabelBuffer,
    clock: FrameClock,
    config: AppConfig,
    layout: ProtocolLayout,
    initialized: bool,
}

impl<A: App> AppRunner<A> {
    pub fn new(app: A) -> Self {
        let config = app.config();
        let clock = FrameClock::new(config.fixed_dt);
        let layout = ProtocolLayout::from_config(&config);

        let spheres = SphereBuffer::new(config.max_spheres);
        let rings = RingBuffer::new(config.max_rings);
        let labels = LabelBuffer::new(config.max_labels);

        let mut ctx = EngineContext::new();
        ctx.lights = helio_engine::LightState::with_capacity(config.max_lights);

        Self {
            app,
            ctx,
            input: InputQueue::new(),
            spheres,
            rings,
            labels,
            clock,
            config,
            layout,
            initialized: false,
        }
    }

    /// Initialize the app. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.app.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.app.init(&mut self.ctx);
        self.initialized = true;
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame tick: fixed-step updates, then rebuild draw buffers.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        // Fixed timestep accumulation
        let steps = self.clock.accumulate(dt);
        for _ in 0..steps {
            self.app.update(&mut self.ctx, &self.input);
        }

        // Drain input only once an update step has consumed it; a
        // zero-step frame must not swallow pending clicks.
        if steps > 0 {
            self.input.drain();
        }

        // Build draw buffers from scene bodies
        build_draw_buffers(&self.ctx.scene, &mut self.spheres, &mut self.rings, &mut self.labels);
    }

    /// Serialize the label manifest for the host to rasterize.
    /// Returns an empty list on serialization failure.
    pub fn label_manifest(&self) -> String {
        match self.ctx.labels.to_json() {
            Ok(json) => json,
            Err(err) => {
                log::error!("label manifest serialization failed: {}", err);
                String::from("[]")
            }
        }
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn frame_params_ptr(&self) -> *const f32 {
        self.ctx.frame.as_ptr()
    }

    pub fn sphere_instances_ptr(&self) -> *const f32 {
        self.spheres.instances_ptr()
    }

    pub fn sphere_count(&self) -> u32 {
        self.spheres.instance_count()
    }

    pub fn ring_instances_ptr(&self) -> *const f32 {
        self.rings.instances_ptr()
    }

    pub fn ring_count(&self) -> u32 {
        self.rings.instance_count()
    }

    pub fn label_instances_ptr(&self) -> *const f32 {
        self.labels.instances_ptr()
    }

    pub fn label_count(&self) -> u32 {
        self.labels.instance_count()
    }

    pub fn lights_ptr(&self) -> *const f32 {
        self.ctx.lights.buffer_ptr()
    }

    pub fn light_count(&self) -> u32 {
        self.ctx.lights.count() as u32
    }

    pub fn ambient_intensity(&self) -> f32 {
        self.ctx.lights.ambient()
    }

    pub fn host_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    /// Number of host events, clamped to the wire capacity.
    pub fn host_events_len(&self) -> u32 {
        self.ctx.events.len().min(self.layout.max_events) as u32
    }

    pub fn star_points_ptr(&self) -> *const f32 {
        self.ctx.sky.stars.as_ptr()
    }

    pub fn star_point_count(&self) -> u32 {
        self.ctx.sky.stars.len() as u32
    }

    pub fn dust_points_ptr(&self) -> *const f32 {
        self.ctx.sky.dust.as_ptr()
    }

    pub fn dust_point_count(&self) -> u32 {
        self.ctx.sky.dust.len() as u32
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_spheres(&self) -> u32 {
        self.layout.max_spheres as u32
    }

    pub fn max_rings(&self) -> u32 {
        self.layout.max_rings as u32
    }

    pub fn max_labels(&self) -> u32 {
        self.layout.max_labels as u32
    }

    pub fn max_lights(&self) -> u32 {
        self.layout.max_lights as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helio_engine::{Body, HostEvent, SphereVisual};

    /// Minimal app that counts updates and mirrors queue state.
    struct CounterApp {
        updates: u32,
        inputs_seen: u32,
    }

    impl CounterApp {
        fn new() -> Self {
            Self {
                updates: 0,
                inputs_seen: 0,
            }
        }
    }

    impl App for CounterApp {
        fn config(&self) -> AppConfig {
            AppConfig {
                max_events: 2,
                star_count: 0,
                dust_count: 0,
                ..AppConfig::default()
            }
        }

        fn init(&mut self, ctx: &mut EngineContext) {
            let id = ctx.next_id();
            ctx.scene.spawn(Body::new(id).with_sphere(SphereVisual::default()));
        }

        fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
            self.updates += 1;
            self.inputs_seen += input.len() as u32;
            // Overfill on purpose: the wire length must stay clamped.
            for i in 0..3 {
                ctx.emit_event(HostEvent {
                    kind: 9.0,
                    a: i as f32,
                    b: 0.0,
                    c: 0.0,
                });
            }
        }
    }

    #[test]
    fn tick_runs_fixed_steps() {
        let mut runner = AppRunner::new(CounterApp::new());
        runner.init();
        runner.tick(1.0 / 60.0);
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.app.updates, 2);
    }

    #[test]
    fn tick_before_init_is_a_no_op() {
        let mut runner = AppRunner::new(CounterApp::new());
        runner.tick(1.0);
        assert_eq!(runner.app.updates, 0);
    }

    #[test]
    fn buffers_are_rebuilt_after_update() {
        let mut runner = AppRunner::new(CounterApp::new());
        runner.init();
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.sphere_count(), 1);
    }

    #[test]
    fn input_survives_a_zero_step_tick() {
        let mut runner = AppRunner::new(CounterApp::new());
        runner.init();
        runner.push_input(InputEvent::PointerDown { x: 0.0, y: 0.0 });

        // Not enough accumulated time for a step: input must be kept.
        runner.tick(0.001);
        assert_eq!(runner.app.inputs_seen, 0);

        runner.tick(1.0 / 60.0);
        assert_eq!(runner.app.inputs_seen, 1);
    }

    #[test]
    fn input_is_drained_after_a_step() {
        let mut runner = AppRunner::new(CounterApp::new());
        runner.init();
        runner.push_input(InputEvent::PointerDown { x: 0.0, y: 0.0 });
        runner.tick(1.0 / 60.0);
        runner.tick(1.0 / 60.0);
        // Seen exactly once, not re-delivered on the second tick.
        assert_eq!(runner.app.inputs_seen, 1);
    }

    #[test]
    fn host_events_len_is_clamped_to_capacity() {
        let mut runner = AppRunner::new(CounterApp::new());
        runner.init();
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.host_events_len(), 2);
    }

    #[test]
    fn label_manifest_is_json() {
        let mut runner = AppRunner::new(CounterApp::new());
        runner.init();
        assert_eq!(runner.label_manifest(), "[]");
    }
}
