/// Input event types the engine understands.
/// Generic — no scene-specific semantics.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// Page scroll progress changed. `progress` is normalized to [0, 1].
    Scroll { progress: f32 },
    /// The pointer moved. Coordinates are normalized device coordinates
    /// in [-1, 1] with +Y up.
    PointerMove { x: f32, y: f32 },
    /// A pointer press began at normalized device coordinates (x, y).
    PointerDown { x: f32, y: f32 },
    /// A pointer press ended at normalized device coordinates (x, y).
    PointerUp { x: f32, y: f32 },
    /// A custom event from the UI layer (menu hover, resize, etc.).
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// A queue of input events.
/// JS writes events into the queue; Rust reads and drains them each frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from JS via wasm-bindgen).
    /// Scroll progress is clamped to [0, 1] here so apps never see raw
    /// out-of-range values from the page.
    pub fn push(&mut self, event: InputEvent) {
        let event = match event {
            InputEvent::Scroll { progress } => InputEvent::Scroll {
                progress: progress.clamp(0.0, 1.0),
            },
            other => other,
        };
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
