use bytemuck::{Pod, Zeroable};

/// Per-instance ring (flat annulus) data for the host renderer.
/// Must match the TypeScript protocol: 12 floats = 48 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct RingInstance {
    /// X position of the ring center in world space.
    pub x: f32,
    /// Y position of the ring center in world space.
    pub y: f32,
    /// Z position of the ring center in world space.
    pub z: f32,
    /// Inner radius in world units.
    pub inner: f32,
    /// Outer radius in world units.
    pub outer: f32,
    /// Base color, red channel.
    pub r: f32,
    /// Base color, green channel.
    pub g: f32,
    /// Base color, blue channel.
    pub b: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    /// Tilt around the local X axis, in radians (0 = flat on XZ).
    pub tilt: f32,
    /// Rotation around world Y, in radians.
    pub yaw: f32,
    /// Reserved.
    pub _pad0: f32,
}

impl RingInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Fixed-capacity ring instance buffer; writes past capacity are dropped.
pub struct RingBuffer {
    instances: Vec<RingInstance>,
    max: usize,
}

impl RingBuffer {
    pub fn new(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
            max,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Append an instance. Returns false if the buffer is full.
    pub fn push(&mut self, instance: RingInstance) -> bool {
        if self.instances.len() < self.max {
            self.instances.push(instance);
            true
        } else {
            false
        }
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn capacity(&self) -> usize {
        self.max
    }

    pub fn instances(&self) -> &[RingInstance] {
        &self.instances
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}
