use bytemuck::{Pod, Zeroable};

/// Per-instance sphere data written to SharedArrayBuffer for the host
/// renderer. Must match the TypeScript protocol: 12 floats = 48 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct SphereInstance {
    /// X position in world space.
    pub x: f32,
    /// Y position in world space.
    pub y: f32,
    /// Z position in world space.
    pub z: f32,
    /// Rendered radius in world units.
    pub radius: f32,
    /// Rotation around world Y, in radians.
    pub yaw: f32,
    /// Rotation around world X, in radians.
    pub pitch: f32,
    /// Base color, red channel.
    pub r: f32,
    /// Base color, green channel.
    pub g: f32,
    /// Base color, blue channel.
    pub b: f32,
    /// Emissive intensity (0.0 = lit surface).
    pub emissive: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    /// Surface selector (see `SurfaceKind::id`).
    pub surface: f32,
}

impl SphereInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Fixed-capacity sphere instance buffer. Writes past capacity are
/// dropped rather than reallocating, keeping the shared-memory section
/// stable for the host.
pub struct SphereBuffer {
    instances: Vec<SphereInstance>,
    max: usize,
}

impl SphereBuffer {
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
    pub fn push(&mut self, instance: SphereInstance) -> bool {
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

    pub fn instances(&self) -> &[SphereInstance] {
        &self.instances
    }

    /// Raw pointer to instance data for SharedArrayBuffer reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sphere_instance_is_12_floats() {
        assert_eq!(std::mem::size_of::<SphereInstance>(), 48);
        assert_eq!(SphereInstance::FLOATS, 12);
    }

    #[test]
    fn buffer_drops_writes_past_capacity() {
        let mut buf = SphereBuffer::new(2);
        assert!(buf.push(SphereInstance::default()));
        assert!(buf.push(SphereInstance::default()));
        assert!(!buf.push(SphereInstance::default()));
        assert_eq!(buf.instance_count(), 2);
    }
}
