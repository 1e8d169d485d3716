use bytemuck::{Pod, Zeroable};

/// Per-instance billboard label data for the host renderer. The host
/// rasterizes the text for `label_id` from the label manifest and draws
/// it camera-facing at the given position.
/// Must match the TypeScript protocol: 12 floats = 48 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct LabelInstance {
    /// X position in world space.
    pub x: f32,
    /// Y position in world space.
    pub y: f32,
    /// Z position in world space.
    pub z: f32,
    /// Font size in world units.
    pub size: f32,
    /// Text color, red channel.
    pub r: f32,
    /// Text color, green channel.
    pub g: f32,
    /// Text color, blue channel.
    pub b: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    /// Index into the label manifest.
    pub label_id: f32,
    /// Reserved.
    pub _pad0: f32,
    /// Reserved.
    pub _pad1: f32,
    /// Reserved.
    pub _pad2: f32,
}

impl LabelInstance {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// Fixed-capacity label instance buffer; writes past capacity are dropped.
pub struct LabelBuffer {
    instances: Vec<LabelInstance>,
    max: usize,
}

impl LabelBuffer {
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
    pub fn push(&mut self, instance: LabelInstance) -> bool {
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

    pub fn instances(&self) -> &[LabelInstance] {
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
    fn label_instance_is_12_floats() {
        assert_eq!(std::mem::size_of::<LabelInstance>(), 48);
        assert_eq!(LabelInstance::FLOATS, 12);
    }

    #[test]
    fn buffer_drops_writes_past_capacity() {
        let mut buf = LabelBuffer::new(1);
        assert!(buf.push(LabelInstance::default()));
        assert!(!buf.push(LabelInstance::default()));
        assert_eq!(buf.instance_count(), 1);
    }
}
