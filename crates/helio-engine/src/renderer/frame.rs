use bytemuck::{Pod, Zeroable};

/// Per-frame scalar parameters for the host renderer, written once per
/// tick at a fixed offset in the shared buffer.
/// Must match the TypeScript protocol: 20 floats = 80 bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct FrameParams {
    /// Camera X position in world space.
    pub cam_x: f32,
    /// Camera Y position in world space.
    pub cam_y: f32,
    /// Camera Z position in world space.
    pub cam_z: f32,
    /// Vertical field of view, in degrees.
    pub cam_fov_deg: f32,
    /// Scroll progress in [0, 1].
    pub scroll: f32,
    /// Elapsed scene time in seconds.
    pub elapsed: f32,
    /// Scene opacity for decorative elements, in [0, 1].
    pub scene_opacity: f32,
    /// Deep-space (galaxy) visibility, in [0, 1].
    pub deep_space: f32,
    /// Starfield shell rotation around Y, in radians.
    pub star_yaw: f32,
    /// Starfield shell scale factor (1.0 = base radius).
    pub star_scale: f32,
    /// Dust cloud rotation around Y, in radians.
    pub dust_yaw: f32,
    /// Dust cloud rotation around X, in radians.
    pub dust_pitch: f32,
    /// Dust point size in world units.
    pub dust_size: f32,
    /// Dust opacity in [0, 1].
    pub dust_opacity: f32,
    /// Notional camera pull-back distance shown in the page HUD.
    pub camera_distance: f32,
    /// Index of the nearest planet, or -1 when none.
    pub nearest_index: f32,
    /// Distance to the nearest planet, rounded to one decimal.
    pub nearest_distance: f32,
    /// 1.0 when the distance readout should be shown, else 0.0.
    pub show_distance: f32,
    /// Index of the pointer-hovered body (-1 none, 0..n planets, n sun).
    pub hover_index: f32,
    /// Reserved.
    pub _pad0: f32,
}

impl FrameParams {
    pub const FLOATS: usize = 20;

    /// Raw pointer for SharedArrayBuffer reads.
    pub fn as_ptr(&self) -> *const f32 {
        self as *const FrameParams as *const f32
    }
}

impl Default for FrameParams {
    fn default() -> Self {
        Self {
            cam_x: 0.0,
            cam_y: 8.0,
            cam_z: 12.0,
            cam_fov_deg: 75.0,
            scroll: 0.0,
            elapsed: 0.0,
            scene_opacity: 0.0,
            deep_space: 0.0,
            star_yaw: 0.0,
            star_scale: 1.0,
            dust_yaw: 0.0,
            dust_pitch: 0.0,
            dust_size: 0.03,
            dust_opacity: 0.5,
            camera_distance: 12.0,
            nearest_index: -1.0,
            nearest_distance: 0.0,
            show_distance: 0.0,
            hover_index: -1.0,
            _pad0: 0.0,
        }
    }
}
