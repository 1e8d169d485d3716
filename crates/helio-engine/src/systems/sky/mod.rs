pub mod cloud;

pub use cloud::PointCloud;

/// Background decoration points, generated once at init and rotated by
/// the host from per-frame parameters. Point positions never change
/// after generation; only the frame params (yaw, scale, opacity) do.
pub struct SkyState {
    /// Starfield shell points.
    pub stars: PointCloud,
    /// Dust cloud points.
    pub dust: PointCloud,
}

impl SkyState {
    pub fn new() -> Self {
        Self {
            stars: PointCloud::empty(),
            dust: PointCloud::empty(),
        }
    }
}

impl Default for SkyState {
    fn default() -> Self {
        Self::new()
    }
}
