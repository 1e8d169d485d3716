pub mod lighting;
pub mod render;
pub mod sky;

// Re-export key types for convenient access
pub use lighting::{LightState, PointLight};
pub use render::build_draw_buffers;
pub use sky::{PointCloud, SkyState};
