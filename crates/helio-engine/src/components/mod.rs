pub mod body;
pub mod label;
pub mod ring;
pub mod sphere;

// Re-export key types for convenient access
pub use body::Body;
pub use label::LabelVisual;
pub use ring::RingVisual;
pub use sphere::{SphereVisual, SurfaceKind};
