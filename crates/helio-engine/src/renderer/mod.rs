pub mod frame;
pub mod label;
pub mod ring;
pub mod sphere;

// Re-export key types for convenient access
pub use frame::FrameParams;
pub use label::{LabelBuffer, LabelInstance};
pub use ring::{RingBuffer, RingInstance};
pub use sphere::{SphereBuffer, SphereInstance};
