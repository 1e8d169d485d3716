pub mod api;
pub mod core;
pub mod components;
pub mod motion;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::app::{App, AppConfig, EngineContext};
pub use api::types::{BodyId, Color3, HostEvent};
pub use components::body::Body;
pub use components::label::LabelVisual;
pub use components::ring::RingVisual;
pub use components::sphere::{SphereVisual, SurfaceKind};
pub use core::clock::FrameClock;
pub use core::rng::Rng;
pub use core::scene::Scene;
pub use motion::camera::{CameraPath, CameraRig};
pub use motion::curves;
pub use motion::ease::{approach, approach_vec3, lerp, lerp_vec3};
pub use motion::orbit::{nearest_index, orbit_angle, orbit_position};
pub use motion::pick::{pick_ray, ray_sphere_intersect, Ray};
pub use input::queue::{InputEvent, InputQueue};
pub use assets::labels::{LabelId, LabelTable};
pub use bridge::protocol::ProtocolLayout;
pub use bridge::protocol::{DEFAULT_MAX_LIGHTS, LIGHT_FLOATS};
pub use renderer::frame::FrameParams;
pub use renderer::label::{LabelBuffer, LabelInstance};
pub use renderer::ring::{RingBuffer, RingInstance};
pub use renderer::sphere::{SphereBuffer, SphereInstance};
pub use systems::lighting::{LightState, PointLight};
pub use systems::render::build_draw_buffers;
pub use systems::sky::{PointCloud, SkyState};
