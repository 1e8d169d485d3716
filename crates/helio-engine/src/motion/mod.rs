pub mod camera;
pub mod curves;
pub mod ease;
pub mod orbit;
pub mod pick;

// Re-export key types for convenient access
pub use camera::{CameraPath, CameraRig};
pub use ease::{approach, approach_vec3, lerp, lerp_vec3};
pub use orbit::{nearest_index, orbit_angle, orbit_position};
pub use pick::{pick_ray, ray_sphere_intersect, Ray};
