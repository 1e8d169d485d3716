use glam::{Mat4, Vec3};

use crate::motion::ease::{approach, approach_vec3, lerp};

/// Near clip plane distance.
pub const Z_NEAR: f32 = 0.1;
/// Far clip plane distance. The sky shell sits at ~300 units, well inside.
pub const Z_FAR: f32 = 2000.0;

/// Scroll-parameterized camera track: where the camera should be and how
/// wide its view should be at a given scroll progress. The rig eases
/// toward these targets instead of jumping to them.
#[derive(Debug, Clone)]
pub struct CameraPath {
    /// Height at progress 0.
    pub base_y: f32,
    /// Height at progress 1.
    pub max_y: f32,
    /// Pull-back distance at progress 0.
    pub base_z: f32,
    /// Pull-back distance at progress 1.
    pub max_z: f32,
    /// Vertical field of view at progress 0, in degrees.
    pub base_fov: f32,
    /// Vertical field of view at progress 1, in degrees.
    pub max_fov: f32,
    /// Per-tick easing rate for position.
    pub pos_rate: f32,
    /// Per-tick easing rate for field of view.
    pub fov_rate: f32,
}

impl Default for CameraPath {
    fn default() -> Self {
        Self {
            base_y: 8.0,
            max_y: 25.0,
            base_z: 12.0,
            max_z: 100.0,
            base_fov: 75.0,
            max_fov: 90.0,
            pos_rate: 0.05,
            fov_rate: 0.02,
        }
    }
}

impl CameraPath {
    /// Target camera position for the given scroll progress.
    /// X is always pulled back to 0 so the view stays centered.
    pub fn target_position(&self, progress: f32) -> Vec3 {
        Vec3::new(
            0.0,
            lerp(self.base_y, self.max_y, progress),
            lerp(self.base_z, self.max_z, progress),
        )
    }

    /// Target field of view in degrees for the given scroll progress.
    pub fn target_fov(&self, progress: f32) -> f32 {
        lerp(self.base_fov, self.max_fov, progress)
    }
}

/// The actual camera state, eased toward the path targets each tick.
/// Always looks at the origin.
#[derive(Debug, Clone)]
pub struct CameraRig {
    pub pos: Vec3,
    pub fov_deg: f32,
    pub aspect: f32,
}

impl CameraRig {
    /// Create a rig resting at the path's progress-0 targets.
    pub fn new(path: &CameraPath, aspect: f32) -> Self {
        Self {
            pos: path.target_position(0.0),
            fov_deg: path.target_fov(0.0),
            aspect,
        }
    }

    /// Ease one tick toward the targets for `progress` (clamped to [0, 1]).
    pub fn advance(&mut self, path: &CameraPath, progress: f32) {
        let progress = progress.clamp(0.0, 1.0);
        self.pos = approach_vec3(self.pos, path.target_position(progress), path.pos_rate);
        self.fov_deg = approach(self.fov_deg, path.target_fov(progress), path.fov_rate);
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// View matrix: right-handed look-at from the rig position to the origin.
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.pos, Vec3::ZERO, Vec3::Y)
    }

    /// Projection matrix: right-handed perspective, Z in [0, 1] (WebGPU depth).
    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_deg.to_radians(), self.aspect, Z_NEAR, Z_FAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rig_starts_at_path_base() {
        let path = CameraPath::default();
        let rig = CameraRig::new(&path, 16.0 / 9.0);
        assert_eq!(rig.pos, Vec3::new(0.0, 8.0, 12.0));
        assert_eq!(rig.fov_deg, 75.0);
    }

    #[test]
    fn targets_interpolate_with_progress() {
        let path = CameraPath::default();
        assert_eq!(path.target_position(1.0), Vec3::new(0.0, 25.0, 100.0));
        assert_eq!(path.target_fov(1.0), 90.0);
        let mid = path.target_position(0.5);
        assert!((mid.z - 56.0).abs() < 1e-4);
    }

    #[test]
    fn advance_moves_toward_target_without_overshoot() {
        let path = CameraPath::default();
        let mut rig = CameraRig::new(&path, 1.0);
        for _ in 0..600 {
            rig.advance(&path, 1.0);
            assert!(rig.pos.z <= 100.0 + 1e-3);
            assert!(rig.fov_deg <= 90.0 + 1e-3);
        }
        // Ten seconds of easing should be essentially settled.
        assert!((rig.pos.z - 100.0).abs() < 0.1);
        assert!((rig.pos.y - 25.0).abs() < 0.1);
    }

    #[test]
    fn advance_at_the_fixed_point_holds_still() {
        let path = CameraPath::default();
        let mut rig = CameraRig::new(&path, 1.0);
        // The rig rests exactly on the progress-0 targets.
        rig.advance(&path, 0.0);
        assert_eq!(rig.pos, Vec3::new(0.0, 8.0, 12.0));
        assert_eq!(rig.fov_deg, 75.0);
    }

    #[test]
    fn advance_clamps_progress() {
        let path = CameraPath::default();
        let mut rig = CameraRig::new(&path, 1.0);
        for _ in 0..2000 {
            rig.advance(&path, 4.0);
        }
        assert!(rig.pos.z <= 100.0 + 1e-3, "overshot: {}", rig.pos.z);
    }

    #[test]
    fn view_looks_at_origin() {
        let path = CameraPath::default();
        let rig = CameraRig::new(&path, 1.0);
        let view = rig.view();
        // The origin should land on the view-space negative Z axis.
        let origin_vs = view.project_point3(Vec3::ZERO);
        assert!(origin_vs.x.abs() < 1e-4);
        assert!(origin_vs.y.abs() < 1e-4);
        assert!(origin_vs.z < 0.0);
    }
}
