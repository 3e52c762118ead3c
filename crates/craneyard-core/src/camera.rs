use crate::constants::{CAMERA_EYE, CAMERA_FOV_DEGREES, CAMERA_ZFAR, CAMERA_ZNEAR};
use glam::{Mat4, Vec3};

/// Right-handed perspective camera for one crane slot.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// The slot framing: above and behind the origin, looking at the crane.
    pub fn slot_default(aspect: f32) -> Self {
        Self {
            eye: Vec3::from(CAMERA_EYE),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOV_DEGREES.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    /// Track the canvas aspect ratio on resize.
    pub fn set_aspect(&mut self, width: f32, height: f32) {
        self.aspect = width / height.max(1.0);
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
