use crate::constants::{
    CAMERA_FOVY_DEG, CAMERA_ZFAR, CAMERA_ZNEAR, DRIFT_PULLBACK, DRIFT_RISE, DRIFT_SWAY_AMPLITUDE,
    DRIFT_SWAY_CYCLES, HERO_CAMERA_HOME, HERO_LOOK_AT,
};
use glam::{Mat4, Vec3};
use std::f32::consts::PI;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug, PartialEq)]
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
    pub fn perspective(eye: Vec3, target: Vec3, aspect: f32) -> Self {
        Self {
            eye,
            target,
            up: Vec3::Y,
            aspect,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }

    pub fn look_at(&mut self, target: Vec3) {
        self.target = target;
    }

    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Camera placement as a closed-form function of scroll progress.
///
/// Position is re-derived from progress every frame rather than accumulated,
/// so repeated or skipped scroll events settle on the next frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollDrift {
    pub home: Vec3,
    pub sway_amplitude: f32,
    pub sway_cycles: f32,
    pub rise: f32,
    pub pullback: f32,
    pub look_at: Vec3,
}

impl Default for ScrollDrift {
    fn default() -> Self {
        Self {
            home: HERO_CAMERA_HOME,
            sway_amplitude: DRIFT_SWAY_AMPLITUDE,
            sway_cycles: DRIFT_SWAY_CYCLES,
            rise: DRIFT_RISE,
            pullback: DRIFT_PULLBACK,
            look_at: HERO_LOOK_AT,
        }
    }
}

impl ScrollDrift {
    pub fn position_for(&self, progress: f32) -> Vec3 {
        Vec3::new(
            self.home.x + (progress * PI * self.sway_cycles).sin() * self.sway_amplitude,
            self.home.y + progress * self.rise,
            self.home.z - progress * self.pullback,
        )
    }

    pub fn apply(&self, camera: &mut Camera, progress: f32) {
        camera.eye = self.position_for(progress);
        camera.look_at(self.look_at);
    }
}
