// First-person camera rig state
//
// Yaw turns the whole character; pitch and roll only turn the camera. The
// rig's local height combines the crouch-blended eye height with the landing
// bounce offset. Rendering reads this state, it never writes it.

use glam::{Vec2, Vec3};

use crate::core::math::{blend_factor, lerp};

use super::stats::CameraTuning;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraRig {
    /// Character heading in degrees (0 = +Z, 90 = +X)
    yaw: f32,
    /// Camera pitch in degrees, positive looks down
    pitch: f32,
    /// Camera roll in degrees from strafing
    tilt: f32,
    /// Crouch-blended eye height above the feet
    eye_height: f32,
    /// Landing bounce offset added on top of the eye height
    bounce_offset: f32,
}

impl CameraRig {
    pub fn new(tuning: &CameraTuning) -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            tilt: 0.0,
            eye_height: tuning.stand_height,
            bounce_offset: 0.0,
        }
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn tilt(&self) -> f32 {
        self.tilt
    }

    pub fn eye_height(&self) -> f32 {
        self.eye_height
    }

    pub fn bounce_offset(&self) -> f32 {
        self.bounce_offset
    }

    /// Final local height of the camera attach point
    pub fn local_height(&self) -> f32 {
        self.eye_height + self.bounce_offset
    }

    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw.rem_euclid(360.0);
    }

    /// Mouse/stick look: x turns, y pitches (clamped)
    pub fn apply_look(&mut self, look_delta: Vec2, tuning: &CameraTuning) {
        self.set_yaw(self.yaw + look_delta.x * tuning.mouse_sensitivity);
        self.pitch = (self.pitch - look_delta.y * tuning.mouse_sensitivity)
            .clamp(-tuning.max_pitch, tuning.max_pitch);
    }

    /// Roll toward the strafe direction, more while airborne
    pub fn update_tilt(&mut self, strafe: f32, grounded: bool, dt: f32, tuning: &CameraTuning) {
        let mut target = strafe.clamp(-1.0, 1.0) * tuning.tilt_angle;
        if !grounded {
            target *= tuning.air_tilt_multiplier;
        }
        self.tilt = lerp(self.tilt, target, blend_factor(dt, tuning.tilt_speed));
    }

    pub fn blend_eye_height(&mut self, target: f32, factor: f32) {
        self.eye_height = lerp(self.eye_height, target, factor);
    }

    pub fn set_bounce_offset(&mut self, offset: f32) {
        self.bounce_offset = offset;
    }

    /// Horizontal forward of the character
    pub fn forward(&self) -> Vec3 {
        let (sin, cos) = self.yaw.to_radians().sin_cos();
        Vec3::new(sin, 0.0, cos)
    }

    /// Horizontal right of the character
    pub fn right(&self) -> Vec3 {
        let (sin, cos) = self.yaw.to_radians().sin_cos();
        Vec3::new(cos, 0.0, -sin)
    }

    /// Where the camera looks, including pitch
    pub fn view_direction(&self) -> Vec3 {
        let (sin_pitch, cos_pitch) = self.pitch.to_radians().sin_cos();
        self.forward() * cos_pitch - Vec3::Y * sin_pitch
    }

    /// Rotate a 2-D intent (x = strafe right, y = forward) into the world
    /// plane. Zero-length input stays zero.
    pub fn intent_to_world(&self, input: Vec2) -> Vec3 {
        (self.right() * input.x + self.forward() * input.y).normalize_or_zero()
    }

    /// Reset look and offsets (respawn)
    pub fn reset(&mut self, yaw: f32, tuning: &CameraTuning) {
        *self = Self::new(tuning);
        self.set_yaw(yaw);
    }
}
