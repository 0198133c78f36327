// Character tuning - designer-facing knobs with documented defaults
//
// Every value here is read at construction time and handed to the component
// that owns it. Nothing in this module is mutated while the simulation runs.

use serde::Deserialize;

use super::recoil::RecoilMode;

/// Movement, jump, gravity and crouch tuning
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct LocomotionTuning {
    // Movement
    /// Walking speed (units/second)
    pub move_speed: f32,
    /// Speed multiplier while sprint is held
    pub sprint_multiplier: f32,
    /// Speed multiplier while crouched on the ground
    pub crouch_speed_multiplier: f32,

    // Jump / gravity
    /// Peak height of a jump above the launch point
    pub jump_height: f32,
    /// Vertical acceleration (negative = down)
    pub gravity: f32,
    /// Vertical velocity held while grounded to stay seated on the surface
    pub ground_snap_velocity: f32,
    /// Fraction of the predicted rise below which an ascent counts as blocked
    pub ceiling_threshold: f32,

    // Capsule
    /// Capsule height while standing
    pub stand_height: f32,
    /// Capsule height while crouched
    pub crouch_height: f32,
    /// Capsule radius
    pub radius: f32,
    /// Gap kept between the capsule and the world
    pub skin_width: f32,
    /// Per-second blend rate for crouch height, center and camera height
    pub crouch_lerp: f32,
}

/// The stock locomotion tuning
pub const BASE_LOCOMOTION: LocomotionTuning = LocomotionTuning {
    move_speed: 6.0,
    sprint_multiplier: 2.0,
    crouch_speed_multiplier: 0.6,

    jump_height: 2.2,
    gravity: -30.0,
    ground_snap_velocity: -2.0,
    ceiling_threshold: 0.5,

    stand_height: 2.0,
    crouch_height: 1.2,
    radius: 0.5,
    skin_width: 0.08,
    crouch_lerp: 12.0,
};

impl Default for LocomotionTuning {
    fn default() -> Self {
        BASE_LOCOMOTION
    }
}

impl LocomotionTuning {
    /// Launch velocity that peaks exactly at `jump_height` under `gravity`
    pub fn jump_velocity(&self) -> f32 {
        (self.jump_height * -2.0 * self.gravity).max(0.0).sqrt()
    }

    /// Capsule center height (above the feet) while standing
    pub fn stand_center_y(&self) -> f32 {
        self.stand_height * 0.5
    }
}

/// Look, tilt, eye height and landing bounce tuning
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraTuning {
    /// Degrees of rotation per unit of look delta
    pub mouse_sensitivity: f32,
    /// Pitch limit in degrees (both directions)
    pub max_pitch: f32,
    /// Camera local height while standing
    pub stand_height: f32,
    /// Camera local height while crouched
    pub crouch_height: f32,

    /// Maximum roll in degrees when strafing
    pub tilt_angle: f32,
    /// Per-second blend rate toward the target roll
    pub tilt_speed: f32,
    /// Extra roll factor while airborne
    pub air_tilt_multiplier: f32,

    /// How far the camera dips on landing
    pub landing_dip_amount: f32,
    /// How far above rest the camera bounces back
    pub landing_bounce_amount: f32,
    /// Dip phase speed (phases per second)
    pub landing_dip_speed: f32,
    /// Bounce and settle phase speed (phases per second)
    pub landing_bounce_speed: f32,
}

pub const BASE_CAMERA: CameraTuning = CameraTuning {
    mouse_sensitivity: 3.0,
    max_pitch: 80.0,
    stand_height: 1.6,
    crouch_height: 1.0,

    tilt_angle: 4.0,
    tilt_speed: 5.0,
    air_tilt_multiplier: 1.5,

    landing_dip_amount: 0.5,
    landing_bounce_amount: 0.2,
    landing_dip_speed: 12.0,
    landing_bounce_speed: 8.0,
};

impl Default for CameraTuning {
    fn default() -> Self {
        BASE_CAMERA
    }
}

/// Recoil impulse tuning
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct RecoilTuning {
    /// Planar impulse used when a kick gives no horizontal strength (m/s)
    pub default_horizontal_force: f32,
    /// Upward impulse used when a kick gives no vertical strength (m/s)
    pub default_vertical_force: f32,
    /// Planar fade rate (m/s per second)
    pub horizontal_decay_per_sec: f32,
    /// Vertical fade rate (m/s per second)
    pub vertical_decay_per_sec: f32,
    /// Planar speed cap
    pub max_horizontal_speed: f32,
    /// Vertical speed cap (symmetric)
    pub max_vertical_speed: f32,
    /// Whether the planar cap is enforced
    pub clamp_planar: bool,
    /// When kicks are accepted
    pub mode: RecoilMode,
    /// Ignore the Y component of kick directions
    pub respect_horizontal_only: bool,
}

pub const BASE_RECOIL: RecoilTuning = RecoilTuning {
    default_horizontal_force: 6.0,
    default_vertical_force: 0.0,
    horizontal_decay_per_sec: 6.0,
    vertical_decay_per_sec: 6.0,
    max_horizontal_speed: 12.0,
    max_vertical_speed: 12.0,
    clamp_planar: true,
    mode: RecoilMode::AirOnly,
    respect_horizontal_only: false,
};

impl Default for RecoilTuning {
    fn default() -> Self {
        BASE_RECOIL
    }
}

/// Health tuning
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct VitalsTuning {
    pub max_health: f32,
    pub invulnerable: bool,
}

pub const BASE_VITALS: VitalsTuning = VitalsTuning {
    max_health: 100.0,
    invulnerable: false,
};

impl Default for VitalsTuning {
    fn default() -> Self {
        BASE_VITALS
    }
}

/// Complete tuning bundle for one character
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CharacterTuning {
    pub locomotion: LocomotionTuning,
    pub camera: CameraTuning,
    pub recoil: RecoilTuning,
    pub vitals: VitalsTuning,
}
