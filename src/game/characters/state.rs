// Locomotion state machine axes
//
// A character's locomotion state is the product of four small, independent
// machines: ground contact, crouch, jump and the cosmetic landing bounce.

use crate::core::math::lerp;

use super::stats::CameraTuning;

/// Whether the body touched the ground on its last move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GroundContact {
    Grounded,
    #[default]
    Airborne,
}

impl GroundContact {
    pub fn from_flag(grounded: bool) -> Self {
        if grounded {
            Self::Grounded
        } else {
            Self::Airborne
        }
    }

    pub fn is_grounded(self) -> bool {
        self == Self::Grounded
    }
}

/// Requested stance; the capsule blends toward it over several ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stance {
    #[default]
    Standing,
    Crouching,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JumpPhase {
    #[default]
    Idle,
    /// Rising from a granted jump; watched for ceiling hits
    Ascending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BouncePhase {
    #[default]
    Idle,
    Dipping,
    Bouncing,
    Settling,
}

/// Camera-only landing dip/bounce/settle sequence.
///
/// Each phase runs while its normalized elapsed time is below 1; the offset
/// is exactly 0 whenever the phase is `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LandingBounce {
    phase: BouncePhase,
    elapsed: f32,
    start_offset: f32,
    offset: f32,
}

impl LandingBounce {
    pub fn phase(&self) -> BouncePhase {
        self.phase
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_active(&self) -> bool {
        self.phase != BouncePhase::Idle
    }

    /// Start a sequence; ignored while one is running. Returns whether it started.
    pub fn trigger(&mut self) -> bool {
        if self.is_active() {
            return false;
        }
        self.phase = BouncePhase::Dipping;
        self.elapsed = 0.0;
        self.start_offset = 0.0;
        self.offset = 0.0;
        true
    }

    /// Advance the current phase by `dt`
    pub fn advance(&mut self, dt: f32, tuning: &CameraTuning) {
        let (speed, target) = match self.phase {
            BouncePhase::Idle => return,
            BouncePhase::Dipping => (tuning.landing_dip_speed, -tuning.landing_dip_amount),
            BouncePhase::Bouncing => (tuning.landing_bounce_speed, tuning.landing_bounce_amount),
            BouncePhase::Settling => (tuning.landing_bounce_speed, 0.0),
        };

        self.elapsed = (self.elapsed + dt * speed).min(1.0);
        if self.elapsed < 1.0 {
            self.offset = lerp(self.start_offset, target, self.elapsed);
        } else {
            self.offset = target;
            self.start_offset = self.offset;
            self.elapsed = 0.0;
            self.phase = match self.phase {
                BouncePhase::Dipping => BouncePhase::Bouncing,
                BouncePhase::Bouncing => BouncePhase::Settling,
                BouncePhase::Settling | BouncePhase::Idle => {
                    self.offset = 0.0;
                    self.start_offset = 0.0;
                    BouncePhase::Idle
                }
            };
        }
    }

    pub fn cancel(&mut self) {
        *self = Self::default();
    }
}

/// Per-character locomotion state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LocomotionState {
    pub ground: GroundContact,
    /// Ground contact before the latest move
    pub previous_ground: GroundContact,
    pub stance: Stance,
    pub jump: JumpPhase,
    /// Vertical velocity owned by locomotion (recoil is tracked separately)
    pub vertical_velocity: f32,
    /// Horizontal velocity from the last tick
    pub horizontal_velocity: glam::Vec3,
    pub bounce: LandingBounce,
    /// Seconds spent in the current ground contact state
    pub ground_time: f32,
}

impl LocomotionState {
    pub fn is_grounded(&self) -> bool {
        self.ground.is_grounded()
    }

    pub fn just_landed(&self) -> bool {
        self.ground.is_grounded() && !self.previous_ground.is_grounded()
    }

    /// Record the ground contact reported after a move
    pub fn set_ground(&mut self, grounded: bool, dt: f32) {
        let next = GroundContact::from_flag(grounded);
        self.previous_ground = self.ground;
        if next == self.ground {
            self.ground_time += dt;
        } else {
            self.ground = next;
            self.ground_time = 0.0;
        }
    }
}
