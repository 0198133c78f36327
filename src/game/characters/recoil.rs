// Recoil impulse integrator
//
// Kicks from weapons or explosions accumulate into a planar (XZ) velocity and
// a vertical velocity. Both fade linearly toward zero and are added to the
// character's own movement by the locomotion controller.

use glam::Vec3;
use serde::Deserialize;

use crate::core::math::{flatten, move_towards, move_towards_vec3};

use super::stats::RecoilTuning;

/// When kicks are accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum RecoilMode {
    /// Only while airborne
    AirOnly,
    /// Only while grounded
    GroundOnly,
    /// Always
    Always,
}

impl Default for RecoilMode {
    fn default() -> Self {
        Self::AirOnly
    }
}

impl RecoilMode {
    pub fn allows(self, grounded: bool) -> bool {
        match self {
            Self::AirOnly => !grounded,
            Self::GroundOnly => grounded,
            Self::Always => true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecoilIntegrator {
    tuning: RecoilTuning,
    mode: RecoilMode,
    planar_velocity: Vec3,
    vertical_velocity: f32,
    grounded: bool,
}

impl RecoilIntegrator {
    pub fn new(tuning: RecoilTuning) -> Self {
        Self {
            mode: tuning.mode,
            tuning,
            planar_velocity: Vec3::ZERO,
            vertical_velocity: 0.0,
            grounded: false,
        }
    }

    pub fn mode(&self) -> RecoilMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: RecoilMode) {
        self.mode = mode;
    }

    /// Latest ground contact reported by the body
    pub fn set_grounded(&mut self, grounded: bool) {
        self.grounded = grounded;
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn can_apply(&self) -> bool {
        self.mode.allows(self.grounded)
    }

    pub fn planar_velocity(&self) -> Vec3 {
        self.planar_velocity
    }

    pub fn vertical_velocity(&self) -> f32 {
        self.vertical_velocity
    }

    /// Combined recoil velocity; scale by the tick's dt to get a displacement
    pub fn velocity(&self) -> Vec3 {
        self.planar_velocity + Vec3::Y * self.vertical_velocity
    }

    /// Push the character along `direction`. Returns false when the current
    /// mode rejects the kick.
    ///
    /// Unless `respect_horizontal_only` is set, an upward component in the
    /// direction adds `dir.y * horizontal` to the vertical strength. Downward
    /// components never subtract.
    pub fn kick(
        &mut self,
        direction: Vec3,
        horizontal_strength: Option<f32>,
        vertical_strength: Option<f32>,
    ) -> bool {
        if !self.can_apply() {
            return false;
        }

        let dir = direction.normalize_or_zero();
        let h = horizontal_strength.unwrap_or(self.tuning.default_horizontal_force);
        let mut v = vertical_strength.unwrap_or(self.tuning.default_vertical_force);

        let planar_dir = flatten(dir);
        let planar_dir = if planar_dir.length_squared() > 1e-4 {
            planar_dir.normalize()
        } else {
            Vec3::ZERO
        };

        self.planar_velocity += planar_dir * h;
        if !self.tuning.respect_horizontal_only {
            v += dir.y.max(0.0) * h;
        }
        self.vertical_velocity += v;

        if self.tuning.clamp_planar {
            self.planar_velocity = self
                .planar_velocity
                .clamp_length_max(self.tuning.max_horizontal_speed);
        }
        let cap = self.tuning.max_vertical_speed;
        self.vertical_velocity = self.vertical_velocity.clamp(-cap, cap);
        true
    }

    /// Blast jump: one kick under `mode` (default `Always`), then the previous
    /// mode is restored
    pub fn blast(
        &mut self,
        back_direction: Vec3,
        horizontal_force: f32,
        upward_force: f32,
        mode: Option<RecoilMode>,
    ) -> bool {
        let previous = self.mode;
        self.mode = mode.unwrap_or(RecoilMode::Always);
        let applied = self.kick(back_direction, Some(horizontal_force), Some(upward_force));
        self.mode = previous;
        applied
    }

    /// Fade toward zero. Runs after the tick's movement has been applied.
    pub fn tick(&mut self, dt: f32) {
        if self.planar_velocity != Vec3::ZERO {
            self.planar_velocity = move_towards_vec3(
                self.planar_velocity,
                Vec3::ZERO,
                self.tuning.horizontal_decay_per_sec * dt,
            );
        }

        if self.vertical_velocity != 0.0 {
            // Grounded and not rising: kill it so the body is not pinned
            if self.grounded && self.vertical_velocity <= 0.0 {
                self.vertical_velocity = 0.0;
            } else {
                self.vertical_velocity = move_towards(
                    self.vertical_velocity,
                    0.0,
                    self.tuning.vertical_decay_per_sec * dt,
                );
            }
        }
    }

    /// Drop all accumulated recoil (respawn)
    pub fn reset(&mut self) {
        self.planar_velocity = Vec3::ZERO;
        self.vertical_velocity = 0.0;
    }
}

impl Default for RecoilIntegrator {
    fn default() -> Self {
        Self::new(RecoilTuning::default())
    }
}
