// Loading and validating character tuning from RON files

use std::fs;
use std::path::Path;

use super::stats::CharacterTuning;

/// Tuning loading/validation errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("Invalid tuning: {field} {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

fn invalid(field: &'static str, reason: &'static str) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

impl CharacterTuning {
    /// Parse tuning from RON text. Missing fields keep their defaults.
    pub fn from_ron_str(text: &str) -> Result<Self, ConfigError> {
        let tuning: CharacterTuning = ron::from_str(text)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let tuning = Self::from_ron_str(&text)?;
        log::info!("Loaded character tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let loco = &self.locomotion;
        if !(loco.gravity < 0.0) {
            return Err(invalid("locomotion.gravity", "must be negative"));
        }
        if !(loco.move_speed >= 0.0) {
            return Err(invalid("locomotion.move_speed", "must not be negative"));
        }
        if !(loco.jump_height >= 0.0) {
            return Err(invalid("locomotion.jump_height", "must not be negative"));
        }
        if !(loco.crouch_height > 0.0) {
            return Err(invalid("locomotion.crouch_height", "must be positive"));
        }
        if loco.crouch_height > loco.stand_height {
            return Err(invalid(
                "locomotion.crouch_height",
                "must not exceed stand_height",
            ));
        }
        if !(loco.radius > 0.0) || loco.radius * 2.0 > loco.crouch_height {
            return Err(invalid(
                "locomotion.radius",
                "must be positive and fit inside the crouched capsule",
            ));
        }
        if !(loco.crouch_lerp >= 0.0) {
            return Err(invalid("locomotion.crouch_lerp", "must not be negative"));
        }

        let cam = &self.camera;
        if !(cam.max_pitch >= 0.0 && cam.max_pitch <= 90.0) {
            return Err(invalid("camera.max_pitch", "must be within [0, 90] degrees"));
        }
        if !(cam.landing_dip_speed > 0.0) || !(cam.landing_bounce_speed > 0.0) {
            return Err(invalid("camera.landing_speeds", "must be positive"));
        }

        let recoil = &self.recoil;
        if !(recoil.horizontal_decay_per_sec >= 0.0) || !(recoil.vertical_decay_per_sec >= 0.0) {
            return Err(invalid("recoil.decay", "must not be negative"));
        }
        if !(recoil.max_horizontal_speed >= 0.0) || !(recoil.max_vertical_speed >= 0.0) {
            return Err(invalid("recoil.max_speed", "must not be negative"));
        }

        if !(self.vitals.max_health > 0.0) {
            return Err(invalid("vitals.max_health", "must be positive"));
        }

        Ok(())
    }
}
