// Character system
//
// This module contains everything related to first-person characters:
// - Character data structure and management
// - Tuning and its RON loading
// - Locomotion, recoil and vitals (health + status effects)
// - Camera rig state read by the renderer

pub mod camera;
pub mod character;
pub mod config;
pub mod events;
pub mod health;
pub mod intent;
pub mod locomotion;
pub mod recoil;
pub mod state;
pub mod stats;
pub mod status;
pub mod vitals;

#[cfg(test)]
pub(crate) mod test_body;

// Re-export commonly used types
pub use camera::CameraRig;
pub use character::{
    Character, CharacterBuilder, CharacterCommand, CharacterId, CharacterManager, SetupError,
};
pub use config::ConfigError;
pub use events::{Observers, SubscriptionId, VitalsEvent};
pub use health::Health;
pub use intent::Intent;
pub use locomotion::{ExternalMotion, LocomotionController, LocomotionReport};
pub use recoil::{RecoilIntegrator, RecoilMode};
pub use state::{BouncePhase, GroundContact, JumpPhase, LandingBounce, LocomotionState, Stance};
pub use stats::{CameraTuning, CharacterTuning, LocomotionTuning, RecoilTuning, VitalsTuning};
pub use status::{ModifierCache, StatusEffect, StatusEffectEngine};
pub use vitals::Vitals;
