// First-person character simulation: locomotion, recoil and status effects
// over a rapier3d kinematic body

pub mod core;
pub mod engine;
pub mod game;
