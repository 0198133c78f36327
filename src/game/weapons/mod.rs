// Weapons

pub mod hitscan;

pub use hitscan::{HitscanWeapon, ShotHit, ShotTrace, WeaponTuning, BASE_WEAPON};
