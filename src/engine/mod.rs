// Engine modules: frame clock, physics, audio seam

pub mod audio;
pub mod clock;
pub mod physics;
