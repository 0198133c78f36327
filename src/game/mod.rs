// Game modules: characters, weapons, arena triggers

pub mod arena;
pub mod characters;
pub mod weapons;
