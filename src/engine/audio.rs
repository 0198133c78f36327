// Audio seam
//
// The simulation asks for sounds; a playback backend (or a test) decides what
// to do with them.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::Rng;

/// Name of a sound asset
pub type SoundClip = String;

/// Anything that can play a positioned one-shot sound
pub trait SoundPlayer {
    fn play_sound(&mut self, clip: &str, position: Vec3, volume: f32);
}

/// Play one clip picked at random from `clips`. Returns the clip played.
pub fn play_random<'a, P: SoundPlayer + ?Sized>(
    player: &mut P,
    rng: &mut StdRng,
    clips: &'a [SoundClip],
    position: Vec3,
    volume: f32,
) -> Option<&'a str> {
    if clips.is_empty() {
        return None;
    }
    let clip = &clips[rng.random_range(0..clips.len())];
    player.play_sound(clip, position, volume);
    Some(clip)
}

/// Player that only logs requests (headless runs)
#[derive(Debug, Default)]
pub struct LogSoundPlayer {
    played: u64,
}

impl LogSoundPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sounds requested so far
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl SoundPlayer for LogSoundPlayer {
    fn play_sound(&mut self, clip: &str, position: Vec3, volume: f32) {
        self.played += 1;
        log::debug!(
            "Sound '{}' at ({:.1}, {:.1}, {:.1}) vol {:.2}",
            clip,
            position.x,
            position.y,
            position.z,
            volume
        );
    }
}

/// Discards every request
#[derive(Debug, Default, Clone, Copy)]
pub struct Silence;

impl SoundPlayer for Silence {
    fn play_sound(&mut self, _clip: &str, _position: Vec3, _volume: f32) {}
}

/// Keeps every request (tests)
#[derive(Debug, Default, Clone)]
pub struct RecordingSoundPlayer {
    pub requests: Vec<(String, Vec3, f32)>,
}

impl SoundPlayer for RecordingSoundPlayer {
    fn play_sound(&mut self, clip: &str, position: Vec3, volume: f32) {
        self.requests.push((clip.to_string(), position, volume));
    }
}
