/// Frame timing for the simulation
///
/// Every host frame produces exactly one simulation tick. The tick delta is
/// the frame time clamped to `max_delta`, so a stall (debugger, window drag)
/// never turns into one huge step.
use std::time::{Duration, Instant};

/// Longest delta a single tick may use (seconds)
pub const DEFAULT_MAX_DELTA: f32 = 0.1;

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Frame clock state
pub struct FrameClock {
    /// Time of last frame
    last_frame_time: Instant,

    /// Upper bound for one tick delta
    max_delta: f32,

    /// Whether the simulation is paused
    paused: bool,

    /// Frame timing history for FPS calculation
    frame_times: Vec<Duration>,

    /// Current frame number
    frame_count: u64,

    /// Total ticks handed out (paused frames excluded)
    tick_count: u64,

    /// Simulated seconds (sum of tick deltas)
    sim_time: f64,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_max_delta(DEFAULT_MAX_DELTA)
    }

    pub fn with_max_delta(max_delta: f32) -> Self {
        Self {
            last_frame_time: Instant::now(),
            max_delta: max_delta.max(0.0),
            paused: false,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            tick_count: 0,
            sim_time: 0.0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame measured with the wall clock; returns the tick delta
    pub fn begin_frame(&mut self) -> f32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(frame_time)
    }

    /// Begin a new frame of a known length (fixed-rate or replayed runs);
    /// returns the tick delta, 0 while paused
    pub fn advance(&mut self, frame_time: Duration) -> f32 {
        self.frame_count += 1;

        // Store frame time for FPS calculation
        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        // Update FPS counter every 10 frames
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        if self.paused {
            return 0.0;
        }

        let dt = frame_time.as_secs_f32().min(self.max_delta);
        self.tick_count += 1;
        self.sim_time += dt as f64;
        dt
    }

    pub fn max_delta(&self) -> f32 {
        self.max_delta
    }

    /// Get current FPS
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    /// Simulated time in seconds
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    /// Get total number of frames seen
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total number of ticks handed out
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Check if the simulation is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Simulation paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // The first frame after resuming must not see the paused time
            self.last_frame_time = Instant::now();
            log::info!("Simulation resumed");
        }
    }

    /// Toggle pause state
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Update FPS calculation
    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        // Calculate average frame time
        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        // Convert to FPS
        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const FRAME_60: Duration = Duration::from_micros(16_667);

    #[test]
    fn test_frame_clock_creation() {
        let clock = FrameClock::new();
        assert_eq!(clock.frame_count(), 0);
        assert_eq!(clock.tick_count(), 0);
        assert!(!clock.is_paused());
        assert_eq!(clock.max_delta(), DEFAULT_MAX_DELTA);
    }

    #[test]
    fn test_one_tick_per_frame() {
        let mut clock = FrameClock::new();
        let dt = clock.advance(FRAME_60);
        assert_relative_eq!(dt, 0.016_667, epsilon = 1e-6);
        assert_eq!(clock.tick_count(), 1);
        assert_eq!(clock.frame_count(), 1);
    }

    #[test]
    fn test_long_frame_is_clamped() {
        let mut clock = FrameClock::new();
        let dt = clock.advance(Duration::from_millis(300));
        assert_eq!(dt, DEFAULT_MAX_DELTA);
        assert_relative_eq!(clock.sim_time(), 0.1, epsilon = 1e-6);
    }

    #[test]
    fn test_pause_resume() {
        let mut clock = FrameClock::new();
        clock.pause();
        assert!(clock.is_paused());
        assert_eq!(clock.advance(FRAME_60), 0.0);
        assert_eq!(clock.tick_count(), 0);
        assert_eq!(clock.frame_count(), 1);

        clock.resume();
        assert!(!clock.is_paused());
        assert!(clock.advance(FRAME_60) > 0.0);
    }

    #[test]
    fn test_toggle_pause() {
        let mut clock = FrameClock::new();
        clock.toggle_pause();
        assert!(clock.is_paused());
        clock.toggle_pause();
        assert!(!clock.is_paused());
    }

    #[test]
    fn test_fps_average() {
        let mut clock = FrameClock::new();
        for _ in 0..20 {
            clock.advance(Duration::from_millis(20));
        }
        assert_relative_eq!(clock.fps(), 50.0, epsilon = 1e-3);
    }

    #[test]
    fn test_wall_clock_frame() {
        let mut clock = FrameClock::new();
        let dt = clock.begin_frame();
        assert!(dt >= 0.0 && dt <= DEFAULT_MAX_DELTA);
        assert_eq!(clock.frame_count(), 1);
    }
}
