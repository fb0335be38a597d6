use std::cell::Cell;
use std::time::Instant;

/// Abstraction over time sources.
/// Implementations: SystemClock (production), ManualClock (testing).
pub trait TimeProvider {
    /// Monotonic timestamp in seconds from an arbitrary epoch.
    fn now(&self) -> f32;
}

/// System clock backed by std::time::Instant.
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for SystemClock {
    fn now(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

/// Manually-advanced clock for deterministic tests.
pub struct ManualClock {
    current: Cell<f32>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self { current: Cell::new(0.0) }
    }

    pub fn set(&self, seconds: f32) {
        self.current.set(seconds);
    }

    pub fn advance(&self, delta: f32) {
        self.current.set(self.current.get() + delta);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for ManualClock {
    fn now(&self) -> f32 {
        self.current.get()
    }
}

/// Per-screen time accumulator. The first sample has no prior timestamp to
/// diff against, so it contributes a zero delta; game time then grows by the
/// wall-clock delta of each subsequent sample.
#[derive(Debug, Default)]
pub struct GameClock {
    previous_sample: Option<f32>,
    game_time: f32,
}

impl GameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a clock sample and returns the frame delta.
    pub fn sample(&mut self, now: f32) -> f32 {
        let delta = match self.previous_sample {
            Some(previous) => now - previous,
            None => 0.0,
        };
        self.previous_sample = Some(now);
        self.game_time += delta;
        delta
    }

    pub fn game_time(&self) -> f32 {
        self.game_time
    }
}
