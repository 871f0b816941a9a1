#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

#[cfg(target_arch = "wasm32")]
use web_time::Instant;

/// Timing snapshot produced by one [`Clock::tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Seconds since the clock started.
    pub elapsed: f32,
    /// Seconds since the previous tick. Never negative.
    pub delta: f32,
}

/// Monotonic frame clock.
///
/// Holds the elapsed time and the elapsed time of the previous frame. The
/// frame loop is its only writer.
#[derive(Debug, Clone)]
pub struct Clock {
    start_time: Instant,
    previous_elapsed: f32,
    frame_count: u64,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock {
    /// Creates a clock starting from now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            previous_elapsed: 0.0,
            frame_count: 0,
        }
    }

    /// Seconds elapsed since the clock started, read from the system clock.
    #[must_use]
    pub fn elapsed_seconds(&self) -> f32 {
        self.start_time.elapsed().as_secs_f32()
    }

    /// Reads the system clock and advances to it.
    pub fn tick(&mut self) -> FrameTime {
        let elapsed = self.elapsed_seconds();
        self.advance_to(elapsed)
    }

    /// Advances the clock to an explicit elapsed time.
    ///
    /// A reading earlier than the previous frame is treated as no time
    /// passing, so `previous_elapsed` never decreases.
    pub fn advance_to(&mut self, elapsed: f32) -> FrameTime {
        let elapsed = elapsed.max(self.previous_elapsed);
        let delta = elapsed - self.previous_elapsed;
        self.previous_elapsed = elapsed;
        self.frame_count += 1;
        FrameTime { elapsed, delta }
    }

    /// Elapsed time recorded by the most recent tick.
    #[inline]
    #[must_use]
    pub fn previous_elapsed(&self) -> f32 {
        self.previous_elapsed
    }

    /// Number of ticks so far.
    #[inline]
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backwards_reading_yields_zero_delta() {
        let mut clock = Clock::new();
        clock.advance_to(1.5);
        let frame = clock.advance_to(1.0);
        assert_eq!(frame.delta, 0.0);
        assert_eq!(clock.previous_elapsed(), 1.5);
    }

    #[test]
    fn system_ticks_are_non_negative() {
        let mut clock = Clock::new();
        let first = clock.tick();
        let second = clock.tick();
        assert!(first.delta >= 0.0);
        assert!(second.delta >= 0.0);
        assert!(second.elapsed >= first.elapsed);
        assert_eq!(clock.frame_count(), 2);
    }
}
