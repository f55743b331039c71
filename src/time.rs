//=========================================================================
// Frame Clock
//=========================================================================
//
// Produces the per-frame `dt` handed to `Application::run_frame`.
//
// The first tick reports 0 (there is no previous frame to measure from).
// Later ticks report the wall time since the previous tick, capped so a
// debugger pause or a minimized window does not produce a huge step.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::time::{Duration, Instant};

//=== FrameTime ===========================================================

/// Frame timing snapshot.
#[derive(Debug, Clone, Copy)]
pub struct FrameTime {
    /// Seconds since the previous tick (0 on the first one).
    pub dt: f64,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Zero-based frame counter.
    pub frame_index: u64,
}

//=== FrameClock ==========================================================

#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<Instant>,
    frame_index: u64,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a clock capping `dt` at 0.25s.
    pub fn new() -> Self {
        Self::with_max_dt(Duration::from_millis(250))
    }

    /// Creates a clock with a custom `dt` cap.
    pub fn with_max_dt(dt_max: Duration) -> Self {
        Self {
            last: None,
            frame_index: 0,
            dt_max,
        }
    }

    /// Forgets the previous tick; the next one reports 0 again.
    ///
    /// Used when the window comes back from suspension.
    pub fn reset(&mut self) {
        self.last = None;
    }

    /// Advances the clock to now.
    pub fn tick(&mut self) -> FrameTime {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> FrameTime {
        let dt = match self.last {
            Some(last) => now.saturating_duration_since(last).min(self.dt_max),
            None => Duration::ZERO,
        };
        self.last = Some(now);

        let frame = FrameTime {
            dt: dt.as_secs_f64(),
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        frame
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_zero() {
        let mut clock = FrameClock::new();
        let frame = clock.tick();
        assert_eq!(frame.dt, 0.0);
        assert_eq!(frame.frame_index, 0);
    }

    #[test]
    fn dt_measures_time_between_ticks() {
        let start = Instant::now();
        let mut clock = FrameClock::new();

        clock.tick_at(start);
        let frame = clock.tick_at(start + Duration::from_millis(16));

        assert_eq!(frame.dt, 0.016);
        assert_eq!(frame.frame_index, 1);
    }

    #[test]
    fn dt_is_capped() {
        let start = Instant::now();
        let mut clock = FrameClock::new();

        clock.tick_at(start);
        let frame = clock.tick_at(start + Duration::from_secs(3));

        assert_eq!(frame.dt, 0.25);
    }

    #[test]
    fn dt_never_goes_negative() {
        let start = Instant::now();
        let mut clock = FrameClock::new();

        clock.tick_at(start + Duration::from_millis(10));
        let frame = clock.tick_at(start);

        assert_eq!(frame.dt, 0.0);
    }

    #[test]
    fn reset_restarts_from_zero() {
        let start = Instant::now();
        let mut clock = FrameClock::new();
        clock.tick_at(start);
        clock.reset();

        let frame = clock.tick_at(start + Duration::from_millis(100));
        assert_eq!(frame.dt, 0.0);
        assert_eq!(frame.frame_index, 1);
    }
}
