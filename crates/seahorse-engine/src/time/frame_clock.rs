use std::time::{Duration, Instant};

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous frame tick, in seconds.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Frame clock producing `FrameTime` snapshots.
///
/// Delta time is clamped to avoid pathological values when the application is
/// paused by the debugger, minimized, or stalls. The camera integrates
/// `dt * ratio` per frame, so an unclamped multi-second dt would teleport the
/// view.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame_index: u64,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameClock {
    /// Creates a new clock with default clamps.
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min: Duration::from_micros(100), // 0.0001s
            dt_max: Duration::from_millis(250), // 0.25s
        }
    }

    /// Creates a clock with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            last: Instant::now(),
            frame_index: 0,
            dt_min,
            dt_max,
        }
    }

    /// Resets the clock baseline.
    ///
    /// Useful after surface reconfigure events or when resuming from suspension.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Advances the clock and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let mut dt = now.saturating_duration_since(self.last);

        if dt < self.dt_min {
            dt = self.dt_min;
        } else if dt > self.dt_max {
            dt = self.dt_max;
        }

        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };

        self.frame_index = self.frame_index.wrapping_add(1);

        ft
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

    #[test]
    fn tick_increments_frame_index() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick().frame_index, 0);
        assert_eq!(clock.tick().frame_index, 1);
        assert_eq!(clock.tick().frame_index, 2);
    }

    #[test]
    fn dt_clamped_to_minimum() {
        let mut clock = FrameClock::new();
        // Back-to-back ticks run far faster than the 100µs floor.
        clock.tick();
        let ft = clock.tick();
        assert!(ft.dt >= 0.0001);
    }

    #[test]
    fn dt_clamped_to_maximum() {
        let mut clock = FrameClock::with_clamps(
            Duration::from_micros(100),
            Duration::from_millis(5),
        );
        std::thread::sleep(Duration::from_millis(20));
        let ft = clock.tick();
        assert!(ft.dt <= 0.005 + f32::EPSILON);
    }
}
