/// Per-snake movement timer.
///
/// Elapsed time accumulates until it reaches the interval; then exactly one
/// step is due and the accumulator resets to zero. The surplus above the
/// interval is dropped rather than carried into the next step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveTimer {
    interval_ms: f64,
    accumulated_ms: f64,
}

impl MoveTimer {
    pub fn new(interval_ms: f64) -> Self {
        Self { interval_ms, accumulated_ms: 0.0 }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn accumulated_ms(&self) -> f64 {
        self.accumulated_ms
    }

    /// Adds `delta_ms` and returns true when a step is due
    pub fn advance(&mut self, delta_ms: f64) -> bool {
        self.accumulated_ms += delta_ms.max(0.0);
        if self.accumulated_ms >= self.interval_ms {
            self.accumulated_ms = 0.0;
            true
        } else {
            false
        }
    }

    /// Shortens the interval, never below `floor_ms`
    pub fn speed_up(&mut self, decrement_ms: f64, floor_ms: f64) {
        self.interval_ms = (self.interval_ms - decrement_ms).max(floor_ms);
    }
}

/// Converts absolute window timestamps (seconds) into frame deltas (ms)
#[derive(Debug, Default, Clone, Copy)]
pub struct FrameClock {
    last_secs: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delta_ms(&mut self, now_secs: f64) -> f64 {
        let dt = match self.last_secs {
            Some(last) => ((now_secs - last) * 1000.0).max(0.0),
            None => 0.0,
        };
        self.last_secs = Some(now_secs);
        dt
    }
}
