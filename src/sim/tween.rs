//! Time-based interpolation for enemy radius
//!
//! The updater samples the tween every tick, so no separate animation
//! clock is needed.

/// Smooth transition of a radius from `from` to `to`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusTween {
    pub from: f64,
    pub to: f64,
    /// Simulation time the tween started (ms)
    pub start_ms: f64,
    pub duration_ms: f64,
}

impl RadiusTween {
    pub fn new(from: f64, to: f64, start_ms: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
        }
    }

    /// Normalized progress in [0, 1]
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Value at `now_ms`; never leaves the [from, to] interval
    pub fn sample(&self, now_ms: f64) -> f64 {
        let t = self.progress(now_ms);
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * ease_out_quad(t)
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}

/// Quadratic ease-out: fast start, gentle landing
#[inline]
pub fn ease_out_quad(t: f64) -> f64 {
    1.0 - (1.0 - t) * (1.0 - t)
}
