//! Timed transitions with cubic easing.

use std::time::{Duration, Instant};

/// A transition running from `start` for `duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    start: Instant,
    duration: Duration,
}

impl Transition {
    /// Start a transition at `start`.
    pub fn new(start: Instant, duration: Duration) -> Self {
        Self { start, duration }
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Eased progress in `[0, 1]`.
    pub fn eased(&self, now: Instant) -> f64 {
        ease_cubic_in_out(self.progress(now))
    }

    /// Whether the transition has reached its end.
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Symmetric cubic easing: slow start, fast middle, slow end.
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// Linear interpolation between two points.
pub fn lerp_point(from: (f64, f64), to: (f64, f64), t: f64) -> (f64, f64) {
    (from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_and_symmetry() {
        assert_eq!(ease_cubic_in_out(0.0), 0.0);
        assert_eq!(ease_cubic_in_out(1.0), 1.0);
        assert_eq!(ease_cubic_in_out(0.5), 0.5);
        for i in 1..10 {
            let t = i as f64 / 10.0;
            let sum = ease_cubic_in_out(t) + ease_cubic_in_out(1.0 - t);
            assert!((sum - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn progress_is_clamped() {
        let start = Instant::now();
        let tr = Transition::new(start, Duration::from_millis(2000));
        assert_eq!(tr.progress(start), 0.0);
        assert!((tr.progress(start + Duration::from_millis(500)) - 0.25).abs() < 1e-9);
        assert_eq!(tr.progress(start + Duration::from_secs(10)), 1.0);
        assert!(tr.is_finished(start + Duration::from_millis(2000)));
        assert!(!tr.is_finished(start + Duration::from_millis(1999)));
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let start = Instant::now();
        let tr = Transition::new(start, Duration::ZERO);
        assert!(tr.is_finished(start));
        assert_eq!(tr.eased(start), 1.0);
    }

    #[test]
    fn lerp_point_midway() {
        assert_eq!(lerp_point((0.0, 1.0), (1.0, 0.0), 0.5), (0.5, 0.5));
    }
}
