//! Animation clock.
//!
//! Wall-clock time only advances while animations are enabled, so pausing
//! and resuming continues where it left off. Each scene animation is
//! sampled with a one-second phase offset from the previous one so that
//! identical clips do not move in lockstep.

/// Pausable animation time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationClock {
    enabled: bool,
    wallclock: f32,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(true)
    }
}

impl AnimationClock {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            wallclock: 0.0,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    #[must_use]
    pub fn time(&self) -> f32 {
        self.wallclock
    }

    /// Flips the enabled flag and returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// Advances the clock by `dt` seconds if enabled.
    pub fn tick(&mut self, dt: f32) {
        if self.enabled {
            self.wallclock += dt;
        }
    }

    /// Local time of every animation, given their durations in seconds.
    ///
    /// Animation `i` is offset by `i` seconds and wraps at its duration.
    /// Non-positive durations sample at `0.0`.
    #[must_use]
    pub fn sample_times(&self, durations: &[f32]) -> Vec<f32> {
        durations
            .iter()
            .enumerate()
            .map(|(i, &duration)| {
                if duration <= 0.0 {
                    return 0.0;
                }
                let cycles = (self.wallclock + i as f32) / duration;
                cycles.fract() * duration
            })
            .collect()
    }
}
