//! Resource Generations
//!
//! Every build of the intermediate resource set is tagged with a
//! [`Generation`]. Anything that changes the shape of that set (mode switch,
//! display resize, sampling-rate change) bumps the tracker; resources whose
//! tag no longer matches are stale and must never be bound again.

/// Tag identifying one build of the resource set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    /// Raw counter value, for logging.
    #[inline]
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Generation tracker - the single source of truth for "which resources are current"
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerationTracker {
    current: u64,
}

impl GenerationTracker {
    #[must_use]
    pub fn new() -> Self {
        Self { current: 0 }
    }

    /// Invalidates everything built so far and returns the new generation.
    pub fn invalidate(&mut self) -> Generation {
        self.current = self.current.wrapping_add(1);
        Generation(self.current)
    }

    /// Gets the current generation
    #[inline]
    #[must_use]
    pub fn current(&self) -> Generation {
        Generation(self.current)
    }

    /// Returns `true` if `tag` was issued by the latest invalidation.
    #[inline]
    #[must_use]
    pub fn is_current(&self, tag: Generation) -> bool {
        tag.0 == self.current
    }
}
