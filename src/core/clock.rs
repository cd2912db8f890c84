//! Game clock timestamps.
//!
//! The engine never reads wall-clock time. The caller passes the current
//! time into every tick, and every delay is an elapsed-time comparison
//! against a recorded `Timestamp`.

use serde::{Deserialize, Serialize};

/// Milliseconds on the caller's monotonic game clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// The start of the clock.
    pub const ZERO: Timestamp = Timestamp(0);

    /// Create a timestamp from milliseconds.
    #[must_use]
    pub const fn from_millis(ms: u64) -> Self {
        Self(ms)
    }

    /// Milliseconds elapsed since `earlier` (zero if `earlier` is later).
    #[must_use]
    pub const fn since(self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// This timestamp advanced by `ms` milliseconds.
    #[must_use]
    pub const fn after(self, ms: u64) -> Self {
        Self(self.0.saturating_add(ms))
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_since() {
        let t0 = Timestamp::from_millis(1_000);
        let t1 = t0.after(250);
        assert_eq!(t1.since(t0), 250);
        assert_eq!(t0.since(t1), 0);
    }

    #[test]
    fn test_ordering_and_display() {
        assert!(Timestamp::ZERO < Timestamp::from_millis(1));
        assert_eq!(Timestamp::from_millis(16).to_string(), "16ms");
    }
}
