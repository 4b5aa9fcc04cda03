//! Wall-clock abstraction for testability.
//!
//! Recency scoring is the only input to classification that depends on the
//! current time. Callers read the clock once and pass the instant down, so a
//! whole batch is aged against the same moment.
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use inboxrank_core::time::{Clock, FixedClock};
//!
//! let clock = FixedClock::new(Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap());
//! assert_eq!(clock.now().to_rfc3339(), "2026-01-15T09:00:00+00:00");
//! ```

use chrono::{DateTime, Utc};

/// Abstraction over wall-clock time.
///
/// In production, use [`SystemClock`]. In tests, use [`FixedClock`] to pin
/// the instant emails are aged against.
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the system time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a chosen instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    /// Creates a clock that always reports `instant`.
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}
