//! Time source for history timestamps.
//!
//! Records are stamped through a [`Clock`] rather than by calling
//! `Utc::now()` directly, so tests can pin every timestamp with a
//! [`FixedClock`].
//!
//! ```rust
//! use calcshell::clock::{Clock, FixedClock};
//! use chrono::{TimeZone, Utc};
//!
//! let instant = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
//! let clock = FixedClock::new(instant);
//! assert_eq!(clock.now(), instant);
//! ```

use chrono::{DateTime, Utc};

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    instant: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}
