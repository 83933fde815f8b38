//! Sources of "now".
//!
//! The engine never reads the wall clock. Callers read a [`Clock`] once per
//! evaluation and thread the resulting instant through every call.

use chrono::Utc;

pub trait Clock {
    /// Current instant in Unix seconds.
    fn now(&self) -> u64;
}

/// Wall clock backed by [`chrono::Utc`]. Instants before the epoch read as `0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> u64 {
        u64::try_from(Utc::now().timestamp()).unwrap_or(0)
    }
}

/// A clock frozen at one instant, for tests and replays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now(&self) -> u64 {
        self.0
    }
}
