//! # Clock Service
//!
//! All "now" readings of the todo service go through the [`Clock`] trait, so
//! timestamps can be pinned or driven by tests.
//!
//! ## Implementations
//!
//! - [`SystemClock`] - Live UTC wall clock, used by the binary
//! - [`FixedClock`] - Always returns the same instant, for deterministic fixtures

use time::{Duration, OffsetDateTime, PrimitiveDateTime, macros::datetime};

/// Instant returned by [`FixedClock::default`]
pub const FIXED_TIMESTAMP: PrimitiveDateTime = datetime!(2026-02-20 14:00:00);

/// Source of the current time
///
/// Implementations must return UTC wall-clock time with whole-second precision.
pub trait Clock: Send + Sync {
    fn now(&self) -> PrimitiveDateTime;
}

/// Reads the system clock on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> PrimitiveDateTime {
        let now = OffsetDateTime::now_utc();
        let now = now - Duration::nanoseconds(i64::from(now.nanosecond()));
        PrimitiveDateTime::new(now.date(), now.time())
    }
}

/// Returns the same instant forever.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub PrimitiveDateTime);

impl Default for FixedClock {
    fn default() -> Self {
        Self(FIXED_TIMESTAMP)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> PrimitiveDateTime {
        self.0
    }
}
