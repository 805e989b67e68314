//! Time related utils.

use std::fmt::Debug;

use chrono::Utc;

/// DateTime is the alias for `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Create a new DateTime with the current time.
pub fn now() -> DateTime {
    Utc::now()
}

/// Clock supplies the current Unix time in whole seconds.
///
/// Signers read the time through the [`Context`](crate::Context) so tests can
/// pin it with [`FixedClock`].
pub trait Clock: Debug + Send + Sync + 'static {
    /// Seconds elapsed since `1970-01-01T00:00:00Z`, without fractional part.
    fn now_seconds(&self) -> i64;
}

/// SystemClock reads the wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_seconds(&self) -> i64 {
        now().timestamp()
    }
}

/// FixedClock always returns the same instant.
///
/// # Note
///
/// Requests should always be signed with the current time. Use this for
/// tests, or to replay a request at the timestamp it carries.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_seconds(&self) -> i64 {
        self.0
    }
}
