//! Time-validity windows.
//!
//! A [`Timebounds`] is only valid when it came out of one of its three
//! constructors. `Timebounds::default()` exists so the type can sit in
//! structs, but it fails validation: a zeroed window silently means "valid
//! forever", which is not something a payment should ever be by accident.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::error::{Result, TransactionError};
use crate::xdr::TimeBounds;

/// An explicit `[min_time, max_time]` window in unix seconds.
///
/// `max_time == 0` means "no upper bound".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "TimeWindow")]
pub struct Timebounds {
    min_time: i64,
    max_time: i64,
    #[serde(skip_serializing)]
    explicitly_constructed: bool,
}

/// Deserialization shape. Routing through [`Timebounds::new`] keeps
/// deserialized windows in the same state as constructed ones.
#[derive(Deserialize)]
struct TimeWindow {
    min_time: i64,
    max_time: i64,
}

impl From<TimeWindow> for Timebounds {
    fn from(window: TimeWindow) -> Self {
        Self::new(window.min_time, window.max_time)
    }
}

impl Timebounds {
    /// A fixed window.
    pub fn new(min_time: i64, max_time: i64) -> Self {
        Self {
            min_time,
            max_time,
            explicitly_constructed: true,
        }
    }

    /// Valid from `min_time` until `timeout_secs` from now.
    ///
    /// The wall clock is read once, here, not at build time.
    pub fn with_timeout(min_time: i64, timeout_secs: i64) -> Self {
        let now = Utc::now().timestamp();
        Self::new(min_time, now.saturating_add(timeout_secs))
    }

    /// Valid from `min_time` with no upper bound.
    pub fn without_timeout(min_time: i64) -> Self {
        Self::new(min_time, 0)
    }

    pub fn min_time(&self) -> i64 {
        self.min_time
    }

    pub fn max_time(&self) -> i64 {
        self.max_time
    }

    pub fn validate(&self) -> Result<()> {
        if !self.explicitly_constructed {
            return Err(TransactionError::Config(
                "timebounds must be constructed using Timebounds::new, \
                 Timebounds::with_timeout or Timebounds::without_timeout"
                    .to_string(),
            ));
        }
        if self.min_time < 0 {
            return Err(TransactionError::validation(
                "invalid timebound: minTime cannot be negative",
            ));
        }
        if self.max_time < 0 {
            return Err(TransactionError::validation(
                "invalid timebound: maxTime cannot be negative",
            ));
        }
        if self.max_time != 0 && self.max_time < self.min_time {
            return Err(TransactionError::validation(
                "invalid timebound: maxTime < minTime",
            ));
        }
        Ok(())
    }

    /// Validates and converts to the wire structure.
    pub fn to_wire(&self) -> Result<TimeBounds> {
        self.validate()?;
        // Both bounds are non-negative after validation.
        Ok(TimeBounds {
            min_time: self.min_time as u64,
            max_time: self.max_time as u64,
        })
    }
}
