use serde::{Deserialize, Serialize};
use std::fmt;

use crate::HoursError;

const QUARTERS_PER_HOUR: u32 = 4;

/// Logged duration, stored as a whole number of quarter hours.
///
/// A value is never below one quarter (0.25 h). The stepper operations keep
/// that floor by clamping instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Hours(u32);

impl Hours {
    pub const MIN: Hours = Hours(1);

    /// Build from decimal hours, rounding to the nearest quarter.
    pub fn new(hours: f64) -> Result<Self, HoursError> {
        if !hours.is_finite() {
            return Err(HoursError::NotFinite(hours));
        }
        let quarters = (hours * QUARTERS_PER_HOUR as f64).round();
        if quarters < 1.0 {
            return Err(HoursError::TooSmall(hours));
        }
        Ok(Self(quarters as u32))
    }

    /// Build from a quarter count; zero is lifted to the floor.
    pub fn from_quarters(quarters: u32) -> Self {
        Self(quarters.max(1))
    }

    pub fn quarters(&self) -> u32 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64 / QUARTERS_PER_HOUR as f64
    }

    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// Step down one quarter, clamped at 0.25.
    pub fn decrement(&mut self) {
        if self.0 > 1 {
            self.0 -= 1;
        }
    }
}

impl Default for Hours {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.as_f64())
    }
}

impl TryFrom<f64> for Hours {
    type Error = HoursError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Hours> for f64 {
    fn from(hours: Hours) -> Self {
        hours.as_f64()
    }
}

/// Sum a set of durations into decimal hours without float drift.
pub fn total_hours<'a>(hours: impl IntoIterator<Item = &'a Hours>) -> f64 {
    let quarters: u64 = hours.into_iter().map(|h| h.0 as u64).sum();
    quarters as f64 / QUARTERS_PER_HOUR as f64
}
