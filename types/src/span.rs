//! Exact tick-resolution durations.
//!
//! A [`Span`] counts 100-nanosecond ticks in an `i64`. All arithmetic is
//! integer arithmetic; nothing here goes through floating point.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Unit;

/// Number of ticks in one second (one tick is 100 ns).
pub const TICKS_PER_SECOND: i64 = 10_000_000;

const NANOS_PER_TICK: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("duration does not fit in a tick span")]
pub struct SpanRangeError;

/// A signed, exact duration measured in 100-nanosecond ticks.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Span(i64);

impl Span {
    pub const ZERO: Span = Span(0);
    pub const MAX: Span = Span(i64::MAX);
    pub const MIN: Span = Span(i64::MIN);

    #[must_use]
    pub const fn from_ticks(ticks: i64) -> Self {
        Self(ticks)
    }

    /// `None` if `seconds` cannot be expressed in ticks.
    #[must_use]
    pub const fn from_seconds(seconds: i64) -> Option<Self> {
        match seconds.checked_mul(TICKS_PER_SECOND) {
            Some(ticks) => Some(Self(ticks)),
            None => None,
        }
    }

    #[must_use]
    pub const fn from_minutes(minutes: i64) -> Option<Self> {
        Self::from_unit(Unit::Minute, minutes)
    }

    #[must_use]
    pub const fn from_hours(hours: i64) -> Option<Self> {
        Self::from_unit(Unit::Hour, hours)
    }

    #[must_use]
    pub const fn from_days(days: i64) -> Option<Self> {
        Self::from_unit(Unit::Day, days)
    }

    #[must_use]
    pub const fn from_weeks(weeks: i64) -> Option<Self> {
        Self::from_unit(Unit::Week, weeks)
    }

    /// `quantity` whole units of `unit`.
    #[must_use]
    pub const fn from_unit(unit: Unit, quantity: i64) -> Option<Self> {
        match quantity.checked_mul(unit.seconds()) {
            Some(seconds) => Self::from_seconds(seconds),
            None => None,
        }
    }

    /// Days, hours, minutes and seconds summed into one span.
    #[must_use]
    pub fn from_dhms(days: i64, hours: i64, minutes: i64, seconds: i64) -> Option<Self> {
        Self::from_days(days)?
            .checked_add(Self::from_hours(hours)?)?
            .checked_add(Self::from_minutes(minutes)?)?
            .checked_add(Self::from_seconds(seconds)?)
    }

    #[must_use]
    pub const fn ticks(self) -> i64 {
        self.0
    }

    /// Whole seconds, truncated toward zero.
    #[must_use]
    pub const fn whole_seconds(self) -> i64 {
        self.0 / TICKS_PER_SECOND
    }

    /// Ticks left over after [`Span::whole_seconds`]; carries the sign of the span.
    #[must_use]
    pub const fn subsec_ticks(self) -> i64 {
        self.0 % TICKS_PER_SECOND
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    #[must_use]
    pub const fn checked_add(self, rhs: Span) -> Option<Span> {
        match self.0.checked_add(rhs.0) {
            Some(ticks) => Some(Self(ticks)),
            None => None,
        }
    }

    #[must_use]
    pub const fn checked_sub(self, rhs: Span) -> Option<Span> {
        match self.0.checked_sub(rhs.0) {
            Some(ticks) => Some(Self(ticks)),
            None => None,
        }
    }
}

/// Sub-tick nanoseconds are truncated.
impl TryFrom<Duration> for Span {
    type Error = SpanRangeError;

    fn try_from(value: Duration) -> Result<Self, Self::Error> {
        let secs = i64::try_from(value.as_secs()).map_err(|_| SpanRangeError)?;
        let whole = Self::from_seconds(secs).ok_or(SpanRangeError)?;
        let frac = Self(i64::from(value.subsec_nanos() / NANOS_PER_TICK));
        whole.checked_add(frac).ok_or(SpanRangeError)
    }
}

/// Negative spans have no `Duration` counterpart.
impl TryFrom<Span> for Duration {
    type Error = SpanRangeError;

    fn try_from(value: Span) -> Result<Self, Self::Error> {
        if value.is_negative() {
            return Err(SpanRangeError);
        }
        let secs = value.whole_seconds() as u64;
        let nanos = value.subsec_ticks() as u32 * NANOS_PER_TICK;
        Ok(Duration::new(secs, nanos))
    }
}
