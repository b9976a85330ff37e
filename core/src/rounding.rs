//! Snapping spans and timestamps onto a rounding grid.
//!
//! All three modes use floor division on the tick count, so negative values
//! round toward negative infinity and `round_down(x) <= x <= round_up(x)`
//! holds everywhere. Timestamps are rounded on their wall-clock ticks; the
//! UTC offset is carried through untouched.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use atin_types::{Grid, Span};

use crate::interop::{from_wall_clock_ticks, wall_clock_ticks};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundingError {
    #[error("rounded value falls outside the representable range")]
    OutOfRange,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown rounding mode `{0}` (expected down, up or nearest)")]
pub struct UnknownModeError(String);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    /// Greatest multiple not above the value.
    Down,
    /// Least multiple not below the value.
    Up,
    /// Closest multiple; exact halves go up.
    #[default]
    Nearest,
}

impl RoundingMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            RoundingMode::Down => "down",
            RoundingMode::Up => "up",
            RoundingMode::Nearest => "nearest",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoundingMode {
    type Err = UnknownModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "down" | "floor" => Ok(RoundingMode::Down),
            "up" | "ceil" => Ok(RoundingMode::Up),
            "nearest" | "to" => Ok(RoundingMode::Nearest),
            _ => Err(UnknownModeError(s.to_string())),
        }
    }
}

fn round_ticks(value: i128, grid: i128, mode: RoundingMode) -> i128 {
    let shifted = match mode {
        RoundingMode::Down => value,
        RoundingMode::Up => value + grid - 1,
        RoundingMode::Nearest => value + grid / 2,
    };
    shifted.div_euclid(grid) * grid
}

pub fn round(value: Span, grid: Grid, mode: RoundingMode) -> Result<Span, RoundingError> {
    let rounded = round_ticks(
        i128::from(value.ticks()),
        i128::from(grid.ticks()),
        mode,
    );
    let rounded = i64::try_from(rounded).map_err(|_| RoundingError::OutOfRange)?;
    tracing::trace!(
        value = value.ticks(),
        grid = grid.ticks(),
        %mode,
        rounded,
        "rounded span"
    );
    Ok(Span::from_ticks(rounded))
}

pub fn round_down(value: Span, grid: Grid) -> Result<Span, RoundingError> {
    round(value, grid, RoundingMode::Down)
}

pub fn round_up(value: Span, grid: Grid) -> Result<Span, RoundingError> {
    round(value, grid, RoundingMode::Up)
}

pub fn round_to(value: Span, grid: Grid) -> Result<Span, RoundingError> {
    round(value, grid, RoundingMode::Nearest)
}

/// Round a timestamp's wall-clock time, keeping its offset.
///
/// A leap second (`23:59:60.x`) rounds as the last instant of second `:59`.
///
/// A 1-day grid on `2024-01-14T23:40:00+05:00` yields
/// `2024-01-15T00:00:00+05:00` (nearest), i.e. local midnight, not UTC midnight.
pub fn round_timestamp(
    ts: DateTime<FixedOffset>,
    grid: Grid,
    mode: RoundingMode,
) -> Result<DateTime<FixedOffset>, RoundingError> {
    let ticks = wall_clock_ticks(&ts);
    let rounded = round_ticks(ticks, i128::from(grid.ticks()), mode);
    // Ticks rather than the timestamps: local times past chrono's naive range
    // cannot be displayed.
    tracing::trace!(%ticks, grid = grid.ticks(), %mode, %rounded, "rounded timestamp");
    let out = from_wall_clock_ticks(rounded, *ts.offset()).ok_or(RoundingError::OutOfRange)?;
    Ok(out)
}

pub fn round_timestamp_down(
    ts: DateTime<FixedOffset>,
    grid: Grid,
) -> Result<DateTime<FixedOffset>, RoundingError> {
    round_timestamp(ts, grid, RoundingMode::Down)
}

pub fn round_timestamp_up(
    ts: DateTime<FixedOffset>,
    grid: Grid,
) -> Result<DateTime<FixedOffset>, RoundingError> {
    round_timestamp(ts, grid, RoundingMode::Up)
}

pub fn round_timestamp_to(
    ts: DateTime<FixedOffset>,
    grid: Grid,
) -> Result<DateTime<FixedOffset>, RoundingError> {
    round_timestamp(ts, grid, RoundingMode::Nearest)
}
