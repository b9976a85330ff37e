//! Validated rounding interval.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("rounding interval must be positive, got {ticks} ticks")]
    NonPositive { ticks: i64 },
}

/// A rounding interval with a strictly positive tick count.
///
/// Zero and negative intervals are unrepresentable, so rounding never has to
/// deal with a division by zero or a flipped sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Span", into = "Span")]
pub struct Grid(Span);

impl Grid {
    pub fn new(interval: Span) -> Result<Self, GridError> {
        if interval.ticks() <= 0 {
            return Err(GridError::NonPositive {
                ticks: interval.ticks(),
            });
        }
        Ok(Self(interval))
    }

    #[must_use]
    pub const fn span(self) -> Span {
        self.0
    }

    /// Always `> 0`.
    #[must_use]
    pub const fn ticks(self) -> i64 {
        self.0.ticks()
    }
}

impl TryFrom<Span> for Grid {
    type Error = GridError;

    fn try_from(value: Span) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Grid> for Span {
    fn from(value: Grid) -> Self {
        value.0
    }
}
