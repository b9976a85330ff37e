//! Calendar-free time units understood by the Atin format.

use std::fmt;

/// A unit letter of the Atin format.
///
/// Weeks and days are fixed lengths (7 * 24h and 24h); there is no calendar
/// or DST awareness anywhere in Atin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Unit {
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

impl Unit {
    /// Canonical serialization order, largest unit first.
    pub const DESCENDING: [Unit; 5] = [
        Unit::Week,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
    ];

    /// Length of one unit in whole seconds.
    #[must_use]
    pub const fn seconds(self) -> i64 {
        match self {
            Unit::Week => 604_800,
            Unit::Day => 86_400,
            Unit::Hour => 3_600,
            Unit::Minute => 60,
            Unit::Second => 1,
        }
    }

    /// Uppercase letter used when formatting.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Unit::Week => 'W',
            Unit::Day => 'D',
            Unit::Hour => 'H',
            Unit::Minute => 'M',
            Unit::Second => 'S',
        }
    }

    /// Case-insensitive lookup of a unit letter.
    #[must_use]
    pub const fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'W' => Some(Unit::Week),
            'D' => Some(Unit::Day),
            'H' => Some(Unit::Hour),
            'M' => Some(Unit::Minute),
            'S' => Some(Unit::Second),
            _ => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
