//! The Atin text format.
//!
//! A span is written as unit letters each followed by a decimal quantity,
//! largest unit first: `W1D2H3M4S5`. Parsing is lenient about order, case,
//! repeated units and stray characters between tokens, but the input must end
//! in a digit. Formatting always produces the canonical form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use atin_types::{Span, Unit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("input is missing")]
    MissingInput,
    #[error("the last character of the input must be a digit")]
    TrailingNonDigit,
    #[error("input format is invalid: no unit tokens found")]
    NoTokens,
    #[error("duration is too large to represent")]
    Overflow,
}

impl ParseError {
    /// True for everything except [`ParseError::MissingInput`].
    #[must_use]
    pub const fn is_invalid_format(self) -> bool {
        !matches!(self, ParseError::MissingInput)
    }
}

/// One `<unit><digits>` occurrence found in an input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub unit: Unit,
    /// The digit run, never empty.
    pub digits: &'a str,
    /// Byte offset of the unit letter.
    pub offset: usize,
}

impl Token<'_> {
    /// `None` if the digit run does not fit an `i64`.
    #[must_use]
    pub fn quantity(&self) -> Option<i64> {
        self.digits.parse().ok()
    }
}

/// Iterator over every token in a string, skipping anything that is not a
/// unit letter followed by at least one digit.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() {
            let offset = self.pos;
            self.pos += 1;

            // Non-ASCII bytes never map to a unit letter.
            let Some(unit) = Unit::from_letter(char::from(bytes[offset])) else {
                continue;
            };

            let start = self.pos;
            let end = bytes[start..]
                .iter()
                .position(|b| !b.is_ascii_digit())
                .map_or(bytes.len(), |n| start + n);
            if end == start {
                continue;
            }

            self.pos = end;
            return Some(Token {
                unit,
                digits: &self.input[start..end],
                offset,
            });
        }
        None
    }
}

#[must_use]
pub fn tokens(input: &str) -> Tokens<'_> {
    Tokens { input, pos: 0 }
}

/// Parse an Atin string into a span of whole seconds.
///
/// - `None` fails with [`ParseError::MissingInput`]; `""` is zero.
/// - Repeated units add up: `M1M2` is three minutes.
/// - Text around tokens is ignored as long as the input ends in a digit.
pub fn parse<'a>(input: impl Into<Option<&'a str>>) -> Result<Span, ParseError> {
    let input = input.into();
    parse_str(input).inspect_err(|err| {
        tracing::debug!(input = ?input, %err, "rejected atin input");
    })
}

/// Like [`parse`], but reports any failure as `None`, including a missing input.
#[must_use]
pub fn try_parse<'a>(input: impl Into<Option<&'a str>>) -> Option<Span> {
    parse_str(input.into()).ok()
}

fn parse_str(input: Option<&str>) -> Result<Span, ParseError> {
    let input = input.ok_or(ParseError::MissingInput)?;
    if input.is_empty() {
        return Ok(Span::ZERO);
    }
    if !input.ends_with(|c: char| c.is_ascii_digit()) {
        return Err(ParseError::TrailingNonDigit);
    }

    let mut matched = false;
    let mut total_seconds: i64 = 0;
    for token in tokens(input) {
        matched = true;
        let seconds = token
            .quantity()
            .and_then(|quantity| quantity.checked_mul(token.unit.seconds()))
            .ok_or(ParseError::Overflow)?;
        total_seconds = total_seconds
            .checked_add(seconds)
            .ok_or(ParseError::Overflow)?;
    }

    if !matched {
        return Err(ParseError::NoTokens);
    }
    Span::from_seconds(total_seconds).ok_or(ParseError::Overflow)
}

/// Format a span in canonical Atin form.
///
/// Sub-second ticks are truncated. Zero, and anything negative, becomes `S0`.
#[must_use]
pub fn format(span: Span) -> String {
    Atin(span).to_string()
}

/// A [`Span`] that displays, parses and serializes as Atin text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Atin(pub Span);

impl Atin {
    #[must_use]
    pub const fn span(self) -> Span {
        self.0
    }
}

impl fmt::Display for Atin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut remaining = self.0.whole_seconds().max(0);
        let mut wrote_any = false;

        for unit in Unit::DESCENDING {
            let count = remaining / unit.seconds();
            remaining %= unit.seconds();
            if count > 0 {
                write!(f, "{}{count}", unit.letter())?;
                wrote_any = true;
            }
        }

        if !wrote_any {
            f.write_str("S0")?;
        }
        Ok(())
    }
}

impl FromStr for Atin {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(Self)
    }
}

impl TryFrom<String> for Atin {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Atin> for String {
    fn from(value: Atin) -> Self {
        value.to_string()
    }
}

impl From<Span> for Atin {
    fn from(value: Span) -> Self {
        Self(value)
    }
}

impl From<Atin> for Span {
    fn from(value: Atin) -> Self {
        value.0
    }
}
