//! Atin duration codec and interval rounding.
//!
//! Two independent pieces share the [`Span`] value type:
//!
//! - **`codec`**: parse and format the compact `W1D2H3M4S5` token format
//! - **`rounding`**: snap spans and offset timestamps onto a [`Grid`]
//!
//! Everything here is pure; no IO and no shared state.

pub mod codec;
mod interop;
pub mod rounding;

pub use atin_types::{Grid, GridError, Span, SpanRangeError, TICKS_PER_SECOND, Unit};
pub use codec::{Atin, ParseError, Token, Tokens, format, parse, tokens, try_parse};
pub use interop::{span_from_delta, span_to_delta};
pub use rounding::{
    RoundingError, RoundingMode, UnknownModeError, round, round_down, round_timestamp,
    round_timestamp_down, round_timestamp_to, round_timestamp_up, round_to, round_up,
};
