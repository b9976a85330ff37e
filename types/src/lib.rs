//! Core value types for Atin.
//!
//! This crate contains pure value types with no IO and no parsing.
//! The codec and rounding arithmetic in `atin-core` are built on these.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod grid;
mod span;
mod unit;

pub use grid::{Grid, GridError};
pub use span::{Span, SpanRangeError, TICKS_PER_SECOND};
pub use unit::Unit;
