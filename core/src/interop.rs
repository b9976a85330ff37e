//! Conversions between [`Span`] and `chrono` values.

use chrono::{DateTime, FixedOffset, TimeDelta};

use atin_types::{Span, SpanRangeError, TICKS_PER_SECOND};

const NANOS_PER_TICK: i64 = 100;

/// Ticks between 0001-01-01T00:00:00 and the Unix epoch.
const UNIX_EPOCH_TICKS: i64 = 621_355_968_000_000_000;

/// Sub-tick nanoseconds are truncated toward zero.
pub fn span_from_delta(delta: TimeDelta) -> Result<Span, SpanRangeError> {
    let whole = Span::from_seconds(delta.num_seconds()).ok_or(SpanRangeError)?;
    let frac = Span::from_ticks(i64::from(delta.subsec_nanos()) / NANOS_PER_TICK);
    whole.checked_add(frac).ok_or(SpanRangeError)
}

/// Every span fits in a `TimeDelta`.
#[must_use]
pub fn span_to_delta(span: Span) -> TimeDelta {
    TimeDelta::seconds(span.whole_seconds())
        + TimeDelta::nanoseconds(span.subsec_ticks() * NANOS_PER_TICK)
}

/// Largest sub-second value of a normal second; chrono encodes a leap second
/// as `subsec_nanos >= 1_000_000_000`.
const MAX_SUBSEC_NANOS: u32 = 999_999_999;

/// Wall-clock ticks of a timestamp, counted from 0001-01-01 in its own offset.
///
/// Computed from the UTC instant plus the offset, so a local time past
/// chrono's naive range still has a tick count. A leap second counts as the
/// last tick of second :59.
pub(crate) fn wall_clock_ticks(ts: &DateTime<FixedOffset>) -> i128 {
    let tps = i128::from(TICKS_PER_SECOND);
    let local_secs = i128::from(ts.timestamp()) + i128::from(ts.offset().local_minus_utc());
    let nanos = ts.timestamp_subsec_nanos().min(MAX_SUBSEC_NANOS);
    local_secs * tps
        + i128::from(nanos) / i128::from(NANOS_PER_TICK)
        + i128::from(UNIX_EPOCH_TICKS)
}

/// Inverse of [`wall_clock_ticks`]; `None` outside chrono's range.
pub(crate) fn from_wall_clock_ticks(
    ticks: i128,
    offset: FixedOffset,
) -> Option<DateTime<FixedOffset>> {
    let tps = i128::from(TICKS_PER_SECOND);
    let utc_ticks =
        ticks - i128::from(UNIX_EPOCH_TICKS) - i128::from(offset.local_minus_utc()) * tps;
    let secs = i64::try_from(utc_ticks.div_euclid(tps)).ok()?;
    let nanos = u32::try_from(utc_ticks.rem_euclid(tps) * i128::from(NANOS_PER_TICK)).ok()?;
    Some(DateTime::from_timestamp(secs, nanos)?.with_timezone(&offset))
}
