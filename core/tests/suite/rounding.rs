//! Span and timestamp rounding.

use atin_core::{
    Grid, GridError, RoundingError, RoundingMode, Span, round, round_down, round_timestamp,
    round_timestamp_down, round_timestamp_to, round_timestamp_up, round_to, round_up,
};
use chrono::{DateTime, FixedOffset, TimeDelta, Utc};

use crate::common::{at, hms, minutes_grid};

const JAN_14: (i32, u32, u32) = (2024, 1, 14);

#[test]
fn span_round_to_five_minutes() {
    assert_eq!(round_to(hms(5, 12, 45), minutes_grid(5)), Ok(hms(5, 15, 0)));
}

#[test]
fn span_round_down_five_minutes() {
    assert_eq!(round_down(hms(5, 12, 45), minutes_grid(5)), Ok(hms(5, 10, 0)));
}

#[test]
fn span_round_up_five_minutes() {
    assert_eq!(round_up(hms(5, 12, 45), minutes_grid(5)), Ok(hms(5, 15, 0)));
}

#[test]
fn span_round_dispatches_on_mode() {
    let value = hms(5, 12, 45);
    let grid = minutes_grid(5);
    assert_eq!(round(value, grid, RoundingMode::Down), round_down(value, grid));
    assert_eq!(round(value, grid, RoundingMode::Up), round_up(value, grid));
    assert_eq!(round(value, grid, RoundingMode::Nearest), round_to(value, grid));
}

#[test]
fn span_round_to_exact_half_goes_up() {
    assert_eq!(round_to(hms(5, 12, 30), minutes_grid(5)), Ok(hms(5, 15, 0)));
    assert_eq!(round_to(hms(5, 12, 29), minutes_grid(5)), Ok(hms(5, 10, 0)));
}

#[test]
fn non_positive_grid_is_rejected() {
    assert_eq!(Grid::new(Span::ZERO), Err(GridError::NonPositive { ticks: 0 }));
    assert!(Grid::new(hms(0, -5, 0)).is_err());
}

#[test]
fn span_overflow_is_reported() {
    assert_eq!(
        round_up(Span::MAX, minutes_grid(5)),
        Err(RoundingError::OutOfRange)
    );
}

#[test]
fn timestamp_round_to_five_minutes() {
    let ts = at(JAN_14, (5, 12, 45), 0);
    assert_eq!(
        round_timestamp_to(ts, minutes_grid(5)),
        Ok(at(JAN_14, (5, 15, 0), 0))
    );
}

#[test]
fn timestamp_round_down_five_minutes() {
    let ts = at(JAN_14, (5, 12, 45), 0);
    assert_eq!(
        round_timestamp_down(ts, minutes_grid(5)),
        Ok(at(JAN_14, (5, 10, 0), 0))
    );
}

#[test]
fn timestamp_round_up_five_minutes() {
    let ts = at(JAN_14, (5, 12, 45), 0);
    assert_eq!(
        round_timestamp_up(ts, minutes_grid(5)),
        Ok(at(JAN_14, (5, 15, 0), 0))
    );
}

fn offset_of(ts: &DateTime<FixedOffset>) -> i32 {
    ts.offset().local_minus_utc()
}

#[test]
fn timestamp_offset_is_preserved() {
    let plus_five_thirty = 5 * 3600 + 30 * 60;
    let ts = at(JAN_14, (5, 12, 45), plus_five_thirty);
    let rounded = round_timestamp_down(ts, minutes_grid(5)).unwrap();
    assert_eq!(offset_of(&rounded), plus_five_thirty);
    assert_eq!(rounded, at(JAN_14, (5, 10, 0), plus_five_thirty));
}

#[test]
fn timestamp_rounds_local_wall_clock() {
    let plus_five = 5 * 3600;
    let ts = at(JAN_14, (23, 40, 0), plus_five);
    let day = Grid::new(hms(24, 0, 0)).unwrap();

    let rounded = round_timestamp(ts, day, RoundingMode::Nearest).unwrap();
    assert_eq!(rounded, at((2024, 1, 15), (0, 0, 0), plus_five));
    assert_eq!(offset_of(&rounded), plus_five);

    let rounded = round_timestamp(ts, day, RoundingMode::Down).unwrap();
    assert_eq!(rounded, at(JAN_14, (0, 0, 0), plus_five));
}

#[test]
fn timestamp_drops_sub_tick_nanos() {
    let ts = at(JAN_14, (5, 12, 45), 0) + TimeDelta::nanoseconds(150);
    let one_tick = Grid::new(Span::from_ticks(1)).unwrap();
    let rounded = round_timestamp_down(ts, one_tick).unwrap();
    assert_eq!(rounded, at(JAN_14, (5, 12, 45), 0) + TimeDelta::nanoseconds(100));
}

#[test]
fn timestamp_week_grid_aligns_to_monday() {
    // 0001-01-01 was a Monday, so week multiples land on Mondays.
    let week = Grid::new(hms(7 * 24, 0, 0)).unwrap();
    let rounded = round_timestamp_down(at(JAN_14, (12, 0, 0), 0), week).unwrap();
    assert_eq!(rounded, at((2024, 1, 8), (0, 0, 0), 0));
    assert_eq!(rounded.format("%A").to_string(), "Monday");
}

fn rfc3339(text: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(text).unwrap()
}

#[test]
fn leap_second_rounds_within_its_minute() {
    let leap = rfc3339("2016-12-31T23:59:60.5Z");
    let second = Grid::new(hms(0, 0, 1)).unwrap();
    let minute = minutes_grid(1);

    let down = round_timestamp_down(leap, second).unwrap();
    let up = round_timestamp_up(leap, second).unwrap();
    assert_eq!(down, rfc3339("2016-12-31T23:59:59Z"));
    assert_eq!(up, rfc3339("2017-01-01T00:00:00Z"));
    assert!(down <= leap && leap <= up);

    let down = round_timestamp_down(leap, minute).unwrap();
    let up = round_timestamp_up(leap, minute).unwrap();
    assert_eq!(down, rfc3339("2016-12-31T23:59:00Z"));
    assert_eq!(up, rfc3339("2017-01-01T00:00:00Z"));
    assert!(down <= leap && leap <= up);
}

#[test]
fn local_time_past_chrono_range_does_not_panic() {
    let plus_one = FixedOffset::east_opt(3600).unwrap();
    let ts = DateTime::<Utc>::MAX_UTC.with_timezone(&plus_one);

    let down = round_timestamp_down(ts, minutes_grid(5)).unwrap();
    assert!(down <= ts);
    assert!(ts - down < TimeDelta::minutes(5));
    assert_eq!(offset_of(&down), 3600);

    assert_eq!(
        round_timestamp_up(ts, minutes_grid(5)),
        Err(RoundingError::OutOfRange)
    );
}
