//! Algebraic properties checked over fixed value sets.

use atin_core::{
    Grid, Span, TICKS_PER_SECOND, Unit, format, parse, round_down, round_to, round_up,
};

const QUANTITIES: [i64; 6] = [0, 1, 2, 7, 59, 1_000];

fn compose(w: i64, d: i64, h: i64, m: i64, s: i64) -> Span {
    [
        (Unit::Week, w),
        (Unit::Day, d),
        (Unit::Hour, h),
        (Unit::Minute, m),
        (Unit::Second, s),
    ]
    .into_iter()
    .map(|(unit, n)| Span::from_unit(unit, n).unwrap())
    .try_fold(Span::ZERO, Span::checked_add)
    .unwrap()
}

fn sample_values() -> Vec<Span> {
    let mut values = vec![Span::ZERO];
    for n in [1, 9, 10, 11, 299, 300, 301, 12_345_678_901, 86_400 * TICKS_PER_SECOND + 17] {
        values.push(Span::from_ticks(n));
        values.push(Span::from_ticks(-n));
    }
    values
}

fn sample_grids() -> Vec<Grid> {
    [1, 2, 3, 10, 7 * TICKS_PER_SECOND, 300 * TICKS_PER_SECOND]
        .into_iter()
        .map(|t| Grid::new(Span::from_ticks(t)).unwrap())
        .collect()
}

#[test]
fn parse_inverts_format() {
    for w in QUANTITIES {
        for d in QUANTITIES {
            for h in QUANTITIES {
                for m in QUANTITIES {
                    for s in QUANTITIES {
                        let span = compose(w, d, h, m, s);
                        let text = format(span);
                        assert_eq!(parse(text.as_str()), Ok(span), "via {text}");
                    }
                }
            }
        }
    }
}

#[test]
fn format_is_canonical() {
    // Non-canonical inputs normalise to one spelling.
    for input in ["D7", "h168", "w1", "D3D4", "S604800"] {
        assert_eq!(format(parse(input).unwrap()), "W1", "from {input}");
    }
}

#[test]
fn rounding_brackets_the_value() {
    for grid in sample_grids() {
        for value in sample_values() {
            let down = round_down(value, grid).unwrap();
            let up = round_up(value, grid).unwrap();
            let nearest = round_to(value, grid).unwrap();
            assert!(down <= value && value <= up, "{value:?} on {grid:?}");
            assert!(down == nearest || up == nearest);
            assert!(up.ticks() - down.ticks() <= grid.ticks());
            assert_eq!(down.ticks() % grid.ticks(), 0);
            assert_eq!(up.ticks() % grid.ticks(), 0);
        }
    }
}

#[test]
fn rounding_is_idempotent() {
    for grid in sample_grids() {
        for value in sample_values() {
            let down = round_down(value, grid).unwrap();
            assert_eq!(round_down(down, grid), Ok(down));
            let up = round_up(value, grid).unwrap();
            assert_eq!(round_up(up, grid), Ok(up));
            let nearest = round_to(value, grid).unwrap();
            assert_eq!(round_to(nearest, grid), Ok(nearest));
        }
    }
}
