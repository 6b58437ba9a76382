//! Unit tests for month calendar grids.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use liftlog::analytics::{CalendarBuilder, DayCell, YearMonth};

fn ym(s: &str) -> YearMonth {
    s.parse().expect("valid month")
}

#[test]
fn test_february_2024_grid() {
    // Leap year, 29 days, starts on a Thursday
    let grid = CalendarBuilder::build(ym("2024-02"), &BTreeSet::new(), None);

    assert_eq!(grid.cells().len(), 35);
    assert_eq!(grid.week_count(), 5);
    assert_eq!(grid.leading_blanks(), 3);

    let first_week = grid.weeks().next().unwrap();
    assert!(first_week[..3].iter().all(DayCell::is_blank));
    assert!(matches!(first_week[3], DayCell::Day { day: 1, .. }));

    let last_day = grid
        .cells()
        .iter()
        .rev()
        .find_map(|c| match c {
            DayCell::Day { day, .. } => Some(*day),
            DayCell::Blank => None,
        })
        .unwrap();
    assert_eq!(last_day, 29);
}

#[test]
fn test_february_2023_fits_four_weeks() {
    // 2023-02-01 was a Wednesday: 2 leading blanks, 28 days, 5 trailing
    let grid = CalendarBuilder::build(ym("2023-02"), &BTreeSet::new(), None);
    assert_eq!(grid.leading_blanks(), 2);
    assert_eq!(grid.trailing_blanks(), 5);
    assert_eq!(grid.week_count(), 5);
}

#[test]
fn test_february_2021_exact_four_weeks() {
    // 2021-02-01 was a Monday with 28 days
    let grid = CalendarBuilder::build(ym("2021-02"), &BTreeSet::new(), None);
    assert_eq!(grid.cells().len(), 28);
    assert_eq!(grid.leading_blanks(), 0);
    assert_eq!(grid.trailing_blanks(), 0);
}

#[test]
fn test_hit_days_flagged() {
    let hits: BTreeSet<NaiveDate> = ["2024-03-01", "2024-03-31"]
        .iter()
        .map(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap())
        .collect();

    let grid = CalendarBuilder::build(ym("2024-03"), &hits, None);
    let hit_count = grid.cells().iter().filter(|c| c.is_hit()).count();
    assert_eq!(hit_count, 2);
}
