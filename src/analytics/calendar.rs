//! Month calendar grid.
//!
//! Weeks start on Monday. The grid is padded with blank cells at both ends
//! so its length is always a multiple of seven.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use super::period::YearMonth;

/// One cell of the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCell {
    /// Padding before the first or after the last day
    Blank,
    /// A day of the month
    Day {
        /// Day of month, 1-based
        day: u32,
        /// Full date
        date: NaiveDate,
        /// At least one workout was logged that day
        hit: bool,
        /// The caller's currently selected day
        selected: bool,
    },
}

impl DayCell {
    pub fn is_blank(&self) -> bool {
        matches!(self, DayCell::Blank)
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, DayCell::Day { hit: true, .. })
    }
}

/// A week-major grid of day cells for one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    month: YearMonth,
    cells: Vec<DayCell>,
}

impl CalendarGrid {
    pub fn month(&self) -> YearMonth {
        self.month
    }

    /// All cells, row by row.
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// Rows of seven cells, Monday first.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }

    pub fn week_count(&self) -> usize {
        self.cells.len() / 7
    }

    /// Blank cells before day 1.
    pub fn leading_blanks(&self) -> usize {
        self.cells.iter().take_while(|c| c.is_blank()).count()
    }

    /// Blank cells after the last day.
    pub fn trailing_blanks(&self) -> usize {
        self.cells.iter().rev().take_while(|c| c.is_blank()).count()
    }
}

/// Two-character weekday headers, Monday first.
pub const WEEKDAY_HEADERS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];

impl std::fmt::Display for CalendarGrid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", WEEKDAY_HEADERS.map(|h| format!(" {h} ")).join(""))?;
        for week in self.weeks() {
            for cell in week {
                match cell {
                    DayCell::Blank => write!(f, "    ")?,
                    DayCell::Day {
                        day,
                        hit,
                        selected,
                        ..
                    } => {
                        let (open, close) = match (selected, hit) {
                            (true, _) => ('[', ']'),
                            (false, true) => ('*', ' '),
                            (false, false) => (' ', ' '),
                        };
                        write!(f, "{open}{day:>2}{close}")?;
                    }
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Builds month grids.
pub struct CalendarBuilder;

impl CalendarBuilder {
    /// Lay out `month`, flagging `hits` and the `selected` day.
    ///
    /// A selection outside the month is simply not shown; clearing it is the
    /// caller's job (see [`YearMonth::contains`]).
    pub fn build(
        month: YearMonth,
        hits: &BTreeSet<NaiveDate>,
        selected: Option<NaiveDate>,
    ) -> CalendarGrid {
        let first = month.first_day();
        let days = month.days_in_month();

        // Sunday-indexed weekday shifted so Monday is column 0
        let offset = ((first.weekday().num_days_from_sunday() + 6) % 7) as usize;

        let mut cells = Vec::with_capacity(42);
        cells.extend(std::iter::repeat(DayCell::Blank).take(offset));

        for day in 1..=days {
            let Some(date) = month.day(day) else {
                break;
            };
            cells.push(DayCell::Day {
                day,
                date,
                hit: hits.contains(&date),
                selected: selected == Some(date),
            });
        }

        while cells.len() % 7 != 0 {
            cells.push(DayCell::Blank);
        }

        CalendarGrid { month, cells }
    }
}
