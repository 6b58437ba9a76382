//! Derived analytics over the logged history.
//!
//! This module provides:
//! - Month keys (`YYYY-MM`)
//! - Attendance, cost per session and push/pull/legs counts
//! - Monday-first calendar grids
//! - Per-day session details

pub mod calendar;
pub mod day_detail;
pub mod period;
pub mod stats;

// Re-exports for convenience
pub use calendar::{CalendarBuilder, CalendarGrid, DayCell};
pub use day_detail::{DayDetails, DayEntry};
pub use period::YearMonth;
pub use stats::{CategoryCounts, MonthSummary, StatsEngine};
