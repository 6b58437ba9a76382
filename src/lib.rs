//! LiftLog - Strength Training Log
//!
//! Users define push/pull/legs workout templates and log dated sessions
//! against them with per-set weight, reps and effort. From the logged history
//! the library derives "last time" hints, monthly attendance, cost per
//! session, category distribution and a month calendar.

pub mod analytics;
pub mod error;
pub mod ids;
pub mod navigation;
pub mod storage;
pub mod templates;
pub mod tracker;
pub mod workouts;

// Re-export commonly used types
pub use analytics::{CalendarBuilder, StatsEngine, YearMonth};
pub use error::{TrackerError, TrackerResult};
pub use storage::{AppConfig, Database, MemoryStore};
pub use templates::{Category, Template, TemplateStore};
pub use tracker::Tracker;
pub use workouts::{ProgressionLookup, Workout, WorkoutStore};
