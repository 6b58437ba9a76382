//! Logged workout sessions and progression lookup.

pub mod progression;
pub mod store;
pub mod types;

pub use progression::{Progression, ProgressionLookup, SetHint};
pub use store::WorkoutStore;
pub use types::{Feel, LoggedExercise, SetEntry, Workout, WorkoutId};
