//! Workout templates: named push/pull/legs routines.

pub mod store;
pub mod types;

pub use store::TemplateStore;
pub use types::{Category, ExerciseSpec, Template, TemplateId};
