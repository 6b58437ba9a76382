//! Progressive overload lookup.
//!
//! Finds the most recent session logged against a template so the entry
//! form can show "last time" figures next to each set.

use std::cmp::Ordering;

use crate::error::TrackerResult;
use crate::storage::CollectionStore;
use crate::templates::TemplateId;

use super::types::{Feel, Workout};

/// Order workouts newest first: by date, then by logging time.
pub fn most_recent_first(a: &Workout, b: &Workout) -> Ordering {
    b.date
        .cmp(&a.date)
        .then_with(|| b.created_at.cmp(&a.created_at))
}

/// The latest workout for `template_id` among `workouts`.
///
/// Ties on both date and logging time go to the earliest inserted entry.
pub fn latest_for<'w>(workouts: &'w [Workout], template_id: &TemplateId) -> Option<&'w Workout> {
    workouts
        .iter()
        .filter(|w| &w.template_id == template_id)
        .min_by(|a, b| most_recent_first(a, b))
}

/// Looks up previous performances from the workout collection.
pub struct ProgressionLookup<'a> {
    store: &'a dyn CollectionStore,
}

impl<'a> ProgressionLookup<'a> {
    pub fn new(store: &'a dyn CollectionStore) -> Self {
        Self { store }
    }

    /// Most recent workout logged against a template, if any.
    pub fn last_for(&self, template_id: &TemplateId) -> TrackerResult<Option<Workout>> {
        let workouts = self.store.workouts()?;
        let last = latest_for(&workouts, template_id).cloned();

        match &last {
            Some(w) => tracing::debug!("Last workout for {} was {} on {}", template_id, w.id, w.date),
            None => tracing::debug!("No previous workout for {}", template_id),
        }
        Ok(last)
    }

    /// Per-set hints for a template's entry form.
    pub fn progression_for(&self, template_id: &TemplateId) -> TrackerResult<Progression> {
        Ok(Progression {
            last: self.last_for(template_id)?,
        })
    }
}

/// The previous session of a template, addressed by exercise and set index.
#[derive(Debug, Clone, Default)]
pub struct Progression {
    last: Option<Workout>,
}

impl Progression {
    /// Wrap an optional previous workout.
    pub fn new(last: Option<Workout>) -> Self {
        Self { last }
    }

    /// The previous workout, if any.
    pub fn last(&self) -> Option<&Workout> {
        self.last.as_ref()
    }

    /// What was done at this position last time.
    ///
    /// Positions the previous session does not have (the template grew since)
    /// resolve to an empty hint.
    pub fn hint(&self, exercise_index: usize, set_index: usize) -> SetHint {
        self.last
            .as_ref()
            .and_then(|w| w.exercises.get(exercise_index))
            .and_then(|e| e.sets.get(set_index))
            .map(|s| SetHint {
                kg: s.kg,
                reps: s.reps,
                feel: s.feel,
            })
            .unwrap_or_default()
    }
}

/// Previous values for one set; each may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SetHint {
    pub kg: Option<f64>,
    pub reps: Option<f64>,
    pub feel: Option<Feel>,
}

impl SetHint {
    /// Whether there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.kg.is_none() && self.reps.is_none() && self.feel.is_none()
    }

    /// Feel label, or a dash when unset.
    pub fn feel_label(&self) -> &'static str {
        self.feel.map(|f| f.label()).unwrap_or(PLACEHOLDER)
    }
}

const PLACEHOLDER: &str = "—";

impl std::fmt::Display for SetHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kg {
            Some(kg) => write!(f, "{kg} kg")?,
            None => write!(f, "{PLACEHOLDER} kg")?,
        }
        match self.reps {
            Some(reps) => write!(f, " × {reps} reps"),
            None => write!(f, " × {PLACEHOLDER} reps"),
        }
    }
}
