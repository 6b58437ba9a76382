//! Logged workout storage.

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::ids::{Clock, IdSupplier};
use crate::storage::{CollectionStore, StorageError};
use crate::templates::TemplateId;

use super::types::{has_measured_set, LoggedExercise, Workout, WorkoutId};

/// Append-mostly store of logged sessions.
pub struct WorkoutStore<'a> {
    store: &'a dyn CollectionStore,
    ids: &'a dyn IdSupplier,
    clock: &'a dyn Clock,
}

impl<'a> WorkoutStore<'a> {
    /// Create a workout store over the given collections.
    pub fn new(
        store: &'a dyn CollectionStore,
        ids: &'a dyn IdSupplier,
        clock: &'a dyn Clock,
    ) -> Self {
        Self { store, ids, clock }
    }

    /// Log a session on `date`.
    ///
    /// At least one set must carry a weight or a rep count.
    pub fn create(
        &self,
        template_id: &TemplateId,
        date: NaiveDate,
        exercises: Vec<LoggedExercise>,
    ) -> TrackerResult<Workout> {
        if !has_measured_set(&exercises) {
            return Err(TrackerError::validation(
                "Fill in at least one set (kg or reps)",
            ));
        }

        let workout = Workout {
            id: WorkoutId::new(self.ids.next_id()),
            template_id: template_id.clone(),
            date,
            created_at: self.clock.now_millis(),
            exercises,
        };

        let mut workouts = self.store.workouts()?;
        workouts.push(workout.clone());
        self.store.put_workouts(&workouts)?;

        tracing::info!(
            "Logged workout {} for template {} on {} ({} measured sets)",
            workout.id,
            workout.template_id,
            workout.date,
            workout.measured_sets()
        );
        Ok(workout)
    }

    /// Log a session dated today.
    pub fn create_today(
        &self,
        template_id: &TemplateId,
        exercises: Vec<LoggedExercise>,
    ) -> TrackerResult<Workout> {
        self.create(template_id, self.clock.today(), exercises)
    }

    /// Delete a workout. Returns `false` when no workout had that id.
    pub fn delete(&self, id: &WorkoutId) -> TrackerResult<bool> {
        let mut workouts = self.store.workouts()?;
        let before = workouts.len();
        workouts.retain(|w| &w.id != id);

        if workouts.len() == before {
            tracing::debug!("Workout {} not found, nothing to delete", id);
            return Ok(false);
        }

        self.store.put_workouts(&workouts)?;
        tracing::info!("Deleted workout {}", id);
        Ok(true)
    }

    /// All workouts in insertion order.
    pub fn list_all(&self) -> TrackerResult<Vec<Workout>> {
        Ok(self.store.workouts()?)
    }

    /// Workouts logged against a template, in insertion order.
    pub fn by_template(&self, template_id: &TemplateId) -> TrackerResult<Vec<Workout>> {
        let mut workouts = self.store.workouts()?;
        workouts.retain(|w| &w.template_id == template_id);
        Ok(workouts)
    }

    /// Workouts on a date, most recently logged first.
    pub fn by_date(&self, date: NaiveDate) -> TrackerResult<Vec<Workout>> {
        let mut workouts = self.store.workouts()?;
        workouts.retain(|w| w.date == date);
        workouts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(workouts)
    }
}

/// Remove every workout logged against `template_id`, returning how many went.
pub(crate) fn remove_for_template(
    store: &dyn CollectionStore,
    template_id: &TemplateId,
) -> Result<usize, StorageError> {
    let mut workouts = store.workouts()?;
    let before = workouts.len();
    workouts.retain(|w| &w.template_id != template_id);

    let removed = before - workouts.len();
    if removed > 0 {
        store.put_workouts(&workouts)?;
    }
    Ok(removed)
}
