//! Sessions logged on a given day.
//!
//! Template name and category come from the current templates, not from the
//! workout snapshot, so renaming a template renames its history too.

use std::collections::HashMap;

use chrono::{Local, NaiveDate, TimeZone};

use crate::error::TrackerResult;
use crate::storage::CollectionStore;
use crate::templates::{Category, Template, TemplateId};
use crate::workouts::{Workout, WorkoutId};

/// Name shown when a workout's template no longer exists.
pub const MISSING_TEMPLATE_NAME: &str = "Session";

/// One row of the day detail list.
#[derive(Debug, Clone, PartialEq)]
pub struct DayEntry {
    pub workout_id: WorkoutId,
    pub template_name: String,
    /// `None` when the template is gone
    pub category: Option<Category>,
    pub created_at: i64,
}

impl DayEntry {
    /// Category label, `?` when unknown.
    pub fn category_label(&self) -> String {
        self.category
            .map(|c| c.to_string())
            .unwrap_or_else(|| "?".to_string())
    }

    /// Local `HH:MM` of the logging time, `--:--` when unknown.
    pub fn logged_time(&self) -> String {
        if self.created_at == 0 {
            return "--:--".to_string();
        }
        match Local.timestamp_millis_opt(self.created_at).single() {
            Some(time) => time.format("%H:%M").to_string(),
            None => "--:--".to_string(),
        }
    }
}

/// Entries for `date`, most recently logged first.
pub fn details_for(workouts: &[Workout], templates: &[Template], date: NaiveDate) -> Vec<DayEntry> {
    let by_id: HashMap<&TemplateId, &Template> = templates.iter().map(|t| (&t.id, t)).collect();

    let mut on_day: Vec<&Workout> = workouts.iter().filter(|w| w.date == date).collect();
    on_day.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    on_day
        .into_iter()
        .map(|w| {
            let template = by_id.get(&w.template_id);
            if template.is_none() {
                tracing::warn!("Workout {} references missing template {}", w.id, w.template_id);
            }
            DayEntry {
                workout_id: w.id.clone(),
                template_name: template
                    .map(|t| t.name.clone())
                    .unwrap_or_else(|| MISSING_TEMPLATE_NAME.to_string()),
                category: template.map(|t| t.category),
                created_at: w.created_at,
            }
        })
        .collect()
}

/// Resolves day details from the stored collections.
pub struct DayDetails<'a> {
    store: &'a dyn CollectionStore,
}

impl<'a> DayDetails<'a> {
    pub fn new(store: &'a dyn CollectionStore) -> Self {
        Self { store }
    }

    /// Entries for `date`, most recently logged first.
    pub fn details_for(&self, date: NaiveDate) -> TrackerResult<Vec<DayEntry>> {
        let workouts = self.store.workouts()?;
        let templates = self.store.templates()?;
        Ok(details_for(&workouts, &templates, date))
    }
}
