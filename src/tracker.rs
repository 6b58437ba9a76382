//! Tracker facade.
//!
//! Owns a collection store, an id supplier, a clock and the planning
//! settings, and hands out the stores and query components borrowing them.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::analytics::{CalendarBuilder, CalendarGrid, DayDetails, StatsEngine, YearMonth};
use crate::analytics::stats::hit_dates;
use crate::error::TrackerResult;
use crate::ids::{Clock, IdSupplier, SystemClock, UuidIds};
use crate::storage::{CollectionStore, PlanningSettings};
use crate::templates::TemplateStore;
use crate::workouts::{ProgressionLookup, WorkoutStore};

/// Entry point bundling everything a front end needs.
pub struct Tracker<S> {
    store: S,
    ids: Box<dyn IdSupplier>,
    clock: Box<dyn Clock>,
    settings: PlanningSettings,
}

impl<S: CollectionStore> Tracker<S> {
    /// Tracker with random ids and the system clock.
    pub fn new(store: S, settings: PlanningSettings) -> Self {
        Self::with_parts(store, Box::new(UuidIds), Box::new(SystemClock), settings)
    }

    /// Tracker with explicit id supplier and clock.
    pub fn with_parts(
        store: S,
        ids: Box<dyn IdSupplier>,
        clock: Box<dyn Clock>,
        settings: PlanningSettings,
    ) -> Self {
        Self {
            store,
            ids,
            clock,
            settings,
        }
    }

    pub fn templates(&self) -> TemplateStore<'_> {
        TemplateStore::new(&self.store, self.ids.as_ref())
    }

    pub fn workouts(&self) -> WorkoutStore<'_> {
        WorkoutStore::new(&self.store, self.ids.as_ref(), self.clock.as_ref())
    }

    pub fn progression(&self) -> ProgressionLookup<'_> {
        ProgressionLookup::new(&self.store)
    }

    pub fn stats(&self) -> StatsEngine<'_> {
        StatsEngine::new(&self.store, &self.settings)
    }

    pub fn day_details(&self) -> DayDetails<'_> {
        DayDetails::new(&self.store)
    }

    pub fn settings(&self) -> &PlanningSettings {
        &self.settings
    }

    /// The month the clock is in.
    pub fn current_month(&self) -> YearMonth {
        YearMonth::current(self.clock.as_ref())
    }

    /// Sorted distinct dates with at least one workout.
    pub fn hit_dates(&self) -> TrackerResult<BTreeSet<NaiveDate>> {
        Ok(hit_dates(&self.store.workouts()?))
    }

    /// Calendar grid for a month with logged days flagged.
    pub fn calendar(
        &self,
        month: YearMonth,
        selected: Option<NaiveDate>,
    ) -> TrackerResult<CalendarGrid> {
        Ok(CalendarBuilder::build(month, &self.hit_dates()?, selected))
    }
}
