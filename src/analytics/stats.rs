//! Attendance, cost and push/pull/legs statistics.
//!
//! Attendance counts distinct dates, not sessions. Category counts allow one
//! slot per category per day.

use std::collections::{BTreeSet, HashMap, HashSet};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::TrackerResult;
use crate::storage::{CollectionStore, PlanningSettings};
use crate::templates::{Category, Template, TemplateId};
use crate::workouts::Workout;

use super::period::YearMonth;

/// Sorted distinct dates that have at least one workout.
pub fn hit_dates(workouts: &[Workout]) -> BTreeSet<NaiveDate> {
    workouts.iter().map(|w| w.date).collect()
}

/// Distinct workout dates inside a month.
pub fn month_dates(workouts: &[Workout], month: YearMonth) -> BTreeSet<NaiveDate> {
    workouts
        .iter()
        .map(|w| w.date)
        .filter(|d| month.contains(*d))
        .collect()
}

/// Number of distinct workout dates in a month.
pub fn monthly_count(workouts: &[Workout], month: YearMonth) -> usize {
    month_dates(workouts, month).len()
}

/// Number of distinct workout dates in a year.
pub fn yearly_count(workouts: &[Workout], year: i32) -> usize {
    workouts
        .iter()
        .map(|w| w.date)
        .filter(|d| d.year() == year)
        .collect::<HashSet<_>>()
        .len()
}

/// Fee divided by sessions; `None` when there were no sessions.
pub fn cost_per_session(monthly_fee: f64, sessions: usize) -> Option<f64> {
    if sessions == 0 {
        None
    } else {
        Some(monthly_fee / sessions as f64)
    }
}

/// Per-category day counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub push: u32,
    pub pull: u32,
    pub legs: u32,
}

impl CategoryCounts {
    /// Count for one category.
    pub fn get(&self, category: Category) -> u32 {
        match category {
            Category::Push => self.push,
            Category::Pull => self.pull,
            Category::Legs => self.legs,
        }
    }

    fn increment(&mut self, category: Category) {
        match category {
            Category::Push => self.push += 1,
            Category::Pull => self.pull += 1,
            Category::Legs => self.legs += 1,
        }
    }

    /// Sum over all categories.
    pub fn total(&self) -> u32 {
        self.push + self.pull + self.legs
    }
}

/// Category counts for a month.
///
/// Workouts whose template no longer exists are skipped. Several sessions of
/// the same category on one date count once.
pub fn category_counts(
    workouts: &[Workout],
    templates: &[Template],
    month: YearMonth,
) -> CategoryCounts {
    let category_by_id: HashMap<&TemplateId, Category> =
        templates.iter().map(|t| (&t.id, t.category)).collect();

    let mut seen: HashSet<(NaiveDate, Category)> = HashSet::new();
    let mut counts = CategoryCounts::default();

    for workout in workouts.iter().filter(|w| month.contains(w.date)) {
        let Some(&category) = category_by_id.get(&workout.template_id) else {
            tracing::warn!(
                "Workout {} references missing template {}",
                workout.id,
                workout.template_id
            );
            continue;
        };

        if seen.insert((workout.date, category)) {
            counts.increment(category);
        }
    }

    counts
}

/// Everything the planning view shows for one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSummary {
    /// Month key, `YYYY-MM`
    pub month: String,
    /// Distinct training days in the month
    pub monthly_count: usize,
    /// Distinct training days in the month's year
    pub yearly_count: usize,
    /// Monthly fee used for the cost figure
    pub monthly_fee: f64,
    /// Fee per training day, `None` without training days
    pub cost_per_session: Option<f64>,
    /// Push/pull/legs day counts
    pub categories: CategoryCounts,
}

impl MonthSummary {
    /// Cost formatted with two decimals, or a dash when undefined.
    pub fn cost_label(&self, currency: &str) -> String {
        match self.cost_per_session {
            Some(cost) => format!("{cost:.2}{currency}"),
            None => "—".to_string(),
        }
    }
}

/// Computes planning statistics from the stored collections.
pub struct StatsEngine<'a> {
    store: &'a dyn CollectionStore,
    settings: &'a PlanningSettings,
}

impl<'a> StatsEngine<'a> {
    pub fn new(store: &'a dyn CollectionStore, settings: &'a PlanningSettings) -> Self {
        Self { store, settings }
    }

    /// Distinct training days in a month.
    pub fn monthly_count(&self, month: YearMonth) -> TrackerResult<usize> {
        Ok(monthly_count(&self.store.workouts()?, month))
    }

    /// Distinct training days in a year.
    pub fn yearly_count(&self, year: i32) -> TrackerResult<usize> {
        Ok(yearly_count(&self.store.workouts()?, year))
    }

    /// Fee per training day in a month.
    pub fn cost_per_session(&self, month: YearMonth) -> TrackerResult<Option<f64>> {
        Ok(cost_per_session(
            self.settings.monthly_fee,
            self.monthly_count(month)?,
        ))
    }

    /// Push/pull/legs day counts for a month.
    pub fn category_counts(&self, month: YearMonth) -> TrackerResult<CategoryCounts> {
        let workouts = self.store.workouts()?;
        let templates = self.store.templates()?;
        Ok(category_counts(&workouts, &templates, month))
    }

    /// All statistics for a month from a single read of each collection.
    pub fn month_summary(&self, month: YearMonth) -> TrackerResult<MonthSummary> {
        let workouts = self.store.workouts()?;
        let templates = self.store.templates()?;

        let monthly = monthly_count(&workouts, month);
        let summary = MonthSummary {
            month: month.to_string(),
            monthly_count: monthly,
            yearly_count: yearly_count(&workouts, month.year()),
            monthly_fee: self.settings.monthly_fee,
            cost_per_session: cost_per_session(self.settings.monthly_fee, monthly),
            categories: category_counts(&workouts, &templates, month),
        };

        tracing::debug!(
            "Summary for {}: {} days this month, {} this year",
            summary.month,
            summary.monthly_count,
            summary.yearly_count
        );
        Ok(summary)
    }
}
