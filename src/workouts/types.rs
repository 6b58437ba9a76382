//! Logged workout types.
//!
//! A [`Workout`] is one dated session performed against a template. Its
//! exercise list is a snapshot of the template shape at logging time, so
//! later template edits never change what was recorded.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::templates::{Template, TemplateId};

/// Opaque workout identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(String);

impl WorkoutId {
    /// Wrap an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WorkoutId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Qualitative effort rating for a set.
///
/// Older data stored French labels; they are accepted on read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feel {
    #[serde(rename = "OK")]
    Ok,
    #[serde(alias = "Facile")]
    Easy,
    #[serde(alias = "Dur")]
    Hard,
    #[serde(alias = "Échec")]
    Failure,
    #[serde(alias = "Douleurs")]
    Pain,
}

impl Feel {
    /// All ratings in picker order.
    pub const ALL: [Feel; 5] = [Feel::Ok, Feel::Easy, Feel::Hard, Feel::Failure, Feel::Pain];

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Feel::Ok => "OK",
            Feel::Easy => "Easy",
            Feel::Hard => "Hard",
            Feel::Failure => "Failure",
            Feel::Pain => "Pain",
        }
    }
}

impl std::fmt::Display for Feel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One performed set. Every field may be left blank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SetEntry {
    /// Load in kilograms
    pub kg: Option<f64>,
    /// Repetitions
    pub reps: Option<f64>,
    /// Effort rating
    pub feel: Option<Feel>,
}

impl SetEntry {
    pub fn new(kg: Option<f64>, reps: Option<f64>, feel: Option<Feel>) -> Self {
        Self { kg, reps, feel }
    }

    /// A set counts as measured when it has a weight or a rep count.
    pub fn is_measured(&self) -> bool {
        self.kg.is_some() || self.reps.is_some()
    }
}

/// Snapshot of one template exercise with its performed sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggedExercise {
    /// Exercise name at logging time
    pub name: String,
    /// Performed sets, in order
    pub sets: Vec<SetEntry>,
}

impl LoggedExercise {
    /// Template-shaped snapshot with every set blank, ready to be filled in.
    pub fn blank_from(template: &Template) -> Vec<LoggedExercise> {
        template
            .exercises
            .iter()
            .map(|exercise| LoggedExercise {
                name: exercise.name.clone(),
                sets: vec![SetEntry::default(); exercise.sets as usize],
            })
            .collect()
    }
}

/// A logged session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    /// Unique identifier
    pub id: WorkoutId,
    /// Template this session was performed against (may dangle)
    pub template_id: TemplateId,
    /// Calendar day of the session
    pub date: NaiveDate,
    /// Logging timestamp in epoch milliseconds (0 when unknown)
    #[serde(default)]
    pub created_at: i64,
    /// Exercise snapshot
    pub exercises: Vec<LoggedExercise>,
}

impl Workout {
    /// Whether at least one set has a weight or rep count.
    pub fn has_measured_set(&self) -> bool {
        has_measured_set(&self.exercises)
    }

    /// Number of measured sets in the session.
    pub fn measured_sets(&self) -> usize {
        self.exercises
            .iter()
            .flat_map(|e| e.sets.iter())
            .filter(|s| s.is_measured())
            .count()
    }
}

pub(crate) fn has_measured_set(exercises: &[LoggedExercise]) -> bool {
    exercises
        .iter()
        .any(|e| e.sets.iter().any(SetEntry::is_measured))
}
