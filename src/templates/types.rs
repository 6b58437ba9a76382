//! Workout template type definitions.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{TrackerError, TrackerResult};

/// Opaque template identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TemplateId(String);

impl TemplateId {
    /// Wrap an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TemplateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TemplateId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Push/pull/legs split category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Chest, shoulders, triceps
    Push,
    /// Back, biceps
    Pull,
    /// Lower body
    Legs,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 3] = [Category::Push, Category::Pull, Category::Legs];

    /// Storage key, as persisted.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Push => "push",
            Category::Pull => "pull",
            Category::Legs => "legs",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Push => write!(f, "PUSH"),
            Category::Pull => write!(f, "PULL"),
            Category::Legs => write!(f, "LEGS"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TrackerError::validation(format!("Unknown category: {wanted}")))
    }
}

/// One exercise line of a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSpec {
    /// Exercise name
    pub name: String,
    /// Target number of sets (>= 1)
    #[serde(deserialize_with = "whole_sets")]
    pub sets: u32,
}

/// Older data may hold any JSON number here; the fraction is dropped.
fn whole_sets<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = f64::deserialize(deserializer)?;
    if value.is_finite() && value > 0.0 {
        Ok(value.trunc().min(u32::MAX as f64) as u32)
    } else {
        Ok(0)
    }
}

impl ExerciseSpec {
    pub fn new(name: impl Into<String>, sets: u32) -> Self {
        Self {
            name: name.into(),
            sets,
        }
    }
}

/// A reusable workout routine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Unique identifier, immutable
    pub id: TemplateId,
    /// Display name
    pub name: String,
    /// PPL category
    pub category: Category,
    /// Exercises in display order
    pub exercises: Vec<ExerciseSpec>,
}

impl Template {
    /// Build a template, rejecting input that breaks its invariants.
    ///
    /// The name and exercise names are trimmed before they are stored.
    pub fn new(
        id: TemplateId,
        name: &str,
        category: Category,
        exercises: Vec<ExerciseSpec>,
    ) -> TrackerResult<Self> {
        let (name, exercises) = Self::validated(name, exercises)?;
        Ok(Self {
            id,
            name,
            category,
            exercises,
        })
    }

    /// Check and normalize a name and exercise list.
    pub(crate) fn validated(
        name: &str,
        exercises: Vec<ExerciseSpec>,
    ) -> TrackerResult<(String, Vec<ExerciseSpec>)> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackerError::validation("Template name cannot be empty"));
        }
        if exercises.is_empty() {
            return Err(TrackerError::validation(
                "Template needs at least one exercise",
            ));
        }

        let mut normalized = Vec::with_capacity(exercises.len());
        for (index, exercise) in exercises.into_iter().enumerate() {
            let exercise_name = exercise.name.trim();
            if exercise_name.is_empty() {
                return Err(TrackerError::validation(format!(
                    "Exercise {} has no name",
                    index + 1
                )));
            }
            if exercise.sets < 1 {
                return Err(TrackerError::validation(format!(
                    "Exercise '{exercise_name}' must have at least one set"
                )));
            }
            normalized.push(ExerciseSpec::new(exercise_name, exercise.sets));
        }

        Ok((name.to_string(), normalized))
    }

    /// Total number of sets across all exercises.
    pub fn total_sets(&self) -> u32 {
        self.exercises.iter().map(|e| e.sets).sum()
    }

    /// List caption, e.g. `PUSH • 3 exos`.
    pub fn summary(&self) -> String {
        format!("{} • {} exos", self.category, self.exercises.len())
    }
}
