//! Integration tests for the full logging flow against an on-disk database.
//!
//! Tests the end-to-end flow:
//! 1. Create templates
//! 2. Log sessions against them
//! 3. Reopen the database and read the history back
//! 4. Delete a template and check the cascade

use chrono::NaiveDate;
use liftlog::ids::{FixedClock, SequentialIds};
use liftlog::storage::{Database, PlanningSettings};
use liftlog::templates::{Category, ExerciseSpec};
use liftlog::workouts::{Feel, LoggedExercise, SetEntry};
use liftlog::{Tracker, YearMonth};
use tempfile::TempDir;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn open(path: &std::path::Path, today: &str) -> Tracker<Database> {
    Tracker::with_parts(
        Database::open(path).expect("open database"),
        Box::new(SequentialIds::new()),
        Box::new(FixedClock::at(date(today))),
        PlanningSettings::default(),
    )
}

#[test]
fn test_history_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("liftlog.db");

    let template_id = {
        let tracker = open(&path, "2024-05-01");
        let template = tracker
            .templates()
            .create(
                "Push 1",
                Category::Push,
                vec![ExerciseSpec::new("Bench", 3), ExerciseSpec::new("Dips", 4)],
            )
            .unwrap();

        let mut snapshot = LoggedExercise::blank_from(&template);
        snapshot[0].sets[0] = SetEntry::new(Some(80.0), Some(8.0), Some(Feel::Ok));
        snapshot[0].sets[2] = SetEntry::new(Some(80.0), Some(5.0), Some(Feel::Failure));
        tracker
            .workouts()
            .create(&template.id, date("2024-05-01"), snapshot)
            .unwrap();

        template.id
    };

    let tracker = open(&path, "2024-05-03");
    let last = tracker
        .progression()
        .last_for(&template_id)
        .unwrap()
        .expect("logged workout");

    assert_eq!(last.date, date("2024-05-01"));
    assert_eq!(last.exercises.len(), 2);
    assert_eq!(last.exercises[0].sets.len(), 3);
    assert_eq!(last.exercises[1].sets.len(), 4);
    assert_eq!(last.exercises[0].sets[2].feel, Some(Feel::Failure));
}

#[test]
fn test_cascade_delete_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("liftlog.db");
    let tracker = open(&path, "2024-05-10");

    let push = tracker
        .templates()
        .create("Push 1", Category::Push, vec![ExerciseSpec::new("Bench", 1)])
        .unwrap();
    let legs = tracker
        .templates()
        .create("Legs 1", Category::Legs, vec![ExerciseSpec::new("Squat", 1)])
        .unwrap();

    let one_set = |kg| {
        vec![LoggedExercise {
            name: "Lift".to_string(),
            sets: vec![SetEntry::new(Some(kg), Some(5.0), None)],
        }]
    };

    for day in ["2024-05-01", "2024-05-03", "2024-05-06"] {
        tracker.workouts().create(&push.id, date(day), one_set(60.0)).unwrap();
    }
    let legs_workout = tracker
        .workouts()
        .create(&legs.id, date("2024-05-03"), one_set(100.0))
        .unwrap();

    assert!(tracker.templates().delete(&push.id).unwrap());

    let remaining = tracker.workouts().list_all().unwrap();
    assert_eq!(remaining, vec![legs_workout]);
    assert!(tracker.workouts().by_template(&push.id).unwrap().is_empty());

    let month: YearMonth = "2024-05".parse().unwrap();
    let summary = tracker.stats().month_summary(month).unwrap();
    assert_eq!(summary.monthly_count, 1);
    assert_eq!(summary.categories.push, 0);
    assert_eq!(summary.categories.legs, 1);
}

#[test]
fn test_day_details_and_workout_delete() {
    let dir = TempDir::new().unwrap();
    let tracker = open(&dir.path().join("liftlog.db"), "2024-05-06");

    let pull = tracker
        .templates()
        .create("Pull 1", Category::Pull, vec![ExerciseSpec::new("Rows", 2)])
        .unwrap();

    let mut snapshot = LoggedExercise::blank_from(&pull);
    snapshot[0].sets[0] = SetEntry::new(None, Some(12.0), None);

    let morning = tracker.workouts().create_today(&pull.id, snapshot.clone()).unwrap();
    let evening = tracker.workouts().create_today(&pull.id, snapshot).unwrap();

    let entries = tracker.day_details().details_for(date("2024-05-06")).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].workout_id, evening.id);
    assert_eq!(entries[1].workout_id, morning.id);
    assert_eq!(entries[0].template_name, "Pull 1");
    assert_eq!(entries[0].category_label(), "PULL");

    assert!(tracker.workouts().delete(&evening.id).unwrap());
    let entries = tracker.day_details().details_for(date("2024-05-06")).unwrap();
    assert_eq!(entries.len(), 1);

    let grid = tracker
        .calendar(tracker.current_month(), Some(date("2024-05-06")))
        .unwrap();
    assert_eq!(grid.cells().iter().filter(|c| c.is_hit()).count(), 1);
}
