//! Unit tests for "last time" hints after template edits.

use chrono::NaiveDate;
use liftlog::ids::{FixedClock, SequentialIds};
use liftlog::storage::MemoryStore;
use liftlog::templates::{Category, ExerciseSpec, TemplateStore};
use liftlog::workouts::{Feel, LoggedExercise, ProgressionLookup, SetEntry, WorkoutStore};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
}

#[test]
fn test_snapshot_survives_template_edit() {
    let store = MemoryStore::new();
    let ids = SequentialIds::new();
    let clock = FixedClock::at(day(1));
    let templates = TemplateStore::new(&store, &ids);
    let workouts = WorkoutStore::new(&store, &ids, &clock);

    let template = templates
        .create(
            "Push 1",
            Category::Push,
            vec![ExerciseSpec::new("Bench", 3), ExerciseSpec::new("Dips", 4)],
        )
        .unwrap();

    let mut snapshot = LoggedExercise::blank_from(&template);
    snapshot[1].sets[3] = SetEntry::new(Some(10.0), Some(12.0), Some(Feel::Easy));
    let logged = workouts.create(&template.id, day(1), snapshot).unwrap();

    templates
        .update(
            &template.id,
            "Push 1",
            Category::Push,
            vec![
                ExerciseSpec::new("Bench", 5),
                ExerciseSpec::new("Dips", 2),
                ExerciseSpec::new("Flyes", 3),
            ],
        )
        .unwrap();

    let stored = workouts.by_template(&template.id).unwrap();
    assert_eq!(stored, vec![logged]);
    assert_eq!(stored[0].exercises.len(), 2);
    assert_eq!(stored[0].exercises[0].sets.len(), 3);
    assert_eq!(stored[0].exercises[1].sets.len(), 4);
}

#[test]
fn test_hints_for_grown_template_resolve_to_no_data() {
    let store = MemoryStore::new();
    let ids = SequentialIds::new();
    let clock = FixedClock::at(day(1));
    let templates = TemplateStore::new(&store, &ids);
    let workouts = WorkoutStore::new(&store, &ids, &clock);

    let template = templates
        .create("Legs 1", Category::Legs, vec![ExerciseSpec::new("Squat", 2)])
        .unwrap();

    let mut snapshot = LoggedExercise::blank_from(&template);
    snapshot[0].sets[0] = SetEntry::new(Some(100.0), Some(5.0), Some(Feel::Hard));
    snapshot[0].sets[1] = SetEntry::new(Some(100.0), Some(4.0), Some(Feel::Failure));
    workouts.create(&template.id, day(2), snapshot).unwrap();

    let grown = templates
        .update(
            &template.id,
            "Legs 1",
            Category::Legs,
            vec![ExerciseSpec::new("Squat", 3), ExerciseSpec::new("Lunge", 2)],
        )
        .unwrap();

    let progression = ProgressionLookup::new(&store)
        .progression_for(&grown.id)
        .unwrap();

    assert_eq!(progression.hint(0, 1).to_string(), "100 kg × 4 reps");
    assert_eq!(progression.hint(0, 1).feel_label(), "Failure");
    assert!(progression.hint(0, 2).is_empty());
    assert!(progression.hint(1, 0).is_empty());
    assert_eq!(progression.hint(1, 1).to_string(), "— kg × — reps");
}

#[test]
fn test_last_for_ignores_insertion_order() {
    let store = MemoryStore::new();
    let ids = SequentialIds::new();
    let clock = FixedClock::at(day(10));
    let workouts = WorkoutStore::new(&store, &ids, &clock);

    let squat = |kg| {
        vec![LoggedExercise {
            name: "Squat".to_string(),
            sets: vec![SetEntry::new(Some(kg), Some(5.0), None)],
        }]
    };

    let newer = workouts.create(&"t1".into(), day(3), squat(105.0)).unwrap();
    workouts.create(&"t1".into(), day(1), squat(100.0)).unwrap();

    let last = ProgressionLookup::new(&store).last_for(&"t1".into()).unwrap();
    assert_eq!(last, Some(newer));
}
