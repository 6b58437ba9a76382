//! Unit tests for attendance and category statistics.

use chrono::NaiveDate;
use liftlog::analytics::{StatsEngine, YearMonth};
use liftlog::ids::{FixedClock, SequentialIds};
use liftlog::storage::{MemoryStore, PlanningSettings};
use liftlog::templates::{Category, ExerciseSpec, Template, TemplateStore};
use liftlog::workouts::{LoggedExercise, SetEntry, WorkoutStore};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn filled(template: &Template) -> Vec<LoggedExercise> {
    let mut snapshot = LoggedExercise::blank_from(template);
    snapshot[0].sets[0] = SetEntry::new(Some(40.0), Some(10.0), None);
    snapshot
}

#[test]
fn test_month_without_sessions() {
    let store = MemoryStore::new();
    let settings = PlanningSettings::default();
    let stats = StatsEngine::new(&store, &settings);
    let month: YearMonth = "2024-05".parse().unwrap();

    assert_eq!(stats.monthly_count(month).unwrap(), 0);
    assert_eq!(stats.cost_per_session(month).unwrap(), None);

    let summary = stats.month_summary(month).unwrap();
    assert_eq!(summary.cost_label(&settings.currency), "—");
    assert_eq!(summary.categories.total(), 0);
}

#[test]
fn test_month_summary() {
    let store = MemoryStore::new();
    let ids = SequentialIds::new();
    let clock = FixedClock::at(date("2024-05-31"));
    let templates = TemplateStore::new(&store, &ids);
    let workouts = WorkoutStore::new(&store, &ids, &clock);

    let push = templates
        .create("Push 1", Category::Push, vec![ExerciseSpec::new("Bench", 3)])
        .unwrap();
    let push2 = templates
        .create("Push 2", Category::Push, vec![ExerciseSpec::new("Incline", 3)])
        .unwrap();
    let pull = templates
        .create("Pull 1", Category::Pull, vec![ExerciseSpec::new("Rows", 3)])
        .unwrap();

    // Two push sessions and a pull session on one day
    workouts.create(&push.id, date("2024-05-06"), filled(&push)).unwrap();
    workouts.create(&push2.id, date("2024-05-06"), filled(&push2)).unwrap();
    workouts.create(&pull.id, date("2024-05-06"), filled(&pull)).unwrap();
    workouts.create(&pull.id, date("2024-05-08"), filled(&pull)).unwrap();
    workouts.create(&push.id, date("2024-02-14"), filled(&push)).unwrap();

    let settings = PlanningSettings {
        monthly_fee: 30.0,
        currency: "€".to_string(),
    };
    let stats = StatsEngine::new(&store, &settings);
    let summary = stats.month_summary("2024-05".parse().unwrap()).unwrap();

    assert_eq!(summary.monthly_count, 2);
    assert_eq!(summary.yearly_count, 3);
    assert_eq!(summary.cost_per_session, Some(15.0));
    assert_eq!(summary.cost_label("€"), "15.00€");
    assert_eq!(summary.categories.push, 1);
    assert_eq!(summary.categories.pull, 2);
    assert_eq!(summary.categories.legs, 0);
}

#[test]
fn test_category_follows_current_template() {
    let store = MemoryStore::new();
    let ids = SequentialIds::new();
    let clock = FixedClock::at(date("2024-05-31"));
    let templates = TemplateStore::new(&store, &ids);
    let workouts = WorkoutStore::new(&store, &ids, &clock);

    let template = templates
        .create("Day A", Category::Push, vec![ExerciseSpec::new("Bench", 1)])
        .unwrap();
    workouts
        .create(&template.id, date("2024-05-06"), filled(&template))
        .unwrap();

    templates
        .update(&template.id, "Day A", Category::Legs, template.exercises.clone())
        .unwrap();

    let settings = PlanningSettings::default();
    let counts = StatsEngine::new(&store, &settings)
        .category_counts("2024-05".parse().unwrap())
        .unwrap();
    assert_eq!(counts.push, 0);
    assert_eq!(counts.legs, 1);
}
