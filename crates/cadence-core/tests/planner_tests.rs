mod common;

use std::sync::Arc;

use cadence_core::{
    collaborators::{CalendarLog, StaticGenerator},
    parse_subtasks, store, PlannerBuilder, Schedule, ScheduleBuilder,
};
use common::{create_test_environment, sample_goal, sample_schedule, ts};

const PLAN_TEXT: &str = "1. Buy domain\n2. Write content\nSome heading\n3. Publish site";

#[test]
fn test_parse_numbered_plan() {
    let subtasks = parse_subtasks(PLAN_TEXT, &sample_goal());

    let descriptions: Vec<&str> = subtasks.iter().map(|s| s.description.as_str()).collect();
    assert_eq!(
        descriptions,
        vec!["1. Buy domain", "2. Write content", "3. Publish site"]
    );
    let orders: Vec<u32> = subtasks.iter().map(|s| s.order).collect();
    assert_eq!(orders, vec![1, 2, 3]);
    assert!(subtasks.iter().all(|s| s.goal_title == "Launch site"));
}

#[tokio::test]
async fn test_empty_text_yields_persistable_empty_schedule() {
    let (_temp_dir, path) = create_test_environment();
    let goal = sample_goal();

    let subtasks = parse_subtasks("", &goal);
    assert!(subtasks.is_empty());

    let timed = ScheduleBuilder::new()
        .build(&Schedule::new(goal, subtasks), ts("2024-01-01T09:00:00Z"))
        .expect("Failed to build schedule");
    assert!(timed.is_empty());

    store::save(&path, &timed).await.expect("Failed to save");
    assert!(store::load(&path).await.expect("Failed to load").is_empty());
}

#[test]
fn test_sequential_time_blocks() {
    let timed = ScheduleBuilder::new()
        .build(&sample_schedule(), ts("2024-01-01T09:00:00Z"))
        .expect("Failed to build schedule");

    let blocks: Vec<_> = timed
        .ordered()
        .iter()
        .map(|s| s.time_block().expect("subtask should be timed"))
        .collect();
    assert_eq!(
        blocks,
        vec![
            (ts("2024-01-01T09:00:00Z"), ts("2024-01-01T09:15:00Z")),
            (ts("2024-01-01T09:15:00Z"), ts("2024-01-01T09:45:00Z")),
            (ts("2024-01-01T09:45:00Z"), ts("2024-01-01T10:15:00Z")),
        ]
    );
}

#[tokio::test]
async fn test_complete_run_workflow() {
    let (_temp_dir, path) = create_test_environment();
    let planner = PlannerBuilder::new()
        .with_generator(Arc::new(StaticGenerator::new(PLAN_TEXT)))
        .with_notifier(Arc::new(CalendarLog::new(std::time::Duration::ZERO)))
        .build()
        .expect("Failed to create planner");

    let outcome = planner
        .run(&sample_goal(), ts("2024-01-01T09:00:00Z"), &path)
        .await
        .expect("Failed to run planner");

    assert!(outcome.report.is_clean());
    assert_eq!(outcome.report.notified, 3);
    assert_eq!(outcome.report.skipped, 0);
    assert!(outcome.schedule.is_time_blocked());
    assert_eq!(
        outcome.schedule.ordered()[2].scheduled_end,
        Some(ts("2024-01-01T10:30:00Z"))
    );

    let record = store::load_record(&path).await.expect("Failed to load record");
    assert_eq!(record.schedule, outcome.schedule);
    assert_eq!(outcome.report.saved.as_ref().ok(), Some(&record.saved_at));
}
