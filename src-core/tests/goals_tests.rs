//! Goal validation and progress calculation.

use std::sync::Arc;

use advisor_core::db;
use advisor_core::goals::{
    Goal, GoalProgress, GoalService, GoalServiceTrait, NewGoal, SqliteGoalRepository,
};

fn new_goal(name: &str, target: f64) -> NewGoal {
    NewGoal {
        name: name.to_string(),
        target_amount: target,
        current_amount: 0.0,
        time_horizon: "3-5y".to_string(),
        priority: "high".to_string(),
    }
}

#[test]
fn progress_is_percentage_of_target() {
    let goal = Goal::from_new(new_goal("House deposit", 1_000_000.0));
    let progress = GoalProgress::compute(&goal, 250_000.0);

    assert_eq!(progress.progress_percent, 25.0);
    assert_eq!(progress.current, 250_000.0);
    assert_eq!(progress.target, 1_000_000.0);
}

#[test]
fn progress_grows_with_portfolio_value() {
    let goal = Goal::from_new(new_goal("House deposit", 1_000_000.0));

    let mut last = 0.0;
    for value in [0.0, 100_000.0, 500_000.0, 999_999.0, 1_500_000.0] {
        let progress = GoalProgress::compute(&goal, value).progress_percent;
        assert!(progress >= last, "progress fell from {} to {}", last, progress);
        last = progress;
    }
}

#[test]
fn progress_can_exceed_100_percent() {
    let goal = Goal::from_new(new_goal("Emergency fund", 100_000.0));
    let progress = GoalProgress::compute(&goal, 150_000.0);
    assert_eq!(progress.progress_percent, 150.0);
}

#[test]
fn manual_contribution_floors_progress() {
    let mut new = new_goal("Retirement", 1_000_000.0);
    new.current_amount = 400_000.0;
    let goal = Goal::from_new(new);

    // A smaller live portfolio does not undercut the recorded amount.
    let progress = GoalProgress::compute(&goal, 100_000.0);
    assert_eq!(progress.current, 400_000.0);
    assert_eq!(progress.progress_percent, 40.0);
}

#[test]
fn validation_rejects_bad_input() {
    assert!(new_goal("", 1000.0).validate().is_err());
    assert!(new_goal("House", 0.0).validate().is_err());
    assert!(new_goal("House", -10.0).validate().is_err());

    let mut bad_priority = new_goal("House", 1000.0);
    bad_priority.priority = "urgent".to_string();
    assert!(bad_priority.validate().is_err());

    assert!(new_goal("House", 1000.0).validate().is_ok());
}

#[tokio::test]
async fn deleted_goal_disappears_from_list() {
    let dir = tempfile::tempdir().unwrap();
    let url = dir.path().join("test.db").to_string_lossy().into_owned();
    let pool = Arc::new(db::create_pool(&url).unwrap());
    let service = GoalService::new(Arc::new(SqliteGoalRepository::new(pool)));

    let goal = service.create_goal(new_goal("House", 1000.0)).await.unwrap();
    assert_eq!(service.get_goals().unwrap().len(), 1);

    service.delete_goal(goal.id).await.unwrap();
    assert!(service.get_goals().unwrap().is_empty());
}
