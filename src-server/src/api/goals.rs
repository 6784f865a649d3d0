use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;

use advisor_core::goals::{Goal, GoalProgress, GoalServiceTrait, NewGoal};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GoalResponse {
    #[serde(flatten)]
    goal: Goal,
    progress_percent: f64,
}

fn to_response(goal: Goal, portfolio_value: f64) -> GoalResponse {
    let progress = GoalProgress::compute(&goal, portfolio_value);
    GoalResponse {
        goal,
        progress_percent: progress.progress_percent,
    }
}

async fn get_goals(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<GoalResponse>>> {
    let portfolio_value = state.holding_service.portfolio_value()?;
    let goals = state.goal_service.get_goals()?;
    Ok(Json(
        goals
            .into_iter()
            .map(|g| to_response(g, portfolio_value))
            .collect(),
    ))
}

async fn create_goal(
    State(state): State<Arc<AppState>>,
    Json(goal): Json<NewGoal>,
) -> ApiResult<(StatusCode, Json<GoalResponse>)> {
    let portfolio_value = state.holding_service.portfolio_value()?;
    let goal = state.goal_service.create_goal(goal).await?;
    Ok((StatusCode::CREATED, Json(to_response(goal, portfolio_value))))
}

async fn delete_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let _ = state.goal_service.delete_goal(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals", get(get_goals).post(create_goal))
        .route("/goals/{id}", delete(delete_goal))
}
