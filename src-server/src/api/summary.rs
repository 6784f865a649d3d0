use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use advisor_core::preferences::PreferencesServiceTrait;
use advisor_core::summary::{format_summary_email, DailySummary};

use crate::{error::ApiResult, main_lib::AppState};

async fn get_summary(
    Path(email): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<DailySummary>> {
    let prefs = state.preferences_service.get_preferences(&email)?;
    let summary = state.summary_service.generate(&prefs).await?;
    Ok(Json(summary))
}

/// Generate and email the summary. Delivery happens in a spawned task; the
/// response only confirms the send was queued.
async fn send_summary(
    Path(email): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let sender = state.mailer()?.clone();
    let prefs = state.preferences_service.get_preferences(&email)?;
    let summary = state.summary_service.generate(&prefs).await?;

    tokio::spawn(async move {
        let body = format_summary_email(&summary);
        if let Err(e) = sender
            .send_html(&prefs.email, "Your Daily Portfolio Summary", body)
            .await
        {
            tracing::error!("summary delivery failed for {}: {}", prefs.email, e);
        }
    });

    Ok((
        StatusCode::ACCEPTED,
        Json(json!({ "message": format!("Summary queued for {}", email) })),
    ))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/summary/{email}", get(get_summary))
        .route("/summary/send/{email}", post(send_summary))
}
