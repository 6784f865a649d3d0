use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use advisor_core::preferences::{PreferencesPayload, PreferencesResponse, PreferencesServiceTrait};

use crate::{error::ApiResult, main_lib::AppState};

async fn get_preferences(
    Path(email): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PreferencesResponse>> {
    let prefs = state.preferences_service.get_preferences(&email)?;
    Ok(Json(PreferencesResponse::from(&prefs)))
}

/// Create-or-replace, keyed by email.
async fn upsert_preferences(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<PreferencesPayload>,
) -> ApiResult<Json<PreferencesResponse>> {
    let prefs = state.preferences_service.upsert_preferences(payload).await?;
    Ok(Json(PreferencesResponse::from(&prefs)))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/preferences", post(upsert_preferences))
        .route("/preferences/{email}", get(get_preferences))
}
