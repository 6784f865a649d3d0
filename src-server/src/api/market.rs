use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use advisor_core::holdings::{AnalyzeReport, PriceRefreshReport};

use crate::{error::ApiResult, main_lib::AppState};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchPriceResponse {
    #[serde(flatten)]
    holdings: PriceRefreshReport,
    wishlist_updated: usize,
}

/// Refresh every holding and wishlist price. Failed symbols are reported,
/// not fatal.
async fn update_prices(State(state): State<Arc<AppState>>) -> ApiResult<Json<BatchPriceResponse>> {
    let holdings = state
        .holding_service
        .refresh_all_prices(&state.market_service)
        .await?;
    let wishlist_updated = state
        .wishlist_service
        .refresh_prices(&state.market_service)
        .await?;

    Ok(Json(BatchPriceResponse {
        holdings,
        wishlist_updated,
    }))
}

async fn analyze_all(State(state): State<Arc<AppState>>) -> ApiResult<Json<AnalyzeReport>> {
    let ai = state.ai()?;
    let report = state
        .holding_service
        .analyze_all(&state.market_service, ai)
        .await?;
    Ok(Json(report))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/batch/update-prices", post(update_prices))
        .route("/batch/analyze-all", post(analyze_all))
}
