use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::Serialize;

use advisor_core::ai::RecommendationSet;
use advisor_core::holdings::{Holding, HoldingServiceTrait, NewHolding, UpdateHolding};

use crate::{error::ApiResult, main_lib::AppState};

/// A holding plus the derived figures every client wants alongside it.
/// Stored recommendations are decoded into a structured object.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HoldingResponse {
    #[serde(flatten)]
    holding: Holding,
    recommendations: Option<RecommendationSet>,
    market_value: f64,
    invested_value: f64,
    profit_loss: f64,
}

impl From<Holding> for HoldingResponse {
    fn from(holding: Holding) -> Self {
        HoldingResponse {
            recommendations: holding.parsed_recommendations(),
            market_value: holding.market_value(),
            invested_value: holding.invested_value(),
            profit_loss: holding.profit_loss(),
            holding,
        }
    }
}

async fn get_holdings(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<HoldingResponse>>> {
    let holdings = state.holding_service.get_holdings()?;
    Ok(Json(holdings.into_iter().map(Into::into).collect()))
}

async fn get_holding(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<HoldingResponse>> {
    let holding = state.holding_service.get_holding(&id)?;
    Ok(Json(holding.into()))
}

async fn create_holding(
    State(state): State<Arc<AppState>>,
    Json(mut new_holding): Json<NewHolding>,
) -> ApiResult<(StatusCode, Json<HoldingResponse>)> {
    // Fill the live price on a best-effort basis when the client omits it.
    if new_holding.current_price.is_none() {
        match state.market_service.fetch_price_f64(&new_holding.symbol).await {
            Ok(price) => new_holding.current_price = Some(price),
            Err(e) => {
                tracing::warn!("initial price lookup failed for {}: {}", new_holding.symbol, e);
            }
        }
    }

    let holding = state.holding_service.create_holding(new_holding).await?;
    Ok((StatusCode::CREATED, Json(holding.into())))
}

async fn update_holding(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<UpdateHolding>,
) -> ApiResult<Json<HoldingResponse>> {
    let holding = state.holding_service.update_holding(&id, update).await?;
    Ok(Json(holding.into()))
}

async fn delete_holding(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let _ = state.holding_service.delete_holding(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn refresh_price(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<HoldingResponse>> {
    let holding = state
        .holding_service
        .refresh_price(&id, &state.market_service)
        .await?;
    Ok(Json(holding.into()))
}

async fn analyze_holding(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<HoldingResponse>> {
    let ai = state.ai()?;
    let holding = state
        .holding_service
        .analyze_holding(&id, &state.market_service, ai)
        .await?;
    Ok(Json(holding.into()))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/holdings", get(get_holdings).post(create_holding))
        .route(
            "/holdings/{id}",
            get(get_holding).put(update_holding).delete(delete_holding),
        )
        .route("/holdings/{id}/price", put(refresh_price))
        .route("/holdings/{id}/analyze", post(analyze_holding))
}
