use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};

use advisor_core::wishlist::{NewWishlistItem, WishlistAlert, WishlistItem, WishlistServiceTrait};

use crate::{error::ApiResult, main_lib::AppState};

async fn get_wishlist(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<WishlistItem>>> {
    let items = state.wishlist_service.get_items()?;
    Ok(Json(items))
}

async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(item): Json<NewWishlistItem>,
) -> ApiResult<(StatusCode, Json<WishlistItem>)> {
    let item = state.wishlist_service.create_item(item).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

async fn delete_item(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    let _ = state.wishlist_service.delete_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Items whose target entry price has been reached, checked against a fresh
/// price pass so stale stored prices do not mask an alert.
async fn get_alerts(State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<WishlistAlert>>> {
    state
        .wishlist_service
        .refresh_prices(&state.market_service)
        .await?;
    let alerts = state.wishlist_service.alerts()?;
    Ok(Json(alerts))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/wishlist", get(get_wishlist).post(create_item))
        .route("/wishlist/{id}", delete(delete_item))
        .route("/wishlist/alerts", get(get_alerts))
}
