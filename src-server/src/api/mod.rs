use std::sync::Arc;

use axum::Router;

use crate::main_lib::AppState;

pub mod goals;
pub mod holdings;
pub mod market;
pub mod preferences;
pub mod summary;
pub mod wishlist;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(holdings::router())
        .merge(goals::router())
        .merge(wishlist::router())
        .merge(preferences::router())
        .merge(summary::router())
        .merge(market::router())
}
