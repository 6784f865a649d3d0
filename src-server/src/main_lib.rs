//! Application state and router assembly.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use chrono::NaiveTime;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use advisor_core::ai::AiService;
use advisor_core::db;
use advisor_core::errors::{AiError, Error as CoreError};
use advisor_core::goals::{GoalService, SqliteGoalRepository};
use advisor_core::holdings::{HoldingService, SqliteHoldingRepository};
use advisor_core::market_data::{MarketDataService, YahooProvider};
use advisor_core::preferences::{PreferencesService, SqlitePreferencesRepository};
use advisor_core::summary::{EmailSender, SummaryService};
use advisor_core::wishlist::{SqliteWishlistRepository, WishlistService};

use crate::api;
use crate::config::Config;
use crate::error::{ApiError, ApiResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub struct AppState {
    pub holding_service: HoldingService<SqliteHoldingRepository>,
    pub goal_service: GoalService<SqliteGoalRepository>,
    pub wishlist_service: WishlistService<SqliteWishlistRepository>,
    pub preferences_service: PreferencesService<SqlitePreferencesRepository>,
    pub market_service: MarketDataService<YahooProvider>,
    pub ai_service: Option<Arc<AiService>>,
    pub summary_service:
        SummaryService<SqliteHoldingRepository, SqliteGoalRepository, SqliteWishlistRepository>,
    pub email_sender: Option<Arc<EmailSender>>,
    pub summary_time: NaiveTime,
}

impl AppState {
    /// The AI service, or an upstream error when no provider is configured.
    pub fn ai(&self) -> ApiResult<&Arc<AiService>> {
        self.ai_service
            .as_ref()
            .ok_or_else(|| ApiError(CoreError::Ai(AiError::MissingApiKey("AI"))))
    }

    /// The SMTP sender, or an upstream error when mail is not configured.
    pub fn mailer(&self) -> ApiResult<&Arc<EmailSender>> {
        self.email_sender
            .as_ref()
            .ok_or_else(|| ApiError(CoreError::Email(advisor_core::errors::EmailError::NotConfigured)))
    }
}

pub fn build_state(config: &Config) -> Result<Arc<AppState>> {
    let pool = Arc::new(
        db::create_pool(&config.database_url)
            .with_context(|| format!("opening database '{}'", config.database_url))?,
    );

    let holding_repo = Arc::new(SqliteHoldingRepository::new(pool.clone()));
    let goal_repo = Arc::new(SqliteGoalRepository::new(pool.clone()));
    let wishlist_repo = Arc::new(SqliteWishlistRepository::new(pool.clone()));
    let preferences_repo = Arc::new(SqlitePreferencesRepository::new(pool));

    let ai_service = match &config.ai {
        Some(ai_config) => Some(Arc::new(
            AiService::new(ai_config.clone()).context("building AI client")?,
        )),
        None => None,
    };

    let email_sender = match &config.smtp {
        Some(smtp) => Some(Arc::new(
            EmailSender::new(smtp).context("building SMTP transport")?,
        )),
        None => None,
    };

    let provider = YahooProvider::new().context("building Yahoo Finance client")?;

    let summary_service = SummaryService::new(
        holding_repo.clone(),
        goal_repo.clone(),
        wishlist_repo.clone(),
        ai_service.clone(),
    );

    Ok(Arc::new(AppState {
        holding_service: HoldingService::new(holding_repo),
        goal_service: GoalService::new(goal_repo),
        wishlist_service: WishlistService::new(wishlist_repo),
        preferences_service: PreferencesService::new(preferences_repo),
        market_service: MarketDataService::new(provider, config.quote_cache_ttl),
        ai_service,
        summary_service,
        email_sender,
        summary_time: config.summary_time,
    }))
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "Portfolio Advisor API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn fallback() -> StatusCode {
    StatusCode::NOT_FOUND
}

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root))
        .nest("/api", api::router())
        .fallback(fallback)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn test_app() -> (Router, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            bind_addr: "127.0.0.1:0".to_string(),
            database_url: dir
                .path()
                .join("test.db")
                .to_string_lossy()
                .into_owned(),
            quote_cache_ttl: Duration::from_secs(60),
            summary_time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            ai: None,
            smtp: None,
        };
        let state = build_state(&config).unwrap();
        (app(state), dir)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn root_reports_name_and_version() {
        let (app, _dir) = test_app();
        let response = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Portfolio Advisor API");
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let (app, _dir) = test_app();
        let response = app
            .oneshot(Request::get("/api/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn holding_crud_over_http() {
        let (app, _dir) = test_app();

        let create = json_request(
            Method::POST,
            "/api/holdings",
            json!({
                "name": "Reliance Industries",
                "symbol": "RELIANCE",
                "type": "stock",
                "quantity": 10.0,
                "avgPrice": 2400.0,
                "currentPrice": 2500.0
            }),
        );
        let response = app.clone().oneshot(create).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let created = body_json(response).await;
        let id = created["id"].as_str().unwrap().to_string();
        assert_eq!(created["profitLoss"], json!(1000.0));

        let response = app
            .clone()
            .oneshot(Request::get("/api/holdings").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let listed = body_json(response).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);

        let response = app
            .clone()
            .oneshot(
                Request::delete(format!("/api/holdings/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(Request::get("/api/holdings").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let listed = body_json(response).await;
        assert!(listed.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn invalid_holding_is_rejected() {
        let (app, _dir) = test_app();

        let create = json_request(
            Method::POST,
            "/api/holdings",
            json!({
                "name": "",
                "symbol": "RELIANCE",
                "type": "stock",
                "quantity": 10.0,
                "avgPrice": 2400.0,
                "currentPrice": 2500.0
            }),
        );
        let response = app.oneshot(create).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_holding_is_404() {
        let (app, _dir) = test_app();
        let response = app
            .oneshot(
                Request::get("/api/holdings/no-such-id")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn analyze_without_ai_config_is_502() {
        let (app, _dir) = test_app();
        let response = app
            .oneshot(
                Request::post("/api/batch/analyze-all")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn preferences_upsert_round_trip() {
        let (app, _dir) = test_app();

        let upsert = json_request(
            Method::POST,
            "/api/preferences",
            json!({
                "email": "investor@example.com",
                "riskProfile": "aggressive",
                "preferredSectors": ["IT", "Banking"]
            }),
        );
        let response = app.clone().oneshot(upsert).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::get("/api/preferences/investor@example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["riskProfile"], "aggressive");
        assert_eq!(body["notificationTime"], "08:00");
        assert_eq!(body["preferredSectors"], json!(["IT", "Banking"]));
    }
}
