use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

mod api;
mod config;
mod error;
mod main_lib;
mod scheduler;

use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let state = main_lib::build_state(&config)?;

    scheduler::spawn_daily_summary(state.clone());

    let app = main_lib::app(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;

    tracing::info!("listening on {}", config.bind_addr);
    axum::serve(listener, app).await.context("serving HTTP")?;

    Ok(())
}
