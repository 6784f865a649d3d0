//! Environment configuration. Everything comes from env vars (plus a
//! `.env` file in development via dotenvy).

use std::env;
use std::str::FromStr;
use std::time::Duration;

use advisor_core::ai::{AiConfig, AiProvider};
use advisor_core::summary::SmtpConfig;
use anyhow::{Context, Result};
use chrono::NaiveTime;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_DATABASE_URL: &str = "portfolio.db";
const DEFAULT_SUMMARY_TIME: &str = "08:00";
const DEFAULT_QUOTE_CACHE_TTL_SECS: u64 = 300;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub database_url: String,
    pub quote_cache_ttl: Duration,
    /// Wall-clock time of the daily summary run.
    pub summary_time: NaiveTime,
    pub ai: Option<AiConfig>,
    pub smtp: Option<SmtpConfig>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let quote_cache_ttl = env::var("QUOTE_CACHE_TTL_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_QUOTE_CACHE_TTL_SECS));

        let summary_time_raw =
            env::var("SUMMARY_TIME").unwrap_or_else(|_| DEFAULT_SUMMARY_TIME.to_string());
        let summary_time = NaiveTime::parse_from_str(&summary_time_raw, "%H:%M")
            .with_context(|| format!("SUMMARY_TIME '{}' is not HH:MM", summary_time_raw))?;

        Ok(Config {
            bind_addr,
            database_url,
            quote_cache_ttl,
            summary_time,
            ai: ai_from_env()?,
            smtp: smtp_from_env(),
        })
    }
}

fn ai_from_env() -> Result<Option<AiConfig>> {
    let provider_raw = match env::var("AI_PROVIDER") {
        Ok(v) if !v.is_empty() => v,
        _ => return Ok(None),
    };
    let provider = AiProvider::from_str(&provider_raw)
        .with_context(|| format!("AI_PROVIDER '{}' is not supported", provider_raw))?;

    let key_var = match provider {
        AiProvider::Claude => "ANTHROPIC_API_KEY",
        AiProvider::Groq => "GROQ_API_KEY",
    };
    let api_key = env::var(key_var)
        .with_context(|| format!("{} must be set when AI_PROVIDER is configured", key_var))?;

    let model = env::var("AI_MODEL").ok().filter(|m| !m.is_empty());

    Ok(Some(AiConfig::new(provider, api_key, model)))
}

fn smtp_from_env() -> Option<SmtpConfig> {
    let username = env::var("SMTP_USERNAME").ok().filter(|v| !v.is_empty())?;
    let password = env::var("SMTP_PASSWORD").ok().filter(|v| !v.is_empty())?;

    Some(SmtpConfig {
        host: env::var("SMTP_SERVER").unwrap_or_else(|_| "smtp.gmail.com".to_string()),
        port: env::var("SMTP_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(587),
        username,
        password,
        from: env::var("SMTP_FROM").ok().filter(|v| !v.is_empty()),
    })
}
