//! AI recommendation layer.
//!
//! One configured provider (Claude or Groq) answers two kinds of prompts:
//! a per-holding BUY/HOLD/SELL call across six fixed horizons, and a short
//! list of new stock ideas for the daily summary. No retry policy; a
//! provider failure is surfaced to the caller.

pub mod claude;
pub mod groq;
pub mod models;
pub mod parsing;
pub mod prompts;

pub use models::{Opportunity, Recommendation, RecommendationAction, RecommendationSet, TimeHorizon};

use std::str::FromStr;
use std::time::Duration;

use crate::errors::{AiError, Error, Result, ValidationError};
use crate::holdings::holdings_model::Holding;

const REQUEST_TIMEOUT_SECS: u64 = 30;
const ANALYSIS_MAX_TOKENS: u32 = 3000;
const OPPORTUNITY_MAX_TOKENS: u32 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiProvider {
    Claude,
    Groq,
}

impl FromStr for AiProvider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "claude" | "anthropic" => Ok(AiProvider::Claude),
            "groq" => Ok(AiProvider::Groq),
            other => Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Unknown AI provider '{}'",
                other
            )))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AiConfig {
    pub provider: AiProvider,
    pub api_key: String,
    pub model: String,
}

impl AiConfig {
    pub fn new(provider: AiProvider, api_key: String, model: Option<String>) -> Self {
        let model = model.unwrap_or_else(|| match provider {
            AiProvider::Claude => "claude-sonnet-4-20250514".to_string(),
            AiProvider::Groq => "llama-3.3-70b-versatile".to_string(),
        });
        Self {
            provider,
            api_key,
            model,
        }
    }
}

pub struct AiService {
    config: AiConfig,
    client: reqwest::Client,
}

impl AiService {
    pub fn new(config: AiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| {
                Error::Ai(AiError::RequestFailed {
                    provider: "ai",
                    reason: e.to_string(),
                })
            })?;
        Ok(Self { config, client })
    }

    fn provider_name(&self) -> &'static str {
        match self.config.provider {
            AiProvider::Claude => claude::PROVIDER,
            AiProvider::Groq => groq::PROVIDER,
        }
    }

    async fn complete(&self, prompt: &str, max_tokens: u32) -> Result<String> {
        if self.config.api_key.is_empty() {
            return Err(Error::Ai(AiError::MissingApiKey(self.provider_name())));
        }

        let text = match self.config.provider {
            AiProvider::Claude => {
                claude::complete(
                    &self.client,
                    &self.config.api_key,
                    &self.config.model,
                    max_tokens,
                    prompt,
                )
                .await?
            }
            AiProvider::Groq => {
                groq::complete(
                    &self.client,
                    &self.config.api_key,
                    &self.config.model,
                    max_tokens,
                    prompt,
                )
                .await?
            }
        };

        Ok(text)
    }

    /// One BUY/HOLD/SELL recommendation per horizon for a holding.
    pub async fn analyze_holding(&self, holding: &Holding) -> Result<RecommendationSet> {
        let prompt = prompts::build_analysis_prompt(holding);
        let text = self.complete(&prompt, ANALYSIS_MAX_TOKENS).await?;
        let set = parsing::parse_recommendations(self.provider_name(), &text)?;
        Ok(set)
    }

    /// New stock ideas for the user's risk profile. Used by the daily
    /// summary, where failures degrade to an empty list at the call site.
    pub async fn suggest_opportunities(
        &self,
        risk_profile: &str,
        preferred_sectors: &[String],
    ) -> Result<Vec<Opportunity>> {
        let prompt = prompts::build_opportunity_prompt(risk_profile, preferred_sectors);
        let text = self.complete(&prompt, OPPORTUNITY_MAX_TOKENS).await?;
        let json = parsing::extract_json(&text);
        let opportunities: Vec<Opportunity> =
            serde_json::from_str(&json).map_err(|e| {
                Error::Ai(AiError::MalformedResponse {
                    provider: self.provider_name(),
                    reason: e.to_string(),
                })
            })?;
        Ok(opportunities)
    }
}
