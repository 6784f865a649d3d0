//! Anthropic Claude provider (messages API).

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use crate::errors::AiError;

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

pub const PROVIDER: &str = "Claude";

#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    text: Option<String>,
}

/// Send a prompt and return the raw text of the first content block.
pub async fn complete(
    client: &reqwest::Client,
    api_key: &str,
    model: &str,
    max_tokens: u32,
    prompt: &str,
) -> Result<String, AiError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        "x-api-key",
        HeaderValue::from_str(api_key).map_err(|_| AiError::MissingApiKey(PROVIDER))?,
    );
    headers.insert("anthropic-version", HeaderValue::from_static(ANTHROPIC_VERSION));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let request = MessagesRequest {
        model,
        max_tokens,
        messages: vec![Message {
            role: "user",
            content: prompt,
        }],
    };

    let response = client
        .post(API_URL)
        .headers(headers)
        .json(&request)
        .send()
        .await
        .map_err(|e| AiError::RequestFailed {
            provider: PROVIDER,
            reason: e.to_string(),
        })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AiError::Api {
            provider: PROVIDER,
            status: status.as_u16(),
            body: truncate(&body, 200),
        });
    }

    let data: MessagesResponse = response.json().await.map_err(|e| AiError::MalformedResponse {
        provider: PROVIDER,
        reason: e.to_string(),
    })?;

    data.content
        .first()
        .and_then(|c| c.text.clone())
        .ok_or_else(|| AiError::MalformedResponse {
            provider: PROVIDER,
            reason: "empty content".to_string(),
        })
}

fn truncate(body: &str, limit: usize) -> String {
    if body.len() > limit {
        body.chars().take(limit).collect()
    } else {
        body.to_string()
    }
}
