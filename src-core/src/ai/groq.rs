//! Groq provider (OpenAI-compatible chat completions API).

use serde::{Deserialize, Serialize};

use crate::errors::AiError;

const API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

pub const PROVIDER: &str = "Groq";

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Send a prompt and return the raw text of the first choice.
pub async fn complete(
    client: &reqwest::Client,
    api_key: &str,
    model: &str,
    max_tokens: u32,
    prompt: &str,
) -> Result<String, AiError> {
    let request = ChatRequest {
        model,
        max_tokens,
        messages: vec![ChatMessage {
            role: "user",
            content: prompt,
        }],
    };

    let response = client
        .post(API_URL)
        .bearer_auth(api_key)
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
            body: body.chars().take(200).collect(),
        });
    }

    let data: ChatResponse = response.json().await.map_err(|e| AiError::MalformedResponse {
        provider: PROVIDER,
        reason: e.to_string(),
    })?;

    data.choices
        .first()
        .and_then(|c| c.message.content.clone())
        .ok_or_else(|| AiError::MalformedResponse {
            provider: PROVIDER,
            reason: "empty choices".to_string(),
        })
}
