// ABOUTME: Groq chat-completion provider over the OpenAI-compatible HTTP API
// ABOUTME: Translates chat requests to the wire format and maps API failures to error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Stride Contributors

//! Groq provider
//!
//! Backs the plan service with Groq-hosted open models. Requires the
//! `GROQ_API_KEY` environment variable (keys are issued at
//! <https://console.groq.com/keys>). When a request asks for JSON mode,
//! the `response_format` directive is forwarded so the model is
//! constrained to emit a JSON object.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

use super::{ChatMessage, ChatRequest, ChatResponse, LlmCapabilities, LlmProvider, TokenUsage};
use crate::constants::env_config;
use crate::errors::AppError;

const API_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(60);

const AVAILABLE_MODELS: &[&str] = &[
    "llama-3.3-70b-versatile",
    "llama-3.1-8b-instant",
    "mixtral-8x7b-32768",
    "gemma2-9b-it",
];

/// Wire request for `POST /chat/completions`
#[derive(Debug, Serialize)]
struct CompletionBody {
    model: String,
    messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct WireMessage {
    role: &'static str,
    content: String,
}

/// `{"type": "json_object"}` directive constraining model output
#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

impl ResponseFormat {
    const fn json_object() -> Self {
        Self {
            kind: "json_object",
        }
    }
}

#[derive(Debug, Deserialize)]
struct CompletionReply {
    model: String,
    choices: Vec<ReplyChoice>,
    #[serde(default)]
    usage: Option<ReplyUsage>,
}

#[derive(Debug, Deserialize)]
struct ReplyChoice {
    message: ReplyMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ReplyUsage {
    prompt_tokens: u32,
    completion_tokens: u32,
    total_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Groq-backed implementation of [`LlmProvider`]
pub struct GroqProvider {
    client: Client,
    api_key: String,
}

impl GroqProvider {
    /// Create a provider with the given API key
    #[must_use]
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { client, api_key }
    }

    /// Create a provider from the `GROQ_API_KEY` environment variable
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the variable is not set.
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = std::env::var(env_config::GROQ_API_KEY).map_err(|_| {
            AppError::config(format!(
                "{} is not set; create a key at https://console.groq.com/keys",
                env_config::GROQ_API_KEY
            ))
        })?;
        Ok(Self::new(api_key))
    }

    fn endpoint(path: &str) -> String {
        format!("{API_BASE_URL}/{path}")
    }

    /// Map a non-success API reply to an error code by status class
    fn map_api_error(status: StatusCode, body: &str) -> AppError {
        let detail = serde_json::from_str::<ApiErrorBody>(body)
            .map_or_else(
                |_| body.chars().take(200).collect::<String>(),
                |e| e.error.message,
            );

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                AppError::external_auth_failed("Groq", detail)
            }
            StatusCode::TOO_MANY_REQUESTS => AppError::external_rate_limited("Groq", detail),
            StatusCode::BAD_REQUEST => {
                AppError::invalid_input(format!("Groq rejected the request: {detail}"))
            }
            _ => AppError::external_service("Groq", format!("{status}: {detail}")),
        }
    }
}

#[async_trait]
impl LlmProvider for GroqProvider {
    fn name(&self) -> &'static str {
        "groq"
    }

    fn display_name(&self) -> &'static str {
        "Groq (Llama/Mixtral)"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::JSON_MODE | LlmCapabilities::SYSTEM_MESSAGES
    }

    fn default_model(&self) -> &'static str {
        DEFAULT_MODEL
    }

    fn available_models(&self) -> &'static [&'static str] {
        AVAILABLE_MODELS
    }

    #[instrument(skip(self, request), fields(model = request.model.as_deref().unwrap_or(DEFAULT_MODEL)))]
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        let body = CompletionBody {
            model: request
                .model
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_owned()),
            messages: request
                .messages
                .iter()
                .map(|m: &ChatMessage| WireMessage {
                    role: m.role.as_str(),
                    content: m.content.clone(),
                })
                .collect(),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            response_format: request.json_mode.then(ResponseFormat::json_object),
        };

        let response = self
            .client
            .post(Self::endpoint("chat/completions"))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::external_service("Groq", format!("request failed: {e}")).with_source(e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AppError::external_service("Groq", format!("failed to read reply: {e}")).with_source(e))?;

        if !status.is_success() {
            warn!(status = %status, "Groq API returned an error");
            return Err(Self::map_api_error(status, &text));
        }

        let reply: CompletionReply = serde_json::from_str(&text).map_err(|e| {
            AppError::external_service("Groq", format!("malformed reply: {e}")).with_source(e)
        })?;

        let choice = reply
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| AppError::external_service("Groq", "reply contained no choices"))?;

        let content = choice.message.content.unwrap_or_default();
        debug!(
            chars = content.len(),
            finish_reason = ?choice.finish_reason,
            "Groq completion received"
        );

        Ok(ChatResponse {
            content,
            model: reply.model,
            usage: reply.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
                total_tokens: u.total_tokens,
            }),
            finish_reason: choice.finish_reason,
        })
    }

    #[instrument(skip(self))]
    async fn health_check(&self) -> Result<bool, AppError> {
        // The models listing is the cheapest authenticated endpoint.
        let response = self
            .client
            .get(Self::endpoint("models"))
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|e| AppError::external_service("Groq", format!("health check failed: {e}")).with_source(e))?;

        let healthy = response.status().is_success();
        if !healthy {
            warn!(status = %response.status(), "Groq health check failed");
        }
        Ok(healthy)
    }
}
