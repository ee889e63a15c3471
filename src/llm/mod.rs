// ABOUTME: Chat-completion provider seam between the plan service and upstream APIs
// ABOUTME: Defines the provider trait plus the message, request, and response types it exchanges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Stride Contributors

//! # Completion Provider Seam
//!
//! Plan generation needs exactly one thing from an upstream model: a
//! single-shot chat completion. [`LlmProvider`] is that seam. The real
//! implementation is [`GroqProvider`]; tests substitute a recording mock
//! behind the same trait.
//!
//! Capability flags let the caller adapt the request to the provider,
//! e.g. only asking for JSON-constrained output where the API supports
//! it.

mod groq;

pub use groq::GroqProvider;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

bitflags::bitflags! {
    /// Features an upstream completion API supports
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct LlmCapabilities: u8 {
        /// Output can be constrained to a JSON object
        const JSON_MODE = 0b0000_0001;
        /// System-role messages are honored
        const SYSTEM_MESSAGES = 0b0000_0010;
    }
}

impl LlmCapabilities {
    /// Whether JSON-constrained output is available
    #[must_use]
    pub const fn supports_json_mode(&self) -> bool {
        self.contains(Self::JSON_MODE)
    }

    /// Whether system-role messages are honored
    #[must_use]
    pub const fn supports_system_messages(&self) -> bool {
        self.contains(Self::SYSTEM_MESSAGES)
    }
}

/// Speaker of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Instruction to the model
    System,
    /// End-user input
    User,
    /// Prior model output
    Assistant,
}

impl MessageRole {
    /// Wire-format role string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// One message in the conversation sent upstream
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who is speaking
    pub role: MessageRole,
    /// Message text
    pub content: String,
}

impl ChatMessage {
    /// Message with an explicit role
    #[must_use]
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// System-role message
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// User-role message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Assistant-role message
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }
}

/// A chat completion request
///
/// `model`, `temperature`, and `max_tokens` are optional; providers fall
/// back to their own defaults. `json_mode` is a request, honored only by
/// providers whose capabilities include [`LlmCapabilities::JSON_MODE`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// Conversation to complete
    pub messages: Vec<ChatMessage>,
    /// Provider-specific model identifier
    pub model: Option<String>,
    /// Sampling temperature, 0.0 - 2.0
    pub temperature: Option<f32>,
    /// Completion length cap
    pub max_tokens: Option<u32>,
    /// Ask for a JSON object as output
    pub json_mode: bool,
}

impl ChatRequest {
    /// Request with the given messages and provider defaults otherwise
    #[must_use]
    pub const fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: None,
            temperature: None,
            max_tokens: None,
            json_mode: false,
        }
    }

    /// Pin the model
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Pin the sampling temperature
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Cap the completion length
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Ask for JSON-object output
    #[must_use]
    pub const fn with_json_mode(mut self) -> Self {
        self.json_mode = true;
        self
    }
}

/// A completed chat turn from the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Completion text
    pub content: String,
    /// Model that produced it
    pub model: String,
    /// Token accounting, when the API reports it
    pub usage: Option<TokenUsage>,
    /// Why generation stopped (stop, length, ...)
    pub finish_reason: Option<String>,
}

/// Token accounting for one completion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens consumed by the prompt
    pub prompt_tokens: u32,
    /// Tokens generated
    pub completion_tokens: u32,
    /// Prompt plus completion
    pub total_tokens: u32,
}

/// Contract for chat-completion backends
///
/// Single-shot only: the plan service never streams and never holds a
/// conversation, so the trait stays small.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Stable identifier, e.g. "groq"
    fn name(&self) -> &'static str;

    /// Name suitable for logs and startup banners
    fn display_name(&self) -> &'static str;

    /// What this backend supports
    fn capabilities(&self) -> LlmCapabilities;

    /// Model used when the request does not pin one
    fn default_model(&self) -> &str;

    /// Models this backend can serve
    fn available_models(&self) -> &'static [&'static str];

    /// Complete the conversation once
    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError>;

    /// Verify the backend is reachable and the credentials work
    async fn health_check(&self) -> Result<bool, AppError>;
}
