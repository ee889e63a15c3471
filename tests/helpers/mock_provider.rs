// ABOUTME: Recording mock implementation of the LLM provider trait for tests
// ABOUTME: Returns canned completion text or a canned failure and captures every request
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Stride Contributors

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use stride_plan_server::errors::{AppError, ErrorCode};
use stride_plan_server::llm::{ChatRequest, ChatResponse, LlmCapabilities, LlmProvider};

/// What the mock does when `complete` is called
enum Behavior {
    /// Return this text as the completion content
    Respond(String),
    /// Fail with this error code
    Fail(ErrorCode),
}

/// Recording stand-in for the real completion provider
///
/// Every `ChatRequest` passed to `complete` is captured so tests can
/// assert on call counts and on the prompt that was actually sent.
pub struct MockLlmProvider {
    behavior: Behavior,
    requests: Mutex<Vec<ChatRequest>>,
}

impl MockLlmProvider {
    /// Mock that completes with the given text
    pub fn responding(content: &str) -> Arc<Self> {
        Arc::new(Self {
            behavior: Behavior::Respond(content.to_owned()),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// Mock that completes with the given JSON value serialized
    pub fn responding_json(value: &serde_json::Value) -> Arc<Self> {
        Self::responding(&value.to_string())
    }

    /// Mock whose every completion fails with the given code
    pub fn failing(code: ErrorCode) -> Arc<Self> {
        Arc::new(Self {
            behavior: Behavior::Fail(code),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// All requests seen so far
    pub fn recorded_requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of completion calls made
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// The user-message prompt of the only recorded request
    pub fn single_prompt(&self) -> String {
        let requests = self.requests.lock().unwrap();
        assert_eq!(requests.len(), 1, "expected exactly one completion call");
        requests[0]
            .messages
            .first()
            .map(|m| m.content.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl LlmProvider for MockLlmProvider {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn display_name(&self) -> &'static str {
        "Mock Provider"
    }

    fn capabilities(&self) -> LlmCapabilities {
        LlmCapabilities::JSON_MODE | LlmCapabilities::SYSTEM_MESSAGES
    }

    fn default_model(&self) -> &'static str {
        "mock-model"
    }

    fn available_models(&self) -> &'static [&'static str] {
        &["mock-model"]
    }

    async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.behavior {
            Behavior::Respond(content) => Ok(ChatResponse {
                content: content.clone(),
                model: "mock-model".to_owned(),
                usage: None,
                finish_reason: Some("stop".to_owned()),
            }),
            Behavior::Fail(code) => Err(AppError::new(*code, "mock upstream failure")),
        }
    }

    async fn health_check(&self) -> Result<bool, AppError> {
        Ok(true)
    }
}
