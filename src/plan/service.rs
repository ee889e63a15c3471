// ABOUTME: Plan generation service that bridges the HTTP route and the LLM provider
// ABOUTME: Builds the prompt, issues one completion, and parses the reply as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Stride Contributors

//! # Plan Service
//!
//! One profile in, one plan out. The service performs no retries and no
//! validation or repair of the model's output: a transport failure or a
//! non-JSON completion surfaces as an error for the route to reduce to
//! its generic user-facing message. This is an acknowledged trust
//! boundary; the plan constraints stated in the prompt are advisory to
//! the model.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, instrument};

use super::{build_plan_prompt, sample_plan, RunnerProfile};
use crate::errors::{AppError, AppResult};
use crate::llm::{ChatMessage, ChatRequest, LlmProvider};

/// Fixed model used for plan generation
pub const PLAN_MODEL: &str = "llama-3.3-70b-versatile";

/// Fixed sampling temperature for plan generation
pub const PLAN_TEMPERATURE: f32 = 0.5;

/// Plan generation service
///
/// Holds the LLM provider behind the trait seam so tests can substitute
/// a recording mock for the real upstream.
pub struct PlanService {
    provider: Arc<dyn LlmProvider>,
    use_sample_plan: bool,
}

impl PlanService {
    /// Create a new plan service
    #[must_use]
    pub fn new(provider: Arc<dyn LlmProvider>, use_sample_plan: bool) -> Self {
        Self {
            provider,
            use_sample_plan,
        }
    }

    /// Generate a training plan for the given runner profile
    ///
    /// When the sample-plan flag is set, returns the built-in sample plan
    /// without contacting the upstream service.
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream call fails or the completion text
    /// is not valid JSON.
    #[instrument(skip(self, profile), fields(provider = %self.provider.name()))]
    pub async fn generate(&self, profile: &RunnerProfile) -> AppResult<Value> {
        if self.use_sample_plan {
            info!("Sample plan flag enabled, returning built-in plan");
            return Ok(sample_plan());
        }

        let prompt = build_plan_prompt(profile);
        debug!("Built plan prompt: {} chars", prompt.len());

        let mut request = ChatRequest::new(vec![ChatMessage::user(prompt)])
            .with_model(PLAN_MODEL)
            .with_temperature(PLAN_TEMPERATURE);
        if self.provider.capabilities().supports_json_mode() {
            request = request.with_json_mode();
        }

        let response = self.provider.complete(&request).await?;

        info!(
            model = %response.model,
            tokens = response.usage.as_ref().map_or(0, |u| u.total_tokens),
            "Received plan completion"
        );

        serde_json::from_str(response.content.trim()).map_err(|e| {
            AppError::serialization(format!("Plan completion was not valid JSON: {e}"))
                .with_source(e)
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::llm::{ChatResponse, LlmCapabilities};
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    /// Provider stub that returns canned completion text
    struct CannedProvider {
        content: String,
        requests: Mutex<Vec<ChatRequest>>,
    }

    impl CannedProvider {
        fn new(content: &str) -> Self {
            Self {
                content: content.to_owned(),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LlmProvider for CannedProvider {
        fn name(&self) -> &'static str {
            "canned"
        }

        fn display_name(&self) -> &'static str {
            "Canned"
        }

        fn capabilities(&self) -> LlmCapabilities {
            LlmCapabilities::JSON_MODE
        }

        fn default_model(&self) -> &'static str {
            "canned-model"
        }

        fn available_models(&self) -> &'static [&'static str] {
            &["canned-model"]
        }

        async fn complete(&self, request: &ChatRequest) -> Result<ChatResponse, AppError> {
            self.requests.lock().unwrap().push(request.clone());
            Ok(ChatResponse {
                content: self.content.clone(),
                model: "canned-model".to_owned(),
                usage: None,
                finish_reason: Some("stop".to_owned()),
            })
        }

        async fn health_check(&self) -> Result<bool, AppError> {
            Ok(true)
        }
    }

    fn test_profile() -> RunnerProfile {
        serde_json::from_value(json!({
            "fitnessLevel": "beginner",
            "currentWeeklyMileage": "10",
            "goal": "5k",
            "daysPerWeek": "3",
            "timelineWeeks": "8",
            "longRunDay": "Saturday"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_generate_uses_fixed_model_and_temperature() {
        let provider = Arc::new(CannedProvider::new(r#"{"description":"ok","weeks":[]}"#));
        let service = PlanService::new(provider.clone(), false);

        let plan = service.generate(&test_profile()).await.unwrap();
        assert_eq!(plan["description"], "ok");

        let requests = provider.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].model.as_deref(), Some(PLAN_MODEL));
        assert_eq!(requests[0].temperature, Some(PLAN_TEMPERATURE));
        assert!(requests[0].json_mode);
    }

    #[tokio::test]
    async fn test_generate_rejects_non_json_completion() {
        let provider = Arc::new(CannedProvider::new("Sure! Here is your plan: ..."));
        let service = PlanService::new(provider, false);

        let error = service.generate(&test_profile()).await.unwrap_err();
        assert_eq!(error.code, crate::errors::ErrorCode::SerializationError);
    }

    #[tokio::test]
    async fn test_sample_flag_skips_provider() {
        let provider = Arc::new(CannedProvider::new(r#"{"unused":true}"#));
        let service = PlanService::new(provider.clone(), true);

        let plan = service.generate(&test_profile()).await.unwrap();
        assert_eq!(plan["description"], "This is a sample running plan.");
        assert!(provider.requests.lock().unwrap().is_empty());
    }
}
