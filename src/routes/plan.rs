// ABOUTME: Running plan route handler accepting a runner profile and returning the generated plan
// ABOUTME: Reduces both upstream and parse failures to one generic user-facing error message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Stride Contributors

//! Plan generation route
//!
//! `POST /api/running-plan` accepts the runner profile JSON body, delegates
//! to the plan service, and returns `{"plan": ...}` on success. Any
//! failure, whether transport or JSON parse, is logged with its diagnostic
//! and reduced to a single generic message for the client; no distinction
//! is surfaced and no retry is attempted.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::error;

use crate::errors::{AppError, AppResult};
use crate::plan::RunnerProfile;
use crate::server::ServerResources;

/// Generic user-facing failure message for plan generation
pub const GENERIC_PLAN_ERROR: &str = "Failed to generate plan";

/// Successful plan response payload
#[derive(Debug, Serialize, Deserialize)]
pub struct PlanResponse {
    /// The model-generated plan, passed through unmodified
    pub plan: Value,
}

/// Plan routes handler
pub struct PlanRoutes;

impl PlanRoutes {
    /// Create all plan routes
    #[must_use]
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/running-plan", post(Self::create_plan))
            .with_state(resources)
    }

    /// Handle a plan generation request
    async fn create_plan(
        State(resources): State<Arc<ServerResources>>,
        Json(profile): Json<RunnerProfile>,
    ) -> AppResult<Json<PlanResponse>> {
        let plan = resources
            .plan_service
            .generate(&profile)
            .await
            .map_err(|e| {
                error!(error = %e, "Error generating plan");
                AppError::new(e.code, GENERIC_PLAN_ERROR)
            })?;

        Ok(Json(PlanResponse { plan }))
    }
}
