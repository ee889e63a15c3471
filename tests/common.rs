// ABOUTME: Shared test setup for integration tests
// ABOUTME: Provides quiet logging, router construction, and runner profile fixtures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Stride Contributors
#![allow(dead_code, clippy::missing_panics_doc, clippy::must_use_candidate)]

//! Shared test utilities for `stride_plan_server`
//!
//! Common setup to reduce duplication across integration tests.

use axum::Router;
use serde_json::{json, Value};
use std::sync::{Arc, Once};
use stride_plan_server::{
    config::ServerConfig,
    llm::LlmProvider,
    server::{HttpServer, ServerResources},
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Build the full application router around the given provider
pub fn test_router(provider: Arc<dyn LlmProvider>, use_sample_plan: bool) -> Router {
    init_test_logging();
    let config = ServerConfig {
        use_sample_plan,
        ..ServerConfig::default()
    };
    let resources = Arc::new(ServerResources::new(config, provider));
    HttpServer::new(resources).router()
}

/// A minimal beginner profile, as the form submits it
pub fn beginner_profile() -> Value {
    json!({
        "fitnessLevel": "beginner",
        "currentWeeklyMileage": "0",
        "goal": "5k",
        "daysPerWeek": "3",
        "timelineWeeks": "8",
        "longRunDay": "Sunday",
        "injuries": "none"
    })
}

/// A fully populated advanced profile, as the form submits it
pub fn advanced_profile() -> Value {
    json!({
        "fitnessLevel": "advanced",
        "currentWeeklyMileage": "35 miles",
        "easyPaceMin": "8",
        "easyPaceSec": "30",
        "recentRaceDistance": "half_marathon",
        "racePaceMin": "7",
        "racePaceSec": "5",
        "goal": "marathon",
        "daysPerWeek": "5",
        "timelineWeeks": "16",
        "longRunDay": "Saturday",
        "injuries": "knee-pain"
    })
}

/// A plan body in the shape the prompt asks the model for
pub fn canned_plan() -> Value {
    json!({
        "description": "A 8-week build toward your first 5K.",
        "weeks": [
            {
                "week": 1,
                "mileage": 6,
                "workouts": {
                    "Tuesday": "2 miles easy",
                    "Thursday": "2 miles easy",
                    "Sunday": "2 mile long run"
                },
                "notes": "Keep every run conversational."
            }
        ]
    })
}
