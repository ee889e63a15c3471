// ABOUTME: Plan domain types including the runner profile and the built-in sample plan
// ABOUTME: Profile fields mirror the browser form payload; the plan itself is model-owned JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Stride Contributors

//! # Plan Domain
//!
//! The runner profile is the flat record posted by the form. Values arrive
//! as the browser's form-data strings, so every field is a string here and
//! formatting happens in the prompt builder.
//!
//! The generated plan is entirely produced and owned by the upstream
//! model. Its expected shape is
//! `{ description, weeks: [{ week, mileage, workouts: {day: text}, notes }] }`,
//! but the server deliberately passes it through as `serde_json::Value`
//! without schema validation; the browser renders missing fields with
//! fallbacks.

pub mod prompt;
pub mod service;

pub use prompt::build_plan_prompt;
pub use service::PlanService;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Fitness level used when the form omits one
pub const DEFAULT_FITNESS_LEVEL: &str = "beginner";

/// A runner's profile as submitted by the plan form
///
/// Lives only for the duration of one request. No cross-field validation
/// is performed; the prompt builder applies per-field fallbacks instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunnerProfile {
    /// Fitness level: beginner, intermediate, or advanced
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitness_level: Option<String>,
    /// Current weekly mileage (numeric string; may be empty for beginners)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_weekly_mileage: Option<String>,
    /// Primary goal (5k, 10k, half-marathon, marathon, weight-loss, general-fitness)
    pub goal: String,
    /// Running days per week (3-6)
    pub days_per_week: String,
    /// Plan length in weeks (4, 8, 12, 16)
    pub timeline_weeks: String,
    /// Preferred long-run day
    pub long_run_day: String,
    /// Injury considerations (defaults to "none" in the prompt)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub injuries: Option<String>,
    /// Weekly mileage goal, intermediate/advanced only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage_goal: Option<String>,
    /// Easy pace minutes component, intermediate/advanced only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easy_pace_min: Option<String>,
    /// Easy pace seconds component, intermediate/advanced only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easy_pace_sec: Option<String>,
    /// Recent race distance, advanced only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recent_race_distance: Option<String>,
    /// Recent race pace minutes component, advanced only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race_pace_min: Option<String>,
    /// Recent race pace seconds component, advanced only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub race_pace_sec: Option<String>,
}

impl RunnerProfile {
    /// Fitness level with the beginner fallback applied
    #[must_use]
    pub fn fitness_level_or_default(&self) -> &str {
        self.fitness_level
            .as_deref()
            .filter(|level| !level.is_empty())
            .unwrap_or(DEFAULT_FITNESS_LEVEL)
    }

    /// Whether the profile is at the beginner tier
    #[must_use]
    pub fn is_beginner(&self) -> bool {
        self.fitness_level_or_default() == DEFAULT_FITNESS_LEVEL
    }
}

/// Fixed sample plan returned when `STRIDE_USE_SAMPLE_PLAN` is enabled
///
/// Used for local development and demos without burning upstream quota.
#[must_use]
pub fn sample_plan() -> Value {
    json!({
        "description": "This is a sample running plan.",
        "weeks": [
            {
                "week": 1,
                "mileage": 20,
                "workouts": {
                    "Monday": "Rest",
                    "Tuesday": "3 miles easy",
                    "Wednesday": "4 miles tempo",
                    "Thursday": "Rest",
                    "Friday": "3 miles easy",
                    "Saturday": "5 miles long run",
                    "Sunday": "Rest"
                },
                "notes": "Focus on building consistency."
            },
            {
                "week": 2,
                "mileage": 22,
                "workouts": {
                    "Monday": "Rest",
                    "Tuesday": "3 miles easy",
                    "Wednesday": "5 miles tempo",
                    "Thursday": "Rest",
                    "Friday": "4 miles easy",
                    "Saturday": "6 miles long run",
                    "Sunday": "Rest"
                },
                "notes": "Increase mileage gradually."
            }
        ]
    })
}
