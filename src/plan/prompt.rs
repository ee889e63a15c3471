// ABOUTME: Coaching prompt construction from a runner profile with fixed field formatting
// ABOUTME: Every constraint in the prompt is advisory to the model and not enforced by the server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Stride Contributors

//! # Plan Prompt Builder
//!
//! Serializes a [`RunnerProfile`](super::RunnerProfile) into the coaching
//! prompt sent to the completion API. Formatting rules are fixed:
//!
//! - mileage values are reduced to their leading numeric portion
//! - pace and time pairs are combined as `min:ss` with zero-padded seconds
//!   and emitted only when both halves are present
//! - tier-gated lines (mileage goal, paces, race time) are omitted for
//!   profiles that did not submit them

use super::RunnerProfile;

/// Reduce a mileage value to its leading numeric portion
///
/// "20 miles" becomes "20", "12.5" stays "12.5". Empty or non-numeric
/// input falls back to "0".
#[must_use]
pub fn numeric_prefix(raw: &str) -> String {
    let trimmed = raw.trim();
    let numeric: String = trimmed
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if numeric.is_empty() || numeric.chars().all(|c| c == '.') {
        "0".to_owned()
    } else {
        numeric
    }
}

/// Combine a minutes/seconds pair into `min:ss` with zero-padded seconds
///
/// Returns `None` unless both halves are present and the seconds value is
/// numeric, matching the form's paired inputs.
#[must_use]
pub fn format_clock(minutes: Option<&str>, seconds: Option<&str>) -> Option<String> {
    let minutes = minutes.map(str::trim).filter(|m| !m.is_empty())?;
    let seconds = seconds.map(str::trim).filter(|s| !s.is_empty())?;
    let seconds: u32 = seconds.parse().ok()?;

    Some(format!("{minutes}:{seconds:02}"))
}

/// Build the runner profile section of the prompt
fn profile_section(profile: &RunnerProfile) -> String {
    let fitness_level = profile.fitness_level_or_default();
    let mileage = numeric_prefix(profile.current_weekly_mileage.as_deref().unwrap_or(""));
    let injuries = profile
        .injuries
        .as_deref()
        .filter(|i| !i.is_empty())
        .unwrap_or("none");

    let mut lines = vec![
        format!("- Fitness Level: {fitness_level}"),
        format!("- Current Weekly Mileage: {mileage} miles"),
        format!("- Goal: {}", profile.goal),
        format!("- Running Days Per Week: {}", profile.days_per_week),
        format!("- Long Run Day: {}", profile.long_run_day),
        format!("- Injury Considerations: {injuries}"),
    ];

    if !profile.is_beginner() {
        let mileage_goal = profile
            .mileage_goal
            .as_deref()
            .filter(|g| !g.is_empty())
            .unwrap_or("increase");
        lines.push(format!("- Mileage Goal: {mileage_goal}"));
    }

    if let Some(pace) = format_clock(
        profile.easy_pace_min.as_deref(),
        profile.easy_pace_sec.as_deref(),
    ) {
        lines.push(format!("- Easy Pace: {pace}/mile"));
    }

    let race_distance = profile
        .recent_race_distance
        .as_deref()
        .filter(|d| !d.is_empty());
    let race_time = format_clock(
        profile.race_pace_min.as_deref(),
        profile.race_pace_sec.as_deref(),
    );
    if let (Some(distance), Some(time)) = (race_distance, race_time) {
        lines.push(format!("- Recent {distance} Time: {time}"));
    }

    lines.join("\n")
}

/// Build the full coaching prompt for a runner profile
///
/// The hard requirements stated in the prompt (exact running-day count,
/// mileage-sum equality, long-run placement) are instructions to the
/// model; the server does not verify the returned plan against them.
#[must_use]
pub fn build_plan_prompt(profile: &RunnerProfile) -> String {
    let mileage = numeric_prefix(profile.current_weekly_mileage.as_deref().unwrap_or(""));
    let days_per_week = &profile.days_per_week;
    let timeline_weeks = &profile.timeline_weeks;
    let long_run_day = &profile.long_run_day;
    let runner_profile = profile_section(profile);

    format!(
        r#"# RUNNING PLAN CREATION TASK

You are a professional running coach. Create a personalized training plan tailored to the runner's specific needs, experience level, and goals. Use a motivating and supportive tone to inspire the runner while providing expert guidance.

## RUNNER PROFILE
{runner_profile}

## KEY REQUIREMENTS
1. Create a {timeline_weeks}-week personalized running plan.
2. EXACTLY {days_per_week} running days per week (no more, no less).
3. The long run MUST always be scheduled on {long_run_day}.
4. For mileage progression:
  - Start with {mileage} miles in Week 1.
  - Gradually increase weekly mileage by no more than 10% per week.
  - Include a recovery week (reduced mileage) every 3-4 weeks.
5. For workout types:
  - Include a mix of easy runs, long runs, tempo runs, intervals, strides, and recovery runs.
  - Every run MUST include a description (e.g., "5 miles easy run" or "6 miles tempo").
  - Ensure the long run is appropriately scaled to the runner's experience and weekly mileage.

## REST DAY PLACEMENT - CRITICAL
1. Rest days MUST be spaced logically throughout the week:
  - Include a rest day **before** and **after** the long run to allow for recovery.
  - Avoid scheduling runs immediately after the long run.
  - Distribute the remaining rest days evenly across the week to balance effort and recovery.
2. Example for 3 running days per week with a Sunday long run:
  - Monday: Rest day
  - Tuesday: 3 miles easy run
  - Wednesday: Rest day
  - Thursday: 3 miles tempo run
  - Friday: Rest day
  - Saturday: Rest day
  - Sunday: 4 miles long run

## MILEAGE CALCULATION - CRITICAL
1. The sum of daily workout mileage MUST EQUAL the weekly mileage total.
2. Distribute the weekly mileage across exactly {days_per_week} running days.
3. VERIFY: If the weekly mileage is 10 miles and the user runs 3 days per week:
  - Example:
    - Tuesday: 3 miles easy run
    - Thursday: 3 miles tempo run
    - Sunday: 4 miles long run
    - Total: 3 + 3 + 4 = 10 miles

## CONTINUITY REQUIREMENTS
- Ensure a logical progression between weeks that builds toward the final week.
- Gradually increase workout intensity and complexity as the plan progresses.
- Maintain consistent workout patterns (e.g., long runs on the same day each week) while varying specific workouts.
- Each week should prepare the runner for the following week's challenges.

## OUTPUT FORMAT
Return a JSON object with the following structure:
{{
  "description": "A motivational overview of the plan tailored to the runner.",
  "weeks": [
    {{
      "week": 1,
      "mileage": "10",
      "workouts": {{
        "Monday": "Rest day",
        "Tuesday": "3 miles easy run",
        "Wednesday": "Rest day",
        "Thursday": "3 miles easy run with strides",
        "Friday": "Rest day",
        "Saturday": "Rest day",
        "Sunday": "4 miles long run"
      }},
      "notes": "Focus on building a consistent running habit this week."
    }}
  ]
}}

## IMPORTANT CHECKS
- Each week MUST have EXACTLY {days_per_week} running days.
- The sum of daily workout mileage MUST equal the weekly mileage total.
- The long run MUST always be scheduled on {long_run_day}.
- Rest days MUST follow the rules outlined in the "REST DAY PLACEMENT" section.
- Every running workout MUST include a description (e.g., "easy run", "tempo run").
- Include all seven days of the week in the output (with rest days explicitly labeled).
- Use original workouts tailored to the runner's profile - do NOT copy the example workouts verbatim.
- Mileage values should be numbers only (e.g., "5", not "5 miles").

Return only the raw JSON without markdown formatting or additional text.
"#
    )
}
