// ABOUTME: Application constants, environment variable names, and default values
// ABOUTME: Centralizes configuration keys so env handling stays consistent across modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Stride Contributors

//! Application constants and configuration values

/// Environment variable names
pub mod env_config {
    /// HTTP port override
    pub const HTTP_PORT: &str = "HTTP_PORT";

    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";

    /// When truthy, the plan service returns the built-in sample plan
    /// instead of calling the upstream completion API
    pub const USE_SAMPLE_PLAN: &str = "STRIDE_USE_SAMPLE_PLAN";

    /// Groq API key for the upstream completion service
    pub const GROQ_API_KEY: &str = "GROQ_API_KEY";

    /// Log level directive
    pub const RUST_LOG: &str = "RUST_LOG";

    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}

/// Default configuration values
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8080;

    /// Default log level
    pub const LOG_LEVEL: &str = "info";

    /// Request timeout for the whole HTTP round trip, in seconds.
    /// Plan completions routinely take 10-30s on the upstream model.
    pub const REQUEST_TIMEOUT_SECS: u64 = 90;

    /// Maximum accepted request body size in bytes
    pub const MAX_BODY_BYTES: usize = 64 * 1024;
}

/// Service identity for structured logging
pub mod service_names {
    /// Canonical service name
    pub const STRIDE_PLAN_SERVER: &str = "stride-plan-server";
}

/// Plan domain constants
pub mod plan {
    /// Days of the week in calendar rendering order
    pub const WEEKDAYS: [&str; 7] = [
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
        "Sunday",
    ];
}
