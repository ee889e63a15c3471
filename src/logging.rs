// ABOUTME: Tracing subscriber setup with environment-selected level and output format
// ABOUTME: Quiets noisy HTTP-stack crates regardless of the configured filter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Stride Contributors

//! Structured logging setup
//!
//! The level comes from `RUST_LOG` and the output shape from
//! `LOG_FORMAT` (`json`, `compact`, or the default pretty output).
//! Production deployments should set `LOG_FORMAT=json` so log lines stay
//! machine-parseable.

use crate::constants::{defaults, env_config, service_names};
use anyhow::Result;
use std::env;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Per-crate filter overrides applied on top of `RUST_LOG`
const QUIET_DIRECTIVES: &[&str] = &["hyper=warn", "reqwest=warn", "tower_http=info"];

/// How log lines are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Machine-parseable JSON lines
    Json,
    /// Human-oriented full-format output
    #[default]
    Pretty,
    /// Terse single-line output
    Compact,
}

/// Resolved logging settings
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter expression, `RUST_LOG` syntax
    pub level: String,
    /// Output rendering
    pub format: LogFormat,
    /// Emit source file and line with each event
    pub include_location: bool,
    /// Service name stamped on the startup event
    pub service_name: String,
    /// Service version stamped on the startup event
    pub service_version: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::LOG_LEVEL.into(),
            format: LogFormat::Pretty,
            include_location: false,
            service_name: service_names::STRIDE_PLAN_SERVER.into(),
            service_version: env!("CARGO_PKG_VERSION").to_owned(),
        }
    }
}

impl LoggingConfig {
    /// Resolve settings from the environment
    #[must_use]
    pub fn from_env() -> Self {
        let format = match env::var(env_config::LOG_FORMAT).as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        // Locations are cheap and production logs go through a collector,
        // so they are on in production by default.
        let is_production = env::var(env_config::ENVIRONMENT).as_deref() == Ok("production");

        Self {
            level: env::var(env_config::RUST_LOG).unwrap_or_else(|_| defaults::LOG_LEVEL.into()),
            format,
            include_location: is_production,
            ..Self::default()
        }
    }

    /// Install the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Fails if a subscriber is already installed.
    pub fn init(&self) -> Result<()> {
        let mut filter = EnvFilter::new(&self.level);
        for directive in QUIET_DIRECTIVES {
            filter = filter.add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| tracing::Level::WARN.into()),
            );
        }

        let fmt_layer = match self.format {
            LogFormat::Json => fmt::layer()
                .json()
                .with_current_span(true)
                .with_file(self.include_location)
                .with_line_number(self.include_location)
                .boxed(),
            LogFormat::Pretty => fmt::layer()
                .with_target(true)
                .with_file(self.include_location)
                .with_line_number(self.include_location)
                .boxed(),
            LogFormat::Compact => fmt::layer()
                .compact()
                .with_file(self.include_location)
                .with_line_number(self.include_location)
                .boxed(),
        };

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {e}"))?;

        tracing::info!(
            service = %self.service_name,
            version = %self.service_version,
            "Logging initialized"
        );

        Ok(())
    }
}

/// Resolve settings from the environment and install the subscriber
///
/// # Errors
///
/// Fails if a subscriber is already installed.
pub fn init_from_env() -> Result<()> {
    LoggingConfig::from_env().init()
}
