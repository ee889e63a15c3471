// ABOUTME: Server binary that wires configuration, logging, and the LLM provider together
// ABOUTME: Runs the unified form + API HTTP server until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Stride Contributors

//! # Stride Plan Server Binary
//!
//! Starts the HTTP server that serves the plan-builder form and the plan
//! generation API backed by the Groq completion service.

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use stride_plan_server::{
    config::ServerConfig,
    llm::{GroqProvider, LlmProvider},
    logging,
    server::{HttpServer, ServerResources},
};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "stride-plan-server")]
#[command(about = "Stride - personalized running plan generator backed by LLM chat completions")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    // Override port if specified
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }

    // Initialize production logging
    logging::init_from_env()?;

    info!("Starting Stride Plan Server");
    info!("{}", config.summary());

    // The provider is only contacted when the sample-plan flag is off,
    // but a missing API key is still a configuration error at startup.
    let provider: Arc<dyn LlmProvider> = Arc::new(if config.use_sample_plan {
        warn!("Sample plan mode enabled: upstream completion API will not be contacted");
        GroqProvider::new(String::new())
    } else {
        GroqProvider::from_env()?
    });

    info!(
        "LLM provider: {} (default model {})",
        provider.display_name(),
        provider.default_model()
    );

    let resources = Arc::new(ServerResources::new(config, provider));
    let server = HttpServer::new(resources);

    server.run().await
}
