// ABOUTME: HTTP server assembly including shared resources, middleware layers, and shutdown
// ABOUTME: Builds the axum router from the domain route modules and runs it to completion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Stride Contributors

//! # HTTP Server
//!
//! Assembles the axum router from the form, plan, and health route
//! modules, applies the shared middleware stack (request IDs, tracing,
//! CORS, timeout, body limit), and serves until ctrl-c.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use http::header::{HeaderName, HeaderValue, X_CONTENT_TYPE_OPTIONS};
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;

use crate::config::ServerConfig;
use crate::constants::defaults;
use crate::llm::LlmProvider;
use crate::plan::PlanService;
use crate::routes::{FormRoutes, HealthRoutes, PlanRoutes};

/// Request ID header propagated through the middleware stack
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Shared resources for all route handlers
///
/// Immutable after construction; each request borrows through the `Arc`,
/// so there is no shared mutable state across requests.
pub struct ServerResources {
    /// Server configuration
    pub config: ServerConfig,
    /// Plan generation service
    pub plan_service: PlanService,
}

impl ServerResources {
    /// Create server resources from configuration and an LLM provider
    #[must_use]
    pub fn new(config: ServerConfig, provider: Arc<dyn LlmProvider>) -> Self {
        let plan_service = PlanService::new(provider, config.use_sample_plan);
        Self {
            config,
            plan_service,
        }
    }
}

/// HTTP server wrapping the assembled router
pub struct HttpServer {
    resources: Arc<ServerResources>,
}

impl HttpServer {
    /// Create a new HTTP server from shared resources
    #[must_use]
    pub fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Build the full application router with the middleware stack
    #[must_use]
    pub fn router(&self) -> Router {
        let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

        Router::new()
            .merge(FormRoutes::routes())
            .merge(HealthRoutes::routes())
            .merge(PlanRoutes::routes(Arc::clone(&self.resources)))
            .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
            .layer(TimeoutLayer::new(Duration::from_secs(
                defaults::REQUEST_TIMEOUT_SECS,
            )))
            .layer(RequestBodyLimitLayer::new(defaults::MAX_BODY_BYTES))
            .layer(SetResponseHeaderLayer::if_not_present(
                X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            ))
            .layer(CorsLayer::permissive())
    }

    /// Run the server until shutdown
    ///
    /// # Errors
    ///
    /// Returns an error if binding the listener or serving fails.
    pub async fn run(&self) -> Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.resources.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        info!("Listening on http://{addr}");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("HTTP server error")?;

        info!("Server shut down cleanly");
        Ok(())
    }
}

/// Resolve when ctrl-c is received
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to install ctrl-c handler: {e}");
        // Fall through and shut down rather than serving without a
        // shutdown path.
    }
    info!("Shutdown signal received");
}
