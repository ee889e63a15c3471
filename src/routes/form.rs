// ABOUTME: Form page route serving the embedded plan-builder UI at the site root
// ABOUTME: The page collects the runner profile and renders the returned plan client-side
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Stride Contributors

//! Form page route
//!
//! Serves the static plan-builder page embedded at compile time. The page
//! owns the client half of the contract: tier-conditional fields,
//! submit-disable while a request is in flight, and loose-shape plan
//! rendering with rest-day fallbacks.

use axum::{response::Html, routing::get, Router};

/// Plan-builder page embedded at compile time
pub const FORM_PAGE: &str = include_str!("../../assets/index.html");

/// Form page routes implementation
pub struct FormRoutes;

impl FormRoutes {
    /// Create the form page route
    #[must_use]
    pub fn routes() -> Router {
        async fn form_handler() -> Html<&'static str> {
            Html(FORM_PAGE)
        }

        Router::new().route("/", get(form_handler))
    }
}
