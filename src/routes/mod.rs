// ABOUTME: Route module organization for the Stride HTTP endpoints
// ABOUTME: Each domain module contains route definitions and thin handlers delegating to services
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Stride Contributors

//! Route module for the Stride plan server
//!
//! Routes are organized by domain: the form page, the plan API, and
//! health checks. Handlers stay thin and delegate to the plan service.

/// Form page route serving the embedded plan-builder UI
pub mod form;
/// Health check and system status routes
pub mod health;
/// Running plan generation routes
pub mod plan;

/// Form page route handlers
pub use form::FormRoutes;
/// Health check route handlers
pub use health::HealthRoutes;
/// Plan generation route handlers
pub use plan::PlanRoutes;
/// Plan API success payload
pub use plan::PlanResponse;
