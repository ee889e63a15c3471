// ABOUTME: Main library entry point for the Stride running plan service
// ABOUTME: Provides the HTTP API, LLM provider layer, and plan generation service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Stride Contributors

#![deny(unsafe_code)]

//! # Stride Plan Server
//!
//! A web service that turns a runner's profile into a multi-week training
//! plan. The profile is collected by a browser form, serialized into a
//! coaching prompt, and sent to an LLM chat-completion API (Groq). The
//! model's JSON reply is returned to the client unmodified and rendered as
//! a weekly calendar.
//!
//! All planning reasoning (mileage progression, rest-day placement,
//! workout selection) is delegated to the upstream model; the server is a
//! stateless request/response pipeline with no persistence.
//!
//! ## Quick Start
//!
//! 1. Set `GROQ_API_KEY` (or `STRIDE_USE_SAMPLE_PLAN=true` for offline use)
//! 2. Start the server with `stride-plan-server`
//! 3. Open `http://localhost:8080/` in a browser
//!
//! ## Architecture
//!
//! - **llm**: Provider abstraction and the Groq chat-completion client
//! - **plan**: Runner profile model, prompt builder, and plan service
//! - **routes**: HTTP routes for the form page, plan API, and health checks
//! - **server**: Router assembly, shared resources, and graceful shutdown

/// Configuration management from environment variables
pub mod config;

/// Application constants and environment variable names
pub mod constants;

/// Unified error handling with standard error codes and HTTP responses
pub mod errors;

/// LLM provider abstraction for chat-completion integration
pub mod llm;

/// Production logging and structured output
pub mod logging;

/// Runner profile, prompt construction, and plan generation
pub mod plan;

/// HTTP routes for the form page, plan API, and health checks
pub mod routes;

/// HTTP server assembly and shared resources
pub mod server;
