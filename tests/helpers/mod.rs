// ABOUTME: Shared test helpers for integration tests
// ABOUTME: Exports the in-process HTTP harness and the recording LLM provider mock
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Stride Contributors

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod axum_test;
pub mod mock_provider;
