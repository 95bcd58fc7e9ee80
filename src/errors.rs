// ABOUTME: Error types for the LiftLog server, re-exported from the core crate
// ABOUTME: Keeps `crate::errors` paths stable for routes, store, and binaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! The error types live in `liftlog-core` so the trend crate and the server
//! share one [`AppError`]. The `http-response` feature supplies the axum
//! `IntoResponse` impl and `database-errors` the `sqlx::Error` conversion.

pub use liftlog_core::errors::{
    AppError, AppResult, ErrorCode, ErrorContext, ErrorResponse, ErrorResponseDetails,
};
