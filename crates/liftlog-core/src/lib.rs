// ABOUTME: Core types and constants for the LiftLog workout tracking service
// ABOUTME: Foundation crate with error handling, domain models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `LiftLog` Core
//!
//! Foundation crate providing shared types and constants for the `LiftLog`
//! workout tracking service. This crate is designed to change infrequently,
//! enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Application-wide constants organized by domain
//! - **models**: Set records, exercise categories, and weight units

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (`SetRecord`, `LoggedSet`, `WeightUnit`, ...)
pub mod models;
