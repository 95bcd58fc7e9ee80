// ABOUTME: Configuration management module for server settings
// ABOUTME: Groups environment-driven server configuration and database settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the `LiftLog` server
//!
//! - **Environment**: Server configuration from environment variables
//! - **Database**: `SQLite` location, migrations, and pool sizing

/// Database configuration types
pub mod database;
/// Environment and server configuration
pub mod environment;

pub use database::{DatabaseConfig, DatabaseUrl};
pub use environment::{
    DashboardConfig, Environment, IdentityConfig, ReportingConfig, ServerConfig,
};
