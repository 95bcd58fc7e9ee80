// ABOUTME: Main library entry point for the LiftLog dashboard server
// ABOUTME: Wires configuration, storage, identity, and the volume-trend engine behind HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # LiftLog Server
//!
//! HTTP service behind the LiftLog training dashboard. It stores each user's
//! exercise catalog and logged sets, and serves two read models computed
//! from them:
//!
//! - a **volume trend** chart for a period selector (`1W`, `4W`, `1Y`, `MTD`,
//!   `QTD`, `YTD`, `ALL`) comparing the current window with the one before it
//! - **dashboard statistics** such as today's volume and the weekly average
//!
//! The aggregation itself lives in the `liftlog_trends` crate and is pure;
//! this crate supplies dates from the reporting calendar and records from the
//! set store.
//!
//! ## Architecture
//!
//! - **Config**: environment-only [`config::ServerConfig`]
//! - **Database**: [`database::SetStore`] with a `SQLite` implementation
//! - **Auth**: [`auth::HeaderIdentity`] reads the gateway-supplied user id
//! - **Services**: [`dashboard_routes::DashboardService`] for the read models and
//!   [`workout_routes::WorkoutService`] for the exercise catalog and set log
//! - **Routes**: axum routers assembled by [`routes::router`]
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use liftlog_server::config::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("LiftLog configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Identity resolution from the gateway header
pub mod auth;

/// Reporting calendar used to date sets and resolve "today"
pub mod calendar;

/// Environment-driven configuration
pub mod config;

/// Application constants
pub mod constants;

/// Dashboard service computing trends and statistics
pub mod dashboard_routes;

/// Exercise and set storage
pub mod database;

/// Unified error handling
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Shared server resources
pub mod resources;

/// HTTP routes
pub mod routes;

/// Exercise catalog and set logging service
pub mod workout_routes;
