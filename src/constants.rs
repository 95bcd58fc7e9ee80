// ABOUTME: Application constants for the LiftLog server
// ABOUTME: Re-exports the domain-grouped constants defined in the core crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use liftlog_core::constants::{dashboard, defaults, routes, service_names, units, workouts};

/// Environment variable names read by [`crate::config::ServerConfig::from_env`]
pub mod env_vars {
    /// Listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Database connection URL
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Run schema migrations at startup
    pub const DATABASE_AUTO_MIGRATE: &str = "DATABASE_AUTO_MIGRATE";
    /// Minutes east of UTC for the reporting calendar
    pub const REPORTING_UTC_OFFSET_MINUTES: &str = "LIFTLOG_REPORTING_UTC_OFFSET_MINUTES";
    /// Selector used when a request omits `period`
    pub const DEFAULT_PERIOD: &str = "LIFTLOG_DEFAULT_PERIOD";
    /// Presentation weight unit
    pub const WEIGHT_UNIT: &str = "LIFTLOG_WEIGHT_UNIT";
    /// Header carrying the authenticated user id
    pub const USER_HEADER: &str = "LIFTLOG_USER_HEADER";
    /// Header carrying the request correlation id
    pub const REQUEST_ID_HEADER: &str = "LIFTLOG_REQUEST_ID_HEADER";
}
