// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for units, dashboard windows, and service defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat list.

/// Service identity used in logs
pub mod service_names {
    /// Name of the HTTP server binary
    pub const LIFTLOG_SERVER: &str = "liftlog-server";
}

/// Unit conversion constants
pub mod units {
    /// Pounds per kilogram, used to convert canonical pound volumes to kilograms
    pub const LBS_PER_KG: f64 = 2.20462;
}

/// Dashboard aggregation windows
pub mod dashboard {
    /// Selector token used when a request omits the period
    pub const DEFAULT_PERIOD: &str = "4W";
    /// Days covered by the weekly-average statistic
    pub const WEEKLY_AVERAGE_DAYS: u64 = 28;
    /// Number of weeks the weekly-average volume is divided by
    pub const WEEKLY_AVERAGE_WEEKS: f64 = 4.0;
    /// Days of history included in the stats volume trend
    pub const STATS_TREND_DAYS: u64 = 30;
    /// Percentage reported when volume appears after an empty previous period
    pub const NEW_VOLUME_PERCENTAGE: f64 = 100.0;
}

/// Workout log listings
pub mod workouts {
    /// Entries returned by the recent sets and recent exercises listings
    pub const RECENT_LIMIT: u32 = 10;
}

/// Defaults for environment-driven configuration
pub mod defaults {
    /// Default HTTP port
    pub const HTTP_PORT: u16 = 8080;
    /// Default `SQLite` database location
    pub const DATABASE_URL: &str = "sqlite:./data/liftlog.db";
    /// Header an upstream identity gateway uses to pass the user id
    pub const USER_HEADER: &str = "x-user-id";
    /// Header carrying the request correlation id
    pub const REQUEST_ID_HEADER: &str = "x-request-id";
    /// Maximum pooled connections for file-backed `SQLite`
    pub const SQLITE_MAX_CONNECTIONS: u32 = 5;
}

/// API routes
pub mod routes {
    /// Volume trend chart data
    pub const VOLUME_TREND: &str = "/api/dashboard/volume-trend";
    /// Dashboard summary statistics
    pub const DASHBOARD_STATS: &str = "/api/dashboard/stats";
    /// Exercise catalog listing and creation
    pub const EXERCISES: &str = "/api/exercises";
    /// Single exercise update and deletion
    pub const EXERCISE: &str = "/api/exercises/:id";
    /// Exercises with recently logged sets
    pub const RECENT_EXERCISES: &str = "/api/exercises/recent";
    /// Set logging
    pub const SETS: &str = "/api/sets";
    /// Single set deletion
    pub const SET: &str = "/api/sets/:id";
    /// Sets performed today
    pub const TODAYS_SETS: &str = "/api/sets/today";
    /// Most recently logged sets
    pub const RECENT_SETS: &str = "/api/sets/recent";
    /// Liveness check
    pub const HEALTH: &str = "/health";
    /// Readiness check
    pub const READY: &str = "/ready";
}
