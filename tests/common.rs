// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory stores, server resources, and set logging helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `liftlog_server`

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use liftlog_core::models::ExerciseCategory;
use liftlog_server::{
    calendar::ReportingCalendar,
    config::{DatabaseConfig, DatabaseUrl, ServerConfig},
    database::{NewExercise, NewSet, SetStore, SqliteSetStore},
    resources::ServerResources,
};
use std::env;
use std::sync::{Arc, Once};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests
///
/// Set `TEST_LOG=debug` to see service logs while debugging a test.
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let level = env::var("TEST_LOG").unwrap_or_else(|_| "warn".to_owned());
        let _ = tracing_subscriber::fmt()
            .with_env_filter(level)
            .with_test_writer()
            .try_init();
    });
}

/// In-memory database configuration
pub fn memory_database() -> DatabaseConfig {
    DatabaseConfig {
        url: DatabaseUrl::Memory,
        auto_migrate: true,
        ..DatabaseConfig::default()
    }
}

/// Fresh in-memory set store with the schema applied
pub async fn create_test_store() -> SqliteSetStore {
    init_test_logging();
    SqliteSetStore::connect(&memory_database())
        .await
        .expect("Failed to open in-memory store")
}

/// Server resources over a fresh in-memory store using a UTC reporting calendar
pub async fn create_test_resources() -> Arc<ServerResources> {
    create_test_resources_with(ServerConfig::default(), ReportingCalendar::utc()).await
}

/// Server resources with a specific configuration and calendar
pub async fn create_test_resources_with(
    mut config: ServerConfig,
    calendar: ReportingCalendar,
) -> Arc<ServerResources> {
    config.database = memory_database();
    let store = create_test_store().await;
    Arc::new(
        ServerResources::new(Arc::new(config), Arc::new(store), calendar)
            .expect("Invalid test configuration"),
    )
}

/// Calendar date shorthand
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// UTC instant shorthand
pub fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

/// Create an exercise for `user_id`
pub async fn create_exercise(store: &dyn SetStore, user_id: Uuid, name: &str) -> Uuid {
    store
        .create_exercise(user_id, &NewExercise::new(name, ExerciseCategory::Chest))
        .await
        .expect("Failed to create exercise")
        .id
}

/// Record one set
pub async fn log_set(
    store: &dyn SetStore,
    user_id: Uuid,
    exercise_id: Uuid,
    performed_at: DateTime<Utc>,
    weight: f64,
    reps: u32,
) -> Uuid {
    store
        .record_set(
            user_id,
            NewSet {
                exercise_id,
                performed_at,
                weight,
                reps,
            },
        )
        .await
        .expect("Failed to record set")
}

/// Approximate float comparison for volumes
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
