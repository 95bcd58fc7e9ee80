// ABOUTME: Shared server resources handed to every HTTP handler
// ABOUTME: Bundles configuration, the set store, the reporting calendar, and the identity adapter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::auth::HeaderIdentity;
use crate::calendar::ReportingCalendar;
use crate::config::ServerConfig;
use crate::database::{SetStore, SqliteSetStore};
use crate::errors::AppResult;
use std::sync::Arc;

/// Centralized resource container for dependency injection
///
/// Built once at startup and shared as `Arc<ServerResources>` router state.
#[derive(Clone)]
pub struct ServerResources {
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
    /// Exercise and set storage
    pub store: Arc<dyn SetStore>,
    /// Calendar used to decide which day "today" is
    pub calendar: ReportingCalendar,
    /// Resolves the caller from request headers
    pub identity: HeaderIdentity,
}

impl ServerResources {
    /// Assemble resources from already constructed parts
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` if a configured identity header name is invalid
    pub fn new(
        config: Arc<ServerConfig>,
        store: Arc<dyn SetStore>,
        calendar: ReportingCalendar,
    ) -> AppResult<Self> {
        let identity = HeaderIdentity::from_config(&config.identity)?;
        Ok(Self {
            config,
            store,
            calendar,
            identity,
        })
    }

    /// Open the configured store and derive the calendar from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated, or the
    /// reporting offset or identity headers are invalid
    pub async fn from_config(config: Arc<ServerConfig>) -> AppResult<Self> {
        let calendar =
            ReportingCalendar::from_offset_minutes(config.reporting.utc_offset_minutes)?;
        let store = SqliteSetStore::connect(&config.database).await?;
        Self::new(config, Arc::new(store), calendar)
    }
}
