// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Loads the server, reporting calendar, dashboard, and identity settings from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration
//!
//! There are no config files; every setting comes from an environment
//! variable with a default suited to local development.

use super::database::DatabaseConfig;
use crate::constants::{dashboard, defaults, env_vars};
use anyhow::{Context, Result};
use http::HeaderName;
use liftlog_core::models::WeightUnit;
use liftlog_trends::PeriodSelector;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use tracing::info;

/// Largest accepted reporting offset, in minutes either side of UTC
pub const MAX_UTC_OFFSET_MINUTES: i32 = 18 * 60;

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            // Default fallback for unrecognized values
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Convert to string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Reporting calendar settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportingConfig {
    /// Minutes east of UTC; `None` uses the host's local offset
    pub utc_offset_minutes: Option<i32>,
}

/// Dashboard presentation defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Period used when a request omits one
    pub default_period: PeriodSelector,
    /// Unit used when a request omits one or names an unknown unit
    pub weight_unit: WeightUnit,
}

impl DashboardConfig {
    /// Unit named by a request's `unit` parameter, or the configured unit
    #[must_use]
    pub fn unit_or_default(&self, token: Option<&str>) -> WeightUnit {
        token
            .and_then(WeightUnit::parse)
            .unwrap_or(self.weight_unit)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_period: PeriodSelector::parse(dashboard::DEFAULT_PERIOD),
            weight_unit: WeightUnit::Lbs,
        }
    }
}

/// Identity adapter settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Header carrying the authenticated user id
    pub user_header: String,
    /// Header carrying the request correlation id
    pub request_id_header: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            user_header: defaults::USER_HEADER.to_owned(),
            request_id_header: defaults::REQUEST_ID_HEADER.to_owned(),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Reporting calendar
    pub reporting: ReportingConfig,
    /// Dashboard defaults
    pub dashboard: DashboardConfig,
    /// Identity adapter
    pub identity: IdentityConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            environment: Environment::default(),
            database: DatabaseConfig::default(),
            reporting: ReportingConfig::default(),
            dashboard: DashboardConfig::default(),
            identity: IdentityConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but cannot be parsed, or if
    /// the resulting configuration fails validation
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let http_port = env_var_or(env_vars::HTTP_PORT, &defaults::HTTP_PORT.to_string())
            .parse()
            .context("Invalid HTTP_PORT value")?;

        let utc_offset_minutes = env::var(env_vars::REPORTING_UTC_OFFSET_MINUTES)
            .ok()
            .map(|raw| raw.trim().parse::<i32>())
            .transpose()
            .context("Invalid LIFTLOG_REPORTING_UTC_OFFSET_MINUTES value")?;

        let config = Self {
            http_port,
            environment: Environment::from_str_or_default(&env_var_or(
                env_vars::ENVIRONMENT,
                "development",
            )),
            database: DatabaseConfig::from_env().context("Invalid database configuration")?,
            reporting: ReportingConfig { utc_offset_minutes },
            dashboard: DashboardConfig {
                default_period: PeriodSelector::parse(&env_var_or(
                    env_vars::DEFAULT_PERIOD,
                    dashboard::DEFAULT_PERIOD,
                )),
                weight_unit: WeightUnit::from_str_or_default(&env_var_or(
                    env_vars::WEIGHT_UNIT,
                    WeightUnit::Lbs.as_str(),
                )),
            },
            identity: IdentityConfig {
                user_header: env_var_or(env_vars::USER_HEADER, defaults::USER_HEADER)
                    .trim()
                    .to_lowercase(),
                request_id_header: env_var_or(
                    env_vars::REQUEST_ID_HEADER,
                    defaults::REQUEST_ID_HEADER,
                )
                .trim()
                .to_lowercase(),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if the port is zero, the offset is out of range, or
    /// either identity header is not a valid header name
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            anyhow::bail!("HTTP_PORT must be greater than zero");
        }
        if let Some(minutes) = self.reporting.utc_offset_minutes {
            if minutes.abs() > MAX_UTC_OFFSET_MINUTES {
                anyhow::bail!(
                    "LIFTLOG_REPORTING_UTC_OFFSET_MINUTES must be within +/-{MAX_UTC_OFFSET_MINUTES}, got {minutes}"
                );
            }
        }
        HeaderName::from_bytes(self.identity.user_header.as_bytes())
            .with_context(|| format!("Invalid LIFTLOG_USER_HEADER: {}", self.identity.user_header))?;
        HeaderName::from_bytes(self.identity.request_id_header.as_bytes()).with_context(|| {
            format!(
                "Invalid LIFTLOG_REQUEST_ID_HEADER: {}",
                self.identity.request_id_header
            )
        })?;
        Ok(())
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "LiftLog Server Configuration: environment={} http_port={} database={} auto_migrate={} \
             reporting_offset={} default_period={} weight_unit={} user_header={} request_id_header={}",
            self.environment,
            self.http_port,
            self.database.url,
            self.database.auto_migrate,
            self.reporting
                .utc_offset_minutes
                .map_or_else(|| "host-local".to_owned(), |m| format!("{m}min")),
            self.dashboard.default_period,
            self.dashboard.weight_unit,
            self.identity.user_header,
            self.identity.request_id_header,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
