// ABOUTME: Dashboard service computing volume trends and summary statistics per user
// ABOUTME: Bridges the set store and reporting calendar to the pure trend engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Dashboard service
//!
//! Each request resolves its date windows in the reporting calendar, queries
//! only the sets inside those windows, converts rows to engine records, and
//! hands them to `liftlog_trends`. Volumes are stored in pounds and converted
//! to the requested unit last.
//!
//! An omitted `period` uses the configured default and an unrecognized one
//! resolves as `4W`. An omitted or unrecognized `unit` uses the configured
//! unit.

use crate::auth::AuthResult;
use crate::calendar::ReportingCalendar;
use crate::database::StoredSet;
use crate::errors::AppResult;
use crate::logging::AppLogger;
use crate::resources::ServerResources;
use chrono::{DateTime, NaiveDate, Utc};
use liftlog_core::models::{LoggedSet, SetRecord, WeightUnit};
use liftlog_trends::{
    calendar as dates, compute_dashboard_stats, compute_volume_trend, resolve, stats_window_start,
    DashboardStats, PeriodSelector, VolumeTrend,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Volume trend chart payload
#[derive(Debug, Clone, Serialize)]
pub struct VolumeTrendResponse {
    /// Selector the window was resolved from
    pub period: PeriodSelector,
    /// Unit of every volume figure
    pub unit: WeightUnit,
    /// Series and totals
    #[serde(flatten)]
    pub trend: VolumeTrend,
}

/// Dashboard summary payload
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStatsResponse {
    /// Unit of every volume figure
    pub unit: WeightUnit,
    /// Summary figures
    #[serde(flatten)]
    pub stats: DashboardStats,
}

/// Service behind the dashboard endpoints
#[derive(Clone)]
pub struct DashboardService {
    resources: Arc<ServerResources>,
}

impl DashboardService {
    /// Creates a new dashboard service with the given server resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    fn calendar(&self) -> &ReportingCalendar {
        &self.resources.calendar
    }

    fn resolve_unit(&self, unit: Option<&str>) -> WeightUnit {
        self.resources.config.dashboard.unit_or_default(unit)
    }

    fn resolve_period(&self, period: Option<&str>) -> PeriodSelector {
        period.map_or(
            self.resources.config.dashboard.default_period,
            PeriodSelector::parse,
        )
    }

    /// Volume trend for the caller at the current instant
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails or holds an invalid set
    pub async fn get_volume_trend(
        &self,
        auth: AuthResult,
        period: Option<&str>,
        unit: Option<&str>,
    ) -> AppResult<VolumeTrendResponse> {
        self.get_volume_trend_at(auth, period, unit, Utc::now())
            .await
    }

    /// Volume trend for the caller as of instant `now`
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails or holds an invalid set
    pub async fn get_volume_trend_at(
        &self,
        auth: AuthResult,
        period: Option<&str>,
        unit: Option<&str>,
        now: DateTime<Utc>,
    ) -> AppResult<VolumeTrendResponse> {
        let user_id = auth.require_user()?;
        let selector = self.resolve_period(period);
        let unit = self.resolve_unit(unit);
        let today = self.calendar().today_at(now);

        let earliest = if selector.needs_earliest_record() {
            self.resources
                .store
                .earliest_set_at(user_id)
                .await?
                .map(|instant| self.calendar().to_local(instant).date())
        } else {
            None
        };

        let window = resolve(selector, today, earliest);
        debug!(
            user_id = %user_id,
            period = %selector,
            current_start = %window.current_start,
            current_end = %window.current_end,
            previous_start = %window.previous_start,
            previous_end = %window.previous_end,
            "Resolved dashboard window"
        );

        let current = self
            .records_between(user_id, window.current_start, window.current_end)
            .await?;
        let previous = if window.has_comparison {
            self.records_between(user_id, window.previous_start, window.previous_end)
                .await?
        } else {
            Vec::new()
        };

        let trend = compute_volume_trend(&window, &current, &previous)
            .map_volumes(|volume| unit.from_pounds(volume));

        AppLogger::log_volume_trend(
            &user_id.to_string(),
            selector.as_str(),
            trend.points.len(),
            trend.current_total,
            trend.previous_total,
        );

        Ok(VolumeTrendResponse {
            period: selector,
            unit,
            trend,
        })
    }

    /// Dashboard statistics for the caller at the current instant
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails or holds an invalid set
    pub async fn get_dashboard_stats(
        &self,
        auth: AuthResult,
        unit: Option<&str>,
    ) -> AppResult<DashboardStatsResponse> {
        self.get_dashboard_stats_at(auth, unit, Utc::now()).await
    }

    /// Dashboard statistics for the caller as of instant `now`
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails or holds an invalid set
    pub async fn get_dashboard_stats_at(
        &self,
        auth: AuthResult,
        unit: Option<&str>,
        now: DateTime<Utc>,
    ) -> AppResult<DashboardStatsResponse> {
        let user_id = auth.require_user()?;
        let unit = self.resolve_unit(unit);
        let today = self.calendar().today_at(now);
        let tomorrow = dates::days_after(today, 1);

        let rows = self
            .stored_between(user_id, stats_window_start(today), tomorrow)
            .await?;
        let calendar = *self.calendar();
        let sets = rows
            .iter()
            .map(|row| row.to_logged(&calendar))
            .collect::<AppResult<Vec<LoggedSet>>>()?;
        let total_exercises = self.resources.store.count_exercises(user_id).await?;

        let stats = compute_dashboard_stats(today, &sets, total_exercises)
            .map_volumes(|volume| unit.from_pounds(volume));

        debug!(
            user_id = %user_id,
            todays_sets = stats.todays_sets,
            trend_days = stats.volume_trend.len(),
            "Dashboard stats computed"
        );

        Ok(DashboardStatsResponse { unit, stats })
    }

    async fn stored_between(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<StoredSet>> {
        let (start_utc, end_utc) = self.calendar().utc_range(start, end);
        self.resources
            .store
            .sets_in_range(user_id, start_utc, end_utc)
            .await
    }

    async fn records_between(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<SetRecord>> {
        let calendar = *self.calendar();
        self.stored_between(user_id, start, end)
            .await?
            .iter()
            .map(|row| row.to_record(&calendar))
            .collect()
    }
}
