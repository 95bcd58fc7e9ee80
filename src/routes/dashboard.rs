// ABOUTME: Dashboard route handlers for the volume trend chart and summary statistics
// ABOUTME: Authenticates the caller from the gateway header and delegates to DashboardService
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Dashboard routes
//!
//! Both endpoints require the identity header. Unknown `period` or `unit`
//! values never fail a request: an unknown period resolves as `4W` and an
//! unknown unit uses the configured unit.

use crate::{
    auth::AuthResult, constants::routes, dashboard_routes::DashboardService, errors::AppError,
    resources::ServerResources,
};
use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for the volume trend chart
#[derive(Debug, Deserialize)]
struct VolumeTrendQuery {
    #[serde(default)]
    period: Option<String>,
    #[serde(default)]
    unit: Option<String>,
}

/// Query parameters for dashboard statistics
#[derive(Debug, Deserialize)]
struct StatsQuery {
    #[serde(default)]
    unit: Option<String>,
}

/// Dashboard routes
pub struct DashboardRoutes;

impl DashboardRoutes {
    /// Create all dashboard routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(routes::VOLUME_TREND, get(Self::handle_volume_trend))
            .route(routes::DASHBOARD_STATS, get(Self::handle_dashboard_stats))
            .with_state(resources)
    }

    fn authenticate(
        headers: &HeaderMap,
        resources: &Arc<ServerResources>,
    ) -> Result<AuthResult, AppError> {
        resources.identity.authenticate(headers)
    }

    /// Handle volume trend request
    async fn handle_volume_trend(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(params): Query<VolumeTrendQuery>,
    ) -> Result<Response, AppError> {
        let auth = Self::authenticate(&headers, &resources)?;

        let service = DashboardService::new(resources);
        let response = service
            .get_volume_trend(auth, params.period.as_deref(), params.unit.as_deref())
            .await?;

        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle dashboard statistics request
    async fn handle_dashboard_stats(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(params): Query<StatsQuery>,
    ) -> Result<Response, AppError> {
        let auth = Self::authenticate(&headers, &resources)?;

        let service = DashboardService::new(resources);
        let response = service
            .get_dashboard_stats(auth, params.unit.as_deref())
            .await?;

        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
