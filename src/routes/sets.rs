// ABOUTME: Set route handlers for logging, listing, and deleting workout sets
// ABOUTME: Authenticates the caller from the gateway header and delegates to WorkoutService
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Set routes
//!
//! Listings take an optional `unit` query parameter; weights in the response
//! are in that unit.

use crate::{
    auth::AuthResult,
    constants::routes,
    errors::AppError,
    resources::ServerResources,
    workout_routes::{LogSetRequest, WorkoutService},
};
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for set listings
#[derive(Debug, Deserialize)]
struct SetListQuery {
    #[serde(default)]
    unit: Option<String>,
}

/// Set routes
pub struct SetRoutes;

impl SetRoutes {
    /// Create all set routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(routes::SETS, post(Self::handle_log_set))
            .route(routes::TODAYS_SETS, get(Self::handle_today))
            .route(routes::RECENT_SETS, get(Self::handle_recent))
            .route(routes::SET, delete(Self::handle_delete))
            .with_state(resources)
    }

    fn authenticate(
        headers: &HeaderMap,
        resources: &Arc<ServerResources>,
    ) -> Result<AuthResult, AppError> {
        resources.identity.authenticate(headers)
    }

    /// Handle POST /api/sets
    async fn handle_log_set(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(body): Json<LogSetRequest>,
    ) -> Result<Response, AppError> {
        let auth = Self::authenticate(&headers, &resources)?;
        let response = WorkoutService::new(resources).log_set(auth, body).await?;
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle GET /api/sets/today
    async fn handle_today(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(params): Query<SetListQuery>,
    ) -> Result<Response, AppError> {
        let auth = Self::authenticate(&headers, &resources)?;
        let response = WorkoutService::new(resources)
            .todays_sets(auth, params.unit.as_deref())
            .await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle GET /api/sets/recent
    async fn handle_recent(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Query(params): Query<SetListQuery>,
    ) -> Result<Response, AppError> {
        let auth = Self::authenticate(&headers, &resources)?;
        let response = WorkoutService::new(resources)
            .recent_sets(auth, params.unit.as_deref())
            .await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle DELETE /api/sets/:id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let auth = Self::authenticate(&headers, &resources)?;
        WorkoutService::new(resources).delete_set(auth, &id).await?;
        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }
}
