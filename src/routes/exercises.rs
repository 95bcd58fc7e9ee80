// ABOUTME: Exercise catalog route handlers for listing, creating, updating, and deleting exercises
// ABOUTME: Authenticates the caller from the gateway header and delegates to WorkoutService
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise routes

use crate::{
    auth::AuthResult,
    constants::routes,
    errors::AppError,
    resources::ServerResources,
    workout_routes::{CreateExerciseRequest, UpdateExerciseRequest, WorkoutService},
};
use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, patch},
    Json, Router,
};
use std::sync::Arc;

/// Exercise catalog routes
pub struct ExerciseRoutes;

impl ExerciseRoutes {
    /// Create all exercise routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                routes::EXERCISES,
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(routes::RECENT_EXERCISES, get(Self::handle_recent))
            .route(
                routes::EXERCISE,
                patch(Self::handle_update).delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    fn authenticate(
        headers: &HeaderMap,
        resources: &Arc<ServerResources>,
    ) -> Result<AuthResult, AppError> {
        resources.identity.authenticate(headers)
    }

    /// Handle GET /api/exercises
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = Self::authenticate(&headers, &resources)?;
        let response = WorkoutService::new(resources).list_exercises(auth).await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle POST /api/exercises
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Json(body): Json<CreateExerciseRequest>,
    ) -> Result<Response, AppError> {
        let auth = Self::authenticate(&headers, &resources)?;
        let exercise = WorkoutService::new(resources)
            .create_exercise(auth, body)
            .await?;
        Ok((StatusCode::CREATED, Json(exercise)).into_response())
    }

    /// Handle GET /api/exercises/recent
    async fn handle_recent(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Result<Response, AppError> {
        let auth = Self::authenticate(&headers, &resources)?;
        let response = WorkoutService::new(resources).recent_exercises(auth).await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    /// Handle PATCH /api/exercises/:id
    async fn handle_update(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
        Json(body): Json<UpdateExerciseRequest>,
    ) -> Result<Response, AppError> {
        let auth = Self::authenticate(&headers, &resources)?;
        let exercise = WorkoutService::new(resources)
            .update_exercise(auth, &id, body)
            .await?;
        Ok((StatusCode::OK, Json(exercise)).into_response())
    }

    /// Handle DELETE /api/exercises/:id
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let auth = Self::authenticate(&headers, &resources)?;
        WorkoutService::new(resources)
            .delete_exercise(auth, &id)
            .await?;
        Ok((StatusCode::NO_CONTENT, ()).into_response())
    }
}
