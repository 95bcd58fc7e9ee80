// ABOUTME: Route module organization for the LiftLog HTTP endpoints
// ABOUTME: Assembles domain routers and the shared tracing and request-id layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP routes
//!
//! Each domain module holds route definitions and thin handlers that delegate
//! to a service. [`router`] merges them and applies the cross-cutting layers.

/// Dashboard volume trend and statistics routes
pub mod dashboard;
/// Exercise catalog routes
pub mod exercises;
/// Health check and readiness routes
pub mod health;
/// Set logging routes
pub mod sets;

pub use dashboard::DashboardRoutes;
pub use exercises::ExerciseRoutes;
pub use health::HealthRoutes;
pub use sets::SetRoutes;

use crate::resources::ServerResources;
use axum::Router;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

/// Build the full application router
///
/// Request ids are read from and echoed in the configured request-id header.
pub fn router(resources: Arc<ServerResources>) -> Router {
    let request_id = resources.identity.request_id_header().clone();

    Router::new()
        .merge(HealthRoutes::routes(Arc::clone(&resources)))
        .merge(ExerciseRoutes::routes(Arc::clone(&resources)))
        .merge(SetRoutes::routes(Arc::clone(&resources)))
        .merge(DashboardRoutes::routes(resources))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id)),
        )
}
