// ABOUTME: HTTP integration tests for the exercise catalog and set logging routes
// ABOUTME: Covers creation, validation, unit conversion, ownership checks, and deletion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::Router;
use chrono::{Duration, Utc};
use common::{assert_close, at, create_exercise, create_test_resources, log_set};
use helpers::axum_test::{AxumTestRequest, AxumTestResponse};
use liftlog_server::constants::routes::{
    DASHBOARD_STATS, EXERCISES, RECENT_EXERCISES, RECENT_SETS, SETS, TODAYS_SETS,
};
use liftlog_server::routes;
use serde_json::{json, Value};
use uuid::Uuid;

async fn create_exercise_over_http(app: &Router, user: &str, body: &Value) -> AxumTestResponse {
    AxumTestRequest::post(EXERCISES)
        .header("x-user-id", user)
        .json(body)
        .send(app.clone())
        .await
}

#[tokio::test]
async fn test_logged_set_feeds_dashboard_in_pounds() {
    let app = routes::router(create_test_resources().await);
    let user = Uuid::new_v4().to_string();

    let created = create_exercise_over_http(
        &app,
        &user,
        &json!({ "name": "Bench Press (Barbell)", "category": "CHEST", "notes": "Pause reps" }),
    )
    .await;
    assert_eq!(created.status(), 201);
    let exercise: Value = created.json();
    assert_eq!(exercise["name"], "Bench Press (Barbell)");
    assert_eq!(exercise["category"], "CHEST");
    assert_eq!(exercise["notes"], "Pause reps");

    let logged = AxumTestRequest::post(SETS)
        .header("x-user-id", &user)
        .json(&json!({
            "exercise_id": exercise["id"],
            "weight": 100.0,
            "reps": 5,
            "unit": "kg",
        }))
        .send(app.clone())
        .await;
    assert_eq!(logged.status(), 201);
    let set: Value = logged.json();
    assert_eq!(set["unit"], "kg");
    assert_eq!(set["exercise_name"], "Bench Press (Barbell)");
    assert_eq!(set["reps"], 5);
    assert_close(set["weight"].as_f64().unwrap(), 100.0);

    let today = AxumTestRequest::get(&format!("{TODAYS_SETS}?unit=lbs"))
        .header("x-user-id", &user)
        .send(app.clone())
        .await;
    assert_eq!(today.status(), 200);
    let body: Value = today.json();
    assert_eq!(body["unit"], "lbs");
    assert_eq!(body["sets"].as_array().unwrap().len(), 1);
    assert_close(body["sets"][0]["weight"].as_f64().unwrap(), 220.462);

    let stats = AxumTestRequest::get(DASHBOARD_STATS)
        .header("x-user-id", &user)
        .send(app)
        .await;
    let body: Value = stats.json();
    assert_eq!(body["todays_sets"], 1);
    assert_close(body["todays_volume"].as_f64().unwrap(), 1102.31);
}

#[tokio::test]
async fn test_write_routes_require_identity() {
    let app = routes::router(create_test_resources().await);

    let response = AxumTestRequest::post(SETS)
        .json(&json!({ "exercise_id": Uuid::new_v4(), "weight": 50.0, "reps": 5 }))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 401);

    let response = AxumTestRequest::delete(&format!("{EXERCISES}/{}", Uuid::new_v4()))
        .send(app)
        .await;
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn test_create_exercise_validation() {
    let app = routes::router(create_test_resources().await);
    let user = Uuid::new_v4().to_string();

    let missing = create_exercise_over_http(&app, &user, &json!({ "name": "Plank" })).await;
    assert_eq!(missing.status(), 400);
    let body: Value = missing.json();
    assert_eq!(body["error"]["code"], "INVALID_INPUT");

    let first =
        create_exercise_over_http(&app, &user, &json!({ "name": "Plank", "category": "CORE" }))
            .await;
    assert_eq!(first.status(), 201);

    let duplicate =
        create_exercise_over_http(&app, &user, &json!({ "name": "Plank", "category": "CORE" }))
            .await;
    assert_eq!(duplicate.status(), 400);

    let listed = AxumTestRequest::get(EXERCISES)
        .header("x-user-id", &user)
        .send(app)
        .await;
    assert_eq!(listed.status(), 200);
    let body: Value = listed.json();
    assert_eq!(body["total"], 1);
    assert_eq!(body["exercises"][0]["name"], "Plank");
}

#[tokio::test]
async fn test_update_and_delete_exercise() {
    let resources = create_test_resources().await;
    let user = Uuid::new_v4();
    let squat = create_exercise(resources.store.as_ref(), user, "Squat").await;
    log_set(resources.store.as_ref(), user, squat, at(2024, 6, 10, 18), 225.0, 5).await;
    let app = routes::router(resources);
    let path = format!("{EXERCISES}/{squat}");

    let renamed = AxumTestRequest::patch(&path)
        .header("x-user-id", &user.to_string())
        .json(&json!({ "name": "Squat (Barbell)", "notes": "High bar" }))
        .send(app.clone())
        .await;
    assert_eq!(renamed.status(), 200);
    let body: Value = renamed.json();
    assert_eq!(body["name"], "Squat (Barbell)");
    assert_eq!(body["notes"], "High bar");

    let stranger = AxumTestRequest::patch(&path)
        .header("x-user-id", &Uuid::new_v4().to_string())
        .json(&json!({ "name": "Mine now" }))
        .send(app.clone())
        .await;
    assert_eq!(stranger.status(), 404);

    let deleted = AxumTestRequest::delete(&path)
        .header("x-user-id", &user.to_string())
        .send(app.clone())
        .await;
    assert_eq!(deleted.status(), 204);

    let again = AxumTestRequest::delete(&path)
        .header("x-user-id", &user.to_string())
        .send(app.clone())
        .await;
    assert_eq!(again.status(), 404);
    let body: Value = again.json();
    assert_eq!(body["error"]["code"], "RESOURCE_NOT_FOUND");

    let recent = AxumTestRequest::get(RECENT_SETS)
        .header("x-user-id", &user.to_string())
        .send(app)
        .await;
    let body: Value = recent.json();
    assert!(body["sets"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_log_set_validation() {
    let resources = create_test_resources().await;
    let user = Uuid::new_v4();
    let curl = create_exercise(resources.store.as_ref(), user, "Spider Curl").await;
    let app = routes::router(resources);

    let cases = [
        (json!({ "exercise_id": curl, "reps": 10 }), 400, "INVALID_INPUT"),
        (
            json!({ "exercise_id": curl, "weight": 30.0, "reps": -1 }),
            400,
            "VALUE_OUT_OF_RANGE",
        ),
        (
            json!({ "exercise_id": curl, "weight": -30.0, "reps": 10 }),
            400,
            "VALUE_OUT_OF_RANGE",
        ),
        (
            json!({ "exercise_id": Uuid::new_v4(), "weight": 30.0, "reps": 10 }),
            404,
            "RESOURCE_NOT_FOUND",
        ),
    ];

    for (body, status, code) in cases {
        let response = AxumTestRequest::post(SETS)
            .header("x-user-id", &user.to_string())
            .json(&body)
            .send(app.clone())
            .await;
        assert_eq!(response.status(), status, "{body}");
        let error: Value = response.json();
        assert_eq!(error["error"]["code"], code, "{body}");
    }
}

#[tokio::test]
async fn test_log_set_uses_configured_unit_and_given_time() {
    let resources = create_test_resources().await;
    let user = Uuid::new_v4();
    let row = create_exercise(resources.store.as_ref(), user, "Seated Row").await;
    let store = resources.store.clone();
    let app = routes::router(resources);
    let performed_at = Utc::now() - Duration::days(3);

    let response = AxumTestRequest::post(SETS)
        .header("x-user-id", &user.to_string())
        .json(&json!({
            "exercise_id": row,
            "weight": 120.0,
            "reps": 10,
            "unit": "stone",
            "performed_at": performed_at,
        }))
        .send(app)
        .await;
    assert_eq!(response.status(), 201);
    let body: Value = response.json();
    assert_eq!(body["unit"], "lbs");

    let stored = store
        .sets_in_range(
            user,
            performed_at - Duration::seconds(1),
            performed_at + Duration::seconds(1),
        )
        .await
        .unwrap();
    assert_eq!(stored.len(), 1);
    assert_close(stored[0].weight, 120.0);
}

#[tokio::test]
async fn test_delete_set_is_owner_only() {
    let resources = create_test_resources().await;
    let user = Uuid::new_v4();
    let press = create_exercise(resources.store.as_ref(), user, "Incline Press").await;
    let set = log_set(resources.store.as_ref(), user, press, at(2024, 6, 10, 18), 155.0, 8).await;
    let app = routes::router(resources);
    let path = format!("{SETS}/{set}");

    let stranger = AxumTestRequest::delete(&path)
        .header("x-user-id", &Uuid::new_v4().to_string())
        .send(app.clone())
        .await;
    assert_eq!(stranger.status(), 404);

    let bad_id = AxumTestRequest::delete(&format!("{SETS}/not-a-set"))
        .header("x-user-id", &user.to_string())
        .send(app.clone())
        .await;
    assert_eq!(bad_id.status(), 404);

    let owner = AxumTestRequest::delete(&path)
        .header("x-user-id", &user.to_string())
        .send(app)
        .await;
    assert_eq!(owner.status(), 204);
}

#[tokio::test]
async fn test_recent_listings() {
    let resources = create_test_resources().await;
    let user = Uuid::new_v4();
    let store = resources.store.as_ref();
    let deadlift = create_exercise(store, user, "Deadlift").await;
    let pullup = create_exercise(store, user, "Pull-Up").await;
    log_set(store, user, deadlift, at(2024, 6, 1, 9), 315.0, 3).await;
    log_set(store, user, pullup, at(2024, 6, 2, 9), 0.0, 10).await;
    let app = routes::router(resources);

    let exercises = AxumTestRequest::get(RECENT_EXERCISES)
        .header("x-user-id", &user.to_string())
        .send(app.clone())
        .await;
    assert_eq!(exercises.status(), 200);
    let body: Value = exercises.json();
    let names: Vec<_> = body["exercises"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(names, ["Pull-Up", "Deadlift"]);

    let sets = AxumTestRequest::get(&format!("{RECENT_SETS}?unit=kg"))
        .header("x-user-id", &user.to_string())
        .send(app)
        .await;
    assert_eq!(sets.status(), 200);
    let body: Value = sets.json();
    assert_eq!(body["unit"], "kg");
    assert_eq!(body["sets"][0]["exercise_name"], "Pull-Up");
    assert_close(
        body["sets"][1]["weight"].as_f64().unwrap(),
        315.0 / 2.204_62,
    );
}
