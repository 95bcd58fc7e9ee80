// ABOUTME: Integration tests for the SQLite set store
// ABOUTME: Covers exercise catalog rules, set validation, range queries, and file-backed databases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{at, create_exercise, create_test_store, log_set};
use liftlog_core::errors::ErrorCode;
use liftlog_core::models::ExerciseCategory;
use liftlog_server::config::{DatabaseConfig, DatabaseUrl};
use liftlog_server::database::{ExerciseUpdate, NewExercise, NewSet, SetStore, SqliteSetStore};
use tempfile::TempDir;
use uuid::Uuid;

#[tokio::test]
async fn test_exercise_names_are_unique_per_user() {
    let store = create_test_store().await;
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();

    create_exercise(&store, alice, "Deadlift").await;
    let err = store
        .create_exercise(alice, &NewExercise::new("Deadlift", ExerciseCategory::Back))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    // Another user may reuse the name
    create_exercise(&store, bob, "Deadlift").await;

    assert_eq!(store.count_exercises(alice).await.unwrap(), 1);
    assert_eq!(store.count_exercises(bob).await.unwrap(), 1);
    assert_eq!(store.count_exercises(Uuid::new_v4()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_list_exercises_sorted_by_name() {
    let store = create_test_store().await;
    let user = Uuid::new_v4();
    store
        .create_exercise(user, &NewExercise::new("Squat (Barbell)", ExerciseCategory::Legs))
        .await
        .unwrap();
    store
        .create_exercise(
            user,
            &NewExercise::new("  Bench Press (Barbell) ", ExerciseCategory::Chest),
        )
        .await
        .unwrap();

    let exercises = store.list_exercises(user).await.unwrap();
    let names: Vec<_> = exercises.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Bench Press (Barbell)", "Squat (Barbell)"]);
    assert_eq!(exercises[1].category, ExerciseCategory::Legs);
    assert!(exercises.iter().all(|e| e.user_id == user));
}

#[tokio::test]
async fn test_blank_exercise_name_rejected() {
    let store = create_test_store().await;
    let err = store
        .create_exercise(Uuid::new_v4(), &NewExercise::new("   ", ExerciseCategory::Core))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_record_set_requires_owned_exercise() {
    let store = create_test_store().await;
    let owner = Uuid::new_v4();
    let intruder = Uuid::new_v4();
    let exercise = create_exercise(&store, owner, "Bench Press (Barbell)").await;

    let set = NewSet {
        exercise_id: exercise,
        performed_at: at(2024, 6, 10, 18),
        weight: 135.0,
        reps: 5,
    };
    let err = store.record_set(intruder, set).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);

    let err = store
        .record_set(owner, NewSet { weight: -5.0, ..set })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);

    assert!(store.record_set(owner, set).await.is_ok());
}

#[tokio::test]
async fn test_sets_in_range_is_half_open_and_user_scoped() {
    let store = create_test_store().await;
    let user = Uuid::new_v4();
    let other = Uuid::new_v4();
    let exercise = create_exercise(&store, user, "Squat (Barbell)").await;
    let other_exercise = create_exercise(&store, other, "Squat (Barbell)").await;

    log_set(&store, user, exercise, at(2024, 6, 9, 23), 100.0, 5).await;
    log_set(&store, user, exercise, at(2024, 6, 10, 0), 200.0, 5).await;
    log_set(&store, user, exercise, at(2024, 6, 10, 12), 150.0, 3).await;
    log_set(&store, user, exercise, at(2024, 6, 11, 0), 300.0, 1).await;
    log_set(&store, other, other_exercise, at(2024, 6, 10, 12), 999.0, 1).await;

    let sets = store
        .sets_in_range(user, at(2024, 6, 10, 0), at(2024, 6, 11, 0))
        .await
        .unwrap();

    assert_eq!(sets.len(), 2);
    assert_eq!(sets[0].performed_at, at(2024, 6, 10, 0));
    assert_eq!(sets[1].performed_at, at(2024, 6, 10, 12));
    assert!(sets.iter().all(|s| s.exercise_id == exercise));
}

#[tokio::test]
async fn test_create_exercise_keeps_notes() {
    let store = create_test_store().await;
    let user = Uuid::new_v4();

    let created = store
        .create_exercise(
            user,
            &NewExercise::new("Romanian Deadlift", ExerciseCategory::Legs)
                .with_notes("Slow eccentric"),
        )
        .await
        .unwrap();

    let fetched = store.get_exercise(user, created.id).await.unwrap().unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.notes.as_deref(), Some("Slow eccentric"));
    assert_eq!(store.get_exercise(Uuid::new_v4(), created.id).await.unwrap(), None);
}

#[tokio::test]
async fn test_update_exercise_is_partial_and_user_scoped() {
    let store = create_test_store().await;
    let user = Uuid::new_v4();
    let press = create_exercise(&store, user, "Overhead Press").await;
    create_exercise(&store, user, "Push Press").await;

    let renamed = store
        .update_exercise(
            user,
            press,
            &ExerciseUpdate {
                name: Some(" Strict Press ".to_owned()),
                notes: None,
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(renamed.name, "Strict Press");
    assert_eq!(renamed.notes, None);

    let noted = store
        .update_exercise(
            user,
            press,
            &ExerciseUpdate {
                name: None,
                notes: Some("Belt on top sets".to_owned()),
            },
        )
        .await
        .unwrap()
        .unwrap();
    assert_eq!(noted.name, "Strict Press");
    assert_eq!(noted.notes.as_deref(), Some("Belt on top sets"));

    let taken = ExerciseUpdate {
        name: Some("Push Press".to_owned()),
        notes: None,
    };
    let err = store.update_exercise(user, press, &taken).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let blank = ExerciseUpdate {
        name: Some("  ".to_owned()),
        notes: None,
    };
    let err = store.update_exercise(user, press, &blank).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);

    let stranger = store
        .update_exercise(Uuid::new_v4(), press, &ExerciseUpdate::default())
        .await
        .unwrap();
    assert_eq!(stranger, None);
}

#[tokio::test]
async fn test_delete_exercise_removes_its_sets() {
    let store = create_test_store().await;
    let user = Uuid::new_v4();
    let squat = create_exercise(&store, user, "Front Squat").await;
    let curl = create_exercise(&store, user, "Cable Curl").await;
    log_set(&store, user, squat, at(2024, 6, 10, 18), 185.0, 5).await;
    log_set(&store, user, curl, at(2024, 6, 10, 18), 40.0, 12).await;

    assert!(!store.delete_exercise(Uuid::new_v4(), squat).await.unwrap());
    assert!(store.delete_exercise(user, squat).await.unwrap());
    assert!(!store.delete_exercise(user, squat).await.unwrap());

    let remaining = store
        .sets_in_range(user, at(2024, 6, 10, 0), at(2024, 6, 11, 0))
        .await
        .unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].exercise_id, curl);
    assert_eq!(store.count_exercises(user).await.unwrap(), 1);
}

#[tokio::test]
async fn test_delete_set_is_user_scoped() {
    let store = create_test_store().await;
    let user = Uuid::new_v4();
    let exercise = create_exercise(&store, user, "Pendlay Row").await;
    let set = log_set(&store, user, exercise, at(2024, 6, 10, 18), 155.0, 6).await;

    assert!(!store.delete_set(Uuid::new_v4(), set).await.unwrap());
    assert!(store.get_set(user, set).await.unwrap().is_some());
    assert!(store.delete_set(user, set).await.unwrap());
    assert_eq!(store.get_set(user, set).await.unwrap(), None);
    assert!(!store.delete_set(user, set).await.unwrap());
}

#[tokio::test]
async fn test_set_entries_grouped_by_exercise_newest_first() {
    let store = create_test_store().await;
    let user = Uuid::new_v4();
    let squat = create_exercise(&store, user, "Squat (Barbell)").await;
    let bench = create_exercise(&store, user, "Bench Press (Barbell)").await;

    let first_squat = log_set(&store, user, squat, at(2024, 6, 10, 17), 225.0, 5).await;
    let bench_set = log_set(&store, user, bench, at(2024, 6, 10, 18), 185.0, 5).await;
    let second_squat = log_set(&store, user, squat, at(2024, 6, 10, 19), 245.0, 3).await;
    log_set(&store, user, squat, at(2024, 6, 11, 9), 135.0, 10).await;

    let entries = store
        .set_entries_in_range(user, at(2024, 6, 10, 0), at(2024, 6, 11, 0))
        .await
        .unwrap();

    let ids: Vec<_> = entries.iter().map(|entry| entry.id).collect();
    assert_eq!(ids, [bench_set, second_squat, first_squat]);
    assert_eq!(entries[0].exercise_name, "Bench Press (Barbell)");
    assert_eq!(entries[0].category, ExerciseCategory::Chest);
    assert_eq!(entries[1].reps, 3);
}

#[tokio::test]
async fn test_recent_sets_and_exercises_newest_first() {
    let store = create_test_store().await;
    let user = Uuid::new_v4();
    let deadlift = create_exercise(&store, user, "Deadlift").await;
    let dips = create_exercise(&store, user, "Dips").await;
    let lunge = create_exercise(&store, user, "Walking Lunge").await;
    create_exercise(&store, user, "Never Used").await;

    let first = log_set(&store, user, deadlift, at(2024, 6, 1, 9), 315.0, 3).await;
    let second = log_set(&store, user, dips, at(2024, 6, 2, 9), 0.0, 12).await;
    let third = log_set(&store, user, deadlift, at(2024, 6, 3, 9), 325.0, 2).await;
    let fourth = log_set(&store, user, lunge, at(2024, 5, 1, 9), 50.0, 20).await;

    // Ordered by when sets were logged, not when they were performed
    let recent: Vec<_> = store
        .recent_sets(user, 3)
        .await
        .unwrap()
        .into_iter()
        .map(|entry| entry.id)
        .collect();
    assert_eq!(recent, [fourth, third, second]);
    assert!(!recent.contains(&first));

    let exercises = store.recent_exercises(user, 10).await.unwrap();
    let names: Vec<_> = exercises.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Walking Lunge", "Deadlift", "Dips"]);

    assert_eq!(store.recent_exercises(user, 1).await.unwrap().len(), 1);
    assert!(store
        .recent_exercises(Uuid::new_v4(), 10)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_earliest_set_at() {
    let store = create_test_store().await;
    let user = Uuid::new_v4();
    assert_eq!(store.earliest_set_at(user).await.unwrap(), None);

    let exercise = create_exercise(&store, user, "Deadlift").await;
    log_set(&store, user, exercise, at(2024, 3, 2, 9), 225.0, 5).await;
    log_set(&store, user, exercise, at(2023, 11, 20, 7), 205.0, 5).await;

    assert_eq!(
        store.earliest_set_at(user).await.unwrap(),
        Some(at(2023, 11, 20, 7))
    );
}

#[tokio::test]
async fn test_file_database_survives_reconnect() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("liftlog.db");
    let config = DatabaseConfig {
        url: DatabaseUrl::SQLite { path },
        ..DatabaseConfig::default()
    };
    let user = Uuid::new_v4();

    {
        let store = SqliteSetStore::connect(&config).await.unwrap();
        let exercise = create_exercise(&store, user, "Hack Squat").await;
        log_set(&store, user, exercise, at(2024, 1, 5, 10), 180.0, 8).await;
        store.pool().close().await;
    }

    let store = SqliteSetStore::connect(&config).await.unwrap();
    store.health_check().await.unwrap();
    assert_eq!(store.count_exercises(user).await.unwrap(), 1);
    assert_eq!(
        store.earliest_set_at(user).await.unwrap(),
        Some(at(2024, 1, 5, 10))
    );
}
