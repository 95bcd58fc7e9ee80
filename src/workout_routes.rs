// ABOUTME: Workout log service for the exercise catalog and logged sets
// ABOUTME: Validates request bodies, converts weights between units, and calls the set store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Workout log service
//!
//! The write path behind the dashboard: users keep a catalog of exercises and
//! log sets against them. Weights arrive in the request's unit and are stored
//! in pounds; set listings convert them back.

use crate::auth::AuthResult;
use crate::constants::workouts::RECENT_LIMIT;
use crate::database::{Exercise, ExerciseUpdate, NewExercise, NewSet, RecentExercise, SetEntry};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::resources::ServerResources;
use chrono::{DateTime, Utc};
use liftlog_core::models::{ExerciseCategory, WeightUnit};
use liftlog_trends::calendar as dates;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Body for creating an exercise
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateExerciseRequest {
    /// Display name (required)
    pub name: Option<String>,
    /// Category token such as `CHEST` (required)
    pub category: Option<String>,
    /// Free-form notes
    pub notes: Option<String>,
}

/// Body for updating an exercise; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateExerciseRequest {
    /// New display name
    pub name: Option<String>,
    /// New notes
    pub notes: Option<String>,
}

/// Body for logging a set
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LogSetRequest {
    /// Exercise the set belongs to (required)
    pub exercise_id: Option<Uuid>,
    /// Weight in `unit` (required)
    pub weight: Option<f64>,
    /// Repetitions (required)
    pub reps: Option<i64>,
    /// When the set was performed; defaults to now
    pub performed_at: Option<DateTime<Utc>>,
    /// Unit of `weight`; defaults to the configured unit
    pub unit: Option<String>,
}

/// Exercise catalog listing
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseListResponse {
    /// Exercises ordered by name
    pub exercises: Vec<Exercise>,
    /// Number of exercises
    pub total: usize,
}

/// Exercises with recently logged sets
#[derive(Debug, Clone, Serialize)]
pub struct RecentExercisesResponse {
    /// Most recently used first
    pub exercises: Vec<RecentExercise>,
}

/// A single set with its weight in `unit`
#[derive(Debug, Clone, Serialize)]
pub struct SetResponse {
    /// Unit of `weight`
    pub unit: WeightUnit,
    /// The set
    #[serde(flatten)]
    pub set: SetEntry,
}

/// A list of sets with weights in `unit`
#[derive(Debug, Clone, Serialize)]
pub struct SetListResponse {
    /// Unit of every `weight`
    pub unit: WeightUnit,
    /// The sets
    pub sets: Vec<SetEntry>,
}

/// Service behind the exercise and set endpoints
#[derive(Clone)]
pub struct WorkoutService {
    resources: Arc<ServerResources>,
}

impl WorkoutService {
    /// Creates a new workout service with the given server resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    fn resolve_unit(&self, unit: Option<&str>) -> WeightUnit {
        self.resources.config.dashboard.unit_or_default(unit)
    }

    /// The caller's exercise catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn list_exercises(&self, auth: AuthResult) -> AppResult<ExerciseListResponse> {
        let user_id = auth.require_user()?;
        let exercises = self.resources.store.list_exercises(user_id).await?;
        Ok(ExerciseListResponse {
            total: exercises.len(),
            exercises,
        })
    }

    /// Add an exercise to the caller's catalog
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` when the name or category is missing or the
    /// name is already taken
    pub async fn create_exercise(
        &self,
        auth: AuthResult,
        request: CreateExerciseRequest,
    ) -> AppResult<Exercise> {
        let user_id = auth.require_user()?;
        let (Some(name), Some(category)) = (request.name, request.category) else {
            return Err(AppError::invalid_input(
                "Exercise name and category are required",
            ));
        };

        let exercise = NewExercise {
            name,
            category: ExerciseCategory::parse(&category),
            notes: request.notes,
        };
        let created = self
            .resources
            .store
            .create_exercise(user_id, &exercise)
            .await?;

        AppLogger::log_workout_change(
            &user_id.to_string(),
            "create",
            "exercise",
            &created.id.to_string(),
        );
        Ok(created)
    }

    /// Rename an exercise or change its notes
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` when the caller owns no such exercise
    pub async fn update_exercise(
        &self,
        auth: AuthResult,
        exercise_id: &str,
        request: UpdateExerciseRequest,
    ) -> AppResult<Exercise> {
        let user_id = auth.require_user()?;
        let id = parse_id(exercise_id, "Exercise")?;
        let update = ExerciseUpdate {
            name: request.name,
            notes: request.notes,
        };

        let updated = self
            .resources
            .store
            .update_exercise(user_id, id, &update)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Exercise {id}")))?;

        AppLogger::log_workout_change(&user_id.to_string(), "update", "exercise", &id.to_string());
        Ok(updated)
    }

    /// Delete an exercise together with its sets
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` when the caller owns no such exercise
    pub async fn delete_exercise(&self, auth: AuthResult, exercise_id: &str) -> AppResult<()> {
        let user_id = auth.require_user()?;
        let id = parse_id(exercise_id, "Exercise")?;

        if !self.resources.store.delete_exercise(user_id, id).await? {
            return Err(AppError::not_found(format!("Exercise {id}")));
        }

        AppLogger::log_workout_change(&user_id.to_string(), "delete", "exercise", &id.to_string());
        Ok(())
    }

    /// Exercises the caller logged sets for most recently
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn recent_exercises(&self, auth: AuthResult) -> AppResult<RecentExercisesResponse> {
        let user_id = auth.require_user()?;
        let exercises = self
            .resources
            .store
            .recent_exercises(user_id, RECENT_LIMIT)
            .await?;
        Ok(RecentExercisesResponse { exercises })
    }

    /// Log a set performed now unless the request says otherwise
    ///
    /// # Errors
    ///
    /// See [`WorkoutService::log_set_at`]
    pub async fn log_set(&self, auth: AuthResult, request: LogSetRequest) -> AppResult<SetResponse> {
        self.log_set_at(auth, request, Utc::now()).await
    }

    /// Log a set, defaulting its performance time to `now`
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for missing fields, `VALUE_OUT_OF_RANGE` for a
    /// negative weight or rep count, and `RESOURCE_NOT_FOUND` when the caller
    /// owns no such exercise
    pub async fn log_set_at(
        &self,
        auth: AuthResult,
        request: LogSetRequest,
        now: DateTime<Utc>,
    ) -> AppResult<SetResponse> {
        let user_id = auth.require_user()?;
        let (Some(exercise_id), Some(weight), Some(reps)) =
            (request.exercise_id, request.weight, request.reps)
        else {
            return Err(AppError::invalid_input(
                "exercise_id, weight and reps are required",
            ));
        };
        let reps = u32::try_from(reps).map_err(|_| {
            AppError::out_of_range(format!("reps must be a non-negative count, got {reps}"))
        })?;
        let unit = self.resolve_unit(request.unit.as_deref());

        let set = NewSet {
            exercise_id,
            performed_at: request.performed_at.unwrap_or(now),
            weight: unit.to_pounds(weight),
            reps,
        };
        let store = &self.resources.store;
        let id = store.record_set(user_id, set).await?;
        let entry = store
            .get_set(user_id, id)
            .await?
            .ok_or_else(|| AppError::internal(format!("Set {id} missing after insert")))?;

        AppLogger::log_workout_change(&user_id.to_string(), "create", "set", &id.to_string());
        Ok(SetResponse {
            unit,
            set: in_unit(entry, unit),
        })
    }

    /// Delete one of the caller's sets
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` when the caller owns no such set
    pub async fn delete_set(&self, auth: AuthResult, set_id: &str) -> AppResult<()> {
        let user_id = auth.require_user()?;
        let id = parse_id(set_id, "Set")?;

        if !self.resources.store.delete_set(user_id, id).await? {
            return Err(AppError::not_found(format!("Set {id}")));
        }

        AppLogger::log_workout_change(&user_id.to_string(), "delete", "set", &id.to_string());
        Ok(())
    }

    /// Sets performed today in the reporting calendar
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn todays_sets(
        &self,
        auth: AuthResult,
        unit: Option<&str>,
    ) -> AppResult<SetListResponse> {
        self.todays_sets_at(auth, unit, Utc::now()).await
    }

    /// Sets performed on the reporting day containing `now`
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn todays_sets_at(
        &self,
        auth: AuthResult,
        unit: Option<&str>,
        now: DateTime<Utc>,
    ) -> AppResult<SetListResponse> {
        let user_id = auth.require_user()?;
        let unit = self.resolve_unit(unit);
        let calendar = &self.resources.calendar;
        let today = calendar.today_at(now);
        let (start, end) = calendar.utc_range(today, dates::days_after(today, 1));

        let sets = self
            .resources
            .store
            .set_entries_in_range(user_id, start, end)
            .await?;
        debug!(user_id = %user_id, day = %today, sets = sets.len(), "Loaded today's sets");

        Ok(list_in_unit(sets, unit))
    }

    /// The caller's most recently logged sets
    ///
    /// # Errors
    ///
    /// Returns an error if the store fails
    pub async fn recent_sets(
        &self,
        auth: AuthResult,
        unit: Option<&str>,
    ) -> AppResult<SetListResponse> {
        let user_id = auth.require_user()?;
        let unit = self.resolve_unit(unit);
        let sets = self
            .resources
            .store
            .recent_sets(user_id, RECENT_LIMIT)
            .await?;
        Ok(list_in_unit(sets, unit))
    }
}

/// Ids that do not parse cannot name an existing row
fn parse_id(raw: &str, resource: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| AppError::not_found(format!("{resource} {raw}")))
}

fn in_unit(mut entry: SetEntry, unit: WeightUnit) -> SetEntry {
    entry.weight = unit.from_pounds(entry.weight);
    entry
}

fn list_in_unit(sets: Vec<SetEntry>, unit: WeightUnit) -> SetListResponse {
    SetListResponse {
        unit,
        sets: sets.into_iter().map(|entry| in_unit(entry, unit)).collect(),
    }
}
