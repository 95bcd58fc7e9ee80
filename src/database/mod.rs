// ABOUTME: Set store abstraction for exercises and logged sets
// ABOUTME: Defines the async SetStore trait, row types, and the SQLite implementation export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Set Store
//!
//! Persistent storage of exercises and sets, scoped per user. Every query
//! filters on the owning user, so one user's ids are invisible to another.
//! The dashboard only ever asks for one user's sets inside a half-open UTC
//! range, and for the earliest set a user has logged.

mod sets;

pub use sets::SqliteSetStore;

use crate::calendar::ReportingCalendar;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use liftlog_core::models::{ExerciseCategory, LoggedSet, SetRecord};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An exercise in a user's catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise id
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Display name, unique per user
    pub name: String,
    /// Muscle-group category
    pub category: ExerciseCategory,
    /// Free-form notes
    pub notes: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// An exercise to be added to a catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExercise {
    /// Display name; surrounding whitespace is dropped
    pub name: String,
    /// Muscle-group category
    pub category: ExerciseCategory,
    /// Free-form notes
    pub notes: Option<String>,
}

impl NewExercise {
    /// Exercise without notes
    pub fn new(name: impl Into<String>, category: ExerciseCategory) -> Self {
        Self {
            name: name.into(),
            category,
            notes: None,
        }
    }

    /// Attach notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Partial update of an exercise; `None` leaves a field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseUpdate {
    /// New display name
    pub name: Option<String>,
    /// New notes
    pub notes: Option<String>,
}

/// An exercise with the time a set was last logged for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentExercise {
    /// Exercise id
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Muscle-group category
    pub category: ExerciseCategory,
    /// When the latest set for this exercise was logged
    pub last_used: DateTime<Utc>,
}

/// A set to be recorded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewSet {
    /// Exercise the set belongs to; must be owned by the same user
    pub exercise_id: Uuid,
    /// When the set was performed
    pub performed_at: DateTime<Utc>,
    /// Weight in pounds
    pub weight: f64,
    /// Repetitions
    pub reps: u32,
}

impl NewSet {
    /// Check the numeric fields before they reach storage
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` for a negative or non-finite weight
    pub fn validate(&self) -> AppResult<()> {
        if !self.weight.is_finite() || self.weight < 0.0 {
            return Err(AppError::out_of_range(format!(
                "weight must be a non-negative number, got {}",
                self.weight
            )));
        }
        Ok(())
    }
}

/// A set as read back from storage
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StoredSet {
    /// Set id
    pub id: Uuid,
    /// Exercise the set belongs to
    pub exercise_id: Uuid,
    /// When the set was performed
    pub performed_at: DateTime<Utc>,
    /// Weight in pounds
    pub weight: f64,
    /// Repetitions as stored
    pub reps: i64,
}

/// A set joined with the exercise it belongs to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SetEntry {
    /// Set id
    pub id: Uuid,
    /// Exercise the set belongs to
    pub exercise_id: Uuid,
    /// Exercise display name
    pub exercise_name: String,
    /// Exercise category
    pub category: ExerciseCategory,
    /// When the set was performed
    pub performed_at: DateTime<Utc>,
    /// Weight in pounds
    pub weight: f64,
    /// Repetitions
    pub reps: i64,
    /// When the set was logged
    pub created_at: DateTime<Utc>,
}

impl StoredSet {
    /// Convert to the engine's record type in `calendar`
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` when the stored numbers are not a valid set
    pub fn to_record(&self, calendar: &ReportingCalendar) -> AppResult<SetRecord> {
        SetRecord::from_stored(calendar.to_local(self.performed_at), self.weight, self.reps)
    }

    /// Convert to a record tagged with its exercise
    ///
    /// # Errors
    ///
    /// Same as [`StoredSet::to_record`]
    pub fn to_logged(&self, calendar: &ReportingCalendar) -> AppResult<LoggedSet> {
        Ok(LoggedSet {
            exercise_id: self.exercise_id,
            record: self.to_record(calendar)?,
        })
    }
}

/// Storage of exercises and sets
#[async_trait]
pub trait SetStore: Send + Sync {
    /// Create the schema if it does not exist
    async fn migrate(&self) -> AppResult<()>;

    /// Add an exercise to a user's catalog
    async fn create_exercise(&self, user_id: Uuid, exercise: &NewExercise) -> AppResult<Exercise>;

    /// One exercise owned by a user
    async fn get_exercise(&self, user_id: Uuid, exercise_id: Uuid) -> AppResult<Option<Exercise>>;

    /// All exercises owned by a user, ordered by name
    async fn list_exercises(&self, user_id: Uuid) -> AppResult<Vec<Exercise>>;

    /// Apply `update` to an exercise; `None` when the user owns no such exercise
    async fn update_exercise(
        &self,
        user_id: Uuid,
        exercise_id: Uuid,
        update: &ExerciseUpdate,
    ) -> AppResult<Option<Exercise>>;

    /// Delete an exercise and its sets; `false` when the user owns no such exercise
    async fn delete_exercise(&self, user_id: Uuid, exercise_id: Uuid) -> AppResult<bool>;

    /// Exercises with logged sets, most recently used first
    async fn recent_exercises(
        &self,
        user_id: Uuid,
        limit: u32,
    ) -> AppResult<Vec<RecentExercise>>;

    /// Number of exercises owned by a user
    async fn count_exercises(&self, user_id: Uuid) -> AppResult<u64>;

    /// Record one set and return its id
    async fn record_set(&self, user_id: Uuid, set: NewSet) -> AppResult<Uuid>;

    /// One set owned by a user, with its exercise
    async fn get_set(&self, user_id: Uuid, set_id: Uuid) -> AppResult<Option<SetEntry>>;

    /// Delete a set; `false` when the user owns no such set
    async fn delete_set(&self, user_id: Uuid, set_id: Uuid) -> AppResult<bool>;

    /// Sets performed in `[start, end)` with their exercises, grouped by
    /// exercise name and newest first within an exercise
    async fn set_entries_in_range(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<SetEntry>>;

    /// The most recently logged sets, newest first
    async fn recent_sets(&self, user_id: Uuid, limit: u32) -> AppResult<Vec<SetEntry>>;

    /// A user's sets performed in `[start, end)`, oldest first
    async fn sets_in_range(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<StoredSet>>;

    /// Timestamp of a user's first set, if any
    async fn earliest_set_at(&self, user_id: Uuid) -> AppResult<Option<DateTime<Utc>>>;

    /// Check the store can serve queries
    async fn health_check(&self) -> AppResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use liftlog_core::errors::ErrorCode;

    #[test]
    fn test_new_set_validation() {
        let set = NewSet {
            exercise_id: Uuid::new_v4(),
            performed_at: Utc::now(),
            weight: -10.0,
            reps: 5,
        };
        assert_eq!(set.validate().unwrap_err().code, ErrorCode::ValueOutOfRange);
        assert!(NewSet { weight: 0.0, ..set }.validate().is_ok());
        assert!(NewSet {
            weight: f64::NAN,
            ..set
        }
        .validate()
        .is_err());
    }

    #[test]
    fn test_stored_set_uses_reporting_date() {
        let stored = StoredSet {
            id: Uuid::new_v4(),
            exercise_id: Uuid::new_v4(),
            performed_at: Utc.with_ymd_and_hms(2024, 6, 15, 3, 0, 0).unwrap(),
            weight: 100.0,
            reps: 5,
        };
        let calendar = ReportingCalendar::from_offset_minutes(Some(-300)).unwrap();
        let logged = stored.to_logged(&calendar).unwrap();

        assert_eq!(
            logged.record.date(),
            NaiveDate::from_ymd_opt(2024, 6, 14).unwrap()
        );
        assert!((logged.record.volume() - 500.0).abs() < f64::EPSILON);
    }
}
