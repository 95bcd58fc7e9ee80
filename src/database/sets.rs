// ABOUTME: SQLite implementation of the set store using sqlx
// ABOUTME: Handles schema creation, exercise catalog rows, and range queries over logged sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{
    Exercise, ExerciseUpdate, NewExercise, NewSet, RecentExercise, SetEntry, SetStore, StoredSet,
};
use crate::config::{DatabaseConfig, DatabaseUrl};
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use liftlog_core::models::ExerciseCategory;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Error as SqlxError, Row, SqlitePool};
use std::str::FromStr;
use tokio::fs;
use tracing::{debug, info};
use uuid::Uuid;

/// Fixed-width UTC text so that string comparison orders timestamps
fn to_db_timestamp(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn from_db_timestamp(raw: &str) -> AppResult<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(raw)?.with_timezone(&Utc))
}

fn exercise_name(raw: &str) -> AppResult<&str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(AppError::invalid_input("Exercise name must not be empty"));
    }
    Ok(name)
}

fn exercise_write_error(error: &SqlxError, name: &str, user_id: Uuid, action: &str) -> AppError {
    match error.as_database_error() {
        Some(db) if db.is_unique_violation() => {
            AppError::invalid_input(format!("Exercise '{name}' already exists"))
                .with_user_id(user_id)
        }
        _ => AppError::database(format!("Failed to {action} exercise: {error}")),
    }
}

const SET_ENTRY_COLUMNS: &str = r"
    SELECT s.id, s.exercise_id, e.name AS exercise_name, e.category,
           s.performed_at, s.weight, s.reps, s.created_at
    FROM workout_sets s
    JOIN exercises e ON e.id = s.exercise_id
";

/// `SQLite`-backed [`SetStore`]
#[derive(Clone)]
pub struct SqliteSetStore {
    pool: SqlitePool,
}

impl SqliteSetStore {
    /// Wrap an existing pool
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the database described by `config`, creating the file if needed
    ///
    /// Runs the schema migration when `auto_migrate` is set.
    ///
    /// # Errors
    ///
    /// Returns `DATABASE_ERROR` if the connection or migration fails
    pub async fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        if let DatabaseUrl::SQLite { path } = &config.url {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).await.map_err(|e| {
                    AppError::database(format!(
                        "Failed to create database directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        let options = SqliteConnectOptions::from_str(&config.url.to_connection_string())
            .map_err(|e| AppError::database(format!("Invalid database URL: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true);

        // Each in-memory connection is its own database, so keep exactly one alive
        let mut pool_options =
            SqlitePoolOptions::new().max_connections(config.effective_max_connections());
        if config.url.is_memory() {
            pool_options = pool_options.idle_timeout(None).max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        let store = Self::new(pool);
        if config.auto_migrate {
            store.migrate().await?;
        }
        info!(database = %config.url, "Set store ready");
        Ok(store)
    }

    /// Underlying pool, for tests and maintenance tasks
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn exercise_belongs_to(&self, exercise_id: Uuid, user_id: Uuid) -> AppResult<bool> {
        let row = sqlx::query("SELECT 1 FROM exercises WHERE id = $1 AND user_id = $2")
            .bind(exercise_id.to_string())
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to look up exercise: {e}")))?;
        Ok(row.is_some())
    }
}

#[async_trait]
impl SetStore for SqliteSetStore {
    async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercises (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                name TEXT NOT NULL,
                category TEXT NOT NULL,
                notes TEXT,
                created_at TEXT NOT NULL,
                UNIQUE (user_id, name)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workout_sets (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                exercise_id TEXT NOT NULL REFERENCES exercises(id) ON DELETE CASCADE,
                performed_at TEXT NOT NULL,
                weight REAL NOT NULL CHECK (weight >= 0),
                reps INTEGER NOT NULL CHECK (reps >= 0),
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_workout_sets_user_performed ON workout_sets(user_id, performed_at)",
        )
        .execute(&self.pool)
        .await?;

        debug!("Set store schema is up to date");
        Ok(())
    }

    async fn create_exercise(&self, user_id: Uuid, exercise: &NewExercise) -> AppResult<Exercise> {
        let name = exercise_name(&exercise.name)?;
        let created = Exercise {
            id: Uuid::new_v4(),
            user_id,
            name: name.to_owned(),
            category: exercise.category,
            notes: exercise.notes.clone(),
            // Stored precision, so the returned row equals a later read
            created_at: Utc::now().trunc_subsecs(6),
        };

        sqlx::query(
            r"
            INSERT INTO exercises (id, user_id, name, category, notes, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(created.id.to_string())
        .bind(user_id.to_string())
        .bind(&created.name)
        .bind(created.category.as_str())
        .bind(created.notes.as_deref())
        .bind(to_db_timestamp(created.created_at))
        .execute(&self.pool)
        .await
        .map_err(|e| exercise_write_error(&e, name, user_id, "create"))?;

        Ok(created)
    }

    async fn get_exercise(&self, user_id: Uuid, exercise_id: Uuid) -> AppResult<Option<Exercise>> {
        let row = sqlx::query(
            r"
            SELECT id, user_id, name, category, notes, created_at
            FROM exercises
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(exercise_id.to_string())
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get exercise: {e}")))?;

        row.as_ref().map(row_to_exercise).transpose()
    }

    async fn list_exercises(&self, user_id: Uuid) -> AppResult<Vec<Exercise>> {
        let rows = sqlx::query(
            r"
            SELECT id, user_id, name, category, notes, created_at
            FROM exercises
            WHERE user_id = $1
            ORDER BY name ASC
            ",
        )
        .bind(user_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list exercises: {e}")))?;

        rows.iter().map(row_to_exercise).collect()
    }

    async fn update_exercise(
        &self,
        user_id: Uuid,
        exercise_id: Uuid,
        update: &ExerciseUpdate,
    ) -> AppResult<Option<Exercise>> {
        let Some(existing) = self.get_exercise(user_id, exercise_id).await? else {
            return Ok(None);
        };

        let name = match update.name.as_deref() {
            Some(raw) => exercise_name(raw)?,
            None => existing.name.as_str(),
        };
        let notes = update.notes.as_deref().or(existing.notes.as_deref());

        let result = sqlx::query(
            r"
            UPDATE exercises SET name = $1, notes = $2
            WHERE id = $3 AND user_id = $4
            ",
        )
        .bind(name)
        .bind(notes)
        .bind(exercise_id.to_string())
        .bind(user_id.to_string())
        .execute(&self.pool)
        .await
        .map_err(|e| exercise_write_error(&e, name, user_id, "update"))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        self.get_exercise(user_id, exercise_id).await
    }

    async fn delete_exercise(&self, user_id: Uuid, exercise_id: Uuid) -> AppResult<bool> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM workout_sets WHERE exercise_id = $1 AND user_id = $2")
            .bind(exercise_id.to_string())
            .bind(user_id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete exercise sets: {e}")))?;

        let result = sqlx::query("DELETE FROM exercises WHERE id = $1 AND user_id = $2")
            .bind(exercise_id.to_string())
            .bind(user_id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete exercise: {e}")))?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    async fn recent_exercises(
        &self,
        user_id: Uuid,
        limit: u32,
    ) -> AppResult<Vec<RecentExercise>> {
        let rows = sqlx::query(
            r"
            SELECT e.id, e.name, e.category,
                   MAX(s.created_at) AS last_used, MAX(s.rowid) AS last_row
            FROM workout_sets s
            JOIN exercises e ON e.id = s.exercise_id
            WHERE s.user_id = $1
            GROUP BY e.id, e.name, e.category
            ORDER BY last_used DESC, last_row DESC
            LIMIT $2
            ",
        )
        .bind(user_id.to_string())
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to query recent exercises: {e}")))?;

        rows.iter().map(row_to_recent_exercise).collect()
    }

    async fn count_exercises(&self, user_id: Uuid) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM exercises WHERE user_id = $1")
            .bind(user_id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to count exercises: {e}")))?;

        u64::try_from(count).map_err(|_| AppError::internal(format!("Negative row count: {count}")))
    }

    async fn record_set(&self, user_id: Uuid, set: NewSet) -> AppResult<Uuid> {
        set.validate()?;
        if !self.exercise_belongs_to(set.exercise_id, user_id).await? {
            return Err(AppError::not_found(format!("Exercise {}", set.exercise_id))
                .with_user_id(user_id));
        }

        let id = Uuid::new_v4();
        sqlx::query(
            r"
            INSERT INTO workout_sets (id, user_id, exercise_id, performed_at, weight, reps, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(id.to_string())
        .bind(user_id.to_string())
        .bind(set.exercise_id.to_string())
        .bind(to_db_timestamp(set.performed_at))
        .bind(set.weight)
        .bind(i64::from(set.reps))
        .bind(to_db_timestamp(Utc::now()))
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to record set: {e}")))?;

        Ok(id)
    }

    async fn get_set(&self, user_id: Uuid, set_id: Uuid) -> AppResult<Option<SetEntry>> {
        let row = sqlx::query(&format!(
            "{SET_ENTRY_COLUMNS} WHERE s.id = $1 AND s.user_id = $2"
        ))
        .bind(set_id.to_string())
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get set: {e}")))?;

        row.as_ref().map(row_to_set_entry).transpose()
    }

    async fn delete_set(&self, user_id: Uuid, set_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM workout_sets WHERE id = $1 AND user_id = $2")
            .bind(set_id.to_string())
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Failed to delete set: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    async fn set_entries_in_range(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<SetEntry>> {
        let rows = sqlx::query(&format!(
            "{SET_ENTRY_COLUMNS}
            WHERE s.user_id = $1 AND s.performed_at >= $2 AND s.performed_at < $3
            ORDER BY e.name ASC, s.created_at DESC, s.rowid DESC"
        ))
        .bind(user_id.to_string())
        .bind(to_db_timestamp(start))
        .bind(to_db_timestamp(end))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to query sets: {e}")))?;

        rows.iter().map(row_to_set_entry).collect()
    }

    async fn recent_sets(&self, user_id: Uuid, limit: u32) -> AppResult<Vec<SetEntry>> {
        let rows = sqlx::query(&format!(
            "{SET_ENTRY_COLUMNS}
            WHERE s.user_id = $1
            ORDER BY s.created_at DESC, s.rowid DESC
            LIMIT $2"
        ))
        .bind(user_id.to_string())
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to query recent sets: {e}")))?;

        rows.iter().map(row_to_set_entry).collect()
    }

    async fn sets_in_range(
        &self,
        user_id: Uuid,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> AppResult<Vec<StoredSet>> {
        let rows = sqlx::query(
            r"
            SELECT id, exercise_id, performed_at, weight, reps
            FROM workout_sets
            WHERE user_id = $1 AND performed_at >= $2 AND performed_at < $3
            ORDER BY performed_at ASC
            ",
        )
        .bind(user_id.to_string())
        .bind(to_db_timestamp(start))
        .bind(to_db_timestamp(end))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to query sets: {e}")))?;

        debug!(user_id = %user_id, rows = rows.len(), "Loaded sets for range");
        rows.iter().map(row_to_stored_set).collect()
    }

    async fn earliest_set_at(&self, user_id: Uuid) -> AppResult<Option<DateTime<Utc>>> {
        let earliest: Option<String> =
            sqlx::query_scalar("SELECT MIN(performed_at) FROM workout_sets WHERE user_id = $1")
                .bind(user_id.to_string())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| AppError::database(format!("Failed to query earliest set: {e}")))?;

        earliest.as_deref().map(from_db_timestamp).transpose()
    }

    async fn health_check(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

fn row_to_exercise(row: &SqliteRow) -> AppResult<Exercise> {
    let id: String = row.get("id");
    let user_id: String = row.get("user_id");
    let category: String = row.get("category");
    let created_at: String = row.get("created_at");

    Ok(Exercise {
        id: Uuid::parse_str(&id)?,
        user_id: Uuid::parse_str(&user_id)?,
        name: row.get("name"),
        category: ExerciseCategory::parse(&category),
        notes: row.get("notes"),
        created_at: from_db_timestamp(&created_at)?,
    })
}

fn row_to_recent_exercise(row: &SqliteRow) -> AppResult<RecentExercise> {
    let id: String = row.get("id");
    let category: String = row.get("category");
    let last_used: String = row.get("last_used");

    Ok(RecentExercise {
        id: Uuid::parse_str(&id)?,
        name: row.get("name"),
        category: ExerciseCategory::parse(&category),
        last_used: from_db_timestamp(&last_used)?,
    })
}

fn row_to_set_entry(row: &SqliteRow) -> AppResult<SetEntry> {
    let id: String = row.get("id");
    let exercise_id: String = row.get("exercise_id");
    let category: String = row.get("category");
    let performed_at: String = row.get("performed_at");
    let created_at: String = row.get("created_at");

    Ok(SetEntry {
        id: Uuid::parse_str(&id)?,
        exercise_id: Uuid::parse_str(&exercise_id)?,
        exercise_name: row.get("exercise_name"),
        category: ExerciseCategory::parse(&category),
        performed_at: from_db_timestamp(&performed_at)?,
        weight: row.get("weight"),
        reps: row.get("reps"),
        created_at: from_db_timestamp(&created_at)?,
    })
}

fn row_to_stored_set(row: &SqliteRow) -> AppResult<StoredSet> {
    let id: String = row.get("id");
    let exercise_id: String = row.get("exercise_id");
    let performed_at: String = row.get("performed_at");

    Ok(StoredSet {
        id: Uuid::parse_str(&id)?,
        exercise_id: Uuid::parse_str(&exercise_id)?,
        performed_at: from_db_timestamp(&performed_at)?,
        weight: row.get("weight"),
        reps: row.get("reps"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_timestamps_sort_as_text() {
        let earlier = Utc.with_ymd_and_hms(2024, 6, 9, 23, 59, 59).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 6, 10, 0, 0, 0).unwrap();
        let a = to_db_timestamp(earlier);
        let b = to_db_timestamp(later);

        assert_eq!(a.len(), b.len());
        assert!(a < b);
        assert_eq!(a, "2024-06-09T23:59:59.000000Z");
    }

    #[test]
    fn test_timestamp_round_trip() {
        let instant = Utc.with_ymd_and_hms(2024, 2, 29, 12, 30, 0).unwrap();
        assert_eq!(from_db_timestamp(&to_db_timestamp(instant)).unwrap(), instant);
        assert!(from_db_timestamp("yesterday").is_err());
    }
}
