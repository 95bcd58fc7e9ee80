// ABOUTME: Validated set record consumed by the volume-trend engine
// ABOUTME: Holds the reporting-calendar timestamp, weight, and reps of one logged set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use uuid::Uuid;

/// A single logged set reduced to the values the trend engine aggregates
///
/// `occurred_at` is expressed in the reporting calendar (local wall-clock
/// time), so `date()` is the calendar day the set belongs to. Weight is in the
/// canonical storage unit (pounds).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SetRecord {
    occurred_at: NaiveDateTime,
    weight: f64,
    reps: u32,
}

impl SetRecord {
    /// Build a record, rejecting weights that are negative or not finite
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` when `weight` is negative, NaN, or infinite
    pub fn new(occurred_at: NaiveDateTime, weight: f64, reps: u32) -> AppResult<Self> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(AppError::out_of_range(format!(
                "weight must be a non-negative number, got {weight}"
            )));
        }
        Ok(Self {
            occurred_at,
            weight,
            reps,
        })
    }

    /// Build a record from a stored repetition count
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` when `reps` is negative or does not fit in `u32`,
    /// or when the weight is rejected by [`SetRecord::new`]
    pub fn from_stored(occurred_at: NaiveDateTime, weight: f64, reps: i64) -> AppResult<Self> {
        let reps = u32::try_from(reps).map_err(|_| {
            AppError::out_of_range(format!("reps must be a non-negative integer, got {reps}"))
        })?;
        Self::new(occurred_at, weight, reps)
    }

    /// When the set was performed, in the reporting calendar
    #[must_use]
    pub const fn occurred_at(&self) -> NaiveDateTime {
        self.occurred_at
    }

    /// Calendar day the set belongs to
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.occurred_at.date()
    }

    /// Weight lifted, in pounds
    #[must_use]
    pub const fn weight(&self) -> f64 {
        self.weight
    }

    /// Number of repetitions
    #[must_use]
    pub const fn reps(&self) -> u32 {
        self.reps
    }

    /// Volume contribution of this set (`weight * reps`)
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.weight * f64::from(self.reps)
    }
}

/// A set record tagged with the exercise it was logged against
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoggedSet {
    /// Exercise the set belongs to
    pub exercise_id: Uuid,
    /// The numeric record
    pub record: SetRecord,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorCode;

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(18, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_volume_is_weight_times_reps() {
        let record = SetRecord::new(at(2024, 6, 10), 102.5, 8).unwrap();
        assert!((record.volume() - 820.0).abs() < f64::EPSILON);
        assert_eq!(record.date(), NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
    }

    #[test]
    fn test_zero_weight_and_zero_reps_are_valid() {
        let bodyweight = SetRecord::new(at(2024, 6, 10), 0.0, 15).unwrap();
        let failed = SetRecord::new(at(2024, 6, 10), 225.0, 0).unwrap();
        assert!(bodyweight.volume().abs() < f64::EPSILON);
        assert!(failed.volume().abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_negative_or_non_finite_weight() {
        for weight in [-1.0, f64::NAN, f64::INFINITY] {
            let err = SetRecord::new(at(2024, 6, 10), weight, 5).unwrap_err();
            assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        }
    }

    #[test]
    fn test_from_stored_rejects_negative_reps() {
        let err = SetRecord::from_stored(at(2024, 6, 10), 50.0, -3).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
        assert_eq!(
            SetRecord::from_stored(at(2024, 6, 10), 50.0, 3)
                .unwrap()
                .reps(),
            3
        );
    }
}
