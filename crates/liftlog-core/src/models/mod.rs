// ABOUTME: Core data models and types for the LiftLog service
// ABOUTME: Re-exports SetRecord, LoggedSet, ExerciseCategory and WeightUnit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Strongly typed values exchanged between the set store, the trend engine,
//! and the presentation layer.
//!
//! - `SetRecord`: one logged set reduced to the numbers the trend engine needs
//! - `LoggedSet`: a `SetRecord` together with the exercise it belongs to
//! - `ExerciseCategory`: muscle-group grouping for exercises
//! - `WeightUnit`: presentation unit preference

mod exercise;
mod set_record;
mod units;

pub use exercise::ExerciseCategory;
pub use set_record::{LoggedSet, SetRecord};
pub use units::WeightUnit;
