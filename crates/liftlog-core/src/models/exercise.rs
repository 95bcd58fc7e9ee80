// ABOUTME: Exercise categories used to group the exercise catalog
// ABOUTME: Provides the database string representation and permissive parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Muscle-group category of an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExerciseCategory {
    /// Chest exercises
    Chest,
    /// Back exercises
    Back,
    /// Leg exercises
    Legs,
    /// Shoulder exercises
    Shoulders,
    /// Arm exercises
    Arms,
    /// Core exercises
    Core,
    /// Cardio machines and conditioning
    Cardio,
    /// Anything else
    #[default]
    Other,
}

impl ExerciseCategory {
    /// Convert to database string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Chest => "CHEST",
            Self::Back => "BACK",
            Self::Legs => "LEGS",
            Self::Shoulders => "SHOULDERS",
            Self::Arms => "ARMS",
            Self::Core => "CORE",
            Self::Cardio => "CARDIO",
            Self::Other => "OTHER",
        }
    }

    /// Parse from database string representation
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "CHEST" => Self::Chest,
            "BACK" => Self::Back,
            "LEGS" => Self::Legs,
            "SHOULDERS" => Self::Shoulders,
            "ARMS" => Self::Arms,
            "CORE" => Self::Core,
            "CARDIO" => Self::Cardio,
            // Default to Other for unrecognized values
            _ => Self::Other,
        }
    }
}
