// ABOUTME: Weight unit preference applied by the presentation layer
// ABOUTME: Converts canonical pound volumes into the unit a client asked for
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::units::LBS_PER_KG;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit in which weights and volumes are presented
///
/// Stored data is always in pounds; only responses are converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Pounds (canonical storage unit)
    #[default]
    Lbs,
    /// Kilograms
    Kg,
}

impl WeightUnit {
    /// Convert to string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lbs => "lbs",
            Self::Kg => "kg",
        }
    }

    /// Parse a unit token, `None` when it names no known unit
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "kgs" | "kilograms" => Some(Self::Kg),
            "lb" | "lbs" | "pounds" => Some(Self::Lbs),
            _ => None,
        }
    }

    /// Parse from string with fallback to pounds
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    /// Convert a canonical pound value into this unit
    #[must_use]
    pub fn from_pounds(self, pounds: f64) -> f64 {
        match self {
            Self::Lbs => pounds,
            Self::Kg => pounds / LBS_PER_KG,
        }
    }

    /// Convert a value expressed in this unit into canonical pounds
    #[must_use]
    pub fn to_pounds(self, value: f64) -> f64 {
        match self {
            Self::Lbs => value,
            Self::Kg => value * LBS_PER_KG,
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
