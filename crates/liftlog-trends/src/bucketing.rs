// ABOUTME: Bucketing aggregator that folds set records into day, week, or month volume sums
// ABOUTME: Defines Granularity, BucketKey derivation, and the sparse BucketMap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::calendar;
use chrono::NaiveDate;
use liftlog_core::models::SetRecord;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

/// Width of a chart bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One bucket per calendar day
    Day,
    /// One bucket per Sunday-started week
    Week,
    /// One bucket per calendar month
    Month,
}

impl Granularity {
    /// Convert to string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// Canonical key of the bucket containing `date`
    #[must_use]
    pub fn bucket_key(self, date: NaiveDate) -> BucketKey {
        let start = match self {
            Self::Day => date,
            Self::Week => calendar::start_of_week(date),
            Self::Month => calendar::start_of_month(date),
        };
        BucketKey(start)
    }

    /// Advance `date` by one natural step (1 day, 7 days, or 1 calendar month)
    #[must_use]
    pub fn step(self, date: NaiveDate) -> NaiveDate {
        self.advance(date, 1)
    }

    /// Advance `date` by `steps` natural steps (negative moves backwards)
    #[must_use]
    pub fn advance(self, date: NaiveDate, steps: i64) -> NaiveDate {
        match self {
            Self::Day => calendar::shift_days(date, steps),
            Self::Week => calendar::shift_days(date, steps.saturating_mul(7)),
            Self::Month => calendar::shift_months(date, steps),
        }
    }

    /// Whole steps between two bucket keys of this granularity
    #[must_use]
    pub fn steps_between(self, from: BucketKey, to: BucketKey) -> i64 {
        match self {
            Self::Day => calendar::days_between(from.0, to.0),
            Self::Week => calendar::days_between(from.0, to.0) / 7,
            Self::Month => calendar::months_between(from.0, to.0),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Start date of a bucket, used as its identity
///
/// Serialized as `YYYY-MM-DD`; the chart consumer renders it as a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BucketKey(NaiveDate);

impl BucketKey {
    /// First calendar day covered by the bucket
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Summed volume per bucket, holding only buckets that received a record
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BucketMap {
    buckets: BTreeMap<BucketKey, f64>,
}

impl BucketMap {
    /// Empty map
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buckets: BTreeMap::new(),
        }
    }

    /// Add `volume` to the bucket `key`
    pub fn add(&mut self, key: BucketKey, volume: f64) {
        *self.buckets.entry(key).or_insert(0.0) += volume;
    }

    /// Volume in bucket `key`, zero when the bucket is absent
    #[must_use]
    pub fn get(&self, key: BucketKey) -> f64 {
        self.buckets.get(&key).copied().unwrap_or(0.0)
    }

    /// Whether bucket `key` received at least one record
    #[must_use]
    pub fn contains(&self, key: BucketKey) -> bool {
        self.buckets.contains_key(&key)
    }

    /// Sum over every bucket
    #[must_use]
    pub fn total(&self) -> f64 {
        self.buckets.values().sum()
    }

    /// Number of non-empty buckets
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// True when no record was aggregated
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Buckets in key order
    pub fn iter(&self) -> btree_map::Iter<'_, BucketKey, f64> {
        self.buckets.iter()
    }
}

impl<'a> IntoIterator for &'a BucketMap {
    type Item = (&'a BucketKey, &'a f64);
    type IntoIter = btree_map::Iter<'a, BucketKey, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Sum record volumes into buckets for the window `[window_start, window_end)`
///
/// Records outside the window are skipped; records with zero weight or reps
/// still create their bucket.
#[must_use]
pub fn aggregate(
    records: &[SetRecord],
    window_start: NaiveDate,
    window_end: NaiveDate,
    granularity: Granularity,
) -> BucketMap {
    let mut map = BucketMap::new();
    for record in records {
        let date = record.date();
        if date < window_start || date >= window_end {
            continue;
        }
        map.add(granularity.bucket_key(date), record.volume());
    }
    map
}
