// ABOUTME: Series builder producing a dense, bucket-aligned current vs previous volume series
// ABOUTME: Computes totals and the period-over-period percentage change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Series building
//!
//! The x-axis is every bucket of the current window, in order, with no gaps.
//! Each point is paired with the bucket at the same offset inside the previous
//! window. Offsets are counted between bucket keys (days, weeks or calendar
//! months), so two windows whose first days fall on different weekdays still
//! pair week N with week N.

use crate::bucketing::{BucketKey, BucketMap};
use crate::period::ResolvedWindow;
use liftlog_core::constants::dashboard::NEW_VOLUME_PERCENTAGE;
use serde::Serialize;

/// One point on the volume chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    /// Start date of the bucket
    pub bucket_key: BucketKey,
    /// Volume in this bucket of the current window
    pub current_volume: f64,
    /// Volume in the aligned bucket of the previous window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_volume: Option<f64>,
}

/// Chart-ready series with totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeTrend {
    /// Window the series was built for
    pub window: ResolvedWindow,
    /// One point per bucket of the current window
    pub points: Vec<SeriesPoint>,
    /// Sum of every current bucket
    pub current_total: f64,
    /// Sum of every previous bucket (zero without comparison)
    pub previous_total: f64,
    /// Change of `current_total` relative to `previous_total`, in percent
    pub percentage_change: f64,
}

impl VolumeTrend {
    /// Apply `convert` to every volume figure, leaving the percentage untouched
    #[must_use]
    pub fn map_volumes(mut self, convert: impl Fn(f64) -> f64) -> Self {
        for point in &mut self.points {
            point.current_volume = convert(point.current_volume);
            point.previous_volume = point.previous_volume.map(&convert);
        }
        self.current_total = convert(self.current_total);
        self.previous_total = convert(self.previous_total);
        self
    }
}

/// Percentage change from `previous` to `current`
///
/// A zero previous total yields 100 when there is current volume and 0
/// otherwise.
#[must_use]
pub fn percentage_change(current: f64, previous: f64) -> f64 {
    if previous > 0.0 {
        (current - previous) / previous * 100.0
    } else if current > 0.0 {
        NEW_VOLUME_PERCENTAGE
    } else {
        0.0
    }
}

/// Bucket keys covering `[window.current_start, window.current_end)`, in order
#[must_use]
pub fn axis(window: &ResolvedWindow) -> Vec<BucketKey> {
    let granularity = window.granularity;
    let mut keys = Vec::new();
    let mut key = granularity.bucket_key(window.current_start);
    while key.date() < window.current_end {
        keys.push(key);
        let next = granularity.bucket_key(granularity.step(key.date()));
        if next <= key {
            // Calendar saturated at its maximum date
            break;
        }
        key = next;
    }
    keys
}

/// Build the dense series for `window` from the two aggregated bucket maps
#[must_use]
pub fn build(window: &ResolvedWindow, current: &BucketMap, previous: &BucketMap) -> VolumeTrend {
    let granularity = window.granularity;
    let keys = axis(window);
    let first_current = keys
        .first()
        .copied()
        .unwrap_or_else(|| granularity.bucket_key(window.current_start));
    let first_previous = granularity.bucket_key(window.previous_start);

    let points = keys
        .into_iter()
        .map(|key| {
            let previous_volume = window.has_comparison.then(|| {
                let offset = granularity.steps_between(first_current, key);
                let aligned = granularity
                    .bucket_key(granularity.advance(first_previous.date(), offset));
                previous.get(aligned)
            });
            SeriesPoint {
                bucket_key: key,
                current_volume: current.get(key),
                previous_volume,
            }
        })
        .collect();

    let current_total = current.total();
    let previous_total = if window.has_comparison {
        previous.total()
    } else {
        0.0
    };

    VolumeTrend {
        window: *window,
        points,
        current_total,
        previous_total,
        percentage_change: percentage_change(current_total, previous_total),
    }
}
