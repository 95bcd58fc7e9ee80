// ABOUTME: Volume-trend aggregation engine for the LiftLog dashboard
// ABOUTME: Resolves reporting periods, buckets set volume, and builds comparison series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # `LiftLog` Trends
//!
//! Pure, synchronous transformation from dated set records and a period
//! selector into a chart-ready series with totals. Three stages run in order:
//!
//! 1. [`period::resolve`] turns a selector and "today" into a current window,
//!    a previous comparison window, and a bucket granularity.
//! 2. [`bucketing::aggregate`] sums `weight * reps` per day, week or month.
//! 3. [`series::build`] lays the buckets on a gap-free axis, pairs each with
//!    the aligned previous bucket, and computes the percentage change.
//!
//! Nothing here performs I/O or holds state; callers fetch records for the
//! resolved windows and pass them in.

/// Pure calendar arithmetic on `NaiveDate`
pub mod calendar;

/// Bucket keys and volume aggregation
pub mod bucketing;

/// Period selectors and window resolution
pub mod period;

/// Gap-filled comparison series
pub mod series;

/// Dashboard summary statistics
pub mod stats;

pub use bucketing::{aggregate, BucketKey, BucketMap, Granularity};
pub use period::{resolve, PeriodSelector, ResolvedWindow};
pub use series::{build, percentage_change, SeriesPoint, VolumeTrend};
pub use stats::{compute_dashboard_stats, stats_window_start, DailyVolume, DashboardStats};

use liftlog_core::models::SetRecord;
use tracing::debug;

/// Run the aggregation and series stages for an already resolved window
///
/// `current_records` and `previous_records` may be the same slice; each stage
/// only keeps records inside its own window. Without a comparison window the
/// previous records are ignored.
#[must_use]
pub fn compute_volume_trend(
    window: &ResolvedWindow,
    current_records: &[SetRecord],
    previous_records: &[SetRecord],
) -> VolumeTrend {
    let current = aggregate(
        current_records,
        window.current_start,
        window.current_end,
        window.granularity,
    );
    let previous = if window.has_comparison {
        aggregate(
            previous_records,
            window.previous_start,
            window.previous_end,
            window.granularity,
        )
    } else {
        BucketMap::new()
    };

    debug!(
        granularity = %window.granularity,
        current_buckets = current.len(),
        previous_buckets = previous.len(),
        "Aggregated set volume"
    );

    build(window, &current, &previous)
}
