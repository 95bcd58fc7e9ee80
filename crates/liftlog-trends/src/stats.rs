// ABOUTME: Dashboard summary statistics derived from a user's recent sets
// ABOUTME: Today's totals, weekly workout days, four-week average, and a sparse daily trend
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::bucketing::{aggregate, Granularity};
use crate::calendar;
use chrono::NaiveDate;
use liftlog_core::constants::dashboard::{
    STATS_TREND_DAYS, WEEKLY_AVERAGE_DAYS, WEEKLY_AVERAGE_WEEKS,
};
use liftlog_core::models::{LoggedSet, SetRecord};
use serde::Serialize;
use std::collections::HashSet;
use uuid::Uuid;

/// Volume logged on one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyVolume {
    /// Calendar day
    pub date: NaiveDate,
    /// Summed volume for the day
    pub volume: f64,
}

/// Summary figures shown above the dashboard chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    /// Volume logged today
    pub todays_volume: f64,
    /// Number of sets logged today
    pub todays_sets: usize,
    /// Distinct exercises trained today
    pub todays_exercises: usize,
    /// Distinct days with at least one set since Sunday
    pub this_week_workouts: usize,
    /// Volume of the four weeks before today, divided by four
    pub weekly_average: f64,
    /// Exercises owned by the user
    pub total_exercises: u64,
    /// Days with volume in the last thirty days, oldest first
    pub volume_trend: Vec<DailyVolume>,
}

impl DashboardStats {
    /// Apply `convert` to every volume figure
    #[must_use]
    pub fn map_volumes(mut self, convert: impl Fn(f64) -> f64) -> Self {
        self.todays_volume = convert(self.todays_volume);
        self.weekly_average = convert(self.weekly_average);
        for day in &mut self.volume_trend {
            day.volume = convert(day.volume);
        }
        self
    }
}

/// Earliest date any statistic looks at, for narrowing the store query
#[must_use]
pub fn stats_window_start(today: NaiveDate) -> NaiveDate {
    calendar::days_before(today, STATS_TREND_DAYS)
        .min(calendar::days_before(today, WEEKLY_AVERAGE_DAYS))
        .min(calendar::start_of_week(today))
}

/// Compute dashboard statistics for `today`
///
/// `sets` should cover at least `[stats_window_start(today), today + 1)`; sets
/// outside each statistic's own range are ignored.
#[must_use]
pub fn compute_dashboard_stats(
    today: NaiveDate,
    sets: &[LoggedSet],
    total_exercises: u64,
) -> DashboardStats {
    let tomorrow = calendar::days_after(today, 1);
    let week_start = calendar::start_of_week(today);
    let average_start = calendar::days_before(today, WEEKLY_AVERAGE_DAYS);
    let trend_start = calendar::days_before(today, STATS_TREND_DAYS);

    let in_range = |set: &&LoggedSet, start: NaiveDate, end: NaiveDate| {
        let date = set.record.date();
        date >= start && date < end
    };

    let todays: Vec<&LoggedSet> = sets
        .iter()
        .filter(|set| in_range(set, today, tomorrow))
        .collect();
    let todays_volume = todays.iter().map(|set| set.record.volume()).sum();
    let todays_exercises = todays
        .iter()
        .map(|set| set.exercise_id)
        .collect::<HashSet<Uuid>>()
        .len();

    let this_week_workouts = sets
        .iter()
        .filter(|set| in_range(set, week_start, tomorrow))
        .map(|set| set.record.date())
        .collect::<HashSet<NaiveDate>>()
        .len();

    let four_week_volume: f64 = sets
        .iter()
        .filter(|set| in_range(set, average_start, today))
        .map(|set| set.record.volume())
        .sum();

    let records: Vec<SetRecord> = sets.iter().map(|set| set.record).collect();
    let volume_trend = aggregate(&records, trend_start, tomorrow, Granularity::Day)
        .iter()
        .map(|(key, volume)| DailyVolume {
            date: key.date(),
            volume: *volume,
        })
        .collect();

    DashboardStats {
        todays_volume,
        todays_sets: todays.len(),
        todays_exercises,
        this_week_workouts,
        weekly_average: four_week_volume / WEEKLY_AVERAGE_WEEKS,
        total_exercises,
        volume_trend,
    }
}
