// ABOUTME: Period resolver mapping a selector token to current and previous date windows
// ABOUTME: Covers rolling windows, calendar-to-date windows, and the all-time window
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::bucketing::Granularity;
use crate::calendar;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reporting period requested by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PeriodSelector {
    /// Last 7 days plus today, daily buckets
    #[serde(rename = "1W")]
    OneWeek,
    /// Last 28 days plus today, daily buckets
    #[default]
    #[serde(rename = "4W")]
    FourWeeks,
    /// Last year plus today, monthly buckets
    #[serde(rename = "1Y")]
    OneYear,
    /// Month to date, daily buckets
    #[serde(rename = "MTD")]
    MonthToDate,
    /// Quarter to date, weekly buckets
    #[serde(rename = "QTD")]
    QuarterToDate,
    /// Year to date, monthly buckets
    #[serde(rename = "YTD")]
    YearToDate,
    /// Everything since the first logged set, monthly buckets
    #[serde(rename = "ALL")]
    AllTime,
}

impl PeriodSelector {
    /// Every selector in display order
    pub const ALL: [Self; 7] = [
        Self::OneWeek,
        Self::FourWeeks,
        Self::OneYear,
        Self::MonthToDate,
        Self::QuarterToDate,
        Self::YearToDate,
        Self::AllTime,
    ];

    /// Token used on the wire
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OneWeek => "1W",
            Self::FourWeeks => "4W",
            Self::OneYear => "1Y",
            Self::MonthToDate => "MTD",
            Self::QuarterToDate => "QTD",
            Self::YearToDate => "YTD",
            Self::AllTime => "ALL",
        }
    }

    /// Parse a token, treating anything unrecognized as `4W`
    #[must_use]
    pub fn parse(token: &str) -> Self {
        match token.trim().to_uppercase().as_str() {
            "1W" => Self::OneWeek,
            "1Y" => Self::OneYear,
            "MTD" => Self::MonthToDate,
            "QTD" => Self::QuarterToDate,
            "YTD" => Self::YearToDate,
            "ALL" => Self::AllTime,
            // Default to four weeks for unrecognized values
            _ => Self::FourWeeks,
        }
    }

    /// Bucket width used for this selector
    #[must_use]
    pub const fn granularity(&self) -> Granularity {
        match self {
            Self::OneWeek | Self::FourWeeks | Self::MonthToDate => Granularity::Day,
            Self::QuarterToDate => Granularity::Week,
            Self::OneYear | Self::YearToDate | Self::AllTime => Granularity::Month,
        }
    }

    /// Whether the selector needs the user's earliest set date
    #[must_use]
    pub const fn needs_earliest_record(&self) -> bool {
        matches!(self, Self::AllTime)
    }
}

impl fmt::Display for PeriodSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Concrete date ranges for one dashboard request
///
/// Both windows are half-open: `start` inclusive, `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedWindow {
    /// First day of the current window
    pub current_start: NaiveDate,
    /// Day after "today"
    pub current_end: NaiveDate,
    /// First day of the comparison window
    pub previous_start: NaiveDate,
    /// Exclusive end of the comparison window
    pub previous_end: NaiveDate,
    /// Bucket width
    pub granularity: Granularity,
    /// False only for the all-time window
    pub has_comparison: bool,
}

impl ResolvedWindow {
    /// Number of calendar days in the current window
    #[must_use]
    pub fn current_days(&self) -> i64 {
        calendar::days_between(self.current_start, self.current_end)
    }

    /// Number of calendar days in the comparison window
    #[must_use]
    pub fn previous_days(&self) -> i64 {
        calendar::days_between(self.previous_start, self.previous_end)
    }

    /// Whether `date` falls inside the current window
    #[must_use]
    pub fn in_current(&self, date: NaiveDate) -> bool {
        date >= self.current_start && date < self.current_end
    }

    /// Whether `date` falls inside the comparison window
    #[must_use]
    pub fn in_previous(&self, date: NaiveDate) -> bool {
        self.has_comparison && date >= self.previous_start && date < self.previous_end
    }
}

/// Resolve `selector` into date windows anchored at `today`
///
/// `earliest_record` is only consulted for [`PeriodSelector::AllTime`]; when it
/// is `None` (no sets logged yet) the window collapses to today alone. A future
/// earliest date is clamped to today so the window never inverts.
#[must_use]
pub fn resolve(
    selector: PeriodSelector,
    today: NaiveDate,
    earliest_record: Option<NaiveDate>,
) -> ResolvedWindow {
    let current_end = calendar::days_after(today, 1);
    let granularity = selector.granularity();

    let (current_start, previous_start) = match selector {
        PeriodSelector::OneWeek => {
            let start = calendar::days_before(today, 7);
            (start, calendar::days_before(start, 7))
        }
        PeriodSelector::FourWeeks => {
            let start = calendar::days_before(today, 28);
            (start, calendar::days_before(start, 28))
        }
        PeriodSelector::OneYear => {
            let start = calendar::months_before(today, 12);
            (start, calendar::months_before(start, 12))
        }
        PeriodSelector::MonthToDate => {
            let start = calendar::start_of_month(today);
            (start, calendar::months_before(start, 1))
        }
        PeriodSelector::QuarterToDate => {
            let start = calendar::start_of_quarter(today);
            (start, calendar::months_before(start, 3))
        }
        PeriodSelector::YearToDate => {
            let start = calendar::start_of_year(today);
            (start, calendar::months_before(start, 12))
        }
        PeriodSelector::AllTime => {
            let start = earliest_record.map_or(today, |earliest| earliest.min(today));
            return ResolvedWindow {
                current_start: start,
                current_end,
                previous_start: start,
                previous_end: start,
                granularity,
                has_comparison: false,
            };
        }
    };

    ResolvedWindow {
        current_start,
        current_end,
        previous_start,
        previous_end: current_start,
        granularity,
        has_comparison: true,
    }
}
