// ABOUTME: Pure calendar arithmetic used by period resolution and series alignment
// ABOUTME: Every helper returns a new date and saturates instead of panicking at range limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, Days, Months, NaiveDate};

/// Date `days` after `date`, saturating at `NaiveDate::MAX`
#[must_use]
pub fn days_after(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX)
}

/// Date `days` before `date`, saturating at `NaiveDate::MIN`
#[must_use]
pub fn days_before(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_sub_days(Days::new(days))
        .unwrap_or(NaiveDate::MIN)
}

/// Date `months` calendar months after `date`
///
/// The day of month is clamped to the length of the target month
/// (Jan 31 + 1 month = Feb 28/29).
#[must_use]
pub fn months_after(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}

/// Date `months` calendar months before `date`, clamping the day of month
#[must_use]
pub fn months_before(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

/// Shift by a signed number of days
#[must_use]
pub fn shift_days(date: NaiveDate, days: i64) -> NaiveDate {
    if days >= 0 {
        days_after(date, days.unsigned_abs())
    } else {
        days_before(date, days.unsigned_abs())
    }
}

/// Shift by a signed number of calendar months
#[must_use]
pub fn shift_months(date: NaiveDate, months: i64) -> NaiveDate {
    let magnitude = u32::try_from(months.unsigned_abs()).unwrap_or(u32::MAX);
    if months >= 0 {
        months_after(date, magnitude)
    } else {
        months_before(date, magnitude)
    }
}

/// Sunday that starts the week containing `date`
#[must_use]
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    days_before(date, u64::from(date.weekday().num_days_from_sunday()))
}

/// First day of the month containing `date`
#[must_use]
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the calendar quarter containing `date`
#[must_use]
pub fn start_of_quarter(date: NaiveDate) -> NaiveDate {
    let first_month = (date.month0() / 3) * 3 + 1;
    NaiveDate::from_ymd_opt(date.year(), first_month, 1).unwrap_or(date)
}

/// January 1st of the year containing `date`
#[must_use]
pub fn start_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date)
}

/// Signed number of days from `from` to `to`
#[must_use]
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}

/// Signed number of calendar months from the month of `from` to the month of `to`
///
/// Only year and month matter: 2024-01-31 to 2024-02-01 is one month.
#[must_use]
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    i64::from(to.year() - from.year()) * 12 + i64::from(to.month()) - i64::from(from.month())
}
