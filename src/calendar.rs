// ABOUTME: Reporting calendar that fixes which wall-clock day "today" is for dashboards
// ABOUTME: Converts UTC instants to local dates and local day starts back to UTC bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Reporting calendar
//!
//! Sets are stored with UTC timestamps. The trend engine works on calendar
//! dates, so every request translates between the two through one fixed UTC
//! offset. Day boundaries for store queries are the local midnights of the
//! resolved window, expressed in UTC.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc};

const SECONDS_PER_MINUTE: i32 = 60;

/// Fixed-offset calendar used for every date computed by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportingCalendar {
    offset: FixedOffset,
}

impl ReportingCalendar {
    /// Calendar with an explicit offset
    #[must_use]
    pub const fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// UTC calendar
    #[must_use]
    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }

    /// Calendar using the host's current local offset
    #[must_use]
    pub fn host_local() -> Self {
        Self::new(Local::now().offset().fix())
    }

    /// Build from a configured offset in minutes, or the host offset when `None`
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` when the offset is a day or more away from UTC
    pub fn from_offset_minutes(minutes: Option<i32>) -> AppResult<Self> {
        let Some(minutes) = minutes else {
            return Ok(Self::host_local());
        };
        minutes
            .checked_mul(SECONDS_PER_MINUTE)
            .and_then(FixedOffset::east_opt)
            .map(Self::new)
            .ok_or_else(|| {
                AppError::config_invalid(format!("UTC offset of {minutes} minutes is out of range"))
            })
    }

    /// Offset from UTC
    #[must_use]
    pub const fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Current calendar date
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.today_at(Utc::now())
    }

    /// Calendar date at instant `now`
    #[must_use]
    pub fn today_at(&self, now: DateTime<Utc>) -> NaiveDate {
        self.to_local(now).date()
    }

    /// Wall-clock time of `instant` in this calendar
    #[must_use]
    pub fn to_local(&self, instant: DateTime<Utc>) -> NaiveDateTime {
        instant.with_timezone(&self.offset).naive_local()
    }

    /// UTC instant of local midnight starting `date`
    #[must_use]
    pub fn start_of_day_utc(&self, date: NaiveDate) -> DateTime<Utc> {
        let local_midnight = date.and_time(NaiveTime::MIN);
        self.offset
            .from_local_datetime(&local_midnight)
            .single()
            .map_or_else(
                // Only reachable at the edges of the representable range
                || Utc.from_utc_datetime(&local_midnight),
                |local| local.with_timezone(&Utc),
            )
    }

    /// UTC bounds `[start, end)` for the local dates `[start, end)`
    #[must_use]
    pub fn utc_range(&self, start: NaiveDate, end: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.start_of_day_utc(start), self.start_of_day_utc(end))
    }
}

impl Default for ReportingCalendar {
    fn default() -> Self {
        Self::utc()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_today_follows_offset() {
        let instant = Utc.with_ymd_and_hms(2024, 6, 15, 2, 30, 0).unwrap();
        let new_york = ReportingCalendar::from_offset_minutes(Some(-240)).unwrap();
        let tokyo = ReportingCalendar::from_offset_minutes(Some(540)).unwrap();

        assert_eq!(new_york.today_at(instant), date(2024, 6, 14));
        assert_eq!(tokyo.today_at(instant), date(2024, 6, 15));
        assert_eq!(ReportingCalendar::utc().today_at(instant), date(2024, 6, 15));
    }

    #[test]
    fn test_start_of_day_utc_shifts_by_offset() {
        let calendar = ReportingCalendar::from_offset_minutes(Some(-240)).unwrap();
        let start = calendar.start_of_day_utc(date(2024, 6, 15));
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 6, 15, 4, 0, 0).unwrap());
    }

    #[test]
    fn test_utc_range_round_trips_local_dates() {
        let calendar = ReportingCalendar::from_offset_minutes(Some(330)).unwrap();
        let (start, end) = calendar.utc_range(date(2024, 6, 8), date(2024, 6, 16));

        assert_eq!(calendar.today_at(start), date(2024, 6, 8));
        assert_eq!(calendar.today_at(end), date(2024, 6, 16));
        assert_eq!((end - start).num_days(), 8);
    }

    #[test]
    fn test_rejects_offsets_of_a_day_or_more() {
        assert!(ReportingCalendar::from_offset_minutes(Some(24 * 60)).is_err());
        assert!(ReportingCalendar::from_offset_minutes(Some(i32::MAX)).is_err());
        assert!(ReportingCalendar::from_offset_minutes(None).is_ok());
    }
}
