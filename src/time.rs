//! Calendar and time-axis helpers.
//!
//! Dates are proleptic Gregorian calendar days without a time-of-day or zone. All instants
//! produced by this crate are UTC; rendering them in a local zone is up to the caller.

#![allow(clippy::unreadable_literal)]

use crate::math::floor;
use crate::types::Rounding;
use crate::{Error, Result};
use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, Timelike, Utc};

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
const J2000_JDN: f64 = 2_451_545.0;

/// Days per Julian century
const DAYS_PER_CENTURY: f64 = 36_525.0;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// A calendar day (year, month, day-of-month) in the proleptic Gregorian calendar.
///
/// # Example
/// ```
/// # use miqat::CalendarDate;
/// let date = CalendarDate::new(2024, 2, 29).unwrap();
/// assert_eq!(date.day_of_year(), 60);
/// assert!(CalendarDate::new(2023, 2, 29).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalendarDate {
    date: NaiveDate,
}

impl CalendarDate {
    /// Creates a calendar date from its components.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the month is outside 1-12, the day does not exist in that
    /// month, or the year is outside the supported range.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::invalid_date("month must be between 1 and 12"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(Error::invalid_date("day is out of range for month"));
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(|date| Self { date })
            .ok_or(Error::invalid_date("year is out of the supported range"))
    }

    /// Gets the year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Gets the month (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    /// Gets the day of month (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// Gets the ordinal day of the year (1-366).
    #[must_use]
    pub fn day_of_year(&self) -> u32 {
        self.date.ordinal()
    }

    /// Gets the Julian day at 0h UT of this date.
    #[must_use]
    pub fn julian_day(&self) -> f64 {
        julian_day(self.year(), self.month(), self.day(), 0.0)
    }

    /// Gets the instant 0h UTC of this date.
    #[must_use]
    pub fn start_of_day(&self) -> DateTime<Utc> {
        self.date.and_time(chrono::NaiveTime::MIN).and_utc()
    }

    /// Gets the following calendar day.
    ///
    /// # Errors
    /// Returns `InvalidDate` at the upper end of the supported range.
    pub fn succ(&self) -> Result<Self> {
        self.date
            .succ_opt()
            .map(|date| Self { date })
            .ok_or(Error::invalid_date("no following date in supported range"))
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.date
    }
}

impl core::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.date)
    }
}

/// Calculates the Julian day for a proleptic Gregorian calendar date.
///
/// `hours` is the UT time of day as fractional hours. Follows Meeus, "Astronomical
/// Algorithms", 2nd edition, chapter 7, with the Gregorian correction applied to every date.
///
/// # Example
/// ```
/// # use miqat::time::julian_day;
/// assert_eq!(julian_day(2010, 1, 2, 0.0), 2_455_198.5);
/// assert_eq!(julian_day(2000, 1, 1, 12.0), 2_451_545.0);
/// ```
#[must_use]
pub fn julian_day(year: i32, month: u32, day: u32, hours: f64) -> f64 {
    let (y, m) = if month > 2 {
        (f64::from(year), f64::from(month))
    } else {
        (f64::from(year - 1), f64::from(month + 12))
    };
    let d = f64::from(day) + hours / 24.0;

    let a = floor(y / 100.0);
    let b = 2.0 - a + floor(a / 4.0);

    floor(365.25 * (y + 4716.0)) + floor(30.6001 * (m + 1.0)) + d + b - 1524.5
}

/// Calculates Julian centuries since J2000.0 for a Julian day.
///
/// JC = (JD - 2451545.0) / 36525
#[must_use]
pub fn julian_century(julian_day: f64) -> f64 {
    (julian_day - J2000_JDN) / DAYS_PER_CENTURY
}

/// Checks whether a year is a Gregorian leap year.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a year (365 or 366).
#[must_use]
pub const fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

/// Converts an hour offset from 0h UTC of `date` into an instant.
///
/// Returns `None` for non-finite hours or results outside chrono's range.
pub(crate) fn hours_after_midnight(date: CalendarDate, hours: f64) -> Option<DateTime<Utc>> {
    if !hours.is_finite() {
        return None;
    }
    let millis = hours * MILLIS_PER_HOUR;
    if millis.abs() > 1.0e15 {
        return None;
    }
    let delta = TimeDelta::try_milliseconds(millis as i64)?;
    date.start_of_day().checked_add_signed(delta)
}

/// Adds a (possibly negative) number of seconds to an instant.
pub(crate) fn add_seconds(instant: DateTime<Utc>, seconds: f64) -> Option<DateTime<Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let delta = TimeDelta::try_milliseconds((seconds * 1000.0) as i64)?;
    instant.checked_add_signed(delta)
}

/// Adds a (possibly negative) number of whole minutes to an instant.
pub(crate) fn add_minutes(instant: DateTime<Utc>, minutes: i64) -> Option<DateTime<Utc>> {
    instant.checked_add_signed(TimeDelta::try_minutes(minutes)?)
}

/// Rounds an instant to a whole minute.
///
/// `Nearest` rounds 30 seconds and above up, `Up` rounds any partial minute up, and `None`
/// returns the instant unchanged.
#[must_use]
pub fn round_to_minute(instant: DateTime<Utc>, rounding: Rounding) -> Option<DateTime<Utc>> {
    let seconds = i64::from(instant.second());
    let nanos = i64::from(instant.nanosecond());
    let truncated = instant
        .checked_sub_signed(TimeDelta::try_seconds(seconds)?)?
        .checked_sub_signed(TimeDelta::nanoseconds(nanos))?;

    match rounding {
        Rounding::None => Some(instant),
        Rounding::Nearest if seconds >= 30 => add_minutes(truncated, 1),
        Rounding::Up if seconds > 0 || nanos > 0 => add_minutes(truncated, 1),
        Rounding::Nearest | Rounding::Up => Some(truncated),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_calendar_date_validation() {
        assert!(CalendarDate::new(2024, 2, 29).is_ok());
        assert!(CalendarDate::new(2000, 2, 29).is_ok());
        assert_eq!(
            CalendarDate::new(1900, 2, 29),
            Err(Error::invalid_date("day is out of range for month"))
        );
        assert_eq!(
            CalendarDate::new(2024, 13, 1),
            Err(Error::invalid_date("month must be between 1 and 12"))
        );
        assert!(CalendarDate::new(2024, 0, 1).is_err());
        assert!(CalendarDate::new(2024, 4, 31).is_err());
        assert!(CalendarDate::new(2024, 4, 0).is_err());
        assert!(CalendarDate::new(1_000_000, 1, 1).is_err());
    }

    #[test]
    fn test_day_of_year() {
        assert_eq!(CalendarDate::new(2015, 1, 1).unwrap().day_of_year(), 1);
        assert_eq!(CalendarDate::new(2015, 12, 31).unwrap().day_of_year(), 365);
        assert_eq!(CalendarDate::new(2016, 12, 31).unwrap().day_of_year(), 366);
        assert_eq!(CalendarDate::new(2016, 3, 1).unwrap().day_of_year(), 61);
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert_eq!(days_in_year(2016), 366);
        assert_eq!(days_in_year(2100), 365);
    }

    #[test]
    fn test_neighbouring_dates() {
        let date = CalendarDate::new(2016, 2, 28).unwrap();
        assert_eq!(date.succ().unwrap(), CalendarDate::new(2016, 2, 29).unwrap());
        let date = CalendarDate::new(2014, 12, 31).unwrap();
        assert_eq!(date.succ().unwrap(), CalendarDate::new(2015, 1, 1).unwrap());
        assert!(CalendarDate::from(NaiveDate::MAX).succ().is_err());
    }

    #[test]
    fn test_julian_day() {
        assert_eq!(julian_day(2010, 1, 2, 0.0), 2_455_198.5);
        assert_eq!(julian_day(2000, 1, 1, 12.0), 2_451_545.0);
        assert_eq!(julian_day(1970, 1, 1, 0.0), 2_440_587.5);
        // Meeus example 7.a
        assert!((julian_day(1957, 10, 4, 19.44) - 2_436_116.31).abs() < 1e-6);
        assert_eq!(julian_day(1987, 4, 10, 0.0), 2_446_895.5);
        assert_eq!(julian_day(1992, 10, 13, 0.0), 2_448_908.5);

        let date = CalendarDate::new(2010, 1, 2).unwrap();
        assert_eq!(date.julian_day(), 2_455_198.5);
    }

    #[test]
    fn test_julian_century() {
        assert_eq!(julian_century(2_451_545.0), 0.0);
        assert!((julian_century(2_448_908.5) - -0.072_183_436).abs() < 1e-9);
    }

    #[test]
    fn test_hours_after_midnight() {
        let date = CalendarDate::new(2015, 7, 12).unwrap();
        let instant = hours_after_midnight(date, 17.5).unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2015, 7, 12, 17, 30, 0).unwrap());

        let instant = hours_after_midnight(date, 24.5).unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2015, 7, 13, 0, 30, 0).unwrap());

        let instant = hours_after_midnight(date, -0.25).unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2015, 7, 11, 23, 45, 0).unwrap());

        assert!(hours_after_midnight(date, f64::NAN).is_none());
        assert!(hours_after_midnight(date, f64::INFINITY).is_none());
    }

    #[test]
    fn test_round_to_minute() {
        let at = |s: u32| Utc.with_ymd_and_hms(2015, 7, 12, 10, 8, s).unwrap();
        let minute = |m: u32| Utc.with_ymd_and_hms(2015, 7, 12, 10, m, 0).unwrap();

        assert_eq!(round_to_minute(at(29), Rounding::Nearest), Some(minute(8)));
        assert_eq!(round_to_minute(at(30), Rounding::Nearest), Some(minute(9)));
        assert_eq!(round_to_minute(at(0), Rounding::Up), Some(minute(8)));
        assert_eq!(round_to_minute(at(1), Rounding::Up), Some(minute(9)));
        assert_eq!(round_to_minute(at(45), Rounding::None), Some(at(45)));

        let with_millis = at(0) + TimeDelta::milliseconds(250);
        assert_eq!(round_to_minute(with_millis, Rounding::Nearest), Some(minute(8)));
        assert_eq!(round_to_minute(with_millis, Rounding::Up), Some(minute(9)));
    }
}
