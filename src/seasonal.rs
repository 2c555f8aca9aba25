//! Seasonal twilight tables of the Moonsighting Committee Worldwide.
//!
//! The committee bounds fajr and isha by an empirically calibrated number of minutes from
//! sunrise and sunset. Each table gives the length at four anchor points of the year, scaled
//! linearly with absolute latitude; between anchors the value is interpolated over the days
//! elapsed since the winter solstice of the observer's hemisphere.
//!
//! These are data, not astronomy: revising a table means editing the coefficients here.

use crate::math::abs;
use crate::time::days_in_year;
use crate::types::Shafaq;

/// Latitude at and above which the committee falls back to a seventh of the night.
pub const MAX_SEASONAL_LATITUDE: f64 = 55.0;

/// Minutes at the equator, common to the morning and every evening table.
const BASE_MINUTES: f64 = 75.0;

/// Minutes at the equator for the red-glow (ahmer) evening table.
const AHMER_BASE_MINUTES: f64 = 62.0;

/// Linear-in-latitude coefficients for the four seasonal anchors.
///
/// Each anchor evaluates to `base + slope / 55 * |latitude|` minutes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeasonalTable {
    base: f64,
    slopes: [f64; 4],
}

impl SeasonalTable {
    const fn new(base: f64, slopes: [f64; 4]) -> Self {
        Self { base, slopes }
    }

    /// Gets the bound in minutes for a latitude and a day count since the winter solstice.
    #[must_use]
    pub fn minutes(&self, latitude: f64, days_since_solstice: u32) -> f64 {
        let latitude = abs(latitude);
        let [a, b, c, d] = self
            .slopes
            .map(|slope| self.base + slope / MAX_SEASONAL_LATITUDE * latitude);
        interpolate_season(a, b, c, d, days_since_solstice)
    }
}

/// Fajr table.
pub const MORNING: SeasonalTable =
    SeasonalTable::new(BASE_MINUTES, [28.65, 19.44, 32.74, 48.10]);

/// Isha table for the general twilight.
pub const EVENING_GENERAL: SeasonalTable =
    SeasonalTable::new(BASE_MINUTES, [25.60, 2.050, -9.210, 6.140]);

/// Isha table for the red twilight.
pub const EVENING_AHMER: SeasonalTable =
    SeasonalTable::new(AHMER_BASE_MINUTES, [17.40, -7.16, 5.12, 19.44]);

/// Isha table for the white twilight.
pub const EVENING_ABYAD: SeasonalTable =
    SeasonalTable::new(BASE_MINUTES, [25.60, 7.16, 36.84, 81.84]);

/// Gets the isha table for a twilight glow.
#[must_use]
pub const fn evening_table(shafaq: Shafaq) -> &'static SeasonalTable {
    match shafaq {
        Shafaq::General => &EVENING_GENERAL,
        Shafaq::Ahmer => &EVENING_AHMER,
        Shafaq::Abyad => &EVENING_ABYAD,
    }
}

/// Days elapsed since the winter solstice of the observer's hemisphere.
///
/// The northern solstice is taken as ten days before 1 January, the southern one as day 172
/// (day 173 in leap years).
#[must_use]
pub fn days_since_solstice(day_of_year: u32, year: i32, latitude: f64) -> u32 {
    let year_length = days_in_year(year);
    if latitude >= 0.0 {
        let days = day_of_year + 10;
        if days >= year_length {
            days - year_length
        } else {
            days
        }
    } else {
        let southern_solstice = if year_length == 366 { 173 } else { 172 };
        if day_of_year >= southern_solstice {
            day_of_year - southern_solstice
        } else {
            day_of_year + year_length - southern_solstice
        }
    }
}

/// Piecewise-linear walk through the anchors: a at the solstice, b after 91 days, c after
/// 137, d at the opposite solstice (183), then back through c, b to a.
#[allow(clippy::many_single_char_names)]
fn interpolate_season(a: f64, b: f64, c: f64, d: f64, days: u32) -> f64 {
    let days = f64::from(days);
    if days < 91.0 {
        a + (b - a) / 91.0 * days
    } else if days < 137.0 {
        b + (c - b) / 46.0 * (days - 91.0)
    } else if days < 183.0 {
        c + (d - c) / 46.0 * (days - 137.0)
    } else if days < 229.0 {
        d + (c - d) / 46.0 * (days - 183.0)
    } else if days < 275.0 {
        c + (b - c) / 46.0 * (days - 229.0)
    } else {
        b + (a - b) / 91.0 * (days - 275.0)
    }
}
