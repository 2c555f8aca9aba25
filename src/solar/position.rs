//! Low-accuracy solar coordinates.
//!
//! Follows Meeus, "Astronomical Algorithms", 2nd edition: chapter 25 (solar coordinates, low
//! accuracy), chapter 22 (nutation, low accuracy terms) and chapter 12 (sidereal time). The
//! results are good to about 0.01° in the years around 2000, comfortably below one minute of
//! prayer time.

#![allow(clippy::unreadable_literal)]

use crate::math::{
    atan2, asin, cos, degrees_to_radians, normalize_degrees_0_to_360, normalize_degrees_pm_180,
    polynomial, radians_to_degrees, sin,
};
use crate::time::julian_century;

/// Arc seconds per degree
const ARCSEC_PER_DEGREE: f64 = 3600.0;

/// Apparent position of the sun for an instant.
///
/// # Example
/// ```
/// # use miqat::SolarPosition;
/// // Meeus example 25.a: 1992-10-13 0h TD
/// let position = SolarPosition::from_julian_day(2_448_908.5);
/// assert!((position.declination() + 7.78507).abs() < 1e-4);
/// assert!((position.right_ascension() - 198.38083).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Apparent declination in degrees
    declination: f64,
    /// Apparent right ascension in degrees [0, 360)
    right_ascension: f64,
    /// Apparent sidereal time at Greenwich in degrees
    apparent_sidereal_time: f64,
    /// Equation of time in minutes
    equation_of_time: f64,
}

impl SolarPosition {
    /// Computes the solar position for a Julian day.
    #[must_use]
    pub fn from_julian_day(julian_day: f64) -> Self {
        let t = julian_century(julian_day);

        let l0 = mean_solar_longitude(t);
        let lp = mean_lunar_longitude(t);
        let omega = ascending_lunar_node_longitude(t);
        let lambda = degrees_to_radians(apparent_solar_longitude(t, l0));

        let theta0 = mean_sidereal_time(julian_day, t);
        let delta_psi = nutation_in_longitude(l0, lp, omega);
        let delta_epsilon = nutation_in_obliquity(l0, lp, omega);

        let epsilon0 = mean_obliquity_of_the_ecliptic(t);
        let epsilon_apparent = degrees_to_radians(apparent_obliquity_of_the_ecliptic(t, epsilon0));

        let declination = radians_to_degrees(asin(sin(epsilon_apparent) * sin(lambda)));
        let right_ascension = normalize_degrees_0_to_360(radians_to_degrees(atan2(
            cos(epsilon_apparent) * sin(lambda),
            cos(lambda),
        )));

        // Meeus 12: apparent = mean + nutation in longitude * cos(true obliquity)
        let apparent_sidereal_time =
            theta0 + delta_psi * cos(degrees_to_radians(epsilon0 + delta_epsilon));

        // Meeus 28.3, with the aberration constant folded into 0.0057183
        let equation_of_time = normalize_degrees_pm_180(
            l0 - 0.0057183 - right_ascension + delta_psi * cos(epsilon_apparent),
        ) * 4.0;

        Self {
            declination,
            right_ascension,
            apparent_sidereal_time,
            equation_of_time,
        }
    }

    /// Gets the apparent declination in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Gets the apparent right ascension in degrees, in [0, 360).
    #[must_use]
    pub const fn right_ascension(&self) -> f64 {
        self.right_ascension
    }

    /// Gets the apparent sidereal time at Greenwich in degrees.
    #[must_use]
    pub const fn apparent_sidereal_time(&self) -> f64 {
        self.apparent_sidereal_time
    }

    /// Gets the equation of time in minutes (apparent minus mean solar time).
    #[must_use]
    pub const fn equation_of_time(&self) -> f64 {
        self.equation_of_time
    }
}

/// Geometric mean longitude of the sun referred to the mean equinox of the date (Meeus 25.2).
fn mean_solar_longitude(t: f64) -> f64 {
    normalize_degrees_0_to_360(polynomial(&[280.4664567, 36000.76983, 0.0003032], t))
}

/// Mean longitude of the moon (Meeus 22, low accuracy nutation).
fn mean_lunar_longitude(t: f64) -> f64 {
    normalize_degrees_0_to_360(polynomial(&[218.3165, 481267.8813], t))
}

/// Longitude of the ascending node of the moon's mean orbit (Meeus 22).
fn ascending_lunar_node_longitude(t: f64) -> f64 {
    normalize_degrees_0_to_360(polynomial(
        &[125.04452, -1934.136261, 0.0020708, 1.0 / 450000.0],
        t,
    ))
}

/// Mean anomaly of the sun (Meeus 25.3).
fn mean_solar_anomaly(t: f64) -> f64 {
    normalize_degrees_0_to_360(polynomial(&[357.52911, 35999.05029, -0.0001537], t))
}

/// Equation of the center of the sun (Meeus 25).
fn solar_equation_of_the_center(t: f64, mean_anomaly: f64) -> f64 {
    let m = degrees_to_radians(mean_anomaly);
    polynomial(&[1.914602, -0.004817, -0.000014], t) * sin(m)
        + polynomial(&[0.019993, -0.000101], t) * sin(2.0 * m)
        + 0.000289 * sin(3.0 * m)
}

/// Apparent longitude of the sun, corrected for nutation and aberration (Meeus 25).
fn apparent_solar_longitude(t: f64, mean_longitude: f64) -> f64 {
    let true_longitude =
        mean_longitude + solar_equation_of_the_center(t, mean_solar_anomaly(t));
    let omega = degrees_to_radians(125.04 - 1934.136 * t);
    normalize_degrees_0_to_360(true_longitude - 0.00569 - 0.00478 * sin(omega))
}

/// Mean obliquity of the ecliptic (Meeus 22.2).
fn mean_obliquity_of_the_ecliptic(t: f64) -> f64 {
    polynomial(&[23.439291, -0.013004167, -0.0000001639, 0.0000005036], t)
}

/// Apparent obliquity of the ecliptic (Meeus 25.8).
fn apparent_obliquity_of_the_ecliptic(t: f64, mean_obliquity: f64) -> f64 {
    let omega = degrees_to_radians(125.04 - 1934.136 * t);
    mean_obliquity + 0.00256 * cos(omega)
}

/// Mean sidereal time at Greenwich in degrees (Meeus 12.4).
fn mean_sidereal_time(julian_day: f64, t: f64) -> f64 {
    let days = julian_day - 2_451_545.0;
    let theta = 280.46061837 + 360.98564736629 * days + 0.000387933 * t * t
        - t * t * t / 38710000.0;
    normalize_degrees_0_to_360(theta)
}

/// Nutation in longitude in degrees (Meeus 22, low accuracy).
fn nutation_in_longitude(solar_longitude: f64, lunar_longitude: f64, node: f64) -> f64 {
    let l0 = degrees_to_radians(solar_longitude);
    let lp = degrees_to_radians(lunar_longitude);
    let omega = degrees_to_radians(node);
    (-17.2 * sin(omega) - 1.32 * sin(2.0 * l0) - 0.23 * sin(2.0 * lp) + 0.21 * sin(2.0 * omega))
        / ARCSEC_PER_DEGREE
}

/// Nutation in obliquity in degrees (Meeus 22, low accuracy).
fn nutation_in_obliquity(solar_longitude: f64, lunar_longitude: f64, node: f64) -> f64 {
    let l0 = degrees_to_radians(solar_longitude);
    let lp = degrees_to_radians(lunar_longitude);
    let omega = degrees_to_radians(node);
    (9.2 * cos(omega) + 0.57 * cos(2.0 * l0) + 0.10 * cos(2.0 * lp) - 0.09 * cos(2.0 * omega))
        / ARCSEC_PER_DEGREE
}
