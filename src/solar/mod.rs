//! Solar transit and horizon crossing times.
//!
//! Implements the rising, transit and setting method of Meeus, "Astronomical Algorithms",
//! chapter 15: the sun's apparent coordinates are tabulated at 0h UT on the previous, current
//! and following day, then interpolated to the approximate event time and refined once with
//! the altitude correction.
//!
//! All times are [`HoursUtc`] offsets from 0h UT of the calculation date.

#![allow(clippy::many_single_char_names)]

pub mod position;

pub use position::SolarPosition;

use crate::math::{
    abs, acos, asin, atan, cos, degrees_to_radians, interpolate, interpolate_angles, mul_add,
    normalize_degrees_0_to_360, normalize_to_unit_range, radians_to_degrees, round, sin, tan,
};
use crate::time::CalendarDate;
use crate::types::{Coordinates, HoursUtc};

/// Depression of the sun's center at sunrise and sunset: 34' refraction plus 16' semidiameter.
pub const SUNRISE_DEPRESSION: f64 = 50.0 / 60.0;

/// Sidereal rotation in degrees per solar day (Meeus 15.2).
const SIDEREAL_DEGREES_PER_DAY: f64 = 360.985647;

/// Solar transit, sunrise, sunset and twilight crossings for one date and location.
///
/// # Example
/// ```
/// # use miqat::{CalendarDate, Coordinates, SolarTime};
/// let date = CalendarDate::new(2015, 7, 12).unwrap();
/// let raleigh = Coordinates::new(35.7833, -78.65).unwrap();
/// let solar = SolarTime::new(date, raleigh);
///
/// // solar noon at 17:20 UTC
/// assert!((solar.transit().hours() - 17.337).abs() < 0.001);
/// // the sun gets 18° below the horizon in the early morning
/// assert!(solar.time_for_angle(18.0, false).is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarTime {
    observer: Coordinates,
    solar: SolarPosition,
    prev_solar: SolarPosition,
    next_solar: SolarPosition,
    approximate_transit: f64,
    transit: HoursUtc,
    sunrise: Option<HoursUtc>,
    sunset: Option<HoursUtc>,
}

impl SolarTime {
    /// Computes the solar events for a date at the given coordinates.
    #[must_use]
    pub fn new(date: CalendarDate, coordinates: Coordinates) -> Self {
        let julian_day = date.julian_day();

        let solar = SolarPosition::from_julian_day(julian_day);
        let prev_solar = SolarPosition::from_julian_day(julian_day - 1.0);
        let next_solar = SolarPosition::from_julian_day(julian_day + 1.0);

        let approximate_transit = approximate_transit(
            coordinates.longitude(),
            solar.apparent_sidereal_time(),
            solar.right_ascension(),
        );
        let transit = HoursUtc::from_hours(corrected_transit(
            approximate_transit,
            coordinates.longitude(),
            &solar,
            &prev_solar,
            &next_solar,
        ));

        let mut solar_time = Self {
            observer: coordinates,
            solar,
            prev_solar,
            next_solar,
            approximate_transit,
            transit,
            sunrise: None,
            sunset: None,
        };
        solar_time.sunrise = solar_time.time_for_angle(SUNRISE_DEPRESSION, false);
        solar_time.sunset = solar_time.time_for_angle(SUNRISE_DEPRESSION, true);

        log::trace!(
            "solar time for {date} at {:.4},{:.4}: transit {:.4}h, sunrise {:?}, sunset {:?}",
            coordinates.latitude(),
            coordinates.longitude(),
            transit.hours(),
            solar_time.sunrise.map(|h| h.hours()),
            solar_time.sunset.map(|h| h.hours()),
        );

        solar_time
    }

    /// Gets the coordinates this was computed for.
    #[must_use]
    pub const fn coordinates(&self) -> Coordinates {
        self.observer
    }

    /// Gets the sun's position at 0h UT of the date.
    #[must_use]
    pub const fn position(&self) -> SolarPosition {
        self.solar
    }

    /// Gets the time of solar transit (local solar noon).
    #[must_use]
    pub const fn transit(&self) -> HoursUtc {
        self.transit
    }

    /// Gets the time of sunrise, or `None` during polar day or night.
    #[must_use]
    pub const fn sunrise(&self) -> Option<HoursUtc> {
        self.sunrise
    }

    /// Gets the time of sunset, or `None` during polar day or night.
    #[must_use]
    pub const fn sunset(&self) -> Option<HoursUtc> {
        self.sunset
    }

    /// Gets the time the sun's center crosses `depression` degrees below the horizon.
    ///
    /// The morning crossing is returned when `after_transit` is false, the evening crossing
    /// otherwise. Returns `None` when the sun never reaches that depression on this date.
    #[must_use]
    pub fn time_for_angle(&self, depression: f64, after_transit: bool) -> Option<HoursUtc> {
        self.time_for_altitude(-depression, after_transit)
    }

    /// Gets the afternoon time at which an object's shadow is `shadow_factor` times its
    /// length plus its shadow at transit.
    ///
    /// Returns `None` if the sun sets before that shadow length is reached.
    #[must_use]
    pub fn afternoon_time(&self, shadow_factor: f64) -> Option<HoursUtc> {
        let noon_shadow = tan(degrees_to_radians(abs(
            self.observer.latitude() - self.solar.declination(),
        )));
        let altitude = radians_to_degrees(atan(1.0 / (shadow_factor + noon_shadow)));
        self.time_for_altitude(altitude, true)
    }

    fn time_for_altitude(&self, altitude: f64, after_transit: bool) -> Option<HoursUtc> {
        corrected_hour_angle(self, altitude, after_transit).map(HoursUtc::from_hours)
    }
}

/// Approximate transit as a fraction of the day (Meeus 15.2).
fn approximate_transit(longitude: f64, sidereal_time: f64, right_ascension: f64) -> f64 {
    // Meeus measures longitude positive west
    let longitude_west = -longitude;
    normalize_to_unit_range((right_ascension + longitude_west - sidereal_time) / 360.0)
}

/// Transit in hours after the interpolation refinement (Meeus 15).
fn corrected_transit(
    m0: f64,
    longitude: f64,
    solar: &SolarPosition,
    prev_solar: &SolarPosition,
    next_solar: &SolarPosition,
) -> f64 {
    let longitude_west = -longitude;
    let theta =
        normalize_degrees_0_to_360(sidereal_time_after(solar.apparent_sidereal_time(), m0));
    let alpha = normalize_degrees_0_to_360(interpolate_angles(
        solar.right_ascension(),
        prev_solar.right_ascension(),
        next_solar.right_ascension(),
        m0,
    ));
    let hour_angle = quadrant_shift(theta - longitude_west - alpha);
    (m0 - hour_angle / 360.0) * 24.0
}

/// Time in hours at which the sun reaches `altitude` (Meeus 15.1 and 15.2).
fn corrected_hour_angle(time: &SolarTime, altitude: f64, after_transit: bool) -> Option<f64> {
    let longitude_west = -time.observer.longitude();
    let phi = degrees_to_radians(time.observer.latitude());
    let delta2 = degrees_to_radians(time.solar.declination());

    let cos_h0 = (sin(degrees_to_radians(altitude)) - sin(phi) * sin(delta2))
        / (cos(phi) * cos(delta2));
    if !(-1.0..=1.0).contains(&cos_h0) {
        return None;
    }
    let h0 = radians_to_degrees(acos(cos_h0));

    let m = if after_transit {
        time.approximate_transit + h0 / 360.0
    } else {
        time.approximate_transit - h0 / 360.0
    };

    let theta =
        normalize_degrees_0_to_360(sidereal_time_after(time.solar.apparent_sidereal_time(), m));
    let alpha = normalize_degrees_0_to_360(interpolate_angles(
        time.solar.right_ascension(),
        time.prev_solar.right_ascension(),
        time.next_solar.right_ascension(),
        m,
    ));
    let delta = interpolate(
        time.solar.declination(),
        time.prev_solar.declination(),
        time.next_solar.declination(),
        m,
    );

    let hour_angle = theta - longitude_west - alpha;
    let h = altitude_of_celestial_body(phi, degrees_to_radians(delta), hour_angle);
    let correction = (h - altitude)
        / (360.0 * cos(degrees_to_radians(delta)) * cos(phi) * sin(degrees_to_radians(hour_angle)));

    let hours = (m + correction) * 24.0;
    hours.is_finite().then_some(hours)
}

/// Sidereal time at Greenwich `m` days after 0h UT.
fn sidereal_time_after(sidereal_time: f64, m: f64) -> f64 {
    mul_add(SIDEREAL_DEGREES_PER_DAY, m, sidereal_time)
}

/// Altitude in degrees of a body at declination `delta` and local hour angle `hour_angle`
/// (Meeus 13.6); `phi` and `delta` in radians.
fn altitude_of_celestial_body(phi: f64, delta: f64, hour_angle: f64) -> f64 {
    radians_to_degrees(asin(
        sin(phi) * sin(delta) + cos(phi) * cos(delta) * cos(degrees_to_radians(hour_angle)),
    ))
}

/// Brings an hour angle into [-180, 180].
fn quadrant_shift(angle: f64) -> f64 {
    if (-180.0..=180.0).contains(&angle) {
        angle
    } else {
        angle - 360.0 * round(angle / 360.0)
    }
}
