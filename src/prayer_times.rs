//! Daily prayer schedule for a date and location.
//!
//! Sunrise, dhuhr, asr and maghrib come straight from [`SolarTime`]. Fajr and isha follow their
//! depression angles but are bounded by a portion of the night (or the seasonal moonsighting
//! tables), so they exist at every latitude. Where the sun does not rise or set at all, the
//! schedule is computed at the nearest latitude towards the equator where it does.

use crate::error::Error;
use crate::math::{abs, ceil, floor};
use crate::method::CalculationMethod;
use crate::params::CalculationParameters;
use crate::seasonal::{days_since_solstice, evening_table, MAX_SEASONAL_LATITUDE, MORNING};
use crate::solar::SolarTime;
use crate::time::{add_minutes, add_seconds, hours_after_midnight, round_to_minute, CalendarDate};
use crate::types::{Coordinates, HighLatitudeRule, HoursUtc, Prayer, Rounding};
use crate::Result;
use chrono::{DateTime, Utc};

/// Latitude decrement per retry when the schedule is degenerate.
const LATITUDE_STEP: f64 = 0.5;

/// Retries needed to walk from a pole to the equator.
const MAX_LATITUDE_STEPS: u32 = 180;

/// The six prayer instants of one day, in UTC.
///
/// # Example
/// ```
/// # use miqat::{CalculationMethod, CalculationParameters, CalendarDate, Coordinates, Prayer, PrayerTimes};
/// let params = CalculationParameters::from_method(CalculationMethod::NorthAmerica).unwrap();
/// let raleigh = Coordinates::new(35.7796, -78.6382).unwrap();
/// let date = CalendarDate::new(2015, 4, 15).unwrap();
///
/// let times = PrayerTimes::new(raleigh, date, &params).unwrap();
/// assert_eq!(times.fajr().format("%H:%M").to_string(), "09:28");
/// assert_eq!(times.maghrib().format("%H:%M").to_string(), "23:48");
/// assert_eq!(times.next_prayer(times.dhuhr()), Some(Prayer::Asr));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrayerTimes {
    coordinates: Coordinates,
    date: CalendarDate,
    parameters: CalculationParameters,
    fajr: DateTime<Utc>,
    sunrise: DateTime<Utc>,
    dhuhr: DateTime<Utc>,
    asr: DateTime<Utc>,
    maghrib: DateTime<Utc>,
    isha: DateTime<Utc>,
}

impl PrayerTimes {
    /// Computes the schedule for a date at the given coordinates.
    ///
    /// Instants are rounded according to the parameters' [`Rounding`], after the method's own
    /// offsets and the user adjustments have been added.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the following day is outside the supported range, and
    /// `ComputationError` if no latitude between the given one and the equator yields a
    /// well-formed schedule.
    pub fn new(
        coordinates: Coordinates,
        date: CalendarDate,
        parameters: &CalculationParameters,
    ) -> Result<Self> {
        let tomorrow = date.succ()?;
        let mut latitude = coordinates.latitude();

        for _ in 0..=MAX_LATITUDE_STEPS {
            let effective = coordinates.with_latitude(latitude);
            let schedule = base_schedule(effective, date, tomorrow, parameters)
                .and_then(|raw| with_method_offsets(raw, parameters))
                .filter(|times| is_strictly_ordered(times));

            if let Some(times) = schedule {
                if latitude != coordinates.latitude() {
                    log::debug!(
                        "no well-formed schedule at latitude {:.4} on {date}, using {latitude:.1}",
                        coordinates.latitude()
                    );
                }
                return Self::from_schedule(coordinates, date, *parameters, times);
            }
            latitude = step_toward_equator(latitude);
        }

        Err(Error::computation_error(
            "no latitude towards the equator yields a well-formed schedule",
        ))
    }

    fn from_schedule(
        coordinates: Coordinates,
        date: CalendarDate,
        parameters: CalculationParameters,
        times: [DateTime<Utc>; 6],
    ) -> Result<Self> {
        let adjust = |prayer: Prayer| {
            add_minutes(
                times[prayer as usize],
                i64::from(parameters.adjustments().get(prayer)),
            )
            .ok_or(Error::computation_error("adjusted time out of range"))
        };

        Ok(Self {
            coordinates,
            date,
            parameters,
            fajr: adjust(Prayer::Fajr)?,
            sunrise: adjust(Prayer::Sunrise)?,
            dhuhr: adjust(Prayer::Dhuhr)?,
            asr: adjust(Prayer::Asr)?,
            maghrib: adjust(Prayer::Maghrib)?,
            isha: adjust(Prayer::Isha)?,
        })
    }

    /// Gets the fajr time.
    #[must_use]
    pub const fn fajr(&self) -> DateTime<Utc> {
        self.fajr
    }

    /// Gets the sunrise time.
    #[must_use]
    pub const fn sunrise(&self) -> DateTime<Utc> {
        self.sunrise
    }

    /// Gets the dhuhr time.
    #[must_use]
    pub const fn dhuhr(&self) -> DateTime<Utc> {
        self.dhuhr
    }

    /// Gets the asr time.
    #[must_use]
    pub const fn asr(&self) -> DateTime<Utc> {
        self.asr
    }

    /// Gets the maghrib time.
    #[must_use]
    pub const fn maghrib(&self) -> DateTime<Utc> {
        self.maghrib
    }

    /// Gets the isha time.
    #[must_use]
    pub const fn isha(&self) -> DateTime<Utc> {
        self.isha
    }

    /// Gets the time of a prayer.
    #[must_use]
    pub const fn time_for(&self, prayer: Prayer) -> DateTime<Utc> {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// Gets the latest prayer whose time is at or before `at`.
    ///
    /// Returns `None` before fajr.
    #[must_use]
    pub fn current_prayer(&self, at: DateTime<Utc>) -> Option<Prayer> {
        Prayer::ALL
            .into_iter()
            .rev()
            .find(|prayer| self.time_for(*prayer) <= at)
    }

    /// Gets the earliest prayer whose time is after `at`.
    ///
    /// Returns `None` from isha onwards.
    #[must_use]
    pub fn next_prayer(&self, at: DateTime<Utc>) -> Option<Prayer> {
        Prayer::ALL
            .into_iter()
            .find(|prayer| self.time_for(*prayer) > at)
    }

    /// Iterates over the prayers and their times in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = (Prayer, DateTime<Utc>)> + '_ {
        Prayer::ALL
            .into_iter()
            .map(move |prayer| (prayer, self.time_for(prayer)))
    }

    /// Gets the date this schedule was computed for.
    #[must_use]
    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    /// Gets the coordinates this schedule was computed for.
    ///
    /// These are the coordinates as given, even if a lower latitude was used.
    #[must_use]
    pub const fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    /// Gets the parameters this schedule was computed with.
    #[must_use]
    pub const fn parameters(&self) -> &CalculationParameters {
        &self.parameters
    }
}

/// Unrounded instants before any minute offsets, or `None` if the sun does not rise and set
/// on both `date` and `tomorrow`.
fn base_schedule(
    coordinates: Coordinates,
    date: CalendarDate,
    tomorrow: CalendarDate,
    parameters: &CalculationParameters,
) -> Option<[DateTime<Utc>; 6]> {
    let solar = SolarTime::new(date, coordinates);
    let tomorrow_solar = SolarTime::new(tomorrow, coordinates);
    let at = |hours: HoursUtc| hours_after_midnight(date, hours.hours());

    let sunrise = at(solar.sunrise()?)?;
    let maghrib = at(solar.sunset()?)?;
    let dhuhr = at(solar.transit())?;
    let asr = at(solar.afternoon_time(parameters.madhab().shadow_factor())?)?;
    let tomorrow_sunrise = hours_after_midnight(tomorrow, tomorrow_solar.sunrise()?.hours())?;

    let night = Night {
        sunset: maghrib,
        sunrise,
        seconds: (tomorrow_sunrise - maghrib).num_milliseconds() as f64 / 1000.0,
    };
    let bounds = NightBounds::new(coordinates, date, parameters, &night)?;

    let fajr = match solar
        .time_for_angle(parameters.fajr_angle(), false)
        .and_then(at)
    {
        Some(fajr) if fajr >= bounds.fajr => fajr,
        angle_time => {
            log::debug!(
                "fajr on {date} bounded by {} ({})",
                bounds.rule,
                if angle_time.is_some() { "angle too early" } else { "angle never reached" }
            );
            bounds.fajr
        }
    };

    let isha = if parameters.isha_interval() > 0 {
        add_minutes(maghrib, i64::from(parameters.isha_interval()))?
    } else {
        match solar
            .time_for_angle(parameters.isha_angle(), true)
            .and_then(at)
        {
            Some(isha) if isha <= bounds.isha => isha,
            angle_time => {
                log::debug!(
                    "isha on {date} bounded by {} ({})",
                    bounds.rule,
                    if angle_time.is_some() { "angle too late" } else { "angle never reached" }
                );
                bounds.isha
            }
        }
    };

    Some([fajr, sunrise, dhuhr, asr, maghrib, isha])
}

/// Sunset to the following sunrise.
struct Night {
    sunset: DateTime<Utc>,
    sunrise: DateTime<Utc>,
    seconds: f64,
}

/// Earliest fajr and latest isha allowed.
struct NightBounds {
    fajr: DateTime<Utc>,
    isha: DateTime<Utc>,
    rule: &'static str,
}

impl NightBounds {
    fn new(
        coordinates: Coordinates,
        date: CalendarDate,
        parameters: &CalculationParameters,
        night: &Night,
    ) -> Option<Self> {
        let latitude = coordinates.latitude();
        let moonsighting = parameters.method() == CalculationMethod::MoonsightingCommittee;

        // the tables are calibrated up to 55° in either hemisphere
        if moonsighting && abs(latitude) < MAX_SEASONAL_LATITUDE {
            let days = days_since_solstice(date.day_of_year(), date.year(), latitude);
            let morning = floor(MORNING.minutes(latitude, days)) as i64;
            let evening =
                ceil(evening_table(parameters.shafaq()).minutes(latitude, days)) as i64;
            return Some(Self {
                fajr: add_minutes(night.sunrise, -morning)?,
                isha: add_minutes(night.sunset, evening)?,
                rule: "seasonal moonsighting table",
            });
        }

        let ((fajr_portion, isha_portion), rule) = if moonsighting {
            ((1.0 / 7.0, 1.0 / 7.0), "seventh of the night")
        } else {
            (parameters.night_portions(), rule_name(parameters))
        };
        Some(Self {
            fajr: add_seconds(night.sunrise, -fajr_portion * night.seconds)?,
            isha: add_seconds(night.sunset, isha_portion * night.seconds)?,
            rule,
        })
    }
}

const fn rule_name(parameters: &CalculationParameters) -> &'static str {
    match parameters.high_latitude_rule() {
        HighLatitudeRule::MiddleOfTheNight => "middle of the night",
        HighLatitudeRule::SeventhOfTheNight => "seventh of the night",
        HighLatitudeRule::TwilightAngle => "twilight angle",
    }
}

/// Adds the method's minute offsets and rounds.
fn with_method_offsets(
    times: [DateTime<Utc>; 6],
    parameters: &CalculationParameters,
) -> Option<[DateTime<Utc>; 6]> {
    let mut adjusted = times;
    for prayer in Prayer::ALL {
        let offset = i64::from(parameters.method_adjustments().get(prayer));
        let shifted = add_minutes(times[prayer as usize], offset)?;
        adjusted[prayer as usize] = round_to_minute(shifted, parameters.rounding())?;
    }
    Some(adjusted)
}

fn is_strictly_ordered(times: &[DateTime<Utc>; 6]) -> bool {
    times.windows(2).all(|pair| pair[0] < pair[1])
}

fn step_toward_equator(latitude: f64) -> f64 {
    if abs(latitude) <= LATITUDE_STEP {
        0.0
    } else if latitude > 0.0 {
        latitude - LATITUDE_STEP
    } else {
        latitude + LATITUDE_STEP
    }
}

/// Night prayer times derived from a day's schedule and the next day's fajr.
///
/// # Example
/// ```
/// # use miqat::{CalculationMethod, CalculationParameters, CalendarDate, Coordinates, PrayerTimes, SunnahTimes};
/// let params = CalculationParameters::from_method(CalculationMethod::MuslimWorldLeague).unwrap();
/// let london = Coordinates::new(51.5074, -0.1278).unwrap();
/// let times = PrayerTimes::new(london, CalendarDate::new(2024, 1, 15).unwrap(), &params).unwrap();
///
/// let sunnah = SunnahTimes::new(&times).unwrap();
/// assert!(times.maghrib() < sunnah.middle_of_the_night());
/// assert!(sunnah.middle_of_the_night() < sunnah.last_third_of_the_night());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SunnahTimes {
    middle_of_the_night: DateTime<Utc>,
    last_third_of_the_night: DateTime<Utc>,
}

impl SunnahTimes {
    /// Computes the night divisions between maghrib and the following day's fajr.
    ///
    /// The following day is computed with the same coordinates and parameters.
    ///
    /// # Errors
    /// Propagates errors from computing the following day's schedule.
    pub fn new(prayer_times: &PrayerTimes) -> Result<Self> {
        let tomorrow = PrayerTimes::new(
            prayer_times.coordinates(),
            prayer_times.date().succ()?,
            prayer_times.parameters(),
        )?;
        let maghrib = prayer_times.maghrib();
        let night = (tomorrow.fajr() - maghrib).num_seconds() as f64;

        let division = |fraction: f64| {
            add_seconds(maghrib, night * fraction)
                .and_then(|instant| round_to_minute(instant, Rounding::Nearest))
                .ok_or(Error::computation_error("night division out of range"))
        };

        Ok(Self {
            middle_of_the_night: division(0.5)?,
            last_third_of_the_night: division(2.0 / 3.0)?,
        })
    }

    /// Gets the midpoint between maghrib and the next fajr.
    #[must_use]
    pub const fn middle_of_the_night(&self) -> DateTime<Utc> {
        self.middle_of_the_night
    }

    /// Gets the start of the last third of the night.
    #[must_use]
    pub const fn last_third_of_the_night(&self) -> DateTime<Utc> {
        self.last_third_of_the_night
    }
}
