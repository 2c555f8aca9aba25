//! Core data types for prayer time calculations.

use crate::error::check_coordinates;
use crate::math::abs;
use crate::Result;
use core::fmt;

/// A geographic location in degrees.
///
/// # Example
/// ```
/// # use miqat::Coordinates;
/// let raleigh = Coordinates::new(35.7796, -78.6382).unwrap();
/// assert_eq!(raleigh.latitude(), 35.7796);
/// assert!(Coordinates::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    /// Latitude in degrees, positive north (-90 to +90)
    latitude: f64,
    /// Longitude in degrees, positive east (-180 to +180)
    longitude: f64,
}

impl Coordinates {
    /// Creates validated coordinates.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Coordinates that are known to be in range.
    pub(crate) const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Gets the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Copy of these coordinates at a different latitude.
    pub(crate) const fn with_latitude(self, latitude: f64) -> Self {
        Self {
            latitude,
            longitude: self.longitude,
        }
    }
}

/// Jurisprudential school, selecting the asr shadow length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Madhab {
    /// Asr begins when an object's shadow equals its length (plus the noon shadow).
    #[default]
    Shafi,
    /// Asr begins when an object's shadow is twice its length (plus the noon shadow).
    Hanafi,
}

impl Madhab {
    /// Gets the shadow length multiplier used for asr.
    #[must_use]
    pub const fn shadow_factor(&self) -> f64 {
        match self {
            Self::Shafi => 1.0,
            Self::Hanafi => 2.0,
        }
    }
}

/// Strategy bounding fajr and isha where twilight lasts all night or never ends.
///
/// The night is the span from sunset to the following sunrise. Each rule limits how far
/// fajr may precede sunrise, and isha may follow sunset, to a portion of that night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HighLatitudeRule {
    /// Fajr no earlier than the middle of the night, isha no later than it.
    #[default]
    MiddleOfTheNight,
    /// Fajr no earlier than the last seventh of the night, isha no later than the first.
    SeventhOfTheNight,
    /// Portion of the night proportional to the depression angle (angle / 60).
    TwilightAngle,
}

impl HighLatitudeRule {
    /// Gets the rule suited to a location: seventh of the night above 48° absolute latitude,
    /// middle of the night elsewhere.
    #[must_use]
    pub fn recommended(coordinates: &Coordinates) -> Self {
        if abs(coordinates.latitude()) > 48.0 {
            Self::SeventhOfTheNight
        } else {
            Self::MiddleOfTheNight
        }
    }
}

/// The six daily prayer instants, sunrise included.
///
/// "No prayer" is expressed as `Option<Prayer>::None` by the queries that need it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Prayer {
    /// Dawn prayer, at the start of morning twilight.
    Fajr,
    /// Sunrise, end of the fajr window.
    Sunrise,
    /// Midday prayer, just after solar transit.
    Dhuhr,
    /// Afternoon prayer, by shadow length.
    Asr,
    /// Sunset prayer.
    Maghrib,
    /// Night prayer, at the end of evening twilight.
    Isha,
}

impl Prayer {
    /// All prayers in chronological order.
    pub const ALL: [Self; 6] = [
        Self::Fajr,
        Self::Sunrise,
        Self::Dhuhr,
        Self::Asr,
        Self::Maghrib,
        Self::Isha,
    ];

    /// Gets the prayer that follows within the same day, if any.
    #[must_use]
    pub const fn next(&self) -> Option<Self> {
        match self {
            Self::Fajr => Some(Self::Sunrise),
            Self::Sunrise => Some(Self::Dhuhr),
            Self::Dhuhr => Some(Self::Asr),
            Self::Asr => Some(Self::Maghrib),
            Self::Maghrib => Some(Self::Isha),
            Self::Isha => None,
        }
    }

    /// Gets the prayer that precedes within the same day, if any.
    #[must_use]
    pub const fn previous(&self) -> Option<Self> {
        match self {
            Self::Fajr => None,
            Self::Sunrise => Some(Self::Fajr),
            Self::Dhuhr => Some(Self::Sunrise),
            Self::Asr => Some(Self::Dhuhr),
            Self::Maghrib => Some(Self::Asr),
            Self::Isha => Some(Self::Maghrib),
        }
    }

    /// Gets the lowercase English name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Fajr => "fajr",
            Self::Sunrise => "sunrise",
            Self::Dhuhr => "dhuhr",
            Self::Asr => "asr",
            Self::Maghrib => "maghrib",
            Self::Isha => "isha",
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Signed whole-minute offsets, one per prayer.
///
/// # Example
/// ```
/// # use miqat::{Prayer, PrayerAdjustments};
/// let adjustments = PrayerAdjustments::default().with(Prayer::Isha, 2);
/// assert_eq!(adjustments.get(Prayer::Isha), 2);
/// assert_eq!(adjustments.get(Prayer::Fajr), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrayerAdjustments {
    /// Minutes added to fajr
    pub fajr: i32,
    /// Minutes added to sunrise
    pub sunrise: i32,
    /// Minutes added to dhuhr
    pub dhuhr: i32,
    /// Minutes added to asr
    pub asr: i32,
    /// Minutes added to maghrib
    pub maghrib: i32,
    /// Minutes added to isha
    pub isha: i32,
}

impl PrayerAdjustments {
    /// Creates adjustments from six minute offsets in chronological order.
    #[must_use]
    pub const fn new(
        fajr: i32,
        sunrise: i32,
        dhuhr: i32,
        asr: i32,
        maghrib: i32,
        isha: i32,
    ) -> Self {
        Self {
            fajr,
            sunrise,
            dhuhr,
            asr,
            maghrib,
            isha,
        }
    }

    /// No adjustments.
    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0, 0, 0, 0, 0, 0)
    }

    /// Gets the offset for a prayer.
    #[must_use]
    pub const fn get(&self, prayer: Prayer) -> i32 {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Dhuhr => self.dhuhr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// Copy with the offset for one prayer replaced.
    #[must_use]
    pub const fn with(mut self, prayer: Prayer, minutes: i32) -> Self {
        match prayer {
            Prayer::Fajr => self.fajr = minutes,
            Prayer::Sunrise => self.sunrise = minutes,
            Prayer::Dhuhr => self.dhuhr = minutes,
            Prayer::Asr => self.asr = minutes,
            Prayer::Maghrib => self.maghrib = minutes,
            Prayer::Isha => self.isha = minutes,
        }
        self
    }
}

/// How computed instants are rounded to whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rounding {
    /// Round to the nearest minute (30 seconds round up).
    #[default]
    Nearest,
    /// Round any partial minute up.
    Up,
    /// Keep seconds.
    None,
}

/// Twilight glow used by the moonsighting committee isha table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shafaq {
    /// Blend of the red and white glow; the committee default.
    #[default]
    General,
    /// Red glow, the earlier isha.
    Ahmer,
    /// White glow, the later isha.
    Abyad,
}

/// Hours since midnight UTC of the calculation date.
///
/// Values represent hours since 0h UT for the calculation date:
/// - Negative values indicate the previous day
/// - 0.0 to < 24.0 indicates the current day
/// - ≥ 24.0 indicates the next day
///
/// # Example
/// ```
/// # use miqat::HoursUtc;
/// let evening = HoursUtc::from_hours(24.5); // 00:30 next day
/// assert!(evening > HoursUtc::from_hours(23.0));
/// assert_eq!(evening.hours(), 24.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct HoursUtc(f64);

impl HoursUtc {
    /// Creates a new `HoursUtc` from hours since midnight UTC.
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Gets the raw hours value.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinates() {
        let coordinates = Coordinates::new(35.7796, -78.6382).unwrap();
        assert_eq!(coordinates.latitude(), 35.7796);
        assert_eq!(coordinates.longitude(), -78.6382);

        assert!(Coordinates::new(90.0, 180.0).is_ok());
        assert!(Coordinates::new(-90.0, -180.0).is_ok());
        assert!(Coordinates::new(90.1, 0.0).is_err());
        assert!(Coordinates::new(0.0, -180.1).is_err());
        assert!(Coordinates::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_madhab_shadow_factor() {
        assert_eq!(Madhab::Shafi.shadow_factor(), 1.0);
        assert_eq!(Madhab::Hanafi.shadow_factor(), 2.0);
        assert_eq!(Madhab::default(), Madhab::Shafi);
    }

    #[test]
    fn test_recommended_high_latitude_rule() {
        let oslo = Coordinates::new(59.9139, 10.7522).unwrap();
        let raleigh = Coordinates::new(35.7796, -78.6382).unwrap();
        let ushuaia = Coordinates::new(-54.8019, -68.3030).unwrap();
        assert_eq!(
            HighLatitudeRule::recommended(&oslo),
            HighLatitudeRule::SeventhOfTheNight
        );
        assert_eq!(
            HighLatitudeRule::recommended(&raleigh),
            HighLatitudeRule::MiddleOfTheNight
        );
        assert_eq!(
            HighLatitudeRule::recommended(&ushuaia),
            HighLatitudeRule::SeventhOfTheNight
        );
    }

    #[test]
    fn test_prayer_cycle() {
        assert_eq!(Prayer::ALL.len(), 6);
        for pair in Prayer::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert_eq!(pair[0].next(), Some(pair[1]));
            assert_eq!(pair[1].previous(), Some(pair[0]));
        }
        assert_eq!(Prayer::Isha.next(), None);
        assert_eq!(Prayer::Fajr.previous(), None);
        assert_eq!(Prayer::Maghrib.name(), "maghrib");
    }

    #[test]
    fn test_prayer_adjustments() {
        let adjustments = PrayerAdjustments::new(1, 2, 3, 4, 5, 6);
        let minutes = Prayer::ALL.map(|prayer| adjustments.get(prayer));
        assert_eq!(minutes, [1, 2, 3, 4, 5, 6]);

        let changed = adjustments.with(Prayer::Asr, -10);
        assert_eq!(changed.asr, -10);
        assert_eq!(changed.dhuhr, 3);
        assert_eq!(PrayerAdjustments::zero(), PrayerAdjustments::default());
    }
}
