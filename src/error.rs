//! Error types for prayer time and qibla calculations.

use core::fmt;

/// Shorthand for results carrying this crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur when validating inputs or computing prayer times.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Latitude outside [-90°, 90°] or not a number.
    InvalidLatitude {
        /// Rejected latitude in degrees.
        value: f64,
    },
    /// Longitude outside [-180°, 180°] or not a number.
    InvalidLongitude {
        /// Rejected longitude in degrees.
        value: f64,
    },
    /// Invalid fajr depression angle.
    InvalidFajrAngle {
        /// The invalid angle value provided.
        value: f64,
    },
    /// Invalid isha depression angle.
    InvalidIshaAngle {
        /// The invalid angle value provided.
        value: f64,
    },
    /// Invalid calendar date.
    InvalidDate {
        /// Description of the date constraint violation.
        message: &'static str,
    },
    /// No latitude toward the equator produced a well-formed schedule.
    ComputationError {
        /// What could not be computed.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLatitude { value } => {
                write!(f, "latitude {value}° is outside [-90°, 90°]")
            }
            Self::InvalidLongitude { value } => {
                write!(f, "longitude {value}° is outside [-180°, 180°]")
            }
            Self::InvalidFajrAngle { value } => {
                write!(
                    f,
                    "invalid fajr angle {value}° (must be between 0° and 90°, exclusive)"
                )
            }
            Self::InvalidIshaAngle { value } => {
                write!(
                    f,
                    "invalid isha angle {value}° (must be between 0° and 90°, exclusive, \
                     unless an isha interval is set)"
                )
            }
            Self::InvalidDate { message } => {
                write!(f, "invalid date: {message}")
            }
            Self::ComputationError { message } => {
                write!(f, "cannot compute schedule: {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Rejects a latitude.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Rejects a longitude.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Rejects a fajr depression angle.
    #[must_use]
    pub const fn invalid_fajr_angle(value: f64) -> Self {
        Self::InvalidFajrAngle { value }
    }

    /// Rejects an isha depression angle.
    #[must_use]
    pub const fn invalid_isha_angle(value: f64) -> Self {
        Self::InvalidIshaAngle { value }
    }

    /// Rejects a calendar date.
    #[must_use]
    pub const fn invalid_date(message: &'static str) -> Self {
        Self::InvalidDate { message }
    }

    /// Reports a schedule that could not be made well-formed.
    #[must_use]
    pub const fn computation_error(message: &'static str) -> Self {
        Self::ComputationError { message }
    }
}

/// Accepts latitudes from -90° (south pole) to 90° (north pole).
///
/// # Errors
/// Returns `InvalidLatitude` for anything else, NaN included.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if (-90.0..=90.0).contains(&latitude) {
        Ok(())
    } else {
        Err(Error::invalid_latitude(latitude))
    }
}

/// Accepts longitudes from -180° to 180°, positive east.
///
/// # Errors
/// Returns `InvalidLongitude` for anything else, NaN included.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if (-180.0..=180.0).contains(&longitude) {
        Ok(())
    } else {
        Err(Error::invalid_longitude(longitude))
    }
}

/// Checks a coordinate pair, latitude first.
///
/// # Errors
/// Returns the error of the first component that fails.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude).and_then(|()| check_longitude(longitude))
}

/// Checks that a depression angle lies strictly between 0 and 90 degrees.
///
/// Returns `false` for NaN and infinities.
#[must_use]
pub fn is_valid_depression_angle(angle: f64) -> bool {
    angle > 0.0 && angle < 90.0
}

/// Validates the fajr and isha depression angles of a parameter set.
///
/// The isha angle is not used when a fixed isha interval is configured, so it may be zero in
/// that case (but never negative or non-finite).
///
/// # Errors
/// Returns `InvalidFajrAngle` or `InvalidIshaAngle` for out-of-range angles.
pub fn check_depression_angles(
    fajr_angle: f64,
    isha_angle: f64,
    isha_interval_minutes: u32,
) -> Result<()> {
    if !is_valid_depression_angle(fajr_angle) {
        return Err(Error::invalid_fajr_angle(fajr_angle));
    }
    let isha_ok = if isha_interval_minutes > 0 {
        isha_angle == 0.0 || is_valid_depression_angle(isha_angle)
    } else {
        is_valid_depression_angle(isha_angle)
    };
    if !isha_ok {
        return Err(Error::invalid_isha_angle(isha_angle));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_range() {
        for latitude in [-90.0, -54.8019, 0.0, 21.422_524_1, 69.6492, 90.0] {
            assert_eq!(check_latitude(latitude), Ok(()));
        }
        for latitude in [90.000_1, -90.5, 180.0, f64::NAN, f64::INFINITY] {
            assert!(check_latitude(latitude).is_err(), "{latitude}");
        }
    }

    #[test]
    fn test_longitude_range() {
        for longitude in [-180.0, -78.6382, 0.0, 39.826_181_8, 180.0] {
            assert_eq!(check_longitude(longitude), Ok(()));
        }
        for longitude in [180.5, -181.0, 360.0, f64::NAN, f64::NEG_INFINITY] {
            assert!(check_longitude(longitude).is_err(), "{longitude}");
        }
    }

    #[test]
    fn test_coordinates_report_first_invalid_component() {
        assert_eq!(
            check_coordinates(95.0, 200.0),
            Err(Error::invalid_latitude(95.0))
        );
        assert_eq!(
            check_coordinates(45.0, 200.0),
            Err(Error::invalid_longitude(200.0))
        );
    }

    #[test]
    fn test_depression_angle_validation() {
        assert!(check_depression_angles(18.0, 17.0, 0).is_ok());
        assert!(check_depression_angles(18.5, 0.0, 90).is_ok());
        assert!(check_depression_angles(18.5, 17.0, 90).is_ok());

        assert_eq!(
            check_depression_angles(0.0, 17.0, 0),
            Err(Error::invalid_fajr_angle(0.0))
        );
        assert_eq!(
            check_depression_angles(-3.0, 17.0, 0),
            Err(Error::invalid_fajr_angle(-3.0))
        );
        assert_eq!(
            check_depression_angles(18.0, 0.0, 0),
            Err(Error::invalid_isha_angle(0.0))
        );
        assert_eq!(
            check_depression_angles(18.0, -1.0, 90),
            Err(Error::invalid_isha_angle(-1.0))
        );
        assert!(check_depression_angles(90.0, 17.0, 0).is_err());
        assert!(check_depression_angles(f64::NAN, 17.0, 0).is_err());
        assert!(check_depression_angles(18.0, f64::INFINITY, 0).is_err());
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_error_display() {
        let cases = [
            (Error::invalid_latitude(95.5), "latitude 95.5° is outside [-90°, 90°]"),
            (Error::invalid_longitude(-200.0), "longitude -200° is outside [-180°, 180°]"),
            (
                Error::invalid_fajr_angle(-2.0),
                "invalid fajr angle -2° (must be between 0° and 90°, exclusive)",
            ),
            (
                Error::invalid_date("month must be between 1 and 12"),
                "invalid date: month must be between 1 and 12",
            ),
            (
                Error::computation_error("no usable latitude"),
                "cannot compute schedule: no usable latitude",
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }
}
