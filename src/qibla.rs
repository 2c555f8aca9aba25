//! Direction of prayer towards the Kaaba.

use crate::math::{atan2, cos, degrees_to_radians, normalize_degrees_0_to_360, radians_to_degrees, sin};
use crate::types::Coordinates;

/// Location of the Kaaba in Makkah.
pub const KAABA: Coordinates = Coordinates::new_unchecked(21.422_524_1, 39.826_181_8);

/// Initial great-circle bearing from a location to the Kaaba.
///
/// # Example
/// ```
/// # use miqat::{Coordinates, Qibla};
/// let new_york = Coordinates::new(40.7128, -74.0059).unwrap();
/// let qibla = Qibla::new(new_york);
/// assert!((qibla.direction() - 58.4817).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Qibla {
    direction: f64,
}

impl Qibla {
    /// Computes the qibla for a location.
    ///
    /// At the Kaaba itself, where the bearing is undefined, the direction is 0°.
    #[must_use]
    pub fn new(coordinates: Coordinates) -> Self {
        Self {
            direction: initial_bearing(coordinates, KAABA),
        }
    }

    /// Gets the bearing in degrees clockwise from true north, in [0, 360).
    #[must_use]
    pub const fn direction(&self) -> f64 {
        self.direction
    }
}

/// Initial great-circle bearing from `from` to `to` in degrees, 0 when the points coincide.
fn initial_bearing(from: Coordinates, to: Coordinates) -> f64 {
    let phi1 = degrees_to_radians(from.latitude());
    let phi2 = degrees_to_radians(to.latitude());
    let delta_lambda = degrees_to_radians(to.longitude() - from.longitude());

    let y = sin(delta_lambda) * cos(phi2);
    let x = cos(phi1) * sin(phi2) - sin(phi1) * cos(phi2) * cos(delta_lambda);
    if y == 0.0 && x == 0.0 {
        return 0.0;
    }
    normalize_degrees_0_to_360(radians_to_degrees(atan2(y, x)))
}
