//! # Miqat
//!
//! Islamic prayer times and qibla direction, computed from the position of the sun.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! For a date and location the library produces the six daily instants (fajr, sunrise, dhuhr,
//! asr, maghrib and isha) under one of 25 regional calculation conventions, and the great-circle
//! bearing towards the Kaaba.
//!
//! ## Features
//!
//! - Solar coordinates and rise/transit/set times after Meeus, "Astronomical Algorithms"
//! - Regional presets as a static table, plus caller-supplied angles
//! - Shafi and Hanafi asr, seasonal moonsighting committee bounds
//! - A usable schedule at every latitude: high-latitude rules bound fajr and isha, and polar
//!   days and nights fall back to the nearest latitude where the sun rises and sets
//! - Thread-safe: stateless, immutable data structures
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions (usually faster than `libm`)
//! - `libm`: Use pure Rust math for `no_std` environments
//! - `serde`: `Serialize`/`Deserialize` for parameters, schedules and value types
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std
//! miqat = "0.1"
//!
//! # no_std
//! miqat = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Prayer times
//! ```rust
//! use miqat::{CalculationMethod, CalculationParameters, CalendarDate, Coordinates, Madhab};
//! use miqat::{Prayer, PrayerTimes};
//!
//! let params = CalculationParameters::from_method(CalculationMethod::NorthAmerica)
//!     .unwrap()
//!     .with_madhab(Madhab::Shafi);
//! let raleigh = Coordinates::new(35.7796, -78.6382).unwrap();
//! let date = CalendarDate::new(2015, 4, 15).unwrap();
//!
//! let times = PrayerTimes::new(raleigh, date, &params).unwrap();
//! for (prayer, time) in times.iter() {
//!     println!("{prayer:>8}: {}", time.format("%H:%M UTC"));
//! }
//! assert_eq!(times.current_prayer(times.asr()), Some(Prayer::Asr));
//! ```
//!
//! ### Qibla
//! ```rust
//! use miqat::{Coordinates, Qibla};
//!
//! let london = Coordinates::new(51.5074, -0.1278).unwrap();
//! println!("Qibla: {:.1}°", Qibla::new(london).direction());
//! ```
//!
//! ## Time Handling
//!
//! All instants are `chrono::DateTime<Utc>`. Rendering them in a local time zone is up to the
//! caller, for instance with `chrono-tz`.
//!
//! ## References
//!
//! - Meeus, J. (1998). Astronomical Algorithms, 2nd edition. Willmann-Bell.
//! - Moonsighting Committee Worldwide. Fajr and Isha seasonal tables.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of preset angles in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::method::{CalculationMethod, MethodPreset};
pub use crate::params::CalculationParameters;
pub use crate::prayer_times::{PrayerTimes, SunnahTimes};
pub use crate::qibla::Qibla;
pub use crate::solar::{SolarPosition, SolarTime};
pub use crate::time::CalendarDate;
pub use crate::types::{
    Coordinates, HighLatitudeRule, HoursUtc, Madhab, Prayer, PrayerAdjustments, Rounding, Shafaq,
};

// Astronomy
pub mod solar;

// Calculation conventions
pub mod method;
pub mod params;
pub mod seasonal;

// Orchestration
pub mod prayer_times;
pub mod qibla;

// Core modules
pub mod error;
pub mod types;

// Internal modules
mod math;

// Public modules
pub mod time;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_method_produces_ordered_schedule() {
        let date = CalendarDate::new(2024, 10, 20).unwrap();
        let locations = [
            Coordinates::new(35.7796, -78.6382).unwrap(),
            Coordinates::new(-33.8688, 151.2093).unwrap(),
            Coordinates::new(1.3521, 103.8198).unwrap(),
        ];

        for method in CalculationMethod::ALL {
            let Ok(params) = CalculationParameters::from_method(method) else {
                assert_eq!(method, CalculationMethod::Other);
                continue;
            };
            for coordinates in locations {
                let times = PrayerTimes::new(coordinates, date, &params).unwrap();
                for pair in Prayer::ALL.windows(2) {
                    assert!(
                        times.time_for(pair[0]) < times.time_for(pair[1]),
                        "{method} at {coordinates:?}: {} not before {}",
                        pair[0],
                        pair[1]
                    );
                }
            }
        }
    }

    #[test]
    fn test_schedule_and_qibla_share_coordinates() {
        let makkah = qibla::KAABA;
        let params = CalculationParameters::from_method(CalculationMethod::UmmAlQura).unwrap();
        let times = PrayerTimes::new(makkah, CalendarDate::new(2024, 3, 1).unwrap(), &params)
            .unwrap();
        assert_eq!(times.coordinates(), makkah);
        assert_eq!(Qibla::new(makkah).direction(), 0.0);
    }
}
