//! Validate qibla bearings against reference values for world cities.

use approx::assert_abs_diff_eq;
use miqat::qibla::KAABA;
use miqat::{Coordinates, Qibla};
use std::error::Error;

const EPSILON: f64 = 0.01;

#[test]
fn reference_bearings() -> Result<(), Box<dyn Error>> {
    let cases = [
        ("Washington DC", 38.9072, -77.0369, 56.560),
        ("New York", 40.7128, -74.0059, 58.482),
        ("San Francisco", 37.7749, -122.4194, 18.844),
        ("Anchorage", 61.2181, -149.9003, 350.883),
        ("Sydney", -33.8688, 151.2093, 277.500),
        ("Auckland", -36.8485, 174.7633, 261.197),
        ("London", 51.5074, -0.1278, 118.987),
        ("Paris", 48.8566, 2.3522, 119.163),
        ("Oslo", 59.9139, 10.7522, 139.028),
        ("Islamabad", 33.7294, 73.0931, 255.882),
        ("Tokyo", 35.6895, 139.6917, 293.021),
    ];

    for (city, latitude, longitude, expected) in cases {
        let qibla = Qibla::new(Coordinates::new(latitude, longitude)?);
        let error = (qibla.direction() - expected).abs();
        assert!(
            error < EPSILON,
            "{city}: {:.3}° (expected {expected:.3}°, error {error:.4}°)",
            qibla.direction()
        );
    }
    Ok(())
}

#[test]
fn bearing_along_the_kaaba_meridian() -> Result<(), Box<dyn Error>> {
    let north = Qibla::new(Coordinates::new(60.0, KAABA.longitude())?);
    let south = Qibla::new(Coordinates::new(-40.0, KAABA.longitude())?);
    assert_abs_diff_eq!(north.direction(), 180.0, epsilon = 1e-9);
    assert_abs_diff_eq!(south.direction(), 0.0, epsilon = 1e-9);
    Ok(())
}

#[test]
fn bearing_at_the_kaaba_is_north() {
    assert_eq!(Qibla::new(KAABA).direction(), 0.0);
}

#[test]
fn antipode_neighbourhood_stays_finite() -> Result<(), Box<dyn Error>> {
    let antipode = Coordinates::new(-KAABA.latitude(), KAABA.longitude() - 180.0)?;
    let direction = Qibla::new(antipode).direction();
    assert!(direction.is_finite());
    assert!((0.0..360.0).contains(&direction));
    Ok(())
}

#[test]
fn invalid_coordinates_are_rejected() {
    assert!(Coordinates::new(91.0, 0.0).is_err());
    assert!(Coordinates::new(0.0, 181.0).is_err());
    assert!(Coordinates::new(f64::NAN, 0.0).is_err());
}
