//! Qibla bearings for a few cities, and schedules under each calculation method.

use miqat::{CalculationMethod, CalculationParameters, CalendarDate, Coordinates, PrayerTimes, Qibla};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Qibla ===\n");
    for (city, latitude, longitude) in [
        ("London", 51.5074, -0.1278),
        ("New York", 40.7128, -74.0059),
        ("Jakarta", -6.2088, 106.8456),
        ("Cape Town", -33.9249, 18.4241),
        ("Tokyo", 35.6895, 139.6917),
    ] {
        let qibla = Qibla::new(Coordinates::new(latitude, longitude)?);
        println!("  {city:<10} {:>7.2}°", qibla.direction());
    }

    println!("\n=== Methods in Cairo, 2024-03-20 (UTC) ===\n");
    let cairo = Coordinates::new(30.0444, 31.2357)?;
    let date = CalendarDate::new(2024, 3, 20)?;
    for method in CalculationMethod::ALL {
        let Ok(params) = CalculationParameters::from_method(method) else {
            // custom parameters have no preset angles
            continue;
        };
        let times = PrayerTimes::new(cairo, date, &params)?;
        println!(
            "  {:<42} fajr {}  isha {}",
            method.name(),
            times.fajr().format("%H:%M"),
            times.isha().format("%H:%M")
        );
    }

    Ok(())
}
