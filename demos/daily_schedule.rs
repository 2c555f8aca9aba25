//! Print a day's prayer schedule in local time, plus the night prayer times.

use chrono::{Timelike, Utc};
use chrono_tz::America::New_York;
use miqat::{
    CalculationMethod, CalculationParameters, CalendarDate, Coordinates, HighLatitudeRule, Madhab,
    Prayer, PrayerAdjustments, PrayerTimes, SunnahTimes,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let coordinates = Coordinates::new(35.7796, -78.6382)?; // Raleigh, NC
    let date = CalendarDate::new(2015, 7, 12)?;

    let params = CalculationParameters::from_method(CalculationMethod::NorthAmerica)?
        .with_madhab(Madhab::Hanafi)
        .with_high_latitude_rule(HighLatitudeRule::recommended(&coordinates))
        .with_adjustments(PrayerAdjustments::zero().with(Prayer::Isha, 2));

    let times = PrayerTimes::new(coordinates, date, &params)?;

    println!("{} at {:?} ({})", date, coordinates, params.method());
    for (prayer, instant) in times.iter() {
        let local = instant.with_timezone(&New_York);
        println!("  {:<8} {:02}:{:02}", prayer.name(), local.hour(), local.minute());
    }

    let sunnah = SunnahTimes::new(&times)?;
    println!(
        "  middle of the night  {}",
        sunnah.middle_of_the_night().with_timezone(&New_York).format("%H:%M")
    );
    println!(
        "  last third           {}",
        sunnah.last_third_of_the_night().with_timezone(&New_York).format("%H:%M")
    );

    let now = Utc::now();
    match (times.current_prayer(now), times.next_prayer(now)) {
        (Some(current), Some(next)) => println!("\nNow: {current}, next: {next}"),
        (Some(current), None) => println!("\nNow: {current}, no further prayer today"),
        (None, _) => println!("\nBefore fajr of {date}"),
    }

    Ok(())
}
