//! Sunrise/sunset calculation without the chrono library.
//!
//! The numeric API takes the calendar date and the zone adjustment directly.

use sunrise_sunset::{solar_event, time::ZoneAdjustment, EventKind, Location, SolarEvent, Zenith};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let albany = Location::new(42.652579, -73.756232)?;
    // Eastern time with daylight saving in effect
    let zone = ZoneAdjustment::new(-5.0, true);

    println!(
        "Albany, June 21, 2024 (UTC{:+}):",
        zone.total_offset_hours()
    );
    for (name, zenith) in [
        ("Astronomical", Zenith::ASTRONOMICAL),
        ("Nautical", Zenith::NAUTICAL),
        ("Civil", Zenith::CIVIL),
        ("Official", Zenith::OFFICIAL),
    ] {
        let sunrise = solar_event::solar_event_for_date(
            &albany,
            zenith,
            2024,
            6,
            21,
            zone,
            EventKind::Sunrise,
        )?;
        let sunset = solar_event::solar_event_for_date(
            &albany,
            zenith,
            2024,
            6,
            21,
            zone,
            EventKind::Sunset,
        )?;

        if let (Some(rise), Some(set)) = (sunrise.time(), sunset.time()) {
            println!(
                "  {name:<13} {:>8.4} h  {:>8.4} h   ({} - {})",
                rise.hours(),
                set.hours(),
                rise.time_of_day()?.1,
                set.time_of_day()?.1
            );
        }
    }
    println!();

    // Times in UTC can fall outside the calendar day
    let tokyo = Location::new(35.6762, 139.6503)?;
    let day = sunrise_sunset::time::day_of_year(2024, 6, 21)?;
    let sunrise = solar_event::solar_event_time(
        &tokyo,
        Zenith::OFFICIAL,
        day,
        ZoneAdjustment::UTC,
        EventKind::Sunrise,
    )?;
    let (day_offset, time) = sunrise.time_of_day()?;
    println!("Tokyo sunrise, June 21 2024 (UTC):");
    println!("  Raw hours:  {:.4}", sunrise.hours());
    println!("  Day offset: {day_offset}");
    println!("  Time:       {time}");
    println!();

    // The core reports a missing event as an error, for_date as a variant
    let longyearbyen = Location::new(78.22, 15.65)?;
    match solar_event::solar_event_for_date(
        &longyearbyen,
        Zenith::CIVIL,
        2024,
        12,
        21,
        ZoneAdjustment::new(1.0, false),
        EventKind::Sunrise,
    )? {
        SolarEvent::Occurs(hours) => println!("Longyearbyen civil dawn at {:.4} h", hours.hours()),
        SolarEvent::AllDay => println!("Longyearbyen: sun above civil twilight all day"),
        SolarEvent::AllNight => println!("Longyearbyen: polar night, no civil dawn"),
    }

    Ok(())
}
