//! Sunrise, sunset and twilight times for cities at very different latitudes.

use chrono::{FixedOffset, TimeZone, Utc};
use sunrise_sunset::{Location, SunriseSunsetCalculator};

#[derive(Debug)]
struct City {
    name: &'static str,
    latitude: f64,
    longitude: f64,
    utc_offset_hours: i32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cities = [
        City {
            name: "Longyearbyen, Norway (Arctic)",
            latitude: 78.22,
            longitude: 15.65,
            utc_offset_hours: 1,
        },
        City {
            name: "Reykjavik, Iceland",
            latitude: 64.1466,
            longitude: -21.9426,
            utc_offset_hours: 0,
        },
        City {
            name: "Albany, New York",
            latitude: 42.652579,
            longitude: -73.756232,
            utc_offset_hours: -5,
        },
        City {
            name: "Singapore",
            latitude: 1.3521,
            longitude: 103.8198,
            utc_offset_hours: 8,
        },
        City {
            name: "Auckland, New Zealand",
            latitude: -36.8485,
            longitude: 174.7633,
            utc_offset_hours: 13,
        },
    ];

    println!("Winter solstice 2024, local standard time (99:99 = no event)");
    println!();
    println!(
        "{:<32} {:>11} {:>11} {:>11} {:>11}",
        "City", "Astronomical", "Nautical", "Civil", "Official"
    );
    println!("{}", "-".repeat(80));

    for city in &cities {
        let zone = FixedOffset::east_opt(city.utc_offset_hours * 3600).ok_or("bad offset")?;
        let calculator =
            SunriseSunsetCalculator::new(Location::new(city.latitude, city.longitude)?, zone);
        let date = zone
            .with_ymd_and_hms(2024, 12, 21, 12, 0, 0)
            .single()
            .ok_or("bad date")?;

        println!(
            "{:<32} {:>5}-{:<5} {:>5}-{:<5} {:>5}-{:<5} {:>5}-{:<5}",
            city.name,
            calculator.astronomical_sunrise(&date)?.to_string(),
            calculator.astronomical_sunset(&date)?.to_string(),
            calculator.nautical_sunrise(&date)?.to_string(),
            calculator.nautical_sunset(&date)?.to_string(),
            calculator.civil_sunrise(&date)?.to_string(),
            calculator.civil_sunset(&date)?.to_string(),
            calculator.official_sunrise(&date)?.to_string(),
            calculator.official_sunset(&date)?.to_string(),
        );
    }

    println!();
    let albany = SunriseSunsetCalculator::new(
        Location::new(42.652579, -73.756232)?,
        FixedOffset::west_opt(5 * 3600).ok_or("bad offset")?,
    );
    let date = Utc.with_ymd_and_hms(2024, 12, 21, 17, 0, 0).unwrap();
    if let Some(sunset) = albany.official_sunset_datetime(&date)?.time() {
        println!("Albany official sunset as a timestamp: {sunset}");
    }

    Ok(())
}
