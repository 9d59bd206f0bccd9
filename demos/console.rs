//! Interactive sunrise/sunset for today in the system's current UTC offset.
//!
//! Press enter at either prompt to use Albany, New York.

use chrono::{Local, Offset};
use std::io::{self, BufRead, Write};
use sunrise_sunset::{Location, SunriseSunsetCalculator};

const DEFAULT_LATITUDE: &str = "42.6525790";
const DEFAULT_LONGITUDE: &str = "-73.7562320";

fn prompt(input: &mut impl BufRead, label: &str, default: &str) -> io::Result<String> {
    print!("Enter {label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let value = line.trim();
    Ok(if value.is_empty() { default } else { value }.to_string())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut input = io::stdin().lock();
    let latitude = prompt(&mut input, "Latitude", DEFAULT_LATITUDE)?;
    let longitude = prompt(&mut input, "Longitude", DEFAULT_LONGITUDE)?;

    println!("Calculating...");
    let location = Location::parse(&latitude, &longitude)?;
    let now = Local::now();
    let calculator = SunriseSunsetCalculator::new(location, now.offset().fix());

    println!(
        "Astronomical Sunrise: {}",
        calculator.astronomical_sunrise_datetime(&now)?
    );
    println!(
        "Astronomical Sunset: {}",
        calculator.astronomical_sunset_datetime(&now)?
    );
    println!(
        "Nautical Sunrise: {}",
        calculator.nautical_sunrise_datetime(&now)?
    );
    println!(
        "Nautical Sunset: {}",
        calculator.nautical_sunset_datetime(&now)?
    );
    println!(
        "Civil Sunrise: {}",
        calculator.civil_sunrise_datetime(&now)?
    );
    println!("Civil Sunset: {}", calculator.civil_sunset_datetime(&now)?);
    println!(
        "Official Sunrise: {}",
        calculator.official_sunrise_datetime(&now)?
    );
    println!(
        "Official Sunset: {}",
        calculator.official_sunset_datetime(&now)?
    );

    Ok(())
}
