//! Daylight-saving handling with IANA zones.
//!
//! Built only with the `chrono-tz` feature: `cargo test --all-features`.

use chrono::{FixedOffset, TimeZone, Timelike};
use chrono_tz::America::New_York;
use sunrise_sunset::{sunset_for_elevation, time::ZoneRules, Location, SunriseSunsetCalculator};

fn albany() -> SunriseSunsetCalculator<chrono_tz::Tz> {
    SunriseSunsetCalculator::new(Location::new(42.652579, -73.756232).unwrap(), New_York)
}

#[test]
fn test_summer_day_applies_daylight_saving() {
    let calc = albany();
    let date = New_York.with_ymd_and_hms(2024, 6, 21, 9, 0, 0).unwrap();

    assert_eq!(calc.official_sunrise(&date).unwrap().to_string(), "05:17");
    assert_eq!(calc.official_sunset(&date).unwrap().to_string(), "20:37");
    assert_eq!(calc.civil_sunrise(&date).unwrap().to_string(), "04:42");
    assert_eq!(calc.civil_sunset(&date).unwrap().to_string(), "21:12");
    assert_eq!(calc.nautical_sunrise(&date).unwrap().to_string(), "03:57");
    assert_eq!(calc.nautical_sunset(&date).unwrap().to_string(), "21:57");
    assert_eq!(
        calc.astronomical_sunrise(&date).unwrap().to_string(),
        "03:01"
    );
    assert_eq!(
        calc.astronomical_sunset(&date).unwrap().to_string(),
        "22:53"
    );
}

#[test]
fn test_winter_day_uses_standard_time() {
    let calc = albany();
    let date = New_York.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();

    assert_eq!(calc.official_sunrise(&date).unwrap().to_string(), "07:23");
    assert_eq!(calc.official_sunset(&date).unwrap().to_string(), "16:47");

    let solstice = New_York.with_ymd_and_hms(2024, 12, 21, 9, 0, 0).unwrap();
    assert_eq!(
        calc.official_sunrise(&solstice).unwrap().to_string(),
        "07:22"
    );
    assert_eq!(
        calc.official_sunset(&solstice).unwrap().to_string(),
        "16:25"
    );
}

#[test]
fn test_equinoxes_fall_in_daylight_saving() {
    let calc = albany();

    let march = New_York.with_ymd_and_hms(2024, 3, 20, 9, 0, 0).unwrap();
    assert_eq!(calc.official_sunrise(&march).unwrap().to_string(), "06:57");
    assert_eq!(calc.official_sunset(&march).unwrap().to_string(), "19:08");

    let september = New_York.with_ymd_and_hms(2024, 9, 22, 9, 0, 0).unwrap();
    assert_eq!(
        calc.official_sunrise(&september).unwrap().to_string(),
        "06:43"
    );
    assert_eq!(
        calc.official_sunset(&september).unwrap().to_string(),
        "18:51"
    );
}

#[test]
fn test_timestamps_carry_daylight_offset() {
    let calc = albany();
    let date = New_York.with_ymd_and_hms(2024, 6, 21, 9, 0, 0).unwrap();

    let sunset = calc
        .official_sunset_datetime(&date)
        .unwrap()
        .into_time()
        .unwrap();
    assert_eq!((sunset.hour(), sunset.minute()), (20, 37));

    let edt = FixedOffset::west_opt(4 * 3600).unwrap();
    assert_eq!(
        sunset.with_timezone(&edt).naive_local(),
        edt.with_ymd_and_hms(2024, 6, 21, 20, 37, 0)
            .unwrap()
            .naive_local()
    );
}

#[test]
fn test_zone_rules_follow_transitions() {
    let before = chrono::NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
    let after = chrono::NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();

    assert!(!New_York.is_daylight_saving(before));
    assert!(New_York.is_daylight_saving(after));
    assert_eq!(New_York.standard_offset_hours(after), -5.0);
}

#[test]
fn test_elevation_function_in_iana_zone() {
    // Official zenith expressed as an elevation
    let date = New_York.with_ymd_and_hms(2024, 6, 21, 0, 0, 0).unwrap();
    let sunset = sunset_for_elevation(42.652579, -73.756232, &date, -0.8333)
        .unwrap()
        .unwrap();
    assert_eq!((sunset.hour(), sunset.minute()), (20, 37));
}
