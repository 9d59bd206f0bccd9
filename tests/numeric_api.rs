//! Tests for the numeric solar event API (no chrono required).

use sunrise_sunset::{
    solar_event::{solar_event_for_date, solar_event_time},
    time::{day_of_year, ZoneAdjustment},
    Error, EventKind, LocalHours, Location, SolarEvent, Zenith,
};

fn albany() -> Location {
    Location::new(42.652579, -73.756232).unwrap()
}

#[test]
fn test_summer_solstice_all_categories() {
    let zone = ZoneAdjustment::new(-5.0, true);
    let expected = [
        (Zenith::ASTRONOMICAL, "03:01", "22:53"),
        (Zenith::NAUTICAL, "03:57", "21:57"),
        (Zenith::CIVIL, "04:42", "21:12"),
        (Zenith::OFFICIAL, "05:17", "20:37"),
    ];

    for (zenith, sunrise, sunset) in expected {
        for (kind, text) in [(EventKind::Sunrise, sunrise), (EventKind::Sunset, sunset)] {
            let event = solar_event_for_date(&albany(), zenith, 2024, 6, 21, zone, kind).unwrap();
            let (day_offset, time) = event.time().unwrap().time_of_day().unwrap();
            assert_eq!(day_offset, 0);
            assert_eq!(time.to_string(), text, "{zenith:?} {kind:?}");
        }
    }
}

#[test]
fn test_geometric_horizon() {
    let zenith = Zenith::from_elevation(0.0).unwrap();
    let zone = ZoneAdjustment::new(-5.0, true);
    let day = day_of_year(2024, 6, 21).unwrap();

    let sunrise = solar_event_time(&albany(), zenith, day, zone, EventKind::Sunrise).unwrap();
    let sunset = solar_event_time(&albany(), zenith, day, zone, EventKind::Sunset).unwrap();
    assert_eq!(sunrise.time_of_day().unwrap().1.to_string(), "05:23");
    assert_eq!(sunset.time_of_day().unwrap().1.to_string(), "20:31");
}

#[test]
fn test_utc_times_outside_the_day() {
    let day = day_of_year(2024, 6, 21).unwrap();

    let tokyo = Location::new(35.6762, 139.6503).unwrap();
    let sunrise = solar_event_time(
        &tokyo,
        Zenith::OFFICIAL,
        day,
        ZoneAdjustment::UTC,
        EventKind::Sunrise,
    )
    .unwrap();
    assert!(sunrise.hours() < 0.0);
    let (day_offset, time) = sunrise.time_of_day().unwrap();
    assert_eq!((day_offset, time.to_string().as_str()), (-1, "19:26"));
    assert_eq!(sunrise.to_string(), "19:26");

    let honolulu = Location::new(21.3069, -157.8583).unwrap();
    let sunset = solar_event_time(
        &honolulu,
        Zenith::OFFICIAL,
        day,
        ZoneAdjustment::UTC,
        EventKind::Sunset,
    )
    .unwrap();
    assert!(sunset.hours() > 24.0);
    let (day_offset, time) = sunset.time_of_day().unwrap();
    assert_eq!((day_offset, time.to_string().as_str()), (1, "05:16"));
}

#[test]
fn test_no_event_is_an_error_in_core() {
    let longyearbyen = Location::new(78.22, 15.65).unwrap();
    let zone = ZoneAdjustment::new(1.0, true);
    let day = day_of_year(2024, 6, 21).unwrap();

    let err = solar_event_time(
        &longyearbyen,
        Zenith::ASTRONOMICAL,
        day,
        zone,
        EventKind::Sunrise,
    )
    .unwrap_err();
    assert!(err.is_no_solar_event());
    if let Error::NoSolarEvent { cosine_local_hour } = err {
        assert!(cosine_local_hour < -1.0);
    } else {
        panic!("expected NoSolarEvent, got {err:?}");
    }

    let event = solar_event_for_date(
        &longyearbyen,
        Zenith::OFFICIAL,
        2024,
        6,
        21,
        zone,
        EventKind::Sunrise,
    )
    .unwrap();
    assert_eq!(event, SolarEvent::AllDay);
    assert_eq!(event.to_string(), "99:99");
}

#[test]
fn test_invalid_inputs() {
    let zone = ZoneAdjustment::UTC;
    assert!(solar_event_time(&albany(), Zenith::OFFICIAL, 0, zone, EventKind::Sunrise).is_err());
    assert!(solar_event_time(&albany(), Zenith::OFFICIAL, 367, zone, EventKind::Sunset).is_err());
    assert!(solar_event_for_date(
        &albany(),
        Zenith::OFFICIAL,
        2023,
        2,
        29,
        zone,
        EventKind::Sunrise,
    )
    .is_err());
    assert!(Zenith::custom(f64::NAN).is_err());
    assert!(Location::new(0.0, 180.5).is_err());
}

#[test]
fn test_local_hours_day_and_hours() {
    let (day, hours) = LocalHours::from_hours(12.5).day_and_hours();
    assert_eq!(day, 0);
    assert!((hours - 12.5).abs() < 1e-10);

    let (day, hours) = LocalHours::from_hours(25.5).day_and_hours();
    assert_eq!(day, 1);
    assert!((hours - 1.5).abs() < 1e-10);

    let (day, hours) = LocalHours::from_hours(-0.5).day_and_hours();
    assert_eq!(day, -1);
    assert!((hours - 23.5).abs() < 1e-10);
}

#[test]
fn test_rounding_carries_into_next_hour() {
    // 7.9999 rounds to 60 minutes and carries
    let (day, time) = LocalHours::from_hours(7.9999).time_of_day().unwrap();
    assert_eq!(day, 0);
    assert_eq!(time.to_string(), "08:00");

    let (day, time) = LocalHours::from_hours(23.9999).time_of_day().unwrap();
    assert_eq!(day, 1);
    assert_eq!(time.to_string(), "00:00");
}
