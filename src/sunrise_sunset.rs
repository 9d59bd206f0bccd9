//! Convenience API for the four standard sunrise/sunset categories.
//!
//! [`SunriseSunsetCalculator`] wraps a [`SolarEventCalculator`] and exposes one method
//! per zenith category, event and output form. [`sunrise_for_elevation`] and
//! [`sunset_for_elevation`] compute a single event without keeping a calculator.

use chrono::DateTime;
use chrono::TimeZone;

use crate::time::ZoneRules;
use crate::{Location, Result, SolarEvent, SolarEventCalculator, TimeOfDay, Zenith};

/// Sunrise and sunset times for one location in one time zone.
///
/// Text methods return a [`SolarEvent<TimeOfDay>`] that displays as `HH:MM`, or
/// `99:99` on days without the event. `*_datetime` methods return timestamps in the
/// calculator's zone.
///
/// # Example
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use sunrise_sunset::{Location, SunriseSunsetCalculator};
///
/// let zone = FixedOffset::west_opt(5 * 3600).unwrap();
/// let albany = Location::parse("42.6525790", "-73.7562320").unwrap();
/// let calculator = SunriseSunsetCalculator::new(albany, zone);
///
/// let date = zone.with_ymd_and_hms(2024, 12, 21, 9, 30, 0).unwrap();
/// assert_eq!(calculator.official_sunrise(&date).unwrap().to_string(), "07:22");
/// assert_eq!(calculator.official_sunset(&date).unwrap().to_string(), "16:25");
/// ```
#[derive(Debug, Clone)]
pub struct SunriseSunsetCalculator<Tz: ZoneRules> {
    calculator: SolarEventCalculator<Tz>,
}

impl<Tz: ZoneRules> SunriseSunsetCalculator<Tz> {
    /// Creates a calculator for `location` reporting times in `zone`.
    #[must_use]
    pub const fn new(location: Location, zone: Tz) -> Self {
        Self {
            calculator: SolarEventCalculator::new(location, zone),
        }
    }

    /// Gets the location used by this calculator.
    #[must_use]
    pub const fn location(&self) -> &Location {
        self.calculator.location()
    }

    /// Gets the underlying solar event calculator.
    #[must_use]
    pub const fn calculator(&self) -> &SolarEventCalculator<Tz> {
        &self.calculator
    }

    /// Astronomical (108°) sunrise for the date.
    ///
    /// # Errors
    /// Returns `MalformedTime` if the computed time cannot be decomposed.
    pub fn astronomical_sunrise<T: TimeZone>(
        &self,
        date: &DateTime<T>,
    ) -> Result<SolarEvent<TimeOfDay>> {
        self.calculator
            .compute_sunrise_time(Zenith::ASTRONOMICAL, date)
    }

    /// Astronomical (108°) sunrise for the date as a timestamp.
    ///
    /// # Errors
    /// Returns `MalformedTime` if the computed time cannot be decomposed.
    pub fn astronomical_sunrise_datetime<T: TimeZone>(
        &self,
        date: &DateTime<T>,
    ) -> Result<SolarEvent<DateTime<Tz>>> {
        self.calculator
            .compute_sunrise_datetime(Zenith::ASTRONOMICAL, date)
    }

    /// Astronomical (108°) sunset for the date.
    ///
    /// # Errors
    /// Returns `MalformedTime` if the computed time cannot be decomposed.
    pub fn astronomical_sunset<T: TimeZone>(
        &self,
        date: &DateTime<T>,
    ) -> Result<SolarEvent<TimeOfDay>> {
        self.calculator
            .compute_sunset_time(Zenith::ASTRONOMICAL, date)
    }

    /// Astronomical (108°) sunset for the date as a timestamp.
    ///
    /// # Errors
    /// Returns `MalformedTime` if the computed time cannot be decomposed.
    pub fn astronomical_sunset_datetime<T: TimeZone>(
        &self,
        date: &DateTime<T>,
    ) -> Result<SolarEvent<DateTime<Tz>>> {
        self.calculator
            .compute_sunset_datetime(Zenith::ASTRONOMICAL, date)
    }

    /// Nautical (102°) sunrise for the date.
    ///
    /// # Errors
    /// Returns `MalformedTime` if the computed time cannot be decomposed.
    pub fn nautical_sunrise<T: TimeZone>(
        &self,
        date: &DateTime<T>,
    ) -> Result<SolarEvent<TimeOfDay>> {
        self.calculator.compute_sunrise_time(Zenith::NAUTICAL, date)
    }

    /// Nautical (102°) sunrise for the date as a timestamp.
    ///
    /// # Errors
    /// Returns `MalformedTime` if the computed time cannot be decomposed.
    pub fn nautical_sunrise_datetime<T: TimeZone>(
        &self,
        date: &DateTime<T>,
    ) -> Result<SolarEvent<DateTime<Tz>>> {
        self.calculator
            .compute_sunrise_datetime(Zenith::NAUTICAL, date)
    }

    /// Nautical (102°) sunset for the date.
    ///
    /// # Errors
    /// Returns `MalformedTime` if the computed time cannot be decomposed.
    pub fn nautical_sunset<T: TimeZone>(
        &self,
        date: &DateTime<T>,
    ) -> Result<SolarEvent<TimeOfDay>> {
        self.calculator.compute_sunset_time(Zenith::NAUTICAL, date)
    }

    /// Nautical (102°) sunset for the date as a timestamp.
    ///
    /// # Errors
    /// Returns `MalformedTime` if the computed time cannot be decomposed.
    pub fn nautical_sunset_datetime<T: TimeZone>(
        &self,
        date: &DateTime<T>,
    ) -> Result<SolarEvent<DateTime<Tz>>> {
        self.calculator
            .compute_sunset_datetime(Zenith::NAUTICAL, date)
    }

    /// Civil (96°) sunrise, i.e. dawn, for the date.
    ///
    /// # Errors
    /// Returns `MalformedTime` if the computed time cannot be decomposed.
    pub fn civil_sunrise<T: TimeZone>(&self, date: &DateTime<T>) -> Result<SolarEvent<TimeOfDay>> {
        self.calculator.compute_sunrise_time(Zenith::CIVIL, date)
    }

    /// Civil (96°) sunrise for the date as a timestamp.
    ///
    /// # Errors
    /// Returns `MalformedTime` if the computed time cannot be decomposed.
    pub fn civil_sunrise_datetime<T: TimeZone>(
        &self,
        date: &DateTime<T>,
    ) -> Result<SolarEvent<DateTime<Tz>>> {
        self.calculator
            .compute_sunrise_datetime(Zenith::CIVIL, date)
    }

    /// Civil (96°) sunset, i.e. dusk, for the date.
    ///
    /// # Errors
    /// Returns `MalformedTime` if the computed time cannot be decomposed.
    pub fn civil_sunset<T: TimeZone>(&self, date: &DateTime<T>) -> Result<SolarEvent<TimeOfDay>> {
        self.calculator.compute_sunset_time(Zenith::CIVIL, date)
    }

    /// Civil (96°) sunset for the date as a timestamp.
    ///
    /// # Errors
    /// Returns `MalformedTime` if the computed time cannot be decomposed.
    pub fn civil_sunset_datetime<T: TimeZone>(
        &self,
        date: &DateTime<T>,
    ) -> Result<SolarEvent<DateTime<Tz>>> {
        self.calculator.compute_sunset_datetime(Zenith::CIVIL, date)
    }

    /// Official (90°50') sunrise for the date.
    ///
    /// # Errors
    /// Returns `MalformedTime` if the computed time cannot be decomposed.
    pub fn official_sunrise<T: TimeZone>(
        &self,
        date: &DateTime<T>,
    ) -> Result<SolarEvent<TimeOfDay>> {
        self.calculator.compute_sunrise_time(Zenith::OFFICIAL, date)
    }

    /// Official (90°50') sunrise for the date as a timestamp.
    ///
    /// # Errors
    /// Returns `MalformedTime` if the computed time cannot be decomposed.
    pub fn official_sunrise_datetime<T: TimeZone>(
        &self,
        date: &DateTime<T>,
    ) -> Result<SolarEvent<DateTime<Tz>>> {
        self.calculator
            .compute_sunrise_datetime(Zenith::OFFICIAL, date)
    }

    /// Official (90°50') sunset for the date.
    ///
    /// # Errors
    /// Returns `MalformedTime` if the computed time cannot be decomposed.
    pub fn official_sunset<T: TimeZone>(
        &self,
        date: &DateTime<T>,
    ) -> Result<SolarEvent<TimeOfDay>> {
        self.calculator.compute_sunset_time(Zenith::OFFICIAL, date)
    }

    /// Official (90°50') sunset for the date as a timestamp.
    ///
    /// # Errors
    /// Returns `MalformedTime` if the computed time cannot be decomposed.
    pub fn official_sunset_datetime<T: TimeZone>(
        &self,
        date: &DateTime<T>,
    ) -> Result<SolarEvent<DateTime<Tz>>> {
        self.calculator
            .compute_sunset_datetime(Zenith::OFFICIAL, date)
    }
}

/// One-shot sunrise for the sun at `elevation_degrees` (0° is the geometric horizon).
///
/// The result is in the zone of `date`. `None` means the sun does not cross that
/// elevation on the date.
///
/// # Errors
/// Returns an error for out-of-range coordinates or elevation.
///
/// # Example
/// ```
/// use chrono::{TimeZone, Timelike, Utc};
/// use sunrise_sunset::sunrise_for_elevation;
///
/// let date = Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap();
/// let sunrise = sunrise_for_elevation(51.5074, -0.1278, &date, 0.0).unwrap().unwrap();
/// assert_eq!(sunrise.hour(), 6);
/// ```
pub fn sunrise_for_elevation<Tz: ZoneRules>(
    latitude: f64,
    longitude: f64,
    date: &DateTime<Tz>,
    elevation_degrees: f64,
) -> Result<Option<DateTime<Tz>>> {
    let calculator =
        SolarEventCalculator::new(Location::new(latitude, longitude)?, date.timezone());
    let zenith = Zenith::from_elevation(elevation_degrees)?;
    calculator
        .compute_sunrise_datetime(zenith, date)
        .map(SolarEvent::into_time)
}

/// One-shot sunset for the sun at `elevation_degrees` (0° is the geometric horizon).
///
/// The result is in the zone of `date`. `None` means the sun does not cross that
/// elevation on the date.
///
/// # Errors
/// Returns an error for out-of-range coordinates or elevation.
pub fn sunset_for_elevation<Tz: ZoneRules>(
    latitude: f64,
    longitude: f64,
    date: &DateTime<Tz>,
    elevation_degrees: f64,
) -> Result<Option<DateTime<Tz>>> {
    let calculator =
        SolarEventCalculator::new(Location::new(latitude, longitude)?, date.timezone());
    let zenith = Zenith::from_elevation(elevation_degrees)?;
    calculator
        .compute_sunset_datetime(zenith, date)
        .map(SolarEvent::into_time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, NaiveDate, Timelike, Utc};

    fn albany_calculator() -> SunriseSunsetCalculator<FixedOffset> {
        let location = Location::new(42.652579, -73.756232).unwrap();
        SunriseSunsetCalculator::new(location, FixedOffset::west_opt(5 * 3600).unwrap())
    }

    #[test]
    fn test_all_categories_for_winter_day() {
        let calc = albany_calculator();
        let date = FixedOffset::west_opt(5 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 15, 12, 0, 0)
            .unwrap();

        assert_eq!(
            calc.astronomical_sunrise(&date).unwrap().to_string(),
            "05:43"
        );
        assert_eq!(
            calc.astronomical_sunset(&date).unwrap().to_string(),
            "18:27"
        );
        assert_eq!(calc.nautical_sunrise(&date).unwrap().to_string(), "06:17");
        assert_eq!(calc.nautical_sunset(&date).unwrap().to_string(), "17:53");
        assert_eq!(calc.civil_sunrise(&date).unwrap().to_string(), "06:51");
        assert_eq!(calc.civil_sunset(&date).unwrap().to_string(), "17:18");
        assert_eq!(calc.official_sunrise(&date).unwrap().to_string(), "07:23");
        assert_eq!(calc.official_sunset(&date).unwrap().to_string(), "16:47");
    }

    #[test]
    fn test_datetime_matches_text() {
        let calc = albany_calculator();
        let date = Utc.with_ymd_and_hms(2024, 12, 21, 15, 0, 0).unwrap();

        let text = calc.civil_sunset(&date).unwrap();
        let timestamp = calc
            .civil_sunset_datetime(&date)
            .unwrap()
            .into_time()
            .unwrap();
        let time = text.time().unwrap();

        assert_eq!(
            timestamp.date_naive(),
            NaiveDate::from_ymd_opt(2024, 12, 21).unwrap()
        );
        assert_eq!(
            (timestamp.hour(), timestamp.minute()),
            (time.hour(), time.minute())
        );
        assert_eq!(timestamp.second(), 0);
    }

    #[test]
    fn test_accessors() {
        let calc = albany_calculator();
        assert_eq!(calc.location().latitude(), 42.652579);
        assert_eq!(calc.calculator().location(), calc.location());
        assert_eq!(calc.calculator().zone().local_minus_utc(), -5 * 3600);
    }

    #[test]
    fn test_elevation_functions() {
        let date = FixedOffset::west_opt(5 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 15, 0, 0, 0)
            .unwrap();

        let sunrise = sunrise_for_elevation(42.652579, -73.756232, &date, -0.8333)
            .unwrap()
            .unwrap();
        assert_eq!((sunrise.hour(), sunrise.minute()), (7, 23));

        let sunset = sunset_for_elevation(42.652579, -73.756232, &date, -0.8333)
            .unwrap()
            .unwrap();
        assert_eq!((sunset.hour(), sunset.minute()), (16, 47));

        assert!(sunrise_for_elevation(95.0, 0.0, &date, 0.0).is_err());
        assert!(sunset_for_elevation(0.0, 0.0, &date, 120.0).is_err());
    }

    #[test]
    fn test_elevation_functions_without_event() {
        let date = Utc.with_ymd_and_hms(2024, 12, 21, 0, 0, 0).unwrap();
        assert_eq!(
            sunrise_for_elevation(78.22, 15.65, &date, 0.0).unwrap(),
            None
        );
    }
}
