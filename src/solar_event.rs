//! Sunrise/sunset calculation with the classic approximate solar event algorithm.
//!
//! This is the algorithm published in the Almanac for Computers (1990) and
//! popularised by NOAA: longitude hour, mean anomaly, true longitude, declination,
//! local hour angle, right ascension and local mean time, followed by the time zone
//! and daylight-saving correction. It is accurate to about a minute for latitudes
//! away from the poles.
//!
//! Every intermediate value is rounded to four decimal places (see [`crate::math`]).

#![allow(clippy::unreadable_literal)]

use log::{debug, trace};

use crate::math::{
    arc_cosine, asin, atan, cos, degrees_to_radians, floor, radians_to_degrees, round4, sin, tan,
};
use crate::time::{day_of_year, ZoneAdjustment};
use crate::{Error, EventKind, LocalHours, Location, Result, SolarEvent, Zenith};

#[cfg(feature = "chrono")]
use crate::math::round_half_even;
#[cfg(feature = "chrono")]
use crate::time::ZoneRules;
#[cfg(feature = "chrono")]
use crate::TimeOfDay;
#[cfg(feature = "chrono")]
use chrono::{DateTime, Datelike, NaiveDate, TimeZone};

/// Degrees of Earth rotation per hour.
const DEGREES_PER_HOUR: f64 = 15.0;

/// Mean anomaly: daily motion in degrees and offset.
const MEAN_ANOMALY_RATE: f64 = 0.9856;
const MEAN_ANOMALY_OFFSET: f64 = 3.289;

/// Equation of center coefficients and the longitude of perihelion.
const EQUATION_OF_CENTER_1: f64 = 1.916;
const EQUATION_OF_CENTER_2: f64 = 0.020;
const LONGITUDE_OF_PERIHELION: f64 = 282.634;

/// sin(23.44°), the obliquity of the ecliptic.
const SIN_OBLIQUITY: f64 = 0.39782;

/// cos(23.44°), used for the right ascension.
const COS_OBLIQUITY: f64 = 0.91764;

/// Local mean time terms: sidereal drift per longitude hour and offset.
const SIDEREAL_DRIFT: f64 = 0.06571;
const LOCAL_MEAN_TIME_OFFSET: f64 = 6.622;

/// Computes the local time of a sunrise or sunset.
///
/// # Arguments
/// * `location` - Observer location
/// * `zenith` - Zenith angle that defines the event
/// * `day_of_year` - Ordinal day of the local calendar date (1-366)
/// * `zone` - Time zone offset and daylight-saving state on that date
/// * `kind` - Sunrise or sunset
///
/// # Returns
/// Hours since local midnight of the date. Negative values fall on the previous day
/// and values of 24 or more on the next day.
///
/// # Errors
/// Returns `InvalidDateTime` if `day_of_year` is outside 1-366, or `NoSolarEvent` if
/// the sun never reaches `zenith` on this date.
///
/// # Example
/// ```
/// use sunrise_sunset::{solar_event, time::ZoneAdjustment, EventKind, Location, Zenith};
///
/// let albany = Location::new(42.652579, -73.756232).unwrap();
/// let sunrise = solar_event::solar_event_time(
///     &albany,
///     Zenith::OFFICIAL,
///     15, // January 15
///     ZoneAdjustment::new(-5.0, false),
///     EventKind::Sunrise,
/// )
/// .unwrap();
/// assert_eq!(sunrise.time_of_day().unwrap().1.to_string(), "07:23");
/// ```
pub fn solar_event_time(
    location: &Location,
    zenith: Zenith,
    day_of_year: u32,
    zone: ZoneAdjustment,
    kind: EventKind,
) -> Result<LocalHours> {
    if !(1..=366).contains(&day_of_year) {
        return Err(Error::invalid_datetime(
            "day of year must be between 1 and 366",
        ));
    }

    let base_longitude_hour = calculate_base_longitude_hour(location.longitude());
    let longitude_hour = calculate_longitude_hour(day_of_year, base_longitude_hour, kind);
    let mean_anomaly = calculate_mean_anomaly(longitude_hour);
    let true_longitude = calculate_sun_true_longitude(mean_anomaly);
    trace!(
        "{kind:?} day {day_of_year}: longitude hour {longitude_hour}, \
         mean anomaly {mean_anomaly}, true longitude {true_longitude}"
    );

    let cosine_local_hour =
        calculate_cosine_sun_local_hour(true_longitude, zenith, location.latitude());
    if !(-1.0..=1.0).contains(&cosine_local_hour) {
        debug!(
            "no {kind:?} on day {day_of_year} for zenith {}°: cos H = {cosine_local_hour}",
            zenith.degrees()
        );
        return Err(Error::no_solar_event(cosine_local_hour));
    }

    let sun_local_hour = calculate_sun_local_hour(cosine_local_hour, kind)?;
    let local_mean_time = calculate_local_mean_time(true_longitude, longitude_hour, sun_local_hour);
    trace!("{kind:?}: cos H {cosine_local_hour}, local mean time {local_mean_time}");

    Ok(LocalHours::from_hours(calculate_local_time(
        local_mean_time,
        base_longitude_hour,
        zone,
    )))
}

/// Computes a sunrise or sunset for a Gregorian calendar date without chrono.
///
/// # Errors
/// Returns `InvalidDateTime` for an invalid date. A day without the event is
/// reported as `SolarEvent::AllDay` or `SolarEvent::AllNight`, not as an error.
///
/// # Example
/// ```
/// use sunrise_sunset::{solar_event, time::ZoneAdjustment, EventKind, Location, Zenith};
///
/// let longyearbyen = Location::new(78.22, 15.65).unwrap();
/// let sunrise = solar_event::solar_event_for_date(
///     &longyearbyen,
///     Zenith::OFFICIAL,
///     2024, 6, 21,
///     ZoneAdjustment::new(1.0, true),
///     EventKind::Sunrise,
/// )
/// .unwrap();
/// assert!(sunrise.is_all_day());
/// ```
pub fn solar_event_for_date(
    location: &Location,
    zenith: Zenith,
    year: i32,
    month: u32,
    day: u32,
    zone: ZoneAdjustment,
    kind: EventKind,
) -> Result<SolarEvent<LocalHours>> {
    let day_of_year = day_of_year(year, month, day)?;
    SolarEvent::from_result(solar_event_time(location, zenith, day_of_year, zone, kind))
}

fn calculate_base_longitude_hour(longitude: f64) -> f64 {
    round4(longitude / DEGREES_PER_HOUR)
}

fn calculate_longitude_hour(day_of_year: u32, base_longitude_hour: f64, kind: EventKind) -> f64 {
    let dividend = kind.approximate_hour() - base_longitude_hour;
    let addend = round4(dividend / 24.0);
    round4(f64::from(day_of_year) + addend)
}

fn calculate_mean_anomaly(longitude_hour: f64) -> f64 {
    round4(round4(MEAN_ANOMALY_RATE * longitude_hour) - MEAN_ANOMALY_OFFSET)
}

fn calculate_sun_true_longitude(mean_anomaly: f64) -> f64 {
    let mean_anomaly_rad = degrees_to_radians(mean_anomaly);
    let sin_mean_anomaly = sin(mean_anomaly_rad);
    let sin_double_mean_anomaly = sin(round4(mean_anomaly_rad * 2.0));

    let first_part = mean_anomaly + round4(sin_mean_anomaly * EQUATION_OF_CENTER_1);
    let second_part =
        round4(sin_double_mean_anomaly * EQUATION_OF_CENTER_2) + LONGITUDE_OF_PERIHELION;
    let mut true_longitude = first_part + second_part;

    if true_longitude > 360.0 {
        true_longitude -= 360.0;
    }
    round4(true_longitude)
}

fn calculate_sin_sun_declination(true_longitude: f64) -> f64 {
    round4(sin(degrees_to_radians(true_longitude)) * SIN_OBLIQUITY)
}

fn calculate_cosine_sun_declination(sin_declination: f64) -> f64 {
    round4(cos(asin(sin_declination)))
}

fn calculate_cosine_sun_local_hour(true_longitude: f64, zenith: Zenith, latitude: f64) -> f64 {
    let sin_declination = calculate_sin_sun_declination(true_longitude);
    let cos_declination = calculate_cosine_sun_declination(sin_declination);

    let cos_zenith = cos(degrees_to_radians(zenith.degrees()));
    let latitude_rad = degrees_to_radians(latitude);

    let dividend = cos_zenith - sin_declination * sin(latitude_rad);
    let divisor = cos_declination * cos(latitude_rad);
    round4(dividend / divisor)
}

fn calculate_sun_local_hour(cosine_local_hour: f64, kind: EventKind) -> Result<f64> {
    let mut local_hour = radians_to_degrees(arc_cosine(cosine_local_hour)?);
    if kind == EventKind::Sunrise {
        local_hour = 360.0 - local_hour;
    }
    Ok(round4(local_hour / DEGREES_PER_HOUR))
}

/// Right ascension in hours, moved into the same quadrant as the true longitude.
fn calculate_right_ascension(true_longitude: f64) -> f64 {
    let tan_true_longitude = tan(degrees_to_radians(true_longitude));
    let mut right_ascension = radians_to_degrees(atan(round4(COS_OBLIQUITY * tan_true_longitude)));

    if right_ascension < 0.0 {
        right_ascension += 360.0;
    } else if right_ascension > 360.0 {
        right_ascension -= 360.0;
    }

    let longitude_quadrant = floor(true_longitude / 90.0) * 90.0;
    let right_ascension_quadrant = floor(right_ascension / 90.0) * 90.0;
    right_ascension += longitude_quadrant - right_ascension_quadrant;

    round4(right_ascension / DEGREES_PER_HOUR)
}

fn calculate_local_mean_time(true_longitude: f64, longitude_hour: f64, sun_local_hour: f64) -> f64 {
    let right_ascension = calculate_right_ascension(true_longitude);
    let mut local_mean_time =
        sun_local_hour + right_ascension - longitude_hour * SIDEREAL_DRIFT - LOCAL_MEAN_TIME_OFFSET;

    if local_mean_time < 0.0 {
        local_mean_time += 24.0;
    } else if local_mean_time > 24.0 {
        local_mean_time -= 24.0;
    }
    round4(local_mean_time)
}

/// Local mean time to zone time. Values past midnight are kept as they are; the day
/// rollover is resolved by [`LocalHours::day_and_hours`].
fn calculate_local_time(
    local_mean_time: f64,
    base_longitude_hour: f64,
    zone: ZoneAdjustment,
) -> f64 {
    let utc_time = local_mean_time - base_longitude_hour;
    let local_time = utc_time + zone.standard_offset_hours();
    if zone.is_daylight_saving() {
        local_time + 1.0
    } else {
        local_time
    }
}

/// Sunrise/sunset calculator bound to one location and one time zone.
///
/// The zone decides which calendar date a `DateTime` falls on, its UTC offset and
/// whether daylight saving applies.
///
/// # Example
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use sunrise_sunset::{Location, SolarEventCalculator, Zenith};
///
/// let zone = FixedOffset::west_opt(5 * 3600).unwrap();
/// let calculator = SolarEventCalculator::new(Location::new(42.652579, -73.756232).unwrap(), zone);
/// let date = zone.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
///
/// let sunset = calculator.compute_sunset_time(Zenith::OFFICIAL, &date).unwrap();
/// assert_eq!(sunset.to_string(), "16:47");
/// ```
#[cfg(feature = "chrono")]
#[derive(Debug, Clone)]
pub struct SolarEventCalculator<Tz: ZoneRules> {
    location: Location,
    zone: Tz,
}

#[cfg(feature = "chrono")]
impl<Tz: ZoneRules> SolarEventCalculator<Tz> {
    /// Creates a calculator for `location` reporting times in `zone`.
    #[must_use]
    pub const fn new(location: Location, zone: Tz) -> Self {
        Self { location, zone }
    }

    /// Gets the location used by this calculator.
    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    /// Gets the time zone used by this calculator.
    #[must_use]
    pub const fn zone(&self) -> &Tz {
        &self.zone
    }

    /// Computes the sunrise time of day for `zenith` on the local date of `date`.
    ///
    /// # Errors
    /// Returns `MalformedTime` if the computed time cannot be decomposed.
    pub fn compute_sunrise_time<T: TimeZone>(
        &self,
        zenith: Zenith,
        date: &DateTime<T>,
    ) -> Result<SolarEvent<TimeOfDay>> {
        self.compute_time(zenith, date, EventKind::Sunrise)
    }

    /// Computes the sunrise as a timestamp in the calculator's zone.
    ///
    /// # Errors
    /// Returns `MalformedTime` if the computed time cannot be decomposed.
    pub fn compute_sunrise_datetime<T: TimeZone>(
        &self,
        zenith: Zenith,
        date: &DateTime<T>,
    ) -> Result<SolarEvent<DateTime<Tz>>> {
        self.compute_datetime(zenith, date, EventKind::Sunrise)
    }

    /// Computes the sunset time of day for `zenith` on the local date of `date`.
    ///
    /// # Errors
    /// Returns `MalformedTime` if the computed time cannot be decomposed.
    pub fn compute_sunset_time<T: TimeZone>(
        &self,
        zenith: Zenith,
        date: &DateTime<T>,
    ) -> Result<SolarEvent<TimeOfDay>> {
        self.compute_time(zenith, date, EventKind::Sunset)
    }

    /// Computes the sunset as a timestamp in the calculator's zone.
    ///
    /// # Errors
    /// Returns `MalformedTime` if the computed time cannot be decomposed.
    pub fn compute_sunset_datetime<T: TimeZone>(
        &self,
        zenith: Zenith,
        date: &DateTime<T>,
    ) -> Result<SolarEvent<DateTime<Tz>>> {
        self.compute_datetime(zenith, date, EventKind::Sunset)
    }

    /// Computes the raw event time in hours since local midnight.
    ///
    /// The time of day of `date` is ignored; only its calendar date in the
    /// calculator's zone matters.
    ///
    /// # Errors
    /// Returns `NoSolarEvent` if the sun never reaches `zenith` on this date.
    pub fn compute_solar_event_time<T: TimeZone>(
        &self,
        zenith: Zenith,
        date: &DateTime<T>,
        kind: EventKind,
    ) -> Result<LocalHours> {
        let local_date = self.local_date(date);
        self.event_hours(zenith, local_date, kind)
    }

    /// Computes the event time of day, `99:99` when displayed for a day without it.
    ///
    /// # Errors
    /// Returns `MalformedTime` if the computed time cannot be decomposed.
    pub fn compute_time<T: TimeZone>(
        &self,
        zenith: Zenith,
        date: &DateTime<T>,
        kind: EventKind,
    ) -> Result<SolarEvent<TimeOfDay>> {
        let result = self
            .compute_solar_event_time(zenith, date, kind)
            .and_then(|hours| hours.time_of_day())
            .map(|(_, time)| time);
        SolarEvent::from_result(result)
    }

    /// Computes the event as a timestamp in the calculator's zone.
    ///
    /// Events that fall before local midnight land on the previous day, events past
    /// midnight on the next one.
    ///
    /// # Errors
    /// Returns `MalformedTime` if the computed time cannot be decomposed, or
    /// `InvalidDateTime` if the event date is out of chrono's range.
    pub fn compute_datetime<T: TimeZone>(
        &self,
        zenith: Zenith,
        date: &DateTime<T>,
        kind: EventKind,
    ) -> Result<SolarEvent<DateTime<Tz>>> {
        let local_date = self.local_date(date);
        let result = self
            .event_hours(zenith, local_date, kind)
            .and_then(|hours| hours.time_of_day())
            .and_then(|(day_offset, time)| self.to_datetime(local_date, day_offset, time));
        SolarEvent::from_result(result)
    }

    fn local_date<T: TimeZone>(&self, date: &DateTime<T>) -> NaiveDate {
        date.with_timezone(&self.zone).date_naive()
    }

    fn event_hours(
        &self,
        zenith: Zenith,
        local_date: NaiveDate,
        kind: EventKind,
    ) -> Result<LocalHours> {
        solar_event_time(
            &self.location,
            zenith,
            local_date.ordinal(),
            self.zone.zone_adjustment(local_date),
            kind,
        )
    }

    /// Builds the timestamp through UTC with the same offset the time was computed
    /// with, so wall-clock gaps and repeats at DST changes cannot make it ambiguous.
    fn to_datetime(
        &self,
        local_date: NaiveDate,
        day_offset: i32,
        time: TimeOfDay,
    ) -> Result<DateTime<Tz>> {
        let out_of_range = || Error::invalid_datetime("event date is out of range");

        let offset_hours = self.zone.zone_adjustment(local_date).total_offset_hours();
        let offset_minutes = round_half_even(offset_hours * 60.0) as i64;

        let event_date = local_date
            .checked_add_signed(chrono::Duration::days(i64::from(day_offset)))
            .ok_or_else(out_of_range)?;
        let utc = event_date
            .and_time(time.to_naive_time())
            .checked_sub_signed(chrono::Duration::minutes(offset_minutes))
            .ok_or_else(out_of_range)?;

        Ok(self.zone.from_utc_datetime(&utc))
    }
}
