//! Core data types for sunrise/sunset calculations.

use core::fmt;
use core::str::FromStr;

use crate::error::{check_coordinates, check_elevation_angle, check_zenith_angle, parse_coordinate};
use crate::math::{floor, round4, round_half_even};
use crate::{Error, Result};

/// Text rendered in place of a time when the event does not occur on the date.
pub const NO_EVENT_TEXT: &str = "99:99";

/// Angular distance of the sun from the zenith that defines a sunrise/sunset category.
///
/// The four named constants cover the usual twilight definitions; any other angle can
/// be built with [`Zenith::custom`] or from an elevation angle with
/// [`Zenith::from_elevation`].
///
/// # Example
/// ```
/// # use sunrise_sunset::Zenith;
/// assert_eq!(Zenith::CIVIL.degrees(), 96.0);
/// assert_eq!(Zenith::from_elevation(0.0).unwrap().degrees(), 90.0);
/// assert_eq!(Zenith::from_elevation(-6.0).unwrap(), Zenith::CIVIL);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Zenith(f64);

impl Zenith {
    /// Astronomical sunrise/sunset: the sun is 18° below the horizon.
    pub const ASTRONOMICAL: Self = Self(108.0);
    /// Nautical sunrise/sunset: the sun is 12° below the horizon.
    pub const NAUTICAL: Self = Self(102.0);
    /// Civil sunrise/sunset (dawn/dusk): the sun is 6° below the horizon.
    pub const CIVIL: Self = Self(96.0);
    /// Official sunrise/sunset: the sun is 50' below the horizon.
    pub const OFFICIAL: Self = Self(90.8333);

    /// Creates a zenith from an angle in degrees.
    ///
    /// # Errors
    /// Returns `InvalidZenithAngle` if degrees is outside 0 to 180.
    pub fn custom(degrees: f64) -> Result<Self> {
        check_zenith_angle(degrees).map(Self)
    }

    /// Creates the zenith matching a solar elevation angle (`90° - elevation`).
    ///
    /// # Errors
    /// Returns `InvalidElevationAngle` if elevation is outside -90 to +90 degrees.
    pub fn from_elevation(elevation_degrees: f64) -> Result<Self> {
        let elevation = check_elevation_angle(elevation_degrees)?;
        Ok(Self(90.0 - elevation))
    }

    /// Gets the zenith angle in degrees.
    #[must_use]
    pub const fn degrees(&self) -> f64 {
        self.0
    }

    /// Gets the matching elevation angle in degrees (negative below the horizon).
    #[must_use]
    pub fn elevation_angle(&self) -> f64 {
        90.0 - self.0
    }
}

/// Observer position in degrees. North latitude and east longitude are positive.
///
/// # Example
/// ```
/// # use sunrise_sunset::Location;
/// let albany = Location::parse("42.6525790", "-73.7562320").unwrap();
/// assert_eq!(albany, Location::new(42.652579, -73.756232).unwrap());
/// assert!(Location::parse("42.65N", "-73.75").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    latitude: f64,
    longitude: f64,
}

impl Location {
    /// Creates a location from numeric coordinates.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Creates a location from decimal coordinate text.
    ///
    /// # Errors
    /// Returns `InvalidCoordinate` naming the field that does not parse, or a range
    /// error for out-of-range coordinates.
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self> {
        let latitude = parse_coordinate(latitude, "latitude")?;
        let longitude = parse_coordinate(longitude, "longitude")?;
        Self::new(latitude, longitude)
    }

    /// Replaces both coordinates. On error the location is left unchanged.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
    pub fn set(&mut self, latitude: f64, longitude: f64) -> Result<()> {
        *self = Self::new(latitude, longitude)?;
        Ok(())
    }

    /// Replaces both coordinates from decimal text. On error the location is left unchanged.
    ///
    /// # Errors
    /// Returns `InvalidCoordinate` naming the field that does not parse, or a range
    /// error for out-of-range coordinates.
    pub fn set_parsed(&mut self, latitude: &str, longitude: &str) -> Result<()> {
        *self = Self::parse(latitude, longitude)?;
        Ok(())
    }

    /// Gets the latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Gets the longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Parses `"latitude,longitude"`.
impl FromStr for Location {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (latitude, longitude) = s
            .split_once(',')
            .ok_or(Error::invalid_coordinate("longitude"))?;
        Self::parse(latitude, longitude)
    }
}

/// Which crossing of the zenith circle to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Morning crossing.
    Sunrise,
    /// Evening crossing.
    Sunset,
}

impl EventKind {
    /// Approximate local hour of the event used to seed the longitude hour.
    #[must_use]
    pub const fn approximate_hour(&self) -> f64 {
        match self {
            Self::Sunrise => 6.0,
            Self::Sunset => 18.0,
        }
    }
}

/// Hours since local midnight of the calculation date.
///
/// - Negative values indicate the previous day
/// - 0.0 to < 24.0 indicates the current day
/// - ≥ 24.0 indicates the next day
///
/// # Example
/// ```
/// # use sunrise_sunset::LocalHours;
/// let sunrise = LocalHours::from_hours(-4.5684);
/// let (day_offset, time) = sunrise.time_of_day().unwrap();
/// assert_eq!(day_offset, -1);
/// assert_eq!(time.to_string(), "19:26");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalHours(f64);

impl LocalHours {
    /// Creates a new `LocalHours` from hours since local midnight.
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Gets the raw hours value.
    ///
    /// Can be negative (previous day) or ≥ 24.0 (next day).
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Gets the day offset and normalized hours (0.0 to < 24.0).
    #[must_use]
    pub fn day_and_hours(&self) -> (i32, f64) {
        let hours = self.0;
        if !hours.is_finite() {
            return (0, hours);
        }

        let mut day_offset_raw = floor(hours / 24.0);
        let mut normalized_hours = hours - day_offset_raw * 24.0;

        if normalized_hours < 0.0 {
            normalized_hours += 24.0;
            day_offset_raw -= 1.0;
        } else if normalized_hours >= 24.0 {
            normalized_hours -= 24.0;
            day_offset_raw += 1.0;
        }

        let day_offset = if day_offset_raw >= f64::from(i32::MAX) {
            i32::MAX
        } else if day_offset_raw <= f64::from(i32::MIN) {
            i32::MIN
        } else {
            day_offset_raw as i32
        };

        (day_offset, normalized_hours)
    }

    /// Splits into a day offset and a wall-clock hour and minute.
    ///
    /// The hour is truncated and the minutes are the four-decimal fraction times 60,
    /// rounded half to even. Minute 60 carries into the hour and hour 24 carries into
    /// the day offset.
    ///
    /// # Errors
    /// Returns `MalformedTime` if the value is not finite or the decomposition leaves
    /// the 00:00–23:59 range.
    pub fn time_of_day(&self) -> Result<(i32, TimeOfDay)> {
        let (mut day_offset, hours) = self.day_and_hours();
        if !hours.is_finite() {
            return Err(Error::malformed_time(i64::MAX, 0));
        }

        let hours = round4(hours);
        let whole_hours = floor(hours);
        let mut hour = whole_hours as i64;
        let mut minute = round_half_even(round4(hours - whole_hours) * 60.0) as i64;

        if minute == 60 {
            minute = 0;
            hour += 1;
        }
        if hour == 24 {
            hour = 0;
            day_offset = day_offset.saturating_add(1);
        }

        TimeOfDay::new(hour, minute).map(|time| (day_offset, time))
    }
}

/// Renders the wall-clock time as `HH:MM`, dropping the day offset.
///
/// Values that cannot be decomposed render as `99:99`.
impl fmt::Display for LocalHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.time_of_day() {
            Ok((_, time)) => time.fmt(f),
            Err(_) => f.write_str(NO_EVENT_TEXT),
        }
    }
}

/// Wall-clock time of a solar event, rendered as `HH:MM` on a 24-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Creates a time of day.
    ///
    /// # Errors
    /// Returns `MalformedTime` unless hour is 0–23 and minute is 0–59.
    pub fn new(hour: i64, minute: i64) -> Result<Self> {
        match (u8::try_from(hour), u8::try_from(minute)) {
            (Ok(h), Ok(m)) if h < 24 && m < 60 => Ok(Self { hour: h, minute: m }),
            _ => Err(Error::malformed_time(hour, minute)),
        }
    }

    /// Gets the hour (0–23).
    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour as u32
    }

    /// Gets the minute (0–59).
    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute as u32
    }

    /// Converts to a chrono `NaiveTime` at zero seconds.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn to_naive_time(&self) -> chrono::NaiveTime {
        chrono::NaiveTime::from_hms_opt(self.hour(), self.minute(), 0)
            .expect("hour and minute are validated on construction")
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// Outcome of a sunrise or sunset calculation for one date.
///
/// At high latitudes the sun may stay above or below the requested zenith for the
/// whole day. Those days carry no time and render as `99:99`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolarEvent<T> {
    /// The sun crosses the zenith circle at this time.
    Occurs(T),
    /// Sun stays above the zenith circle all day (polar day for this zenith)
    AllDay,
    /// Sun stays below the zenith circle all day (polar night for this zenith)
    AllNight,
}

impl<T> SolarEvent<T> {
    /// Turns the result of a core computation into an event.
    ///
    /// `NoSolarEvent` becomes `AllNight` when the cosine of the local hour angle is
    /// above 1 and `AllDay` when it is below -1. Every other error is passed on.
    ///
    /// # Errors
    /// Returns any error from `result` other than `NoSolarEvent`.
    pub fn from_result(result: Result<T>) -> Result<Self> {
        match result {
            Ok(time) => Ok(Self::Occurs(time)),
            Err(Error::NoSolarEvent { cosine_local_hour }) if cosine_local_hour > 1.0 => {
                Ok(Self::AllNight)
            }
            Err(Error::NoSolarEvent { .. }) => Ok(Self::AllDay),
            Err(err) => Err(err),
        }
    }

    /// Gets the event time if the event occurs.
    pub const fn time(&self) -> Option<&T> {
        if let Self::Occurs(time) = self {
            Some(time)
        } else {
            None
        }
    }

    /// Converts into the event time, `None` if the event does not occur.
    pub fn into_time(self) -> Option<T> {
        if let Self::Occurs(time) = self {
            Some(time)
        } else {
            None
        }
    }

    /// Checks if the event occurs on the date.
    pub const fn occurs(&self) -> bool {
        matches!(self, Self::Occurs(_))
    }

    /// Checks if the sun stays above the zenith circle all day.
    pub const fn is_all_day(&self) -> bool {
        matches!(self, Self::AllDay)
    }

    /// Checks if the sun stays below the zenith circle all day.
    pub const fn is_all_night(&self) -> bool {
        matches!(self, Self::AllNight)
    }

    /// Maps the event time, keeping the polar variants.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> SolarEvent<U> {
        match self {
            Self::Occurs(time) => SolarEvent::Occurs(f(time)),
            Self::AllDay => SolarEvent::AllDay,
            Self::AllNight => SolarEvent::AllNight,
        }
    }
}

/// Renders the time, or `99:99` when the event does not occur.
impl<T: fmt::Display> fmt::Display for SolarEvent<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Occurs(time) => time.fmt(f),
            Self::AllDay | Self::AllNight => f.write_str(NO_EVENT_TEXT),
        }
    }
}
