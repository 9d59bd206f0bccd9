//! Error types for the sunrise/sunset library.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while building inputs or computing solar events.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Coordinate text that does not parse as a decimal number.
    InvalidCoordinate {
        /// Name of the offending field (`"latitude"` or `"longitude"`).
        field: &'static str,
    },
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Invalid zenith angle for a custom solar event.
    InvalidZenithAngle {
        /// The invalid zenith angle value provided.
        value: f64,
    },
    /// Invalid elevation angle for a custom solar event.
    InvalidElevationAngle {
        /// The invalid elevation angle value provided.
        value: f64,
    },
    /// Invalid calendar date for the numeric API.
    InvalidDateTime {
        /// Description of the date constraint violation.
        message: &'static str,
    },
    /// The sun never crosses the requested zenith on this date (polar day or night).
    NoSolarEvent {
        /// Cosine of the local hour angle, outside [-1, 1].
        cosine_local_hour: f64,
    },
    /// The hour/minute decomposition of a computed time left its valid range.
    MalformedTime {
        /// Hour after all corrections.
        hour: i64,
        /// Minute after all corrections.
        minute: i64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCoordinate { field } => {
                write!(f, "{field} is not a valid decimal number")
            }
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidZenithAngle { value } => {
                write!(
                    f,
                    "invalid zenith angle {value}° (must be between 0° and 180°)"
                )
            }
            Self::InvalidElevationAngle { value } => {
                write!(
                    f,
                    "invalid elevation angle {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidDateTime { message } => {
                write!(f, "invalid date: {message}")
            }
            Self::NoSolarEvent { cosine_local_hour } => {
                write!(
                    f,
                    "no solar event: cosine of local hour angle {cosine_local_hour} is outside [-1, 1]"
                )
            }
            Self::MalformedTime { hour, minute } => {
                write!(f, "malformed computed time {hour}:{minute}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid coordinate text error.
    #[must_use]
    pub const fn invalid_coordinate(field: &'static str) -> Self {
        Self::InvalidCoordinate { field }
    }

    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid zenith angle error.
    #[must_use]
    pub const fn invalid_zenith_angle(value: f64) -> Self {
        Self::InvalidZenithAngle { value }
    }

    /// Creates an invalid elevation angle error.
    #[must_use]
    pub const fn invalid_elevation_angle(value: f64) -> Self {
        Self::InvalidElevationAngle { value }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub const fn invalid_datetime(message: &'static str) -> Self {
        Self::InvalidDateTime { message }
    }

    /// Creates a "no solar event" error.
    #[must_use]
    pub const fn no_solar_event(cosine_local_hour: f64) -> Self {
        Self::NoSolarEvent { cosine_local_hour }
    }

    /// Creates a malformed time error.
    #[must_use]
    pub const fn malformed_time(hour: i64, minute: i64) -> Self {
        Self::MalformedTime { hour, minute }
    }

    /// Checks whether this error signals that the event does not occur on the date.
    #[must_use]
    pub const fn is_no_solar_event(&self) -> bool {
        matches!(self, Self::NoSolarEvent { .. })
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}

/// Parses a decimal coordinate, naming `field` in the error.
///
/// # Errors
/// Returns `InvalidCoordinate` if the trimmed text is not a decimal number.
pub fn parse_coordinate(text: &str, field: &'static str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| Error::invalid_coordinate(field))
}

/// Validates a zenith angle to be within the range [0, 180] degrees.
///
/// # Errors
/// Returns `InvalidZenithAngle` if zenith angle is not finite or outside valid range.
pub fn check_zenith_angle(zenith: f64) -> Result<f64> {
    if !(0.0..=180.0).contains(&zenith) {
        return Err(Error::invalid_zenith_angle(zenith));
    }
    Ok(zenith)
}

/// Validates an elevation angle to be within the range [-90, 90] degrees.
///
/// # Errors
/// Returns `InvalidElevationAngle` if elevation is not finite or outside valid range.
pub fn check_elevation_angle(elevation: f64) -> Result<f64> {
    if !(-90.0..=90.0).contains(&elevation) {
        return Err(Error::invalid_elevation_angle(elevation));
    }
    Ok(elevation)
}
