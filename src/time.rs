//! Calendar and time zone helpers for solar event calculations.
//!
//! The algorithm only needs two things from a date: its ordinal day in the year and
//! the time zone adjustment that applies on it. The numeric API takes both directly;
//! with the `chrono` feature the [`ZoneRules`] trait derives them from a chrono zone.

use crate::{Error, Result};
#[cfg(feature = "chrono")]
use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};

/// Offset and daylight-saving state of a time zone on one date.
///
/// # Example
/// ```
/// # use sunrise_sunset::time::ZoneAdjustment;
/// let new_york_summer = ZoneAdjustment::new(-5.0, true);
/// assert_eq!(new_york_summer.total_offset_hours(), -4.0);
/// assert_eq!(ZoneAdjustment::UTC.total_offset_hours(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneAdjustment {
    /// Standard (non-DST) offset from UTC in hours
    standard_offset_hours: f64,
    /// Whether daylight saving is in effect, adding one hour
    daylight_saving: bool,
}

impl ZoneAdjustment {
    /// Times measured against UTC: no offset and no daylight saving.
    pub const UTC: Self = Self::new(0.0, false);

    /// Creates a zone adjustment.
    #[must_use]
    pub const fn new(standard_offset_hours: f64, daylight_saving: bool) -> Self {
        Self {
            standard_offset_hours,
            daylight_saving,
        }
    }

    /// Gets the standard offset from UTC in hours.
    #[must_use]
    pub const fn standard_offset_hours(&self) -> f64 {
        self.standard_offset_hours
    }

    /// Checks if daylight saving is in effect.
    #[must_use]
    pub const fn is_daylight_saving(&self) -> bool {
        self.daylight_saving
    }

    /// Gets the offset from UTC in hours including daylight saving.
    #[must_use]
    pub fn total_offset_hours(&self) -> f64 {
        if self.daylight_saving {
            self.standard_offset_hours + 1.0
        } else {
            self.standard_offset_hours
        }
    }
}

/// Returns the ordinal day of the year (1-366) of a Gregorian calendar date.
///
/// # Errors
/// Returns `InvalidDateTime` if month is outside 1-12 or day is outside the month.
///
/// # Example
/// ```
/// # use sunrise_sunset::time::day_of_year;
/// assert_eq!(day_of_year(2024, 1, 15).unwrap(), 15);
/// assert_eq!(day_of_year(2024, 12, 31).unwrap(), 366);
/// assert!(day_of_year(2023, 2, 29).is_err());
/// ```
pub fn day_of_year(year: i32, month: u32, day: u32) -> Result<u32> {
    if !(1..=12).contains(&month) {
        return Err(Error::invalid_datetime("month must be between 1 and 12"));
    }
    if day == 0 || day > days_in_month(year, month) {
        return Err(Error::invalid_datetime("day is out of range for month"));
    }

    let preceding: u32 = (1..month).map(|m| days_in_month(year, m)).sum();
    Ok(preceding + day)
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 31,
    }
}

/// Offset and daylight-saving rules of a chrono time zone.
///
/// Implemented for [`Utc`], [`FixedOffset`] and, with the `chrono-tz` feature,
/// `chrono_tz::Tz`. Rules are evaluated at local noon of the date.
#[cfg(feature = "chrono")]
pub trait ZoneRules: TimeZone {
    /// Standard (non-DST) offset from UTC in hours on `date`.
    fn standard_offset_hours(&self, date: NaiveDate) -> f64;

    /// Whether daylight saving is in effect on `date`.
    fn is_daylight_saving(&self, date: NaiveDate) -> bool;

    /// Both rules on `date` as a [`ZoneAdjustment`].
    fn zone_adjustment(&self, date: NaiveDate) -> ZoneAdjustment {
        ZoneAdjustment::new(
            self.standard_offset_hours(date),
            self.is_daylight_saving(date),
        )
    }
}

#[cfg(feature = "chrono")]
impl ZoneRules for Utc {
    fn standard_offset_hours(&self, _date: NaiveDate) -> f64 {
        0.0
    }

    fn is_daylight_saving(&self, _date: NaiveDate) -> bool {
        false
    }
}

#[cfg(feature = "chrono")]
impl ZoneRules for FixedOffset {
    fn standard_offset_hours(&self, _date: NaiveDate) -> f64 {
        f64::from(self.local_minus_utc()) / 3600.0
    }

    fn is_daylight_saving(&self, _date: NaiveDate) -> bool {
        false
    }
}

#[cfg(feature = "chrono-tz")]
impl ZoneRules for chrono_tz::Tz {
    fn standard_offset_hours(&self, date: NaiveDate) -> f64 {
        use chrono_tz::OffsetComponents;

        let offset = offset_at_local_noon(self, date);
        offset.base_utc_offset().num_seconds() as f64 / 3600.0
    }

    fn is_daylight_saving(&self, date: NaiveDate) -> bool {
        use chrono_tz::OffsetComponents;

        offset_at_local_noon(self, date).dst_offset() != chrono::Duration::zero()
    }
}

#[cfg(feature = "chrono-tz")]
fn offset_at_local_noon<Tz: TimeZone>(zone: &Tz, date: NaiveDate) -> Tz::Offset {
    let noon = date.and_hms_opt(12, 0, 0).expect("noon is always valid");
    zone.offset_from_local_datetime(&noon)
        .earliest()
        .unwrap_or_else(|| zone.offset_from_utc_datetime(&noon))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_of_year() {
        assert_eq!(day_of_year(2024, 1, 1).unwrap(), 1);
        assert_eq!(day_of_year(2024, 3, 1).unwrap(), 61);
        assert_eq!(day_of_year(2023, 3, 1).unwrap(), 60);
        assert_eq!(day_of_year(2024, 6, 21).unwrap(), 173);
        assert_eq!(day_of_year(2023, 12, 31).unwrap(), 365);
        assert_eq!(day_of_year(2000, 2, 29).unwrap(), 60);
    }

    #[test]
    fn test_day_of_year_validation() {
        assert!(day_of_year(2024, 0, 1).is_err());
        assert!(day_of_year(2024, 13, 1).is_err());
        assert!(day_of_year(2024, 4, 31).is_err());
        assert!(day_of_year(2024, 1, 0).is_err());
        assert!(day_of_year(1900, 2, 29).is_err());
        assert!(day_of_year(2024, 2, 29).is_ok());
    }

    #[test]
    fn test_zone_adjustment() {
        let adjustment = ZoneAdjustment::new(5.5, false);
        assert_eq!(adjustment.standard_offset_hours(), 5.5);
        assert!(!adjustment.is_daylight_saving());
        assert_eq!(adjustment.total_offset_hours(), 5.5);

        assert_eq!(ZoneAdjustment::new(12.0, true).total_offset_hours(), 13.0);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_fixed_zone_rules() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();

        assert_eq!(Utc.zone_adjustment(date), ZoneAdjustment::UTC);

        let india = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        assert_eq!(india.standard_offset_hours(date), 5.5);
        assert!(!india.is_daylight_saving(date));

        let albany = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(
            albany.zone_adjustment(date),
            ZoneAdjustment::new(-5.0, false)
        );
    }

    #[test]
    #[cfg(feature = "chrono-tz")]
    fn test_tz_zone_rules() {
        let winter = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let summer = NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();

        let new_york = chrono_tz::America::New_York;
        assert_eq!(
            new_york.zone_adjustment(winter),
            ZoneAdjustment::new(-5.0, false)
        );
        assert_eq!(
            new_york.zone_adjustment(summer),
            ZoneAdjustment::new(-5.0, true)
        );

        let auckland = chrono_tz::Pacific::Auckland;
        assert_eq!(
            auckland.zone_adjustment(winter),
            ZoneAdjustment::new(12.0, true)
        );
        assert_eq!(
            auckland.zone_adjustment(summer),
            ZoneAdjustment::new(12.0, false)
        );
    }
}
