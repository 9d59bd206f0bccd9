//! # Sunrise/Sunset Library
//!
//! Sunrise, sunset and twilight times from the classic approximate solar event algorithm.

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The crate computes the time at which the sun crosses a given zenith angle for a
//! location and date, then converts it into the observer's local time zone, including
//! the daylight-saving correction. Four categories are predefined:
//!
//! | Category     | Zenith    | Sun below horizon |
//! |--------------|-----------|-------------------|
//! | Astronomical | 108°      | 18°               |
//! | Nautical     | 102°      | 12°               |
//! | Civil        | 96°       | 6°                |
//! | Official     | 90.8333°  | 50'               |
//!
//! Every intermediate value is rounded to four decimal places, which fixes the result
//! to the minute independently of platform float details.
//!
//! ## Feature Flags
//!
//! - `std` (default): Use standard library for native math functions
//! - `chrono` (default): Enable the `DateTime<Tz>` based calculator and facade
//! - `chrono-tz`: Daylight-saving rules from `chrono_tz::Tz` zones. The IANA zone
//!   tests need it too: `cargo test --all-features`
//! - `libm`: Use pure Rust math for `no_std` environments
//!
//! **Configuration examples:**
//! ```toml
//! # Default: std + chrono
//! sunrise-sunset = "0.1"
//!
//! # IANA zones with real daylight-saving rules
//! sunrise-sunset = { version = "0.1", features = ["chrono-tz"] }
//!
//! # Minimal no_std (pure numeric API)
//! sunrise-sunset = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ### Sunrise and Sunset (with chrono)
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use chrono::{FixedOffset, TimeZone};
//! use sunrise_sunset::{Location, SunriseSunsetCalculator};
//!
//! let zone = FixedOffset::west_opt(5 * 3600).unwrap(); // UTC-5, no daylight saving
//! let albany = Location::new(42.6525790, -73.7562320).unwrap();
//! let calculator = SunriseSunsetCalculator::new(albany, zone);
//!
//! let date = zone.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
//! assert_eq!(calculator.official_sunrise(&date).unwrap().to_string(), "07:23");
//! assert_eq!(calculator.official_sunset(&date).unwrap().to_string(), "16:47");
//!
//! if let Some(dusk) = calculator.civil_sunset_datetime(&date).unwrap().time() {
//!     println!("Civil dusk: {dusk}");
//! }
//! # }
//! ```
//!
//! ### Numeric API (no chrono)
//! ```rust
//! use sunrise_sunset::{solar_event, time::ZoneAdjustment, EventKind, Location, Zenith};
//!
//! let albany = Location::new(42.6525790, -73.7562320).unwrap();
//! let sunset = solar_event::solar_event_for_date(
//!     &albany,
//!     Zenith::OFFICIAL,
//!     2024, 6, 21,
//!     ZoneAdjustment::new(-5.0, true), // EST with daylight saving
//!     EventKind::Sunset,
//! )
//! .unwrap();
//!
//! let (day_offset, time) = sunset.time().unwrap().time_of_day().unwrap();
//! assert_eq!(day_offset, 0);
//! assert_eq!(time.to_string(), "20:37");
//! ```
//!
//! ## Days Without an Event
//!
//! Near the poles the sun may never reach the requested zenith. The core computation
//! reports this as [`Error::NoSolarEvent`]; the convenience methods turn it into
//! [`SolarEvent::AllDay`] or [`SolarEvent::AllNight`], which display as `99:99`.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of rounded values in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
#[cfg(feature = "chrono")]
pub use crate::solar_event::SolarEventCalculator;
#[cfg(feature = "chrono")]
pub use crate::sunrise_sunset::{
    sunrise_for_elevation, sunset_for_elevation, SunriseSunsetCalculator,
};
pub use crate::types::{
    EventKind, LocalHours, Location, SolarEvent, TimeOfDay, Zenith, NO_EVENT_TEXT,
};

// Algorithm modules
pub mod solar_event;
#[cfg(feature = "chrono")]
pub mod sunrise_sunset;

// Core modules
pub mod error;
pub mod types;

// Public modules
pub mod math;
pub mod time;

#[cfg(all(test, feature = "chrono"))]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset, TimeZone, Utc};

    #[test]
    fn test_input_zone_does_not_change_result() {
        // Same instant expressed in two zones falls on the same local date
        let fixed = "2024-06-21T08:00:00-04:00"
            .parse::<DateTime<FixedOffset>>()
            .unwrap();
        let utc = Utc.with_ymd_and_hms(2024, 6, 21, 12, 0, 0).unwrap();

        let location = Location::new(42.652579, -73.756232).unwrap();
        let calculator =
            SunriseSunsetCalculator::new(location, FixedOffset::west_opt(4 * 3600).unwrap());

        let from_fixed = calculator.official_sunrise(&fixed).unwrap();
        let from_utc = calculator.official_sunrise(&utc).unwrap();
        assert_eq!(from_fixed, from_utc);
        assert!(from_fixed.occurs());
    }

    #[test]
    fn test_local_date_decides_day_of_year() {
        // 02:00 UTC on Jan 16 is still Jan 15 at UTC-5
        let late = Utc.with_ymd_and_hms(2024, 1, 16, 2, 0, 0).unwrap();
        let location = Location::new(42.652579, -73.756232).unwrap();
        let calculator =
            SolarEventCalculator::new(location, FixedOffset::west_opt(5 * 3600).unwrap());

        let sunrise = calculator
            .compute_sunrise_time(Zenith::OFFICIAL, &late)
            .unwrap();
        assert_eq!(sunrise.to_string(), "07:23");
    }
}
