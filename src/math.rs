//! Mathematical utilities for the solar event calculation.
//!
//! Every helper that produces an angle or an intermediate value rounds it to
//! four decimal places with banker's rounding. The published algorithm accumulates
//! that rounding step by step, and the reference times depend on it.

use crate::{Error, Result};

/// Mathematical constants
pub const PI: f64 = core::f64::consts::PI;

/// `10^4`: four decimal places are kept after every arithmetic step.
const SCALE_FACTOR: f64 = 10_000.0;

/// Rounds to four decimal places, ties to even.
///
/// # Example
/// ```
/// # use sunrise_sunset::math::round4;
/// assert_eq!(round4(1.23456), 1.2346);
/// assert_eq!(round4(0.12345), 0.1234); // tie rounds to the even digit
/// assert_eq!(round4(0.12355), 0.1236);
/// ```
#[inline]
pub fn round4(value: f64) -> f64 {
    round_half_even(value * SCALE_FACTOR) / SCALE_FACTOR
}

/// Converts degrees to radians, rounded to four decimal places.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    round4(degrees * (PI / 180.0))
}

/// Converts radians to degrees, rounded to four decimal places.
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    round4(radians * (180.0 / PI))
}

/// Arc cosine of `cosine`, rounded to four decimal places.
///
/// # Errors
/// Returns `NoSolarEvent` if `cosine` lies outside [-1, 1]. Upstream this means the
/// sun never reaches the requested zenith on that date.
pub fn arc_cosine(cosine: f64) -> Result<f64> {
    if !(-1.0..=1.0).contains(&cosine) {
        return Err(Error::no_solar_event(cosine));
    }
    Ok(round4(acos(cosine)))
}

/// Rounds to the nearest integer, ties to even.
#[inline]
pub fn round_half_even(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.round_ties_even();

    #[cfg(not(feature = "std"))]
    return libm::rint(x);
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes tan(x) using the appropriate function for the compilation target.
#[inline]
pub fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
pub fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes acos(x) using the appropriate function for the compilation target.
#[inline]
pub fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Computes atan(x) using the appropriate function for the compilation target.
#[inline]
pub fn atan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.atan();

    #[cfg(not(feature = "std"))]
    return libm::atan(x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}
