//! Integral Magnitude over an Exposure Interval
//!
//! The rates computed upstream are constant over a controlled exposure, so
//! integration reduces to `rate × time`. A negative integration time is
//! accepted and propagated; supplying a physically meaningful interval is
//! the caller's responsibility.

use crate::errors::DoseResult;

use super::utils;

/// Integrate a magnitude rate over an exposure interval
///
/// `magnitude = magnitude_rate * integration_time_s`. The result carries the
/// rate's unit times seconds (e.g. Sv for an H*(10) rate in Sv/s). Errors
/// only if an input is non-finite.
pub fn integral_magnitude(magnitude_rate: f64, integration_time_s: f64) -> DoseResult<f64> {
    utils::check_finite(magnitude_rate, "magnitude rate")?;
    utils::check_finite(integration_time_s, "integration time")?;

    Ok(magnitude_rate * integration_time_s)
}
