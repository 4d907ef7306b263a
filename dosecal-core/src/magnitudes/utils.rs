//! Shared precondition checks for the magnitude formulas
//!
//! All formulas validate their inputs through these two helpers so that the
//! error reported for a given violation is identical no matter which stage
//! detects it. Both are pure functions; neither clamps or substitutes a
//! default - an invalid input stops the calculation.

use crate::errors::{DoseError, DoseResult};

/// Reject NaN and infinite values
pub fn check_finite(value: f64, quantity: &'static str) -> DoseResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(DoseError::NotFinite { quantity })
    }
}

/// Reject divisors that are zero or not finite
///
/// Zero is compared exactly: IEEE division would produce an infinity or NaN
/// rather than failing, and a calibration result must never be built on one.
pub fn check_divisor(value: f64, quantity: &'static str) -> DoseResult<()> {
    check_finite(value, quantity)?;
    if value == 0.0 {
        Err(DoseError::DivisionByZero { quantity })
    } else {
        Ok(())
    }
}
