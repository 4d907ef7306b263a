//! Error Types for Magnitude Calculations
//!
//! ## Design Philosophy
//!
//! A calibration computation must never silently approximate: a division by
//! zero or a NaN input invalidates the whole measurement chain, so every
//! formula returns a `Result` and the error names the offending quantity.
//!
//! 1. **Small Size**: Each variant carries only a `&'static str` quantity
//!    name, keeping the enum pointer-sized and `Copy`.
//!
//! 2. **No Heap Allocation**: No `String` payloads - errors work identically
//!    on `no_std` targets.
//!
//! 3. **Fail Fast**: No variant is ever caught or retried inside this crate;
//!    callers see the first violated precondition.
//!
//! ## Error Categories
//!
//! ### Domain Violations
//! - `DivisionByZero`: `time`, `pressure`, or `reference temperature` was
//!   zero where the formula divides by it
//!
//! ### Invalid Inputs
//! - `NotFinite`: a supplied value is NaN or infinite. The type system
//!   already rejects non-numeric arguments; a non-finite float is the
//!   remaining way to pass a value with no physical meaning.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use dosecal_core::{ionization_current, DetectorMode, DoseError};
//!
//! match ionization_current(0.0, 5.0e-9, None, DetectorMode::Closed) {
//!     Ok(current_a) => {
//!         // Proceed to kerma conversion
//!         # let _ = current_a;
//!     }
//!     Err(DoseError::DivisionByZero { quantity }) => {
//!         // Electrometer reported a zero measurement interval
//!         # let _ = quantity;
//!     }
//!     Err(DoseError::NotFinite { .. }) => {
//!         // Reading was corrupted upstream
//!     }
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for magnitude calculations
pub type DoseResult<T> = Result<T, DoseError>;

/// Calculation errors - kept small and allocation-free
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoseError {
    /// A quantity used as a divisor was zero
    #[error("{quantity} is zero: division undefined")]
    DivisionByZero {
        /// Name of the quantity that must be non-zero
        quantity: &'static str,
    },

    /// A supplied value was NaN or infinite
    #[error("{quantity} is not a finite number")]
    NotFinite {
        /// Name of the quantity that failed the finiteness check
        quantity: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for DoseError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::DivisionByZero { quantity } =>
                defmt::write!(fmt, "{} is zero: division undefined", quantity),
            Self::NotFinite { quantity } =>
                defmt::write!(fmt, "{} is not a finite number", quantity),
        }
    }
}
