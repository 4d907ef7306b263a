//! Core magnitude calculations for DoseCal
//!
//! Computes the dosimetry quantities a radiological calibration laboratory
//! derives from ionization chamber readings: ionization current, air-kerma
//! rate, operational dose-equivalent rate, and integrated dose.
//!
//! Key constraints:
//! - Pure arithmetic, no state and no I/O
//! - `no_std` compatible (runs on instrument firmware)
//! - Errors are surfaced, never clamped or approximated
//!
//! ```
//! use dosecal_core::{ionization_current, kerma_rate, DetectorMode, DoseError};
//!
//! // 3.0 nC collected over 60 s with a sealed chamber
//! let current_a = ionization_current(60.0, 3.0e-9, None, DetectorMode::Closed)?;
//!
//! // Convert to air-kerma rate with the chamber's calibration coefficient
//! let kerma_gy_per_s = kerma_rate(current_a, 4.386e7, 1.0, 1.0)?;
//! # let _ = kerma_gy_per_s;
//! # Ok::<(), DoseError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod constants;
pub mod errors;
pub mod magnitudes;
pub mod measurement;

// Public API
pub use errors::{DoseError, DoseResult};
pub use magnitudes::{
    environmental_correction,
    ionization_current,
    kerma_rate,
    operational_magnitude_rate,
    integral_magnitude,
    DetectorMode,
    EnvironmentalConditions,
    KermaCalibration,
    OperationalConversion,
};
pub use measurement::{CalibrationChain, ChargeReading};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
