//! Dosimetry Magnitude Calculations
//!
//! ## Overview
//!
//! This module contains the formula chain a calibration laboratory applies to
//! turn an electrometer reading into a calibrated dose quantity:
//!
//! ```text
//! charge, time ──▶ ionization current ──▶ air-kerma rate
//!                        │                     │
//!   environmental        │                     ▼
//!   correction ──────────┘        operational magnitude rate ──▶ integral magnitude
//! ```
//!
//! Each stage is a stateless pure function over `f64` quantities. Stages are
//! independently callable; only the current calculation optionally folds in
//! the environmental correction (for chambers vented to atmosphere).
//!
//! ## Units
//!
//! Everything is SI at this layer: kelvin, pascal, second, coulomb, ampere,
//! gray. Conversion coefficients carry the operational quantity's unit per
//! gray (e.g. Sv/Gy for H*(10)). Presentation-layer unit conversions and
//! rounding belong to the caller.
//!
//! ## Failure Policy
//!
//! Every function validates that its inputs are finite and that divisors are
//! non-zero, returning [`DoseError`](crate::errors::DoseError) otherwise.
//! Beyond that, values propagate arithmetically: a zero current yields a zero
//! kerma rate, and a background larger than the raw signal yields a negative
//! current. Neither is an error at this layer.
//!
//! ## Usage Example
//!
//! ```rust
//! use dosecal_core::magnitudes::{
//!     ionization_current, kerma_rate, operational_magnitude_rate,
//!     integral_magnitude, DetectorMode,
//! };
//!
//! let current_a = ionization_current(60.0, 2.4e-9, Some(2.0e-13), DetectorMode::Closed)?;
//! let kerma_gy_per_s = kerma_rate(current_a, 4.386e7, 1.001, 1.0)?;
//! let h10_sv_per_s = operational_magnitude_rate(kerma_gy_per_s, 1.20, 1.0, 1.0)?;
//! let h10_sv = integral_magnitude(h10_sv_per_s, 300.0)?;
//! # let _ = h10_sv;
//! # Ok::<(), dosecal_core::DoseError>(())
//! ```

mod environment;
mod current;
mod kerma;
mod operational;
mod integral;
mod utils;

pub use environment::{environmental_correction, EnvironmentalConditions};
pub use current::{ionization_current, DetectorMode};
pub use kerma::{kerma_rate, KermaCalibration};
pub use operational::{operational_magnitude_rate, OperationalConversion};
pub use integral::integral_magnitude;
