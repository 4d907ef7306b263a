//! Environmental Correction for Vented Ionization Chambers
//!
//! ## Physics Background
//!
//! An ionization chamber that is open (vented) to the atmosphere measures
//! charge collected from a mass of air that depends on the air density inside
//! the cavity. By the ideal gas law, density is proportional to `P/T`, so a
//! reading taken on a warm, low-pressure day comes from less air than the
//! same reading at the calibration bench.
//!
//! The chamber's calibration coefficient is stated at reference conditions
//! (20 °C, 101.325 kPa per ISO 4037-1). The correction factor
//!
//! ```text
//! k_TP = (P_ref / T_ref) × (T / P)
//! ```
//!
//! rescales the measured current to the air mass the coefficient assumes.
//! It is dimensionless and close to 1.0 when ambient conditions match the
//! reference; a sealed chamber needs no correction at all.
//!
//! Temperatures are absolute (kelvin) and pressures are in pascal. The
//! formula divides by `T_ref` and `P`, so both must be non-zero; there is no
//! defensive clamping - supplying physical readings is the caller's job.

use crate::{
    constants::{REFERENCE_PRESSURE_PA, REFERENCE_TEMPERATURE_K},
    errors::DoseResult,
};

use super::utils;

/// Calculate the environmental correction factor for a vented chamber
///
/// Dimensionless; equals 1.0 exactly when ambient conditions match the
/// reference conditions.
///
/// Errors if any input is non-finite, or if `reference_temperature_k` or
/// `pressure_pa` is zero.
pub fn environmental_correction(
    temperature_k: f64,
    pressure_pa: f64,
    reference_temperature_k: f64,
    reference_pressure_pa: f64,
) -> DoseResult<f64> {
    utils::check_finite(temperature_k, "temperature")?;
    utils::check_divisor(pressure_pa, "pressure")?;
    utils::check_divisor(reference_temperature_k, "reference temperature")?;
    utils::check_finite(reference_pressure_pa, "reference pressure")?;

    Ok((reference_pressure_pa / reference_temperature_k) * (temperature_k / pressure_pa))
}

/// Ambient and reference air conditions for one measurement
///
/// Bundles the four inputs of [`environmental_correction`] so a reading can
/// carry its conditions as a single value. The reference half defaults to
/// the ISO 4037-1 conditions; laboratories that calibrate against different
/// reference conditions set them explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnvironmentalConditions {
    /// Ambient air temperature (K)
    pub temperature_k: f64,

    /// Ambient air pressure (Pa)
    pub pressure_pa: f64,

    /// Reference temperature of the calibration (K)
    pub reference_temperature_k: f64,

    /// Reference pressure of the calibration (Pa)
    pub reference_pressure_pa: f64,
}

impl Default for EnvironmentalConditions {
    fn default() -> Self {
        // Ambient equal to reference: correction factor is exactly 1.0
        Self {
            temperature_k: REFERENCE_TEMPERATURE_K,
            pressure_pa: REFERENCE_PRESSURE_PA,
            reference_temperature_k: REFERENCE_TEMPERATURE_K,
            reference_pressure_pa: REFERENCE_PRESSURE_PA,
        }
    }
}

impl EnvironmentalConditions {
    /// Ambient conditions against the ISO 4037-1 reference conditions
    pub fn new(temperature_k: f64, pressure_pa: f64) -> Self {
        Self {
            temperature_k,
            pressure_pa,
            ..Self::default()
        }
    }

    /// Ambient conditions against laboratory-specific reference conditions
    pub fn new_with_reference(
        temperature_k: f64,
        pressure_pa: f64,
        reference_temperature_k: f64,
        reference_pressure_pa: f64,
    ) -> Self {
        Self {
            temperature_k,
            pressure_pa,
            reference_temperature_k,
            reference_pressure_pa,
        }
    }

    /// Correction factor for these conditions
    pub fn correction_factor(&self) -> DoseResult<f64> {
        environmental_correction(
            self.temperature_k,
            self.pressure_pa,
            self.reference_temperature_k,
            self.reference_pressure_pa,
        )
    }
}
