//! Air-Kerma Rate from Ionization Current
//!
//! The chamber's calibration coefficient `N_K` (Gy/A, equivalently Gy/C)
//! converts the corrected current into an air-kerma rate. Two dimensionless
//! factors ride along: a correction to the calibration coefficient for the
//! beam quality in use, and an inverse-square distance factor when the
//! measurement plane differs from the calibration plane.
//!
//! The conversion is a plain product. Zero or negative inputs propagate
//! arithmetically - a zero current is a legitimate "no dose" reading, not an
//! error.

use crate::errors::DoseResult;

use super::utils;

/// Calculate the air-kerma rate (Gy/s) from an ionization current
///
/// Product of the current, the calibration coefficient, the coefficient
/// correction, and the distance factor. Errors only if an input is
/// non-finite.
pub fn kerma_rate(
    current_a: f64,
    calibration_coefficient_gy_per_a: f64,
    coefficient_correction: f64,
    distance_factor: f64,
) -> DoseResult<f64> {
    utils::check_finite(current_a, "current")?;
    utils::check_finite(calibration_coefficient_gy_per_a, "calibration coefficient")?;
    utils::check_finite(coefficient_correction, "coefficient correction")?;
    utils::check_finite(distance_factor, "distance factor")?;

    Ok(current_a * calibration_coefficient_gy_per_a * coefficient_correction * distance_factor)
}

/// Calibration data converting current to air-kerma rate for one chamber
///
/// There is no meaningful default calibration coefficient, so this type has
/// no `Default`; the coefficient always comes from the chamber's calibration
/// certificate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KermaCalibration {
    /// Calibration coefficient N_K (Gy/A)
    pub coefficient_gy_per_a: f64,

    /// Dimensionless correction to the coefficient for the beam quality in use
    pub coefficient_correction: f64,

    /// Dimensionless inverse-square distance factor
    pub distance_factor: f64,
}

impl KermaCalibration {
    /// Calibration with both corrections at unity
    pub fn new(coefficient_gy_per_a: f64) -> Self {
        Self {
            coefficient_gy_per_a,
            coefficient_correction: 1.0,
            distance_factor: 1.0,
        }
    }

    /// Calibration with explicit corrections
    pub fn new_with_corrections(
        coefficient_gy_per_a: f64,
        coefficient_correction: f64,
        distance_factor: f64,
    ) -> Self {
        Self {
            coefficient_gy_per_a,
            coefficient_correction,
            distance_factor,
        }
    }

    /// Air-kerma rate (Gy/s) for a measured current (A)
    pub fn kerma_rate(&self, current_a: f64) -> DoseResult<f64> {
        kerma_rate(
            current_a,
            self.coefficient_gy_per_a,
            self.coefficient_correction,
            self.distance_factor,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DoseError;

    #[test]
    fn worked_example() {
        let rate = kerma_rate(0.5, 0.1, 1.2, 2.0).unwrap();
        assert!((rate - 0.12).abs() < 1e-15);
    }

    #[test]
    fn zero_current_gives_zero_rate() {
        assert_eq!(kerma_rate(0.0, 4.386e7, 1.001, 1.0).unwrap(), 0.0);
    }

    #[test]
    fn negative_current_propagates() {
        // Background-dominated reading stays visible downstream
        let rate = kerma_rate(-1.0e-12, 4.386e7, 1.0, 1.0).unwrap();
        assert!(rate < 0.0);
    }

    #[test]
    fn calibration_struct_matches_function() {
        let calibration = KermaCalibration::new_with_corrections(0.1, 1.2, 2.0);
        assert_eq!(
            calibration.kerma_rate(0.5).unwrap(),
            kerma_rate(0.5, 0.1, 1.2, 2.0).unwrap()
        );

        let plain = KermaCalibration::new(4.386e7);
        assert_eq!(plain.coefficient_correction, 1.0);
        assert_eq!(plain.distance_factor, 1.0);
    }

    #[test]
    fn non_finite_inputs_rejected() {
        assert_eq!(
            kerma_rate(f64::NAN, 0.1, 1.2, 2.0),
            Err(DoseError::NotFinite { quantity: "current" })
        );
        assert_eq!(
            kerma_rate(0.5, 0.1, f64::INFINITY, 2.0),
            Err(DoseError::NotFinite { quantity: "coefficient correction" })
        );
    }
}
