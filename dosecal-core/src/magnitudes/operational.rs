//! Operational Dose-Equivalent Rate from Air-Kerma Rate
//!
//! ## Operational Quantities
//!
//! Radiation protection instruments are calibrated in operational quantities
//! such as ambient dose equivalent H*(10) or directional dose equivalent
//! H'(0.07), not in air kerma. ISO 4037-3 tabulates conversion coefficients
//! from air kerma to each operational quantity per reference radiation
//! quality; nominal values for common sources live in
//! [`crate::constants`].
//!
//! On top of the conversion coefficient, two instrument corrections apply:
//! the electrometer range correction (scale linearity for the range in use)
//! and the air density correction of the monitor chamber. Both are
//! dimensionless and near unity for a well-characterized setup.
//!
//! As with the kerma conversion, this stage is a plain product and zero or
//! negative values propagate arithmetically.

use crate::errors::DoseResult;

use super::utils;

/// Calculate the operational magnitude rate from an air-kerma rate
///
/// Product of the kerma rate (Gy/s), the kerma-to-operational conversion
/// coefficient, the electrometer range correction, and the air density
/// correction. The result carries the operational quantity's unit per
/// second (e.g. Sv/s for H*(10)). Errors only if an input is non-finite.
pub fn operational_magnitude_rate(
    kerma_rate_gy_per_s: f64,
    conversion_coefficient: f64,
    electrometer_range_correction: f64,
    air_density_correction: f64,
) -> DoseResult<f64> {
    utils::check_finite(kerma_rate_gy_per_s, "kerma rate")?;
    utils::check_finite(conversion_coefficient, "conversion coefficient")?;
    utils::check_finite(electrometer_range_correction, "electrometer range correction")?;
    utils::check_finite(air_density_correction, "air density correction")?;

    Ok(kerma_rate_gy_per_s
        * conversion_coefficient
        * electrometer_range_correction
        * air_density_correction)
}

/// Conversion data from air kerma to one operational quantity
///
/// No `Default`: the conversion coefficient is specific to the operational
/// quantity and radiation quality being realized.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperationalConversion {
    /// Kerma-to-operational conversion coefficient (operational unit per gray)
    pub conversion_coefficient: f64,

    /// Dimensionless electrometer range correction
    pub electrometer_range_correction: f64,

    /// Dimensionless air density correction of the monitor chamber
    pub air_density_correction: f64,
}

impl OperationalConversion {
    /// Conversion with both instrument corrections at unity
    pub fn new(conversion_coefficient: f64) -> Self {
        Self {
            conversion_coefficient,
            electrometer_range_correction: 1.0,
            air_density_correction: 1.0,
        }
    }

    /// Conversion with explicit instrument corrections
    pub fn new_with_corrections(
        conversion_coefficient: f64,
        electrometer_range_correction: f64,
        air_density_correction: f64,
    ) -> Self {
        Self {
            conversion_coefficient,
            electrometer_range_correction,
            air_density_correction,
        }
    }

    /// Operational magnitude rate for a kerma rate (Gy/s)
    pub fn rate(&self, kerma_rate_gy_per_s: f64) -> DoseResult<f64> {
        operational_magnitude_rate(
            kerma_rate_gy_per_s,
            self.conversion_coefficient,
            self.electrometer_range_correction,
            self.air_density_correction,
        )
    }
}
