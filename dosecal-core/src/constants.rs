//! Physical Constants for DoseCal
//!
//! Reference values used throughout the magnitude calculations. All values
//! come from the standards a calibration laboratory works against; use these
//! constants instead of repeating magic numbers at call sites.

// ===== REFERENCE AIR CONDITIONS =====

/// Reference air temperature for calibration (K).
///
/// 20 °C, the reference temperature at which calibration coefficients for
/// vented ionization chambers are stated. Readings taken at other
/// temperatures are corrected back to this value.
///
/// Source: ISO 4037-1, reference conditions for X and gamma reference fields
pub const REFERENCE_TEMPERATURE_K: f64 = 293.15;

/// Reference air pressure for calibration (Pa).
///
/// One standard atmosphere. Together with [`REFERENCE_TEMPERATURE_K`] this
/// fixes the air density assumed by a chamber's calibration coefficient.
///
/// Source: ISO 4037-1, reference conditions for X and gamma reference fields
pub const REFERENCE_PRESSURE_PA: f64 = 101_325.0;

// ===== OPERATIONAL QUANTITY CONVERSIONS =====

/// Nominal air-kerma to ambient dose equivalent H*(10) conversion for Cs-137 (Sv/Gy).
///
/// Applies to the S-Cs reference radiation quality (662 keV). Beam-specific
/// coefficients from the laboratory's own characterization take precedence.
///
/// Source: ISO 4037-3, conversion coefficients for reference radiation qualities
pub const H10_PER_KERMA_CS137_SV_PER_GY: f64 = 1.20;

/// Nominal air-kerma to ambient dose equivalent H*(10) conversion for Co-60 (Sv/Gy).
///
/// Applies to the S-Co reference radiation quality (1250 keV mean).
///
/// Source: ISO 4037-3, conversion coefficients for reference radiation qualities
pub const H10_PER_KERMA_CO60_SV_PER_GY: f64 = 1.16;

// ===== TIME =====

/// Seconds per hour.
///
/// Integrated doses are commonly quoted per hour of exposure; rates in this
/// crate are always per second.
pub const SECONDS_PER_HOUR: f64 = 3600.0;
