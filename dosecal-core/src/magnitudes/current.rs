//! Ionization Current from Charge and Time
//!
//! The electrometer integrates the chamber's charge over a measurement
//! interval; the signal of interest is the mean current `Q / t`. Two
//! corrections apply before the current goes on to the kerma conversion:
//!
//! - **Background subtraction**: leakage and ambient background produce a
//!   small current with no source present. When a background measurement is
//!   available it is subtracted from the raw current. The result may go
//!   negative if the background exceeds the signal; that is passed through,
//!   not clamped, so the caller can see the measurement was dominated by
//!   background.
//!
//! - **Environmental correction**: a chamber vented to atmosphere needs its
//!   reading rescaled to reference air density. Whether the correction
//!   applies is a property of the detector hardware, so it is expressed as
//!   the [`DetectorMode`] sum type: a sealed chamber carries no conditions,
//!   an open one must carry all four. There is no way to request the
//!   correction and forget a parameter.

use crate::errors::DoseResult;

use super::{utils, EnvironmentalConditions};

/// How the detector cavity relates to ambient air
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DetectorMode {
    /// Sealed chamber: response independent of ambient air density
    Closed,

    /// Chamber vented to atmosphere: reading is rescaled to the reference
    /// air density implied by these conditions
    Open(EnvironmentalConditions),
}

/// Calculate the ionization current from charge and elapsed time
///
/// `current = charge / time`, minus `background_a` when one is supplied,
/// times the environmental correction when the detector is
/// [`DetectorMode::Open`]. Pass `None` for `background_a` when no background
/// measurement was taken; a measured background of `0.0` subtracts nothing
/// and is equivalent.
///
/// Errors if `time_s` is zero or any input is non-finite.
pub fn ionization_current(
    time_s: f64,
    charge_c: f64,
    background_a: Option<f64>,
    detector: DetectorMode,
) -> DoseResult<f64> {
    utils::check_divisor(time_s, "time")?;
    utils::check_finite(charge_c, "charge")?;

    let mut current_a = charge_c / time_s;

    if let Some(background) = background_a {
        utils::check_finite(background, "background")?;
        current_a -= background;
    }

    if let DetectorMode::Open(conditions) = detector {
        current_a *= conditions.correction_factor()?;
    }

    Ok(current_a)
}
