//! Typed Measurement Chain
//!
//! The formula functions in [`magnitudes`](crate::magnitudes) take plain
//! scalars, mirroring how they are defined on paper. This module layers the
//! value types a laboratory actually passes around on top of them:
//!
//! - [`ChargeReading`] - one electrometer reading together with everything
//!   needed to turn it into a current (elapsed time, collected charge,
//!   optional background, detector mode).
//! - [`CalibrationChain`] - the chamber's kerma calibration plus the
//!   operational conversion, composed end-to-end.
//!
//! Every method delegates to the formula functions; there is no second
//! implementation of the arithmetic here. The structs are plain `Copy` value
//! types, so a reading or a chain can be passed by value, stored in a
//! config, or (with the `serde` feature) deserialized by whatever loads the
//! laboratory's calibration data.

use crate::errors::DoseResult;
use crate::magnitudes::{
    integral_magnitude, ionization_current, DetectorMode, EnvironmentalConditions,
    KermaCalibration, OperationalConversion,
};

// Stage tracing is only compiled in when the host enables the log feature
#[cfg(feature = "log")]
macro_rules! trace_stage {
    ($($arg:tt)*) => { log::trace!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! trace_stage {
    ($($arg:tt)*) => {};
}

/// One electrometer reading and how to interpret it
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChargeReading {
    /// Elapsed measurement time (s)
    pub time_s: f64,

    /// Collected charge (C)
    pub charge_c: f64,

    /// Background current to subtract (A), if one was measured
    pub background_a: Option<f64>,

    /// Detector mode; open detectors carry their environmental conditions
    pub detector: DetectorMode,
}

impl ChargeReading {
    /// Reading from a sealed chamber with no background measurement
    pub fn new(time_s: f64, charge_c: f64) -> Self {
        Self {
            time_s,
            charge_c,
            background_a: None,
            detector: DetectorMode::Closed,
        }
    }

    /// Attach a measured background current (A)
    pub fn with_background(mut self, background_a: f64) -> Self {
        self.background_a = Some(background_a);
        self
    }

    /// Mark the detector as vented to atmosphere under these conditions
    pub fn with_open_detector(mut self, conditions: EnvironmentalConditions) -> Self {
        self.detector = DetectorMode::Open(conditions);
        self
    }

    /// Ionization current (A) for this reading
    pub fn current(&self) -> DoseResult<f64> {
        ionization_current(self.time_s, self.charge_c, self.background_a, self.detector)
    }
}

/// Full calibration chain from ionization current to operational quantity
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalibrationChain {
    /// Current-to-kerma calibration of the chamber
    pub kerma: KermaCalibration,

    /// Kerma-to-operational conversion for the quantity being realized
    pub operational: OperationalConversion,
}

impl CalibrationChain {
    /// Chain a kerma calibration and an operational conversion
    pub fn new(kerma: KermaCalibration, operational: OperationalConversion) -> Self {
        Self { kerma, operational }
    }

    /// Operational magnitude rate for one reading
    ///
    /// Runs the full pipeline: current, kerma rate, operational rate. Stops
    /// at the first violated precondition.
    pub fn dose_rate(&self, reading: &ChargeReading) -> DoseResult<f64> {
        let current_a = reading.current()?;
        let kerma_gy_per_s = self.kerma.kerma_rate(current_a)?;
        let rate = self.operational.rate(kerma_gy_per_s)?;
        trace_stage!(
            "chain: {} A -> {} Gy/s -> {} /s",
            current_a,
            kerma_gy_per_s,
            rate
        );
        Ok(rate)
    }

    /// Integrated operational magnitude for one reading over an exposure interval
    pub fn integrated_dose(
        &self,
        reading: &ChargeReading,
        integration_time_s: f64,
    ) -> DoseResult<f64> {
        integral_magnitude(self.dose_rate(reading)?, integration_time_s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::DoseError;
    use crate::magnitudes::{kerma_rate, operational_magnitude_rate};

    fn chain() -> CalibrationChain {
        CalibrationChain::new(
            KermaCalibration::new_with_corrections(4.386e7, 1.001, 1.0),
            OperationalConversion::new_with_corrections(1.20, 0.998, 1.0),
        )
    }

    #[test]
    fn reading_current_matches_function() {
        let reading = ChargeReading::new(60.0, 2.4e-9).with_background(2.0e-13);
        assert_eq!(
            reading.current().unwrap(),
            ionization_current(60.0, 2.4e-9, Some(2.0e-13), DetectorMode::Closed).unwrap()
        );
    }

    #[test]
    fn chain_matches_manual_composition() {
        let reading = ChargeReading::new(60.0, 2.4e-9);
        let chain = chain();

        let current_a = reading.current().unwrap();
        let kerma = kerma_rate(current_a, 4.386e7, 1.001, 1.0).unwrap();
        let expected = operational_magnitude_rate(kerma, 1.20, 0.998, 1.0).unwrap();

        assert_eq!(chain.dose_rate(&reading).unwrap(), expected);
    }

    #[test]
    fn integrated_dose_is_rate_times_time() {
        let reading = ChargeReading::new(60.0, 2.4e-9);
        let chain = chain();

        let rate = chain.dose_rate(&reading).unwrap();
        assert_eq!(
            chain.integrated_dose(&reading, 300.0).unwrap(),
            rate * 300.0
        );
    }

    #[test]
    fn open_detector_reading() {
        let conditions = EnvironmentalConditions::new(296.15, 99_500.0);
        let reading = ChargeReading::new(60.0, 2.4e-9).with_open_detector(conditions);

        let closed = ChargeReading::new(60.0, 2.4e-9).current().unwrap();
        let factor = conditions.correction_factor().unwrap();
        assert_eq!(reading.current().unwrap(), closed * factor);
    }

    #[test]
    fn chain_propagates_reading_errors() {
        let reading = ChargeReading::new(0.0, 2.4e-9);
        assert_eq!(
            chain().dose_rate(&reading),
            Err(DoseError::DivisionByZero { quantity: "time" })
        );
    }
}
