//! Integration tests for the magnitude calculation chain
//!
//! Exercises the complete flow from an electrometer reading through current,
//! kerma rate, operational rate, and integrated dose, and checks that the
//! typed measurement layer agrees exactly with the plain formula functions.

use dosecal_core::{
    constants::{H10_PER_KERMA_CS137_SV_PER_GY, REFERENCE_PRESSURE_PA, REFERENCE_TEMPERATURE_K},
    environmental_correction, integral_magnitude, ionization_current, kerma_rate,
    operational_magnitude_rate, CalibrationChain, ChargeReading, DetectorMode, DoseError,
    EnvironmentalConditions, KermaCalibration, OperationalConversion,
};

#[test]
fn documented_worked_examples() {
    // Unity correction when ambient matches reference
    assert_eq!(
        environmental_correction(293.15, 101_325.0, 293.15, 101_325.0).unwrap(),
        1.0
    );

    // Equal pressures reduce the correction to the temperature ratio
    let factor = environmental_correction(300.0, 101_325.0, 298.15, 101_325.0).unwrap();
    assert!((factor - 1.006_204_930_404_159_1).abs() < 1e-9);

    // Current with and without background
    assert_eq!(
        ionization_current(10.0, 5.0, None, DetectorMode::Closed).unwrap(),
        0.5
    );
    let with_background = ionization_current(10.0, 5.0, Some(0.1), DetectorMode::Closed).unwrap();
    assert!((with_background - 0.4).abs() < 1e-15);

    // Open detector folds the correction into the current
    let conditions =
        EnvironmentalConditions::new_with_reference(300.0, 101_325.0, 298.15, 101_325.0);
    let open = ionization_current(10.0, 5.0, None, DetectorMode::Open(conditions)).unwrap();
    assert!((open - 0.503_102_465_202_079_6).abs() < 1e-9);

    // Rate conversions and integration
    assert!((kerma_rate(0.5, 0.1, 1.2, 2.0).unwrap() - 0.12).abs() < 1e-15);
    assert!((operational_magnitude_rate(0.5, 0.1, 1.2, 2.0).unwrap() - 0.12).abs() < 1e-15);
    assert_eq!(integral_magnitude(0.5, 10.0).unwrap(), 5.0);
}

#[test]
fn end_to_end_pipeline_with_consistent_units() {
    // A realistic S-Cs calibration point: 2.4 nC over 60 s from a vented
    // chamber on a warm, low-pressure day, with a small leakage background.
    let conditions = EnvironmentalConditions::new(296.15, 99_500.0);
    let correction = conditions.correction_factor().unwrap();

    let current_a = ionization_current(
        60.0,
        2.4e-9,
        Some(2.0e-13),
        DetectorMode::Open(conditions),
    )
    .unwrap();
    assert!((current_a - (2.4e-9 / 60.0 - 2.0e-13) * correction).abs() < 1e-24);

    let kerma_gy_per_s = kerma_rate(current_a, 4.386e7, 1.001, 1.0).unwrap();
    let h10_sv_per_s =
        operational_magnitude_rate(kerma_gy_per_s, H10_PER_KERMA_CS137_SV_PER_GY, 0.998, 1.0)
            .unwrap();
    let h10_sv = integral_magnitude(h10_sv_per_s, 300.0).unwrap();

    // Each stage is a product, so the whole chain is one product
    let expected = (2.4e-9 / 60.0 - 2.0e-13)
        * correction
        * 4.386e7
        * 1.001
        * H10_PER_KERMA_CS137_SV_PER_GY
        * 0.998
        * 300.0;
    assert!((h10_sv - expected).abs() < 1e-12 * expected.abs());
}

#[test]
fn typed_chain_agrees_with_plain_functions() {
    let conditions = EnvironmentalConditions::new(296.15, 99_500.0);
    let reading = ChargeReading::new(60.0, 2.4e-9)
        .with_background(2.0e-13)
        .with_open_detector(conditions);
    let chain = CalibrationChain::new(
        KermaCalibration::new_with_corrections(4.386e7, 1.001, 1.0),
        OperationalConversion::new_with_corrections(H10_PER_KERMA_CS137_SV_PER_GY, 0.998, 1.0),
    );

    let current_a = ionization_current(
        60.0,
        2.4e-9,
        Some(2.0e-13),
        DetectorMode::Open(conditions),
    )
    .unwrap();
    let kerma_gy_per_s = kerma_rate(current_a, 4.386e7, 1.001, 1.0).unwrap();
    let rate = operational_magnitude_rate(
        kerma_gy_per_s,
        H10_PER_KERMA_CS137_SV_PER_GY,
        0.998,
        1.0,
    )
    .unwrap();

    assert_eq!(chain.dose_rate(&reading).unwrap(), rate);
    assert_eq!(
        chain.integrated_dose(&reading, 300.0).unwrap(),
        integral_magnitude(rate, 300.0).unwrap()
    );
}

#[test]
fn default_conditions_are_the_iso_reference() {
    let conditions = EnvironmentalConditions::default();
    assert_eq!(conditions.temperature_k, REFERENCE_TEMPERATURE_K);
    assert_eq!(conditions.pressure_pa, REFERENCE_PRESSURE_PA);
    assert_eq!(conditions.correction_factor().unwrap(), 1.0);

    // A reading at reference conditions is indistinguishable from a sealed one
    let open = ChargeReading::new(60.0, 2.4e-9).with_open_detector(conditions);
    let closed = ChargeReading::new(60.0, 2.4e-9);
    assert_eq!(open.current().unwrap(), closed.current().unwrap());
}

#[test]
fn errors_stop_the_chain_at_the_first_violation() {
    // Zero time fails in the current stage before any conversion runs
    let chain = CalibrationChain::new(
        KermaCalibration::new(4.386e7),
        OperationalConversion::new(H10_PER_KERMA_CS137_SV_PER_GY),
    );
    let reading = ChargeReading::new(0.0, 2.4e-9);
    assert_eq!(
        chain.dose_rate(&reading),
        Err(DoseError::DivisionByZero { quantity: "time" })
    );

    // Zero ambient pressure fails inside the environmental correction
    let bad_conditions = EnvironmentalConditions::new(296.15, 0.0);
    let open = ChargeReading::new(60.0, 2.4e-9).with_open_detector(bad_conditions);
    assert_eq!(
        open.current(),
        Err(DoseError::DivisionByZero { quantity: "pressure" })
    );
}
