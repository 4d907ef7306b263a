//! Open detector example
//!
//! Shows the environmental correction a vented chamber needs when the
//! laboratory's air conditions drift away from the calibration reference.
//!
//! Run with: cargo run --example 02_open_detector

use dosecal_core::{
    ionization_current, ChargeReading, DetectorMode, DoseError, EnvironmentalConditions,
};

fn main() -> Result<(), DoseError> {
    // A warm, low-pressure afternoon against the ISO 4037-1 reference
    let conditions = EnvironmentalConditions::new(296.15, 99_500.0);
    println!(
        "correction factor at {} K / {} Pa: {:.6}",
        conditions.temperature_k,
        conditions.pressure_pa,
        conditions.correction_factor()?
    );

    // Same charge and interval, sealed vs vented
    let sealed = ChargeReading::new(60.0, 2.4e-9);
    let vented = ChargeReading::new(60.0, 2.4e-9).with_open_detector(conditions);

    println!("sealed chamber current: {:.6e} A", sealed.current()?);
    println!("vented chamber current: {:.6e} A", vented.current()?);

    // The plain function form takes the detector mode directly
    let current_a = ionization_current(60.0, 2.4e-9, None, DetectorMode::Open(conditions))?;
    println!("function form:          {current_a:.6e} A");

    Ok(())
}
