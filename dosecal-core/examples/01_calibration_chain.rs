//! Basic calibration chain example
//!
//! Turns one electrometer reading from a sealed chamber into an ambient dose
//! equivalent rate and an integrated dose, using nominal S-Cs coefficients.
//!
//! Run with: cargo run --example 01_calibration_chain

use dosecal_core::{
    constants::{H10_PER_KERMA_CS137_SV_PER_GY, SECONDS_PER_HOUR},
    CalibrationChain, ChargeReading, DoseError, KermaCalibration, OperationalConversion,
};

fn main() -> Result<(), DoseError> {
    // 2.4 nC collected over 60 s, with 0.2 pA of leakage background
    let reading = ChargeReading::new(60.0, 2.4e-9).with_background(2.0e-13);

    // Chamber certificate: N_K = 4.386e7 Gy/C, beam quality correction 1.001
    let chain = CalibrationChain::new(
        KermaCalibration::new_with_corrections(4.386e7, 1.001, 1.0),
        OperationalConversion::new(H10_PER_KERMA_CS137_SV_PER_GY),
    );

    let current_a = reading.current()?;
    let rate_sv_per_s = chain.dose_rate(&reading)?;
    let dose_sv = chain.integrated_dose(&reading, 300.0)?;
    let hourly_sv = chain.integrated_dose(&reading, SECONDS_PER_HOUR)?;

    println!("ionization current: {current_a:.4e} A");
    println!("H*(10) rate:        {rate_sv_per_s:.4e} Sv/s");
    println!("H*(10) over 300 s:  {dose_sv:.4e} Sv");
    println!("H*(10) per hour:    {hourly_sv:.4e} Sv");

    Ok(())
}
