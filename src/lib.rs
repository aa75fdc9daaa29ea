//! A single-precision, power-of-two, mixed-radix FFT engine.
//!
//! The core kernel is a decimation-in-time radix-4 walk with the leading
//! radix-2 stage fused into a radix-8 pass (spec.md §4.4), the same
//! structure as Ne10's `ne10_mixed_radix_butterfly_float32_c`. On top of it
//! sits a real/complex split stage (§4.5) giving real-input (R2C) and
//! real-output (C2R) transforms at half the work of a full complex FFT.
//!
//! ```
//! use mixed_radix_fft::{C2cPlan, Direction, Sample};
//!
//! let mut plan = C2cPlan::new(8).unwrap();
//! let input: Vec<Sample> = (0..8).map(|i| Sample::new(i as f32, 0.0)).collect();
//! let mut spectrum = vec![Sample::new(0.0, 0.0); 8];
//! plan.process(&input, &mut spectrum, Direction::Forward);
//! assert!((spectrum[0].re - 28.0).abs() < 1e-4);
//! ```

mod algorithm;
mod complex;
mod factor;
mod kernel;
mod plan;
mod split;
mod twiddle;

pub use complex::Sample;
pub use factor::FftError;
pub use plan::{C2cPlan, Direction, R2cPlan};

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn documented_c2c_example_matches_spec_scenario() {
        let mut plan = C2cPlan::new(8).unwrap();
        let input: Vec<Sample> = (0..8).map(|i| Sample::new(i as f32, 0.0)).collect();
        let mut spectrum = vec![Sample::new(0.0, 0.0); 8];
        plan.process(&input, &mut spectrum, Direction::Forward);
        assert!((spectrum[0].re - 28.0).abs() < 1e-4);
        assert!(spectrum[0].im.abs() < 1e-4);
    }

    #[test]
    fn r2c_plan_exposes_its_size() {
        let plan = R2cPlan::new(16).unwrap();
        assert_eq!(plan.len(), 16);
    }
}
