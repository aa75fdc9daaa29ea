//! Naive O(n^2) DFT, the `AlgorithmFlag::Any` fallback for composite lengths
//! the mixed-radix kernel doesn't cover. Grounded on
//! `FauxFaux-RustFFT/src/algorithm/dft.rs::DFTAlgorithm`, simplified to a
//! free function since there is no per-instance twiddle cache to own here.

use crate::complex::Sample;
use std::f32::consts::PI;

/// `output[k] = sum_n input[n] * e^{∓2*pi*i*k*n/N}`, sign per `inverse`
/// (spec.md §6's sign convention; this path applies no `1/N` scale itself —
/// callers that want an inverse apply it the same way the kernel path does).
pub fn transform(input: &[Sample], output: &mut [Sample], inverse: bool) {
    let n = input.len();
    let sign = if inverse { 1.0 } else { -1.0 };

    for (k, out_bin) in output.iter_mut().enumerate() {
        let mut sum = Sample::new(0.0, 0.0);
        for (i, &x) in input.iter().enumerate() {
            let angle = sign * 2.0 * PI * (i * k) as f32 / n as f32;
            let twiddle = Sample::new(angle.cos(), angle.sin());
            sum += twiddle * x;
        }
        *out_bin = sum;
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn round_trips_with_explicit_scale() {
        let n = 6;
        let input: Vec<Sample> = (0..n).map(|i| Sample::new(i as f32, -(i as f32 * 0.5))).collect();

        let mut spectrum = vec![Sample::new(0.0, 0.0); n];
        transform(&input, &mut spectrum, false);

        let mut result = vec![Sample::new(0.0, 0.0); n];
        transform(&spectrum, &mut result, true);
        for sample in &mut result {
            *sample = *sample * (1.0 / n as f32);
        }

        for (a, b) in input.iter().zip(result.iter()) {
            assert!((a.re - b.re).abs() < 1e-4);
            assert!((a.im - b.im).abs() < 1e-4);
        }
    }

    #[test]
    fn dc_only_for_all_ones_input() {
        let n = 5;
        let input = vec![Sample::new(1.0, 0.0); n];
        let mut out = vec![Sample::new(0.0, 0.0); n];
        transform(&input, &mut out, false);

        assert!((out[0].re - n as f32).abs() < 1e-4);
        for bin in &out[1..] {
            assert!(bin.re.abs() < 1e-4 && bin.im.abs() < 1e-4);
        }
    }
}
