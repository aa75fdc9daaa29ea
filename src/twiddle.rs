//! Twiddle table generation (spec.md §4.2, §3).
//!
//! Ne10's allocator writes these into a flat array with 6 reserved/padded
//! slots ahead of the promoted stage so raw-pointer index arithmetic stays
//! in sync with the unmodified factor schedule (spec.md §4.2, §9). Since
//! generation and consumption live in the same two files here, the padding
//! buys nothing — the table below holds exactly the values the kernel
//! consumes, in consumption order, and `kernel.rs` never needs to skip
//! anything.

use crate::complex::Sample;
use crate::factor::Factors;
use std::f32::consts::PI;

/// `e^{-2*pi*i*s*k/n}` as used throughout the kernel's twiddle tables.
fn root(n: usize, s: usize, k: usize) -> Sample {
    let angle = -2.0 * PI * (s * k) as f32 / n as f32;
    Sample::new(angle.cos(), angle.sin())
}

/// Builds the C2C twiddle table: for each stage after the first, `3*mstride`
/// values laid out as three contiguous blocks of `mstride` roots at stride
/// multipliers `1, 2, 3` of that stage's `fstride` (spec.md §4.2).
pub fn c2c_twiddles(factors: &Factors) -> Vec<Sample> {
    let n = factors.n;
    let mut table = Vec::new();
    for (fstride, mstride) in factors.trailing_stage_strides() {
        for mult in 1..=3 {
            for k in 0..mstride {
                table.push(root(n, fstride * mult, k));
            }
        }
    }
    table
}

/// Builds the R2C/C2R super-twiddle table: `ncfft/2` values with
/// `phi_k = -pi*((k+1)/ncfft + 1/2)` (spec.md §3), read directly from
/// `ne10_fft_alloc_r2c_float32`'s super-twiddle fill loop.
pub fn super_twiddles(ncfft: usize) -> Vec<Sample> {
    (0..ncfft / 2)
        .map(|k| {
            let phase = -PI * ((k as f32 + 1.0) / ncfft as f32 + 0.5);
            Sample::new(phase.cos(), phase.sin())
        })
        .collect()
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::factor::{factor, FactorMode};

    #[test]
    fn c2c_table_length_matches_consumption() {
        let f = factor(128, FactorMode::Eight).unwrap();
        let table = c2c_twiddles(&f);
        let expected: usize = f.trailing_stage_strides().iter().map(|&(_, m)| 3 * m).sum();
        assert_eq!(table.len(), expected);
    }

    #[test]
    fn degenerate_schedules_have_empty_tables() {
        let f = factor(8, FactorMode::Eight).unwrap();
        assert!(c2c_twiddles(&f).is_empty());
        let f = factor(4, FactorMode::Default).unwrap();
        assert!(c2c_twiddles(&f).is_empty());
    }

    #[test]
    fn super_twiddle_first_value_matches_formula() {
        let ncfft = 8;
        let table = super_twiddles(ncfft);
        assert_eq!(table.len(), ncfft / 2);
        let phase0 = -PI * (1.0 / ncfft as f32 + 0.5);
        assert!((table[0].re - phase0.cos()).abs() < 1e-6);
        assert!((table[0].im - phase0.sin()).abs() < 1e-6);
    }
}
