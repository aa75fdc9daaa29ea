//! Plan types: each owns a precomputed factor schedule, twiddle table(s),
//! and scratch buffer(s) so repeated transforms of the same length amortize
//! setup cost (spec.md §4.6). Grounded on `ne10_fft_alloc_c2c_float32_c` /
//! `ne10_fft_alloc_r2c_float32` for what gets precomputed and how the two
//! scratch regions for R2C/C2R are carved out of one buffer; module name and
//! plan-object shape from `FauxFaux-RustFFT/src/plan.rs`.

use crate::algorithm::dft;
use crate::complex::Sample;
use crate::factor::{factor, AlgorithmFlag, Factors, FactorMode, FftError};
use crate::kernel;
use crate::split::{c2r_pre_step, r2c_post_step};
use crate::twiddle::{c2c_twiddles, super_twiddles};

/// Which way a complex-to-complex transform runs (spec.md §6's
/// `inverse_flag`, folded into an enum rather than a bare bool).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Inverse,
}

fn check_c2c_size(len: usize) -> Result<(), FftError> {
    if len < 2 {
        return Err(FftError::NonPositiveSize);
    }
    if !len.is_power_of_two() {
        return Err(FftError::NotPowerOfTwo);
    }
    Ok(())
}

fn check_r2c_size(len: usize) -> Result<(), FftError> {
    if len < 1 {
        return Err(FftError::NonPositiveSize);
    }
    if len < 4 || !len.is_power_of_two() {
        return Err(FftError::OddSize);
    }
    Ok(())
}

/// A reusable complex-to-complex transform of a fixed power-of-two length
/// (spec.md §4.6's C2C plan). Run the factorizer in `Eight` mode so the
/// kernel can fuse the leading radix-2 into a radix-8 pass.
pub struct C2cPlan {
    factors: Factors,
    twiddles: Vec<Sample>,
    scratch: Vec<Sample>,
}

impl C2cPlan {
    pub fn new(len: usize) -> Result<Self, FftError> {
        check_c2c_size(len)?;
        let factors = factor(len, FactorMode::Eight)?;
        let twiddles = c2c_twiddles(&factors);
        let scratch = vec![Sample::new(0.0, 0.0); len];
        Ok(Self { factors, twiddles, scratch })
    }

    pub fn len(&self) -> usize {
        self.factors.n
    }

    /// Runs one transform. `input` and `output` must be distinct slices,
    /// each of length `self.len()` — no aliasing is permitted (spec.md §7
    /// point 3: a precondition, not a recoverable error).
    pub fn process(&mut self, input: &[Sample], output: &mut [Sample], direction: Direction) {
        let n = self.factors.n;
        assert_eq!(input.len(), n);
        assert_eq!(output.len(), n);

        match self.factors.algorithm_flag {
            AlgorithmFlag::Mixed24 => match direction {
                Direction::Forward => {
                    kernel::forward(input, output, &mut self.scratch, &self.factors, &self.twiddles)
                }
                Direction::Inverse => {
                    kernel::inverse(input, output, &mut self.scratch, &self.factors, &self.twiddles)
                }
            },
            AlgorithmFlag::Any => {
                let inverse = direction == Direction::Inverse;
                dft::transform(input, output, inverse);
                if inverse {
                    let scale = 1.0 / n as f32;
                    for sample in output.iter_mut() {
                        *sample = *sample * scale;
                    }
                }
            }
        }
    }
}

/// A reusable real-to-complex transform of a fixed power-of-two length `N`
/// (spec.md §4.6's R2C plan). The split stage runs atop the plain radix-2/4
/// kernel (no radix-8 promotion) on `ncfft = N/2` samples.
pub struct R2cPlan {
    ncfft: usize,
    factors: Factors,
    twiddles: Vec<Sample>,
    super_twiddles: Vec<Sample>,
    /// Two `ncfft`-sized scratch regions: `scratch[..ncfft]` is the split
    /// stage's complex intermediate, `scratch[ncfft..]` is the kernel's
    /// ping-pong peer — mirroring `cfg->buffer`/`cfg->buffer + ncfft` in
    /// `ne10_fft_c2r_1d_float32_c`.
    scratch: Vec<Sample>,
    /// The real-input/real-output buffer reinterpreted as `ncfft` complex
    /// pairs, reused across calls like every other plan-owned array.
    packed: Vec<Sample>,
}

impl R2cPlan {
    pub fn new(len: usize) -> Result<Self, FftError> {
        check_r2c_size(len)?;
        let ncfft = len / 2;
        let factors = factor(ncfft, FactorMode::Default)?;
        let twiddles = c2c_twiddles(&factors);
        let super_twiddles = super_twiddles(ncfft);
        let scratch = vec![Sample::new(0.0, 0.0); 2 * ncfft];
        let packed = vec![Sample::new(0.0, 0.0); ncfft];
        Ok(Self {
            ncfft,
            factors,
            twiddles,
            super_twiddles,
            scratch,
            packed,
        })
    }

    /// The real-domain size `N` this plan was built for.
    pub fn len(&self) -> usize {
        self.ncfft * 2
    }

    /// Forward R2C: `input` is `N` real samples, `output` is `ncfft + 1`
    /// complex bins (spec.md §6's buffer-format note).
    pub fn forward(&mut self, input: &[f32], output: &mut [Sample]) {
        assert_eq!(input.len(), self.ncfft * 2);
        assert_eq!(output.len(), self.ncfft + 1);

        for (slot, pair) in self.packed.iter_mut().zip(input.chunks_exact(2)) {
            *slot = Sample::new(pair[0], pair[1]);
        }

        let (kernel_out, kernel_scratch) = self.scratch.split_at_mut(self.ncfft);
        kernel::forward(&self.packed, kernel_out, kernel_scratch, &self.factors, &self.twiddles);
        r2c_post_step(output, kernel_out, &self.super_twiddles, self.ncfft);
    }

    /// Inverse C2R: `input` is `ncfft + 1` complex bins, `output` is `N`
    /// real samples.
    pub fn inverse(&mut self, input: &[Sample], output: &mut [f32]) {
        assert_eq!(input.len(), self.ncfft + 1);
        assert_eq!(output.len(), self.ncfft * 2);

        let (pre, kernel_scratch) = self.scratch.split_at_mut(self.ncfft);
        c2r_pre_step(pre, input, &self.super_twiddles, self.ncfft);
        kernel::inverse(pre, &mut self.packed, kernel_scratch, &self.factors, &self.twiddles);

        for (pair, sample) in output.chunks_exact_mut(2).zip(self.packed.iter()) {
            pair[0] = sample.re;
            pair[1] = sample.im;
        }
    }
}
