//! The complex sample type and the handful of hardcoded multiplies the
//! radix-8 promoted stage needs instead of a general complex product.

use num_complex::Complex32;

/// A single complex sample: a pair of 32-bit floats, value semantics, no identity.
pub type Sample = Complex32;

/// `x * (-i)`: swap real/imag and negate the new real part.
#[inline(always)]
pub fn mul_neg_i(x: Sample) -> Sample {
    Sample::new(x.im, -x.re)
}

/// `x * (+i)`: swap real/imag and negate the new imag part.
#[inline(always)]
pub fn mul_i(x: Sample) -> Sample {
    Sample::new(-x.im, x.re)
}

/// `x * (T8 - T8*i)`, the forward radix-8 twiddle, computed without a general
/// complex multiply (`T8 = sqrt(2)/2`).
#[inline(always)]
pub fn mul_t81_minus(x: Sample, t8: f32) -> Sample {
    Sample::new((x.re + x.im) * t8, (x.im - x.re) * t8)
}

/// `x * (T8 + T8*i)`, the forward radix-8 twiddle.
#[inline(always)]
pub fn mul_t81_plus(x: Sample, t8: f32) -> Sample {
    Sample::new((x.re - x.im) * t8, (x.im + x.re) * t8)
}

/// `sqrt(2)/2`, the hardcoded radix-8 twiddle magnitude (`T8` in spec.md §3/§4.3).
///
/// The inverse kernel reuses `mul_t81_plus`/`mul_t81_minus` with the roles
/// swapped (conjugating `T8 ± T8*i` swaps which one applies where) rather
/// than defining separate conjugate variants.
pub const T8: f32 = std::f32::consts::FRAC_1_SQRT_2;
