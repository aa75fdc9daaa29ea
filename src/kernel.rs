//! The mixed-radix butterfly kernel (spec.md §4.4): a forward and an inverse
//! walk of the factor schedule, ping-ponging between the caller's output
//! buffer and the plan's scratch buffer. Grounded on
//! `ne10_mixed_radix_butterfly_float32_c` / `..._inverse_float32_c`.

use crate::complex::{mul_i, mul_neg_i, mul_t81_minus, mul_t81_plus, Sample, T8};
use crate::factor::Factors;

/// Runs the forward radix-2/4/8 kernel. `input`, `output`, and `scratch` must
/// each have length `factors.n`.
pub fn forward(input: &[Sample], output: &mut [Sample], scratch: &mut [Sample], factors: &Factors, twiddles: &[Sample]) {
    run(input, output, scratch, factors, twiddles, false);
}

/// Runs the inverse radix-2/4/8 kernel, including the `1/n` scale (spec.md
/// §4.4's Scaling paragraph; see DESIGN.md for the scale-flag asymmetry this
/// preserves as observed).
pub fn inverse(input: &[Sample], output: &mut [Sample], scratch: &mut [Sample], factors: &Factors, twiddles: &[Sample]) {
    run(input, output, scratch, factors, twiddles, true);
}

fn run(input: &[Sample], output: &mut [Sample], scratch: &mut [Sample], factors: &Factors, twiddles: &[Sample], inverse: bool) {
    let n = factors.n;
    assert_eq!(input.len(), n);
    assert_eq!(output.len(), n);
    assert_eq!(scratch.len(), n);

    if n == 2 {
        let (a, b) = (input[0], input[1]);
        let scale = if inverse { 0.5 } else { 1.0 };
        output[0] = (a + b) * scale;
        output[1] = (a - b) * scale;
        return;
    }

    let promoted = factors.is_promoted();
    let leading_radix = if promoted { 8 } else { factors.first_radix() };
    match leading_radix {
        8 => radix8_first_stage(input, output, n / 2, inverse),
        4 => radix4_first_stage(input, output, n / 4, inverse),
        _ => radix2_first_stage(input, output, n / 2),
    }

    let trailing = factors.trailing_stage_strides();
    if trailing.is_empty() {
        if inverse {
            let scale = 1.0 / n as f32;
            for sample in &mut output[..leading_radix] {
                *sample = *sample * scale;
            }
        }
        return;
    }

    let step = n / 4;
    let last = trailing.len() - 1;
    let mut tw_cursor = 0usize;

    for (i, (fstride, mstride)) in trailing.iter().copied().enumerate() {
        let tw = &twiddles[tw_cursor..tw_cursor + 3 * mstride];
        tw_cursor += 3 * mstride;

        let src_is_output = i % 2 == 0;
        let store_stride = if i == last { step } else { mstride };

        if i == last && src_is_output {
            // The forced final destination collides with the natural source;
            // break the alias by staging the current output through scratch.
            scratch.copy_from_slice(output);
            radix4_twiddle_stage(scratch, output, tw, fstride, mstride, step, store_stride, inverse);
        } else if src_is_output {
            radix4_twiddle_stage(output, scratch, tw, fstride, mstride, step, store_stride, inverse);
        } else {
            radix4_twiddle_stage(scratch, output, tw, fstride, mstride, step, store_stride, inverse);
        }
    }

    if inverse {
        let scale = 1.0 / n as f32;
        for sample in output.iter_mut() {
            *sample = *sample * scale;
        }
    }
}

/// Plain (unpromoted) radix-2 first stage: used only under `FactorMode::Default`
/// when `n` is `2^(odd)` and the kernel is told not to fuse the leading
/// radix-2 into a radix-8 pass (spec.md §4.6's R2C note). No twiddle is
/// needed for a radix-2 butterfly, and +/- combine the same way forward and
/// inverse, so there's no `inverse` branch here — identical in shape to the
/// `n == 2` base case above, just run over `fstride` sections instead of one.
fn radix2_first_stage(src: &[Sample], dst: &mut [Sample], fstride: usize) {
    for f in 0..fstride {
        let in0 = src[f];
        let in1 = src[f + fstride];
        dst[2 * f] = in0 + in1;
        dst[2 * f + 1] = in0 - in1;
    }
}

fn radix4_first_stage(src: &[Sample], dst: &mut [Sample], fstride: usize, inverse: bool) {
    for f in 0..fstride {
        let in0 = src[f];
        let in1 = src[f + fstride];
        let in2 = src[f + 2 * fstride];
        let in3 = src[f + 3 * fstride];

        let s0 = in0 + in2;
        let s1 = in0 - in2;
        let s2 = in1 + in3;
        let s3 = in1 - in3;

        let base = f * 4;
        dst[base] = s0 + s2;
        dst[base + 2] = s0 - s2;
        if !inverse {
            dst[base + 1] = Sample::new(s1.re + s3.im, s1.im - s3.re);
            dst[base + 3] = Sample::new(s1.re - s3.im, s1.im + s3.re);
        } else {
            dst[base + 1] = Sample::new(s1.re - s3.im, s1.im + s3.re);
            dst[base + 3] = Sample::new(s1.re + s3.im, s1.im - s3.re);
        }
    }
}

fn radix8_first_stage(src: &[Sample], dst: &mut [Sample], fstride: usize, inverse: bool) {
    let fstride1 = fstride / 4;
    for f in 0..fstride1 {
        let in0 = src[f] + src[f + fstride];
        let in1 = src[f] - src[f + fstride];
        let in2 = src[f + fstride1] + src[f + fstride1 + fstride];
        let in3 = src[f + fstride1] - src[f + fstride1 + fstride];
        let in4 = src[f + 2 * fstride1] + src[f + 2 * fstride1 + fstride];
        let in5 = src[f + 2 * fstride1] - src[f + 2 * fstride1 + fstride];
        let in6 = src[f + 3 * fstride1] + src[f + 3 * fstride1 + fstride];
        let in7 = src[f + 3 * fstride1] - src[f + 3 * fstride1 + fstride];

        let (s3, s5, s7) = if !inverse {
            (mul_t81_minus(in3, T8), mul_neg_i(in5), mul_t81_plus(in7, T8))
        } else {
            (mul_t81_plus(in3, T8), mul_i(in5), mul_t81_minus(in7, T8))
        };

        let s8 = in0 + in4;
        let s9 = in1 + s5;
        let s10 = in0 - in4;
        let s11 = in1 - s5;
        let s12 = in2 + in6;
        let s13 = s3 - s7;
        let s14 = in2 - in6;
        let s15 = s3 + s7;

        let base = f * 8;
        dst[base] = s8 + s12;
        dst[base + 1] = s9 + s13;
        dst[base + 4] = s8 - s12;
        dst[base + 5] = s9 - s13;
        if !inverse {
            dst[base + 2] = Sample::new(s10.re + s14.im, s10.im - s14.re);
            dst[base + 3] = Sample::new(s11.re + s15.im, s11.im - s15.re);
            dst[base + 6] = Sample::new(s10.re - s14.im, s10.im + s14.re);
            dst[base + 7] = Sample::new(s11.re - s15.im, s11.im + s15.re);
        } else {
            dst[base + 2] = Sample::new(s10.re - s14.im, s10.im + s14.re);
            dst[base + 3] = Sample::new(s11.re - s15.im, s11.im + s15.re);
            dst[base + 6] = Sample::new(s10.re + s14.im, s10.im - s14.re);
            dst[base + 7] = Sample::new(s11.re + s15.im, s11.im - s15.re);
        }
    }
}

/// One twiddled radix-4 butterfly stage: `fstride` sections of `mstride`
/// butterflies each, reading inputs spaced by `step` and storing outputs
/// spaced by `store_stride` (`mstride` for a middle stage, `step` for the
/// last — spec.md §4.4).
#[allow(clippy::too_many_arguments)]
fn radix4_twiddle_stage(
    src: &[Sample],
    dst: &mut [Sample],
    tw: &[Sample],
    fstride: usize,
    mstride: usize,
    step: usize,
    store_stride: usize,
    inverse: bool,
) {
    for f in 0..fstride {
        let section_base = f * mstride * 4;
        for k in 0..mstride {
            let cursor = f * mstride + k;
            let in0 = src[cursor];
            let in1 = src[cursor + step];
            let in2 = src[cursor + 2 * step];
            let in3 = src[cursor + 3 * step];
            let (tw0, tw1, tw2) = (tw[k], tw[mstride + k], tw[2 * mstride + k]);

            let (t1, t2, t3) = if inverse {
                (in1 * tw0.conj(), in2 * tw1.conj(), in3 * tw2.conj())
            } else {
                (in1 * tw0, in2 * tw1, in3 * tw2)
            };

            let s4 = in0 + t2;
            let s5 = in0 - t2;
            let s6 = t1 + t3;
            let s7 = t1 - t3;

            let dst_cursor = section_base + k;
            dst[dst_cursor] = s4 + s6;
            dst[dst_cursor + 2 * store_stride] = s4 - s6;
            if !inverse {
                dst[dst_cursor + store_stride] = Sample::new(s5.re + s7.im, s5.im - s7.re);
                dst[dst_cursor + 3 * store_stride] = Sample::new(s5.re - s7.im, s5.im + s7.re);
            } else {
                dst[dst_cursor + store_stride] = Sample::new(s5.re - s7.im, s5.im + s7.re);
                dst[dst_cursor + 3 * store_stride] = Sample::new(s5.re + s7.im, s5.im - s7.re);
            }
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::factor::{factor, FactorMode};
    use crate::twiddle::c2c_twiddles;

    fn round_trip(n: usize) {
        let factors = factor(n, FactorMode::Eight).unwrap();
        let twiddles = c2c_twiddles(&factors);
        let input: Vec<Sample> = (0..n).map(|i| Sample::new(i as f32, -(i as f32))).collect();

        let mut spectrum = vec![Sample::new(0.0, 0.0); n];
        let mut scratch = vec![Sample::new(0.0, 0.0); n];
        forward(&input, &mut spectrum, &mut scratch, &factors, &twiddles);

        let mut result = vec![Sample::new(0.0, 0.0); n];
        inverse(&spectrum, &mut result, &mut scratch, &factors, &twiddles);

        for (a, b) in input.iter().zip(result.iter()) {
            assert!((a.re - b.re).abs() < 1e-3, "n={n} re mismatch {a:?} vs {b:?}");
            assert!((a.im - b.im).abs() < 1e-3, "n={n} im mismatch {a:?} vs {b:?}");
        }
    }

    #[test]
    fn round_trips_across_sizes() {
        for n in [2, 4, 8, 16, 32, 64, 128, 256] {
            round_trip(n);
        }
    }

    #[test]
    fn dc_only_for_all_ones_input() {
        let n = 8;
        let factors = factor(n, FactorMode::Eight).unwrap();
        let twiddles = c2c_twiddles(&factors);
        let input = vec![Sample::new(1.0, 0.0); n];
        let mut out = vec![Sample::new(0.0, 0.0); n];
        let mut scratch = vec![Sample::new(0.0, 0.0); n];
        forward(&input, &mut out, &mut scratch, &factors, &twiddles);

        assert!((out[0].re - 8.0).abs() < 1e-4);
        assert!(out[0].im.abs() < 1e-4);
        for bin in &out[1..] {
            assert!(bin.re.abs() < 1e-4 && bin.im.abs() < 1e-4);
        }
    }

    #[test]
    fn n4_matches_hand_worked_example() {
        let n = 4;
        let factors = factor(n, FactorMode::Default).unwrap();
        let twiddles = c2c_twiddles(&factors);
        let input: Vec<Sample> = [1.0, 2.0, 3.0, 4.0].iter().map(|&r| Sample::new(r, 0.0)).collect();
        let mut out = vec![Sample::new(0.0, 0.0); n];
        let mut scratch = vec![Sample::new(0.0, 0.0); n];
        forward(&input, &mut out, &mut scratch, &factors, &twiddles);

        let expected = [(10.0, 0.0), (-2.0, 2.0), (-2.0, 0.0), (-2.0, -2.0)];
        for (got, (re, im)) in out.iter().zip(expected.iter()) {
            assert!((got.re - re).abs() < 1e-4);
            assert!((got.im - im).abs() < 1e-4);
        }
    }
}
