//! The real/complex split step that turns an `ncfft`-point complex C2C
//! transform of packed real input into a size-`2*ncfft` real spectrum, and
//! back (spec.md §4.5). Grounded on `ne10_fft_split_r2c_1d_float32` /
//! `ne10_fft_split_c2r_1d_float32`.

use crate::complex::Sample;

/// Post-step after the forward C2C kernel: unpacks the `ncfft`-point complex
/// transform of the interleaved real pairs into the `ncfft + 1` usable bins
/// of the real spectrum (`dst[0..=ncfft]`; `dst` must have length `ncfft + 1`).
pub fn r2c_post_step(dst: &mut [Sample], src: &[Sample], super_twiddles: &[Sample], ncfft: usize) {
    let tdc = src[0];
    dst[0] = Sample::new(tdc.re + tdc.im, 0.0);
    dst[ncfft] = Sample::new(tdc.re - tdc.im, 0.0);

    for k in 1..=ncfft / 2 {
        let fpk = src[k];
        let fpnk = src[ncfft - k].conj();

        let f1k = fpk + fpnk;
        let f2k = fpk - fpnk;

        let tw = f2k * super_twiddles[k - 1];

        dst[k] = (f1k + tw) * 0.5;
        dst[ncfft - k] = Sample::new((f1k.re - tw.re) * 0.5, (tw.im - f1k.im) * 0.5);
    }
}

/// Pre-step before the inverse C2C kernel: packs the `ncfft + 1` usable bins
/// of a real spectrum (`src[0..=ncfft]`) back into an `ncfft`-point complex
/// sequence the kernel can invert (`dst` must have length `ncfft`).
pub fn c2r_pre_step(dst: &mut [Sample], src: &[Sample], super_twiddles: &[Sample], ncfft: usize) {
    dst[0] = Sample::new((src[0].re + src[ncfft].re) * 0.5, (src[0].re - src[ncfft].re) * 0.5);

    for k in 1..=ncfft / 2 {
        let fk = src[k];
        let fnkc = src[ncfft - k].conj();

        let fek = fk + fnkc;
        let tmp = fk - fnkc;

        let tw = super_twiddles[k - 1];
        let fok = Sample::new(tmp.re * tw.re + tmp.im * tw.im, tmp.im * tw.re - tmp.re * tw.im);

        dst[k] = (fek + fok) * 0.5;
        dst[ncfft - k] = Sample::new((fek.re - fok.re) * 0.5, (fok.im - fek.im) * 0.5);
    }
}
