//! Criterion benchmark across representative sizes, style grounded on
//! `calebzulawski-fourier/fourier-bench` and the `BastianAsmussen-fft-rs`
//! manifest (both benchmark their FFT core with criterion).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mixed_radix_fft::{C2cPlan, Direction, R2cPlan, Sample};

fn c2c_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("c2c_forward");
    for &n in &[64usize, 256, 1024, 4096, 16384] {
        let mut plan = C2cPlan::new(n).unwrap();
        let input: Vec<Sample> = (0..n).map(|i| Sample::new(i as f32, -(i as f32))).collect();
        let mut output = vec![Sample::new(0.0, 0.0); n];

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| plan.process(black_box(&input), black_box(&mut output), Direction::Forward));
        });
    }
    group.finish();
}

fn r2c_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("r2c_forward");
    for &n in &[64usize, 256, 1024, 4096, 16384] {
        let mut plan = R2cPlan::new(n).unwrap();
        let input: Vec<f32> = (0..n).map(|i| i as f32).collect();
        let mut output = vec![Sample::new(0.0, 0.0); n / 2 + 1];

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| plan.forward(black_box(&input), black_box(&mut output)));
        });
    }
    group.finish();
}

criterion_group!(benches, c2c_benchmark, r2c_benchmark);
criterion_main!(benches);
