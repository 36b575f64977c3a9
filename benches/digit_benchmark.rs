// ============================================================================
// Decimal Digits Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Addition - Carry propagation across growing widths
// 2. Subtraction - Borrow chains, including whole-magnitude underflow
// 3. Packing - Compression, random access and in-place writes
//
// Array Size Notes:
// - Up to 24 digits stay inline (no heap allocation)
// - Larger widths exercise the spilled representation
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use decimal_digits::prelude::*;
use std::hint::black_box;

const WIDTHS: [usize; 3] = [8, 24, 256];

fn nines(width: usize) -> DigitArray {
    DigitArray::from(vec![9i8; width])
}

fn one_then_zeros(width: usize) -> DigitArray {
    let mut digits = vec![0i8; width];
    digits[0] = 1;
    DigitArray::from(digits)
}

fn last_digit(width: usize, digit: i8) -> DigitArray {
    let mut digits = vec![0i8; width];
    digits[width - 1] = digit;
    DigitArray::from(digits)
}

// ============================================================================
// Addition Benchmarks
// Full carry chain: 99..9 + 00..1
// ============================================================================

fn benchmark_addition(c: &mut Criterion) {
    let mut group = c.benchmark_group("addition");

    for width in WIDTHS.iter() {
        let a = nines(*width);
        let b = last_digit(*width, 1);

        group.bench_with_input(
            BenchmarkId::new("carry_chain", width),
            &(&a, &b),
            |bench, (a, b)| bench.iter(|| black_box(*a + *b)),
        );

        let config = ArithmeticConfig::decimal_places();
        group.bench_with_input(
            BenchmarkId::new("leading_alignment", width),
            &(&a, &b),
            |bench, (a, b)| bench.iter(|| black_box(a.add_with(b, &config))),
        );
    }

    group.finish();
}

// ============================================================================
// Subtraction Benchmarks
// Borrow chain: 10..0 - 00..1, and underflow: 00..0 - 00..1
// ============================================================================

fn benchmark_subtraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("subtraction");

    for width in WIDTHS.iter() {
        let subtrahend = last_digit(*width, 1);

        let minuend = one_then_zeros(*width);
        group.bench_with_input(
            BenchmarkId::new("borrow_chain", width),
            &(&minuend, &subtrahend),
            |bench, (a, b)| bench.iter(|| black_box(*a - *b)),
        );

        let zero = DigitArray::from(vec![0i8; *width]);
        group.bench_with_input(
            BenchmarkId::new("underflow_and_resolve", width),
            &(&zero, &subtrahend),
            |bench, (a, b)| bench.iter(|| black_box((*a - *b).resolve_overflow())),
        );
    }

    group.finish();
}

// ============================================================================
// Packing Benchmarks
// ============================================================================

fn benchmark_packing(c: &mut Criterion) {
    let mut group = c.benchmark_group("packing");

    for width in WIDTHS.iter() {
        let source = nines(*width);

        group.bench_with_input(BenchmarkId::new("compress", width), &source, |bench, source| {
            bench.iter(|| black_box(MemoryCompressedDigitArray::try_from(source)))
        });

        let packed = MemoryCompressedDigitArray::try_from(&source).unwrap();
        group.bench_with_input(BenchmarkId::new("get_all", width), &packed, |bench, packed| {
            bench.iter(|| black_box(packed.iter_digits().map(i32::from).sum::<i32>()))
        });

        group.bench_with_input(BenchmarkId::new("set_all", width), &packed, |bench, packed| {
            bench.iter(|| {
                let mut packed = packed.clone();
                for index in 0..packed.digit_count() {
                    packed.set(index, (index % 10) as i8).unwrap();
                }
                black_box(packed)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_addition,
    benchmark_subtraction,
    benchmark_packing
);
criterion_main!(benches);
