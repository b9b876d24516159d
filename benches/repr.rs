use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use numrepr::{repr, DecimalValue, FloatMode, IntMode, Mode, NumericValue};

fn benchmark_exact_double(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact_double");

    let cases = [
        ("small_normal", 0.1 + 0.2),
        ("large_normal", f64::MAX),
        ("subnormal", f64::from_bits(1)),
    ];
    for (name, v) in cases {
        let value = NumericValue::from(v);
        group.bench_with_input(BenchmarkId::from_parameter(name), &value, |b, value| {
            b.iter(|| repr(black_box(value), Mode::Float(FloatMode::Exact)))
        });
    }
    group.finish();
}

fn benchmark_exact_widths(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact_widths");

    let half = NumericValue::from(numrepr::f16::from_f32(0.333_333_34));
    let single = NumericValue::from(0.333_333_34f32);
    let double = NumericValue::from(0.333_333_333_333_333_3f64);
    for (name, value) in [("half", half), ("single", single), ("double", double)] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &value, |b, value| {
            b.iter(|| repr(black_box(value), Mode::Float(FloatMode::Exact)))
        });
    }
    group.finish();
}

fn benchmark_decimal(c: &mut Criterion) {
    let pi = DecimalValue::from_words(0x41B6_5F29, 0x0B14_3885, 0x6582_A536, 28, false).unwrap();
    let value = NumericValue::from(pi);

    c.bench_function("decimal_exact", |b| {
        b.iter(|| repr(black_box(&value), Mode::Float(FloatMode::Exact)))
    });
    c.bench_function("decimal_raw_bytes", |b| {
        b.iter(|| repr(black_box(&value), Mode::Float(FloatMode::RawBytesHex)))
    });
}

fn benchmark_integer_bases(c: &mut Criterion) {
    let mut group = c.benchmark_group("integer_bases");

    let value = NumericValue::from(i128::MIN);
    for (name, mode) in [
        ("binary", IntMode::Binary),
        ("quaternary", IntMode::Quaternary),
        ("octal", IntMode::Octal),
        ("hex", IntMode::Hex),
        ("decimal", IntMode::Decimal),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &value, |b, value| {
            b.iter(|| repr(black_box(value), Mode::Int(mode)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_exact_double,
    benchmark_exact_widths,
    benchmark_decimal,
    benchmark_integer_bases
);
criterion_main!(benches);
