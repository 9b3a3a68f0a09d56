//! Benchmarks comparing Fraction64 vs num-rational's Rational64
//!
//! Run with: cargo bench --bench fraction_benchmarks
//!
//! Both types reduce on every operation, so these measure the cost of the
//! trial-division gcd against num-integer's binary gcd on the same width.
//!
//! Key Performance Metrics:
//! - Construction (reduced, already coprime, zero)
//! - Arithmetic operations (add, sub, mul, div)
//! - Comparison operations
//! - GCD computation
//! - Real-world workloads (harmonic partial sums)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use num_rational::Rational64;
use reduced_fraction::{gcd, Fraction64};

// ============================================================================
// CONSTRUCTION BENCHMARKS
// ============================================================================

fn bench_new(c: &mut Criterion) {
    let mut group = c.benchmark_group("new");

    let test_cases = vec![
        ("reducible", (12_345i64, 67_890i64)),
        ("coprime", (7_919i64, 104_729i64)),
        ("negative_denom", (-360i64, -1_024i64)),
        ("zero", (0i64, 97i64)),
    ];

    for (name, (n, d)) in test_cases {
        group.bench_with_input(BenchmarkId::new("Fraction64", name), &(n, d), |b, &(n, d)| {
            b.iter(|| {
                let r = Fraction64::new(black_box(n), black_box(d)).unwrap();
                black_box(r);
            })
        });

        group.bench_with_input(BenchmarkId::new("num-rational", name), &(n, d), |b, &(n, d)| {
            b.iter(|| {
                let r = Rational64::new(black_box(n), black_box(d));
                black_box(r);
            })
        });
    }

    group.finish();
}

// ============================================================================
// ARITHMETIC BENCHMARKS
// ============================================================================

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    let (n1, d1, n2, d2) = (7i64, 16i64, 3i64, 8i64);
    let a = Fraction64::new(n1, d1).unwrap();
    let b = Fraction64::new(n2, d2).unwrap();
    let ra = Rational64::new(n1, d1);
    let rb = Rational64::new(n2, d2);

    group.bench_function("Fraction64/add", |bench| {
        bench.iter(|| black_box(black_box(a) + black_box(b)))
    });
    group.bench_function("num-rational/add", |bench| {
        bench.iter(|| black_box(black_box(ra) + black_box(rb)))
    });

    group.bench_function("Fraction64/sub", |bench| {
        bench.iter(|| black_box(black_box(a) - black_box(b)))
    });
    group.bench_function("num-rational/sub", |bench| {
        bench.iter(|| black_box(black_box(ra) - black_box(rb)))
    });

    group.bench_function("Fraction64/mul", |bench| {
        bench.iter(|| black_box(black_box(a) * black_box(b)))
    });
    group.bench_function("num-rational/mul", |bench| {
        bench.iter(|| black_box(black_box(ra) * black_box(rb)))
    });

    group.bench_function("Fraction64/div", |bench| {
        bench.iter(|| black_box(black_box(a) / black_box(b)))
    });
    group.bench_function("num-rational/div", |bench| {
        bench.iter(|| black_box(black_box(ra) / black_box(rb)))
    });

    group.finish();
}

fn bench_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparison");

    let test_cases = vec![
        ("equal", (1i64, 2i64), (1i64, 2i64)),
        ("close", (999i64, 1_000i64), (1_000i64, 1_001i64)),
        ("opposite_sign", (-1i64, 3i64), (1i64, 3i64)),
    ];

    for (name, (n1, d1), (n2, d2)) in test_cases {
        let a = Fraction64::new(n1, d1).unwrap();
        let b = Fraction64::new(n2, d2).unwrap();
        group.bench_with_input(BenchmarkId::new("Fraction64", name), &(a, b), |bench, (a, b)| {
            bench.iter(|| black_box(black_box(a).compare(black_box(b))))
        });

        let ra = Rational64::new(n1, d1);
        let rb = Rational64::new(n2, d2);
        group.bench_with_input(
            BenchmarkId::new("num-rational", name),
            &(ra, rb),
            |bench, (a, b)| bench.iter(|| black_box(black_box(a).cmp(black_box(b)))),
        );
    }

    group.finish();
}

fn bench_gcd(c: &mut Criterion) {
    let mut group = c.benchmark_group("gcd");

    let test_cases = vec![
        ("powers_of_two", (1i64 << 40, 1i64 << 33)),
        ("small_odd_factors", (3i64 * 5 * 7 * 11 * 13, 3i64 * 7 * 13 * 17)),
        ("coprime", (7_919i64, 104_729i64)),
        ("large_residue", (33i64 * 1_009, 143i64 * 1_009)),
    ];

    for (name, (x, y)) in test_cases {
        group.bench_with_input(BenchmarkId::new("gcd", name), &(x, y), |b, &(x, y)| {
            b.iter(|| black_box(gcd(black_box(x), black_box(y))))
        });
    }

    group.finish();
}

// ============================================================================
// REAL-WORLD WORKLOADS
// ============================================================================

/// Partial sums of the harmonic series, 1 + 1/2 + ... + 1/20.
///
/// lcm(1..=20) = 232792560, so every intermediate fits in i64.
fn bench_harmonic_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("harmonic_sum_20");

    group.bench_function("Fraction64", |b| {
        b.iter(|| {
            let mut sum = Fraction64::zero();
            for k in 1..=black_box(20i64) {
                sum = sum + Fraction64::new(1, k).unwrap();
            }
            black_box(sum);
        })
    });

    group.bench_function("num-rational", |b| {
        b.iter(|| {
            let mut sum = Rational64::from_integer(0);
            for k in 1..=black_box(20i64) {
                sum += Rational64::new(1, k);
            }
            black_box(sum);
        })
    });

    group.finish();
}

// ============================================================================
// BENCHMARK GROUPS
// ============================================================================

criterion_group!(basic_ops, bench_new, bench_arithmetic, bench_comparison, bench_gcd);

criterion_group!(real_world, bench_harmonic_sum);

criterion_main!(basic_ops, real_world);
