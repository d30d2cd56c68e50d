//! Benchmarks for gfpoly arithmetic and irreducibility testing.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use gfpoly::{find_irreducible, Modulus, Poly};

// Largest prime below 2^31
const P: u64 = 2147483647;

fn sample(modulus: Modulus, len: usize) -> Poly {
    let coeffs: Vec<i64> = (0..len as i64).map(|i| i * 7919 + 1).collect();
    Poly::new(&coeffs, modulus)
}

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Poly Arithmetic");
    let m = Modulus::new(P).unwrap();

    for len in [16usize, 64, 256] {
        let a = sample(m, len);
        let b = sample(m, len / 2);

        group.bench_with_input(BenchmarkId::new("mul", len), &len, |bencher, _| {
            bencher.iter(|| black_box(&a) * black_box(&b))
        });

        group.bench_with_input(BenchmarkId::new("div_rem", len), &len, |bencher, _| {
            bencher.iter(|| black_box(&a).div_rem(black_box(&b)))
        });
    }

    group.finish();
}

fn bench_pow_x(c: &mut Criterion) {
    let mut group = c.benchmark_group("Modular Exponentiation");
    let m = Modulus::new(P).unwrap();
    let f = sample(m, 17);

    group.bench_function("pow_x_p", |bencher| {
        bencher.iter(|| black_box(&f).pow_x(black_box(P)))
    });

    group.bench_function("frobenius_4", |bencher| {
        bencher.iter(|| black_box(&f).pow_x_frobenius(black_box(4)))
    });

    group.finish();
}

fn bench_irreducibility(c: &mut Criterion) {
    let mut group = c.benchmark_group("Irreducibility");

    // x^4 + x + 1 over GF(2), and degree 16 over a word-sized prime
    let small = Poly::new(&[1, 1, 0, 0, 1], Modulus::new(2).unwrap());
    group.bench_function("rabin_gf2_deg4", |bencher| {
        bencher.iter(|| black_box(&small).is_irreducible())
    });

    let large = sample(Modulus::new(P).unwrap(), 17);
    group.bench_function("rabin_large_deg16", |bencher| {
        bencher.iter(|| black_box(&large).is_irreducible())
    });

    for degree in [4usize, 8, 12] {
        let m = Modulus::new(3).unwrap();
        group.bench_with_input(
            BenchmarkId::new("find_irreducible_gf3", degree),
            &degree,
            |bencher, &degree| bencher.iter(|| find_irreducible(black_box(m), degree)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_arithmetic, bench_pow_x, bench_irreducibility);
criterion_main!(benches);
