use criterion::{Criterion, black_box, criterion_group, criterion_main};
use luach_core::{GregorianDate, HebrewDate, candles, days_in_year, elapsed_days, gregorian, hebrew};

fn year_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("year");
    group.bench_function("elapsed_days", |b| b.iter(|| elapsed_days(black_box(5785))));
    group.bench_function("days_in_year", |b| b.iter(|| days_in_year(black_box(5785))));
    group.finish();
}

fn conversion_bench(c: &mut Criterion) {
    let date = HebrewDate::new(5785, 5, 9);
    let civil = GregorianDate::new(2025, 8, 3);
    let days = 45_870;

    let mut group = c.benchmark_group("conversion");
    group.bench_function("hebrew_to_linear", |b| {
        b.iter(|| hebrew::to_linear(black_box(date)))
    });
    group.bench_function("hebrew_from_linear", |b| {
        b.iter(|| hebrew::from_linear(black_box(days)))
    });
    group.bench_function("gregorian_to_linear", |b| {
        b.iter(|| gregorian::to_linear(black_box(civil)))
    });
    group.bench_function("gregorian_from_linear", |b| {
        b.iter(|| gregorian::from_linear(black_box(days)))
    });
    group.bench_function("hanukkah_candles", |b| b.iter(|| candles(black_box(days))));
    group.finish();
}

criterion_group!(benches, year_bench, conversion_bench);
criterion_main!(benches);
