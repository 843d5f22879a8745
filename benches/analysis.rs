use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use satlens::School;
use satlens::analysis::{
    get_best_math_schools, get_borough_stats, get_top_schools_by_total_sat,
};
use std::hint::black_box;

const BOROUGHS: [&str; 5] = ["Bronx", "Brooklyn", "Manhattan", "Queens", "Staten Island"];

fn synthetic_schools(n: usize) -> Vec<School> {
    (0..n)
        .map(|i| {
            let base = 300.0 + ((i * 37) % 450) as f64;
            School::new(
                i,
                format!("School {}", i),
                BOROUGHS[i % BOROUGHS.len()],
                base,
                base - 10.0,
                base + 5.0,
            )
        })
        .collect()
}

fn analysis_benchmark(c: &mut Criterion) {
    let small = synthetic_schools(400);
    let large = synthetic_schools(40_000);

    let mut group = c.benchmark_group("analysis");

    for (label, schools) in [("400", &small), ("40k", &large)] {
        group.throughput(Throughput::Elements(schools.len() as u64));
        group.bench_function(format!("best_math_{}", label), |b| {
            b.iter(|| get_best_math_schools(black_box(schools), 640.0))
        });
        group.bench_function(format!("top_10_{}", label), |b| {
            b.iter(|| get_top_schools_by_total_sat(black_box(schools), 10))
        });
        group.bench_function(format!("borough_stats_{}", label), |b| {
            b.iter(|| get_borough_stats(black_box(schools)))
        });
    }

    group.finish();
}

criterion_group!(benches, analysis_benchmark);
criterion_main!(benches);
