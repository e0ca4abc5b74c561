use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use triple_os_core::catalog::ReferenceData;
use triple_os_core::pipeline::TripleOsAnalyzer;
use triple_os_core::synergy::SynergyAnalyzer;
use triple_os_core::vector::{Answer, Dimension, ScoringDelta};

fn questionnaire() -> Vec<Answer> {
    (1..=30u32)
        .map(|q| {
            let dim = Dimension::ALL[q as usize % 8];
            let d = ScoringDelta::ZERO.with(dim, f64::from(q % 5) + 0.5);
            if q <= 24 {
                Answer::new(format!("q{q}"), d)
            } else {
                let other = ScoringDelta::ZERO.with(Dimension::ALL[(q as usize + 3) % 8], 1.0);
                Answer::scenario(format!("q{q}"), d, other)
            }
        })
        .collect()
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let analyzer = TripleOsAnalyzer::new(ReferenceData::builtin().shared());
    let answers = questionnaire();
    group.bench_function("analyze_30_answers", |b| {
        b.iter(|| criterion::black_box(analyzer.analyze(criterion::black_box(&answers))));
    });
    group.finish();
}

fn bench_synergy(c: &mut Criterion) {
    let mut group = c.benchmark_group("synergy");
    let analyzer = SynergyAnalyzer::new(ReferenceData::builtin().shared());
    group.bench_function("single_pair", |b| {
        b.iter(|| criterion::black_box(analyzer.compute_synergy(criterion::black_box(17), 44)));
    });
    group.bench_function("matrix_64x64", |b| {
        b.iter_batched(
            || analyzer.clone(),
            |a| criterion::black_box(a.matrix()),
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(benches, bench_pipeline, bench_synergy);
criterion_main!(benches);
