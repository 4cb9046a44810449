use criterion::{Criterion, black_box, criterion_group, criterion_main};
use vecrank::metric::MetricKind;
use vecrank::ranker::{Candidate, SimilarityRanker};
use vecrank::vector::Vector;

fn generate_test_vectors(count: usize, dimension: usize) -> Vec<Vec<f32>> {
    let mut vectors = Vec::with_capacity(count);
    for i in 0..count {
        let mut data = Vec::with_capacity(dimension);
        for j in 0..dimension {
            let value = ((i as f32 * 0.1 + j as f32 * 0.01).sin() * 0.5 + 0.5) * 2.0 - 1.0;
            data.push(value);
        }
        vectors.push(data);
    }
    vectors
}

fn bench_metrics(c: &mut Criterion) {
    let dimension = 128;
    let vectors = generate_test_vectors(101, dimension);
    let query = &vectors[0];
    let targets = &vectors[1..101];

    let mut group = c.benchmark_group("metric_score");

    for metric in [
        MetricKind::Cosine,
        MetricKind::Euclidean,
        MetricKind::DotProduct,
        MetricKind::Manhattan,
    ] {
        group.bench_function(metric.name(), |b| {
            b.iter(|| {
                for target in targets {
                    let _ = black_box(metric.score(black_box(query), black_box(target)));
                }
            })
        });
    }

    group.finish();
}

fn bench_rank(c: &mut Criterion) {
    let dimension = 128;
    let vectors = generate_test_vectors(1001, dimension);
    let query = Vector::new(vectors[0].clone());
    let candidates: Vec<Candidate> = vectors[1..]
        .iter()
        .enumerate()
        .map(|(i, data)| Candidate::new(format!("c{i}"), data.clone()))
        .collect();

    let mut group = c.benchmark_group("rank_top_10");

    for metric in [MetricKind::Cosine, MetricKind::Euclidean] {
        let ranker = SimilarityRanker::new(metric);
        group.bench_function(metric.name(), |b| {
            b.iter(|| {
                let results = ranker
                    .rank(black_box(&query), black_box(&candidates), 10)
                    .unwrap();
                black_box(results)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_metrics, bench_rank);
criterion_main!(benches);
