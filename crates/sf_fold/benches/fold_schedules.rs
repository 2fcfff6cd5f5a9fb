use std::hint::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::BenchmarkId;
use criterion::Criterion;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sf_energy::Base;
use sf_energy::StackingModel;
use sf_fold::fold;
use sf_fold::fold_parallel;
use sf_fold::reconstruct;

fn random_sequence(len: usize) -> Vec<Base> {
    let bases = [Base::A, Base::C, Base::G, Base::U];
    let mut rng = StdRng::seed_from_u64(42);
    (0..len).map(|_| bases[rng.random_range(0..4)]).collect()
}

fn bench_fold(c: &mut Criterion) {
    let model = StackingModel::default();
    let mut group = c.benchmark_group("fold");
    group.sample_size(10);

    for len in [50, 100, 250, 500] {
        let sequence = random_sequence(len);
        group.bench_with_input(BenchmarkId::new("sequential", len), &sequence, |b, s| {
            b.iter(|| fold(black_box(s), &model))
        });
        group.bench_with_input(BenchmarkId::new("wavefront", len), &sequence, |b, s| {
            b.iter(|| fold_parallel(black_box(s), &model))
        });
    }
    group.finish();
}

fn bench_reconstruct(c: &mut Criterion) {
    let model = StackingModel::default();
    let sequence = random_sequence(500);
    let tables = fold(&sequence, &model);

    c.bench_function("reconstruct_len500", |b| {
        b.iter(|| reconstruct(black_box(&tables), &sequence, &model))
    });
}

criterion_group!(benches, bench_fold, bench_reconstruct);
criterion_main!(benches);
