use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mazeai::algorithms::RndPrims;
use mazeai::dims::Dims;

const DIMS: Dims = Dims(100, 100);

pub fn prims_tree(c: &mut Criterion) {
    c.bench_function("prims_tree", |b| {
        b.iter(|| RndPrims::generate(black_box(DIMS), black_box(false), Some(7)).unwrap())
    });
}

pub fn prims_loopy(c: &mut Criterion) {
    c.bench_function("prims_loopy", |b| {
        b.iter(|| RndPrims::generate(black_box(DIMS), black_box(true), Some(7)).unwrap())
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = prims_tree, prims_loopy}
criterion_main!(benches);
