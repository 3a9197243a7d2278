use criterion::{black_box, Criterion, criterion_group};

use refrac::F;

pub fn add_same_denominator(c: &mut Criterion) {
    c.bench_function("add with equal denominators", |b| b.iter(|| {
        black_box(F!(1, 7)) + black_box(F!(3, 7))
    }));
}

pub fn add_cross_multiplied(c: &mut Criterion) {
    c.bench_function("add with different denominators", |b| b.iter(|| {
        black_box(F!(5, 12)) + black_box(F!(7, 18))
    }));
}

pub fn divide(c: &mut Criterion) {
    c.bench_function("divide", |b| b.iter(|| {
        black_box(F!(-27, 45)) / black_box(F!(9, 10))
    }));
}

pub fn reduce_large(c: &mut Criterion) {
    c.bench_function("reduce with a long Euclidean chain", |b| b.iter(|| {
        black_box(F!(832_040, 1_346_269)).reduced()
    }));
}

criterion_group!(arithmetic,
    add_same_denominator,
    add_cross_multiplied,
    divide,
    reduce_large,
);
