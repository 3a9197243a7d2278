use criterion::{black_box, Criterion, criterion_group};

use refrac::Fraction;

pub fn fraction_notation(c: &mut Criterion) {
    c.bench_function("parse fraction notation", |b| b.iter(|| {
        Fraction::from_string(black_box("-123/456"))
    }));
}

pub fn repeating_decimal(c: &mut Criterion) {
    c.bench_function("parse repeating decimal", |b| b.iter(|| {
        Fraction::from_string(black_box("12.34(567)"))
    }));
}

pub fn rejected(c: &mut Criterion) {
    c.bench_function("parse invalid text", |b| b.iter(|| {
        Fraction::from_string(black_box("12.34(5x7)"))
    }));
}

criterion_group!(parse,
    fraction_notation,
    repeating_decimal,
    rejected,
);
