use criterion::criterion_main;

mod arithmetic;
mod parse;

criterion_main!(parse::parse, arithmetic::arithmetic);
