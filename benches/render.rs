#[macro_use]
extern crate criterion;
extern crate julia;

use criterion::Criterion;
use julia::{memberships, Complex, Julia, JuliaParams, Silent};

fn escape_from_origin(c: &mut Criterion) {
    let julia = Julia::new(JuliaParams::default()).unwrap();
    c.bench_function("escape_step origin", move |b| {
        b.iter(|| julia.escape_step(Complex::new(0.0, 0.0)))
    });
}

fn grid_128(c: &mut Criterion) {
    let julia = Julia::new(JuliaParams::default().with_dim(128)).unwrap();
    c.bench_function("memberships 128x128", move |b| {
        b.iter(|| memberships(&julia, 1, &Silent).unwrap())
    });
}

criterion_group!(benches, escape_from_origin, grid_128);
criterion_main!(benches);
