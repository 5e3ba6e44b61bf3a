#![allow(missing_docs)]

use keybox::{Container, Error};

use std::hint::black_box;
use criterion::{criterion_group, criterion_main, Criterion};

fn benchmark(c: &mut Criterion) {
    let mut container = Container::new();
    container.set("plain", 42_i32).unwrap();
    container.lazy("lazy", Counter::default).unwrap();
    container.factory("factory", |c: &Container| -> Result<Transient, Error> {
        Ok(Transient(c.get("plain")?))
    }).unwrap();
    container.raw("raw", i32::max as fn(i32, i32) -> i32).unwrap();
    container.alias("alias", "lazy").unwrap();

    c.bench_function("plain", |b| b.iter(
        || container.get::<i32>(black_box("plain")).unwrap()
    ));
    c.bench_function("lazy", |b| b.iter(
        || container.get_shared::<Counter>(black_box("lazy")).unwrap().0
    ));
    c.bench_function("factory", |b| b.iter(
        || container.get::<Transient>(black_box("factory")).unwrap().0
    ));
    c.bench_function("raw", |b| b.iter(
        || container.get::<fn(i32, i32) -> i32>(black_box("raw")).unwrap()
    ));
    c.bench_function("alias", |b| b.iter(
        || container.get_shared::<Counter>(black_box("alias")).unwrap().0
    ));
    c.bench_function("set", |b| b.iter(
        || container.set(black_box("plain"), black_box(1_i32)).unwrap()
    ));
}

criterion_group!(benches, benchmark);
criterion_main!(benches);

#[derive(Default, Clone, Debug)]
struct Counter(i32);

#[derive(Clone, Debug)]
struct Transient(i32);
