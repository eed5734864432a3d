//! Outcome lookup and guard micro-benchmark.
//!
//! Measures:
//! - Description lookup for a raw code (in range and out of range)
//! - Guard fast path (condition true)
//! - Guard failure path (hook + return)

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use evo_result::prelude::*;

fn guarded(ready: bool) -> Outcome {
    err_ret!(ready, Outcome::HardwareBusy);
    Outcome::Ok
}

fn bench_describe(c: &mut Criterion) {
    c.bench_function("describe_in_range", |b| {
        b.iter(|| describe(black_box(4)))
    });

    c.bench_function("describe_out_of_range", |b| {
        b.iter(|| describe(black_box(Outcome::COUNT as u32)))
    });
}

fn bench_guards(c: &mut Criterion) {
    c.bench_function("guard_pass", |b| b.iter(|| guarded(black_box(true))));

    c.bench_function("guard_fail", |b| b.iter(|| guarded(black_box(false))));
}

criterion_group!(benches, bench_describe, bench_guards);
criterion_main!(benches);
