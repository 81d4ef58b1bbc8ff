//! Generation benchmarks.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use typesmith_bench::listing::{synthetic_custom_attributes, synthetic_listing};
use typesmith_codegen::Generator;
use typesmith_schema::SchemaIr;

fn benchmark_ir_resolution(c: &mut Criterion) {
    let listing = synthetic_listing(200, 50);

    c.bench_function("ir_from_schemas", |b| {
        b.iter(|| SchemaIr::from_schemas(black_box(&listing)))
    });
}

fn benchmark_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for size in [10usize, 100, 500] {
        let listing = synthetic_listing(size, size / 4);
        let custom_attributes = synthetic_custom_attributes(64, size / 4);
        let ir = SchemaIr::from_schemas(&listing);

        group.bench_with_input(BenchmarkId::from_parameter(size), &ir, |b, ir| {
            b.iter(|| {
                Generator::new(black_box(ir), &custom_attributes)
                    .generate()
                    .map(|output| output.code.len())
            })
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_ir_resolution, benchmark_generate);
criterion_main!(benches);
