//! Descriptor mapping benchmarks.

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use typedesc_bench::{deep_type, wide_user_defined};
use typedesc_emit::DescriptorMapper;
use typedesc_model::types::{PrimitiveKind, TypeDescription};

fn benchmark_primitive_mapping(c: &mut Criterion) {
    let mapper = DescriptorMapper::new();
    let ty = TypeDescription::Primitive(PrimitiveKind::U64);

    c.bench_function("map_primitive", |b| {
        b.iter(|| mapper.map(black_box(&ty)))
    });
}

fn benchmark_optional_mapping(c: &mut Criterion) {
    let mapper = DescriptorMapper::new();
    let ty = TypeDescription::optional(TypeDescription::Primitive(PrimitiveKind::Str));

    c.bench_function("map_optional", |b| {
        b.iter(|| mapper.map(black_box(&ty)))
    });
}

fn benchmark_deep_mapping(c: &mut Criterion) {
    let mapper = DescriptorMapper::new();

    for depth in [4, 16, 64] {
        let ty = deep_type(depth);
        c.bench_function(&format!("map_deep_{depth}"), |b| {
            b.iter(|| mapper.map(black_box(&ty)))
        });
    }
}

fn benchmark_wide_user_defined(c: &mut Criterion) {
    let mapper = DescriptorMapper::new();
    let ty = wide_user_defined(32);

    c.bench_function("map_user_defined_32_args", |b| {
        b.iter(|| mapper.map(black_box(&ty)))
    });
}

criterion_group!(
    benches,
    benchmark_primitive_mapping,
    benchmark_optional_mapping,
    benchmark_deep_mapping,
    benchmark_wide_user_defined
);
criterion_main!(benches);
