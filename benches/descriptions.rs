//! Benchmarks for serialization contract metadata.
//!
//! Tests construction and lookup performance:
//! - Description construction (opt-out and opt-in discovery)
//! - Member lookup by serialized name
//! - Cached retrieval through the description cache

extern crate sercontract;

use criterion::{criterion_group, criterion_main, Criterion};
use sercontract::prelude::*;
use std::hint::black_box;
use std::sync::Arc;

fn sample_type(registry: &Arc<TypeRegistry>) -> RuntimeTypeRc {
    TypeBuilder::new(registry.clone())
        .class("MyApp.Data", "Person")
        .auto_property("Name", TypeSignature::String)
        .auto_property("Age", TypeSignature::I4)
        .auto_property("Email", TypeSignature::String)
        .field("height", TypeSignature::R8)
        .field("weight", TypeSignature::R8)
        .field("tag", TypeSignature::String)
        .build()
        .unwrap()
}

/// Benchmark a full opt-out discovery pass over a six-member type.
fn bench_description_construction(c: &mut Criterion) {
    let registry = Arc::new(TypeRegistry::new());
    let person = sample_type(&registry);

    c.bench_function("description_construct_opt_out", |b| {
        b.iter(|| {
            let description =
                TypeDescription::new(black_box(&RuntimeTypeRef::new(&person))).unwrap();
            black_box(description)
        });
    });
}

/// Benchmark opt-in discovery, where most members carry markers to inspect.
fn bench_description_construction_opt_in(c: &mut Criterion) {
    let registry = Arc::new(TypeRegistry::new());
    let mut builder = TypeBuilder::new(registry.clone())
        .class("MyApp.Data", "Contract")
        .attribute(CustomAttribute::new(DATA_CONTRACT_ATTRIBUTE_NAME));
    for name in ["A", "B", "C", "D", "E", "F"] {
        builder = builder.property(name, TypeSignature::I4, |property| {
            property.attribute(CustomAttribute::new(DATA_MEMBER_ATTRIBUTE_NAME))
        });
    }
    let contract = builder.build().unwrap();

    c.bench_function("description_construct_opt_in", |b| {
        b.iter(|| {
            let description =
                TypeDescription::new(black_box(&RuntimeTypeRef::new(&contract))).unwrap();
            black_box(description)
        });
    });
}

/// Benchmark name lookup against a built description.
fn bench_member_lookup(c: &mut Criterion) {
    let registry = Arc::new(TypeRegistry::new());
    let person = sample_type(&registry);
    let description = TypeDescription::new(&RuntimeTypeRef::new(&person)).unwrap();

    c.bench_function("description_try_get_member", |b| {
        b.iter(|| {
            let member = description.try_get_member(black_box("Email"));
            black_box(member)
        });
    });
}

/// Benchmark the cached path a serializer hits after warm-up.
fn bench_cached_retrieval(c: &mut Criterion) {
    let registry = Arc::new(TypeRegistry::new());
    let person = sample_type(&registry);
    let cache = DescriptionCache::new();
    cache.warm(&registry).unwrap();

    c.bench_function("description_cache_get_or_build", |b| {
        b.iter(|| {
            let description = cache
                .get_or_build(black_box(&RuntimeTypeRef::new(&person)))
                .unwrap();
            black_box(description)
        });
    });
}

criterion_group!(
    benches,
    bench_description_construction,
    bench_description_construction_opt_in,
    bench_member_lookup,
    bench_cached_retrieval
);
criterion_main!(benches);
