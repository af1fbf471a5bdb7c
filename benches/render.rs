use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::{Deserialize, Serialize};
use sjson::{from_str, sjson, to_string, Node};

#[derive(Serialize, Deserialize, Clone)]
struct Product {
    sku: String,
    name: String,
    price: f64,
    quantity: u32,
}

fn products(size: u32) -> Vec<Product> {
    (0..size)
        .map(|i| Product {
            sku: format!("SKU{}", i),
            name: format!("Product \"{}\"", i),
            price: 9.99 + f64::from(i),
            quantity: i,
        })
        .collect()
}

fn benchmark_render_literal(c: &mut Criterion) {
    let doc = sjson!({
        {"title", "Title A"},
        {"price", 114.514},
        {"restricted", false},
        {"tags", {"tag1", "tag2", "tag3"}},
        {"author", {{"name", "someone"}, {"id", 42}}},
    });

    c.bench_function("render_literal_compact", |b| {
        b.iter(|| black_box(&doc).render(""))
    });
    c.bench_function("render_literal_pretty", |b| {
        b.iter(|| black_box(&doc).render("  "))
    });
}

fn benchmark_render_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_array");

    for size in [10, 100, 1000].iter() {
        let doc = sjson::to_value(&products(*size)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &doc, |b, doc| {
            b.iter(|| black_box(doc).render(""))
        });
    }
    group.finish();
}

fn benchmark_parse_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_array");

    for size in [10, 100, 1000].iter() {
        let text = to_string(&products(*size)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &text, |b, text| {
            b.iter(|| Node::parse(black_box(text)))
        });
    }
    group.finish();
}

fn benchmark_serde_round_trip(c: &mut Criterion) {
    let items = products(100);
    let text = to_string(&items).unwrap();

    c.bench_function("serialize_products", |b| {
        b.iter(|| to_string(black_box(&items)))
    });
    c.bench_function("deserialize_products", |b| {
        b.iter(|| from_str::<Vec<Product>>(black_box(&text)))
    });
    c.bench_function("serde_json_deserialize_products", |b| {
        b.iter(|| serde_json::from_str::<Vec<Product>>(black_box(&text)))
    });
}

fn benchmark_promotion(c: &mut Criterion) {
    c.bench_function("build_by_promotion", |b| {
        b.iter(|| {
            let mut doc = Node::new();
            for i in 0..100usize {
                doc["items"][i]["id"] = Node::from(i as i64);
            }
            doc
        })
    });
}

criterion_group!(
    benches,
    benchmark_render_literal,
    benchmark_render_array,
    benchmark_parse_array,
    benchmark_serde_round_trip,
    benchmark_promotion
);
criterion_main!(benches);
