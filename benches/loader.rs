#![allow(unused)]
extern crate edconf;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use edconf::{EditorConfigLoader, ErrorPolicy, StringResource};
use std::hint::black_box;

/// Build a synthetic document with the given number of sections.
///
/// Each section carries a realistic mix of typed and untyped properties, so the benchmark
/// exercises the registry lookup and value parsing paths, not just line splitting.
fn synthetic_document(sections: usize) -> String {
    let mut text = String::from("root = true\n\n");
    for i in 0..sections {
        text.push_str(&format!("[pkg{i}/**.rs]\n"));
        text.push_str("indent_style = space\n");
        text.push_str("indent_size = 4\n");
        text.push_str("end_of_line = lf\n");
        text.push_str("charset = utf-8\n");
        text.push_str(&format!("custom_marker = value-{i}\n\n"));
    }
    text
}

fn bench_load(c: &mut Criterion) {
    let content = synthetic_document(200);
    let size = content.len();
    let resource = StringResource::new("bench://.editorconfig", content);

    println!(
        "Benchmarking synthetic document: {} bytes ({:.2} KB)",
        size,
        size as f64 / 1024.0
    );

    let mut group = c.benchmark_group("loader");
    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("load_200_sections", |b| {
        let mut loader = EditorConfigLoader::default();
        b.iter(|| {
            let config = loader.load(black_box(&resource)).unwrap();
            black_box(config)
        });
    });
    group.finish();

    let mut group = c.benchmark_group("loader_lenient");
    group.throughput(Throughput::Bytes(size as u64));
    group.bench_function("load_200_sections_ignore_all", |b| {
        let mut loader = EditorConfigLoader::builder()
            .error_handler(ErrorPolicy::IgnoreAll)
            .build();
        b.iter(|| {
            let config = loader.load(black_box(&resource)).unwrap();
            black_box(config)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_load);
criterion_main!(benches);
