//! Criterion benchmarks for rust_cli_logger

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_cli_logger::prelude::*;
use rust_cli_logger::{FormatterConfig, LogEntry};
use std::sync::Arc;

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("discard", |b| {
        b.iter(|| black_box(Logger::discard()));
    });

    let logger = Logger::discard();
    let fields = FieldSet::new().with("animal", "walrus").with("size", 10);
    group.bench_function("with_fields", |b| {
        b.iter(|| black_box(logger.with_fields(fields.clone())));
    });

    group.finish();
}

// ============================================================================
// Emission Benchmarks
// ============================================================================

fn bench_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("emission");
    group.throughput(Throughput::Elements(1));

    for format in [OutputFormat::Text, OutputFormat::Json] {
        let logger = Logger::discard()
            .with_fields(FieldSet::new().with("animal", "walrus").with("size", 10));
        logger.set_format(format);

        group.bench_with_input(BenchmarkId::new("info", format), &logger, |b, logger| {
            b.iter(|| logger.info(black_box("A group of walrus emerges from the ocean")));
        });
    }

    let logger = Logger::discard();
    group.bench_function("infof", |b| {
        b.iter(|| logger.infof(format_args!("Processing {} items", black_box(100))));
    });

    group.finish();
}

fn bench_concurrent_emission(c: &mut Criterion) {
    let mut group = c.benchmark_group("concurrent_emission");

    for threads in [2, 4, 8].iter() {
        group.throughput(Throughput::Elements(*threads as u64 * 100));
        group.bench_with_input(BenchmarkId::from_parameter(threads), threads, |b, &n| {
            let logger = Arc::new(Logger::discard());
            b.iter(|| {
                let handles: Vec<_> = (0..n)
                    .map(|t| {
                        let logger = Arc::clone(&logger);
                        std::thread::spawn(move || {
                            for i in 0..100 {
                                logger.info(format!("Thread {} message {}", t, i));
                            }
                        })
                    })
                    .collect();
                for handle in handles {
                    let _ = handle.join();
                }
            });
        });
    }

    group.finish();
}

// ============================================================================
// Filtering and Encoding Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::discard();
    logger.set_level(LogLevel::Error);

    group.bench_function("filtered_debug", |b| {
        b.iter(|| logger.debug(black_box("filtered out")));
    });

    group.bench_function("passing_error", |b| {
        b.iter(|| logger.error(black_box("written")));
    });

    group.finish();
}

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");
    let config = FormatterConfig::default();
    let fields: FieldSet = (0..8).map(|i| (format!("key{}", i), i as i64)).collect();
    let entry = LogEntry::new(LogLevel::Info, "benchmark entry").with_fields(fields);

    group.bench_function("text", |b| {
        b.iter(|| black_box(OutputFormat::Text.encode(&entry, &config, false)));
    });

    group.bench_function("json", |b| {
        b.iter(|| black_box(OutputFormat::Json.encode(&entry, &config, false)));
    });

    group.finish();
}

// ============================================================================
// Table Benchmarks
// ============================================================================

fn bench_print_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("print_table");
    let logger = Logger::discard();

    for rows in [1usize, 10, 100].iter() {
        let data: Vec<Vec<String>> = (0..*rows)
            .map(|i| vec![format!("row{}", i), format!("{}", i)])
            .collect();
        group.throughput(Throughput::Elements(*rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &data, |b, data| {
            b.iter(|| print_table(&logger, &["Name", "Value"], data).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_emission,
    bench_concurrent_emission,
    bench_level_filtering,
    bench_encoding,
    bench_print_table,
);

criterion_main!(benches);
