//! Criterion benchmarks for rust_leveled_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_leveled_logger::prelude::*;
use rust_leveled_logger::Formatter;
use std::io;

fn sink_logger(flag: DestinationFlag, flags: FormatFlags) -> Logger {
    Logger::builder()
        .default_destination(Destination::new(WriterAppender::new(io::sink())))
        .destination_flag(flag)
        .capacity(4096)
        .flags(flags)
        .build()
        .expect("Failed to build logger")
}

// ============================================================================
// Logger Creation Benchmarks
// ============================================================================

fn bench_logger_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("logger_creation");
    group.throughput(Throughput::Elements(1));

    group.bench_function("build_and_close", |b| {
        b.iter(|| {
            let logger = sink_logger(DestinationFlag::Both, FormatFlags::STD_FLAGS);
            logger.close().unwrap();
            black_box(logger)
        });
    });

    group.finish();
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("logging");
    group.throughput(Throughput::Elements(1));

    let plain = sink_logger(DestinationFlag::PlainOnly, FormatFlags::STD_FLAGS);
    group.bench_function("info_plain", |b| {
        b.iter(|| plain.info(&[&black_box("request served"), &black_box(200)]));
    });

    let both = sink_logger(DestinationFlag::Both, FormatFlags::STD_FLAGS);
    group.bench_function("info_both_modes", |b| {
        b.iter(|| both.info(&[&black_box("request served"), &black_box(200)]));
    });

    let located = sink_logger(
        DestinationFlag::PlainOnly,
        FormatFlags::STD_FLAGS | FormatFlags::MICROSECONDS | FormatFlags::SHORT_FILE,
    );
    group.bench_function("info_with_call_site", |b| {
        b.iter(|| located.info(&[&black_box("request served"), &black_box(200)]));
    });

    let discarded = sink_logger(DestinationFlag::PlainOnly, FormatFlags::STD_FLAGS);
    discarded.disable_level(LogLevel::Debug).unwrap();
    group.bench_function("disabled_level", |b| {
        b.iter(|| discarded.debug(&[&black_box("filtered out")]));
    });

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.throughput(Throughput::Elements(1));

    let formatter = Formatter::new(FormatFlags::STD_FLAGS | FormatFlags::MICROSECONDS, " ");
    let scheme = ColorScheme::theme("default").unwrap();
    let site = CallSite::caller();

    group.bench_function("concat", |b| {
        b.iter(|| formatter.concat(&[&black_box("user"), &black_box(42), &black_box("login")]));
    });

    group.bench_function("concat_colored", |b| {
        b.iter(|| {
            formatter.concat_colored(
                scheme.prefixes(LogLevel::Info),
                scheme.reset(),
                &[&black_box("user"), &black_box(42), &black_box("login")],
            )
        });
    });

    group.bench_function("full_line", |b| {
        b.iter(|| formatter.line(Some(&site), black_box("user 42 login ")));
    });

    group.finish();
}

// ============================================================================
// Controller Benchmarks
// ============================================================================

fn bench_controller(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger(DestinationFlag::Both, FormatFlags::STD_FLAGS);
    group.bench_function("disable_enable_level", |b| {
        b.iter(|| {
            logger.disable_level(black_box(LogLevel::Warning)).unwrap();
            logger.enable_level(black_box(LogLevel::Warning)).unwrap();
        });
    });

    group.bench_function("swap_theme", |b| {
        b.iter(|| logger.set_color_theme_name(black_box("bright")).unwrap());
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_logger_creation,
    bench_logging,
    bench_formatting,
    bench_controller
);
criterion_main!(benches);
