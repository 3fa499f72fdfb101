use chrono::{TimeZone, Utc};
use clog::fmt::{HexStyle, format_bin, format_hex};
use clog::{Level, LogRecord, Policy, SourceLocation, SymbolStyle};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn make_record(level: Level) -> LogRecord {
    let at = Utc.with_ymd_and_hms(2025, 1, 15, 14, 30, 0).single().unwrap_or_default();
    LogRecord::new(
        level,
        "benchmark log message",
        SourceLocation::new("src/bench.rs", "run", 42),
    )
    .at(at)
}

fn bench_decorate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Policy::decorate");

    let policy = Policy::default();
    let info = make_record(Level::Info);
    group.bench_function("info", |b| {
        b.iter(|| policy.decorate(black_box(&info)));
    });

    let debug = make_record(Level::Debug);
    group.bench_function("debug_traced", |b| {
        b.iter(|| policy.decorate(black_box(&debug)));
    });

    let bare = Policy {
        timestamp_format: None,
        tracing: false,
        symbols: SymbolStyle::None.into(),
        ..Policy::default()
    };
    group.bench_function("bare", |b| {
        b.iter(|| bare.decorate(black_box(&info)));
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("DecoratedLine::render");
    let line = Policy::default().decorate(&make_record(Level::Warning));

    group.bench_function("colored", |b| {
        b.iter(|| black_box(&line).render(true));
    });
    group.bench_function("plain", |b| {
        b.iter(|| black_box(&line).render(false));
    });

    group.finish();
}

fn bench_hex(c: &mut Criterion) {
    let mut group = c.benchmark_group("dump");
    let bytes: Vec<u8> = (0..=255).collect();

    group.bench_function("hex_compact", |b| {
        b.iter(|| format_hex(black_box(&bytes), HexStyle::Compact));
    });
    group.bench_function("hex_wide", |b| {
        b.iter(|| format_hex(black_box(&bytes), HexStyle::Wide));
    });
    group.bench_function("bin", |b| {
        b.iter(|| format_bin(black_box(&bytes)));
    });

    group.finish();
}

criterion_group!(benches, bench_decorate, bench_render, bench_hex);
criterion_main!(benches);
