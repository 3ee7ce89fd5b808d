//! Benchmarks for URL decoding and encoding.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use connkit::dialect::{DialectRegistry, ExtraOptions, OptionSyntax};
use connkit::prelude::*;

const CASES: &[(&str, &str, &str)] = &[
    ("mysql", "org.gjt.mm.mysql.Driver", "jdbc:mysql://localhost:1234/testdb?autoCommit=true&test=FALSE"),
    (
        "mssql",
        "com.microsoft.sqlserver.jdbc.SQLServerDriver",
        "jdbc:sqlserver://localhost:1234;databaseName=testdb;integratedSecurity=false;loginTimeout=30",
    ),
    ("oracle", "oracle.jdbc.driver.OracleDriver", "jdbc:oracle:thin:@localhost:1521:XE"),
    ("hypersonic", "org.hsqldb.jdbcDriver", "jdbc:hsqldb:hsql://localhost:9001/testdb;ifexists=true"),
];

/// Benchmark decoding each dialect.
fn bench_decode(c: &mut Criterion) {
    let service = DatabaseConnectionService::new();
    let mut group = c.benchmark_group("decode");

    for (name, driver, url) in CASES {
        group.throughput(Throughput::Bytes(url.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), url, |b, url| {
            b.iter(|| black_box(service.create_connection(driver, black_box(url))))
        });
    }

    group.finish();
}

/// Benchmark encoding each dialect.
fn bench_encode(c: &mut Criterion) {
    let service = DatabaseConnectionService::new();
    let mut group = c.benchmark_group("encode");

    for (name, driver, url) in CASES {
        let Ok(conn) = service.create_connection(driver, url) else {
            continue;
        };
        group.bench_with_input(BenchmarkId::from_parameter(name), &conn, |b, conn| {
            b.iter(|| black_box(service.encode_connection(black_box(conn))))
        });
    }

    group.finish();
}

/// Benchmark dialect resolution.
fn bench_resolve(c: &mut Criterion) {
    let registry = DialectRegistry::builtin();
    let mut group = c.benchmark_group("resolve");

    group.bench_function("by_driver_class", |b| {
        b.iter(|| {
            black_box(registry.resolve(
                black_box("com.mysql.cj.jdbc.Driver"),
                black_box("jdbc:mysql://localhost/testdb"),
            ))
        })
    });

    group.bench_function("by_url_prefix", |b| {
        b.iter(|| {
            black_box(registry.resolve(
                black_box("com.example.Driver"),
                black_box("jdbc:hsqldb:mem:testdb"),
            ))
        })
    });

    group.finish();
}

/// Benchmark option parsing and rendering at different sizes.
fn bench_options(c: &mut Criterion) {
    let mut group = c.benchmark_group("options");

    for count in [1, 10, 50] {
        let raw: Vec<String> = (0..count).map(|i| format!("key{}=value{}", i, i)).collect();
        let raw = raw.join("&");

        group.bench_with_input(BenchmarkId::new("parse", count), &raw, |b, raw| {
            b.iter(|| black_box(ExtraOptions::parse(black_box(raw), Dialect::MySql, OptionSyntax::QUERY)))
        });

        let options = ExtraOptions::parse(&raw, Dialect::MySql, OptionSyntax::QUERY);
        group.bench_with_input(BenchmarkId::new("render", count), &options, |b, options| {
            b.iter(|| black_box(options.render(Dialect::MySql, OptionSyntax::QUERY)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode, bench_encode, bench_resolve, bench_options);
criterion_main!(benches);
