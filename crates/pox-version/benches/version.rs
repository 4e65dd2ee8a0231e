use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pox_version::{compare, SemanticVersion, Semver, VersionParser};

fn bench_compare(c: &mut Criterion) {
    let cases: Vec<(SemanticVersion, SemanticVersion)> = [
        ("1.2.3", "1.2.4"),
        ("2.4.0-alpha", "2.4.0"),
        ("1.0.0-alpha.beta", "1.0.0-alpha.1"),
        ("1.2.3+build.1", "1.2.3+build.2"),
        ("1.0", "1.0.0"),
        ("1.0.0-beta.11", "1.0.0-beta.2"),
        ("1.2.3-rc.1", "1.2.3"),
    ]
    .iter()
    .map(|(a, b)| (SemanticVersion::parse(a).expect("valid"), SemanticVersion::parse(b).expect("valid")))
    .collect();

    c.bench_function("compare", |b| {
        b.iter(|| {
            for (a, bver) in &cases {
                black_box(compare(black_box(a), black_box(bver)));
            }
        })
    });
}

fn bench_parse(c: &mut Criterion) {
    let parser = VersionParser::new();
    let versions = [
        "v1.2.3",
        "1.2.3-beta.1",
        "2.4.0+build.5",
        "1.0",
        "1.0.0-alpha-a.b-c-somethinglong+build.1-aef.1-its-okay",
        "5114f85",
        "1.2.3-rc1",
    ];

    c.bench_function("parse_versions", |b| {
        b.iter(|| {
            for version in versions {
                black_box(parser.parse(black_box(version)).ok());
            }
        })
    });
}

fn bench_parse_range(c: &mut Criterion) {
    let parser = VersionParser::new();
    let ranges = [
        ">=1.2.3,<2.0.0",
        "^1.2.3,!1.2.5",
        "~1.4",
        ">1.0,<2.0,!1.5.6",
        "=5114f85",
    ];

    c.bench_function("parse_ranges", |b| {
        b.iter(|| {
            for range in ranges {
                black_box(parser.parse_range(black_box(range)).ok());
            }
        })
    });
}

fn bench_satisfies(c: &mut Criterion) {
    let cases = [
        ("1.2.3", "^1.2.0"),
        ("1.2.3-beta", "^1.2.3"),
        ("2.4.5", "~2.4"),
        ("1.2.3", ">=1.2.3,<2.0.0"),
        ("1.9999.9999", "<2.0.0"),
        ("5114f85", "=5114f85"),
    ];

    c.bench_function("semver_satisfies", |b| {
        b.iter(|| {
            for (version, range) in cases {
                black_box(Semver::satisfies(black_box(version), black_box(range)));
            }
        })
    });
}

fn bench_sort(c: &mut Criterion) {
    let versions = vec![
        "1.0",
        "0.1",
        "0.1.1",
        "3.2.1",
        "2.4.0-alpha",
        "2.4.0",
        "50.2",
        "1.2.3",
        "2.4.5",
        "2.4.5-rc.1",
    ];

    c.bench_function("semver_sort", |b| {
        b.iter(|| {
            black_box(Semver::sort(black_box(&versions)));
        })
    });
}

criterion_group!(benches, bench_compare, bench_parse, bench_parse_range, bench_satisfies, bench_sort);
criterion_main!(benches);
