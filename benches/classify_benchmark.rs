//! Classification benchmarks
//!
//! Checks that classification cost stays linear in payload size and that the
//! short-circuit scan keeps attack payloads cheap.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use wafpro::{WafConfig, WafEngine};

fn payloads() -> Vec<(&'static str, String)> {
    vec![
        ("benign_small", "user=john&action=view".to_string()),
        ("benign_large", "lorem ipsum dolor sit amet ".repeat(400)),
        ("sqli_union", "1 UNION SELECT password FROM users".to_string()),
        ("sqli_tautology", "' OR '1'='1".to_string()),
        ("xss_script", "<script>alert(1)</script>".to_string()),
        ("traversal", "../../../../etc/passwd".to_string()),
        ("late_match_large", {
            let mut s = "safe filler text ".repeat(2000);
            s.push_str("net user eve pw /add");
            s
        }),
    ]
}

fn bench_classify(c: &mut Criterion) {
    let engine = WafEngine::new(WafConfig::default()).unwrap();
    let mut group = c.benchmark_group("classify");

    for (name, payload) in payloads() {
        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), &payload, |b, p| {
            b.iter(|| engine.classify(black_box(p)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);
