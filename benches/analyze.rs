//! Benchmark for SUS chart analysis.

use std::fmt::Write;

use criterion::{Criterion, Throughput};
use sus_rs::sus::analyze;

/// Generates a chart with bar length and BPM changes, taps and slides over `measures` measures.
fn generate_chart(measures: u32) -> String {
    let mut source = String::from("#REQUEST \"ticks_per_beat 480\"\n#WAVEOFFSET 0.1\n#00002: 4\n");
    source.push_str("#BPM01: 120\n#BPM02: 180\n#00008: 01\n");
    let mut time_scales = Vec::new();
    for measure in 0..measures {
        if measure % 16 == 15 {
            writeln!(source, "#{measure:03}02: 3").unwrap();
            writeln!(source, "#{measure:03}08: 0002").unwrap();
        }
        if measure % 8 == 0 {
            time_scales.push(format!("{measure}'0:1.{}", measure % 10));
        }
        writeln!(source, "#{measure:03}10:1400140014001400").unwrap();
        writeln!(source, "#{measure:03}1a:0000140000001400").unwrap();
        writeln!(source, "#{measure:03}30a:1300000000000023").unwrap();
        writeln!(source, "#{measure:03}5f:0031").unwrap();
    }
    writeln!(source, "#TIL00: \"{}\"", time_scales.join(", ")).unwrap();
    source
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    for measures in [64, 999] {
        let source = generate_chart(measures);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_function(format!("{measures}_measures"), |b| {
            b.iter(|| analyze(std::hint::black_box(&source)).unwrap());
        });
    }
    group.finish();
}

criterion::criterion_group!(benches, bench_analyze);
criterion::criterion_main!(benches);
