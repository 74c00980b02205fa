use criterion::{black_box, criterion_group, criterion_main, Criterion};

use indexer::{build_index, IndexConfig};

fn synthetic_csv(n: usize) -> String {
    let bases = ['A', 'C', 'G', 'T'];
    let mut out = String::new();
    for i in 0..n {
        let seq: String = (0..23).map(|j| bases[(i + j) % 4]).collect();
        out.push_str(&format!("1,{},{},1\n", i + 1, seq));
    }
    out
}

fn bench_build_index(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("bench.csv");
    std::fs::write(&csv_path, synthetic_csv(100_000)).unwrap();

    let config = IndexConfig {
        species: "Human".to_string(),
        assembly: "GRCh38".to_string(),
        offset: 0,
        species_id: 0,
        guide_len: 20,
        pam_len: 3,
        legacy_mode: false,
    };

    let mut group = c.benchmark_group("indexer");
    group.bench_function("build_index_100k_records", |b| {
        b.iter(|| {
            let output = dir.path().join("bench.bin");
            build_index(black_box(&[csv_path.clone()]), &output, black_box(&config)).unwrap();
        });
    });
}

criterion_group!(benches, bench_build_index);
criterion_main!(benches);
