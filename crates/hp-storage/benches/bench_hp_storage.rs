use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hp_core::config::CodecConfig;
use hp_storage::container;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_bytes(size_kb: usize) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(17);
    (0..size_kb * 1024).map(|_| b'a' + rng.gen_range(0..26u8)).collect()
}

fn bench_container(c: &mut Criterion) {
    let config = CodecConfig::default();
    for kb in [1usize, 10, 100] {
        let data = generate_bytes(kb);
        let packed = container::compress(&data, &config).unwrap();
        c.bench_function(&format!("container_compress_{kb}kb"), |b| {
            b.iter(|| black_box(container::compress(black_box(&data), &config).unwrap()))
        });
        c.bench_function(&format!("container_decompress_{kb}kb"), |b| {
            b.iter(|| black_box(container::decompress(black_box(&packed)).unwrap()))
        });
    }
}

criterion_group!(benches, bench_container);
criterion_main!(benches);
