use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hp_codec::{decoder, Encoder, HuffmanTree};

fn generate_text(size_kb: usize) -> Vec<u8> {
    let base = "The quick brown fox jumps over the lazy dog. Huffman coding assigns short codes to frequent symbols and long codes to rare ones, so skewed text like this compresses well. ";
    let mut text = String::with_capacity(size_kb * 1024);
    while text.len() < size_kb * 1024 {
        text.push_str(base);
    }
    text.truncate(size_kb * 1024);
    text.into_bytes()
}

fn bench_encode(c: &mut Criterion) {
    let encoder = Encoder::default();
    for kb in [1usize, 10, 100] {
        let text = generate_text(kb);
        c.bench_function(&format!("encode_{kb}kb"), |b| {
            b.iter(|| black_box(encoder.encode(black_box(&text)).unwrap()))
        });
    }
}

fn bench_decode(c: &mut Criterion) {
    let encoder = Encoder::default();
    for kb in [1usize, 10, 100] {
        let encoded = encoder.encode(&generate_text(kb)).unwrap();
        let tree = encoded.tree.clone().unwrap();
        c.bench_function(&format!("decode_{kb}kb"), |b| {
            b.iter(|| black_box(decoder::decode(&tree, black_box(&encoded.packed), Some(encoded.bit_len)).unwrap()))
        });
    }
}

fn bench_tree(c: &mut Criterion) {
    let text = generate_text(10);
    c.bench_function("build_tree_10kb", |b| {
        b.iter(|| black_box(HuffmanTree::from_data(black_box(&text)).unwrap()))
    });
    let tree = HuffmanTree::from_data(&text).unwrap();
    let bytes = tree.serialize();
    c.bench_function("tree_serialize", |b| b.iter(|| black_box(tree.serialize())));
    c.bench_function("tree_deserialize", |b| {
        b.iter(|| black_box(HuffmanTree::deserialize(black_box(&bytes)).unwrap()))
    });
}

criterion_group!(benches, bench_encode, bench_decode, bench_tree);
criterion_main!(benches);
