use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wasm_leb::{encode_signed_leb128, frame_vector, leb128, ByteTree};

fn signed_benchmark(c: &mut Criterion) {
    let values: Vec<i64> = (0..64).map(|shift| (-1i64 << shift) + 3).collect();

    c.bench_function("signed leb128 to vec", |b| {
        b.iter(|| {
            for &n in &values {
                black_box(encode_signed_leb128(black_box(n)));
            }
        })
    });

    c.bench_function("signed leb128 into sink", |b| {
        let mut sink = Vec::with_capacity(values.len() * leb128::MAX_LEN);
        b.iter(|| {
            sink.clear();
            for &n in &values {
                leb128::write_signed(&mut sink, black_box(n));
            }
            black_box(&sink);
        })
    });
}

fn vector_benchmark(c: &mut Criterion) {
    let nested: ByteTree = (0..256u32)
        .map(|i| ByteTree::from(vec![i as u8, (i >> 1) as u8, 0x0b]))
        .collect();

    c.bench_function("frame nested vector", |b| {
        b.iter(|| black_box(frame_vector(black_box(&nested))))
    });
}

criterion_group!(benches, signed_benchmark, vector_benchmark);
criterion_main!(benches);
