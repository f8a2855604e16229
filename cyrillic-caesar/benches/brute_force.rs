use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use cyrillic_caesar::{brute_force_decrypt, calculate_frequency, encrypt};
use std::hint::black_box;

const SAMPLE: &str = "В чащах юга жил бы цитрус? Да, но фальшивый экземпляр! ";

fn bench_brute_force(c: &mut Criterion) {
    let mut group = c.benchmark_group("brute_force_with_reference");

    for &repeats in &[1usize, 16, 256] {
        let plain = SAMPLE.repeat(repeats);
        let encrypted = encrypt(&plain, 13);

        group.throughput(Throughput::Bytes(encrypted.len() as u64));
        group.bench_with_input(BenchmarkId::new("repeats", repeats), &encrypted, |b, encrypted| {
            b.iter(|| {
                let result = brute_force_decrypt(black_box(encrypted), Some(SAMPLE), |_| None).unwrap();
                black_box(result)
            });
        });
    }

    group.finish();
}

fn bench_frequency(c: &mut Criterion) {
    let text = SAMPLE.repeat(256);
    c.bench_function("calculate_frequency", |b| {
        b.iter(|| black_box(calculate_frequency(black_box(&text))))
    });
}

criterion_group!(benches, bench_brute_force, bench_frequency);
criterion_main!(benches);
