use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use dp_kernels::{find_largest_zero_square, synth::random_matrix};
use rand::{rngs::StdRng, SeedableRng};

fn bench_zero_square(c: &mut Criterion) {
    let mut group = c.benchmark_group("zero_square");
    for &side in &[100usize, 500, 1_000, 2_000] {
        for &density in &[0.5f64, 0.9] {
            group.bench_with_input(
                BenchmarkId::new(format!("density_{density}"), side),
                &side,
                |b, &side| {
                    b.iter_batched(
                        || random_matrix(side, side, density, &mut StdRng::seed_from_u64(42)),
                        |matrix| criterion::black_box(find_largest_zero_square(&matrix)),
                        BatchSize::LargeInput,
                    )
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_zero_square);
criterion_main!(benches);
