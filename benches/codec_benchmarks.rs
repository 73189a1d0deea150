use bithash::{Direction, all_neighbors, decode, encode, neighbor_of};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn benchmark_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    for precision in [16u32, 32, 52, 64] {
        group.bench_with_input(
            BenchmarkId::new("encode", precision),
            &precision,
            |b, &precision| {
                b.iter(|| encode(black_box(40.7128), black_box(-74.0060), precision).unwrap())
            },
        );

        let hash = encode(40.7128, -74.0060, precision).unwrap();
        group.bench_with_input(
            BenchmarkId::new("decode", precision),
            &precision,
            |b, &precision| b.iter(|| decode(black_box(hash), precision).unwrap()),
        );
    }

    group.finish();
}

fn benchmark_neighbors(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbors");

    let hash = encode(40.7128, -74.0060, 52).unwrap();
    group.bench_function("all_neighbors", |b| {
        b.iter(|| all_neighbors(black_box(hash), 52).unwrap())
    });

    group.bench_function("single_diagonal", |b| {
        b.iter(|| neighbor_of(black_box(hash), Direction::NorthEast, 52).unwrap())
    });

    // Cells on the antimeridian take the wraparound branch
    let edge = encode(0.0, 180.0, 52).unwrap();
    group.bench_function("all_neighbors_antimeridian", |b| {
        b.iter(|| all_neighbors(black_box(edge), 52).unwrap())
    });

    group.finish();
}

criterion_group!(benches, benchmark_codec, benchmark_neighbors);
criterion_main!(benches);
