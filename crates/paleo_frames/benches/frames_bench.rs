use criterion::{Criterion, black_box, criterion_group, criterion_main};
use paleo_frames::{
    BeddingAttitude, Direction, cart2dir, cart2dir_batch, dir2cart, dir2cart_batch, doflip,
    dotilt, dotilt_batch,
};

fn conversion_bench(c: &mut Criterion) {
    let d = Direction::with_intensity(200.0, 40.0, 1.0);
    let xyz = [-0.71984631, -0.26200263, 0.64278761];

    let mut group = c.benchmark_group("conversion");
    group.bench_function("dir2cart", |b| b.iter(|| dir2cart(black_box(&d))));
    group.bench_function("cart2dir", |b| b.iter(|| cart2dir(black_box(&xyz))));
    group.finish();
}

fn batch_bench(c: &mut Criterion) {
    let dirs: Vec<Direction> = (0..1000)
        .map(|i| Direction::new(f64::from(i) * 0.36, f64::from(i % 180) - 89.5))
        .collect();
    let vectors = dir2cart_batch(&dirs);

    let mut group = c.benchmark_group("batch");
    group.bench_function("dir2cart_batch_1000", |b| {
        b.iter(|| dir2cart_batch(black_box(&dirs)))
    });
    group.bench_function("cart2dir_batch_1000", |b| {
        b.iter(|| cart2dir_batch(black_box(&vectors)))
    });
    group.finish();
}

fn tilt_bench(c: &mut Criterion) {
    let bed = BeddingAttitude::new(90.0, 20.0);
    let pairs: Vec<(f64, f64)> = (0..1000)
        .map(|i| (f64::from(i) * 0.36, f64::from(i % 90)))
        .collect();

    let mut group = c.benchmark_group("tilt");
    group.bench_function("dotilt", |b| {
        b.iter(|| dotilt(black_box(91.2), black_box(43.1), 90.0, 20.0))
    });
    group.bench_function("dotilt_batch_1000", |b| {
        b.iter(|| dotilt_batch(black_box(&pairs), &bed))
    });
    group.bench_function("doflip", |b| {
        b.iter(|| doflip(black_box(10.0), black_box(-30.0)))
    });
    group.finish();
}

criterion_group!(benches, conversion_bench, batch_bench, tilt_bench);
criterion_main!(benches);
