use core::{
    DiamondSquare2D, color_for, flatten2,
    utils::to_terrain_image,
};
use criterion::{Criterion, criterion_group, criterion_main};

const SIZE: usize = 257;
const SEED: u64 = 2025;

fn bench_diamond_square_pipeline(c: &mut Criterion) {
    c.bench_function("DiamondSquare2D + flatten + classify to image", |b| {
        b.iter(|| {
            let generator = DiamondSquare2D::new(SIZE, SEED, 1.0).unwrap();
            let flat = flatten2(generator.grid());
            let _img = to_terrain_image(&flat, SIZE);
        })
    });
}

fn bench_regenerate_in_place(c: &mut Criterion) {
    let mut generator = DiamondSquare2D::new(SIZE, SEED, 1.0).unwrap();
    c.bench_function("DiamondSquare2D regenerate in place", |b| {
        b.iter(|| generator.generate(1.0).unwrap())
    });
}

fn bench_classify_flat(c: &mut Criterion) {
    let generator = DiamondSquare2D::new(SIZE, SEED, 1.0).unwrap();
    let flat = flatten2(generator.grid());
    c.bench_function("classify flat height buffer", |b| {
        b.iter(|| {
            for &h in &flat {
                let _ = color_for(h);
            }
        })
    });
}

criterion_group!(
    terrain_benchmarks,
    bench_diamond_square_pipeline,
    bench_regenerate_in_place,
    bench_classify_flat
);
criterion_main!(terrain_benchmarks);
