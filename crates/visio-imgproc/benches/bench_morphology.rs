use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

use visio_image::Image;
use visio_imgproc::morphology::{dilate_with_strategy, erode, DilateStrategy, Kernel, KernelShape};

fn create_binary_image(width: usize, height: usize, density: f64) -> Image<u8, 1> {
    let mut rng = StdRng::seed_from_u64(42);
    let data = (0..width * height)
        .map(|_| rng.random_bool(density) as u8)
        .collect();
    Image::new([width, height].into(), data).unwrap()
}

fn bench_dilate(c: &mut Criterion) {
    let mut group = c.benchmark_group("Dilate");

    let (width, height) = (1024, 896);
    let kernel = Kernel::new(KernelShape::Ellipse { size: 5 }).unwrap();

    for density in [0.01, 0.1, 0.5] {
        let src = create_binary_image(width, height, density);
        let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0).unwrap();
        let parameter_string = format!("{width}x{height}_d{density}");

        for strategy in [
            DilateStrategy::Gather,
            DilateStrategy::Scatter,
            DilateStrategy::Auto,
        ] {
            group.bench_with_input(
                BenchmarkId::new(format!("{strategy:?}"), &parameter_string),
                &src,
                |b, i| {
                    b.iter(|| black_box(dilate_with_strategy(i, &mut dst, &kernel, strategy)))
                },
            );
        }
    }

    group.finish();
}

fn bench_erode(c: &mut Criterion) {
    let mut group = c.benchmark_group("Erode");

    let (width, height) = (1024, 896);
    let src = create_binary_image(width, height, 0.5);
    let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0).unwrap();

    for size in [3, 5, 9] {
        let kernel = Kernel::new(KernelShape::Box { size }).unwrap();
        group.bench_with_input(BenchmarkId::new("box", size), &src, |b, i| {
            b.iter(|| black_box(erode(i, &mut dst, &kernel)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dilate, bench_erode);
criterion_main!(benches);
