use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

use visio_image::{Image, ImageSize};
use visio_imgproc::color::{gray_from_bgr, gray_from_bgr_u8, hsv_from_bgr_u8};

fn create_test_image(width: usize, height: usize) -> Image<u8, 3> {
    let mut rng = StdRng::seed_from_u64(42);
    let data = (0..width * height * 3).map(|_| rng.random()).collect();
    Image::new(ImageSize { width, height }, data).unwrap()
}

// sequential float reference
fn gray_vanilla(src: &Image<u8, 3>, dst: &mut Image<u8, 1>) {
    for (pixel, out) in src.as_slice().chunks_exact(3).zip(dst.as_slice_mut()) {
        let (b, g, r) = (pixel[0] as f32, pixel[1] as f32, pixel[2] as f32);
        *out = (0.114 * b + 0.587 * g + 0.299 * r) as u8;
    }
}

fn bench_grayscale(c: &mut Criterion) {
    let mut group = c.benchmark_group("Grayscale");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)] {
        group.throughput(criterion::Throughput::Elements((width * height) as u64));

        let parameter_string = format!("{width}x{height}");

        let image = create_test_image(width, height);
        let image_f32 = image.cast::<f32>().unwrap();

        let mut gray = Image::<u8, 1>::from_size_val(image.size(), 0).unwrap();
        let mut gray_f32 = Image::<f32, 1>::from_size_val(image.size(), 0.0).unwrap();

        group.bench_with_input(
            BenchmarkId::new("vanilla", &parameter_string),
            &image,
            |b, i| b.iter(|| gray_vanilla(black_box(i), &mut gray)),
        );

        group.bench_with_input(
            BenchmarkId::new("gray_from_bgr_u8", &parameter_string),
            &image,
            |b, i| b.iter(|| black_box(gray_from_bgr_u8(i, &mut gray))),
        );

        group.bench_with_input(
            BenchmarkId::new("gray_from_bgr_f32", &parameter_string),
            &image_f32,
            |b, i| b.iter(|| black_box(gray_from_bgr(i, &mut gray_f32))),
        );
    }

    group.finish();
}

fn bench_hsv(c: &mut Criterion) {
    let mut group = c.benchmark_group("Hsv");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)] {
        group.throughput(criterion::Throughput::Elements((width * height) as u64));

        let image = create_test_image(width, height);
        let mut hsv = Image::<u8, 3>::from_size_val(image.size(), 0).unwrap();

        group.bench_with_input(
            BenchmarkId::new("hsv_from_bgr_u8", format!("{width}x{height}")),
            &image,
            |b, i| b.iter(|| black_box(hsv_from_bgr_u8(i, &mut hsv))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_grayscale, bench_hsv);
criterion_main!(benches);
