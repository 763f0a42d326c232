use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use image::{Rgba, RgbaImage};
use logo_bgremove::{flood_fill_background, is_background_candidate};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const GREEN: Rgba<u8> = Rgba([0, 200, 0, 255]);

/// White canvas with a centered green block covering a quarter of the area
fn logo_image(size: u32) -> RgbaImage {
    let lo = size / 4;
    let hi = size - size / 4;
    RgbaImage::from_fn(size, size, |x, y| {
        if (lo..hi).contains(&x) && (lo..hi).contains(&y) {
            GREEN
        } else {
            WHITE
        }
    })
}

fn benchmark_flood_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_fill");
    group.sample_size(20);

    for size in [128u32, 512, 1024] {
        let blank = RgbaImage::from_pixel(size, size, WHITE);
        group.bench_with_input(BenchmarkId::new("all_background", size), &blank, |b, image| {
            b.iter(|| {
                let mut image = image.clone();
                black_box(flood_fill_background(&mut image))
            });
        });

        let logo = logo_image(size);
        group.bench_with_input(BenchmarkId::new("centered_logo", size), &logo, |b, image| {
            b.iter(|| {
                let mut image = image.clone();
                black_box(flood_fill_background(&mut image))
            });
        });
    }

    group.finish();
}

fn benchmark_classifier(c: &mut Criterion) {
    c.bench_function("classify_rgb_cube", |b| {
        b.iter(|| {
            let mut accepted = 0u32;
            for r in (0..=255u8).step_by(5) {
                for g in (0..=255u8).step_by(5) {
                    for v in (0..=255u8).step_by(5) {
                        if is_background_candidate(black_box(r), black_box(g), black_box(v)) {
                            accepted += 1;
                        }
                    }
                }
            }
            accepted
        });
    });
}

criterion_group!(benches, benchmark_flood_fill, benchmark_classifier);
criterion_main!(benches);
