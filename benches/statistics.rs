use chlorophyll_estimator::chlorophyll::{ChannelStatistics, ImageCrateReader, RasterReader};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

fn generate_algae_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let shade = ((x + y) % 64) as u8;
        Rgb([30 + shade, 110 + shade, 40 + shade / 2])
    })
}

fn benchmark_statistics_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("statistics_by_size");

    let sizes = vec![
        (100, 100, "100x100"),
        (1000, 1000, "1000x1000"),
        (4000, 3000, "4000x3000"),
    ];

    for (width, height, label) in sizes {
        let image = generate_algae_image(width, height);

        group.bench_with_input(BenchmarkId::from_parameter(label), &image, |b, image| {
            b.iter(|| ChannelStatistics::from_raster(black_box(image)));
        });
    }

    group.finish();
}

fn benchmark_png_decode(c: &mut Criterion) {
    let mut encoded = Vec::new();
    DynamicImage::ImageRgb8(generate_algae_image(1000, 1000))
        .write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)
        .unwrap();

    c.bench_function("decode_png_1000x1000", |b| {
        b.iter(|| ImageCrateReader.read_raster(black_box(&encoded)));
    });
}

criterion_group!(benches, benchmark_statistics_by_size, benchmark_png_decode);
criterion_main!(benches);
