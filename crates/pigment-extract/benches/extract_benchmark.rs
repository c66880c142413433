//! Extraction benchmarks.

use criterion::{criterion_group, criterion_main, Criterion, black_box};
use pigment_core::RgbColor;
use pigment_extract::{assemble_palette, find_color_position, ExtractConfig, Raster};

/// Build a 640x480 RGBA gradient so position searches see varied pixels.
fn gradient_raster() -> Raster {
    let (width, height) = (640u32, 480u32);
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            data.push((x * 255 / width) as u8);
            data.push((y * 255 / height) as u8);
            data.push(((x + y) % 256) as u8);
            data.push(255);
        }
    }
    Raster::from_rgba(width, height, data).unwrap()
}

fn locate_sampled(c: &mut Criterion) {
    let raster = gradient_raster();
    let target = RgbColor::new(200, 120, 64);
    c.bench_function("locate_sampled", |b| {
        b.iter(|| find_color_position(black_box(&raster), black_box(target), 10))
    });
}

fn locate_every_pixel(c: &mut Criterion) {
    let raster = gradient_raster();
    let target = RgbColor::new(200, 120, 64);
    c.bench_function("locate_every_pixel", |b| {
        b.iter(|| find_color_position(black_box(&raster), black_box(target), 1))
    });
}

fn assemble_six_colors(c: &mut Criterion) {
    let raster = gradient_raster();
    let colors = [
        RgbColor::new(10, 10, 10),
        RgbColor::new(250, 250, 30),
        RgbColor::new(128, 128, 128),
        RgbColor::new(200, 40, 90),
        RgbColor::new(0, 200, 255),
        RgbColor::new(90, 230, 15),
    ];
    let config = ExtractConfig::default();
    c.bench_function("assemble_six_colors", |b| {
        b.iter(|| assemble_palette(black_box(&colors), Some(black_box(&raster)), &config))
    });
}

criterion_group!(benches, locate_sampled, locate_every_pixel, assemble_six_colors);
criterion_main!(benches);
