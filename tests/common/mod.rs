//! Shared fixtures for integration tests

#![allow(dead_code)]

use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const GREEN: Rgba<u8> = Rgba([0, 200, 0, 255]);

/// 3x3 white image with a green center pixel
pub fn three_by_three_logo() -> RgbaImage {
    let mut image = RgbaImage::from_pixel(3, 3, WHITE);
    image.put_pixel(1, 1, GREEN);
    image
}

/// White canvas with a solid green rectangle centered in it
pub fn centered_rect(width: u32, height: u32, rect_w: u32, rect_h: u32) -> RgbaImage {
    let x0 = (width - rect_w) / 2;
    let y0 = (height - rect_h) / 2;
    RgbaImage::from_fn(width, height, |x, y| {
        if (x0..x0 + rect_w).contains(&x) && (y0..y0 + rect_h).contains(&y) {
            GREEN
        } else {
            WHITE
        }
    })
}

/// Green ring (one pixel thick) enclosing a white island, on a white canvas
///
/// Returns the image and the inclusive bounds of the island.
pub fn ring_with_island(size: u32) -> (RgbaImage, (u32, u32)) {
    let lo = 2;
    let hi = size - 3;
    let image = RgbaImage::from_fn(size, size, |x, y| {
        let on_ring = (x == lo || x == hi || y == lo || y == hi)
            && (lo..=hi).contains(&x)
            && (lo..=hi).contains(&y);
        if on_ring {
            GREEN
        } else {
            WHITE
        }
    });
    (image, (lo + 1, hi - 1))
}

/// Write `image` as PNG into `dir` and return the path
pub fn write_png(dir: &Path, name: &str, image: &RgbaImage) -> PathBuf {
    let path = dir.join(name);
    image.save(&path).expect("failed to write fixture");
    path
}

pub fn load_rgba(path: &Path) -> RgbaImage {
    image::open(path).expect("failed to read output").to_rgba8()
}
