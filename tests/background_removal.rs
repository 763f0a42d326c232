//! End-to-end background removal through real files

mod common;

use common::{centered_rect, load_rgba, ring_with_island, three_by_three_logo, write_png, GREEN};
use image::{Rgb, RgbImage, Rgba};
use logo_bgremove::{
    corner_seeds, remove_background_with_config, BackgroundRemover, NoOpProgressReporter,
    OutputFormat, RemovalConfig,
};
use tempfile::TempDir;

fn quiet() -> RemovalConfig {
    RemovalConfig::builder().report_progress(false).build().unwrap()
}

#[test]
fn test_three_by_three_scenario() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_png(temp_dir.path(), "logo.png", &three_by_three_logo());
    let output = temp_dir.path().join("logo_final.png");

    let result = remove_background_with_config(&input, &output, &quiet()).unwrap();
    let saved = load_rgba(&output);

    assert_eq!(saved.dimensions(), (3, 3));
    for (x, y, pixel) in saved.enumerate_pixels() {
        if (x, y) == (1, 1) {
            assert_eq!(*pixel, GREEN, "center must be unchanged");
        } else {
            assert_eq!(pixel[3], 0, "edge pixel ({x}, {y}) must be transparent");
        }
    }
    assert_eq!(result.stats.cleared_pixels, 8);
    assert_eq!(saved, result.image);
}

#[test]
fn test_centered_rectangle_preserved() {
    let temp_dir = TempDir::new().unwrap();
    let source = centered_rect(40, 30, 12, 8);
    let input = write_png(temp_dir.path(), "rect.png", &source);
    let output = temp_dir.path().join("rect_out.png");

    remove_background_with_config(&input, &output, &quiet()).unwrap();
    let saved = load_rgba(&output);

    for (x, y, pixel) in saved.enumerate_pixels() {
        let original = source.get_pixel(x, y);
        if *original == GREEN {
            assert_eq!(pixel, original, "green pixel ({x}, {y}) changed");
        } else {
            assert_eq!(pixel[3], 0, "white pixel ({x}, {y}) not cleared");
            assert_eq!(&pixel.0[..3], &original.0[..3]);
        }
    }
}

#[test]
fn test_enclosed_island_keeps_alpha() {
    let temp_dir = TempDir::new().unwrap();
    let (source, (lo, hi)) = ring_with_island(15);
    let input = write_png(temp_dir.path(), "ring.png", &source);
    let output = temp_dir.path().join("ring_out.png");

    remove_background_with_config(&input, &output, &quiet()).unwrap();
    let saved = load_rgba(&output);

    for y in lo..=hi {
        for x in lo..=hi {
            assert_eq!(saved.get_pixel(x, y)[3], 255, "island pixel ({x}, {y})");
        }
    }
    assert_eq!(saved.get_pixel(0, 7)[3], 0);
    assert_eq!(saved.get_pixel(1, 7)[3], 0);
}

#[test]
fn test_corners_always_cleared() {
    let temp_dir = TempDir::new().unwrap();
    let source = RgbImage::from_fn(9, 6, |x, y| Rgb([(x * 20) as u8, 10, (y * 30) as u8]));
    let path = temp_dir.path().join("dark.png");
    source.save(&path).unwrap();
    let output = temp_dir.path().join("dark_out.png");

    let result = remove_background_with_config(&path, &output, &quiet()).unwrap();
    let saved = load_rgba(&output);

    for (x, y) in corner_seeds(9, 6) {
        assert_eq!(saved.get_pixel(x, y)[3], 0);
    }
    assert!(result.stats.cleared_pixels <= 9 * 6);
}

#[test]
fn test_rgb_jpeg_input_gains_alpha() {
    let temp_dir = TempDir::new().unwrap();
    let source = RgbImage::from_pixel(8, 8, Rgb([250, 250, 250]));
    let input = temp_dir.path().join("flat.jpg");
    source.save(&input).unwrap();
    let output = temp_dir.path().join("flat.png");

    remove_background_with_config(&input, &output, &quiet()).unwrap();
    let saved = load_rgba(&output);

    assert!(saved.pixels().all(|p| p[3] == 0));
}

#[test]
fn test_existing_transparency_preserved_on_foreground() {
    let temp_dir = TempDir::new().unwrap();
    let mut source = three_by_three_logo();
    source.put_pixel(1, 1, Rgba([0, 200, 0, 128]));
    let input = write_png(temp_dir.path(), "semi.png", &source);
    let output = temp_dir.path().join("semi_out.png");

    remove_background_with_config(&input, &output, &quiet()).unwrap();

    assert_eq!(*load_rgba(&output).get_pixel(1, 1), Rgba([0, 200, 0, 128]));
}

#[test]
fn test_webp_and_tiff_outputs_carry_alpha() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_png(temp_dir.path(), "logo.png", &three_by_three_logo());

    for name in ["logo.webp", "logo.tiff"] {
        let output = temp_dir.path().join(name);
        remove_background_with_config(&input, &output, &quiet()).unwrap();
        let saved = load_rgba(&output);
        assert_eq!(saved.get_pixel(0, 0)[3], 0, "{name}");
        assert_eq!(*saved.get_pixel(1, 1), GREEN, "{name}");
    }
}

#[test]
fn test_explicit_format_overrides_extension() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_png(temp_dir.path(), "logo.png", &three_by_three_logo());
    let output = temp_dir.path().join("logo.out");

    let config = RemovalConfig::builder()
        .output_format(OutputFormat::Png)
        .report_progress(false)
        .build()
        .unwrap();
    remove_background_with_config(&input, &output, &config).unwrap();

    let bytes = std::fs::read(&output).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
}

#[test]
fn test_create_output_dirs() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_png(temp_dir.path(), "logo.png", &three_by_three_logo());
    let output = temp_dir.path().join("public").join("logo_final.png");

    let config = RemovalConfig::builder()
        .create_output_dirs(true)
        .report_progress(false)
        .build()
        .unwrap();
    remove_background_with_config(&input, &output, &config).unwrap();

    assert!(output.exists());
}

#[test]
fn test_remover_reusable_across_files() {
    let temp_dir = TempDir::new().unwrap();
    let mut remover =
        BackgroundRemover::with_reporter(RemovalConfig::default(), Box::new(NoOpProgressReporter))
            .unwrap();

    let first = write_png(temp_dir.path(), "a.png", &three_by_three_logo());
    let second = write_png(temp_dir.path(), "b.png", &centered_rect(10, 10, 4, 4));

    let a = remover
        .process_file(&first, temp_dir.path().join("a_out.png"))
        .unwrap();
    let b = remover
        .process_file(&second, temp_dir.path().join("b_out.png"))
        .unwrap();

    assert_eq!(a.stats.cleared_pixels, 8);
    assert_eq!(b.stats.cleared_pixels, 100 - 16);
}
