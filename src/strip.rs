use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use image::{DynamicImage, ImageFormat, Rgb, RgbaImage};

use crate::constants::SAMPLE_POINT;
use crate::utils::rgb_distance;

/// Clears the alpha of every pixel within `threshold` RGB distance of the
/// color sampled at the fixed reference coordinate.
///
/// The input gains an opaque alpha channel if it has none; pixels outside
/// the threshold keep their color and any alpha they already had. Returns
/// the stripped image together with the detected background color.
pub fn strip_background(img: &DynamicImage, threshold: f32) -> Result<(RgbaImage, Rgb<u8>)> {
    let mut rgba = img.to_rgba8();
    let (sx, sy) = SAMPLE_POINT;

    // reference color ignores any existing alpha
    let reference = rgba
        .get_pixel_checked(sx, sy)
        .map(|p| Rgb([p[0], p[1], p[2]]))
        .ok_or_else(|| {
            anyhow!(
                "image is {}x{}, too small to sample the background at ({}, {})",
                rgba.width(),
                rgba.height(),
                sx,
                sy
            )
        })?;

    for pixel in rgba.pixels_mut() {
        let color = Rgb([pixel[0], pixel[1], pixel[2]]);
        if rgb_distance(color, reference) <= threshold {
            pixel[3] = 0;
        }
    }

    Ok((rgba, reference))
}

/// Strips the background of `input` and writes a transparent PNG to
/// `output`, creating parent directories as needed.
///
/// Returns the detected background color for the status line.
pub fn remove_background(input: &Path, output: &Path, threshold: f32) -> Result<Rgb<u8>> {
    let img = image::open(input).with_context(|| format!("failed to open {}", input.display()))?;
    let (stripped, background) = strip_background(&img, threshold)?;

    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }
    stripped
        .save_with_format(output, ImageFormat::Png)
        .with_context(|| format!("failed to write {}", output.display()))?;

    Ok(background)
}

/// All `*.png` files directly inside `dir`, in lexicographic filename order.
pub fn collect_png_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?
        .filter_map(|entry| Some(entry.ok()?.path()))
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("png"))
        .collect();
    files.sort();

    Ok(files)
}

#[cfg(test)]
mod tests {
    use image::{RgbImage, Rgba};
    use tempfile::tempdir;

    use super::*;

    fn solid_rgba(size: u32, color: [u8; 4]) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(size, size, Rgba(color)))
    }

    #[test]
    fn sampled_pixel_is_always_cleared() {
        // distance to itself is zero, within any non-negative threshold
        let (out, background) =
            strip_background(&solid_rgba(10, [255, 255, 255, 255]), 0.0).unwrap();
        assert_eq!(background, Rgb([255, 255, 255]));
        assert_eq!(out.get_pixel(5, 5)[3], 0);
    }

    #[test]
    fn solid_image_becomes_fully_transparent() {
        let (out, _) = strip_background(&solid_rgba(10, [255, 255, 255, 255]), 40.0).unwrap();
        assert!(out.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn clears_background_and_leaves_foreground_untouched() {
        // black background with a white block in the lower-right corner
        let mut img = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 255]));
        for y in 7..10 {
            for x in 7..10 {
                img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            }
        }

        let (out, background) = strip_background(&DynamicImage::ImageRgba8(img), 40.0).unwrap();
        assert_eq!(background, Rgb([0, 0, 0]));
        for (x, y, pixel) in out.enumerate_pixels() {
            if x >= 7 && y >= 7 {
                assert_eq!(*pixel, Rgba([255, 255, 255, 255]));
            } else {
                assert_eq!(pixel[3], 0);
            }
        }
    }

    #[test]
    fn zero_threshold_only_clears_exact_matches() {
        let mut img = RgbaImage::from_pixel(10, 10, Rgba([10, 10, 10, 255]));
        img.put_pixel(0, 0, Rgba([10, 10, 11, 255]));

        let (out, _) = strip_background(&DynamicImage::ImageRgba8(img), 0.0).unwrap();
        assert_eq!(out.get_pixel(0, 0)[3], 255);
        assert_eq!(out.get_pixel(9, 9)[3], 0);
    }

    #[test]
    fn transparent_set_grows_with_the_threshold() {
        let mut img = RgbaImage::from_pixel(10, 10, Rgba([100, 100, 100, 255]));
        for x in 0..10u32 {
            img.put_pixel(x, 0, Rgba([100 + x as u8 * 5, 100, 100, 255]));
        }
        let img = DynamicImage::ImageRgba8(img);

        let mut previous = 0;
        for threshold in [0.0, 10.0, 20.0, 30.0, 50.0] {
            let (out, _) = strip_background(&img, threshold).unwrap();
            let cleared = out.pixels().filter(|p| p[3] == 0).count();
            assert!(cleared >= previous);
            previous = cleared;
        }
    }

    #[test]
    fn partial_alpha_outside_the_threshold_is_preserved() {
        let mut img = RgbaImage::from_pixel(10, 10, Rgba([0, 0, 0, 255]));
        img.put_pixel(9, 9, Rgba([255, 255, 255, 128]));

        let (out, _) = strip_background(&DynamicImage::ImageRgba8(img), 40.0).unwrap();
        assert_eq!(out.get_pixel(9, 9)[3], 128);
    }

    #[test]
    fn rgb_input_gains_an_opaque_alpha_channel() {
        let mut rgb = RgbImage::from_pixel(10, 10, Rgb([0, 0, 0]));
        rgb.put_pixel(9, 9, Rgb([255, 255, 255]));

        let (out, _) = strip_background(&DynamicImage::ImageRgb8(rgb), 40.0).unwrap();
        assert_eq!(*out.get_pixel(9, 9), Rgba([255, 255, 255, 255]));
        assert_eq!(out.get_pixel(0, 0)[3], 0);
    }

    #[test]
    fn rejects_images_smaller_than_the_sample_point() {
        assert!(strip_background(&solid_rgba(3, [0, 0, 0, 255]), 40.0).is_err());
    }

    #[test]
    fn round_trips_through_the_filesystem() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("wizard.png");
        let output = dir.path().join("out").join("wizard.png");

        let mut img = RgbaImage::from_pixel(10, 10, Rgba([20, 40, 60, 255]));
        img.put_pixel(7, 7, Rgba([250, 250, 250, 255]));
        img.save(&input).unwrap();

        let background = remove_background(&input, &output, 40.0).unwrap();
        assert_eq!(background, Rgb([20, 40, 60]));

        let written = image::open(&output).unwrap().to_rgba8();
        assert_eq!(written.get_pixel(5, 5)[3], 0);
        assert_eq!(*written.get_pixel(7, 7), Rgba([250, 250, 250, 255]));
    }

    #[test]
    fn missing_input_files_surface_as_errors() {
        let dir = tempdir().unwrap();
        let result = remove_background(
            &dir.path().join("absent.png"),
            &dir.path().join("out.png"),
            40.0,
        );
        assert!(result.is_err());
    }

    #[test]
    fn scans_png_files_in_lexicographic_order() {
        let dir = tempdir().unwrap();
        for name in ["b.png", "a.png", "c.png"] {
            RgbImage::from_pixel(1, 1, Rgb([0, 0, 0]))
                .save(dir.path().join(name))
                .unwrap();
        }
        fs::write(dir.path().join("notes.txt"), "skip me").unwrap();

        let files = collect_png_files(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, ["a.png", "b.png", "c.png"]);
    }
}
