use image::{Rgb, RgbImage, Rgba, RgbaImage};
use imageproc::drawing::draw_filled_circle_mut;
use palette::Srgb;
use rand::Rng;

use crate::constants::GRADIENT_STEPS;
use crate::utils::sample_stops;

/// Renders a square radial gradient from an ordered list of color stops.
///
/// Concentric discs are filled from the largest radius down to zero so the
/// first stop ends up at the center and the last at the rim. Pixels beyond
/// the outermost radius keep the initial black fill.
pub fn radial_gradient(
    size: u32,
    center: (u32, u32),
    stops: &[Srgb<f32>],
    radius_factor: f32,
) -> RgbaImage {
    let max_radius = size as f32 * radius_factor;
    let mut img = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 255]));

    let center = (center.0 as i32, center.1 as i32);
    for i in (0..GRADIENT_STEPS).rev() {
        let progress = i as f32 / (GRADIENT_STEPS - 1) as f32;
        let radius = max_radius * progress;
        let Rgb([r, g, b]) = sample_stops(stops, progress);
        draw_filled_circle_mut(&mut img, center, radius as i32, Rgba([r, g, b, 255]));
    }

    img
}

/// Final texture pass: every channel gets a uniform random offset in
/// [-intensity/2, +intensity/2] on the 0..1 scale, clipped to range.
pub fn add_noise_texture(img: &mut RgbImage, intensity: f32, rng: &mut impl Rng) {
    for pixel in img.pixels_mut() {
        for channel in pixel.0.iter_mut() {
            let value = *channel as f32 / 255.0 + rng.gen::<f32>() * intensity - intensity / 2.0;
            *channel = (value.clamp(0.0, 1.0) * 255.0) as u8;
        }
    }
}
