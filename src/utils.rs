use image::{DynamicImage, Pixel, Rgb, RgbImage, RgbaImage};
use palette::Srgb;

pub fn stop(r: u8, g: u8, b: u8) -> Srgb<f32> {
    Srgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

pub fn stops(table: &[(u8, u8, u8)]) -> Vec<Srgb<f32>> {
    table.iter().map(|&(r, g, b)| stop(r, g, b)).collect()
}

pub fn interpolate_color(color1: &Srgb<f32>, color2: &Srgb<f32>, t: f32) -> Srgb<f32> {
    Srgb::new(
        color1.red + (color2.red - color1.red) * t,
        color1.green + (color2.green - color1.green) * t,
        color1.blue + (color2.blue - color1.blue) * t,
    )
}

pub fn srgb_to_image_rgb(color: Srgb<f32>) -> Rgb<u8> {
    Rgb([
        (color.red.clamp(0.0, 1.0) * 255.0) as u8,
        (color.green.clamp(0.0, 1.0) * 255.0) as u8,
        (color.blue.clamp(0.0, 1.0) * 255.0) as u8,
    ])
}

/// Color at `progress` along a multi-stop gradient, `progress` in [0, 1].
///
/// Two stops interpolate directly; more stops interpolate within the
/// segment the progress fraction falls into.
pub fn sample_stops(stops: &[Srgb<f32>], progress: f32) -> Rgb<u8> {
    let color = if stops.len() == 2 {
        interpolate_color(&stops[0], &stops[1], progress)
    } else {
        let segment = progress * (stops.len() - 1) as f32;
        let idx = segment as usize;
        if idx >= stops.len() - 1 {
            stops[stops.len() - 1]
        } else {
            interpolate_color(&stops[idx], &stops[idx + 1], segment - idx as f32)
        }
    };

    srgb_to_image_rgb(color)
}

/// Euclidean distance between two colors in RGB space.
///
/// Channel differences are taken in f32 so they cannot wrap.
pub fn rgb_distance(a: Rgb<u8>, b: Rgb<u8>) -> f32 {
    let dr = a[0] as f32 - b[0] as f32;
    let dg = a[1] as f32 - b[1] as f32;
    let db = a[2] as f32 - b[2] as f32;
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Alpha-composites `overlay` on top of `base` in place.
pub fn composite_over(base: &mut RgbaImage, overlay: &RgbaImage) {
    debug_assert_eq!(base.dimensions(), overlay.dimensions());

    for (bottom, top) in base.pixels_mut().zip(overlay.pixels()) {
        bottom.blend(top);
    }
}

/// Drops the alpha channel, keeping the composited color values.
pub fn flatten(img: RgbaImage) -> RgbImage {
    DynamicImage::ImageRgba8(img).to_rgb8()
}
