use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut, draw_line_segment_mut};
use rand::seq::SliceRandom;
use rand::Rng;

/// Parameters for a field of soft glow spots.
pub struct GlowSpec {
    pub count: u32,
    /// Margin kept between spot centers and the canvas edge.
    pub margin: u32,
    pub min_size: u32,
    pub max_size: u32,
    /// Diameter decrement between consecutive discs of one spot.
    pub ring_step: u32,
    pub alpha_base: i32,
    pub alpha_div: i32,
    pub color: [u8; 3],
}

/// Transparent layer sized to the canvas. Shapes drawn into a layer
/// replace pixels; blending happens once, when the layer is composited
/// over the base.
fn layer(size: u32) -> RgbaImage {
    RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]))
}

/// Glowing ember dots scattered across the whole canvas.
pub fn ember_particles(size: u32, count: u32, rng: &mut impl Rng) -> RgbaImage {
    let mut img = layer(size);

    for _ in 0..count {
        let x = rng.gen_range(0..=size) as i32;
        let y = rng.gen_range(0..=size) as i32;
        let particle_size = rng.gen_range(1..=4i32);
        let brightness = rng.gen_range(150..=255u8);

        let color = Rgba([brightness, brightness / 2, 0, 180]);
        draw_filled_circle_mut(&mut img, (x, y), particle_size / 2, color);
    }

    img
}

/// Soft radial glows built from concentric discs whose alpha rises toward
/// the center.
pub fn glow_spots(size: u32, spec: &GlowSpec, rng: &mut impl Rng) -> RgbaImage {
    let mut img = layer(size);
    let [red, green, blue] = spec.color;

    for _ in 0..spec.count {
        let x = rng.gen_range(spec.margin..=size - spec.margin) as i32;
        let y = rng.gen_range(spec.margin..=size - spec.margin) as i32;
        let glow_size = rng.gen_range(spec.min_size..=spec.max_size) as i32;

        let mut diameter = glow_size;
        while diameter > 0 {
            let alpha = (spec.alpha_base - diameter / spec.alpha_div).max(0) as u8;
            let color = Rgba([red, green, blue, alpha]);
            draw_filled_circle_mut(&mut img, (x, y), diameter / 2, color);
            diameter -= spec.ring_step as i32;
        }
    }

    img
}

/// Concentric water ripples radiating from the canvas center, fading as
/// they widen.
pub fn ripples(size: u32) -> RgbaImage {
    let mut img = layer(size);
    let center = (size as i32 / 2, size as i32 / 2);

    for radius in (50..size).step_by(60) {
        let alpha = (40 - radius as i32 / 50).max(0) as u8;
        let color = Rgba([100, 200, 255, alpha]);
        draw_ring(&mut img, center, radius as i32, 2, color);
    }

    img
}

/// Straight radiant rays from the center, one every 15 degrees, reaching
/// past the canvas edge.
pub fn sun_rays(size: u32) -> RgbaImage {
    let mut img = layer(size);
    let cx = size as f32 / 2.0;
    let cy = size as f32 / 2.0;

    for angle in (0..360).step_by(15) {
        let theta = (angle as f32).to_radians();
        let end = (cx + theta.cos() * size as f32, cy + theta.sin() * size as f32);
        draw_thick_line(&mut img, (cx, cy), end, 3, Rgba([255, 255, 150, 30]));
    }

    img
}

/// Sinusoidal energy lines that fade out along their length.
pub fn flow_lines(size: u32, count: u32, rng: &mut impl Rng) -> RgbaImage {
    let mut img = layer(size);

    for i in 0..count {
        let start_x = rng.gen_range(0..=size / 4) as f32;
        let start_y = rng.gen_range(0..=size) as f32;

        let mut points = Vec::new();
        for t in (0..100).step_by(5) {
            let t = t as f32;
            let x = start_x + t * 8.0 + 50.0 * (t * 0.1 + i as f32).sin();
            let y = start_y + t * 2.0 + 30.0 * (t * 0.15 + i as f32).cos();
            if x >= 0.0 && x <= size as f32 && y >= 0.0 && y <= size as f32 {
                points.push((x, y));
            }
        }

        for (j, segment) in points.windows(2).enumerate() {
            let alpha = (60 - j as i32 * 2).max(0) as u8;
            let color = Rgba([255, 150, 200, alpha]);
            draw_thick_line(&mut img, segment[0], segment[1], 2, color);
        }
    }

    img
}

/// Scattered stars, most of them a single pixel.
pub fn star_field(size: u32, star_count: u32, rng: &mut impl Rng) -> RgbaImage {
    // weighted toward the smallest size
    const STAR_SIZES: [u32; 6] = [1, 1, 1, 2, 2, 3];

    let mut img = layer(size);
    for _ in 0..star_count {
        let x = rng.gen_range(0..=size);
        let y = rng.gen_range(0..=size);
        let brightness = rng.gen_range(50..=255u8);
        let size_var = *STAR_SIZES.choose(rng).unwrap_or(&1);

        let color = Rgba([brightness, brightness, brightness, 200]);
        if size_var == 1 {
            if x < size && y < size {
                img.put_pixel(x, y, color);
            }
        } else {
            let center = (x as i32, y as i32);
            draw_filled_circle_mut(&mut img, center, (size_var / 2) as i32, color);
        }
    }

    img
}

/// A pale moon with a soft halo in the upper-right quadrant.
pub fn moon(size: u32) -> RgbaImage {
    let mut img = layer(size);
    let center = ((size * 3 / 4) as i32, (size / 4) as i32);
    let moon_radius = 80i32;

    for r in (moon_radius + 1..=moon_radius + 40).rev().step_by(3) {
        let alpha = (15 - (r - moon_radius)).max(0) as u8;
        draw_filled_circle_mut(&mut img, center, r, Rgba([200, 200, 220, alpha]));
    }
    draw_filled_circle_mut(&mut img, center, moon_radius, Rgba([220, 220, 240, 200]));

    img
}

/// Layered nebula clouds, each a jittered ring of soft discs.
pub fn nebula(size: u32, cloud_count: u32, rng: &mut impl Rng) -> RgbaImage {
    const LAYER_COLORS: [Rgba<u8>; 3] = [
        Rgba([150, 100, 255, 20]),
        Rgba([100, 200, 255, 15]),
        Rgba([255, 150, 200, 10]),
    ];

    let mut img = layer(size);
    for _ in 0..cloud_count {
        let center_x = rng.gen_range(100..=size - 100) as f32;
        let center_y = rng.gen_range(100..=size - 100) as f32;

        for cloud_layer in 0..3u32 {
            let radius = (rng.gen_range(80..=200) + cloud_layer * 30) as f32;
            let color = LAYER_COLORS[cloud_layer as usize % LAYER_COLORS.len()];
            let glow_size = (20 + cloud_layer * 10) as i32;

            for angle in (0..360).step_by(10) {
                let theta = (angle as f32).to_radians();
                let point_radius = radius * rng.gen_range(0.7..1.3);
                let x = center_x + theta.cos() * point_radius;
                let y = center_y + theta.sin() * point_radius;

                if x >= 0.0 && x <= size as f32 && y >= 0.0 && y <= size as f32 {
                    draw_filled_circle_mut(&mut img, (x as i32, y as i32), glow_size, color);
                }
            }
        }
    }

    img
}

fn draw_ring(img: &mut RgbaImage, center: (i32, i32), radius: i32, width: i32, color: Rgba<u8>) {
    for w in 0..width {
        draw_hollow_circle_mut(img, center, radius - w, color);
    }
}

/// Approximates a wide stroke with parallel unit-offset segments.
fn draw_thick_line(
    img: &mut RgbaImage,
    start: (f32, f32),
    end: (f32, f32),
    width: u32,
    color: Rgba<u8>,
) {
    let dx = end.0 - start.0;
    let dy = end.1 - start.1;
    let length = (dx * dx + dy * dy).sqrt();
    if length == 0.0 {
        return;
    }

    let (nx, ny) = (-dy / length, dx / length);
    for step in 0..width {
        let offset = step as f32 - (width as f32 - 1.0) / 2.0;
        draw_line_segment_mut(
            img,
            (start.0 + nx * offset, start.1 + ny * offset),
            (end.0 + nx * offset, end.1 + ny * offset),
            color,
        );
    }
}
