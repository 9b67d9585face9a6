use anyhow::{bail, Result};
use image::RgbImage;
use rand::Rng;

use crate::gradient::{add_noise_texture, radial_gradient};
use crate::overlay::{
    ember_particles, flow_lines, glow_spots, moon, nebula, ripples, star_field, sun_rays, GlowSpec,
};
use crate::utils::{composite_over, flatten, stops};

/// Theme names in render order; each one becomes `<name>.png`.
pub const THEMES: [&str; 8] = [
    "forge-spire",
    "violet-citadel",
    "tidewatch",
    "everhollow",
    "solar-spire",
    "heartstring-tower",
    "palehowl-night",
    "caninosphere",
];

/// Renders the named theme at `size`x`size`.
///
/// Overlay placement comes from `rng`, so repeated runs differ in exact
/// pixels while keeping the same structure.
pub fn synthesize(name: &str, size: u32, rng: &mut impl Rng) -> Result<RgbImage> {
    match name {
        "forge-spire" => Ok(forge_spire(size, rng)),
        "violet-citadel" => Ok(violet_citadel(size, rng)),
        "tidewatch" => Ok(tidewatch(size, rng)),
        "everhollow" => Ok(everhollow(size, rng)),
        "solar-spire" => Ok(solar_spire(size, rng)),
        "heartstring-tower" => Ok(heartstring_tower(size, rng)),
        "palehowl-night" => Ok(palehowl_night(size, rng)),
        "caninosphere" => Ok(caninosphere(size, rng)),
        _ => bail!("unknown theme '{}'", name),
    }
}

/// Deep orange/red blend with ember particles, volcanic feel.
fn forge_spire(size: u32, rng: &mut impl Rng) -> RgbImage {
    let stops = stops(&[(80, 20, 0), (255, 100, 0), (255, 180, 50), (255, 220, 100)]);
    let mut base = radial_gradient(size, (size / 2, size / 2), &stops, 0.8);

    composite_over(&mut base, &ember_particles(size, 200, rng));

    let mut flat = flatten(base);
    add_noise_texture(&mut flat, 0.1, rng);
    flat
}

/// Purple/indigo blend with arcane glow spots.
fn violet_citadel(size: u32, rng: &mut impl Rng) -> RgbImage {
    let stops = stops(&[(20, 0, 40), (80, 20, 120), (140, 60, 200), (180, 120, 255)]);
    let mut base = radial_gradient(size, (size / 2, size / 2), &stops, 0.9);

    let glows = GlowSpec {
        count: 8,
        margin: 100,
        min_size: 80,
        max_size: 150,
        ring_step: 5,
        alpha_base: 30,
        alpha_div: 3,
        color: [150, 100, 255],
    };
    composite_over(&mut base, &glow_spots(size, &glows, rng));

    let mut flat = flatten(base);
    add_noise_texture(&mut flat, 0.08, rng);
    flat
}

/// Deep blue/teal blend with concentric ripples, oceanic depths.
fn tidewatch(size: u32, rng: &mut impl Rng) -> RgbImage {
    let stops = stops(&[(0, 20, 40), (0, 60, 100), (20, 120, 160), (40, 180, 220)]);
    let mut base = radial_gradient(size, (size / 2, size / 3), &stops, 1.2);

    composite_over(&mut base, &ripples(size));

    let mut flat = flatten(base);
    add_noise_texture(&mut flat, 0.06, rng);
    flat
}

/// Forest green blend with organic glow spots.
fn everhollow(size: u32, rng: &mut impl Rng) -> RgbImage {
    let stops = stops(&[(10, 30, 10), (20, 80, 30), (40, 120, 50), (80, 160, 80)]);
    let mut base = radial_gradient(size, (size / 2, size / 2), &stops, 0.9);

    let glows = GlowSpec {
        count: 12,
        margin: 0,
        min_size: 60,
        max_size: 120,
        ring_step: 8,
        alpha_base: 25,
        alpha_div: 8,
        color: [100, 255, 150],
    };
    composite_over(&mut base, &glow_spots(size, &glows, rng));

    let mut flat = flatten(base);
    add_noise_texture(&mut flat, 0.07, rng);
    flat
}

/// Golden yellow/white blend with radiant rays.
fn solar_spire(size: u32, rng: &mut impl Rng) -> RgbImage {
    let stops = stops(&[(60, 40, 0), (200, 150, 20), (255, 220, 80), (255, 250, 200)]);
    let mut base = radial_gradient(size, (size / 2, size / 2), &stops, 0.7);

    composite_over(&mut base, &sun_rays(size));

    let mut flat = flatten(base);
    add_noise_texture(&mut flat, 0.05, rng);
    flat
}

/// Pink/rose blend with flowing energy lines.
fn heartstring_tower(size: u32, rng: &mut impl Rng) -> RgbImage {
    let stops = stops(&[(40, 10, 30), (120, 40, 80), (200, 80, 140), (255, 150, 200)]);
    let mut base = radial_gradient(size, (size / 2, size / 2), &stops, 0.8);

    composite_over(&mut base, &flow_lines(size, 20, rng));

    let mut flat = flatten(base);
    add_noise_texture(&mut flat, 0.06, rng);
    flat
}

/// Dark navy blend with a star field and a pale moon.
fn palehowl_night(size: u32, rng: &mut impl Rng) -> RgbImage {
    let stops = stops(&[(0, 0, 10), (10, 10, 30), (20, 20, 60), (40, 40, 80)]);
    let mut base = radial_gradient(size, (size / 3, size / 4), &stops, 1.5);

    composite_over(&mut base, &star_field(size, 150, rng));
    composite_over(&mut base, &moon(size));

    let mut flat = flatten(base);
    add_noise_texture(&mut flat, 0.04, rng);
    flat
}

/// Cosmic purples and blues with nebula swirls and distant stars.
fn caninosphere(size: u32, rng: &mut impl Rng) -> RgbImage {
    let stops = stops(&[
        (5, 0, 15),
        (30, 10, 60),
        (80, 40, 120),
        (150, 80, 200),
        (100, 150, 255),
    ]);
    let mut base = radial_gradient(size, (size / 3, size / 2), &stops, 1.3);

    composite_over(&mut base, &nebula(size, 6, rng));
    composite_over(&mut base, &star_field(size, 200, rng));

    let mut flat = flatten(base);
    add_noise_texture(&mut flat, 0.08, rng);
    flat
}
