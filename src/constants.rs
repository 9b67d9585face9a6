pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Edge length of every generated background, in pixels.
pub const CANVAS_SIZE: u32 = 1200;

/// Number of concentric rings rendered per radial gradient.
pub const GRADIENT_STEPS: u32 = 256;

/// Coordinate sampled to detect an image's background color.
///
/// This exact point is part of the observable contract; moving it to a
/// "smarter" sample changes which pixels get keyed out.
pub const SAMPLE_POINT: (u32, u32) = (5, 5);

pub const GENERATOR_OUTPUT_DIR: &str = "content-bg";
pub const STRIPPER_INPUT_DIR: &str = "wizard-images";
pub const STRIPPER_OUTPUT_DIR: &str = "wizard-images-transparent";
