use std::path::PathBuf;

#[derive(Debug)]
pub struct GeneratorConfig {
    pub output_dir: PathBuf,
}

#[derive(Debug)]
pub struct StripperConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub threshold: f32,
}
