use crate::constants::{
    GENERATOR_OUTPUT_DIR, STRIPPER_INPUT_DIR, STRIPPER_OUTPUT_DIR, VERSION,
};
use crate::types::{GeneratorConfig, StripperConfig};

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{App, Arg};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File};
use serde_derive::Deserialize;

#[derive(Debug, Deserialize)]
struct SerializedGeneratorConfig {
    output_dir: String,
}

#[derive(Debug, Deserialize)]
struct SerializedStripperConfig {
    input_dir: String,
    output_dir: String,
    threshold: String,
}

fn load_config(config_path: Option<&str>) -> Result<Config, config::ConfigError> {
    let mut builder = ConfigBuilder::<DefaultState>::default()
        .set_default("generator.output_dir", GENERATOR_OUTPUT_DIR)?
        .set_default("stripper.input_dir", STRIPPER_INPUT_DIR)?
        .set_default("stripper.output_dir", STRIPPER_OUTPUT_DIR)?
        .set_default("stripper.threshold", "40")?;

    let default_config_path = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from(""))
        .join(".config/bg-tools/config.toml");

    if default_config_path.exists() {
        builder = ConfigBuilder::<DefaultState>::add_source(
            builder,
            File::from(default_config_path).required(false),
        );
    }

    if let Some(path) = config_path {
        builder = builder.add_source(File::with_name(path).required(true));
    }

    builder.build()
}

fn config_file_arg() -> Arg<'static> {
    Arg::with_name("config")
        .short('c')
        .long("config")
        .value_name("/path/to/config.toml")
        .help("Sets a custom config file")
        .takes_value(true)
}

pub fn init_generator() -> Result<GeneratorConfig> {
    let matches = App::new("Background Generator")
        .version(VERSION)
        .about("Renders the eight themed site background images")
        .after_help("The [generator] table of ~/.config/bg-tools/config.toml overrides the output directory. The tool takes no per-run arguments; themes, canvas size, and colors are fixed.")
        .arg(config_file_arg())
        .get_matches();

    let config = load_config(matches.value_of("config"))?;
    let config: SerializedGeneratorConfig = config.get("generator")?;

    Ok(GeneratorConfig {
        output_dir: PathBuf::from(config.output_dir),
    })
}

pub fn init_stripper() -> Result<StripperConfig> {
    let matches = App::new("Background Stripper")
        .version(VERSION)
        .about("Keys out the solid background color of every PNG in a directory")
        .after_help("The [stripper] table of ~/.config/bg-tools/config.toml overrides the input/output directories and the distance threshold. The tool takes no per-run arguments.")
        .arg(config_file_arg())
        .get_matches();

    let config = load_config(matches.value_of("config"))?;
    let config: SerializedStripperConfig = config.get("stripper")?;

    let threshold: f32 = config
        .threshold
        .parse()
        .map_err(|e| anyhow!("Failed to parse threshold: {}", e))?;

    Ok(StripperConfig {
        input_dir: PathBuf::from(config.input_dir),
        output_dir: PathBuf::from(config.output_dir),
        threshold,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn a_config_file_overrides_defaults_but_keeps_the_rest() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[stripper]\nthreshold = \"25\"\n\n[generator]\noutput_dir = \"rendered\"\n",
        )
        .unwrap();

        let config = load_config(path.to_str()).unwrap();
        let stripper: SerializedStripperConfig = config.get("stripper").unwrap();
        let generator: SerializedGeneratorConfig = config.get("generator").unwrap();

        assert_eq!(stripper.threshold, "25");
        assert_eq!(stripper.input_dir, STRIPPER_INPUT_DIR);
        assert_eq!(generator.output_dir, "rendered");
    }
}
