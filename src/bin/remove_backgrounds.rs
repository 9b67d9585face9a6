use std::fs;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use bg_tools::config;
use bg_tools::strip;

fn main() -> Result<()> {
    let config = config::init_stripper()?;
    fs::create_dir_all(&config.output_dir)?;

    let files = strip::collect_png_files(&config.input_dir)?;

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    for (index, path) in files.iter().enumerate() {
        pb.set_message(format!("Processing: {}", path.display()));

        let file_name = path.file_name().unwrap_or_default();
        let output = config.output_dir.join(file_name);

        // a bad file is reported and skipped; the batch keeps going
        match strip::remove_background(path, &output, config.threshold) {
            Ok(background) => {
                pb.println(format!(
                    "[{}/{}] {} -> {} (background {:?})",
                    index + 1,
                    files.len(),
                    path.display(),
                    output.display(),
                    background.0,
                ));
            }
            Err(error) => {
                pb.println(format!("Error processing {}: {:#}", path.display(), error));
            }
        }
        pb.inc(1);
    }

    pb.finish_with_message(format!(
        "{} images processed into {}",
        files.len(),
        config.output_dir.display()
    ));

    Ok(())
}
