use std::fs;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};

use bg_tools::config;
use bg_tools::constants::CANVAS_SIZE;
use bg_tools::themes;

fn main() -> Result<()> {
    let config = config::init_generator()?;
    fs::create_dir_all(&config.output_dir)?;

    let mut rng = rand::thread_rng();

    let pb = ProgressBar::new(themes::THEMES.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );

    for name in themes::THEMES {
        pb.set_message(format!("Rendering: {}", name));
        let image = themes::synthesize(name, CANVAS_SIZE, &mut rng)?;

        let path = config.output_dir.join(format!("{}.png", name));
        image.save(&path)?;
        pb.println(format!("Saved: {}", path.display()));
        pb.inc(1);
    }

    pb.finish_with_message(format!(
        "All {} backgrounds generated in {}",
        themes::THEMES.len(),
        config.output_dir.display()
    ));

    Ok(())
}
