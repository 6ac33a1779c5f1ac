#![warn(clippy::all, clippy::pedantic, clippy::style, rust_2018_idioms)]
mod common;
mod config;
mod file_storage;
mod logger;

use color_eyre::eyre::Result;
use config::Settings;
use dotenv::dotenv;

fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();
    logger::init();

    let settings = Settings::from_env()?;
    log::info!(
        "converting {} into {} at sizes {:?}",
        settings.input.display(),
        settings.output_dir.display(),
        settings.sizes
    );

    file_storage::convert_svg_to_png(&settings.input, &settings.output_dir, &settings.sizes)?;

    Ok(())
}
