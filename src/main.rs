//! Framegen - photo-booth frame image generator.

mod capability;
mod cli;
mod config;
mod error;
mod frame;
mod layout;
mod output;
mod render;

use std::process;

use clap::Parser;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::FrameError;
use crate::frame::{select_frames, validate_catalogue};
use crate::output::{frame_path, persist, write_manifest};
use crate::render::render_frame;

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new().filter_level(cli.log_level()).parse_default_env().init();

    if let Err(e) = capability::require_png().and_then(|()| run(&cli)) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), FrameError> {
    // Load config
    let config_path = config::discover_config_path(cli.config.as_deref());
    log::debug!("Config: {}", config_path.display());
    let config = Config::load(&config_path).map_err(FrameError::Config)?;

    let frames = config.frames();
    validate_catalogue(&frames)?;

    if cli.list {
        for spec in &frames {
            println!("{}\t{}\t{} cuts", spec.internal_name, spec.display_name, spec.cut_count);
        }
        return Ok(());
    }

    let frames = select_frames(frames, &cli.only)?;
    let output_dir = config.output_dir(cli.output_dir.as_deref());
    log::debug!("Output directory: {}", output_dir.display());

    for spec in &frames {
        let canvas = render_frame(spec)?;
        let path = frame_path(&output_dir, spec);
        persist(&canvas, &path)?;
        println!("Generated: {}", path.display());
    }

    if cli.manifest {
        let path = write_manifest(&output_dir, &frames)?;
        println!("Manifest: {}", path.display());
    }

    Ok(())
}
