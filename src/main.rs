mod scene;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rasterkit::config::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use rasterkit::prelude::*;

/// Render the demo scene to a PNG file.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Arguments {
    /// Canvas width in pixels
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// Paint each rasterized pixel as a square of this size
    #[arg(short, long, default_value_t = 1)]
    scale: u32,

    /// Rasterize without clipping against the canvas
    #[arg(long)]
    no_clip: bool,

    /// Where to write the image
    #[arg(short, long, default_value = "scene.png")]
    output: PathBuf,
}

fn render(args: &Arguments) -> rasterkit::Result<()> {
    let config = CanvasConfig::default()
        .with_size(args.width, args.height)
        .with_pixel_scale(args.scale)
        .with_clipping(!args.no_clip);
    let mut canvas = Canvas::new(config)?;

    let window = canvas.window();
    let sprites = scene::build(window.width() as u32, window.height() as u32);
    for sprite in &sprites {
        canvas.draw_sprite(sprite);
    }
    log::debug!("drew {} sprites", sprites.len());

    canvas.save(&args.output)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Arguments::parse();
    match render(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("{error}");
            ExitCode::FAILURE
        }
    }
}
