use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use geotool::settings::EngineConfig;
use geotool::{init_logging, session, RasterSurface, Workspace};

/// Runs a scripted editing session without a window and writes the results.
#[derive(Parser, Debug)]
#[command(name = "geotool", version, about)]
struct Args {
    /// Engine config (.toml or .json). Defaults to the platform config path.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Write the last frame as a PNG
    #[arg(long)]
    png: Option<PathBuf>,

    /// Write the serialized scene to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<EngineConfig> {
    let path = match path {
        Some(path) => return Ok(EngineConfig::load_from_file(&path)?),
        None => EngineConfig::default_path(),
    };
    match path {
        Ok(path) => Ok(EngineConfig::load_or_default(&path)?),
        Err(e) => {
            tracing::warn!("{}, using default engine config", e);
            Ok(EngineConfig::default())
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let args = Args::parse();

    let config = load_config(args.config).context("loading engine config")?;
    let workspace = Workspace::new(config);
    let surface = RasterSurface::new(args.width, args.height)?;
    workspace.attach_surface(Box::new(surface.clone()));

    let report = session::run(&workspace)?;
    tracing::info!(
        "Session finished: {} shapes, {} frames, selection {:?}",
        report.shapes,
        report.frames,
        report.selected_color
    );

    if let Some(png) = &args.png {
        surface.save_png(png)?;
        tracing::info!("Wrote {}", png.display());
    }

    match &args.output {
        Some(path) => std::fs::write(path, &report.serialized)
            .with_context(|| format!("writing {}", path.display()))?,
        None => println!("{}", report.serialized),
    }

    workspace.dispose();
    Ok(())
}
