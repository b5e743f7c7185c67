use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gardenreach::config::{Params, ParamsFile};
use gardenreach::garden::Garden;
use gardenreach::{render, report};

/// Count garden plots reachable on an infinitely tiled map.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Map file
    #[arg(default_value = "21.in")]
    input: PathBuf,

    /// JSON file overriding `target_steps` and `diagnostic_step`
    #[arg(long)]
    config: Option<PathBuf>,

    /// Target step count, overrides the config file
    #[arg(long)]
    steps: Option<u64>,

    /// Print the outcome as JSON instead of the transcript
    #[arg(long)]
    json: bool,

    /// Save the final frontier as a PNG
    #[arg(long)]
    render: Option<PathBuf>,
}

fn main() -> Result<()> {
    let start = Instant::now();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut params = Params::default();
    if let Some(path) = &args.config {
        let file = ParamsFile::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?;
        params = params.merged(file);
    }
    if let Some(steps) = args.steps {
        params.target_steps = steps;
    }

    let garden = Garden::load(&args.input)
        .with_context(|| format!("failed to load map {}", args.input.display()))?;
    let (outcome, timings) = gardenreach::solve(&garden, &params)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        report::write_transcript(&mut std::io::stdout().lock(), &outcome)?;
    }

    eprintln!("\nTimings:");
    for t in &timings {
        eprintln!("  {:20} {:8.1} ms", t.name, t.ms);
    }

    if let Some(path) = &args.render {
        let img = render::render_frontier(&garden, &outcome.frontier);
        image::save_buffer(
            path,
            &img.rgba,
            img.w as u32,
            img.h as u32,
            image::ColorType::Rgba8,
        )
        .with_context(|| format!("failed to save {}", path.display()))?;
        eprintln!("Saved {}", path.display());
    }

    if !args.json {
        report::write_elapsed(&mut std::io::stdout().lock(), start.elapsed())?;
    }
    Ok(())
}
