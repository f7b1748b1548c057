//! trueno-raster: batch renderer for drawing scripts
//!
//! Reads a line-oriented drawing script and writes every `saveCanvas` to a
//! PNG file in the output directory.
//!
//! Run: `trueno-raster input.txt out/`

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use trueno_raster::config::RenderConfig;
use trueno_raster::script::ScriptRunner;

/// trueno-raster: render drawing scripts to PNG
#[derive(Parser, Debug)]
#[command(name = "trueno-raster")]
#[command(author = "PAIML Team")]
#[command(version)]
#[command(about = "Render line/polygon/ellipse/curve drawing scripts to PNG", long_about = None)]
struct Cli {
    /// Script file, one command per line
    script: PathBuf,

    /// Directory that saved canvases are written to
    output_dir: PathBuf,

    /// Config file path (YAML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log every executed command
    #[arg(short, long)]
    verbose: bool,

    /// Exit with failure if any script line was skipped
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => RenderConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => RenderConfig::default(),
    };

    let mut runner = ScriptRunner::with_config(&cli.output_dir, config);
    let report = runner
        .run_file(&cli.script)
        .with_context(|| format!("failed to run script {}", cli.script.display()))?;

    for skipped in &report.skipped {
        eprintln!("skipped {skipped}");
    }
    println!(
        "{} commands executed, {} images saved, {} lines skipped",
        report.executed,
        report.saved.len(),
        report.skipped.len()
    );

    if cli.strict && !report.skipped.is_empty() {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}
