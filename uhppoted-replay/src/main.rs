//! uhppoted cache replay
//!
//! Feeds a recording of server responses through the object cache and
//! prints the resulting store as JSON.
//!
//! Usage:
//!   uhppoted-replay objects.jsonl --cycles 25

use anyhow::{Context, Result};
use clap::Parser;
use std::{fs, path::PathBuf};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;
use uhppoted_replay::{parse_recording, replay};
use uhppoted_sync::CacheConfig;

#[derive(Parser, Debug)]
#[command(name = "uhppoted-replay")]
#[command(about = "Replays recorded object responses through the uhppoted cache")]
struct Args {
    /// Recording: one response document per line
    file: PathBuf,

    /// Idle refresh cycles to run after the recording
    #[arg(short, long, default_value = "0")]
    cycles: usize,

    /// TOML cache configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => CacheConfig::default(),
    };

    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read recording {:?}", args.file))?;
    let batches = parse_recording(&text)?;
    info!("Loaded {} documents from {:?}", batches.len(), args.file);

    let output = replay(&batches, args.cycles, config).await;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn load_config(path: &PathBuf) -> Result<CacheConfig> {
    let text = fs::read_to_string(path).context("Failed to read config file")?;
    CacheConfig::from_toml_str(&text).context("Failed to parse config file")
}
