use anyhow::Context;
use std::path::Path;
use simplelog::{ColorChoice, Config as LogConfig, LevelFilter, TermLogger, TerminalMode};
use tunesweep::{LocalFs, SourceFs};

/// Folder holding the music to gather (e.g. a mounted phone)
const SOURCE_DIR: &str = "/run/media/phone/Music";

/// Flat folder receiving every collected track
const OUTPUT_DIR: &str = "/home/music/Collected";

fn main() -> anyhow::Result<()> {
    TermLogger::init(
        LevelFilter::Warn,
        LogConfig::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;

    println!("tunesweep v{}", tunesweep::VERSION);
    println!("Source reachable: {}", LocalFs.exists(Path::new(SOURCE_DIR)));

    tunesweep::collect(SOURCE_DIR, OUTPUT_DIR)
        .with_context(|| format!("Failed to collect into {}", OUTPUT_DIR))?;

    Ok(())
}
