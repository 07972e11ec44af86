mod category;
mod config;
mod error;
mod icons;
mod waybar;
mod weather;

use std::io::Write;

use anyhow::Context;
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::{config::Config, waybar::WaybarOutput};

/// Fetches the current weather once and prints a single Waybar JSON line.
///
/// The process always exits successfully: failures reach the bar as the error record.
/// Logs go to stderr (errors only unless `RUST_LOG` says otherwise), stdout carries only the record.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env();
    let output = waybar::current_output(&config).await;

    if let Err(e) = emit(&output) {
        error!("{:#}", e);
    }
}

/// Writes the record to stdout as one line.
fn emit(output: &WaybarOutput) -> anyhow::Result<()> {
    let line = output
        .to_line()
        .context("Failed to encode Waybar output")?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", line).context("Failed to write Waybar output")?;
    stdout.flush()?;
    Ok(())
}
