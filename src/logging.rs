use anyhow::{anyhow, Result};
use std::io;
use tracing_subscriber::EnvFilter;

/// Step tracing goes to stderr and is off unless `RUST_LOG` asks for it,
/// so a failing run prints a single diagnostic line.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| anyhow!(e))
}
