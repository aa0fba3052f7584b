use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use abi_export::export_all;

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

/// Takes no arguments: the artifact and output locations are fixed
/// relative to the working directory.
#[derive(Parser)]
#[command(version, about = "Export core contract ABIs from Hardhat build artifacts")]
struct Cli {}

fn main() -> Result<()> {
    setup_logging();
    let _cli = Cli::parse();
    let current_dir = std::env::current_dir()?;
    export_all(current_dir)?;
    Ok(())
}
