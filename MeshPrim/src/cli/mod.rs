//! meshprim CLI - build glTF mesh primitives from JSON descriptions

pub mod commands;
pub mod description;
pub mod summary;

use clap::Parser;
use commands::Commands;

#[derive(Parser)]
#[command(name = "meshprim")]
#[command(about = "meshprim: glTF mesh primitive builder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Run the meshprim CLI
pub fn run_cli() -> anyhow::Result<()> {
    // Setup logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    cli.command.execute()?;

    Ok(())
}
