use clap::Subcommand;
use std::path::{Path, PathBuf};

use super::summary::PrimitiveSummary;

pub mod build;
pub mod demo;

#[derive(Subcommand)]
pub enum Commands {
    /// Build a mesh primitive from a JSON description and print its summary
    Build {
        /// JSON primitive description
        #[arg(short, long)]
        input: PathBuf,

        /// Write the summary here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Build a unit quad and print its summary
    Demo {
        /// Add a morph target that lifts the top edge of the quad
        #[arg(long)]
        morph: bool,
    },
}

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Build { input, output } => build::execute(input, output.as_deref()),
            Commands::Demo { morph } => demo::execute(*morph),
        }
    }
}

/// Print a summary as pretty JSON, to `output` or stdout.
pub(crate) fn write_summary(summary: &PrimitiveSummary, output: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            println!("Written to: {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
