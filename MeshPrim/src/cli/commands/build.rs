//! `build` command

use std::path::Path;

use crate::cli::description::PrimitiveDescription;
use crate::cli::summary::PrimitiveSummary;
use crate::creation::MeshPrimitiveBuilder;

/// Build the primitive described in `input` and write its summary.
pub fn execute(input: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    tracing::info!("Building mesh primitive from {}", input.display());

    let description = PrimitiveDescription::from_file(input)?;
    let mut builder = MeshPrimitiveBuilder::new();
    let primitive = description.apply(&mut builder)?;

    super::write_summary(&PrimitiveSummary::from(&primitive), output)
}
