use crate::pdftk::Pdftk;
use anyhow::{Context, Result};
use std::path::Path;

pub async fn run<P: AsRef<Path>, Q: AsRef<Path>>(
    pdftk: &Pdftk,
    inputs: &[P],
    output: Q,
) -> Result<()> {
    let output = output.as_ref();

    if inputs.is_empty() {
        anyhow::bail!("No input files specified");
    }

    pdftk
        .merge(inputs, output)
        .await
        .with_context(|| format!("Failed to merge into {}", output.display()))?;

    println!("Merged {} files into {}", inputs.len(), output.display());

    Ok(())
}
