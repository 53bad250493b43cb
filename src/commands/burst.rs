use crate::pdftk::Pdftk;
use anyhow::{Context, Result};
use std::path::Path;

pub async fn run<P: AsRef<Path>, Q: AsRef<Path>>(
    pdftk: &Pdftk,
    input: P,
    pattern: Q,
) -> Result<()> {
    let input = input.as_ref();
    let pattern = pattern.as_ref();

    // pdftk writes into the directory of the pattern but will not create it
    if let Some(dir) = pattern.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }

    pdftk
        .burst(input, pattern)
        .await
        .with_context(|| format!("Failed to burst {}", input.display()))?;

    println!("Burst {} into {}", input.display(), pattern.display());

    Ok(())
}
