use crate::pdftk::Pdftk;
use anyhow::{Context, Result};
use std::path::Path;

pub async fn run<P: AsRef<Path>>(pdftk: &Pdftk, path: P) -> Result<()> {
    let path = path.as_ref();
    let pages = pdftk
        .page_count(path)
        .await
        .with_context(|| format!("Failed to count pages of {}", path.display()))?;

    println!("File: {}", path.display());
    println!("Pages: {}", pages);

    Ok(())
}
