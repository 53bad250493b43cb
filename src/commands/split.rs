use crate::page_range::PageRanges;
use crate::pdftk::Pdftk;
use anyhow::{Context, Result};
use std::path::Path;

pub async fn run<P: AsRef<Path>, Q: AsRef<Path>>(
    pdftk: &Pdftk,
    input: P,
    pages: &[String],
    output: Q,
) -> Result<()> {
    let input = input.as_ref();
    let output = output.as_ref();
    let ranges = PageRanges::from_list(pages);

    if ranges.is_empty() {
        anyhow::bail!("No pages specified");
    }

    pdftk
        .split(input, &ranges, output)
        .await
        .with_context(|| format!("Failed to split {}", input.display()))?;

    println!(
        "Extracted {} range(s) ({}) to {}",
        ranges.len(),
        ranges,
        output.display()
    );

    Ok(())
}
