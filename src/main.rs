mod cli;
mod commands;
mod mcp;
mod page_range;
mod pdftk;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use pdftk::Pdftk;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout belongs to the MCP transport, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let pdftk = Pdftk::new(cli.pdftk.as_deref()).context("Failed to set up pdftk")?;

    match cli.command {
        Commands::Mcp => {
            mcp::run_server(Arc::new(pdftk)).await?;
        }
        Commands::PageCount { path } => {
            commands::page_count::run(&pdftk, &path).await?;
        }
        Commands::Split {
            path,
            pages,
            output,
        } => {
            commands::split::run(&pdftk, &path, pages.as_slice(), &output).await?;
        }
        Commands::Merge { inputs, output } => {
            commands::merge::run(&pdftk, inputs.as_slice(), &output).await?;
        }
        Commands::Burst { path, output } => {
            commands::burst::run(&pdftk, &path, &output).await?;
        }
    }

    Ok(())
}
