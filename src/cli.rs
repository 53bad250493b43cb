use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdftk-run")]
#[command(about = "Count, split, merge and burst PDFs through pdftk, with MCP server support")]
#[command(version)]
pub struct Cli {
    /// Path to the pdftk executable (required on Windows)
    #[arg(long, global = true, env = "PDFTK_PATH")]
    pub pdftk: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run as MCP server
    Mcp,

    /// Print the number of pages in a PDF
    #[command(alias = "pages")]
    PageCount {
        /// PDF file to inspect
        path: PathBuf,
    },

    /// Copy page ranges into a new PDF
    #[command(alias = "cat")]
    Split {
        /// PDF file to take pages from
        path: PathBuf,

        /// Page ranges, passed to pdftk as given (e.g., "1-5,10,15-end" or "1 3-5 9")
        #[arg(required = true)]
        pages: Vec<String>,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Combine multiple PDFs into one, in the order given
    Merge {
        /// PDF files to merge
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Write every page to its own PDF
    Burst {
        /// PDF file to burst
        path: PathBuf,

        /// printf-style output pattern
        #[arg(short, long, default_value = "pg_%04d.pdf")]
        output: PathBuf,
    },
}
