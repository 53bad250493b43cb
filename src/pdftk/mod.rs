//! Drive the pdftk executable.
//!
//! A [`Pdftk`] handle settles once, at construction, on how pdftk is reached
//! ([`ExecutionMode`]). Every operation then validates its arguments, renders
//! an [`Invocation`](command::Invocation) for that mode and hands it to a [`ProcessRunner`].

pub mod command;
pub mod dump_data;
pub mod error;
pub mod mode;
pub mod quote;
pub mod runner;

#[cfg(test)]
pub mod mock;

use std::path::{Path, PathBuf};

use crate::page_range::PageRanges;
use command::Operation;
pub use error::{PdftkError, Result};
pub use mode::{ExecutionMode, HostPlatform};
pub use runner::{ProcessOutput, ProcessRunner, TokioProcessRunner};

/// Read-only after construction; share it freely between concurrent calls.
#[derive(Debug)]
pub struct Pdftk<R = TokioProcessRunner> {
    mode: ExecutionMode,
    runner: R,
}

impl Pdftk<TokioProcessRunner> {
    /// Handle for the current host, optionally pinned to an explicit executable
    pub fn new(executable: Option<&Path>) -> Result<Self> {
        Self::with_runner(HostPlatform::current(), executable, TokioProcessRunner)
    }
}

impl<R: ProcessRunner> Pdftk<R> {
    pub fn with_runner(
        platform: HostPlatform,
        executable: Option<&Path>,
        runner: R,
    ) -> Result<Self> {
        let mode = ExecutionMode::select(platform, executable)?;
        Ok(Pdftk { mode, runner })
    }

    pub fn mode(&self) -> &ExecutionMode {
        &self.mode
    }

    /// Number of pages in `input`, read from `pdftk <input> dump_data`
    pub async fn page_count<P: AsRef<Path>>(&self, input: P) -> Result<u32> {
        let input = require_path("input file", input.as_ref())?;
        let output = self.execute(Operation::PageCount { input }).await?;
        self.mode.read_page_count(&output.stdout)
    }

    /// Write the pages selected by `ranges` from `input` into `output`
    pub async fn split<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        ranges: &PageRanges,
        output: Q,
    ) -> Result<()> {
        let input = require_path("input file", input.as_ref())?;
        let output = require_path("output file", output.as_ref())?;
        if ranges.is_empty() {
            return Err(PdftkError::Validation("No page ranges specified".to_string()));
        }

        self.execute(Operation::Split {
            input,
            ranges: ranges.clone(),
            output,
        })
        .await?;
        Ok(())
    }

    /// Concatenate `inputs`, in the order given, into `output`
    pub async fn merge<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        inputs: &[P],
        output: Q,
    ) -> Result<()> {
        if inputs.is_empty() {
            return Err(PdftkError::Validation("No input files specified".to_string()));
        }
        let inputs = inputs
            .iter()
            .map(|p| require_path("input file", p.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        let output = require_path("output file", output.as_ref())?;

        self.execute(Operation::Merge { inputs, output }).await?;
        Ok(())
    }

    /// One file per page of `input`, named after the printf-style `output_pattern`
    pub async fn burst<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output_pattern: Q,
    ) -> Result<()> {
        let input = require_path("input file", input.as_ref())?;
        let output_pattern = require_path("output pattern", output_pattern.as_ref())?;

        self.execute(Operation::Burst {
            input,
            output_pattern,
        })
        .await?;
        Ok(())
    }

    async fn execute(&self, operation: Operation) -> Result<ProcessOutput> {
        let invocation = self.mode.assemble(&operation)?;
        tracing::debug!(
            operation = operation.name(),
            command = %invocation.describe(),
            "running pdftk"
        );
        let output = self.runner.run(&invocation).await?;
        if !output.stderr.trim().is_empty() {
            tracing::debug!(stderr = %output.stderr.trim(), "pdftk reported on stderr");
        }
        Ok(output)
    }
}

fn require_path(what: &str, path: &Path) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(PdftkError::Validation(format!("Empty {} path", what)));
    }
    Ok(path.to_path_buf())
}
