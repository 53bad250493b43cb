use std::ffi::OsString;
use std::path::PathBuf;

use super::dump_data::PAGE_COUNT_FIELD;
use super::error::Result;
use super::mode::{ExecutionMode, DEFAULT_PROGRAM};
use super::quote::quote_tokens;
use crate::page_range::PageRanges;

/// One request to pdftk, before it is rendered for a particular mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    PageCount {
        input: PathBuf,
    },
    Split {
        input: PathBuf,
        ranges: PageRanges,
        output: PathBuf,
    },
    Merge {
        inputs: Vec<PathBuf>,
        output: PathBuf,
    },
    Burst {
        input: PathBuf,
        output_pattern: PathBuf,
    },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::PageCount { .. } => "page_count",
            Operation::Split { .. } => "split",
            Operation::Merge { .. } => "merge",
            Operation::Burst { .. } => "burst",
        }
    }

    /// pdftk arguments in order, without the program name
    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::new();
        match self {
            Operation::PageCount { input } => {
                args.push(input.into());
                args.push("dump_data".into());
            }
            Operation::Split {
                input,
                ranges,
                output,
            } => {
                args.push(input.into());
                args.push("cat".into());
                args.extend(ranges.as_slice().iter().map(OsString::from));
                args.push("output".into());
                args.push(output.into());
            }
            Operation::Merge { inputs, output } => {
                args.extend(inputs.iter().map(OsString::from));
                args.push("cat".into());
                args.push("output".into());
                args.push(output.into());
            }
            Operation::Burst {
                input,
                output_pattern,
            } => {
                args.push(input.into());
                args.push("burst".into());
                args.push("output".into());
                args.push(output_pattern.into());
            }
        }
        args
    }
}

/// A fully rendered command, ready for a [`ProcessRunner`](super::runner::ProcessRunner).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Shell { script: String },
    Direct { program: PathBuf, args: Vec<OsString> },
}

impl Invocation {
    /// Human readable form for logs and error messages
    pub fn describe(&self) -> String {
        match self {
            Invocation::Shell { script } => script.clone(),
            Invocation::Direct { program, args } => {
                let mut parts = vec![program.display().to_string()];
                parts.extend(args.iter().map(|a| a.to_string_lossy().into_owned()));
                parts.join(" ")
            }
        }
    }
}

impl ExecutionMode {
    /// Render `operation` for this mode. Pure: no filesystem or process access.
    ///
    /// In shell mode the page count is reduced to the bare number by a
    /// `grep | awk` pipeline; direct mode hands back raw `dump_data` output.
    /// The pipeline only runs once pdftk itself exited zero, so a pdftk
    /// failure keeps its exit status and stderr.
    pub fn assemble(&self, operation: &Operation) -> Result<Invocation> {
        let args = operation.args();
        match self {
            ExecutionMode::ShellByName => {
                let command = format!("{} {}", DEFAULT_PROGRAM, quote_tokens(&args)?);
                let script = match operation {
                    Operation::PageCount { .. } => format!(
                        "dump=$({}) || exit $?; printf '%s\\n' \"$dump\" | grep '^{}:' | awk '{{print $2}}'",
                        command, PAGE_COUNT_FIELD
                    ),
                    _ => command,
                };
                Ok(Invocation::Shell { script })
            }
            ExecutionMode::DirectByPath(program) => Ok(Invocation::Direct {
                program: program.clone(),
                args,
            }),
        }
    }
}
