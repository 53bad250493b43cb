use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

use super::command::Invocation;
use super::error::{PdftkError, Result};

/// Captured output of a child that exited with status zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs one [`Invocation`] to completion.
///
/// Implementations spawn exactly one process per call, never retry and
/// never time out; a hanging pdftk hangs the returned future.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, invocation: &Invocation) -> Result<ProcessOutput>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioProcessRunner;

impl TokioProcessRunner {
    /// Shell scripts are POSIX-quoted, so they only ever go to `sh`
    fn build_command(invocation: &Invocation) -> Result<Command> {
        let mut cmd = match invocation {
            Invocation::Shell { .. } if cfg!(windows) => {
                return Err(PdftkError::Configuration(
                    "Shell invocations need a POSIX shell; configure an explicit pdftk path"
                        .to_string(),
                ))
            }
            Invocation::Shell { script } => {
                let mut cmd = Command::new("sh");
                cmd.arg("-c").arg(script);
                cmd
            }
            Invocation::Direct { program, args } => {
                let mut cmd = Command::new(program);
                cmd.args(args);
                cmd
            }
        };
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        Ok(cmd)
    }
}

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn run(&self, invocation: &Invocation) -> Result<ProcessOutput> {
        let described = invocation.describe();
        tracing::debug!(command = %described, "spawning pdftk");

        let output = Self::build_command(invocation)?
            .output()
            .await
            .map_err(|e| {
                let message = if e.kind() == std::io::ErrorKind::NotFound {
                    format!("executable not found: {}", e)
                } else {
                    format!("failed to spawn: {}", e)
                };
                PdftkError::ExternalProcess {
                    command: described.clone(),
                    message,
                }
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        tracing::debug!(
            status = %output.status,
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "pdftk exited"
        );

        if !output.status.success() {
            tracing::warn!(command = %described, status = %output.status, "pdftk failed");
            return Err(PdftkError::ExternalProcess {
                command: described,
                message: failure_message(&stdout, &stderr, output.status),
            });
        }

        Ok(ProcessOutput { stdout, stderr })
    }
}

/// Prefer what the tool said on stderr, then stdout, then the bare status
fn failure_message(stdout: &str, stderr: &str, status: std::process::ExitStatus) -> String {
    [stderr.trim(), stdout.trim()]
        .into_iter()
        .find(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| status.to_string())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use crate::pdftk::quote::quote_tokens;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_shell_round_trips_quoted_tokens() {
        let tokens = [
            "plain",
            "with space",
            "it's",
            "\"dq\"",
            "$(echo injected)",
            "`id`;ls|cat&",
            "*",
            "",
        ];
        let script = format!("printf '%s\\n' {}", quote_tokens(&tokens).unwrap());
        let output = TokioProcessRunner
            .run(&Invocation::Shell { script })
            .await
            .unwrap();

        let lines: Vec<&str> = output.stdout.lines().collect();
        assert_eq!(lines, tokens);
    }

    #[tokio::test]
    async fn test_non_zero_exit_carries_stderr() {
        let invocation = Invocation::Shell {
            script: "echo 'Error: Unable to find file.' >&2; exit 3".to_string(),
        };
        let err = TokioProcessRunner.run(&invocation).await.unwrap_err();
        match err {
            PdftkError::ExternalProcess { message, .. } => {
                assert_eq!(message, "Error: Unable to find file.")
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_executable() {
        let invocation = Invocation::Direct {
            program: PathBuf::from("/nonexistent/bin/pdftk"),
            args: vec!["dump_data".into()],
        };
        let err = TokioProcessRunner.run(&invocation).await.unwrap_err();
        assert!(matches!(err, PdftkError::ExternalProcess { .. }));
    }

    #[tokio::test]
    async fn test_direct_passes_arguments_literally() {
        let invocation = Invocation::Direct {
            program: PathBuf::from("printf"),
            args: vec!["%s|".into(), "a b".into(), "$HOME".into()],
        };
        let output = TokioProcessRunner.run(&invocation).await.unwrap();
        assert_eq!(output.stdout, "a b|$HOME|");
    }
}
