use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::command::Invocation;
use super::error::Result;
use super::runner::{ProcessOutput, ProcessRunner};

/// Test double that records every invocation and replays queued responses.
/// With nothing queued it answers with empty, successful output.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    calls: Arc<Mutex<Vec<Invocation>>>,
    responses: Arc<Mutex<VecDeque<Result<ProcessOutput>>>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_with(&self, response: Result<ProcessOutput>) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub fn succeed_with(&self, stdout: &str) {
        self.respond_with(Ok(ProcessOutput {
            stdout: stdout.to_string(),
            stderr: String::new(),
        }));
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessRunner for RecordingRunner {
    async fn run(&self, invocation: &Invocation) -> Result<ProcessOutput> {
        self.calls.lock().unwrap().push(invocation.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(ProcessOutput::default()))
    }
}
