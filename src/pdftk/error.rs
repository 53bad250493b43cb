use std::path::Path;

/// Everything that can go wrong between a caller and the pdftk executable.
#[derive(Debug, thiserror::Error)]
pub enum PdftkError {
    /// The handle could not be built for this host.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Caller-supplied arguments were rejected before anything was spawned.
    #[error("Invalid arguments: {0}")]
    Validation(String),

    /// pdftk could not be spawned, was not found, or exited non-zero.
    #[error("pdftk failed ({command}): {message}")]
    ExternalProcess { command: String, message: String },

    /// `dump_data` output did not carry a usable page count.
    #[error("Could not read page count: {0}")]
    Parse(String),
}

impl PdftkError {
    pub(crate) fn missing_executable(path: Option<&Path>) -> Self {
        match path {
            Some(p) => PdftkError::Configuration(format!(
                "Path to pdftk does not exist: {}",
                p.display()
            )),
            None => PdftkError::Configuration(
                "An explicit path to the pdftk executable is required on this platform".to_string(),
            ),
        }
    }
}

pub type Result<T, E = PdftkError> = std::result::Result<T, E>;
