use std::path::{Path, PathBuf};

use super::error::{PdftkError, Result};

/// Name pdftk is looked up by when no explicit path is configured.
pub const DEFAULT_PROGRAM: &str = "pdftk";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    /// No dependable lookup of `pdftk` by name; an explicit path is mandatory.
    Windows,
    Posix,
}

impl HostPlatform {
    pub fn current() -> Self {
        if cfg!(windows) {
            HostPlatform::Windows
        } else {
            HostPlatform::Posix
        }
    }

    pub fn requires_explicit_path(self) -> bool {
        matches!(self, HostPlatform::Windows)
    }
}

/// How every operation of one handle reaches pdftk. Chosen once, never re-checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionMode {
    /// `sh -c "pdftk ..."` with every argument shell-quoted.
    ShellByName,
    /// The executable spawned directly with a literal argument array.
    DirectByPath(PathBuf),
}

impl ExecutionMode {
    /// Pick the strategy for `platform` given an optional configured executable.
    ///
    /// An explicit path always wins and must exist. Without one, hosts that
    /// cannot resolve `pdftk` by name fail with a configuration error.
    pub fn select(platform: HostPlatform, executable: Option<&Path>) -> Result<Self> {
        let mode = match executable {
            Some(path) if path.exists() => ExecutionMode::DirectByPath(path.to_path_buf()),
            Some(path) => return Err(PdftkError::missing_executable(Some(path))),
            None if platform.requires_explicit_path() => {
                return Err(PdftkError::missing_executable(None))
            }
            None => ExecutionMode::ShellByName,
        };

        tracing::debug!(?platform, ?mode, "selected pdftk execution mode");
        Ok(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posix_without_path_uses_shell() {
        let mode = ExecutionMode::select(HostPlatform::Posix, None).unwrap();
        assert_eq!(mode, ExecutionMode::ShellByName);
    }

    #[test]
    fn test_windows_requires_path() {
        let err = ExecutionMode::select(HostPlatform::Windows, None).unwrap_err();
        assert!(matches!(err, PdftkError::Configuration(_)));
    }

    #[test]
    fn test_missing_path_rejected_everywhere() {
        let missing = Path::new("/definitely/not/here/pdftk.exe");
        for platform in [HostPlatform::Windows, HostPlatform::Posix] {
            let err = ExecutionMode::select(platform, Some(missing)).unwrap_err();
            assert!(matches!(err, PdftkError::Configuration(_)));
        }
    }

    #[test]
    fn test_existing_path_selects_direct() {
        let dir = tempfile::tempdir().unwrap();
        let exe = dir.path().join("pdftk.exe");
        std::fs::write(&exe, b"").unwrap();

        for platform in [HostPlatform::Windows, HostPlatform::Posix] {
            let mode = ExecutionMode::select(platform, Some(exe.as_path())).unwrap();
            assert_eq!(mode, ExecutionMode::DirectByPath(exe.clone()));
        }
    }
}
