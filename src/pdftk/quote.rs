use std::ffi::OsStr;

use super::error::{PdftkError, Result};

/// Join tokens into one POSIX shell fragment that the shell splits back
/// into exactly the original tokens.
///
/// Tokens that are not valid UTF-8 cannot be carried through a shell
/// string and are rejected. An empty token list yields an empty string.
pub fn quote_tokens<S: AsRef<OsStr>>(tokens: &[S]) -> Result<String> {
    let mut quoted = Vec::with_capacity(tokens.len());
    for token in tokens {
        let token = token.as_ref();
        let s = token.to_str().ok_or_else(|| {
            PdftkError::Validation(format!(
                "Argument is not valid UTF-8 and cannot be passed through a shell: {}",
                token.to_string_lossy()
            ))
        })?;
        quoted.push(shell_words::quote(s));
    }
    Ok(quoted.join(" "))
}
