use regex::Regex;
use std::sync::LazyLock;

use super::error::{PdftkError, Result};
use super::mode::ExecutionMode;

/// Label of the total page count in `pdftk dump_data` output.
pub const PAGE_COUNT_FIELD: &str = "NumberOfPages";

static PAGE_COUNT_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*NumberOfPages:[ \t]*(\S*)").expect("page count pattern is valid")
});

/// Find `NumberOfPages: N` in raw `dump_data` output
pub fn parse_number_of_pages(output: &str) -> Result<u32> {
    let caps = PAGE_COUNT_LINE.captures(output).ok_or_else(|| {
        PdftkError::Parse(format!("no {} field in pdftk output", PAGE_COUNT_FIELD))
    })?;
    parse_count(&caps[1])
}

/// Read a count already cut out of the output by the shell pipeline
pub fn parse_filtered_count(output: &str) -> Result<u32> {
    let value = output.lines().map(str::trim).find(|l| !l.is_empty()).ok_or_else(|| {
        PdftkError::Parse(format!("no {} field in pdftk output", PAGE_COUNT_FIELD))
    })?;
    parse_count(value)
}

fn parse_count(value: &str) -> Result<u32> {
    if value.is_empty() {
        return Err(PdftkError::Parse(format!(
            "{} has no value",
            PAGE_COUNT_FIELD
        )));
    }
    value.parse::<u32>().map_err(|_| {
        PdftkError::Parse(format!(
            "{} is not a page count: {:?}",
            PAGE_COUNT_FIELD, value
        ))
    })
}

impl ExecutionMode {
    /// Extract the page count from what [`assemble`](Self::assemble) made pdftk print
    pub fn read_page_count(&self, stdout: &str) -> Result<u32> {
        match self {
            ExecutionMode::ShellByName => parse_filtered_count(stdout),
            ExecutionMode::DirectByPath(_) => parse_number_of_pages(stdout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = "InfoBegin\nInfoKey: Creator\nInfoValue: Writer\nPdfID0: 8b93f76a0b28b720d0dee9a6eb2a780a\nNumberOfPages: 42\nPageMediaBegin\nPageMediaNumber: 1\n";

    #[test]
    fn test_number_of_pages() {
        assert_eq!(parse_number_of_pages(DUMP).unwrap(), 42);
        assert_eq!(parse_number_of_pages("NumberOfPages: 42").unwrap(), 42);
    }

    #[test]
    fn test_missing_field() {
        let err = parse_number_of_pages("InfoBegin\nInfoKey: Title\n").unwrap_err();
        assert!(matches!(err, PdftkError::Parse(_)));
    }

    #[test]
    fn test_non_numeric_value() {
        let err = parse_number_of_pages("NumberOfPages: many\n").unwrap_err();
        assert!(matches!(err, PdftkError::Parse(_)));
    }

    #[test]
    fn test_label_without_value_does_not_read_next_line() {
        let err = parse_number_of_pages("NumberOfPages:\n12\n").unwrap_err();
        assert!(matches!(err, PdftkError::Parse(_)));
    }

    #[test]
    fn test_filtered_count() {
        assert_eq!(parse_filtered_count("42\n").unwrap(), 42);
        assert!(parse_filtered_count("").is_err());
        assert!(parse_filtered_count("abc\n").is_err());
    }

    #[test]
    fn test_read_page_count_follows_mode() {
        assert_eq!(ExecutionMode::ShellByName.read_page_count("7\n").unwrap(), 7);
        let direct = ExecutionMode::DirectByPath("pdftk.exe".into());
        assert_eq!(direct.read_page_count("NumberOfPages: 7\n").unwrap(), 7);
        assert!(direct.read_page_count("7\n").is_err());
    }
}
