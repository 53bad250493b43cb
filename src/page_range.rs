use std::fmt;

/// An ordered page-range specification handed to `pdftk cat`.
///
/// Ranges are kept verbatim (`5`, `3-5`, `1-endR`, `r3-r1`, `4-8even`);
/// only the list separators are normalized. pdftk decides what is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageRanges {
    ranges: Vec<String>,
}

impl PageRanges {
    /// Parse a list like "1,3-5,9" or "1 3-5 9"
    pub fn parse(s: &str) -> Self {
        PageRanges {
            ranges: split_ranges(s).collect(),
        }
    }

    /// Build from already separated items; each item may itself hold a list
    pub fn from_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ranges = Vec::new();
        for item in items {
            ranges.extend(split_ranges(item.as_ref()));
        }
        PageRanges { ranges }
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.ranges
    }
}

impl fmt::Display for PageRanges {
    /// Space separated, the way pdftk reads ranges on its command line
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.ranges.join(" "))
    }
}

impl From<&str> for PageRanges {
    fn from(s: &str) -> Self {
        PageRanges::parse(s)
    }
}

fn split_ranges(s: &str) -> impl Iterator<Item = String> + '_ {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_separated() {
        let ranges = PageRanges::parse("1,3-5,9");
        assert_eq!(ranges.as_slice(), ["1", "3-5", "9"]);
        assert_eq!(ranges.to_string(), "1 3-5 9");
    }

    #[test]
    fn test_range_syntax_untouched() {
        let ranges = PageRanges::parse("1-endR, r3-r1,4-8even");
        assert_eq!(ranges.as_slice(), ["1-endR", "r3-r1", "4-8even"]);
    }

    #[test]
    fn test_whitespace_separated() {
        let ranges = PageRanges::parse(" 2  7-9 ");
        assert_eq!(ranges.as_slice(), ["2", "7-9"]);
    }

    #[test]
    fn test_from_list_flattens() {
        let ranges = PageRanges::from_list(["1", "3-5,9", "12"]);
        assert_eq!(ranges.to_string(), "1 3-5 9 12");
        assert_eq!(ranges.len(), 4);
    }

    #[test]
    fn test_empty() {
        assert!(PageRanges::parse("").is_empty());
        assert!(PageRanges::parse(" , ,").is_empty());
        assert!(PageRanges::from_list(Vec::<String>::new()).is_empty());
    }
}
