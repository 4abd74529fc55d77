/// One non-blank line of source, numbered by its position in the original text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine<'a> {
    /// 1-based, counting blank lines
    pub number: usize,
    /// The line with surrounding whitespace removed
    pub text: &'a str,
}

/// Split source text into its non-blank lines.
pub fn split_lines(source: &str) -> Vec<SourceLine<'_>> {
    source
        .lines()
        .enumerate()
        .filter_map(|(i, raw)| {
            let text = raw.trim();
            if text.is_empty() {
                None
            } else {
                Some(SourceLine { number: i + 1, text })
            }
        })
        .collect()
}
