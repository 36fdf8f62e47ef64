/// One input line as seen by the checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number.
    pub number: usize,
    /// Line text including its terminator.
    pub raw: &'a str,
    /// Line text with surrounding whitespace removed.
    pub trimmed: &'a str,
}

impl<'a> Line<'a> {
    #[must_use]
    pub fn new(number: usize, raw: &'a str) -> Self {
        Self {
            number,
            raw,
            trimmed: trim_line(raw),
        }
    }

    #[must_use]
    pub fn is_exempt(&self) -> bool {
        is_exempt(self.trimmed)
    }
}

/// Strips surrounding whitespace, counting the ASCII information separators
/// (U+001C..=U+001F) as whitespace too.
#[must_use]
pub fn trim_line(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// Blank lines and full-line comments are never checked.
#[must_use]
pub fn is_exempt(trimmed: &str) -> bool {
    trimmed.is_empty() || trimmed.starts_with('#')
}

#[must_use]
pub fn has_tab(raw: &str) -> bool {
    raw.contains('\t')
}

/// Flags `key:value` where the first colon is glued to the value.
///
/// List items (`- ...`) are skipped, as are lines ending in a colon and lines
/// with an `=` after the first colon (`FOO:bar=baz` style assignments).
#[must_use]
pub fn missing_space_after_colon(trimmed: &str) -> bool {
    if trimmed.starts_with('-') {
        return false;
    }
    let Some(colon_pos) = trimmed.find(':') else {
        return false;
    };

    let from_colon = &trimmed[colon_pos..];
    let Some(next_char) = from_colon[1..].chars().next() else {
        return false;
    };

    !matches!(next_char, ' ' | '\n' | '\r') && !trimmed.ends_with(':') && !from_colon.contains('=')
}

/// Odd combined count of `"` and `'`. Does not tell the two apart.
#[must_use]
pub fn has_unmatched_quotes(trimmed: &str) -> bool {
    let quotes = trimmed.chars().filter(|c| matches!(c, '"' | '\'')).count();
    quotes % 2 != 0
}

#[cfg(test)]
#[path = "heuristics_tests.rs"]
mod tests;
