/// Iterator over the lines of a text, each yielded with its terminator.
///
/// `\r\n`, `\n` and a lone `\r` all end a line. A final line without a
/// terminator is still yielded; an empty input yields nothing.
#[derive(Debug, Clone)]
pub struct RawLines<'a> {
    rest: &'a str,
}

impl<'a> RawLines<'a> {
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self { rest: source }
    }
}

impl<'a> Iterator for RawLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        let end = match self.rest.find(['\r', '\n']) {
            None => self.rest.len(),
            Some(pos) if self.rest[pos..].starts_with("\r\n") => pos + 2,
            Some(pos) => pos + 1,
        };

        let (line, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(line)
    }
}

#[cfg(test)]
#[path = "lines_tests.rs"]
mod tests;
