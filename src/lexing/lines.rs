//! Line splitting
//!
//! Lines are separated by `\r\n`, a lone `\r` or a lone `\n`. The separators are dropped.
//! Splitting never produces fewer than one line: the empty document is a single empty line, and
//! a trailing separator yields a trailing empty line.

/// Iterator over the lines of a document, see [`split_lines`].
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: Option<&'a str>,
}

/// Split `text` on any of `\r\n`, `\r`, `\n`.
pub fn split_lines(text: &str) -> Lines<'_> {
    Lines { rest: Some(text) }
}

impl<'a> Iterator for Lines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;
        match rest.find(|ch| ch == '\r' || ch == '\n') {
            Some(idx) => {
                let separator = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = Some(&rest[idx + separator..]);
                Some(&rest[..idx])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }
}
