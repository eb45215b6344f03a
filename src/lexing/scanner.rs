//! Line Scanner
//!
//! Partitions every line into runs of operator characters and runs of everything else, with a
//! line comment override.
//!
//! Algorithm
//!
//!     Each line is scanned on its own with a fresh state: accumulating non-operators, no
//!     comment, the run opening at column 0. For every character, the first matching rule wins:
//!
//!         1. Last character of the line: close the current run through the end of the line,
//!            whatever the mode. The final run is therefore always flushed, even when the last
//!            character would have started a run of the other kind.
//!         2. Comment mode: the character joins the current run.
//!         3. The trimmed run so far starts with `//`: enter comment mode (sticky until the end
//!            of the line) and the character joins the run.
//!         4. Same kind as the current run: the character joins the run.
//!         5. Otherwise close the current run just before this character and open a run of the
//!            other kind starting with it.
//!
//!     Comment detection only looks at the run being accumulated. Runs already flushed on the
//!     same line are never reclassified, and a `//` that shares an operator run with other
//!     non-blank operators (as in ` = //`) never opens a comment.
//!
//! Spans
//!
//!     Every character of a line lands in exactly one span, and spans are emitted left to
//!     right. A line that starts with an operator would close an empty non-operator run at
//!     column 0; that empty run is not emitted. Empty lines emit nothing.
//!
//!     Columns and lengths are counted in UTF-16 code units, the unit editors address text in.

use crate::lexing::classifier::COMMENT_MARKER;
use crate::lexing::lines::split_lines;
use crate::lexing::vocabulary::Vocabulary;

/// Which kind of run the scanner is accumulating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    AccumulatingNonOperator,
    AccumulatingOperator,
}

impl ScanState {
    fn continues_with(self, is_operator: bool) -> bool {
        match self {
            ScanState::AccumulatingNonOperator => !is_operator,
            ScanState::AccumulatingOperator => is_operator,
        }
    }

    fn toggled(self) -> Self {
        match self {
            ScanState::AccumulatingNonOperator => ScanState::AccumulatingOperator,
            ScanState::AccumulatingOperator => ScanState::AccumulatingNonOperator,
        }
    }
}

/// One unclassified run of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSpan<'a> {
    pub line: u32,
    pub start_column: u32,
    pub length: u32,
    pub text: &'a str,
}

#[derive(Debug, Clone, Copy)]
pub struct Scanner<'v> {
    vocabulary: &'v Vocabulary,
}

impl<'v> Scanner<'v> {
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Scan a whole document, returning its runs in document order.
    pub fn scan<'a>(&self, text: &'a str) -> Vec<RawSpan<'a>> {
        let mut spans = Vec::new();
        self.scan_with(text, |span| spans.push(span));
        spans
    }

    /// Scan a whole document, handing every run to `emit` as soon as it closes.
    pub fn scan_with<'a, F>(&self, text: &'a str, mut emit: F)
    where
        F: FnMut(RawSpan<'a>),
    {
        for (index, line) in split_lines(text).enumerate() {
            self.scan_line(index as u32, line, &mut emit);
        }
    }

    /// Scan a single line (without its terminator).
    pub fn scan_line<'a, F>(&self, line_index: u32, line: &'a str, emit: &mut F)
    where
        F: FnMut(RawSpan<'a>),
    {
        let Some((last_byte, _)) = line.char_indices().next_back() else {
            return;
        };

        let mut state = ScanState::AccumulatingNonOperator;
        let mut comment_mode = false;
        let mut build = String::new();
        let mut open_byte = 0usize;
        let mut open_column = 0u32;
        let mut column = 0u32;

        for (byte, ch) in line.char_indices() {
            let width = ch.len_utf16() as u32;

            if byte == last_byte {
                emit(RawSpan {
                    line: line_index,
                    start_column: open_column,
                    length: column + width - open_column,
                    text: &line[open_byte..],
                });
            } else if comment_mode {
                build.push(ch);
            } else if build.trim_start().starts_with(COMMENT_MARKER) {
                comment_mode = true;
                build.push(ch);
            } else if state.continues_with(self.vocabulary.is_operator(ch)) {
                build.push(ch);
            } else {
                if byte > open_byte {
                    emit(RawSpan {
                        line: line_index,
                        start_column: open_column,
                        length: column - open_column,
                        text: &line[open_byte..byte],
                    });
                }
                open_byte = byte;
                open_column = column;
                build.clear();
                build.push(ch);
                state = state.toggled();
            }

            column += width;
        }
    }
}
