//! Run Classification
//!
//! Decides the token type of one scanned run. Rules, in order:
//! 1. The trimmed run split on `.` starts with a known function name: `function`, and every
//!    following dot segment becomes a modifier, verbatim.
//! 2. The trimmed run starts with `//`: `comment`.
//! 3. Anything else: `string`.
//!
//! Modifier names are not checked here. Unknown ones are dropped by the legend when encoding.

use crate::lexing::vocabulary::Vocabulary;
use crate::semantic::TokenType;

/// Marker that opens a line comment.
pub const COMMENT_MARKER: &str = "//";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub token_type: TokenType,
    pub modifiers: Vec<String>,
}

impl Classification {
    fn plain(token_type: TokenType) -> Self {
        Self {
            token_type,
            modifiers: Vec::new(),
        }
    }
}

pub fn classify(text: &str, vocabulary: &Vocabulary) -> Classification {
    let trimmed = text.trim();
    let mut segments = trimmed.split('.');

    // split always yields at least one segment
    if segments.next().is_some_and(|head| vocabulary.is_function(head)) {
        return Classification {
            token_type: TokenType::Function,
            modifiers: segments.map(str::to_string).collect(),
        };
    }

    if trimmed.starts_with(COMMENT_MARKER) {
        return Classification::plain(TokenType::Comment);
    }

    Classification::plain(TokenType::String)
}
