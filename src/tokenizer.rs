//! Tokenizer
//!
//! Glues the scanner and the classifier together: every run is classified the moment the
//! scanner closes it. The tokenizer holds nothing but its vocabulary, so one instance can serve
//! any number of documents, from any number of threads.

use crate::lexing::classifier::classify;
use crate::lexing::scanner::Scanner;
use crate::lexing::vocabulary::Vocabulary;
use crate::semantic::SemanticToken;
use tracing::{debug, trace};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenizer {
    vocabulary: Vocabulary,
}

impl Tokenizer {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn tokenize(&self, text: &str) -> Vec<SemanticToken> {
        tokenize_with(&self.vocabulary, text)
    }
}

/// Tokenize `text` with the builtin vocabulary.
pub fn tokenize(text: &str) -> Vec<SemanticToken> {
    tokenize_with(Vocabulary::builtin(), text)
}

/// Tokenize `text` with an explicit vocabulary.
pub fn tokenize_with(vocabulary: &Vocabulary, text: &str) -> Vec<SemanticToken> {
    let mut tokens = Vec::new();
    Scanner::new(vocabulary).scan_with(text, |span| {
        let classification = classify(span.text, vocabulary);
        trace!(
            line = span.line,
            start = span.start_column,
            length = span.length,
            token_type = %classification.token_type,
            "span"
        );
        tokens.push(SemanticToken {
            line: span.line,
            start_column: span.start_column,
            length: span.length,
            token_type: classification.token_type,
            modifiers: classification.modifiers,
        });
    });
    debug!(bytes = text.len(), tokens = tokens.len(), "tokenized document");
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::TokenType;

    fn summary(tokens: &[SemanticToken]) -> Vec<(u32, u32, u32, TokenType)> {
        tokens
            .iter()
            .map(|t| (t.line, t.start_column, t.length, t.token_type))
            .collect()
    }

    #[test]
    fn classifies_every_run() {
        let tokens = tokenize("print.readonly.static(x) y // done");
        assert_eq!(
            summary(&tokens),
            vec![
                (0, 0, 21, TokenType::Function),
                (0, 21, 1, TokenType::String),
                (0, 22, 1, TokenType::String),
                (0, 23, 2, TokenType::String),
                (0, 25, 1, TokenType::String),
                (0, 26, 8, TokenType::Comment),
            ]
        );
        assert_eq!(tokens[0].modifiers, vec!["readonly", "static"]);
        assert!(tokens[1..].iter().all(|t| t.modifiers.is_empty()));
    }

    #[test]
    fn empty_document_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("\n\r\n\r").is_empty());
    }

    #[test]
    fn blank_line_keeps_line_indices() {
        let tokens = tokenize("ab\n\ncd");
        assert_eq!(
            summary(&tokens),
            vec![(0, 0, 2, TokenType::String), (2, 0, 2, TokenType::String)]
        );
    }

    #[test]
    fn tokenizer_uses_its_own_vocabulary() {
        let tokenizer = Tokenizer::new(Vocabulary::new([' '], ["emit"]));
        let tokens = tokenizer.tokenize("emit.async print.async");
        assert_eq!(tokens[0].token_type, TokenType::Function);
        assert_eq!(tokens[0].modifiers, vec!["async"]);
        assert_eq!(tokens.last().unwrap().token_type, TokenType::String);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let tokenizer = Tokenizer::default();
        let source = "print(a) // x\n= / =\nprint.static";
        assert_eq!(tokenizer.tokenize(source), tokenizer.tokenize(source));
    }
}
