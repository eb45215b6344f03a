//! Relative token encoding
//!
//! Editors receive semantic tokens as a flat list of integers, five per token:
//!
//!     delta_line, delta_start, length, token_type, token_modifiers_bitset
//!
//! `delta_line` is relative to the previous token's line. `delta_start` is relative to the
//! previous token's start column when both sit on the same line, and absolute otherwise. Tokens
//! therefore have to be in document order; the builder sorts them when they are pushed out of
//! order.

use crate::semantic::legend::Legend;
use crate::semantic::token::SemanticToken;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EncodedToken {
    pub delta_line: u32,
    pub delta_start: u32,
    pub length: u32,
    pub token_type: u32,
    pub token_modifiers_bitset: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    line: u32,
    start: u32,
    length: u32,
    token_type: u32,
    modifiers: u32,
}

/// Collects absolute tokens and produces their relative encoding.
#[derive(Debug, Clone)]
pub struct SemanticTokensBuilder {
    entries: Vec<Entry>,
    sorted: bool,
}

impl SemanticTokensBuilder {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            sorted: true,
        }
    }

    pub fn push(&mut self, line: u32, start: u32, length: u32, token_type: u32, modifiers: u32) {
        if let Some(last) = self.entries.last() {
            if (line, start) < (last.line, last.start) {
                self.sorted = false;
            }
        }
        self.entries.push(Entry {
            line,
            start,
            length,
            token_type,
            modifiers,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn build(mut self) -> Vec<EncodedToken> {
        if !self.sorted {
            // stable, so equal positions keep push order
            self.entries.sort_by_key(|entry| (entry.line, entry.start));
        }

        let mut prev_line = 0u32;
        let mut prev_start = 0u32;
        self.entries
            .into_iter()
            .map(|entry| {
                let delta_line = entry.line - prev_line;
                let delta_start = if delta_line == 0 {
                    entry.start - prev_start
                } else {
                    entry.start
                };
                prev_line = entry.line;
                prev_start = entry.start;
                EncodedToken {
                    delta_line,
                    delta_start,
                    length: entry.length,
                    token_type: entry.token_type,
                    token_modifiers_bitset: entry.modifiers,
                }
            })
            .collect()
    }

    /// The flat integer form, five integers per token.
    pub fn build_data(self) -> Vec<u32> {
        self.build()
            .into_iter()
            .flat_map(|token| {
                [
                    token.delta_line,
                    token.delta_start,
                    token.length,
                    token.token_type,
                    token.token_modifiers_bitset,
                ]
            })
            .collect()
    }
}

impl Default for SemanticTokensBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Look every token up in `legend` and relative-encode the result.
pub fn encode_tokens(tokens: &[SemanticToken], legend: &Legend) -> Vec<EncodedToken> {
    let mut builder = SemanticTokensBuilder::new();
    for token in tokens {
        builder.push(
            token.line,
            token.start_column,
            token.length,
            legend.encode_token_type(token.token_type.as_str()),
            legend.encode_token_modifiers(&token.modifiers),
        );
    }
    builder.build()
}
