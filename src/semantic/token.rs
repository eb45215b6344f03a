use serde::{Deserialize, Serialize};
use std::fmt;

/// The token types the tokenizer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Function,
    Comment,
    String,
}

impl TokenType {
    /// The legend name of this type.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenType::Function => "function",
            TokenType::Comment => "comment",
            TokenType::String => "string",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified span of a single line.
///
/// `start_column` and `length` are in UTF-16 code units. `length` is never zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticToken {
    pub line: u32,
    pub start_column: u32,
    pub length: u32,
    pub token_type: TokenType,
    pub modifiers: Vec<String>,
}
