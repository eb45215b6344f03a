//! Semantic tokens
//!
//! The output side of the tokenizer: the token records themselves, and the pieces a host needs
//! to turn them into the packed integers editors consume.
//!
//!     token.rs      Token records carrying symbolic type and modifier names
//!     legend.rs     Fixed ordered vocabularies mapping those names to integers
//!     encoding.rs   Relative (delta) encoding of numeric tokens

pub mod encoding;
pub mod legend;
pub mod token;

pub use encoding::{encode_tokens, EncodedToken, SemanticTokensBuilder};
pub use legend::{Legend, NOT_IN_LEGEND, TOKEN_MODIFIERS, TOKEN_TYPES};
pub use token::{SemanticToken, TokenType};
