//! # dreamknot
//!
//! Semantic tokenizer for the dreamknot language.
//!
//! File Layout
//!
//!     The crate is split in two layers that only share symbolic names:
//!
//!     src/lexing        The scanner, the classifier and the vocabulary they consult
//!     src/semantic      Token records, the numeric legend and the relative encoding
//!
//!     The tokenizer never knows numeric indices. Hosts (the language server, the cli) feed
//!     tokens through [`semantic::Legend`] and [`semantic::SemanticTokensBuilder`] when they
//!     need the packed form.
//!
//! Usage
//!
//!     let tokens = dreamknot::tokenize("print.static(x) // hi");
//!
//!     Or with a custom vocabulary:
//!
//!     let vocabulary = Vocabulary::new(['=', ' '], ["emit"]);
//!     let tokens = Tokenizer::new(vocabulary).tokenize(source);
//!
//! For test fixtures and helpers, see the [testing module](crate::testing).

pub mod lexing;
pub mod semantic;
pub mod testing;
pub mod tokenizer;

pub use lexing::{Vocabulary, VocabularyError};
pub use semantic::{SemanticToken, TokenType};
pub use tokenizer::{tokenize, Tokenizer};
