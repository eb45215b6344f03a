//! Lexing
//!
//! Turns raw document text into classified runs.
//!
//! Structure:
//!     There is no lexer generator here. The language only distinguishes runs of operator
//! characters from runs of everything else, plus a line comment that swallows the rest of its
//! line, so a small hand written state machine is all that is needed.
//!
//! The pipeline consists of:
//! 1. Line splitting (`\r\n`, `\r`, `\n`) ./lines.rs
//! 2. Per line scanning into operator / non-operator / comment runs ./scanner.rs
//! 3. Classification of each run into function, comment or string ./classifier.rs
//!
//! Both the scanner and the classifier consult an immutable [`Vocabulary`] that is handed to
//! them explicitly, so tests can swap in their own operators and function names.

pub mod classifier;
pub mod lines;
pub mod scanner;
pub mod vocabulary;

pub use classifier::{classify, Classification};
pub use lines::{split_lines, Lines};
pub use scanner::{RawSpan, ScanState, Scanner};
pub use vocabulary::{Vocabulary, VocabularyError};
