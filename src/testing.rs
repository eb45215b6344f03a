//! Testing utilities
//!
//! Tokenizer tests should read their input from the curated samples under `tests/fixtures/`
//! through [`DreamknotSources`] instead of scattering dreamknot snippets across test files, and
//! compare results through [`describe`], which renders one token per line with its text:
//!
//!     0:0 len=5 function "print"
//!     0:5 len=1 string "("
//!     4:0 len=21 function[readonly,static] "print.readonly.static"
//!
//! That rendering is what the snapshot tests store.

use crate::lexing::{classify, Scanner, Vocabulary};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Access to the sample documents under `tests/fixtures/`.
pub struct DreamknotSources;

impl DreamknotSources {
    pub fn dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
    }

    pub fn get_string(name: &str) -> io::Result<String> {
        fs::read_to_string(Self::dir().join(name))
    }

    /// Names of every sample, sorted.
    pub fn list() -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(Self::dir())? {
            let entry = entry?;
            if entry.path().extension().is_some_and(|ext| ext == "dk") {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        names.sort();
        Ok(names)
    }
}

/// Render the tokens of `source` (builtin vocabulary) one per line.
pub fn describe(source: &str) -> String {
    describe_with(Vocabulary::builtin(), source)
}

pub fn describe_with(vocabulary: &Vocabulary, source: &str) -> String {
    Scanner::new(vocabulary)
        .scan(source)
        .into_iter()
        .map(|span| {
            let classification = classify(span.text, vocabulary);
            let modifiers = if classification.modifiers.is_empty() {
                String::new()
            } else {
                format!("[{}]", classification.modifiers.join(","))
            };
            format!(
                "{}:{} len={} {}{} {:?}",
                span.line,
                span.start_column,
                span.length,
                classification.token_type,
                modifiers,
                span.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
