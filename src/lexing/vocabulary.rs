//! Vocabulary
//!
//! The two fixed tables the lexer consults: the operator characters that delimit runs, and the
//! function names the classifier recognizes. A vocabulary is built once and then only read, so
//! it can be shared freely between threads and requests.

use once_cell::sync::Lazy;
use std::collections::BTreeSet;
use thiserror::Error;

/// Operators recognized when nothing else is configured.
pub const DEFAULT_OPERATORS: [char; 5] = ['=', ' ', '(', ')', '/'];

/// Function names recognized when nothing else is configured.
pub const DEFAULT_FUNCTIONS: [&str; 1] = ["print"];

static BUILTIN: Lazy<Vocabulary> = Lazy::new(|| Vocabulary::new(DEFAULT_OPERATORS, DEFAULT_FUNCTIONS));

/// Errors raised when building a vocabulary from textual entries (e.g. configuration files).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    #[error("operator '{0}' must be exactly one character")]
    OperatorNotSingleChar(String),
    #[error("function names must not be empty")]
    EmptyFunctionName,
    #[error("function name '{0}' contains '.', which separates modifiers")]
    DottedFunctionName(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    operators: BTreeSet<char>,
    functions: BTreeSet<String>,
}

impl Vocabulary {
    pub fn new<O, F, S>(operators: O, functions: F) -> Self
    where
        O: IntoIterator<Item = char>,
        F: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            operators: operators.into_iter().collect(),
            functions: functions.into_iter().map(Into::into).collect(),
        }
    }

    /// The process wide default vocabulary.
    pub fn builtin() -> &'static Vocabulary {
        &BUILTIN
    }

    /// Build a vocabulary from string entries, validating each one.
    ///
    /// Operators must be exactly one character. Function names must be non-empty and may not
    /// contain `.`, since the classifier only ever compares the first dot segment.
    pub fn from_entries<O, F>(operators: O, functions: F) -> Result<Self, VocabularyError>
    where
        O: IntoIterator,
        O::Item: AsRef<str>,
        F: IntoIterator,
        F::Item: AsRef<str>,
    {
        let operators = operators
            .into_iter()
            .map(|entry| {
                let entry = entry.as_ref();
                let mut chars = entry.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Ok(ch),
                    _ => Err(VocabularyError::OperatorNotSingleChar(entry.to_string())),
                }
            })
            .collect::<Result<BTreeSet<_>, _>>()?;

        let functions = functions
            .into_iter()
            .map(|entry| {
                let entry = entry.as_ref();
                if entry.is_empty() {
                    Err(VocabularyError::EmptyFunctionName)
                } else if entry.contains('.') {
                    Err(VocabularyError::DottedFunctionName(entry.to_string()))
                } else {
                    Ok(entry.to_string())
                }
            })
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(Self {
            operators,
            functions,
        })
    }

    pub fn is_operator(&self, ch: char) -> bool {
        self.operators.contains(&ch)
    }

    pub fn is_function(&self, name: &str) -> bool {
        self.functions.contains(name)
    }

    pub fn operators(&self) -> impl Iterator<Item = char> + '_ {
        self.operators.iter().copied()
    }

    pub fn functions(&self) -> impl Iterator<Item = &str> {
        self.functions.iter().map(String::as_str)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
