//! Legend
//!
//! Two fixed ordered vocabularies, one for token types and one for token modifiers. A name
//! encodes to its position in the vocabulary.
//!
//! Encoding never fails:
//!     - an unknown token type encodes to 0
//!     - an unknown modifier contributes no bit
//!     - the sentinel [`NOT_IN_LEGEND`] encodes past the end of the vocabulary (`size + 2`),
//!       which lets hosts exercise out-of-range handling without extending the legend

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Standard token types, in legend order.
pub const TOKEN_TYPES: [&str; 21] = [
    "comment",
    "string",
    "keyword",
    "number",
    "regexp",
    "operator",
    "namespace",
    "type",
    "struct",
    "class",
    "interface",
    "enum",
    "typeParameter",
    "function",
    "method",
    "decorator",
    "macro",
    "variable",
    "parameter",
    "property",
    "label",
];

/// Standard token modifiers, in legend order.
pub const TOKEN_MODIFIERS: [&str; 8] = [
    "declaration",
    "documentation",
    "readonly",
    "static",
    "abstract",
    "deprecated",
    "modification",
    "async",
];

/// Name that is deliberately absent from both vocabularies.
pub const NOT_IN_LEGEND: &str = "notInLegend";

static STANDARD: Lazy<Legend> = Lazy::new(|| Legend::new(TOKEN_TYPES, TOKEN_MODIFIERS));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Legend {
    token_types: Vec<String>,
    token_modifiers: Vec<String>,
    type_index: HashMap<String, u32>,
    modifier_index: HashMap<String, u32>,
}

impl Legend {
    pub fn new<T, M, S1, S2>(token_types: T, token_modifiers: M) -> Self
    where
        T: IntoIterator<Item = S1>,
        M: IntoIterator<Item = S2>,
        S1: Into<String>,
        S2: Into<String>,
    {
        let token_types: Vec<String> = token_types.into_iter().map(Into::into).collect();
        let token_modifiers: Vec<String> = token_modifiers.into_iter().map(Into::into).collect();
        Self {
            type_index: index_of_names(&token_types),
            modifier_index: index_of_names(&token_modifiers),
            token_types,
            token_modifiers,
        }
    }

    /// The legend built from [`TOKEN_TYPES`] and [`TOKEN_MODIFIERS`].
    pub fn standard() -> &'static Legend {
        &STANDARD
    }

    pub fn token_types(&self) -> &[String] {
        &self.token_types
    }

    pub fn token_modifiers(&self) -> &[String] {
        &self.token_modifiers
    }

    pub fn encode_token_type(&self, name: &str) -> u32 {
        if let Some(index) = self.type_index.get(name) {
            *index
        } else if name == NOT_IN_LEGEND {
            self.token_types.len() as u32 + 2
        } else {
            0
        }
    }

    /// Pack modifier names into a bitset. Order and duplicates do not matter.
    pub fn encode_token_modifiers<I, S>(&self, names: I) -> u32
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().fold(0u32, |bits, name| {
            let name = name.as_ref();
            let bit = if let Some(index) = self.modifier_index.get(name) {
                Some(*index)
            } else if name == NOT_IN_LEGEND {
                Some(self.token_modifiers.len() as u32 + 2)
            } else {
                None
            };
            bits | bit.and_then(|bit| 1u32.checked_shl(bit)).unwrap_or(0)
        })
    }
}

impl Default for Legend {
    fn default() -> Self {
        Self::standard().clone()
    }
}

// First occurrence wins if a name is listed twice.
fn index_of_names(names: &[String]) -> HashMap<String, u32> {
    let mut index = HashMap::with_capacity(names.len());
    for (position, name) in names.iter().enumerate() {
        index.entry(name.clone()).or_insert(position as u32);
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantic::TokenType;
    use rstest::rstest;

    #[rstest]
    #[case(TokenType::Comment, 0)]
    #[case(TokenType::String, 1)]
    #[case(TokenType::Function, 13)]
    fn produced_types_encode_to_their_position(#[case] token_type: TokenType, #[case] index: u32) {
        assert_eq!(Legend::standard().encode_token_type(token_type.as_str()), index);
    }

    #[test]
    fn every_type_encodes_to_its_position() {
        let legend = Legend::standard();
        for (position, name) in TOKEN_TYPES.iter().enumerate() {
            assert_eq!(legend.encode_token_type(name), position as u32);
        }
    }

    #[test]
    fn unknown_type_falls_back_to_zero() {
        assert_eq!(Legend::standard().encode_token_type("heading"), 0);
        assert_eq!(Legend::standard().encode_token_type(""), 0);
    }

    #[test]
    fn sentinel_type_encodes_past_the_end() {
        assert_eq!(Legend::standard().encode_token_type(NOT_IN_LEGEND), 23);
    }

    #[test]
    fn modifiers_pack_into_bits() {
        let legend = Legend::standard();
        assert_eq!(legend.encode_token_modifiers(["readonly", "static"]), 12);
        assert_eq!(legend.encode_token_modifiers(["declaration"]), 1);
        assert_eq!(legend.encode_token_modifiers(["async"]), 1 << 7);
        assert_eq!(legend.encode_token_modifiers(Vec::<String>::new()), 0);
    }

    #[test]
    fn modifier_order_and_duplicates_are_irrelevant() {
        let legend = Legend::standard();
        assert_eq!(
            legend.encode_token_modifiers(["static", "readonly", "static"]),
            legend.encode_token_modifiers(["readonly", "static"])
        );
    }

    #[test]
    fn unknown_modifiers_are_dropped() {
        let legend = Legend::standard();
        assert_eq!(legend.encode_token_modifiers(["bogus", "static", ""]), 8);
    }

    #[test]
    fn sentinel_modifier_sets_bit_past_the_end() {
        let legend = Legend::standard();
        assert_eq!(legend.encode_token_modifiers([NOT_IN_LEGEND]), 1 << 10);
        assert_eq!(
            legend.encode_token_modifiers([NOT_IN_LEGEND, "declaration"]),
            (1 << 10) | 1
        );
    }

    #[test]
    fn custom_legend() {
        let legend = Legend::new(["a", "b"], ["x"]);
        assert_eq!(legend.encode_token_type("b"), 1);
        assert_eq!(legend.encode_token_type(NOT_IN_LEGEND), 4);
        assert_eq!(legend.encode_token_modifiers(["x", NOT_IN_LEGEND]), 1 | (1 << 3));
    }

    #[test]
    fn oversized_modifier_index_contributes_nothing() {
        let names: Vec<String> = (0..40).map(|i| format!("m{}", i)).collect();
        let legend = Legend::new(TOKEN_TYPES, names);
        assert_eq!(legend.encode_token_modifiers(["m31"]), 1 << 31);
        assert_eq!(legend.encode_token_modifiers(["m32", "m39"]), 0);
    }
}
