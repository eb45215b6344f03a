//! Property-based tests for the scanner, tokenizer and encoder

use dreamknot::lexing::{split_lines, Scanner, Vocabulary};
use dreamknot::semantic::{encode_tokens, Legend, NOT_IN_LEGEND, TOKEN_MODIFIERS};
use dreamknot::{tokenize, TokenType};
use proptest::prelude::*;

/// Lines mixing operators, identifiers, dots, tabs and the occasional comment marker.
fn line_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            "[a-z0-9]{1,6}",
            "[= ()/]{1,4}",
            Just("print".to_string()),
            Just("print.static".to_string()),
            Just("//".to_string()),
            Just(".".to_string()),
            Just("\t".to_string()),
            Just("é𝄞".to_string()),
        ],
        0..12,
    )
    .prop_map(|parts| parts.concat())
}

fn document_strategy() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(line_strategy(), 1..8),
        prop_oneof![Just("\n"), Just("\r\n"), Just("\r")],
    )
        .prop_map(|(lines, separator)| lines.join(separator))
}

proptest! {
    #[test]
    fn spans_partition_each_line(line in line_strategy()) {
        let spans = Scanner::new(Vocabulary::builtin()).scan(&line);

        let rebuilt: String = spans.iter().map(|span| span.text).collect();
        prop_assert_eq!(&rebuilt, &line);

        let mut column = 0u32;
        for span in &spans {
            prop_assert_eq!(span.line, 0);
            prop_assert_eq!(span.start_column, column);
            prop_assert!(span.length > 0);
            prop_assert_eq!(span.length as usize, span.text.encode_utf16().count());
            column += span.length;
        }
        prop_assert_eq!(column as usize, line.encode_utf16().count());
    }

    #[test]
    fn spans_partition_every_line_of_a_document(document in document_strategy()) {
        let spans = Scanner::new(Vocabulary::builtin()).scan(&document);
        for (index, line) in split_lines(&document).enumerate() {
            let rebuilt: String = spans
                .iter()
                .filter(|span| span.line as usize == index)
                .map(|span| span.text)
                .collect();
            prop_assert_eq!(rebuilt.as_str(), line);
        }
        let line_count = split_lines(&document).count() as u32;
        prop_assert!(spans.iter().all(|span| span.line < line_count));
    }

    #[test]
    fn tokenizing_is_deterministic(document in document_strategy()) {
        prop_assert_eq!(tokenize(&document), tokenize(&document));
    }

    #[test]
    fn tokens_are_ordered_and_disjoint(document in document_strategy()) {
        let tokens = tokenize(&document);
        for pair in tokens.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            prop_assert!(
                a.line < b.line || (a.line == b.line && a.start_column + a.length == b.start_column)
            );
        }
    }

    #[test]
    fn comment_absorbs_the_rest_of_its_line(
        head in "[a-z]{1,5}",
        tail in "[a-z0-9=() /.]{1,20}",
    ) {
        let line = format!("{} //{}", head, tail);
        let tokens = tokenize(&line);
        let last = tokens.last().expect("at least one token");
        prop_assert_eq!(last.token_type, TokenType::Comment);
        prop_assert_eq!(last.start_column as usize, head.len());
        prop_assert_eq!((last.start_column + last.length) as usize, line.len());
    }

    #[test]
    fn modifier_bits_ignore_order_and_duplicates(
        picks in prop::collection::vec(0usize..12, 0..16),
    ) {
        let names: Vec<&str> = TOKEN_MODIFIERS
            .iter()
            .copied()
            .chain(["bogus", "", "Static", NOT_IN_LEGEND])
            .collect();
        let chosen: Vec<&str> = picks.iter().map(|&i| names[i]).collect();
        let mut reversed = chosen.clone();
        reversed.reverse();
        let mut doubled = chosen.clone();
        doubled.extend(chosen.iter().copied());

        let legend = Legend::standard();
        let bits = legend.encode_token_modifiers(&chosen);
        prop_assert_eq!(bits, legend.encode_token_modifiers(&reversed));
        prop_assert_eq!(bits, legend.encode_token_modifiers(&doubled));

        let expected = picks.iter().fold(0u32, |acc, &i| match i {
            0..=7 => acc | (1 << i),
            11 => acc | (1 << 10),
            _ => acc,
        });
        prop_assert_eq!(bits, expected);
    }

    #[test]
    fn relative_encoding_restores_absolute_positions(document in document_strategy()) {
        let tokens = tokenize(&document);
        let encoded = encode_tokens(&tokens, Legend::standard());
        prop_assert_eq!(encoded.len(), tokens.len());

        let mut line = 0u32;
        let mut start = 0u32;
        for (token, packed) in tokens.iter().zip(&encoded) {
            if packed.delta_line == 0 {
                start += packed.delta_start;
            } else {
                line += packed.delta_line;
                start = packed.delta_start;
            }
            prop_assert_eq!((line, start), (token.line, token.start_column));
            prop_assert_eq!(packed.length, token.length);
        }
    }
}
