//! Output formats for the `tokens` and `legend` commands

use dreamknot::lexing::split_lines;
use dreamknot::semantic::{encode_tokens, Legend};
use dreamknot::SemanticToken;
use serde::Serialize;

use crate::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenFormat {
    Json,
    Yaml,
    Table,
    Encoded,
}

impl TokenFormat {
    pub const NAMES: [&'static str; 4] = ["json", "yaml", "table", "encoded"];

    pub fn parse(name: &str) -> Result<Self, CliError> {
        match name {
            "json" => Ok(TokenFormat::Json),
            "yaml" => Ok(TokenFormat::Yaml),
            "table" => Ok(TokenFormat::Table),
            "encoded" => Ok(TokenFormat::Encoded),
            other => Err(CliError::UnknownFormat(other.to_string())),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LegendView<'a> {
    token_types: &'a [String],
    token_modifiers: &'a [String],
}

pub fn render_tokens(
    source: &str,
    tokens: &[SemanticToken],
    format: TokenFormat,
) -> Result<String, CliError> {
    match format {
        TokenFormat::Json => Ok(serde_json::to_string_pretty(tokens)? + "\n"),
        TokenFormat::Yaml => Ok(serde_yaml::to_string(tokens)?),
        TokenFormat::Table => Ok(render_table(source, tokens)),
        TokenFormat::Encoded => Ok(render_encoded(tokens)),
    }
}

pub fn render_legend(legend: &Legend, format: TokenFormat) -> Result<String, CliError> {
    let view = LegendView {
        token_types: legend.token_types(),
        token_modifiers: legend.token_modifiers(),
    };
    match format {
        TokenFormat::Json => Ok(serde_json::to_string_pretty(&view)? + "\n"),
        TokenFormat::Yaml => Ok(serde_yaml::to_string(&view)?),
        TokenFormat::Table | TokenFormat::Encoded => {
            let mut out = String::new();
            for (index, name) in legend.token_types().iter().enumerate() {
                out.push_str(&format!("type {:>2} {}\n", index, name));
            }
            for (index, name) in legend.token_modifiers().iter().enumerate() {
                out.push_str(&format!("modifier bit {:>2} {}\n", index, name));
            }
            Ok(out)
        }
    }
}

fn render_table(source: &str, tokens: &[SemanticToken]) -> String {
    let lines: Vec<&str> = split_lines(source).collect();
    let mut out = String::new();
    for token in tokens {
        let text = lines
            .get(token.line as usize)
            .map(|line| utf16_slice(line, token.start_column, token.length))
            .unwrap_or_default();
        let modifiers = if token.modifiers.is_empty() {
            String::new()
        } else {
            format!("[{}]", token.modifiers.join(","))
        };
        out.push_str(&format!(
            "{}:{} len={} {}{} {:?}\n",
            token.line, token.start_column, token.length, token.token_type, modifiers, text
        ));
    }
    out
}

fn render_encoded(tokens: &[SemanticToken]) -> String {
    encode_tokens(tokens, Legend::standard())
        .iter()
        .map(|token| {
            format!(
                "{} {} {} {} {}\n",
                token.delta_line,
                token.delta_start,
                token.length,
                token.token_type,
                token.token_modifiers_bitset
            )
        })
        .collect()
}

/// Slice `line` by a UTF-16 column range, clamped to the line.
fn utf16_slice(line: &str, start: u32, length: u32) -> &str {
    let end = start + length;
    let mut column = 0u32;
    let mut start_byte = line.len();
    let mut end_byte = line.len();
    for (byte, ch) in line.char_indices() {
        if column == start {
            start_byte = byte;
        }
        if column == end {
            end_byte = byte;
            break;
        }
        column += ch.len_utf16() as u32;
    }
    &line[start_byte.min(end_byte)..end_byte]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_shows_token_text() {
        let source = "print.static(x)\n// hi";
        let tokens = dreamknot::tokenize(source);
        assert_eq!(
            render_tokens(source, &tokens, TokenFormat::Table).unwrap(),
            "0:0 len=12 function[static] \"print.static\"\n\
             0:12 len=1 string \"(\"\n\
             0:13 len=2 string \"x)\"\n\
             1:0 len=5 comment \"// hi\"\n"
        );
    }

    #[test]
    fn encoded_is_five_integers_per_token() {
        let source = "print.static(x)\n// hi";
        let tokens = dreamknot::tokenize(source);
        assert_eq!(
            render_tokens(source, &tokens, TokenFormat::Encoded).unwrap(),
            "0 0 12 13 8\n0 12 1 1 0\n0 1 2 1 0\n1 0 5 0 0\n"
        );
    }

    #[test]
    fn json_round_trips_tokens() {
        let source = "print.async";
        let tokens = dreamknot::tokenize(source);
        let json = render_tokens(source, &tokens, TokenFormat::Json).unwrap();
        let back: Vec<SemanticToken> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tokens);
    }

    #[test]
    fn legend_json_uses_camel_case() {
        let json = render_legend(Legend::standard(), TokenFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["tokenTypes"][13], "function");
        assert_eq!(value["tokenModifiers"][3], "static");
    }

    #[test]
    fn utf16_slicing_handles_surrogate_pairs() {
        assert_eq!(utf16_slice("é𝄞 xy", 0, 3), "é𝄞");
        assert_eq!(utf16_slice("é𝄞 xy", 3, 1), " ");
        assert_eq!(utf16_slice("é𝄞 xy", 4, 2), "xy");
        assert_eq!(utf16_slice("ab", 5, 1), "");
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(matches!(
            TokenFormat::parse("xml"),
            Err(CliError::UnknownFormat(name)) if name == "xml"
        ));
    }
}
