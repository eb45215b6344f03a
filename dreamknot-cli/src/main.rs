//! Command-line interface for dreamknot
//! Prints the semantic tokens of dreamknot sources and the legend they are encoded against.
//!
//! Usage:
//!   dreamknot tokens `<path>` [--format `<format>`] [--config `<file>`]   - Tokenize a file (`-` reads stdin)
//!   dreamknot legend [--format `<format>`]                             - Print the token legends

mod render;

use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgMatches, Command};
use dreamknot::semantic::Legend;
use dreamknot_config::Loader;
use render::{render_legend, render_tokens, TokenFormat};
use std::io::{self, Read};
use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("configuration error: {0}")]
    Config(#[from] dreamknot_config::ConfigError),
    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to serialize YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unknown format '{0}'")]
    UnknownFormat(String),
}

fn main() {
    init_tracing();

    let matches = build_cli().get_matches();
    let result = match matches.subcommand() {
        Some(("tokens", sub)) => handle_tokens_command(sub),
        Some(("legend", sub)) => handle_legend_command(sub),
        _ => unreachable!("subcommand_required is set"),
    };

    match result {
        Ok(output) => print!("{}", output),
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    }
}

fn build_cli() -> Command {
    Command::new("dreamknot")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting dreamknot semantic tokens")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("tokens")
                .about("Print the semantic tokens of a dreamknot file")
                .arg(
                    Arg::new("path")
                        .help("Path to the dreamknot file, or '-' for stdin")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(PossibleValuesParser::new(TokenFormat::NAMES))
                        .default_value("table"),
                )
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("TOML file layered over the built-in configuration")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
        .subcommand(
            Command::new("legend")
                .about("Print the token type and modifier legends")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format")
                        .value_parser(PossibleValuesParser::new(["json", "yaml", "table"]))
                        .default_value("json"),
                ),
        )
}

/// Handle the tokens command
fn handle_tokens_command(matches: &ArgMatches) -> Result<String, CliError> {
    let path = matches
        .get_one::<String>("path")
        .map(String::as_str)
        .unwrap_or("-");
    let format = selected_format(matches)?;

    let mut loader = Loader::new();
    if let Some(config) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(config);
    }
    let tokenizer = loader.build()?.tokenizer()?;

    let source = read_source(path)?;
    let tokens = tokenizer.tokenize(&source);
    tracing::debug!(path, tokens = tokens.len(), "tokenized");
    render_tokens(&source, &tokens, format)
}

/// Handle the legend command
fn handle_legend_command(matches: &ArgMatches) -> Result<String, CliError> {
    render_legend(Legend::standard(), selected_format(matches)?)
}

fn selected_format(matches: &ArgMatches) -> Result<TokenFormat, CliError> {
    let name = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("json");
    TokenFormat::parse(name)
}

fn read_source(path: &str) -> Result<String, CliError> {
    let read_error = |source| CliError::Read {
        path: path.to_string(),
        source,
    };
    if path == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(read_error)?;
        Ok(buffer)
    } else {
        std::fs::read_to_string(path).map_err(read_error)
    }
}

fn init_tracing() {
    // stdout carries the rendered output
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        build_cli().debug_assert();
    }

    #[test]
    fn tokens_defaults_to_table() {
        let matches = build_cli()
            .try_get_matches_from(["dreamknot", "tokens", "file.dk"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(selected_format(sub).unwrap(), TokenFormat::Table);
    }

    #[test]
    fn rejects_unknown_format() {
        let result =
            build_cli().try_get_matches_from(["dreamknot", "tokens", "file.dk", "-f", "xml"]);
        assert!(result.is_err());
    }
}
