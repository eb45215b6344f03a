use std::path::PathBuf;
use std::sync::Arc;

use clap::{Arg, Command};
use dreamknot_config::Loader;
use dreamknot_lsp::{DefaultFeatureProvider, DreamknotLanguageServer, ServerSettings};
use tokio::io::{stdin, stdout};
use tower_lsp::{LspService, Server};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing() {
    // stdout carries the protocol, so logs must go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() {
    let matches = Command::new("dreamknot-lsp")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Language server offering dreamknot semantic tokens")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the built-in defaults")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .get_matches();

    init_tracing();

    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(path);
    }
    let config = loader.build().unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(1);
    });
    let tokenizer = config.tokenizer().unwrap_or_else(|e| {
        eprintln!("Error loading configuration: {}", e);
        std::process::exit(1);
    });

    let features = Arc::new(DefaultFeatureProvider::new(tokenizer));
    let settings = ServerSettings::from(&config.server);

    let (service, socket) = LspService::new(move |client| {
        DreamknotLanguageServer::with_features(client, features.clone(), settings.clone())
    });
    Server::new(stdin(), stdout(), socket).serve(service).await;
}
