//! Language Server Protocol (LSP) implementation for dreamknot
//!
//!     This crate offers dreamknot semantic tokens to any LSP-compatible editor. It is the Rust
//!     counterpart of registering a semantic tokens provider for the `dreamknot` language on
//!     `file` documents.
//!
//! Feature Set
//!
//!     Semantic Tokens (textDocument/semanticTokens/full):
//!         - Function calls with dot modifiers (`print.readonly.static`)
//!         - Line comments
//!         - Everything else as string
//!
//!     Range and delta requests are not offered: tokenizing a whole document is a single linear
//!     pass, and each request recomputes tokens from the latest text.
//!
//! Architecture
//!
//!     LSP Layer (tower-lsp):
//!         - JSON-RPC, capability negotiation, request routing and cancellation
//!
//!     Server Layer (this crate):
//!         - Implements the LanguageServer trait
//!         - Keeps the latest text of every open document
//!         - Registers the legend and document selector, encodes tokens for the wire
//!
//!     Feature Layer (dreamknot):
//!         - The tokenizer, reached through the [`server::FeatureProvider`] seam so server tests
//!           can assert what was called without tokenizing anything
//!
//! Usage
//!
//!     Binary:
//!         $ dreamknot-lsp [--config dreamknot.toml]
//!         Starts the language server on stdin/stdout. Logs go to stderr, filtered by RUST_LOG.

pub mod server;

pub use server::{DefaultFeatureProvider, DreamknotLanguageServer, FeatureProvider, ServerSettings};
