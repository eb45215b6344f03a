//! Main language server implementation

use std::collections::HashMap;
use std::sync::Arc;

use dreamknot::semantic::{encode_tokens, Legend, TOKEN_MODIFIERS, TOKEN_TYPES};
use dreamknot::{SemanticToken, Tokenizer};
use dreamknot_config::ServerConfig;
use tokio::sync::RwLock;
use tower_lsp::async_trait;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::{
    DocumentFilter, InitializeParams, InitializeResult, InitializedParams,
    SemanticToken as LspSemanticToken, SemanticTokenModifier, SemanticTokenType, SemanticTokens,
    SemanticTokensFullOptions, SemanticTokensLegend, SemanticTokensOptions,
    SemanticTokensParams, SemanticTokensRegistrationOptions, SemanticTokensResult,
    ServerCapabilities, ServerInfo, StaticRegistrationOptions, TextDocumentItem,
    TextDocumentRegistrationOptions, TextDocumentSyncCapability, TextDocumentSyncKind, Url,
    WorkDoneProgressOptions,
};
use tower_lsp::Client;
use tracing::{debug, info};

pub trait LspClient: Send + Sync + Clone + 'static {}
impl LspClient for Client {}

pub trait FeatureProvider: Send + Sync + 'static {
    fn semantic_tokens(&self, text: &str) -> Vec<SemanticToken>;
}

#[derive(Debug, Default)]
pub struct DefaultFeatureProvider {
    tokenizer: Tokenizer,
}

impl DefaultFeatureProvider {
    pub fn new(tokenizer: Tokenizer) -> Self {
        Self { tokenizer }
    }
}

impl FeatureProvider for DefaultFeatureProvider {
    fn semantic_tokens(&self, text: &str) -> Vec<SemanticToken> {
        self.tokenizer.tokenize(text)
    }
}

/// The documents semantic tokens are registered for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub language_id: String,
    pub scheme: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            language_id: "dreamknot".to_string(),
            scheme: "file".to_string(),
        }
    }
}

impl From<&ServerConfig> for ServerSettings {
    fn from(config: &ServerConfig) -> Self {
        Self {
            language_id: config.language_id.clone(),
            scheme: config.scheme.clone(),
        }
    }
}

#[derive(Default)]
struct DocumentStore {
    entries: RwLock<HashMap<Url, Arc<String>>>,
}

impl DocumentStore {
    async fn upsert(&self, uri: Url, text: String) {
        self.entries.write().await.insert(uri, Arc::new(text));
    }

    async fn get(&self, uri: &Url) -> Option<Arc<String>> {
        self.entries.read().await.get(uri).cloned()
    }

    async fn remove(&self, uri: &Url) {
        self.entries.write().await.remove(uri);
    }
}

fn semantic_tokens_legend() -> SemanticTokensLegend {
    SemanticTokensLegend {
        token_types: TOKEN_TYPES.into_iter().map(SemanticTokenType::new).collect(),
        token_modifiers: TOKEN_MODIFIERS
            .into_iter()
            .map(SemanticTokenModifier::new)
            .collect(),
    }
}

pub struct DreamknotLanguageServer<C = Client, P = DefaultFeatureProvider> {
    _client: C,
    documents: DocumentStore,
    features: Arc<P>,
    settings: ServerSettings,
}

impl DreamknotLanguageServer<Client, DefaultFeatureProvider> {
    pub fn new(client: Client) -> Self {
        Self::with_features(
            client,
            Arc::new(DefaultFeatureProvider::default()),
            ServerSettings::default(),
        )
    }
}

impl<C, P> DreamknotLanguageServer<C, P>
where
    C: LspClient,
    P: FeatureProvider,
{
    pub fn with_features(client: C, features: Arc<P>, settings: ServerSettings) -> Self {
        Self {
            _client: client,
            documents: DocumentStore::default(),
            features,
            settings,
        }
    }

    fn semantic_tokens_capability(&self) -> lsp_types::SemanticTokensServerCapabilities {
        lsp_types::SemanticTokensServerCapabilities::SemanticTokensRegistrationOptions(
            SemanticTokensRegistrationOptions {
                text_document_registration_options: TextDocumentRegistrationOptions {
                    document_selector: Some(vec![DocumentFilter {
                        language: Some(self.settings.language_id.clone()),
                        scheme: Some(self.settings.scheme.clone()),
                        pattern: None,
                    }]),
                },
                semantic_tokens_options: SemanticTokensOptions {
                    work_done_progress_options: WorkDoneProgressOptions::default(),
                    legend: semantic_tokens_legend(),
                    range: None,
                    full: Some(SemanticTokensFullOptions::Bool(true)),
                },
                static_registration_options: StaticRegistrationOptions::default(),
            },
        )
    }
}

/// Relative-encode tokens against the standard legend.
fn encode_semantic_tokens(tokens: &[SemanticToken]) -> Vec<LspSemanticToken> {
    encode_tokens(tokens, Legend::standard())
        .into_iter()
        .map(|token| LspSemanticToken {
            delta_line: token.delta_line,
            delta_start: token.delta_start,
            length: token.length,
            token_type: token.token_type,
            token_modifiers_bitset: token.token_modifiers_bitset,
        })
        .collect()
}

#[async_trait]
impl<C, P> tower_lsp::LanguageServer for DreamknotLanguageServer<C, P>
where
    C: LspClient,
    P: FeatureProvider,
{
    async fn initialize(&self, _: InitializeParams) -> Result<InitializeResult> {
        let capabilities = ServerCapabilities {
            text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
            semantic_tokens_provider: Some(self.semantic_tokens_capability()),
            ..ServerCapabilities::default()
        };

        Ok(InitializeResult {
            capabilities,
            server_info: Some(ServerInfo {
                name: "dreamknot-lsp".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        info!(
            language = %self.settings.language_id,
            scheme = %self.settings.scheme,
            "server initialized"
        );
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: lsp_types::DidOpenTextDocumentParams) {
        let TextDocumentItem { uri, text, .. } = params.text_document;
        debug!(%uri, "opened");
        self.documents.upsert(uri, text).await;
    }

    async fn did_change(&self, params: lsp_types::DidChangeTextDocumentParams) {
        if let Some(change) = params.content_changes.into_iter().last() {
            self.documents
                .upsert(params.text_document.uri, change.text)
                .await;
        }
    }

    async fn did_close(&self, params: lsp_types::DidCloseTextDocumentParams) {
        debug!(uri = %params.text_document.uri, "closed");
        self.documents.remove(&params.text_document.uri).await;
    }

    async fn semantic_tokens_full(
        &self,
        params: SemanticTokensParams,
    ) -> Result<Option<SemanticTokensResult>> {
        let uri = params.text_document.uri;
        if let Some(text) = self.documents.get(&uri).await {
            let tokens = self.features.semantic_tokens(text.as_str());
            let data = encode_semantic_tokens(&tokens);
            debug!(%uri, tokens = data.len(), "semantic tokens");
            Ok(Some(SemanticTokensResult::Tokens(SemanticTokens {
                result_id: None,
                data,
            })))
        } else {
            debug!(%uri, "semantic tokens requested for unknown document");
            Ok(None)
        }
    }
}
