//! LSP (Language Server Protocol) backend implementation for driven-script

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use driven_syntax::completion;
use driven_syntax::lexer::{Lexer, TokenKind};
use driven_syntax::parser;

use crate::lsp::diagnostics::{offset_to_position, position_to_offset, script_error_to_diagnostic};
use crate::version::DRIVEN_VERSION;

/// Document state stored by the LSP
#[derive(Debug, Clone)]
pub struct DocumentState {
    pub source: String,
    pub version: i32,
}

/// driven-script Language Server
pub struct DrivenLanguageServer {
    client: Client,
    documents: Arc<RwLock<HashMap<Url, DocumentState>>>,
}

impl DrivenLanguageServer {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            documents: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Analyze a document and publish diagnostics
    async fn analyze_document(&self, uri: &Url, source: &str, version: i32) {
        tracing::debug!(%uri, version, bytes = source.len(), "analyzing document");
        let diagnostics = match parser::parse(source) {
            Ok(_) => Vec::new(),
            Err(errors) => errors
                .iter()
                .map(|error| script_error_to_diagnostic(error, source))
                .collect(),
        };

        {
            let mut docs = self.documents.write().await;
            docs.insert(
                uri.clone(),
                DocumentState {
                    source: source.to_string(),
                    version,
                },
            );
        }

        // Publish diagnostics (even if empty, to clear old ones)
        self.client
            .publish_diagnostics(uri.clone(), diagnostics, Some(version))
            .await;
    }
}

// ============================================================================
// Semantic tokens
// ============================================================================

/// Legend indices for [`semantic_tokens`]. `text` spans carry no highlight and are skipped.
fn legend_index(kind: TokenKind) -> Option<u32> {
    match kind {
        TokenKind::Comment => Some(0),
        TokenKind::Keyword | TokenKind::KeywordControl => Some(1),
        TokenKind::Identifier => Some(2),
        TokenKind::Operator | TokenKind::Delimiter => Some(3),
        TokenKind::Str | TokenKind::StringEscape => Some(4),
        TokenKind::NumberInteger | TokenKind::NumberFloat | TokenKind::NumberHex => Some(5),
        TokenKind::Invalid | TokenKind::StringInvalid | TokenKind::StringEscapeInvalid => Some(6),
        TokenKind::Text => None,
    }
}

fn legend() -> SemanticTokensLegend {
    SemanticTokensLegend {
        token_types: vec![
            SemanticTokenType::COMMENT,
            SemanticTokenType::KEYWORD,
            SemanticTokenType::VARIABLE,
            SemanticTokenType::OPERATOR,
            SemanticTokenType::STRING,
            SemanticTokenType::NUMBER,
            SemanticTokenType::new("invalid"),
        ],
        token_modifiers: vec![],
    }
}

/// Delta-encode the token stream for `textDocument/semanticTokens/full`.
///
/// LSP tokens cannot span lines, so multi-line lexemes (block comments) are split into one
/// entry per line.
fn semantic_tokens(source: &str) -> Vec<SemanticToken> {
    let mut data = Vec::new();
    let mut prev_line = 0u32;
    let mut prev_start = 0u32;

    for token in Lexer::new(source) {
        let Some(token_type) = legend_index(token.kind) else {
            continue;
        };

        let start = offset_to_position(source, token.span.start);
        let mut line = start.line;
        let mut character = start.character;

        for (i, segment) in token.lexeme.split('\n').enumerate() {
            if i > 0 {
                line += 1;
                character = 0;
            }
            let length = segment.chars().count() as u32;
            if length == 0 {
                continue;
            }
            let delta_line = line - prev_line;
            let delta_start = if delta_line == 0 {
                character - prev_start
            } else {
                character
            };
            data.push(SemanticToken {
                delta_line,
                delta_start,
                length,
                token_type,
                token_modifiers_bitset: 0,
            });
            prev_line = line;
            prev_start = character;
        }
    }
    data
}

// ============================================================================
// LanguageServer implementation
// ============================================================================

#[tower_lsp::async_trait]
impl LanguageServer for DrivenLanguageServer {
    async fn initialize(&self, _params: InitializeParams) -> Result<InitializeResult> {
        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                completion_provider: Some(CompletionOptions::default()),
                semantic_tokens_provider: Some(
                    SemanticTokensServerCapabilities::SemanticTokensOptions(
                        SemanticTokensOptions {
                            legend: legend(),
                            full: Some(SemanticTokensFullOptions::Bool(true)),
                            range: None,
                            work_done_progress_options: WorkDoneProgressOptions::default(),
                        },
                    ),
                ),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "driven-lsp".to_string(),
                version: Some(DRIVEN_VERSION.to_string()),
            }),
        })
    }

    async fn initialized(&self, _params: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "driven-script language server ready")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        let doc = params.text_document;
        self.analyze_document(&doc.uri, &doc.text, doc.version).await;
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        // Full sync: the last change carries the whole document.
        let Some(change) = params.content_changes.into_iter().next_back() else {
            return;
        };
        self.analyze_document(
            &params.text_document.uri,
            &change.text,
            params.text_document.version,
        )
        .await;
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        let uri = params.text_document.uri;
        {
            let mut docs = self.documents.write().await;
            docs.remove(&uri);
        }
        self.client.publish_diagnostics(uri, Vec::new(), None).await;
    }

    async fn completion(&self, params: CompletionParams) -> Result<Option<CompletionResponse>> {
        let uri = &params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;

        let docs = self.documents.read().await;
        let doc = match docs.get(uri) {
            Some(doc) => doc,
            None => return Ok(None),
        };

        let offset = position_to_offset(&doc.source, position);
        let items: Vec<CompletionItem> = completion::completions(&doc.source, offset)
            .into_iter()
            .map(|snippet| CompletionItem {
                label: snippet.label.to_string(),
                kind: Some(CompletionItemKind::SNIPPET),
                detail: Some(format!("{} block", snippet.label)),
                documentation: Some(Documentation::String(snippet.documentation.to_string())),
                insert_text: Some(snippet.insert_template.to_string()),
                insert_text_format: Some(InsertTextFormat::PLAIN_TEXT),
                ..Default::default()
            })
            .collect();

        Ok(Some(CompletionResponse::Array(items)))
    }

    async fn semantic_tokens_full(
        &self,
        params: SemanticTokensParams,
    ) -> Result<Option<SemanticTokensResult>> {
        let docs = self.documents.read().await;
        let doc = match docs.get(&params.text_document.uri) {
            Some(doc) => doc,
            None => return Ok(None),
        };

        Ok(Some(SemanticTokensResult::Tokens(SemanticTokens {
            result_id: None,
            data: semantic_tokens(&doc.source),
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_covers_every_index() {
        let legend = legend();
        let max = TokenKind::ALL
            .iter()
            .filter_map(|&k| legend_index(k))
            .max()
            .unwrap();
        assert_eq!(max as usize + 1, legend.token_types.len());
    }

    #[test]
    fn semantic_tokens_are_delta_encoded() {
        let source = "MODULE [M]:\nEND\n";
        let data = semantic_tokens(source);

        // MODULE at 0:0 (6 chars), [M] at 0:7 (3 chars), END on the next line.
        assert_eq!(data[0].delta_line, 0);
        assert_eq!(data[0].delta_start, 0);
        assert_eq!(data[0].length, 6);

        assert_eq!(data[1].delta_line, 0);
        assert_eq!(data[1].delta_start, 7);
        assert_eq!(data[1].length, 3);

        let end = data.last().unwrap();
        assert_eq!(end.delta_line, 1);
        assert_eq!(end.delta_start, 0);
        assert_eq!(end.length, 3);
    }

    #[test]
    fn multi_line_comments_split_per_line() {
        let source = "=== one\ntwo ===\n";
        let data = semantic_tokens(source);
        // "===", " one", "two ", "===" -> four single-line entries, two lines.
        assert!(data.len() >= 3, "{data:?}");
        assert!(data.iter().all(|t| t.token_type == 0));
        assert_eq!(data.iter().map(|t| t.delta_line).sum::<u32>(), 1);
    }
}
