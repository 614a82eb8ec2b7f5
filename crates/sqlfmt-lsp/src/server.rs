//! Tower-lsp `Backend` implementation for the SQL formatter.
//!
//! Implements the LSP `LanguageServer` trait with support for:
//! - textDocument/didOpen, didChange, didClose (full-text document cache)
//! - textDocument/formatting
//! - Server capabilities advertisement

use std::collections::HashMap;
use std::sync::Mutex;

use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer};

use sqlfmt_common::dialect::AnsiDialect;
use sqlfmt_common::{Edit, FormatConfig, FormatOptions};

/// The SQL LSP server backend.
///
/// Holds a reference to the LSP client and an in-memory document store
/// keyed by URI, synced full-text on every `didChange` (matching
/// `TextDocumentSyncKind::FULL`, the same choice the server it's modeled
/// on makes -- this pipeline has no incremental reparse to exploit, so
/// there's nothing finer-grained to gain from).
pub struct SqlFmtBackend {
    client: Client,
    documents: Mutex<HashMap<String, String>>,
    config: Mutex<FormatConfig>,
}

impl SqlFmtBackend {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            documents: Mutex::new(HashMap::new()),
            config: Mutex::new(FormatConfig::default()),
        }
    }

    fn store_document(&self, uri: &Url, text: String) {
        self.documents.lock().unwrap().insert(uri.to_string(), text);
    }
}

/// Convert a 1-based `sqlfmt_common::Position` to a 0-based LSP position.
fn lsp_position(pos: sqlfmt_common::Position) -> Position {
    Position::new(pos.line.saturating_sub(1), pos.col.saturating_sub(1))
}

fn to_format_options(opts: &FormattingOptions) -> FormatOptions {
    FormatOptions {
        tab_size: opts.tab_size.max(1),
        insert_spaces: opts.insert_spaces,
    }
}

fn to_text_edit(edit: Edit) -> TextEdit {
    TextEdit {
        range: Range::new(lsp_position(edit.start), lsp_position(edit.end)),
        new_text: edit.new_text,
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for SqlFmtBackend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        if let Some(options) = params.initialization_options {
            if let Some(lowercase) = options.get("lowercaseKeywords").and_then(|v| v.as_bool()) {
                self.config.lock().unwrap().lowercase_keywords = lowercase;
            }
        }

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(TextDocumentSyncKind::FULL)),
                document_formatting_provider: Some(OneOf::Left(true)),
                ..Default::default()
            },
            ..Default::default()
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client.log_message(MessageType::INFO, "sqlfmt LSP server initialized").await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        self.store_document(&params.text_document.uri, params.text_document.text);
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        // TextDocumentSyncKind::FULL guarantees exactly one change event
        // carrying the entire document.
        if let Some(change) = params.content_changes.into_iter().next() {
            self.store_document(&params.text_document.uri, change.text);
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.documents.lock().unwrap().remove(&params.text_document.uri.to_string());
    }

    async fn formatting(&self, params: DocumentFormattingParams) -> Result<Option<Vec<TextEdit>>> {
        let uri = params.text_document.uri;
        let text = match self.documents.lock().unwrap().get(&uri.to_string()).cloned() {
            Some(text) => text,
            None => return Ok(None),
        };

        let format_options = to_format_options(&params.options);
        let lowercase_keywords = self.config.lock().unwrap().lowercase_keywords;

        match sqlfmt_format::format_document(&text, &format_options, &AnsiDialect, lowercase_keywords) {
            Ok(edit) => Ok(Some(vec![to_text_edit(edit)])),
            Err(err) => {
                self.client.log_message(MessageType::WARNING, format!("sqlfmt: {err}")).await;
                Ok(None)
            }
        }
    }
}
