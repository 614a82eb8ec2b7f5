//! SQL Language Server Protocol (LSP) implementation.
//!
//! Exposes `textDocument/formatting` over stdin/stdout via `tower-lsp`,
//! backed by `sqlfmt-format`'s pipeline. The server keeps no parsed state
//! between requests: formatting re-tokenizes and re-parses the document's
//! latest cached text on every request, matching the stateless contract in
//! spec.md §5 (no incremental re-parse, no background indexing).

pub mod server;

use tower_lsp::{LspService, Server};

use server::SqlFmtBackend;

/// Run the SQL LSP server on stdin/stdout.
///
/// This is the main entry point called by `sqlfmt lsp`. It sets up the
/// tower-lsp service and runs the event loop until the client disconnects.
pub async fn run_server() {
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(SqlFmtBackend::new);
    Server::new(stdin, stdout, socket).serve(service).await;
}
