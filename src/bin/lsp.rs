//! driven-script Language Server binary entry point
//!
//! Run with: driven-lsp
//!
//! The LSP communicates via stdin/stdout using the Language Server Protocol.

use driven_script::lsp::DrivenLanguageServer;
use tower_lsp::{LspService, Server};

#[tokio::main]
async fn main() {
    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) = LspService::new(DrivenLanguageServer::new);

    Server::new(stdin, stdout, socket).serve(service).await;
}
