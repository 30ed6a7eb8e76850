use anyhow::Result;
use bracket_lint::lsp::server::serve;

#[tokio::main]
async fn main() -> Result<()> {
    serve().await
}
