use std::thread;
use std::time::Duration;

use anyhow::Result;
use tokio::io::{stdin, stdout};
use tower_lsp::{LspService, Server};

use crate::lsp::backend::Backend;
use crate::Config;

/// Environment variable that makes the server exit shortly after start
pub const TEST_EXIT_ENV: &str = "BRACKET_LS_TEST_EXIT";

/// Start the LSP server on stdio
pub async fn serve() -> Result<()> {
    let config = Config::from_server_args_and_env()?;
    config.init_logging();

    // Under the integration tests, exit after a short delay so the test can read stdout to EOF.
    if std::env::var(TEST_EXIT_ENV).as_deref() == Ok("1") {
        thread::spawn(|| {
            thread::sleep(Duration::from_secs(1));
            std::process::exit(0);
        });
    }

    log::info!("Starting bracket-ls on stdio");
    let (service, socket) = LspService::build(move |client| Backend::new(client, config.clone()))
        .finish();

    Server::new(stdin(), stdout(), socket).serve(service).await;

    Ok(())
}
