use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;

use bracket_lint::check::{check_path, FileReport, STDIN_PATH};
use bracket_lint::config::Config;
use bracket_lint::report::write_output;
use bracket_lint::watch::{ensure_watchable, watch};

/// Exit status when every file is clean
const EXIT_CLEAN: u8 = 0;
/// Exit status when at least one diagnostic was reported
const EXIT_DIAGNOSTICS: u8 = 1;
/// Exit status for unreadable input or bad configuration
const EXIT_ERROR: u8 = 2;

fn check_all(config: &Config) -> Result<Vec<FileReport>> {
    let paths: Vec<PathBuf> = if config.paths.is_empty() {
        vec![PathBuf::from(STDIN_PATH)]
    } else {
        config.paths.clone()
    };

    paths.iter().map(|path| check_path(path)).collect()
}

async fn run() -> Result<bool> {
    let config = Config::from_args_and_env()?;
    config.init_logging();

    // Reject stdin before blocking on it
    if config.watch {
        ensure_watchable(&config)?;
    }

    let reports = check_all(&config)?;
    let stdout = std::io::stdout();
    write_output(&mut stdout.lock(), config.format, &reports)?;

    if config.watch {
        watch(&config).await?;
    }

    Ok(reports.iter().all(FileReport::is_clean))
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(true) => ExitCode::from(EXIT_CLEAN),
        Ok(false) => ExitCode::from(EXIT_DIAGNOSTICS),
        Err(e) => {
            eprintln!("bracket-lint: {:#}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
