//! Watch mode
//!
//! Re-checks files whenever `notify` reports them created or modified.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::check::check_path;
use crate::config::Config;
use crate::report::write_output;

#[derive(Debug)]
enum WatcherEvent {
    SourceChanged(PathBuf),
    WatcherError(notify::Error),
}

/// Watched paths touched by `event`, spelled as the user gave them
fn changed_paths(event: &Event, watched: &[PathBuf]) -> Vec<PathBuf> {
    if !matches!(event.kind, EventKind::Create(_) | EventKind::Modify(_)) {
        return Vec::new();
    }

    watched
        .iter()
        .filter(|w| event.paths.iter().any(|path| same_file(w, path)))
        .cloned()
        .collect()
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

fn check_and_print(config: &Config, path: &Path) -> Result<()> {
    let report = check_path(path)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "==> {} <==", path.display())?;
    write_output(&mut out, config.format, std::slice::from_ref(&report))
}

/// Fail unless every configured input is a file that can be watched
pub fn ensure_watchable(config: &Config) -> Result<()> {
    if config.reads_stdin() {
        bail!("--watch needs file paths; standard input cannot be watched");
    }
    Ok(())
}

/// Watch the configured paths until the process is interrupted
pub async fn watch(config: &Config) -> Result<()> {
    ensure_watchable(config)?;

    let watched: Vec<PathBuf> = config.paths.clone();
    let (tx, mut rx) = mpsc::unbounded_channel();

    let filter_paths = watched.clone();
    let mut watcher = RecommendedWatcher::new(
        move |res: Result<Event, notify::Error>| match res {
            Ok(event) => {
                for path in changed_paths(&event, &filter_paths) {
                    let _ = tx.send(WatcherEvent::SourceChanged(path));
                }
            }
            Err(e) => {
                let _ = tx.send(WatcherEvent::WatcherError(e));
            }
        },
        notify::Config::default().with_poll_interval(Duration::from_secs(1)),
    )?;

    // Editors often replace files on save, so watch the parent directory.
    for path in &watched {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        watcher
            .watch(dir, RecursiveMode::NonRecursive)
            .with_context(|| format!("Failed to watch {}", dir.display()))?;
        log::info!("Watching {}", path.display());
    }

    while let Some(event) = rx.recv().await {
        match event {
            WatcherEvent::SourceChanged(path) => {
                log::debug!("Source changed: {}", path.display());
                if let Err(e) = check_and_print(config, &path) {
                    log::warn!("Failed to check {}: {:#}", path.display(), e);
                }
            }
            WatcherEvent::WatcherError(e) => {
                log::warn!("File watcher error: {}", e);
            }
        }
    }

    Ok(())
}
