//! # paned Main Entry Point
//!
//! Reads the config, starts file logging and hands the terminal to the
//! application controller.

use anyhow::{Context, Result};
use paned::cmd_args::CommandLineArgs;
use paned::config::{self, EditorConfig};
use paned::editor::io::{TerminalEventStream, TerminalRenderStream};
use paned::editor::AppController;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cmd_args = CommandLineArgs::parse();

    let config_path = config::get_config_path(cmd_args.config());
    let mut config = EditorConfig::load(&config_path)?;
    config.apply_args(&cmd_args);

    init_tracing_subscriber(&config);
    tracing::info!("using config {}", config_path.display());

    if !atty::is(atty::Stream::Stdin) || !atty::is(atty::Stream::Stdout) {
        anyhow::bail!("paned must be run in an interactive terminal");
    }

    let mut app = AppController::with_io_streams(
        config,
        TerminalEventStream::new(),
        TerminalRenderStream::new(),
    )?;
    app.open_files(cmd_args.files()).await;
    app.run().await
}

/// Log to a file; the terminal belongs to the editor
///
/// `PANED_LOG_LEVEL` overrides the configured level.
fn init_tracing_subscriber(config: &EditorConfig) {
    let file = match open_log_file(&config.log_file) {
        Ok(file) => file,
        Err(error) => {
            eprintln!("logging disabled: {error:#}");
            return;
        }
    };

    let filter = EnvFilter::try_from_env(format!(
        "{}_LOG_LEVEL",
        env!("CARGO_PKG_NAME").to_uppercase()
    ))
    .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_timer(ChronoLocal::rfc_3339())
        .init();
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_log_file_should_create_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("paned.log");

        open_log_file(&path).unwrap();

        assert!(path.exists());
    }
}
