//! # Persistence Service
//!
//! Reads documents into lines and writes them back. Disk access is the one
//! genuinely asynchronous collaborator, so these calls are awaited by the
//! application controller and never by the editing core.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Document storage
#[allow(async_fn_in_trait)]
pub trait Persistence {
    /// Read and decode a document into lines without terminators
    async fn read_file(&self, path: &Path) -> Result<Vec<String>>;

    /// Write lines back, newline terminated
    async fn write_file(&self, path: &Path, lines: &[String]) -> Result<()>;
}

/// Split decoded text the same way `TextBuffer::from_text` does
fn split_lines(text: &str) -> Vec<String> {
    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    if lines.is_empty() {
        vec![String::new()]
    } else {
        lines
    }
}

fn join_lines(lines: &[String]) -> String {
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Local file system storage
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskPersistence;

impl DiskPersistence {
    pub fn new() -> Self {
        Self
    }
}

impl Persistence for DiskPersistence {
    async fn read_file(&self, path: &Path) -> Result<Vec<String>> {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?;

        // BOM sniffing picks UTF-16 when present, otherwise lossy UTF-8
        let (text, encoding, had_errors) = encoding_rs::UTF_8.decode(&bytes);
        if had_errors {
            tracing::warn!(
                "{} contains invalid {} sequences, replaced with U+FFFD",
                path.display(),
                encoding.name()
            );
        }
        tracing::debug!(
            "read {} bytes from {} as {}",
            bytes.len(),
            path.display(),
            encoding.name()
        );

        Ok(split_lines(&text))
    }

    async fn write_file(&self, path: &Path, lines: &[String]) -> Result<()> {
        tokio::fs::write(path, join_lines(lines))
            .await
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::debug!("wrote {} lines to {}", lines.len(), path.display());
        Ok(())
    }
}

/// In-memory storage for tests and scratch sessions
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    files: Mutex<HashMap<PathBuf, String>>,
    read_only: bool,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage that rejects every write
    pub fn read_only() -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
            read_only: true,
        }
    }

    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        if let Ok(mut files) = self.files.lock() {
            files.insert(path.into(), contents.into());
        }
    }

    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files.lock().ok()?.get(path).cloned()
    }
}

impl Persistence for MemoryPersistence {
    async fn read_file(&self, path: &Path) -> Result<Vec<String>> {
        let files = self
            .files
            .lock()
            .map_err(|_| anyhow::anyhow!("memory storage lock poisoned"))?;
        let text = files
            .get(path)
            .with_context(|| format!("no such file: {}", path.display()))?;
        Ok(split_lines(text))
    }

    async fn write_file(&self, path: &Path, lines: &[String]) -> Result<()> {
        if self.read_only {
            anyhow::bail!("{} is read-only", path.display());
        }
        let mut files = self
            .files
            .lock()
            .map_err(|_| anyhow::anyhow!("memory storage lock poisoned"))?;
        files.insert(path.to_path_buf(), join_lines(lines));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn disk_persistence_should_round_trip_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        let storage = DiskPersistence::new();

        storage
            .write_file(&path, &["alpha".to_string(), "beta".to_string()])
            .await
            .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "alpha\nbeta\n");
        assert_eq!(
            storage.read_file(&path).await.unwrap(),
            vec!["alpha".to_string(), "beta".to_string()]
        );
    }

    #[tokio::test]
    async fn disk_persistence_should_decode_crlf_and_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("windows.txt");
        std::fs::write(&path, b"\xEF\xBB\xBFone\r\ntwo\r\n").unwrap();

        let lines = DiskPersistence::new().read_file(&path).await.unwrap();

        assert_eq!(lines, vec!["one".to_string(), "two".to_string()]);
    }

    #[tokio::test]
    async fn disk_persistence_should_replace_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.txt");
        std::fs::write(&path, b"caf\xE9").unwrap();

        let lines = DiskPersistence::new().read_file(&path).await.unwrap();

        assert_eq!(lines, vec!["caf\u{FFFD}".to_string()]);
    }

    #[tokio::test]
    async fn disk_persistence_should_report_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        let error = DiskPersistence::new()
            .read_file(&dir.path().join("missing.txt"))
            .await
            .unwrap_err();
        assert!(error.to_string().contains("failed to read"));
    }

    #[tokio::test]
    async fn empty_file_should_read_as_one_empty_line() {
        let storage = MemoryPersistence::new();
        storage.insert("empty.txt", "");
        let lines = storage.read_file(Path::new("empty.txt")).await.unwrap();
        assert_eq!(lines, vec![String::new()]);
    }

    #[tokio::test]
    async fn read_only_memory_storage_should_reject_writes() {
        let storage = MemoryPersistence::read_only();
        let result = storage
            .write_file(Path::new("a.txt"), &["x".to_string()])
            .await;
        assert!(result.is_err());
    }
}
