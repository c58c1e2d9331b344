//! RatioCatalog - ordered list of selectable ratio labels backed by a text file.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Labels written when the catalog file does not exist yet.
pub const DEFAULT_RATIOS: [&str; 11] = [
    "1:1",
    "landscape (4:3)",
    "landscape (3:2)",
    "landscape (16:9)",
    "landscape (16:10)",
    "landscape (21:9)",
    "portrait (3:4)",
    "portrait (2:3)",
    "portrait (9:16)",
    "portrait (9:10)",
    "portrait (9:21)",
];

/// Ratio labels stored one per line in a UTF-8 text file.
#[derive(Debug, Clone)]
pub struct RatioCatalog {
    path: PathBuf,
}

impl RatioCatalog {
    /// Create a catalog for the given file.
    /// Does not touch the filesystem - call `initialize()` to create it.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Create a catalog at the default location.
    /// Default: ~/.config/yares/ratios.txt
    pub fn with_default_path() -> Self {
        Self::new(default_path())
    }

    /// Get the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the default labels if the file does not exist.
    /// Returns `true` when the file was created. Existing files are left alone.
    pub fn initialize(&self) -> Result<bool> {
        if self.path.exists() {
            return Ok(false);
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }

        let mut content = DEFAULT_RATIOS.join("\n");
        content.push('\n');
        std::fs::write(&self.path, content).map_err(|e| self.io_error(e))?;

        log::info!(
            "Created ratio catalog with {} default entries: {}",
            DEFAULT_RATIOS.len(),
            self.path.display()
        );
        Ok(true)
    }

    /// Read the labels in file order, skipping blank lines.
    /// Fails if the file is missing; this never creates it.
    pub fn entries(&self) -> Result<Vec<String>> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }

    /// Initialize if needed, then read the labels.
    pub fn load(&self) -> Result<Vec<String>> {
        self.initialize()?;
        self.entries()
    }

    /// Whether `label` is one of the catalog entries.
    pub fn contains(&self, label: &str) -> Result<bool> {
        Ok(self.entries()?.iter().any(|entry| entry == label.trim()))
    }

    fn io_error(&self, source: std::io::Error) -> Error {
        Error::Io {
            path: self.path.clone(),
            source,
        }
    }
}

/// Get the default catalog file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from(".config"))
        .join("yares")
        .join("ratios.txt")
}
