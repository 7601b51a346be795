//! Preloaded static pages and templates
//!
//! Loaded once at startup and shared read-only afterwards.

use std::path::Path;

use bytes::Bytes;
use hashbrown::HashMap;

/// Asset loading errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssetError {
    #[error("asset directory unreadable: {0}")]
    UnreadableDirectory(String),
    #[error("asset unreadable: {0}")]
    UnreadableFile(String),
    #[error("asset name is not valid UTF-8: {0}")]
    InvalidName(String),
}

/// File name to content map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetBundle {
    entries: HashMap<String, Bytes>,
}

impl AssetBundle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bundle from in-memory entries; later duplicates replace earlier ones
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Bytes>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(name, data)| (name.into(), data.into()))
                .collect(),
        }
    }

    /// Read every regular file directly inside `dir`. Sub-directories are skipped.
    ///
    /// # Errors
    ///
    /// Returns `UnreadableDirectory` if the directory cannot be listed,
    /// `UnreadableFile` if a file cannot be read, and `InvalidName` for a
    /// file name that is not UTF-8.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, AssetError> {
        let dir = dir.as_ref();
        let listing = std::fs::read_dir(dir)
            .map_err(|e| AssetError::UnreadableDirectory(format!("{}: {e}", dir.display())))?;

        let mut entries = HashMap::new();
        for entry in listing {
            let entry = entry
                .map_err(|e| AssetError::UnreadableDirectory(format!("{}: {e}", dir.display())))?;
            let path = entry.path();
            if path.is_dir() {
                continue;
            }

            let name = entry
                .file_name()
                .into_string()
                .map_err(|raw| AssetError::InvalidName(raw.to_string_lossy().into_owned()))?;
            let data = std::fs::read(&path)
                .map_err(|e| AssetError::UnreadableFile(format!("{}: {e}", path.display())))?;

            tracing::debug!(asset = %name, size = data.len(), "loaded asset");
            entries.insert(name, Bytes::from(data));
        }

        tracing::info!(dir = %dir.display(), count = entries.len(), "asset bundle loaded");
        Ok(Self { entries })
    }

    /// Content of one asset; cloning `Bytes` shares the buffer
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Bytes> {
        self.entries.get(name).cloned()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Asset names, sorted
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
