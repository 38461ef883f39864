//! Reading a local text file and summarizing it.

use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
#[error("could not read {}: {source}", .path.display())]
pub struct StoryError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Read the whole file as UTF-8 text.
pub async fn read_story(path: impl AsRef<Path>) -> Result<String, StoryError> {
    let path = path.as_ref();
    log::debug!("reading {}", path.display());
    tokio::fs::read_to_string(path).await.map_err(|source| StoryError {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub contents: String,
    /// Length in characters, not bytes.
    pub length: usize,
}

impl FileInfo {
    pub fn from_contents(contents: String) -> Self {
        let length = contents.chars().count();
        Self { contents, length }
    }
}

/// Case-insensitive count of non-overlapping occurrences of `word`.
pub fn count_mentions(text: &str, word: &str) -> usize {
    if word.is_empty() {
        return 0;
    }
    text.to_lowercase().matches(&word.to_lowercase()).count()
}
