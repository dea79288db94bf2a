use std::fs;
use std::path::{Path, PathBuf};

use crate::core::Song;
use crate::error::Result;
use crate::providers::CatalogProvider;

/// Catalog exported as a JSON array of songs
///
/// ```json
/// [
///   {"id": "adele_hello_001", "title": "Hello", "artist": "Adele", "album": "25"}
/// ]
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileProvider {
    path: PathBuf,
    label: String,
}

impl JsonFileProvider {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let label = path.display().to_string();
        Self { path, label }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogProvider for JsonFileProvider {
    fn load(&self) -> Result<Vec<Song>> {
        let json = fs::read_to_string(&self.path)?;
        let songs: Vec<Song> = serde_json::from_str(&json)?;

        tracing::debug!("Read {} songs from {}", songs.len(), self.label);

        Ok(songs)
    }

    fn name(&self) -> &str {
        &self.label
    }
}
