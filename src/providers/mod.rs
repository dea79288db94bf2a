pub mod demo;
pub mod json_file;

use crate::core::Song;
use crate::error::Result;

pub use demo::DemoProvider;
pub use json_file::JsonFileProvider;

/// Trait for catalog sources (static list, JSON export, music service, ...)
pub trait CatalogProvider: Send + Sync {
    /// Load every song, in catalog order
    fn load(&self) -> Result<Vec<Song>>;

    /// Get provider name
    fn name(&self) -> &str;
}
