use std::collections::HashSet;
use std::ops::Deref;
use std::sync::Arc;

use crate::core::Song;
use crate::error::{MatcherError, Result};
use crate::providers::CatalogProvider;

/// Read-only, validated song catalog
///
/// Songs keep the order they were loaded in; ranking ties fall back to it.
/// Cloning is cheap (shared storage).
#[derive(Debug, Clone)]
pub struct Catalog {
    songs: Arc<[Song]>,
}

impl Catalog {
    /// Build a catalog, rejecting blank ids, blank titles and duplicate ids
    pub fn from_songs(songs: Vec<Song>) -> Result<Self> {
        validate_songs(&songs)?;

        Ok(Self { songs: songs.into() })
    }

    /// Load and validate a catalog from a provider
    pub fn from_provider(provider: &dyn CatalogProvider) -> Result<Self> {
        let songs = provider.load()?;
        let catalog = Self::from_songs(songs)?;

        tracing::info!("🎵 Catalog loaded from {}: {} songs", provider.name(), catalog.len());

        Ok(catalog)
    }

    /// First song whose title and artist equal the request, ignoring case
    pub fn find_exact(&self, title: &str, artist: &str) -> Option<&Song> {
        find_exact(&self.songs, title, artist)
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    /// Look a song up by id
    pub fn get(&self, id: &str) -> Option<&Song> {
        self.songs.iter().find(|song| song.id == id)
    }

    /// Number of distinct artists (songs without artist not counted)
    pub fn artist_count(&self) -> usize {
        self.songs
            .iter()
            .filter_map(|song| song.artist.as_deref())
            .map(str::to_lowercase)
            .collect::<HashSet<_>>()
            .len()
    }
}

impl Deref for Catalog {
    type Target = [Song];

    fn deref(&self) -> &[Song] {
        &self.songs
    }
}

fn validate_songs(songs: &[Song]) -> Result<()> {
    let mut seen = HashSet::with_capacity(songs.len());

    for song in songs {
        if song.id.trim().is_empty() {
            return Err(MatcherError::InvalidSong {
                id: song.id.clone(),
                reason: format!("id is blank (title \"{}\")", song.title),
            });
        }
        if song.title.trim().is_empty() {
            return Err(MatcherError::InvalidSong {
                id: song.id.clone(),
                reason: "title is blank".to_string(),
            });
        }
        if !seen.insert(song.id.as_str()) {
            return Err(MatcherError::DuplicateId(song.id.clone()));
        }
    }

    Ok(())
}

/// First song in `songs` matching title and artist, ignoring case
pub fn find_exact<'a>(songs: &'a [Song], title: &str, artist: &str) -> Option<&'a Song> {
    songs.iter().find(|song| song.matches_exactly(title, artist))
}
