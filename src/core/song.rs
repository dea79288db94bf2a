use serde::{Deserialize, Serialize};

/// A song in the request catalog
///
/// `title` is the primary text matched against requests, `artist` the
/// secondary one. A missing artist matches as the empty string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Song {
    /// Unique ID assigned by the catalog owner
    pub id: String,

    /// Song title
    pub title: String,

    /// Performing artist
    #[serde(default)]
    pub artist: Option<String>,

    /// Album name (informational, not matched)
    #[serde(default)]
    pub album: Option<String>,

    /// Track length in seconds (informational, not matched)
    #[serde(default)]
    pub duration_secs: Option<u32>,
}

impl Song {
    /// Create a new Song with required fields
    pub fn new(id: impl Into<String>, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: Some(artist.into()),
            album: None,
            duration_secs: None,
        }
    }

    /// Set the album
    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    /// Artist, or the empty string when unknown
    pub fn artist_or_empty(&self) -> &str {
        self.artist.as_deref().unwrap_or("")
    }

    /// Title and artist joined by a single space
    pub fn combined_text(&self) -> String {
        format!("{} {}", self.title, self.artist_or_empty())
    }

    /// Case-insensitive equality on title and artist
    pub fn matches_exactly(&self, title: &str, artist: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
            && self.artist_or_empty().to_lowercase() == artist.to_lowercase()
    }

    /// Get display name (for logging/UI): `"Title" by Artist`
    pub fn display_name(&self) -> String {
        match self.artist.as_deref() {
            Some(artist) if !artist.is_empty() => format!("\"{}\" by {}", self.title, artist),
            _ => format!("\"{}\"", self.title),
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
