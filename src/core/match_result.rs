use serde::{Deserialize, Serialize};
use crate::core::Song;

/// Song with the similarity score of one search call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSong {
    pub song: Song,

    /// Match score (0.0 - 1.0)
    pub score: f64,
}

impl ScoredSong {
    pub fn new(song: Song, score: f64) -> Self {
        Self { song, score }
    }

    /// Score as a rounded percentage (0 - 100)
    pub fn percent(&self) -> u32 {
        (self.score * 100.0).round() as u32
    }
}

/// Classification of a song request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    /// Title and artist found verbatim (ignoring case)
    Exact,
    /// Best suggestion above the close-match threshold
    Close,
    /// Nothing good enough, suggestions may still exist
    Unmatched,
}

/// Outcome of validating a request against the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub kind: MatchKind,

    /// Confidence (0.0 - 1.0)
    pub confidence: f64,

    /// Ranked suggestions, best first
    #[serde(default)]
    pub suggestions: Vec<ScoredSong>,

    /// Human-readable note for the requester
    #[serde(default)]
    pub message: Option<String>,
}

impl MatchResult {
    /// Exact hit: confidence 1.0, the song as only suggestion
    pub fn exact(song: Song) -> Self {
        Self {
            kind: MatchKind::Exact,
            confidence: 1.0,
            suggestions: vec![ScoredSong::new(song, 1.0)],
            message: None,
        }
    }

    /// Close hit on the first of `suggestions`
    pub fn close(suggestions: Vec<ScoredSong>) -> Self {
        let confidence = suggestions.first().map_or(0.0, |s| s.score);
        let message = suggestions
            .first()
            .map(|best| format!("Close match found: {}", best.song.display_name()));
        Self {
            kind: MatchKind::Close,
            confidence,
            suggestions,
            message,
        }
    }

    /// No match good enough; proposes the first of `suggestions` if any
    pub fn unmatched(title: &str, artist: &str, suggestions: Vec<ScoredSong>) -> Self {
        let (confidence, message) = match suggestions.first() {
            Some(best) => (
                best.score,
                format!("Song not found. Did you mean: {}?", best.song.display_name()),
            ),
            None => {
                let requested = if artist.is_empty() {
                    format!("\"{}\"", title)
                } else {
                    format!("\"{}\" by {}", title, artist)
                };
                (
                    0.0,
                    format!("{} not found in catalog. Request will use fallback options.", requested),
                )
            }
        };
        Self {
            kind: MatchKind::Unmatched,
            confidence,
            suggestions,
            message: Some(message),
        }
    }

    /// Whether the request can be played as-is (exact or close)
    pub fn is_valid(&self) -> bool {
        matches!(self.kind, MatchKind::Exact | MatchKind::Close)
    }

    /// Best suggestion, if any
    pub fn best(&self) -> Option<&ScoredSong> {
        self.suggestions.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_result() {
        let result = MatchResult::exact(Song::new("1", "Music", "Madonna"));
        assert_eq!(result.kind, MatchKind::Exact);
        assert_eq!(result.confidence, 1.0);
        assert_eq!(result.suggestions.len(), 1);
        assert!(result.message.is_none());
        assert!(result.is_valid());
    }

    #[test]
    fn test_close_message() {
        let best = ScoredSong::new(Song::new("1", "Bohemian Rhapsody", "Queen"), 0.95);
        let result = MatchResult::close(vec![best]);
        assert_eq!(result.confidence, 0.95);
        assert_eq!(
            result.message.as_deref(),
            Some("Close match found: \"Bohemian Rhapsody\" by Queen")
        );
        assert!(result.is_valid());
    }

    #[test]
    fn test_unmatched_messages() {
        let best = ScoredSong::new(Song::new("1", "Vogue", "Madonna"), 0.5);
        let result = MatchResult::unmatched("Vogu", "Madona", vec![best]);
        assert_eq!(result.confidence, 0.5);
        assert_eq!(
            result.message.as_deref(),
            Some("Song not found. Did you mean: \"Vogue\" by Madonna?")
        );
        assert!(!result.is_valid());

        let none = MatchResult::unmatched("Xyzzy", "Nobody", Vec::new());
        assert_eq!(none.confidence, 0.0);
        assert!(none.best().is_none());
        assert_eq!(
            none.message.as_deref(),
            Some("\"Xyzzy\" by Nobody not found in catalog. Request will use fallback options.")
        );
    }

    #[test]
    fn test_percent_and_serialization() {
        let scored = ScoredSong::new(Song::new("1", "Hello", "Adele"), 0.5714);
        assert_eq!(scored.percent(), 57);

        let json = serde_json::to_string(&MatchKind::Unmatched).unwrap();
        assert_eq!(json, "\"unmatched\"");
    }
}
