use crate::core::Song;
use crate::ranking::similarity::similarity;
use crate::ranking::Ranker;

/// Levenshtein-based ranker
///
/// A song scores the best of its title, its artist, and
/// "title artist" against the query.
#[derive(Debug, Clone, Copy)]
pub struct LevenshteinRanker;

impl LevenshteinRanker {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LevenshteinRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl Ranker for LevenshteinRanker {
    fn score(&self, query: &str, song: &Song) -> f64 {
        let title_match = similarity(&song.title, query);
        let artist_match = similarity(song.artist_or_empty(), query);
        let combined_match = similarity(&song.combined_text(), query);

        title_match.max(artist_match).max(combined_match)
    }

    fn name(&self) -> &str {
        "levenshtein"
    }
}
