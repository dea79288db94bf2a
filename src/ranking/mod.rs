pub mod levenshtein;
pub mod similarity;

use crate::core::{ScoredSong, Song};

pub use levenshtein::LevenshteinRanker;
pub use similarity::{levenshtein_distance, similarity, SUBSTRING_SCORE};

/// Trait for scoring songs against a request
pub trait Ranker: Send + Sync {
    /// Match score of `song` for `query`, in `[0, 1]`
    fn score(&self, query: &str, song: &Song) -> f64;

    /// Get ranker name for logging
    fn name(&self) -> &str;

    /// Score every song, keep those strictly above `min_score`,
    /// sort by score descending (ties keep catalog order)
    fn rank(&self, query: &str, catalog: &[Song], min_score: f64) -> Vec<ScoredSong> {
        let mut ranked: Vec<ScoredSong> = catalog
            .iter()
            .map(|song| ScoredSong::new(song.clone(), self.score(query, song)))
            .filter(|scored| scored.score > min_score)
            .collect();

        // sort_by is stable
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

        ranked
    }
}
