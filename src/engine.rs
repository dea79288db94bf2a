use std::sync::Arc;

use crate::catalog::{self, Catalog};
use crate::config::MatchConfig;
use crate::core::{MatchResult, ScoredSong, Song};
use crate::ranking::{LevenshteinRanker, Ranker};

/// Default number of search results
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// Default minimum score (exclusive)
pub const DEFAULT_MIN_SCORE: f64 = 0.3;

/// Search `catalog` for `query` with the Levenshtein ranker
///
/// Returns at most `max_results` songs scoring strictly above `min_score`,
/// best first. Queries shorter than two characters after trimming return
/// nothing.
pub fn search(query: &str, catalog: &[Song], max_results: usize, min_score: f64) -> Vec<ScoredSong> {
    let config = MatchConfig {
        max_results,
        min_score,
        ..MatchConfig::default()
    };
    search_with(&LevenshteinRanker, &config, query, catalog, max_results)
}

/// Classify a title/artist request against `catalog` with default thresholds
pub fn validate(title: &str, artist: &str, catalog: &[Song]) -> MatchResult {
    validate_with(&LevenshteinRanker, &MatchConfig::default(), title, artist, catalog)
}

fn search_with(
    ranker: &dyn Ranker,
    config: &MatchConfig,
    query: &str,
    catalog: &[Song],
    max_results: usize,
) -> Vec<ScoredSong> {
    if query.trim().chars().count() < config.min_query_chars {
        return Vec::new();
    }

    let mut ranked = ranker.rank(query, catalog, config.min_score);
    ranked.truncate(max_results);
    ranked
}

fn validate_with(
    ranker: &dyn Ranker,
    config: &MatchConfig,
    title: &str,
    artist: &str,
    catalog: &[Song],
) -> MatchResult {
    if let Some(song) = catalog::find_exact(catalog, title, artist) {
        tracing::debug!("Exact match for {}", song.display_name());
        return MatchResult::exact(song.clone());
    }

    let combined = format!("{} {}", title, artist);
    let suggestions = search_with(ranker, config, combined.trim(), catalog, config.max_suggestions);

    let result = match suggestions.first() {
        Some(best) if best.score > config.close_threshold => MatchResult::close(suggestions),
        _ => MatchResult::unmatched(title, artist, suggestions),
    };

    tracing::debug!(
        "Validated \"{}\" / \"{}\": {:?} ({:.3}, {} suggestions)",
        title,
        artist,
        result.kind,
        result.confidence,
        result.suggestions.len()
    );

    result
}

/// Song request matcher bound to one catalog
///
/// Holds no mutable state, so one engine can be shared between threads.
#[derive(Clone)]
pub struct MatchEngine {
    catalog: Catalog,
    ranker: Arc<dyn Ranker>,
    config: MatchConfig,
}

impl std::fmt::Debug for MatchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchEngine")
            .field("songs", &self.catalog.len())
            .field("ranker", &self.ranker.name())
            .field("config", &self.config)
            .finish()
    }
}

impl MatchEngine {
    /// Create engine with the Levenshtein ranker and default config
    pub fn new(catalog: Catalog) -> Self {
        Self::with_ranker(catalog, Arc::new(LevenshteinRanker::new()), MatchConfig::default())
    }

    /// Create engine with a custom ranker and config
    pub fn with_ranker(catalog: Catalog, ranker: Arc<dyn Ranker>, config: MatchConfig) -> Self {
        tracing::debug!(
            "MatchEngine ready: {} songs, ranker={}, {}",
            catalog.len(),
            ranker.name(),
            config
        );
        Self { catalog, ranker, config }
    }

    /// Replace the config
    pub fn with_config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    /// Search with explicit limits
    pub fn search(&self, query: &str, max_results: usize, min_score: f64) -> Vec<ScoredSong> {
        let config = MatchConfig { min_score, ..self.config };
        search_with(self.ranker.as_ref(), &config, query, &self.catalog, max_results)
    }

    /// Search with the configured limits
    pub fn search_default(&self, query: &str) -> Vec<ScoredSong> {
        search_with(
            self.ranker.as_ref(),
            &self.config,
            query,
            &self.catalog,
            self.config.max_results,
        )
    }

    /// Classify a title/artist request
    pub fn validate(&self, title: &str, artist: &str) -> MatchResult {
        validate_with(self.ranker.as_ref(), &self.config, title, artist, &self.catalog)
    }

    /// Case-insensitive title/artist lookup
    pub fn find_exact(&self, title: &str, artist: &str) -> Option<&Song> {
        self.catalog.find_exact(title, artist)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn ranker_name(&self) -> &str {
        self.ranker.name()
    }
}
