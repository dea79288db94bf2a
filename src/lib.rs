//! # DJ Song Matcher
//!
//! Fuzzy matching engine for party-DJ song requests:
//! - Levenshtein similarity with a fixed substring bonus
//! - Stable top-K ranking over title, artist and both combined
//! - Request validation (exact / close / unmatched) with suggestions
//! - Caller-owned autocomplete state with stale-result detection
//! - Multiple interfaces: Rust library, HTTP API, CLI
//!
//! Matching is pure and synchronous; the catalog is injected and never mutated.
//!
//! ## Example Usage
//!
//! ```rust
//! use dj_song_matcher::{Catalog, MatchEngine, MatchKind, providers::DemoProvider};
//!
//! let catalog = Catalog::from_provider(&DemoProvider)?;
//! let engine = MatchEngine::new(catalog);
//!
//! let suggestions = engine.search_default("Bohe");
//! assert_eq!(suggestions[0].song.title, "Bohemian Rhapsody");
//!
//! let result = engine.validate("Music", "Madonna");
//! assert_eq!(result.kind, MatchKind::Exact);
//! # Ok::<(), dj_song_matcher::MatcherError>(())
//! ```

pub mod core;
pub mod ranking;
pub mod catalog;
pub mod providers;
pub mod engine;
pub mod autocomplete;
pub mod config;
pub mod error;

// Re-export primary types
pub use crate::core::{MatchKind, MatchResult, ScoredSong, Song};
pub use ranking::{levenshtein_distance, similarity, LevenshteinRanker, Ranker};
pub use catalog::Catalog;
pub use engine::{search, validate, MatchEngine, DEFAULT_MAX_RESULTS, DEFAULT_MIN_SCORE};
pub use autocomplete::{AutocompleteState, NavKey, NavOutcome, SearchTicket};
pub use config::MatchConfig;
pub use error::{MatcherError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
