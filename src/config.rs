//! Matcher thresholds and limits.
//!
//! Defaults reproduce the dashboard's tuning. Values can come from a JSON
//! file or from a flat key/value map (e.g. a section of a bigger config),
//! where missing keys fall back to the defaults.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::engine::{DEFAULT_MAX_RESULTS, DEFAULT_MIN_SCORE};
use crate::error::{MatcherError, Result};

/// Matching configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Songs must score strictly above this to be suggested
    pub min_score: f64,

    /// Best suggestion must score strictly above this to count as close match
    pub close_threshold: f64,

    /// Suggestions returned by a plain search
    pub max_results: usize,

    /// Suggestions attached to a validation result
    pub max_suggestions: usize,

    /// Queries shorter than this (after trimming) return nothing
    pub min_query_chars: usize,

    /// Quiet window for callers debouncing keystrokes
    pub debounce_ms: u64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            close_threshold: 0.8,
            max_results: DEFAULT_MAX_RESULTS,
            max_suggestions: 3,
            min_query_chars: 2,
            debounce_ms: 300,
        }
    }
}

impl MatchConfig {
    /// Build from a flat key/value map; missing keys keep their default
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use dj_song_matcher::MatchConfig;
    ///
    /// let mut values = HashMap::new();
    /// values.insert("min_score".to_string(), 0.5);
    ///
    /// let config = MatchConfig::from_config(&values);
    /// assert_eq!(config.min_score, 0.5);
    /// assert_eq!(config.close_threshold, 0.8);
    /// ```
    pub fn from_config(config: &HashMap<String, f64>) -> Self {
        let defaults = Self::default();
        let count = |key: &str, default: usize| {
            config.get(key).map_or(default, |v| v.max(0.0) as usize)
        };

        Self {
            min_score: config.get("min_score").copied().unwrap_or(defaults.min_score),
            close_threshold: config
                .get("close_threshold")
                .copied()
                .unwrap_or(defaults.close_threshold),
            max_results: count("max_results", defaults.max_results),
            max_suggestions: count("max_suggestions", defaults.max_suggestions),
            min_query_chars: count("min_query_chars", defaults.min_query_chars),
            debounce_ms: config
                .get("debounce_ms")
                .map_or(defaults.debounce_ms, |v| v.max(0.0) as u64),
        }
    }

    /// Read a JSON config file and validate it
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check thresholds lie in `[0, 1]` and limits are usable
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("min_score", self.min_score), ("close_threshold", self.close_threshold)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(MatcherError::InvalidConfig(format!(
                    "{} must be within [0, 1], got {}",
                    name, value
                )));
            }
        }
        if self.max_results == 0 {
            return Err(MatcherError::InvalidConfig("max_results must be at least 1".to_string()));
        }
        if self.max_suggestions == 0 {
            return Err(MatcherError::InvalidConfig("max_suggestions must be at least 1".to_string()));
        }
        Ok(())
    }
}

impl std::fmt::Display for MatchConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "min_score={}, close_threshold={}, max_results={}, max_suggestions={}, min_query_chars={}, debounce={}ms",
            self.min_score,
            self.close_threshold,
            self.max_results,
            self.max_suggestions,
            self.min_query_chars,
            self.debounce_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = MatchConfig::default();
        assert_eq!(config.min_score, 0.3);
        assert_eq!(config.close_threshold, 0.8);
        assert_eq!(config.max_results, 5);
        assert_eq!(config.max_suggestions, 3);
        assert_eq!(config.min_query_chars, 2);
        assert_eq!(config.debounce_ms, 300);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_config_partial() {
        let mut values = HashMap::new();
        values.insert("max_results".to_string(), 10.0);
        values.insert("debounce_ms".to_string(), 150.0);

        let config = MatchConfig::from_config(&values);
        assert_eq!(config.max_results, 10);
        assert_eq!(config.debounce_ms, 150);
        assert_eq!(config.min_score, 0.3); // default
    }

    #[test]
    fn test_from_config_empty() {
        let config = MatchConfig::from_config(&HashMap::new());
        assert_eq!(config, MatchConfig::default());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let config = MatchConfig {
            close_threshold: 1.5,
            ..MatchConfig::default()
        };
        assert!(matches!(config.validate(), Err(MatcherError::InvalidConfig(_))));

        let config = MatchConfig {
            max_results: 0,
            ..MatchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserialize_partial_json() {
        let config: MatchConfig = serde_json::from_str(r#"{"min_score": 0.4}"#).unwrap();
        assert_eq!(config.min_score, 0.4);
        assert_eq!(config.max_results, 5);
    }

    #[test]
    fn test_display() {
        let display = MatchConfig::default().to_string();
        assert_eq!(
            display,
            "min_score=0.3, close_threshold=0.8, max_results=5, max_suggestions=3, min_query_chars=2, debounce=300ms"
        );
    }
}
