//! String similarity for song requests.
//!
//! Scores lie in `[0, 1]`. Identical strings (after lowercasing and trimming)
//! score `1.0`; when one string contains the other the score is pinned to
//! [`SUBSTRING_SCORE`], even where the edit distance would give more. Only
//! true substrings are capped this way, so a near-identical pair that is not
//! a substring can still score above `0.8`.
//!
//! Each comparison is O(N·M) in the string lengths. Ranking a catalog
//! repeats it per song, which is fine for a party playlist and not for a
//! streaming-service catalog.

/// Score returned when one normalized string contains the other
pub const SUBSTRING_SCORE: f64 = 0.8;

#[inline]
fn normalize(text: &str) -> String {
    text.to_lowercase().trim().to_string()
}

/// Levenshtein edit distance (unit cost insert/delete/substitute) over chars
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    // Rows follow `b`, columns follow `a`
    let mut prev_row: Vec<usize> = (0..=a.len()).collect();
    let mut curr_row = vec![0; a.len() + 1];

    for (i, cb) in b.iter().enumerate() {
        curr_row[0] = i + 1;

        for (j, ca) in a.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr_row[j + 1] = (prev_row[j] + cost)
                .min(curr_row[j] + 1)
                .min(prev_row[j + 1] + 1);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[a.len()]
}

/// Similarity of two strings in `[0, 1]`
pub fn similarity(a: &str, b: &str) -> f64 {
    let s1 = normalize(a);
    let s2 = normalize(b);

    if s1 == s2 {
        return 1.0;
    }
    if s1.is_empty() || s2.is_empty() {
        return 0.0;
    }

    if s1.contains(s2.as_str()) || s2.contains(s1.as_str()) {
        return SUBSTRING_SCORE;
    }

    let distance = levenshtein_distance(&s1, &s2);
    let max_len = s1.chars().count().max(s2.chars().count());

    max_len.saturating_sub(distance) as f64 / max_len as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        " ",
        "a",
        "Music",
        "Madonna",
        "Bohemian Rhapsody",
        "bohemian",
        "Sweet Child O' Mine",
        "÷ (Divide)",
        "Ünïcödé",
        "  Hello  ",
        "kitten",
        "sitting",
    ];

    #[test]
    fn test_identity() {
        for s in SAMPLES {
            assert_eq!(similarity(s, s), 1.0, "similarity({s:?}, {s:?})");
        }
    }

    #[test]
    fn test_range() {
        for a in SAMPLES {
            for b in SAMPLES {
                let score = similarity(a, b);
                assert!((0.0..=1.0).contains(&score), "similarity({a:?}, {b:?}) = {score}");
            }
        }
    }

    #[test]
    fn test_empty_strings() {
        assert_eq!(similarity("", "x"), 0.0);
        assert_eq!(similarity("x", ""), 0.0);
        assert_eq!(similarity("", ""), 1.0);
        // whitespace trims to empty
        assert_eq!(similarity("   ", ""), 1.0);
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        assert_eq!(similarity("  HELLO ", "hello"), 1.0);
    }

    #[test]
    fn test_substring_rule() {
        assert_eq!(similarity("Bohemian Rhapsody", "bohemian"), 0.8);
        assert_eq!(similarity("bohemian", "Bohemian Rhapsody"), 0.8);
        // capped even where the edit distance would score higher
        assert_eq!(similarity("Bohemian Rhapsody", "Bohemian Rhapsod"), SUBSTRING_SCORE);
    }

    #[test]
    fn test_levenshtein_score() {
        let score = similarity("kitten", "sitting");
        assert!((score - 4.0 / 7.0).abs() < 1e-12);
        assert!((score - 0.5714).abs() < 1e-4);
    }

    #[test]
    fn test_near_match_not_capped() {
        // one substitution, not a substring
        let score = similarity("Bohemian Rhapsody", "Bohemian Rhapsodu");
        assert!((score - 16.0 / 17.0).abs() < 1e-12);
        assert!(score > SUBSTRING_SCORE);
    }

    #[test]
    fn test_distance_basics() {
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("flaw", "lawn"), 2);
        assert_eq!(levenshtein_distance("héllo", "hello"), 1);
    }

    #[test]
    fn test_distance_matches_rapidfuzz() {
        use rapidfuzz::distance::levenshtein;

        for a in SAMPLES {
            for b in SAMPLES {
                assert_eq!(
                    levenshtein_distance(a, b),
                    levenshtein::distance(a.chars(), b.chars()),
                    "distance({a:?}, {b:?})"
                );
            }
        }
    }
}
