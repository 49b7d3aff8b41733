//! Fuzzy matching used for "did you mean" hints.
//!
//! When a command names a contact that does not exist, or uses a keyword that
//! is not a command, the assistant suggests the closest known candidate. Scores
//! combine substring containment and Levenshtein similarity on a 0-100 scale.

/// A candidate together with how closely it matched the query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// The candidate text as stored
    pub candidate: String,

    /// Confidence score (0-100, where 100 is an exact normalized match)
    pub confidence: u8,
}

/// Fuzzy matcher over plain string candidates.
#[derive(Debug, Clone, Copy)]
pub struct NameMatcher {
    min_confidence: u8,
}

impl NameMatcher {
    /// Default minimum confidence for a suggestion to be offered.
    pub const DEFAULT_MIN_CONFIDENCE: u8 = 50;

    pub fn new(min_confidence: u8) -> Self {
        Self {
            min_confidence: min_confidence.min(100),
        }
    }

    /// Rank `candidates` against `query`, best first, dropping weak matches.
    ///
    /// Ties are broken alphabetically so results are deterministic.
    pub fn rank<'a, I>(&self, query: &str, candidates: I) -> Vec<Suggestion>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let query = Self::normalize(query);

        let mut results: Vec<Suggestion> = candidates
            .into_iter()
            .filter_map(|candidate| {
                let confidence = Self::score(&query, &Self::normalize(candidate));
                (confidence >= self.min_confidence && confidence > 0).then(|| Suggestion {
                    candidate: candidate.to_string(),
                    confidence,
                })
            })
            .collect();

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.candidate.cmp(&b.candidate))
        });

        results
    }

    /// The single best candidate for `query`, if any clears the threshold.
    pub fn best<'a, I>(&self, query: &str, candidates: I) -> Option<Suggestion>
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.rank(query, candidates).into_iter().next()
    }

    /// Normalize text for comparison.
    ///
    /// Converts to lowercase and collapses whitespace.
    pub fn normalize(text: &str) -> String {
        text.trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Similarity score for two normalized strings.
    ///
    /// 100 for equality, 60-95 for substring containment, otherwise Levenshtein
    /// similarity scaled to 0-85 (0 when more than half the characters differ).
    fn score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 100;
        }

        let query_len = query.chars().count();
        let target_len = target.chars().count();

        if target.contains(query) {
            let ratio = query_len as f64 / target_len as f64;
            return (35.0 * ratio + 60.0) as u8;
        }

        if query.contains(target) {
            let ratio = target_len as f64 / query_len as f64;
            return (35.0 * ratio + 60.0) as u8;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query_len.max(target_len);

        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();

        if s1_chars.is_empty() {
            return s2_chars.len();
        }
        if s2_chars.is_empty() {
            return s1_chars.len();
        }

        // Single rolling row instead of the full matrix
        let mut previous: Vec<usize> = (0..=s2_chars.len()).collect();
        let mut current = vec![0; s2_chars.len() + 1];

        for (i, c1) in s1_chars.iter().enumerate() {
            current[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = usize::from(c1 != c2);
                current[j + 1] = (previous[j + 1] + 1)
                    .min(current[j] + 1)
                    .min(previous[j] + cost);
            }
            std::mem::swap(&mut previous, &mut current);
        }

        previous[s2_chars.len()]
    }
}

impl Default for NameMatcher {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_CONFIDENCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(NameMatcher::normalize("  John   DOE "), "john doe");
    }

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(NameMatcher::levenshtein_distance("kitten", "sitting"), 3);
        assert_eq!(NameMatcher::levenshtein_distance("", "abc"), 3);
        assert_eq!(NameMatcher::levenshtein_distance("abc", "abc"), 0);
        assert_eq!(NameMatcher::levenshtein_distance("flaw", "lawn"), 2);
    }

    #[test]
    fn test_exact_case_insensitive_match_scores_100() {
        let matcher = NameMatcher::default();
        let best = matcher.best("ALICE", ["alice", "bob"]).unwrap();
        assert_eq!(best.candidate, "alice");
        assert_eq!(best.confidence, 100);
    }

    #[test]
    fn test_typo_suggests_closest() {
        let matcher = NameMatcher::default();
        let best = matcher.best("alcie", ["alice", "bob", "carol"]).unwrap();
        assert_eq!(best.candidate, "alice");
    }

    #[test]
    fn test_substring_match() {
        let matcher = NameMatcher::default();
        let best = matcher.best("birthday", ["add-birthday", "birthdays"]).unwrap();
        assert_eq!(best.candidate, "birthdays");
    }

    #[test]
    fn test_unrelated_query_has_no_suggestion() {
        let matcher = NameMatcher::default();
        assert!(matcher.best("zzz", ["alice", "bob"]).is_none());
        assert!(matcher.best("", ["alice"]).is_none());
    }

    #[test]
    fn test_rank_orders_by_confidence_then_name() {
        let matcher = NameMatcher::new(0);
        let ranked = matcher.rank("jon", ["john", "jon", "joan"]);
        assert_eq!(ranked[0].candidate, "jon");
        assert_eq!(ranked[1].candidate, "joan");
        assert_eq!(ranked[2].candidate, "john");
    }
}
