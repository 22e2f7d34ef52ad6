//! Generic weighted keyword-table scorer.
//!
//! Every analyzer in the pipeline is a scan of normalized input against
//! a keyword table; this module holds the one copy of that scan.
//! Matching is case-insensitive literal substring containment, not
//! word-boundary matching ("cat" matches inside "category"). That
//! looseness is load-bearing for output compatibility; do not tighten
//! it here.

/// Keywords from `keywords` that occur as substrings of `input`.
/// `input` is expected to already be lowercased.
pub fn matched_keywords<'a>(input: &str, keywords: &'a [String]) -> Vec<&'a str> {
    keywords
        .iter()
        .filter(|kw| !kw.is_empty() && input.contains(kw.to_lowercase().as_str()))
        .map(|kw| kw.as_str())
        .collect()
}

pub fn hit_count(input: &str, keywords: &[String]) -> usize {
    matched_keywords(input, keywords).len()
}

/// Confidence for a table with `hits` of `table_len` keywords matched,
/// scaled by `weight` and clamped to [0, 1]. A table with no keywords
/// never scores: the divisor is guarded, not assumed.
pub fn weighted_score(hits: usize, table_len: usize, weight: f32) -> f32 {
    if table_len == 0 || hits == 0 {
        return 0.0;
    }
    ((hits as f32) * weight / (table_len as f32)).min(1.0)
}

/// First-match-wins lookup over labeled tables: the first table with at
/// least one hit names the result. Used by the context annotators, where
/// a coarse hint beats a ranked competition.
pub fn first_match_label<'a>(
    input: &str,
    tables: &'a [(String, Vec<String>)],
) -> Option<&'a str> {
    tables
        .iter()
        .find(|(_, keywords)| hit_count(input, keywords) > 0)
        .map(|(label, _)| label.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(w: &[&str]) -> Vec<String> {
        w.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_substring_semantics() {
        // "sad" matches inside "sadness" by design.
        let table = words(&["sad", "grief"]);
        let matched = matched_keywords("drowning in sadness", &table);
        assert_eq!(matched, vec!["sad"]);
    }

    #[test]
    fn test_empty_table_never_scores() {
        assert_eq!(weighted_score(0, 0, 1.0), 0.0);
        assert_eq!(weighted_score(3, 0, 1.0), 0.0);
    }

    #[test]
    fn test_weighted_score_clamped() {
        assert!(weighted_score(10, 2, 3.0) <= 1.0);
        assert!(weighted_score(1, 10, 2.0) > 0.0);
    }

    #[test]
    fn test_first_match_wins_order() {
        let tables = vec![
            ("first".to_string(), words(&["alpha"])),
            ("second".to_string(), words(&["alpha", "beta"])),
        ];
        // Both tables hit; the first one wins.
        assert_eq!(first_match_label("alpha beta", &tables), Some("first"));
        assert_eq!(first_match_label("beta", &tables), Some("second"));
        assert_eq!(first_match_label("gamma", &tables), None);
    }
}
