//! Filter matching over recognized regions
//!
//! Matching is lenient on purpose: the searched term may have been split
//! across adjacent OCR fragments, or sit inside a longer recognized string,
//! so a region matches when any filter word is a case-insensitive substring
//! of the region's text.

use crate::recognize::TextRegion;

/// A parsed filter query: the raw filter text split into lowercased words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    words: Vec<String>,
}

impl FilterQuery {
    /// Split the filter on Unicode whitespace, newlines included.
    ///
    /// Whitespace-only input parses to an empty query, identical to an empty
    /// filter.
    pub fn parse(raw: &str) -> Self {
        Self {
            words: raw
                .split_whitespace()
                .map(|word| word.to_lowercase())
                .collect(),
        }
    }

    /// An empty query matches nothing; callers render everything
    /// unsuppressed.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// True when any query word occurs within `text`, ignoring case.
    pub fn matches(&self, text: &str) -> bool {
        if self.words.is_empty() {
            return false;
        }
        let haystack = text.to_lowercase();
        self.words.iter().any(|word| haystack.contains(word.as_str()))
    }
}

/// Select the regions whose recognized text matches the query.
pub fn match_regions(regions: &[TextRegion], query: &FilterQuery) -> Vec<TextRegion> {
    regions
        .iter()
        .filter(|region| query.matches(&region.text))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;

    fn region(text: &str) -> TextRegion {
        TextRegion {
            text: text.to_string(),
            rect: Rect::new(0.0, 0.0, 10.0, 10.0),
            confidence: 1.0,
        }
    }

    #[test]
    fn test_word_is_substring_of_region_text() {
        let query = FilterQuery::parse("score");
        assert!(query.matches("Highscore: 9000"));
        assert!(!query.matches("lives: 3"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let query = FilterQuery::parse("HELLO");
        assert!(query.matches("hello world"));

        let query = FilterQuery::parse("hello");
        assert!(query.matches("Hello World"));
    }

    #[test]
    fn test_any_word_suffices() {
        let query = FilterQuery::parse("ammo health");
        assert!(query.matches("health bar"));
        assert!(query.matches("ammo count"));
        assert!(!query.matches("minimap"));
    }

    #[test]
    fn test_region_need_not_equal_the_word() {
        // The region may contain a longer string that includes the term.
        let query = FilterQuery::parse("at");
        assert!(query.matches("Saturday"));
    }

    #[test]
    fn test_empty_filter_matches_nothing() {
        let query = FilterQuery::parse("");
        assert!(query.is_empty());
        assert!(!query.matches("anything at all"));
    }

    #[test]
    fn test_whitespace_only_filter_is_empty() {
        let query = FilterQuery::parse("  \t \n  ");
        assert!(query.is_empty());
        assert!(!query.matches("anything"));
    }

    #[test]
    fn test_newlines_split_words() {
        let query = FilterQuery::parse("one\ntwo");
        assert_eq!(query.words(), &["one".to_string(), "two".to_string()]);
    }

    #[test]
    fn test_match_regions_keeps_order() {
        let regions = vec![region("alpha"), region("beta"), region("alphabet")];
        let matched = match_regions(&regions, &FilterQuery::parse("alpha"));

        let texts: Vec<_> = matched.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["alpha", "alphabet"]);
    }

    #[test]
    fn test_match_regions_empty_query_selects_none() {
        let regions = vec![region("alpha"), region("beta")];
        assert!(match_regions(&regions, &FilterQuery::parse(" ")).is_empty());
    }
}
