//! Defaults and runtime configuration for the search engine.

use serde::Deserialize;

/// Maximum number of documents returned by a query unless configured otherwise.
pub const MAX_RESULT_DOCUMENT_COUNT: usize = 5;

/// Prefix marking a query word as an excluded (minus) term.
pub const MINUS_PREFIX: char = '-';

/// Settings fixed before the first document is indexed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Upper bound on the number of ranked documents a query returns.
    pub max_results: usize,
    /// Words dropped from every document and query.
    pub stop_words: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_results: MAX_RESULT_DOCUMENT_COUNT,
            stop_words: Vec::new(),
        }
    }
}

impl SearchConfig {
    pub fn with_max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stop_words = words.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.max_results, 5);
        assert!(config.stop_words.is_empty());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: SearchConfig = serde_json::from_str(r#"{ "stop_words": ["in", "the"] }"#).unwrap();
        assert_eq!(config.max_results, MAX_RESULT_DOCUMENT_COUNT);
        assert_eq!(config.stop_words, vec!["in", "the"]);
    }
}
