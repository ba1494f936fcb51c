use crate::tokenizer::tokenize;
use std::collections::HashSet;

/// Immutable set of words removed from documents and queries before indexing.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Build the set from a single line of space separated words.
    pub fn from_text(text: &str) -> Self {
        Self::new(tokenize(text))
    }

    /// Add every word of `other` to this set.
    pub fn merge(&mut self, other: StopWords) {
        self.words.extend(other.words);
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Keep every token that is not a stop word, preserving order.
    pub fn filter(&self, tokens: Vec<String>) -> Vec<String> {
        if self.words.is_empty() {
            return tokens;
        }
        tokens
            .into_iter()
            .filter(|token| !self.contains(token))
            .collect()
    }
}
