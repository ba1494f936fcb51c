use crate::config::MINUS_PREFIX;
use std::collections::BTreeSet;

/// A parsed query: words that score documents and words that exclude them.
///
/// Both sets are ordered so that scoring walks terms in a fixed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub plus_terms: BTreeSet<String>,
    pub minus_terms: BTreeSet<String>,
}

impl Query {
    /// Parse stop-word filtered query tokens.
    ///
    /// `-word` excludes `word`. A lone `-` carries no term and is dropped.
    pub fn parse<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut query = Query::default();
        for token in tokens {
            let token = token.as_ref();
            match token.strip_prefix(MINUS_PREFIX) {
                Some("") => {}
                Some(excluded) => {
                    query.minus_terms.insert(excluded.to_string());
                }
                None => {
                    query.plus_terms.insert(token.to_string());
                }
            }
        }
        query
    }

    pub fn is_empty(&self) -> bool {
        self.plus_terms.is_empty() && self.minus_terms.is_empty()
    }

    /// Plus terms that contribute to relevance, i.e. not also excluded.
    pub fn scoring_terms(&self) -> impl Iterator<Item = &str> {
        self.plus_terms
            .difference(&self.minus_terms)
            .map(String::as_str)
    }

    /// Minus terms that veto documents, i.e. not also required.
    pub fn veto_terms(&self) -> impl Iterator<Item = &str> {
        self.minus_terms
            .difference(&self.plus_terms)
            .map(String::as_str)
    }
}
