use crate::{DocId, Result, SearchError, TermFrequency};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Postings of a single term: document id → term frequency, ordered by id.
pub type Postings = BTreeMap<DocId, TermFrequency>;

static NO_POSTINGS: Postings = BTreeMap::new();

/// Term → postings map over stop-word filtered documents.
///
/// Term frequencies are normalized by document length, so the frequencies of
/// one non-empty document always sum to 1.0. Documents are only ever added.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    postings: HashMap<String, Postings>,
    documents: BTreeSet<DocId>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index an already filtered document under `doc_id`.
    ///
    /// An empty token list still counts as a document; it just has no postings.
    pub fn add_document(&mut self, doc_id: DocId, tokens: &[String]) -> Result<()> {
        if !self.documents.insert(doc_id) {
            return Err(SearchError::DuplicateDocumentId(doc_id));
        }
        if tokens.is_empty() {
            tracing::debug!(doc_id, "indexed empty document");
            return Ok(());
        }

        let mut counts: HashMap<&str, u32> = HashMap::new();
        for token in tokens {
            *counts.entry(token.as_str()).or_insert(0) += 1;
        }
        let len = tokens.len() as f64;
        for (term, count) in counts {
            self.postings
                .entry(term.to_string())
                .or_default()
                .insert(doc_id, count as f64 / len);
        }
        tracing::debug!(doc_id, tokens = tokens.len(), "indexed document");
        Ok(())
    }

    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Number of distinct terms with at least one posting.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Postings for `term`; empty when no document contains it.
    pub fn postings_for(&self, term: &str) -> &Postings {
        self.postings.get(term).unwrap_or(&NO_POSTINGS)
    }
}
