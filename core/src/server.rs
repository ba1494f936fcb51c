use crate::config::SearchConfig;
use crate::index::InvertedIndex;
use crate::query::Query;
use crate::ranking::{find_top_documents, ScoredDocument};
use crate::stop_words::StopWords;
use crate::tokenizer::tokenize;
use crate::{DocId, Result};

/// Build phase: stop words are fixed up front, documents are added one by one.
///
/// Calling [`build`](SearchServerBuilder::build) ends the build phase; the
/// resulting [`SearchServer`] exposes no way to add documents.
#[derive(Debug)]
pub struct SearchServerBuilder {
    stop_words: StopWords,
    max_results: usize,
    index: InvertedIndex,
    next_doc_id: DocId,
}

impl Default for SearchServerBuilder {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl SearchServerBuilder {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            stop_words: StopWords::new(config.stop_words),
            max_results: config.max_results,
            index: InvertedIndex::new(),
            next_doc_id: 0,
        }
    }

    /// Add more stop words; only affects documents added afterwards, so call it first.
    pub fn with_stop_words(mut self, stop_words: StopWords) -> Self {
        self.stop_words.merge(stop_words);
        self
    }

    /// Index `text` under the next sequential id and return that id.
    pub fn add_document(&mut self, text: &str) -> Result<DocId> {
        let doc_id = self.next_doc_id;
        self.add_document_with_id(doc_id, text)?;
        Ok(doc_id)
    }

    /// Index `text` under an explicit id, which must not have been used yet.
    pub fn add_document_with_id(&mut self, doc_id: DocId, text: &str) -> Result<()> {
        let words = self.stop_words.filter(tokenize(text));
        self.index.add_document(doc_id, &words)?;
        self.next_doc_id = self.next_doc_id.max(doc_id.saturating_add(1));
        Ok(())
    }

    pub fn build(self) -> SearchServer {
        tracing::info!(
            num_docs = self.index.document_count(),
            num_terms = self.index.term_count(),
            stop_words = self.stop_words.len(),
            "search index built"
        );
        SearchServer {
            stop_words: self.stop_words,
            max_results: self.max_results,
            index: self.index,
        }
    }
}

/// Query phase: an immutable index plus the stop words it was built with.
#[derive(Debug, Clone)]
pub struct SearchServer {
    stop_words: StopWords,
    max_results: usize,
    index: InvertedIndex,
}

impl SearchServer {
    pub fn builder(config: SearchConfig) -> SearchServerBuilder {
        SearchServerBuilder::new(config)
    }

    /// Build a server from documents whose ids follow their position.
    pub fn from_documents<I, S>(config: SearchConfig, documents: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut builder = Self::builder(config);
        for document in documents {
            builder.add_document(document.as_ref())?;
        }
        Ok(builder.build())
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn document_count(&self) -> usize {
        self.index.document_count()
    }

    /// Tokenize, filter and parse a raw query line.
    pub fn parse_query(&self, raw_query: &str) -> Query {
        Query::parse(self.stop_words.filter(tokenize(raw_query)))
    }

    /// Top documents for `raw_query`, capped at the configured maximum.
    pub fn find_top_documents(&self, raw_query: &str) -> Vec<ScoredDocument> {
        self.find_top_documents_limit(raw_query, self.max_results)
    }

    pub fn find_top_documents_limit(&self, raw_query: &str, k: usize) -> Vec<ScoredDocument> {
        let query = self.parse_query(raw_query);
        tracing::debug!(
            plus = query.plus_terms.len(),
            minus = query.minus_terms.len(),
            k,
            "searching"
        );
        if query.is_empty() {
            return Vec::new();
        }
        find_top_documents(&query, &self.index, k)
    }
}
