use crate::index::InvertedIndex;
use crate::query::Query;
use crate::DocId;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

/// A matched document and its TF-IDF relevance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredDocument {
    pub doc_id: DocId,
    pub relevance: f64,
}

/// Inverse document frequency `ln(N / df)`, or `None` when no document has the term.
fn inverse_document_frequency(index: &InvertedIndex, document_freq: usize) -> Option<f64> {
    if document_freq == 0 {
        return None;
    }
    Some((index.document_count() as f64 / document_freq as f64).ln())
}

/// Rank documents of `index` against `query` and keep at most `k` of them.
///
/// Relevance is the sum over scoring terms of `tf * idf`. Documents containing
/// any veto term are dropped after scoring. Ties on relevance are broken by
/// ascending document id.
pub fn find_top_documents(query: &Query, index: &InvertedIndex, k: usize) -> Vec<ScoredDocument> {
    if index.document_count() == 0 {
        return Vec::new();
    }

    // Terms come out of the query in sorted order, which keeps the sums bit-identical between runs.
    let mut scores: BTreeMap<DocId, f64> = BTreeMap::new();
    for term in query.scoring_terms() {
        let postings = index.postings_for(term);
        let Some(idf) = inverse_document_frequency(index, postings.len()) else {
            continue;
        };
        for (&doc_id, &tf) in postings {
            *scores.entry(doc_id).or_insert(0.0) += tf * idf;
        }
    }

    let vetoed: BTreeSet<DocId> = query
        .veto_terms()
        .flat_map(|term| index.postings_for(term).keys().copied())
        .collect();

    let mut matched: Vec<ScoredDocument> = scores
        .into_iter()
        .filter(|(doc_id, _)| !vetoed.contains(doc_id))
        .map(|(doc_id, relevance)| ScoredDocument { doc_id, relevance })
        .collect();
    let total_hits = matched.len();

    matched.sort_by(compare_ranked);
    matched.truncate(k);
    tracing::debug!(total_hits, vetoed = vetoed.len(), returned = matched.len(), "ranked query");
    matched
}

fn compare_ranked(a: &ScoredDocument, b: &ScoredDocument) -> Ordering {
    b.relevance
        .total_cmp(&a.relevance)
        .then_with(|| a.doc_id.cmp(&b.doc_id))
}
