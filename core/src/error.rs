use crate::DocId;
use thiserror::Error;

/// Errors raised while building an index.
///
/// Querying never fails: unknown terms, empty corpora and malformed query
/// fragments all produce empty or partial results instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Document id {0} has already been indexed")]
    DuplicateDocumentId(DocId),
}

pub type Result<T> = std::result::Result<T, SearchError>;
