//! In-memory TF-IDF search over a small corpus of short text documents.
//!
//! Documents are split on spaces, stripped of stop words and folded into an
//! [`InvertedIndex`]. Queries are parsed into required and excluded terms and
//! ranked by [`find_top_documents`].

pub mod config;
pub mod error;
pub mod index;
pub mod query;
pub mod ranking;
pub mod server;
pub mod stop_words;
pub mod tokenizer;

pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use index::InvertedIndex;
pub use query::Query;
pub use ranking::{find_top_documents, ScoredDocument};
pub use server::{SearchServer, SearchServerBuilder};
pub use stop_words::StopWords;

pub type DocId = u32;
pub type TermFrequency = f64;
