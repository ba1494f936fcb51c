//! Input and output around the search engine: the line protocol on stdin,
//! JSON corpora on disk and result rendering.

pub mod input;
pub mod render;

use anyhow::{Context, Result};
use render::OutputFormat;
use search_core::{SearchConfig, SearchServer, StopWords};
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;
use std::time::Instant;

/// Environment variable consulted for the result cap when `--k` is not given.
pub const MAX_RESULTS_ENV: &str = "SEARCH_MAX_RESULTS";

/// Load a JSON [`SearchConfig`]; missing fields and a missing path fall back to defaults.
pub fn load_config(path: Option<&Path>) -> Result<SearchConfig> {
    let Some(path) = path else {
        return Ok(SearchConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: SearchConfig = serde_json::from_str(&text)
        .with_context(|| format!("{}: invalid config", path.display()))?;
    tracing::debug!(path = %path.display(), max_results = config.max_results, "loaded config");
    Ok(config)
}

/// Resolve the result cap: explicit flag, then environment, then the config value.
pub fn resolve_max_results(k: Option<usize>, config: &SearchConfig) -> Result<usize> {
    if let Some(k) = k {
        return Ok(k);
    }
    match std::env::var(MAX_RESULTS_ENV) {
        Ok(val) => val
            .trim()
            .parse()
            .with_context(|| format!("{MAX_RESULTS_ENV} must be a non-negative integer, got {val:?}")),
        Err(_) => Ok(config.max_results),
    }
}

/// Index `documents` with the configured stop words plus those in `stop_words_line`.
fn build_server<I, S>(config: SearchConfig, stop_words_line: &str, documents: I) -> Result<SearchServer>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut builder = SearchServer::builder(config).with_stop_words(StopWords::from_text(stop_words_line));
    for document in documents {
        builder.add_document(document.as_ref())?;
    }
    let server = builder.build();
    tracing::debug!(num_docs = server.document_count(), "server ready");
    Ok(server)
}

/// Answer one line-protocol request read from `reader`.
pub fn run_protocol<R: BufRead, W: Write>(
    reader: R,
    out: &mut W,
    config: SearchConfig,
    format: OutputFormat,
) -> Result<()> {
    let request = input::read_request(reader)?;
    let start = Instant::now();
    let server = build_server(config, &request.stop_words, &request.documents)?;
    let results = server.find_top_documents(&request.query);
    render::write_results(out, &request.query, &results, None, start.elapsed(), format)
}

/// Search a JSON/JSONL corpus at `input` for `query`.
pub fn run_query<W: Write>(
    input: &Path,
    query: &str,
    stop_words: &str,
    config: SearchConfig,
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let docs = input::load_corpus(input)?;
    let start = Instant::now();
    let server = build_server(config, stop_words, docs.iter().map(|d| d.body.as_str()))?;
    let results = server.find_top_documents(query);
    render::write_results(out, query, &results, Some(docs.as_slice()), start.elapsed(), format)
}
