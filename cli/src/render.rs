use crate::input::InputDoc;
use anyhow::Result;
use clap::ValueEnum;
use search_core::ScoredDocument;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

/// Significant digits used when printing relevance in text mode.
const RELEVANCE_PRECISION: usize = 6;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `{ document_id = .., relevance = .. }` line per result
    #[default]
    Text,
    /// A single JSON object with the ranked hits
    Json,
}

#[derive(Serialize)]
pub struct SearchResponse<'a> {
    pub query: &'a str,
    pub took_s: f64,
    pub results: Vec<SearchHit<'a>>,
}

#[derive(Serialize)]
pub struct SearchHit<'a> {
    #[serde(flatten)]
    pub scored: ScoredDocument,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
}

/// Write ranked results; `docs` supplies external ids and titles when the corpus had them.
pub fn write_results<W: Write>(
    out: &mut W,
    query: &str,
    results: &[ScoredDocument],
    docs: Option<&[InputDoc]>,
    took: Duration,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for doc in results {
                writeln!(
                    out,
                    "{{ document_id = {}, relevance = {} }}",
                    doc.doc_id,
                    format_relevance(doc.relevance)
                )?;
            }
        }
        OutputFormat::Json => {
            let results = results
                .iter()
                .map(|scored| {
                    let meta = docs.and_then(|d| d.get(scored.doc_id as usize));
                    SearchHit {
                        scored: *scored,
                        id: meta.and_then(|m| m.id.as_deref()),
                        title: meta.and_then(|m| m.title.as_deref()),
                    }
                })
                .collect();
            let response = SearchResponse { query, took_s: took.as_secs_f64(), results };
            serde_json::to_writer_pretty(&mut *out, &response)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Render a float with six significant digits, switching to exponent form for
/// very small or large magnitudes, and without trailing zeros (`0.202733`,
/// `1.5`, `0`, `1e-07`).
pub fn format_relevance(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    let scientific = format!("{:.*e}", RELEVANCE_PRECISION - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if exponent < -4 || exponent >= RELEVANCE_PRECISION as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (RELEVANCE_PRECISION as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
