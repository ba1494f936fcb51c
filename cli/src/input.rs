use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Everything the line protocol supplies: stop words, documents and one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
    pub stop_words: String,
    pub documents: Vec<String>,
    pub query: String,
}

/// Read the line protocol:
///
/// ```text
/// <stop words>
/// <document count>
/// <document 0>
/// ...
/// <query>
/// ```
///
/// Blank lines before the count are skipped and only its leading integer is
/// read; a negative count means no documents. The count is not trusted:
/// reading documents stops at end of input, and a missing query is empty.
pub fn read_request<R: BufRead>(reader: R) -> Result<Request> {
    let mut lines = reader.lines();
    let mut next_line = || -> Result<Option<String>> {
        match lines.next() {
            Some(line) => {
                let line = line.context("failed to read input line")?;
                Ok(Some(line.strip_suffix('\r').map(str::to_string).unwrap_or(line)))
            }
            None => Ok(None),
        }
    };

    let stop_words = next_line()?.unwrap_or_default();
    let count = loop {
        match next_line()? {
            Some(line) if line.trim().is_empty() => continue,
            Some(line) => {
                break parse_count(&line)
                    .with_context(|| format!("invalid document count: {:?}", line.trim()))?
            }
            None => bail!("missing document count"),
        }
    };

    let mut documents = Vec::new();
    while documents.len() < count {
        match next_line()? {
            Some(line) => documents.push(line),
            None => break,
        }
    }
    let query = next_line()?.unwrap_or_default();
    tracing::debug!(documents = documents.len(), "read request");
    Ok(Request { stop_words, documents, query })
}

/// Leading integer of `line`, with an optional sign; trailing text is ignored.
fn parse_count(line: &str) -> Option<usize> {
    let s = line.trim_start();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    let value: usize = digits[..end].parse().ok()?;
    Some(if negative { 0 } else { value })
}

/// A document record in a JSON or JSONL corpus file.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct InputDoc {
    pub id: Option<String>,
    pub title: Option<String>,
    pub body: String,
}

/// Load documents from a `.json`/`.jsonl` file or every such file under a directory.
///
/// Directory entries are visited in file-name order so document ids are stable.
pub fn load_corpus(input: &Path) -> Result<Vec<InputDoc>> {
    let mut files: Vec<PathBuf> = Vec::new();
    if input.is_dir() {
        for entry in WalkDir::new(input).sort_by_file_name().into_iter().filter_map(|e| e.ok()) {
            let p = entry.path();
            if p.is_file() && matches!(extension(p), Some("json" | "jsonl")) {
                files.push(p.to_path_buf());
            }
        }
    } else if input.is_file() {
        files.push(input.to_path_buf());
    } else {
        bail!("input path {} does not exist", input.display());
    }

    let mut docs = Vec::new();
    for file in files {
        let before = docs.len();
        if extension(&file) == Some("jsonl") {
            load_jsonl(&file, &mut docs)?;
        } else {
            load_json(&file, &mut docs)?;
        }
        tracing::debug!(file = %file.display(), docs = docs.len() - before, "loaded corpus file");
    }
    tracing::info!(num_docs = docs.len(), "loaded corpus");
    Ok(docs)
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|s| s.to_str())
}

fn load_jsonl(file: &Path, docs: &mut Vec<InputDoc>) -> Result<()> {
    let f = File::open(file).with_context(|| format!("failed to open {}", file.display()))?;
    for (line_no, line) in BufReader::new(f).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let doc: InputDoc = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: invalid document", file.display(), line_no + 1))?;
        docs.push(doc);
    }
    Ok(())
}

fn load_json(file: &Path, docs: &mut Vec<InputDoc>) -> Result<()> {
    let f = File::open(file).with_context(|| format!("failed to open {}", file.display()))?;
    let json: serde_json::Value = serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("{}: invalid JSON", file.display()))?;
    match json {
        serde_json::Value::Array(arr) => {
            for v in arr {
                docs.push(serde_json::from_value(v).with_context(|| format!("{}: invalid document", file.display()))?);
            }
        }
        serde_json::Value::Object(_) => {
            docs.push(serde_json::from_value(json).with_context(|| format!("{}: invalid document", file.display()))?);
        }
        _ => tracing::warn!(file = %file.display(), "skipping file without document objects"),
    }
    Ok(())
}
