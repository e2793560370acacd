//! Embedding file ingestion.
//!
//! Input is plain text, one record per line: an identifier followed by the
//! vector components, separated by arbitrary whitespace. Blank lines are
//! skipped. Vector lengths are not compared here; that happens when the
//! records are stacked into an [`EmbeddingMatrix`](crate::EmbeddingMatrix).

use crate::error::{Result, StockvizError};
use crate::tracing::prefix;
use std::path::Path;
use tracing::{debug, error, info};

/// One identifier and its embedding vector.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddingRecord {
    pub identifier: String,
    pub vector: Vec<f64>,
    /// 1-based line number in the source text
    pub line: usize,
}

impl EmbeddingRecord {
    pub fn dimensions(&self) -> usize {
        self.vector.len()
    }
}

/// Records in input line order. Duplicate identifiers are kept as separate records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmbeddingSet {
    records: Vec<EmbeddingRecord>,
}

impl EmbeddingSet {
    pub fn new(records: Vec<EmbeddingRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[EmbeddingRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &EmbeddingRecord> {
        self.records.iter()
    }

    pub fn identifiers(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.identifier.as_str()).collect()
    }

    pub fn into_records(self) -> Vec<EmbeddingRecord> {
        self.records
    }
}

/// Parse a single line. Returns `Ok(None)` for blank lines.
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<EmbeddingRecord>> {
    let mut tokens = line.split_whitespace();
    let identifier = match tokens.next() {
        Some(id) => id.to_string(),
        None => return Ok(None),
    };

    let vector = tokens
        .map(|token| parse_component(line_no, token))
        .collect::<Result<Vec<f64>>>()?;

    if vector.is_empty() {
        return Err(StockvizError::Parse {
            line: line_no,
            token: identifier,
            reason: "identifier has no vector components".to_string(),
        });
    }

    Ok(Some(EmbeddingRecord {
        identifier,
        vector,
        line: line_no,
    }))
}

fn parse_component(line_no: usize, token: &str) -> Result<f64> {
    let value: f64 = token.parse().map_err(|e| StockvizError::Parse {
        line: line_no,
        token: token.to_string(),
        reason: format!("not a number: {}", e),
    })?;

    if !value.is_finite() {
        return Err(StockvizError::Parse {
            line: line_no,
            token: token.to_string(),
            reason: "value is not finite".to_string(),
        });
    }

    Ok(value)
}

/// Parse a whole embedding text into records, in line order.
pub fn parse_embeddings(text: &str) -> Result<EmbeddingSet> {
    let mut records = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        if let Some(record) = parse_line(idx + 1, line)? {
            debug!(
                "line {}: {} ({} dims)",
                record.line,
                record.identifier,
                record.dimensions()
            );
            records.push(record);
        }
    }
    Ok(EmbeddingSet::new(records))
}

/// Read `path` completely, then parse it.
pub fn load_embeddings(path: impl AsRef<Path>) -> Result<EmbeddingSet> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| {
        error!("{} failed to read {}: {}", prefix::LOAD, path.display(), e);
        StockvizError::from_io(path, e)
    })?;

    let set = parse_embeddings(&text).inspect_err(|e| {
        error!("{} {}: {}", prefix::LOAD, path.display(), e);
    })?;

    info!(
        "{} loaded {} records from {} (dims: {})",
        prefix::LOAD,
        set.len(),
        path.display(),
        set.records()
            .first()
            .map_or(0, EmbeddingRecord::dimensions)
    );
    Ok(set)
}
