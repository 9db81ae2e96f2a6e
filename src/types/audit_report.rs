use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::report::RedundancyTier;
use crate::types::identifiers::{DocumentLabel, DocumentVersion};

/// A window of the source document that closely matches a window of the
/// target document. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionMatch {
    pub source_line_start: usize,
    pub target_line_start: usize,
    pub similarity: f32,
    /// Leading characters of the first line of the source window.
    pub preview: String,
}

/// Identity and size of one compared document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub label: DocumentLabel,
    pub version: DocumentVersion,
    pub line_count: usize,
    pub char_count: usize,
}

impl DocumentSummary {
    pub fn of(doc: &Document) -> Self {
        Self {
            label: doc.label().clone(),
            version: doc.version().clone(),
            line_count: doc.line_count(),
            char_count: doc.char_count(),
        }
    }
}

/// How the section scan was parameterized and how much of it ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanMetadata {
    pub min_length: usize,
    pub threshold: f32,

    pub source_windows: usize,
    pub target_windows: usize,

    pub rows_scanned: usize,
    pub window_pairs_compared: usize,

    /// True when a row cap stopped the scan before the last source window.
    pub truncated: bool,
}

/// Output of a section scan: ordered matches plus the scan bookkeeping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionScan {
    pub matches: Vec<SectionMatch>,
    pub metadata: ScanMetadata,
}

/// The final result of auditing one pair of documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditReport {
    pub source: DocumentSummary,
    pub target: DocumentSummary,

    pub overall_similarity: f32,
    pub tier: RedundancyTier,
    pub recommendation: Vec<String>,

    pub matches: Vec<SectionMatch>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan: Option<ScanMetadata>,
}

impl AuditReport {
    /// The first `k` matches in discovery order.
    pub fn top_matches(&self, k: usize) -> &[SectionMatch] {
        &self.matches[..k.min(self.matches.len())]
    }

    pub fn has_duplicates(&self) -> bool {
        !self.matches.is_empty()
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AuditError {
    #[error("Invalid window length: {0} (must be at least 1 line)")]
    InvalidMinLength(usize),

    #[error("Invalid similarity threshold: {0} (must be within [0.0, 1.0])")]
    InvalidThreshold(f32),

    #[error("Invalid row cap: {0} (must be at least 1 row)")]
    InvalidRowCap(usize),
}
