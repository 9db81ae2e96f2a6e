use thiserror::Error;

use crate::types::identifiers::{DocumentLabel, DocumentVersion};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Content must be valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// One side of a comparison: plain text held both as a flat string and as
/// lines split on `\n`.
///
/// Both views are fixed at construction and the fields are read-only, so
/// the version always identifies the lines that get scanned. Every
/// constructor goes through `from_text`.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    label: DocumentLabel,
    version: DocumentVersion,
    content: String,
    lines: Vec<String>,
}

impl Document {
    /// Build a Document from already-normalized plain text.
    ///
    /// The text is split on line-feed only. A trailing newline produces a
    /// trailing empty line; an empty text produces no lines at all.
    pub fn from_text(label: impl Into<DocumentLabel>, content: impl Into<String>) -> Self {
        let content = content.into();
        let lines = split_lines(&content);
        let version = DocumentVersion::from_content(content.as_bytes());

        Document {
            label: label.into(),
            version,
            content,
            lines,
        }
    }

    /// Build a Document from pre-split lines.
    ///
    /// The lines are joined with `\n` and split again, so the result equals
    /// `from_text` of the joined text: an item holding `\n` becomes several
    /// lines, and a lone empty item is an empty document.
    pub fn from_lines<I, L>(label: impl Into<DocumentLabel>, lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        Self::from_text(label, lines.join("\n"))
    }

    /// Ingest raw bytes, rejecting anything that is not UTF-8.
    pub fn ingest(label: impl Into<DocumentLabel>, raw_content: Vec<u8>) -> Result<Self, DocumentError> {
        let content = String::from_utf8(raw_content)?;
        Ok(Self::from_text(label, content))
    }

    pub fn label(&self) -> &DocumentLabel {
        &self.label
    }

    pub fn version(&self) -> &DocumentVersion {
        &self.version
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Length in Unicode scalar values, the unit the similarity ratio counts.
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

fn split_lines(content: &str) -> Vec<String> {
    if content.is_empty() {
        return Vec::new();
    }
    content.split('\n').map(str::to_string).collect()
}
