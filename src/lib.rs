//! Deterministic duplicate-content audit for pairs of text documents.
//!
//! `overlap-core` scores two documents as whole texts, scans them with a
//! sliding line window for near-duplicate sections, and classifies the pair
//! into a redundancy tier with recommended actions. It does no I/O: callers
//! hand in plain text and receive a serializable [`types::AuditReport`].
//! Identical inputs always produce identical reports.

pub mod audit;
pub mod document;
pub mod report;
pub mod sections;
pub mod similarity;
pub mod types;

pub use audit::{audit_documents, AuditConfig, Auditor};
