pub mod audit_report;
pub mod identifiers;

pub use audit_report::{
    AuditError, AuditReport, DocumentSummary, ScanMetadata, SectionMatch, SectionScan,
};
pub use identifiers::{DocumentLabel, DocumentVersion};
