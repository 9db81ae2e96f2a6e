pub mod config;

use tracing::debug;

use crate::document::Document;
use crate::report::{AuditReporter, Recommendations};
use crate::sections::DuplicateSectionFinder;
use crate::similarity::{SequenceRatioScorer, SimilarityScorer};
use crate::types::{AuditError, AuditReport};
pub use config::AuditConfig;

/// Runs the full comparison: whole-text score, section scan, report.
pub struct Auditor<S> {
    config: AuditConfig,
    finder: DuplicateSectionFinder<S>,
    reporter: AuditReporter,
}

impl Auditor<SequenceRatioScorer> {
    pub fn new(config: AuditConfig) -> Result<Self, AuditError> {
        Self::with_parts(config, SequenceRatioScorer, AuditReporter::default())
    }
}

impl<S> Auditor<S>
where
    S: SimilarityScorer,
{
    pub fn with_parts(
        config: AuditConfig,
        scorer: S,
        reporter: AuditReporter,
    ) -> Result<Self, AuditError> {
        config.validate()?;
        Ok(Self {
            config,
            finder: DuplicateSectionFinder::new(scorer),
            reporter,
        })
    }

    pub fn with_recommendations(mut self, recommendations: Recommendations) -> Self {
        self.reporter = AuditReporter::new(recommendations);
        self
    }

    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Score, scan and classify one pair of documents.
    ///
    /// The whole-text score is an unbounded Myers alignment, O((N + M) * D) in
    /// characters: cheap for similar pages, but several seconds for tens of
    /// thousands of characters of unrelated text. Split or pre-filter very
    /// large pages before auditing them.
    pub fn audit(&self, source: &Document, target: &Document) -> Result<AuditReport, AuditError> {
        // 1. Global overlap
        let overall = self.finder.scorer().score(source.content(), target.content());
        debug!(
            source_doc = source.label().as_str(),
            target_doc = target.label().as_str(),
            overall,
            "Scored whole documents"
        );

        // 2. Local duplication
        let scan = self.finder.scan(source, target, &self.config)?;

        // 3. Classification
        let mut report = self
            .reporter
            .build_report(source, target, overall, scan.matches);
        report.scan = Some(scan.metadata);

        Ok(report)
    }
}

/// Audit two documents with the default scorer, report wording and
/// [`AuditConfig::v0`] parameters.
pub fn audit_documents(source: &Document, target: &Document) -> Result<AuditReport, AuditError> {
    Auditor::new(AuditConfig::v0())?.audit(source, target)
}
