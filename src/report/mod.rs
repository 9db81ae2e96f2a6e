pub mod recommendations;
pub mod tier;

use tracing::debug;

use crate::document::Document;
use crate::types::{AuditReport, DocumentSummary, SectionMatch};
pub use recommendations::Recommendations;
pub use tier::RedundancyTier;

/// Turns scores into a report. Pure: no I/O, no state beyond the
/// recommendation table it was built with.
#[derive(Debug, Clone, Default)]
pub struct AuditReporter {
    recommendations: Recommendations,
}

impl AuditReporter {
    pub fn new(recommendations: Recommendations) -> Self {
        Self { recommendations }
    }

    pub fn recommendations(&self) -> &Recommendations {
        &self.recommendations
    }

    pub fn build_report(
        &self,
        source: &Document,
        target: &Document,
        overall_similarity: f32,
        matches: Vec<SectionMatch>,
    ) -> AuditReport {
        debug_assert!(
            (0.0..=1.0).contains(&overall_similarity),
            "overall similarity {overall_similarity} out of range [0.0, 1.0]"
        );

        let tier = RedundancyTier::classify(overall_similarity);
        debug!(
            overall_similarity,
            tier = tier.as_str(),
            matches = matches.len(),
            "Classified redundancy"
        );

        AuditReport {
            source: DocumentSummary::of(source),
            target: DocumentSummary::of(target),
            overall_similarity,
            tier,
            recommendation: self.recommendations.for_tier(tier).to_vec(),
            matches,
            scan: None,
        }
    }
}
