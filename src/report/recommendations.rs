use serde::{Deserialize, Serialize};

use super::tier::RedundancyTier;

/// Ordered action items for each tier. The defaults are English; callers
/// wanting other wording build their own table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    pub high: Vec<String>,
    pub moderate: Vec<String>,
    pub low: Vec<String>,
}

impl Recommendations {
    pub fn new(high: Vec<String>, moderate: Vec<String>, low: Vec<String>) -> Self {
        Self { high, moderate, low }
    }

    pub fn for_tier(&self, tier: RedundancyTier) -> &[String] {
        match tier {
            RedundancyTier::High => &self.high,
            RedundancyTier::Moderate => &self.moderate,
            RedundancyTier::Low => &self.low,
        }
    }
}

impl Default for Recommendations {
    fn default() -> Self {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        Self {
            high: owned(&[
                "Designate one document as the single source of truth",
                "Move all detailed content into that document",
                "Reduce the other document to an overview and a link",
                "Aim for less than 10% content overlap",
            ]),
            moderate: owned(&[
                "Identify which sections are truly duplicated",
                "Decide which document owns each concept",
                "Add cross-references instead of duplicating content",
                "Keep the master document as an overview only",
            ]),
            low: owned(&[
                "No action needed: content distribution looks good",
                "Keep maintaining a clear separation of concerns",
            ]),
        }
    }
}
