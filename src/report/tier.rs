use serde::{Deserialize, Serialize};

/// Coarse classification of overall similarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RedundancyTier {
    High,
    Moderate,
    Low,
}

impl RedundancyTier {
    /// Scores strictly above this are HIGH.
    pub const HIGH_ABOVE: f32 = 0.7;
    /// Scores strictly above this (and not HIGH) are MODERATE.
    pub const MODERATE_ABOVE: f32 = 0.4;

    pub fn classify(overall_similarity: f32) -> Self {
        if overall_similarity > Self::HIGH_ABOVE {
            RedundancyTier::High
        } else if overall_similarity > Self::MODERATE_ABOVE {
            RedundancyTier::Moderate
        } else {
            RedundancyTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RedundancyTier::High => "HIGH",
            RedundancyTier::Moderate => "MODERATE",
            RedundancyTier::Low => "LOW",
        }
    }

    pub fn headline(&self) -> &'static str {
        match self {
            RedundancyTier::High => "HIGH REDUNDANCY DETECTED (>70% overlap)",
            RedundancyTier::Moderate => "MODERATE REDUNDANCY (40-70% overlap)",
            RedundancyTier::Low => "LOW REDUNDANCY (<40% overlap)",
        }
    }

    /// Does the tier call for consolidating the two documents?
    pub fn needs_action(&self) -> bool {
        !matches!(self, RedundancyTier::Low)
    }
}

impl std::fmt::Display for RedundancyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
