use serde::{Deserialize, Serialize};

use crate::types::AuditError;

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Window length in lines.
    pub min_length: usize,
    /// A window pair is reported only when its score is strictly above this.
    pub threshold: f32,
    /// Characters of the source window's first line kept as the preview.
    pub preview_chars: usize,
    /// Scan at most this many source windows. `None` scans all of them.
    #[serde(default)]
    pub max_rows: Option<usize>,
}

impl AuditConfig {
    pub const DEFAULT_MIN_LENGTH: usize = 5;
    pub const DEFAULT_THRESHOLD: f32 = 0.8;
    pub const DEFAULT_PREVIEW_CHARS: usize = 100;

    pub fn v0() -> Self {
        Self {
            min_length: Self::DEFAULT_MIN_LENGTH,
            threshold: Self::DEFAULT_THRESHOLD,
            preview_chars: Self::DEFAULT_PREVIEW_CHARS,
            max_rows: None,
        }
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_preview_chars(mut self, preview_chars: usize) -> Self {
        self.preview_chars = preview_chars;
        self
    }

    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = Some(max_rows);
        self
    }

    /// Reject parameters outside the engine's domain. Nothing is clamped.
    pub fn validate(&self) -> Result<(), AuditError> {
        if self.min_length == 0 {
            return Err(AuditError::InvalidMinLength(self.min_length));
        }
        // NaN fails this check as well.
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(AuditError::InvalidThreshold(self.threshold));
        }
        if self.max_rows == Some(0) {
            return Err(AuditError::InvalidRowCap(0));
        }
        Ok(())
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self::v0()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn v0_is_valid() {
        assert_eq!(AuditConfig::v0().validate(), Ok(()));
    }

    #[test]
    fn zero_window_is_rejected() {
        let config = AuditConfig::v0().with_min_length(0);
        assert_eq!(config.validate(), Err(AuditError::InvalidMinLength(0)));
    }

    #[test]
    fn threshold_bounds_are_inclusive() {
        assert!(AuditConfig::v0().with_threshold(0.0).validate().is_ok());
        assert!(AuditConfig::v0().with_threshold(1.0).validate().is_ok());
        assert!(AuditConfig::v0().with_threshold(1.01).validate().is_err());
        assert!(AuditConfig::v0().with_threshold(-0.1).validate().is_err());
        assert!(AuditConfig::v0().with_threshold(f32::NAN).validate().is_err());
    }

    #[test]
    fn zero_row_cap_is_rejected() {
        let config = AuditConfig::v0().with_max_rows(0);
        assert_eq!(config.validate(), Err(AuditError::InvalidRowCap(0)));
    }
}
