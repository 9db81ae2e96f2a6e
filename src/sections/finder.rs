use tracing::{debug, trace};

use crate::audit::AuditConfig;
use crate::document::Document;
use crate::sections::window::{window_count, windows, Window};
use crate::similarity::{SequenceRatioScorer, SimilarityScorer};
use crate::types::{AuditError, ScanMetadata, SectionMatch, SectionScan};

/// Brute-force sliding-window comparison of two documents.
///
/// Every source window is scored against every target window. Nothing is
/// pruned and overlapping hits are not merged: a long duplicated block
/// shows up once per shifted window position.
pub struct DuplicateSectionFinder<S> {
    scorer: S,
}

impl Default for DuplicateSectionFinder<SequenceRatioScorer> {
    fn default() -> Self {
        Self {
            scorer: SequenceRatioScorer,
        }
    }
}

impl<S> DuplicateSectionFinder<S>
where
    S: SimilarityScorer,
{
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Matches between `source` and `target` scoring strictly above
    /// `threshold`, ordered by source line then target line.
    pub fn find_matches(
        &self,
        source: &Document,
        target: &Document,
        min_length: usize,
        threshold: f32,
    ) -> Result<Vec<SectionMatch>, AuditError> {
        let config = AuditConfig::v0()
            .with_min_length(min_length)
            .with_threshold(threshold);

        Ok(self.scan(source, target, &config)?.matches)
    }

    pub fn scan(
        &self,
        source: &Document,
        target: &Document,
        config: &AuditConfig,
    ) -> Result<SectionScan, AuditError> {
        config.validate()?;

        let source_windows = window_count(source.line_count(), config.min_length);
        let rows = match config.max_rows {
            Some(cap) => source_windows.min(cap),
            None => source_windows,
        };

        // Target windows are joined once and reused for every row.
        let target_windows: Vec<Window<'_>> = windows(target, config.min_length).collect();

        debug!(
            source_doc = source.label().as_str(),
            target_doc = target.label().as_str(),
            min_length = config.min_length,
            threshold = config.threshold,
            source_windows,
            target_windows = target_windows.len(),
            rows,
            "Scanning for duplicate sections"
        );

        let mut matches = Vec::new();
        let mut window_pairs_compared = 0;

        // 1. Rows in source order, columns in target order; the emitted
        //    order is the iteration order. Rows past the cap are never joined.
        for source_window in windows(source, config.min_length).take(rows) {
            for target_window in &target_windows {
                let similarity = self.scorer.score(&source_window.text, &target_window.text);
                window_pairs_compared += 1;

                if similarity > config.threshold {
                    trace!(
                        source_line = source_window.start + 1,
                        target_line = target_window.start + 1,
                        similarity,
                        "Section match"
                    );
                    matches.push(SectionMatch {
                        source_line_start: source_window.start + 1,
                        target_line_start: target_window.start + 1,
                        similarity,
                        preview: source_window.preview(config.preview_chars),
                    });
                }
            }
        }

        debug_assert!(matches.windows(2).all(|w| {
            let a = &w[0];
            let b = &w[1];
            a.source_line_start < b.source_line_start
                || (a.source_line_start == b.source_line_start
                    && a.target_line_start < b.target_line_start)
        }));

        let truncated = rows < source_windows;
        if truncated {
            debug!(rows, source_windows, "Row cap reached, scan truncated");
        }

        debug!(matches = matches.len(), window_pairs_compared, "Section scan finished");

        Ok(SectionScan {
            matches,
            metadata: ScanMetadata {
                min_length: config.min_length,
                threshold: config.threshold,
                source_windows,
                target_windows: target_windows.len(),
                rows_scanned: rows,
                window_pairs_compared,
                truncated,
            },
        })
    }
}
