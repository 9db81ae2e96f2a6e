use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::SectionMatch;

/// A run of matches on the same diagonal (same target-minus-source offset)
/// with consecutive source starts, reported as one block of lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSpan {
    pub source_line_start: usize,
    pub target_line_start: usize,
    /// Lines covered on each side: `window_count - 1 + min_length`.
    pub line_count: usize,
    pub window_count: usize,
    pub peak_similarity: f32,
    pub preview: String,
}

/// Merge overlapping window matches into spans.
///
/// `matches` must be in the finder's order (source-major). Spans are
/// returned in the order their first window was discovered.
pub fn collapse_overlapping(matches: &[SectionMatch], min_length: usize) -> Vec<SectionSpan> {
    let mut spans: Vec<SectionSpan> = Vec::new();
    // diagonal offset -> index of the span that may still grow on it
    let mut open: BTreeMap<i64, usize> = BTreeMap::new();

    for m in matches {
        let offset = m.target_line_start as i64 - m.source_line_start as i64;

        let extends = open.get(&offset).copied().filter(|&idx| {
            let span = &spans[idx];
            span.source_line_start + span.window_count == m.source_line_start
        });

        match extends {
            Some(idx) => {
                let span = &mut spans[idx];
                span.window_count += 1;
                span.line_count += 1;
                if m.similarity > span.peak_similarity {
                    span.peak_similarity = m.similarity;
                }
            }
            None => {
                open.insert(offset, spans.len());
                spans.push(SectionSpan {
                    source_line_start: m.source_line_start,
                    target_line_start: m.target_line_start,
                    line_count: min_length,
                    window_count: 1,
                    peak_similarity: m.similarity,
                    preview: m.preview.clone(),
                });
            }
        }
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(source: usize, target: usize, similarity: f32) -> SectionMatch {
        SectionMatch {
            source_line_start: source,
            target_line_start: target,
            similarity,
            preview: format!("line {source}"),
        }
    }

    #[test]
    fn diagonal_run_becomes_one_span() {
        let matches = vec![hit(1, 4, 0.9), hit(2, 5, 1.0), hit(3, 6, 0.85)];
        let spans = collapse_overlapping(&matches, 5);

        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].source_line_start, 1);
        assert_eq!(spans[0].target_line_start, 4);
        assert_eq!(spans[0].window_count, 3);
        assert_eq!(spans[0].line_count, 7);
        assert_eq!(spans[0].peak_similarity, 1.0);
        assert_eq!(spans[0].preview, "line 1");
    }

    #[test]
    fn gap_on_a_diagonal_starts_a_new_span() {
        let matches = vec![hit(1, 1, 0.9), hit(3, 3, 0.9)];
        let spans = collapse_overlapping(&matches, 5);
        assert_eq!(spans.len(), 2);
    }

    #[test]
    fn different_diagonals_stay_separate_and_ordered() {
        let matches = vec![hit(1, 1, 0.9), hit(1, 8, 0.95), hit(2, 2, 0.9), hit(2, 9, 0.95)];
        let spans = collapse_overlapping(&matches, 5);

        assert_eq!(spans.len(), 2);
        assert_eq!((spans[0].source_line_start, spans[0].target_line_start), (1, 1));
        assert_eq!((spans[1].source_line_start, spans[1].target_line_start), (1, 8));
        assert!(spans.iter().all(|s| s.window_count == 2));
    }

    #[test]
    fn no_matches_no_spans() {
        assert!(collapse_overlapping(&[], 5).is_empty());
    }
}
