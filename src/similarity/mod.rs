//! Character-level similarity ratio between two blocks of text.

use similar::{Algorithm, DiffOp, TextDiff};

/// Matched and total character counts behind a similarity ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alignment {
    pub matched_chars: usize,
    pub total_chars: usize,
}

impl Alignment {
    /// `2 * matched / total`, with two empty texts defined as identical.
    pub fn ratio(&self) -> f32 {
        let ratio = if self.total_chars == 0 {
            1.0
        } else {
            (2 * self.matched_chars) as f32 / self.total_chars as f32
        };
        debug_assert!((0.0..=1.0).contains(&ratio), "ratio {ratio} out of range [0.0, 1.0]");
        ratio
    }
}

pub trait SimilarityScorer {
    fn align(&self, a: &str, b: &str) -> Alignment;

    fn score(&self, a: &str, b: &str) -> f32 {
        self.align(a, b).ratio()
    }
}

/// Ratio over a minimal Myers edit script of the two character sequences.
///
/// The edit script is minimal, so the equal runs add up to the longest
/// common subsequence and `score(a, b) == score(b, a)` exactly. Cost is
/// O((N + M) * D) where D is the edit distance: near-linear for similar
/// inputs, quadratic for unrelated ones.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequenceRatioScorer;

impl SimilarityScorer for SequenceRatioScorer {
    fn align(&self, a: &str, b: &str) -> Alignment {
        if a == b {
            let len = a.chars().count();
            return Alignment {
                matched_chars: len,
                total_chars: 2 * len,
            };
        }

        let diff = TextDiff::configure()
            .algorithm(Algorithm::Myers)
            .diff_chars(a, b);

        let matched_chars = diff
            .ops()
            .iter()
            .map(|op| match *op {
                DiffOp::Equal { len, .. } => len,
                _ => 0,
            })
            .sum();

        Alignment {
            matched_chars,
            total_chars: a.chars().count() + b.chars().count(),
        }
    }
}
