//! Local aligner orchestration: fill, maximum lookup, traceback
//!
//! [`LocalAligner`] ties one matrix layout to a sequence pair and a scoring
//! scheme. `align()` runs the three phases (recurrence, maximum lookup,
//! traceback) and returns an owned [`Alignment`] record, so results can be
//! read (and the aligner re-run) without any hidden state.
//!
//! # Example
//!
//! ```
//! use skewalign::alignment::{LocalAligner, MatrixLayout};
//!
//! let aligner = LocalAligner::new(b"GGTTGACTA", b"TGTTACGG")
//!     .layout(MatrixLayout::Skewed);
//! let alignment = aligner.align();
//!
//! assert_eq!(alignment.score, 13.0);
//! assert_eq!(alignment.pos, 2);
//! assert_eq!(alignment.consensus_x, "CAGTTG");
//! assert_eq!(alignment.consensus_y, "CA-TTG");
//! ```

use std::time::{Duration, Instant};

use super::matrix::{DenseMatrix, MatrixLayout, SimilarityMatrix};
use super::scoring::ScoringScheme;
use super::skewed::SkewedMatrix;

/// Gap marker emitted into consensus strings
pub const GAP: u8 = b'-';

/// Wall-clock durations of the three phases of one alignment
///
/// Diagnostic only; no correctness property depends on these.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhaseTimings {
    /// Matrix fill (the full DP recurrence)
    pub fill: Duration,
    /// Maximum lookup
    pub maximum: Duration,
    /// Traceback
    pub traceback: Duration,
}

impl PhaseTimings {
    /// Sum of all phases
    pub fn total(&self) -> Duration {
        self.fill + self.maximum + self.traceback
    }
}

/// Result of one local alignment
///
/// `consensus_x` and `consensus_y` are equal-length gapped strings over the
/// sequence alphabet plus [`GAP`], emitted in traceback order (from the
/// maximum cell back toward the start of the alignment). A score of 0 means
/// no positive-scoring local alignment exists; both consensus strings are
/// then empty, which is a well-defined answer rather than an error.
#[derive(Debug, Clone)]
pub struct Alignment {
    /// The maximum cell value
    pub score: f64,
    /// True (DP-space) index of the maximum cell
    pub max_index: (usize, usize),
    /// 1-based start of the aligned region within `sequence_y`
    pub pos: usize,
    /// Gapped rendition of the aligned region of `sequence_x`
    pub consensus_x: String,
    /// Gapped rendition of the aligned region of `sequence_y`
    pub consensus_y: String,
    /// Per-phase wall-clock durations
    pub timings: PhaseTimings,
}

/// Smith-Waterman local aligner over a selectable matrix layout
///
/// Borrows both sequences; construction is cheap and all allocation happens
/// inside [`LocalAligner::align`], which builds one matrix, computes it
/// fully, and discards it after traceback.
#[derive(Debug, Clone)]
pub struct LocalAligner<'a> {
    sequence_x: &'a [u8],
    sequence_y: &'a [u8],
    scoring: ScoringScheme,
    layout: MatrixLayout,
}

impl<'a> LocalAligner<'a> {
    /// Aligner with the default scoring scheme and the dense layout
    pub fn new(sequence_x: &'a [u8], sequence_y: &'a [u8]) -> Self {
        Self::with_scoring(sequence_x, sequence_y, ScoringScheme::default())
    }

    /// Aligner with an explicit scoring scheme
    pub fn with_scoring(
        sequence_x: &'a [u8],
        sequence_y: &'a [u8],
        scoring: ScoringScheme,
    ) -> Self {
        Self {
            sequence_x,
            sequence_y,
            scoring,
            layout: MatrixLayout::default(),
        }
    }

    /// Select the matrix layout
    pub fn layout(mut self, layout: MatrixLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Run the full alignment: fill, maximum lookup, traceback
    pub fn align(&self) -> Alignment {
        match self.layout {
            MatrixLayout::Dense => {
                self.align_with(DenseMatrix::new(self.sequence_x, self.sequence_y))
            }
            MatrixLayout::Skewed => {
                self.align_with(SkewedMatrix::new(self.sequence_x, self.sequence_y))
            }
        }
    }

    fn align_with<M: SimilarityMatrix>(&self, mut matrix: M) -> Alignment {
        let started = Instant::now();
        matrix.fill(&self.scoring);
        let fill = started.elapsed();

        let started = Instant::now();
        let (max_i, max_j, score) = matrix.find_maximum();
        let maximum = started.elapsed();

        let started = Instant::now();
        let (consensus_x, consensus_y, pos) = self.traceback(&matrix, max_i, max_j);
        let traceback = started.elapsed();

        Alignment {
            score,
            max_index: (max_i, max_j),
            pos,
            consensus_x,
            consensus_y,
            timings: PhaseTimings {
                fill,
                maximum,
                traceback,
            },
        }
    }

    /// Walk predecessors from the maximum cell until a zero cell
    ///
    /// Predecessor priority on ties is diagonal, then west, then north.
    /// Each term is recomputed with the same operations the fill used, so
    /// the comparisons are exact. Returns the consensus pair and the
    /// 1-based start of the alignment in `sequence_y`.
    fn traceback<M: SimilarityMatrix>(
        &self,
        matrix: &M,
        mut i: usize,
        mut j: usize,
    ) -> (String, String, usize) {
        let mut consensus_x = Vec::new();
        let mut consensus_y = Vec::new();
        let gap_penalty = self.scoring.gap_penalty;

        // Any positive cell has i, j >= 1, so the symbol lookups below
        // never underflow; boundary cells are 0 and end the walk.
        loop {
            let current = matrix.get(i, j);
            if current == 0.0 {
                break;
            }
            let a = self.sequence_x[i - 1];
            let b = self.sequence_y[j - 1];
            if current == matrix.get(i - 1, j - 1) + self.scoring.score(a, b) {
                consensus_x.push(a);
                consensus_y.push(b);
                i -= 1;
                j -= 1;
            } else if current == matrix.get(i, j - 1) - gap_penalty {
                consensus_x.push(GAP);
                consensus_y.push(b);
                j -= 1;
            } else {
                debug_assert_eq!(current, matrix.get(i - 1, j) - gap_penalty);
                consensus_x.push(a);
                consensus_y.push(GAP);
                i -= 1;
            }
        }

        (
            String::from_utf8_lossy(&consensus_x).into_owned(),
            String::from_utf8_lossy(&consensus_y).into_owned(),
            j + 1,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_example_dense() {
        // The classic Smith-Waterman worked example; every value here is a
        // pinned regression expectation.
        let alignment = LocalAligner::new(b"GGTTGACTA", b"TGTTACGG").align();
        assert_eq!(alignment.score, 13.0);
        assert_eq!(alignment.pos, 2);
        assert_eq!(alignment.max_index, (7, 6));
        assert_eq!(alignment.consensus_x, "CAGTTG");
        assert_eq!(alignment.consensus_y, "CA-TTG");
    }

    #[test]
    fn test_canonical_example_skewed() {
        let alignment = LocalAligner::new(b"GGTTGACTA", b"TGTTACGG")
            .layout(MatrixLayout::Skewed)
            .align();
        assert_eq!(alignment.score, 13.0);
        assert_eq!(alignment.pos, 2);
        assert_eq!(alignment.max_index, (7, 6));
        assert_eq!(alignment.consensus_x, "CAGTTG");
        assert_eq!(alignment.consensus_y, "CA-TTG");
    }

    #[test]
    fn test_consensus_strings_have_equal_length() {
        let alignment = LocalAligner::new(b"GATTACA", b"CTGACGCTA").align();
        assert_eq!(alignment.consensus_x.len(), alignment.consensus_y.len());
    }

    #[test]
    fn test_rerun_is_deterministic() {
        let aligner = LocalAligner::new(b"GGTTGACTA", b"TGTTACGG");
        let first = aligner.align();
        let second = aligner.align();
        assert_eq!(first.score, second.score);
        assert_eq!(first.pos, second.pos);
        assert_eq!(first.max_index, second.max_index);
        assert_eq!(first.consensus_x, second.consensus_x);
        assert_eq!(first.consensus_y, second.consensus_y);
    }

    #[test]
    fn test_no_positive_alignment() {
        let alignment = LocalAligner::new(b"AAAA", b"TTTT").align();
        assert_eq!(alignment.score, 0.0);
        assert_eq!(alignment.max_index, (0, 0));
        assert_eq!(alignment.pos, 1);
        assert_eq!(alignment.consensus_x, "");
        assert_eq!(alignment.consensus_y, "");
    }

    #[test]
    fn test_empty_sequences() {
        for (x, y) in [
            (b"".as_slice(), b"ACGT".as_slice()),
            (b"ACGT".as_slice(), b"".as_slice()),
            (b"".as_slice(), b"".as_slice()),
        ] {
            let alignment = LocalAligner::new(x, y).align();
            assert_eq!(alignment.score, 0.0);
            assert_eq!(alignment.consensus_x, "");
            assert_eq!(alignment.consensus_y, "");
        }
    }

    #[test]
    fn test_injected_scoring_matches_builtin() {
        let builtin = LocalAligner::new(b"GGTTGACTA", b"TGTTACGG").align();
        let injected = LocalAligner::with_scoring(
            b"GGTTGACTA",
            b"TGTTACGG",
            ScoringScheme::with_fn(|a, b| if a == b { 3.0 } else { -3.0 }, 2.0),
        )
        .align();
        assert_eq!(builtin.score, injected.score);
        assert_eq!(builtin.pos, injected.pos);
        assert_eq!(builtin.consensus_x, injected.consensus_x);
        assert_eq!(builtin.consensus_y, injected.consensus_y);
    }

    #[test]
    fn test_gap_free_scoring_prefers_longer_match() {
        // With a zero gap penalty the aligner may bridge the mismatch
        // region; score must still come out non-negative and consistent
        // across layouts.
        let scoring = ScoringScheme::new(2.0, -1.0, 0.0);
        let dense = LocalAligner::with_scoring(b"ACGTTT", b"ACGAAATTT", scoring.clone()).align();
        let skewed = LocalAligner::with_scoring(b"ACGTTT", b"ACGAAATTT", scoring)
            .layout(MatrixLayout::Skewed)
            .align();
        assert_eq!(dense.score, skewed.score);
        assert_eq!(dense.consensus_x, skewed.consensus_x);
        assert_eq!(dense.consensus_y, skewed.consensus_y);
    }

    #[test]
    fn test_timings_total_is_sum_of_phases() {
        let alignment = LocalAligner::new(b"GGTTGACTA", b"TGTTACGG").align();
        let timings = alignment.timings;
        assert_eq!(
            timings.total(),
            timings.fill + timings.maximum + timings.traceback
        );
    }
}
