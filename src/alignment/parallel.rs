//! Piecewise parallel local alignment
//!
//! # Algorithm
//!
//! [`ParallelLocalAligner`] trades memory and total work for wall-clock
//! time: `sequence_y` is partitioned into `npiece` contiguous ranges, each
//! extended on both sides by an overlap margin, and one [`LocalAligner`]
//! runs per piece on the rayon worker pool. Pieces share nothing but
//! read-only borrows of the two input sequences; every piece owns its
//! matrix buffer exclusively, so no synchronization is needed until the
//! join before the reduction.
//!
//! The margin is `ceil(overlap_ratio × len(sequence_x))` symbols, where
//! `overlap_ratio` is the assumed maximum `len(consensus_x)` relative to
//! `len(sequence_x)`. An alignment spanning a naive split point is only
//! found if some extended piece contains it whole, so the margin must be at
//! least the longest plausible alignment length. It is a correctness
//! tuning knob, not a cosmetic one.
//!
//! The reduction is associative and commutative over piece results: the
//! global score is the maximum piece score, with ties broken by the lowest
//! piece index so results are deterministic regardless of completion order.

use rayon::prelude::*;

use crate::error::{Result, SkewalignError};

use super::aligner::{Alignment, LocalAligner, PhaseTimings};
use super::matrix::MatrixLayout;
use super::scoring::ScoringScheme;

/// Default assumed maximum consensus length relative to `sequence_x`
pub const DEFAULT_OVERLAP_RATIO: f64 = 1.0;

/// One extended sub-range of `sequence_y`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Piece {
    index: usize,
    start: usize,
    end: usize,
}

/// Result of a piecewise parallel alignment
#[derive(Debug, Clone)]
pub struct ParallelAlignment {
    /// The winning piece's alignment, with `pos` and `max_index` shifted
    /// back into coordinates of the original `sequence_y`
    pub alignment: Alignment,
    /// Index of the winning piece
    pub piece: usize,
    /// Per-piece phase timings, in piece order
    pub piece_timings: Vec<PhaseTimings>,
}

/// Concurrent Smith-Waterman over overlapping pieces of `sequence_y`
#[derive(Debug, Clone)]
pub struct ParallelLocalAligner<'a> {
    sequence_x: &'a [u8],
    sequence_y: &'a [u8],
    scoring: ScoringScheme,
    layout: MatrixLayout,
    npiece: usize,
    overlap_ratio: f64,
}

impl<'a> ParallelLocalAligner<'a> {
    /// Aligner with the default scoring scheme, layout, and overlap ratio
    pub fn new(sequence_x: &'a [u8], sequence_y: &'a [u8], npiece: usize) -> Self {
        Self::with_scoring(sequence_x, sequence_y, npiece, ScoringScheme::default())
    }

    /// Aligner with an explicit scoring scheme
    pub fn with_scoring(
        sequence_x: &'a [u8],
        sequence_y: &'a [u8],
        npiece: usize,
        scoring: ScoringScheme,
    ) -> Self {
        Self {
            sequence_x,
            sequence_y,
            scoring,
            layout: MatrixLayout::default(),
            npiece,
            overlap_ratio: DEFAULT_OVERLAP_RATIO,
        }
    }

    /// Select the matrix layout used by every piece
    pub fn layout(mut self, layout: MatrixLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Override the overlap ratio
    pub fn overlap_ratio(mut self, overlap_ratio: f64) -> Self {
        self.overlap_ratio = overlap_ratio;
        self
    }

    /// Validate the configuration and compute the extended piece ranges
    ///
    /// Fails fast, before any matrix is built, on a zero piece count, a
    /// non-positive overlap ratio, or a partition with an empty piece
    /// (which is how an empty `sequence_y` surfaces here).
    fn partition(&self) -> Result<Vec<Piece>> {
        if self.npiece == 0 {
            return Err(SkewalignError::InvalidPieceCount {
                npiece: self.npiece,
            });
        }
        if !(self.overlap_ratio > 0.0) {
            return Err(SkewalignError::InvalidOverlapRatio {
                overlap_ratio: self.overlap_ratio,
            });
        }

        let len_y = self.sequence_y.len();
        let step = len_y.div_ceil(self.npiece);
        let margin = (self.overlap_ratio * self.sequence_x.len() as f64).ceil() as usize;

        let mut pieces = Vec::with_capacity(self.npiece);
        for index in 0..self.npiece {
            let base_start = index * step;
            let base_end = ((index + 1) * step).min(len_y);
            if base_start >= base_end {
                return Err(SkewalignError::EmptyPiece {
                    piece: index,
                    npiece: self.npiece,
                    len_y,
                });
            }
            pieces.push(Piece {
                index,
                start: base_start.saturating_sub(margin),
                end: (base_end + margin).min(len_y),
            });
        }
        Ok(pieces)
    }

    /// Align every piece concurrently and reduce to one global result
    pub fn align(&self) -> Result<ParallelAlignment> {
        let pieces = self.partition()?;

        let results: Vec<(Piece, Alignment)> = pieces
            .into_par_iter()
            .map(|piece| {
                let alignment = LocalAligner::with_scoring(
                    self.sequence_x,
                    &self.sequence_y[piece.start..piece.end],
                    self.scoring.clone(),
                )
                .layout(self.layout)
                .align();
                (piece, alignment)
            })
            .collect();

        let piece_timings = results
            .iter()
            .map(|(_, alignment)| alignment.timings)
            .collect();

        // Strict comparison keeps the earlier piece on ties; collect()
        // preserved piece order, so the lowest index wins.
        let (piece, mut alignment) = results
            .into_iter()
            .reduce(|best, candidate| {
                if candidate.1.score > best.1.score {
                    candidate
                } else {
                    best
                }
            })
            .ok_or(SkewalignError::InvalidPieceCount { npiece: 0 })?;

        alignment.pos += piece.start;
        alignment.max_index.1 += piece.start;

        Ok(ParallelAlignment {
            alignment,
            piece: piece.index,
            piece_timings,
        })
    }
}
