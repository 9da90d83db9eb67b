//! Smith-Waterman local alignment over dense and skewed DP matrices
//!
//! This module provides the core alignment engine: two interchangeable DP
//! matrix layouts behind one capability trait, the serial aligner that
//! drives recurrence, maximum lookup, and traceback, and a piecewise
//! parallel driver for long second sequences.
//!
//! # Core Components
//!
//! ## Matrix layouts
//! - [`DenseMatrix`]: the conventional `(len_x+1) × (len_y+1)` table,
//!   filled along anti-diagonal wavefronts
//! - [`SkewedMatrix`]: the same cells remapped so each anti-diagonal is one
//!   contiguous column run, for the locality of the traversal order the
//!   recurrence actually uses
//!
//! ## Aligners
//! - [`LocalAligner`]: one matrix, one sequence pair, full
//!   fill/maximum/traceback pipeline
//! - [`ParallelLocalAligner`]: overlapping pieces of `sequence_y` aligned
//!   concurrently and reduced to one global result
//!
//! # Examples
//!
//! ## Basic alignment
//! ```
//! use skewalign::alignment::LocalAligner;
//!
//! let alignment = LocalAligner::new(b"GGTTGACTA", b"TGTTACGG").align();
//! assert_eq!(alignment.score, 13.0);
//! assert_eq!(alignment.consensus_x, "CAGTTG");
//! assert_eq!(alignment.consensus_y, "CA-TTG");
//! ```
//!
//! ## Parallel alignment of a long sequence
//! ```
//! use skewalign::alignment::{MatrixLayout, ParallelLocalAligner};
//!
//! let y = b"CCCCCCCCCCCCCCCCCCCCGGTTGACCCC";
//! let result = ParallelLocalAligner::new(b"GGTTGAC", y, 3)
//!     .layout(MatrixLayout::Skewed)
//!     .align()?;
//! assert_eq!(result.alignment.score, 21.0);
//! # Ok::<(), skewalign::SkewalignError>(())
//! ```

pub mod aligner;
pub mod matrix;
pub mod parallel;
pub mod scoring;
pub mod skewed;

// Re-export public API
pub use aligner::{Alignment, LocalAligner, PhaseTimings, GAP};
pub use matrix::{DenseMatrix, MatrixLayout, SimilarityMatrix};
pub use parallel::{ParallelAlignment, ParallelLocalAligner, DEFAULT_OVERLAP_RATIO};
pub use scoring::{
    ScoringFn, ScoringScheme, DEFAULT_GAP_PENALTY, DEFAULT_MATCH_SCORE, DEFAULT_MISMATCH_SCORE,
};
pub use skewed::SkewedMatrix;
