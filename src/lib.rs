//! # skewalign
//!
//! Smith-Waterman local sequence alignment with two interchangeable DP
//! matrix layouts and a piecewise parallel driver.
//!
//! The recurrence runs over anti-diagonal wavefronts. The dense layout
//! stores the DP table conventionally; the skewed layout stores the same
//! values remapped so every anti-diagonal occupies one contiguous column
//! run, turning the wavefront sweep into sequential column updates. Both
//! layouts produce identical scores, positions, and consensus pairs.
//!
//! For long second sequences, [`ParallelLocalAligner`] splits the input
//! into overlapping pieces, aligns them concurrently on the rayon worker
//! pool, and reduces the per-piece results into one global answer.
//!
//! ## Example
//!
//! ```
//! use skewalign::{LocalAligner, MatrixLayout};
//!
//! let aligner = LocalAligner::new(b"GGTTGACTA", b"TGTTACGG")
//!     .layout(MatrixLayout::Skewed);
//! let alignment = aligner.align();
//!
//! assert_eq!(alignment.score, 13.0);
//! assert_eq!(alignment.pos, 2);
//! ```

pub mod alignment;
pub mod error;

pub use alignment::{
    Alignment, DenseMatrix, LocalAligner, MatrixLayout, ParallelAlignment, ParallelLocalAligner,
    PhaseTimings, ScoringScheme, SimilarityMatrix, SkewedMatrix,
};
pub use error::{Result, SkewalignError};
