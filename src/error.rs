//! Error types for skewalign

use std::fmt;

/// Result type alias for skewalign operations
pub type Result<T> = std::result::Result<T, SkewalignError>;

/// Error types that can occur in skewalign
///
/// All variants are configuration errors: they are reported before any
/// matrix is built. Degenerate but well-defined inputs (empty sequences
/// handed to the serial aligner, an all-mismatch pair) are not errors and
/// produce a score-0 result instead.
#[derive(Debug, Clone, PartialEq)]
pub enum SkewalignError {
    /// Piece count handed to the parallel aligner must be at least 1
    InvalidPieceCount {
        /// The rejected piece count
        npiece: usize,
    },

    /// Overlap ratio handed to the parallel aligner must be positive
    InvalidOverlapRatio {
        /// The rejected ratio
        overlap_ratio: f64,
    },

    /// Partitioning `sequence_y` produced a piece with no symbols
    EmptyPiece {
        /// Index of the empty piece
        piece: usize,
        /// Requested piece count
        npiece: usize,
        /// Length of the sequence being partitioned
        len_y: usize,
    },
}

impl fmt::Display for SkewalignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkewalignError::InvalidPieceCount { npiece } => {
                write!(f, "piece count must be at least 1, got {}", npiece)
            }
            SkewalignError::InvalidOverlapRatio { overlap_ratio } => {
                write!(f, "overlap ratio must be positive, got {}", overlap_ratio)
            }
            SkewalignError::EmptyPiece {
                piece,
                npiece,
                len_y,
            } => {
                write!(
                    f,
                    "piece {} of {} is empty when partitioning a sequence of length {}",
                    piece, npiece, len_y
                )
            }
        }
    }
}

impl std::error::Error for SkewalignError {}
