//! Scoring schemes for local alignment
//!
//! A [`ScoringScheme`] supplies the per-symbol-pair score used by the DP
//! recurrence plus a single linear gap penalty. Scores come either from the
//! built-in match/mismatch scheme or from an injected function, so callers
//! can plug in substitution tables (BLOSUM-style lookups) without the core
//! knowing about them.

use std::fmt;
use std::sync::Arc;

/// Symbol-pair scoring function, shareable across worker threads
pub type ScoringFn = Arc<dyn Fn(u8, u8) -> f64 + Send + Sync>;

/// Default score for two identical symbols
pub const DEFAULT_MATCH_SCORE: f64 = 3.0;

/// Default score for two differing symbols
pub const DEFAULT_MISMATCH_SCORE: f64 = -3.0;

/// Default linear gap penalty (subtracted per gap symbol)
pub const DEFAULT_GAP_PENALTY: f64 = 2.0;

#[derive(Clone)]
enum Scorer {
    Simple { match_score: f64, mismatch_score: f64 },
    Custom(ScoringFn),
}

/// Scoring configuration for Smith-Waterman alignment
///
/// `score(a, b)` is pure and is evaluated once per interior DP cell, so an
/// alignment of sequences with lengths `m` and `n` makes `m × n` calls.
/// The gap penalty is non-negative and is *subtracted* whenever a gap is
/// introduced in either sequence.
///
/// # Example
///
/// ```
/// use skewalign::alignment::ScoringScheme;
///
/// // Default scoring (match=+3, mismatch=-3, gap penalty 2)
/// let scoring = ScoringScheme::default();
/// assert_eq!(scoring.score(b'A', b'A'), 3.0);
/// assert_eq!(scoring.score(b'A', b'C'), -3.0);
///
/// // Injected scoring function (here: transitions cost less than transversions)
/// let custom = ScoringScheme::with_fn(
///     |a, b| if a == b { 2.0 } else { -1.0 },
///     1.0,
/// );
/// assert_eq!(custom.score(b'G', b'G'), 2.0);
/// ```
#[derive(Clone)]
pub struct ScoringScheme {
    scorer: Scorer,
    /// Linear gap penalty, subtracted once per gap symbol
    pub gap_penalty: f64,
}

impl Default for ScoringScheme {
    fn default() -> Self {
        Self::new(
            DEFAULT_MATCH_SCORE,
            DEFAULT_MISMATCH_SCORE,
            DEFAULT_GAP_PENALTY,
        )
    }
}

impl ScoringScheme {
    /// Create a match/mismatch scheme with the given gap penalty
    pub fn new(match_score: f64, mismatch_score: f64, gap_penalty: f64) -> Self {
        Self {
            scorer: Scorer::Simple {
                match_score,
                mismatch_score,
            },
            gap_penalty,
        }
    }

    /// Create a scheme around an injected symbol-pair scoring function
    pub fn with_fn<F>(scoring_function: F, gap_penalty: f64) -> Self
    where
        F: Fn(u8, u8) -> f64 + Send + Sync + 'static,
    {
        Self {
            scorer: Scorer::Custom(Arc::new(scoring_function)),
            gap_penalty,
        }
    }

    /// Score one pair of symbols
    pub fn score(&self, a: u8, b: u8) -> f64 {
        match &self.scorer {
            Scorer::Simple {
                match_score,
                mismatch_score,
            } => {
                if a == b {
                    *match_score
                } else {
                    *mismatch_score
                }
            }
            Scorer::Custom(scoring_function) => scoring_function(a, b),
        }
    }
}

impl fmt::Debug for ScoringScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.scorer {
            Scorer::Simple {
                match_score,
                mismatch_score,
            } => f
                .debug_struct("ScoringScheme")
                .field("match_score", match_score)
                .field("mismatch_score", mismatch_score)
                .field("gap_penalty", &self.gap_penalty)
                .finish(),
            Scorer::Custom(_) => f
                .debug_struct("ScoringScheme")
                .field("scoring_function", &"<injected>")
                .field("gap_penalty", &self.gap_penalty)
                .finish(),
        }
    }
}
