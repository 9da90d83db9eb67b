//! Diagonally skewed DP matrix layout
//!
//! # Layout
//!
//! [`SkewedMatrix`] stores exactly the cells of the dense table, remapped so
//! that every anti-diagonal of true space occupies (part of) one column of a
//! `min(len_x,len_y)+1 × max(len_x,len_y)+1` raw table. The wavefront
//! recurrence then becomes a column-by-column sweep with fixed neighbor
//! offsets per zone, instead of a strided walk across a rectangular table.
//!
//! The raw column index advances with the anti-diagonal. Three zones arise:
//!
//! 1. **Growing triangular**: the first `nrows-1` diagonals are shorter
//!    than the full matrix height and fill the upper-left triangle.
//! 2. **Full diagonal**: diagonals of maximal length; whether they advance
//!    along x or along y depends on which sequence is longer.
//! 3. **Shrinking triangular**: the tail diagonals wrap around and reuse
//!    the otherwise-empty lower-left triangle (raw cells with `ri > rj`),
//!    which is what makes the cell counts of the two layouts equal.
//!
//! The raw/true bijection is defined by one pure function per zone,
//! composed behind [`SkewedMatrix::raw_to_true`] and
//! [`SkewedMatrix::true_to_raw`]. The mapping must be its own exact
//! inverse; the tests in this module exercise the round trip exhaustively
//! for short sequences of every relative length.

use std::fmt;

use super::matrix::{dp_cell, SimilarityMatrix};
use super::scoring::ScoringScheme;

/// Raw/true coordinate geometry of one skewed layout
///
/// `dim_x`/`dim_y` are the DP-space dimensions (sequence length + 1);
/// `nrows`/`ncols` are their min/max, the raw storage extents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SkewGeometry {
    nrows: usize,
    ncols: usize,
    dim_x: usize,
    dim_y: usize,
}

impl SkewGeometry {
    fn new(dim_x: usize, dim_y: usize) -> Self {
        Self {
            nrows: dim_x.min(dim_y),
            ncols: dim_x.max(dim_y),
            dim_x,
            dim_y,
        }
    }

    /// Growing triangular zone: `rj < nrows-1`, `ri <= rj`
    fn growing_to_true(self, ri: usize, rj: usize) -> (usize, usize) {
        (ri, rj - ri)
    }

    /// Full-diagonal zone: `rj >= nrows-1`
    fn diagonal_to_true(self, ri: usize, rj: usize) -> (usize, usize) {
        if self.dim_x <= self.dim_y {
            // Diagonals advance along y; raw rows track x directly.
            (ri, rj - ri)
        } else {
            // Diagonals advance along x; raw rows count down from the top
            // of the diagonal.
            (rj - (self.nrows - 1) + ri, self.nrows - 1 - ri)
        }
    }

    /// Wrapped shrinking zone: `rj < nrows-1`, `ri > rj`
    fn shrinking_to_true(self, ri: usize, rj: usize) -> (usize, usize) {
        (self.dim_x - self.nrows + ri, self.dim_y - ri + rj)
    }

    fn raw_to_true(self, ri: usize, rj: usize) -> (usize, usize) {
        if rj + 1 < self.nrows {
            if ri <= rj {
                self.growing_to_true(ri, rj)
            } else {
                self.shrinking_to_true(ri, rj)
            }
        } else {
            self.diagonal_to_true(ri, rj)
        }
    }

    fn true_to_raw(self, ti: usize, tj: usize) -> (usize, usize) {
        let d = ti + tj;
        if d + 1 < self.nrows {
            (ti, d)
        } else if d + 1 > self.ncols {
            (ti + self.dim_y - self.ncols, d - self.ncols)
        } else {
            let ri = if self.dim_x <= self.dim_y {
                ti
            } else {
                self.dim_y - 1 - tj
            };
            (ri, d)
        }
    }
}

/// DP matrix in the skewed layout
///
/// Holds the same values as [`super::DenseMatrix`] for the same inputs;
/// only the storage addressing differs. Sequences are borrowed, never
/// copied.
pub struct SkewedMatrix<'a> {
    cells: Vec<f64>,
    geometry: SkewGeometry,
    sequence_x: &'a [u8],
    sequence_y: &'a [u8],
}

impl<'a> SkewedMatrix<'a> {
    /// Allocate a zeroed matrix for the given sequence pair
    pub fn new(sequence_x: &'a [u8], sequence_y: &'a [u8]) -> Self {
        let geometry = SkewGeometry::new(sequence_x.len() + 1, sequence_y.len() + 1);
        Self {
            cells: vec![0.0; geometry.nrows * geometry.ncols],
            geometry,
            sequence_x,
            sequence_y,
        }
    }

    /// Map a raw storage index to its true (DP-space) index
    pub fn raw_to_true(&self, ri: usize, rj: usize) -> (usize, usize) {
        self.geometry.raw_to_true(ri, rj)
    }

    /// Map a true (DP-space) index to its raw storage index
    pub fn true_to_raw(&self, ti: usize, tj: usize) -> (usize, usize) {
        self.geometry.true_to_raw(ti, tj)
    }

    #[inline]
    fn at(&self, ri: usize, rj: usize) -> f64 {
        self.cells[ri * self.geometry.ncols + rj]
    }

    #[inline]
    fn set(&mut self, ri: usize, rj: usize, value: f64) {
        self.cells[ri * self.geometry.ncols + rj] = value;
    }

    #[inline]
    fn score_at(&self, scoring: &ScoringScheme, ti: usize, tj: usize) -> f64 {
        scoring.score(self.sequence_x[ti - 1], self.sequence_y[tj - 1])
    }
}

impl SimilarityMatrix for SkewedMatrix<'_> {
    /// Three-phase sweep over raw columns
    ///
    /// Predecessor cells are no longer at fixed relative offsets once the
    /// diagonals are packed into columns, so each zone carries its own
    /// offset rule. The offsets below are the raw-space images of the true
    /// neighbors (north `(ti-1,tj)`, west `(ti,tj-1)`, north-west
    /// `(ti-1,tj-1)`) under the zone's mapping; the round-trip tests keep
    /// them honest against the bijection.
    fn fill(&mut self, scoring: &ScoringScheme) {
        let SkewGeometry {
            nrows,
            ncols,
            dim_x,
            dim_y,
        } = self.geometry;
        let gap_penalty = scoring.gap_penalty;
        // Full-length diagonals advance along y when x is the shorter
        // sequence, along x otherwise.
        let along_y = dim_x < dim_y;

        // Phase 1: growing triangular columns.
        for j in 2..nrows {
            for i in 1..j {
                let (ti, tj) = self.geometry.raw_to_true(i, j);
                let value = dp_cell(
                    self.at(i - 1, j - 1),
                    self.at(i, j - 1),
                    self.at(i - 1, j - 2),
                    self.score_at(scoring, ti, tj),
                    gap_penalty,
                );
                self.set(i, j, value);
            }
        }

        // Phase 2: full-length diagonal columns.
        for j in nrows..ncols {
            if along_y {
                for i in 1..nrows {
                    let (ti, tj) = self.geometry.raw_to_true(i, j);
                    let value = dp_cell(
                        self.at(i - 1, j - 1),
                        self.at(i, j - 1),
                        self.at(i - 1, j - 2),
                        self.score_at(scoring, ti, tj),
                        gap_penalty,
                    );
                    self.set(i, j, value);
                }
            } else {
                // The first full diagonal still meets the triangular zone
                // diagonally; afterwards the north-west neighbor shifts
                // down one raw row.
                let di_nw = if j == nrows { 0 } else { 1 };
                for i in 0..nrows - 1 {
                    let (ti, tj) = self.geometry.raw_to_true(i, j);
                    let value = dp_cell(
                        self.at(i, j - 1),
                        self.at(i + 1, j - 1),
                        self.at(i + di_nw, j - 2),
                        self.score_at(scoring, ti, tj),
                        gap_penalty,
                    );
                    self.set(i, j, value);
                }
            }
        }

        // Phase 3: wrapped shrinking triangular columns. The predecessor
        // columns of the first wrapped columns are the last raw columns.
        // The north-west neighbor of a first-wrapped-column cell shifts
        // down one raw row only when x is strictly longer; with equal
        // lengths it still lands in the growing triangle.
        for j in 0..nrows.saturating_sub(1) {
            let j_prev = if j == 0 { ncols - 1 } else { j - 1 };
            let j_prev2 = if j <= 1 { ncols - 2 + j } else { j - 2 };
            let di_nw = if j == 0 && dim_x > dim_y { 1 } else { 0 };
            for i in j + 1..nrows {
                let (ti, tj) = self.geometry.raw_to_true(i, j);
                let value = dp_cell(
                    self.at(i - 1, j_prev),
                    self.at(i, j_prev),
                    self.at(i - 1 + di_nw, j_prev2),
                    self.score_at(scoring, ti, tj),
                    gap_penalty,
                );
                self.set(i, j, value);
            }
        }
    }

    fn dims(&self) -> (usize, usize) {
        (self.geometry.dim_x, self.geometry.dim_y)
    }

    fn get(&self, ti: usize, tj: usize) -> f64 {
        let (ri, rj) = self.geometry.true_to_raw(ti, tj);
        self.at(ri, rj)
    }

    fn find_maximum(&self) -> (usize, usize, f64) {
        // Scan raw storage for locality, but break value ties by the
        // smaller converted true index so the reported position matches
        // the dense layout's row-major scan exactly.
        let mut best = (0, 0, self.get(0, 0));
        for ri in 0..self.geometry.nrows {
            for rj in 0..self.geometry.ncols {
                let value = self.at(ri, rj);
                if value < best.2 {
                    continue;
                }
                let (ti, tj) = self.geometry.raw_to_true(ri, rj);
                if value > best.2 || (ti, tj) < (best.0, best.1) {
                    best = (ti, tj, value);
                }
            }
        }
        best
    }
}

impl fmt::Display for SkewedMatrix<'_> {
    /// Diagnostic dump in true-space orientation; not part of the
    /// correctness contract
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ti in 0..self.geometry.dim_x {
            for tj in 0..self.geometry.dim_y {
                write!(f, "{:7.1}", self.get(ti, tj))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
