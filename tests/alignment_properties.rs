//! Property-based tests for the alignment engine.
//!
//! Tests the DP invariants (floor, boundary), the raw/true index bijection,
//! and the agreement between matrix layouts and between the serial and
//! parallel drivers, over randomized inputs.

use proptest::prelude::*;
use skewalign::{
    DenseMatrix, LocalAligner, MatrixLayout, ParallelLocalAligner, ScoringScheme,
    SimilarityMatrix, SkewedMatrix,
};

/// Generate random DNA sequences, empty included
fn arb_seq(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(
        prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')],
        0..=max_len,
    )
}

/// Generate scoring schemes with varied match/mismatch/gap values
fn arb_scoring() -> impl Strategy<Value = ScoringScheme> {
    (0.5f64..8.0, -8.0f64..0.0, 0.0f64..5.0)
        .prop_map(|(m, mm, gap)| ScoringScheme::new(m, mm, gap))
}

mod matrix_properties {
    use super::*;

    proptest! {
        #[test]
        fn cells_respect_the_floor_and_boundary(
            x in arb_seq(24),
            y in arb_seq(24),
            scoring in arb_scoring(),
        ) {
            let mut matrix = DenseMatrix::new(&x, &y);
            matrix.fill(&scoring);
            let (dim_x, dim_y) = matrix.dims();
            for i in 0..dim_x {
                prop_assert_eq!(matrix.get(i, 0), 0.0);
            }
            for j in 0..dim_y {
                prop_assert_eq!(matrix.get(0, j), 0.0);
            }
            for i in 0..dim_x {
                for j in 0..dim_y {
                    prop_assert!(matrix.get(i, j) >= 0.0);
                }
            }
        }

        #[test]
        fn skewed_cells_match_dense(
            x in arb_seq(24),
            y in arb_seq(24),
            scoring in arb_scoring(),
        ) {
            let mut dense = DenseMatrix::new(&x, &y);
            dense.fill(&scoring);
            let mut skewed = SkewedMatrix::new(&x, &y);
            skewed.fill(&scoring);

            let (dim_x, dim_y) = dense.dims();
            for i in 0..dim_x {
                for j in 0..dim_y {
                    prop_assert_eq!(
                        dense.get(i, j),
                        skewed.get(i, j),
                        "cell ({}, {})", i, j
                    );
                }
            }
            prop_assert_eq!(dense.find_maximum(), skewed.find_maximum());
        }
    }
}

mod bijection_properties {
    use super::*;

    proptest! {
        #[test]
        fn index_mapping_round_trips(len_x in 0usize..32, len_y in 0usize..32) {
            let x = vec![b'A'; len_x];
            let y = vec![b'A'; len_y];
            let matrix = SkewedMatrix::new(&x, &y);
            for ti in 0..=len_x {
                for tj in 0..=len_y {
                    let (ri, rj) = matrix.true_to_raw(ti, tj);
                    prop_assert_eq!(matrix.raw_to_true(ri, rj), (ti, tj));
                }
            }
        }
    }
}

mod aligner_properties {
    use super::*;

    proptest! {
        #[test]
        fn layouts_agree_on_every_alignment(
            x in arb_seq(24),
            y in arb_seq(24),
            scoring in arb_scoring(),
        ) {
            let dense = LocalAligner::with_scoring(&x, &y, scoring.clone()).align();
            let skewed = LocalAligner::with_scoring(&x, &y, scoring)
                .layout(MatrixLayout::Skewed)
                .align();
            prop_assert_eq!(dense.score, skewed.score);
            prop_assert_eq!(dense.max_index, skewed.max_index);
            prop_assert_eq!(dense.pos, skewed.pos);
            prop_assert_eq!(dense.consensus_x, skewed.consensus_x);
            prop_assert_eq!(dense.consensus_y, skewed.consensus_y);
        }

        #[test]
        fn traceback_is_deterministic(x in arb_seq(20), y in arb_seq(20)) {
            let aligner = LocalAligner::new(&x, &y);
            let first = aligner.align();
            let second = aligner.align();
            prop_assert_eq!(first.score, second.score);
            prop_assert_eq!(first.pos, second.pos);
            prop_assert_eq!(first.consensus_x, second.consensus_x);
            prop_assert_eq!(first.consensus_y, second.consensus_y);
        }

        #[test]
        fn consensus_strings_have_equal_length(
            x in arb_seq(24),
            y in arb_seq(24),
            scoring in arb_scoring(),
        ) {
            let alignment = LocalAligner::with_scoring(&x, &y, scoring).align();
            prop_assert_eq!(alignment.consensus_x.len(), alignment.consensus_y.len());
        }
    }
}

mod parallel_properties {
    use super::*;

    proptest! {
        #[test]
        fn parallel_score_matches_serial(
            x in arb_seq(12),
            y in proptest::collection::vec(
                prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')],
                6..=60,
            ),
            npiece in 1usize..=3,
        ) {
            // With the default scoring any positive-scoring alignment spans
            // fewer than 2.5 × len(x) symbols of y, so a 3 × len(x) margin
            // guarantees some piece contains the optimum whole. Equal-score
            // alternatives may still make a different piece win, so the
            // guaranteed agreement is on the score.
            let serial = LocalAligner::new(&x, &y).align();
            let parallel = ParallelLocalAligner::new(&x, &y, npiece)
                .overlap_ratio(3.0)
                .align()
                .unwrap();
            prop_assert_eq!(parallel.alignment.score, serial.score);
            prop_assert_eq!(parallel.piece_timings.len(), npiece);
        }
    }
}
