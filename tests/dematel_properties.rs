//! Property tests for the DEMATEL pipeline.
//!
//! Random square matrices of linguistic terms are pushed through every stage;
//! accepted submissions must satisfy the numeric invariants, rejected ones
//! must fail with a numeric error rather than panic.

use dematel_engine::domain::dematel::{
    AssessmentMatrix, CrispMatrixBuilder, DecimalMatrix, DematelAnalyzer, DematelError,
    DematelInput, InfluenceType, LinguisticTerm, Normalizer, TotalRelationSolver,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn term_matrix(max_order: usize) -> impl Strategy<Value = Vec<Vec<&'static str>>> {
    (1..=max_order).prop_flat_map(|n| {
        prop::collection::vec(
            prop::collection::vec(
                prop::sample::select(LinguisticTerm::ALL.to_vec()).prop_map(|t| t.symbol()),
                n,
            ),
            n,
        )
    })
}

fn input_for(rows: &[Vec<&str>]) -> DematelInput {
    let n = rows.len();
    DematelInput {
        criteria: (1..=n).map(|j| format!("C{}", j)).collect(),
        alternatives: (1..=n).map(|i| format!("A{}", i)).collect(),
        weights: vec![Some(1.0); n],
        matrix: AssessmentMatrix::try_from_rows(rows).unwrap(),
    }
}

fn is_numeric_rejection(err: &DematelError) -> bool {
    matches!(
        err,
        DematelError::DegenerateScale { .. } | DematelError::MatrixInversionFailed { .. }
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn normalized_rows_never_exceed_one(rows in term_matrix(6)) {
        let crisp = CrispMatrixBuilder::build(&AssessmentMatrix::try_from_rows(&rows).unwrap());
        if let Ok(normalization) = Normalizer::normalize(&crisp) {
            let bound = Decimal::ONE + Decimal::new(1, 20);
            for sum in normalization.matrix.row_sums().unwrap() {
                prop_assert!(sum <= bound, "row sum {} exceeds 1", sum);
            }
        }
    }

    #[test]
    fn complement_inverse_round_trips(rows in term_matrix(5)) {
        let crisp = CrispMatrixBuilder::build(&AssessmentMatrix::try_from_rows(&rows).unwrap());
        if let Ok(normalization) = Normalizer::normalize(&crisp) {
            let x = normalization.matrix;
            if let Ok(inverse) = TotalRelationSolver::invert_complement(&x, Decimal::new(1, 12)) {
                let complement = DecimalMatrix::identity(x.nrows()).checked_sub(&x).unwrap();
                let product = complement.checked_mul(&inverse).unwrap();
                prop_assert!(product.approx_identity(Decimal::new(1, 3)));
            }
        }
    }

    #[test]
    fn accepted_results_satisfy_invariants(rows in term_matrix(5)) {
        let input = input_for(&rows);
        match DematelAnalyzer::default().analyze(&input) {
            Ok(result) => {
                let n = rows.len();
                prop_assert_eq!(result.ranking.len(), n);

                for i in 0..n {
                    let d = result.influence_given[i];
                    let r = result.influence_received[i];
                    prop_assert!((result.prominence[i] - (d + r)).abs() <= 0.005 + 1e-9);
                    prop_assert!((result.relation[i] - (d - r)).abs() <= 0.005 + 1e-9);
                }

                for pair in result.ranking.windows(2) {
                    prop_assert!(pair[0].prominence >= pair[1].prominence);
                }

                for entry in &result.ranking {
                    let expected = if entry.relation >= 0.0 {
                        InfluenceType::Cause
                    } else {
                        InfluenceType::Effect
                    };
                    prop_assert_eq!(entry.influence_type, expected);
                }
            }
            Err(err) => prop_assert!(is_numeric_rejection(&err), "unexpected error {:?}", err),
        }
    }

    #[test]
    fn analysis_is_deterministic(rows in term_matrix(4)) {
        let input = input_for(&rows);
        let analyzer = DematelAnalyzer::default();
        prop_assert_eq!(analyzer.analyze(&input), analyzer.analyze(&input));
    }
}
