//! DEMATEL Analyzer - Runs the full pipeline for one submission.
//!
//! Codebook decode → crisp matrix → normalization → total relation →
//! aggregation → ranking. Every stage is pure; any failure aborts the whole
//! submission and no partial result is returned.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use super::total_relation::default_singularity_tolerance;
use super::{
    Aggregator, AssessmentMatrix, CrispMatrix, CrispMatrixBuilder, DematelError, Normalizer,
    Ranker, RankingEntry, TotalRelationSolver,
};

/// Default upper bound on the matrix order.
pub const DEFAULT_MAX_ORDER: usize = 50;

/// Tunables for the analyzer.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOptions {
    /// Largest accepted matrix order; inversion cost is cubic.
    pub max_order: usize,
    /// Pivot magnitude at or below which `I − X` counts as singular.
    pub singularity_tolerance: Decimal,
    /// Reject submissions with missing criterion weights.
    pub require_weights: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            max_order: DEFAULT_MAX_ORDER,
            singularity_tolerance: default_singularity_tolerance(),
            require_weights: true,
        }
    }
}

/// A linguistic-term submission.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DematelInput {
    pub criteria: Vec<String>,
    pub alternatives: Vec<String>,
    /// Collected per criterion; validated for presence but not used in the
    /// computation.
    pub weights: Vec<Option<f64>>,
    pub matrix: AssessmentMatrix,
}

/// A submission whose matrix is already decoded to crisp values.
#[derive(Debug, Clone, PartialEq)]
pub struct CrispInput {
    pub criteria: Vec<String>,
    /// May be empty, in which case every alternative gets a placeholder label.
    pub alternatives: Vec<String>,
    pub matrix: CrispMatrix,
}

/// Every matrix and score computed for one submission.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DematelResult {
    pub crisp_matrix: Vec<Vec<f64>>,
    pub normalized_matrix: Vec<Vec<f64>>,
    pub total_relation_matrix: Vec<Vec<f64>>,
    pub scale_factor: f64,
    pub influence_given: Vec<f64>,
    pub influence_received: Vec<f64>,
    pub prominence: Vec<f64>,
    pub relation: Vec<f64>,
    pub ranking: Vec<RankingEntry>,
}

/// Pipeline orchestrator.
#[derive(Debug, Clone, Default)]
pub struct DematelAnalyzer {
    options: AnalysisOptions,
}

impl DematelAnalyzer {
    pub fn new(options: AnalysisOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    /// Analyzes a linguistic-term submission.
    ///
    /// # Errors
    /// - `IncompleteInput` for empty criteria/alternatives or missing weights
    /// - `ShapeMismatch` if label counts disagree with the matrix
    /// - `NonSquareMatrix` if alternatives and criteria counts differ
    /// - `MatrixTooLarge` if the order exceeds `max_order`
    /// - `InvalidTerms` listing every cell outside the codebook
    /// - `DegenerateScale` if every crisp value is zero
    /// - `MatrixInversionFailed` if `I − X` is singular
    pub fn analyze(&self, input: &DematelInput) -> Result<DematelResult, DematelError> {
        let result = self.validate_input(input).and_then(|()| {
            let crisp = CrispMatrixBuilder::build(&input.matrix);
            crisp.ensure_defined()?;
            self.run(&input.alternatives, &crisp)
        });
        Self::log_outcome(&result);
        result
    }

    /// Analyzes a submission that already carries crisp values.
    pub fn analyze_crisp(&self, input: &CrispInput) -> Result<DematelResult, DematelError> {
        let result = self
            .validate_crisp_input(input)
            .and_then(|()| self.run(&input.alternatives, &input.matrix));
        Self::log_outcome(&result);
        result
    }

    fn validate_input(&self, input: &DematelInput) -> Result<(), DematelError> {
        if input.criteria.is_empty() {
            return Err(DematelError::incomplete("no criteria"));
        }
        if input.alternatives.is_empty() {
            return Err(DematelError::incomplete("no alternatives"));
        }
        if self.options.require_weights {
            Self::validate_weights(&input.criteria, &input.weights)?;
        }

        self.validate_shape(
            input.alternatives.len(),
            input.criteria.len(),
            input.matrix.alternative_count(),
            input.matrix.criteria_count(),
        )
    }

    fn validate_weights(criteria: &[String], weights: &[Option<f64>]) -> Result<(), DematelError> {
        if weights.len() != criteria.len() {
            return Err(DematelError::incomplete(format!(
                "{} weights for {} criteria",
                weights.len(),
                criteria.len()
            )));
        }
        if let Some(i) = weights
            .iter()
            .position(|w| !matches!(w, Some(v) if v.is_finite()))
        {
            return Err(DematelError::incomplete(format!(
                "missing weight for criterion {}",
                i + 1
            )));
        }
        Ok(())
    }

    fn validate_crisp_input(&self, input: &CrispInput) -> Result<(), DematelError> {
        if input.criteria.is_empty() {
            return Err(DematelError::incomplete("no criteria"));
        }
        if input.matrix.nrows() == 0 {
            return Err(DematelError::incomplete("no alternatives"));
        }
        let labels = if input.alternatives.is_empty() {
            input.matrix.nrows()
        } else {
            input.alternatives.len()
        };
        self.validate_shape(
            labels,
            input.criteria.len(),
            input.matrix.nrows(),
            input.matrix.ncols(),
        )
    }

    fn validate_shape(
        &self,
        alternatives: usize,
        criteria: usize,
        rows: usize,
        cols: usize,
    ) -> Result<(), DematelError> {
        if rows != alternatives {
            return Err(DematelError::shape_mismatch(format!(
                "{} alternatives but the matrix has {} rows",
                alternatives, rows
            )));
        }
        if cols != criteria {
            return Err(DematelError::shape_mismatch(format!(
                "{} criteria but the matrix has {} columns",
                criteria, cols
            )));
        }
        if rows != cols {
            return Err(DematelError::NonSquareMatrix {
                alternatives: rows,
                criteria: cols,
            });
        }
        if rows > self.options.max_order {
            return Err(DematelError::MatrixTooLarge {
                order: rows,
                max: self.options.max_order,
            });
        }
        Ok(())
    }

    fn run(&self, labels: &[String], crisp: &CrispMatrix) -> Result<DematelResult, DematelError> {
        debug!(order = crisp.nrows(), "running DEMATEL pipeline");

        let normalization = Normalizer::normalize(crisp)?;
        debug!(
            max_row_sum = %normalization.max_row_sum,
            scale = %normalization.scale,
            "crisp matrix normalized"
        );

        let total = TotalRelationSolver::solve(
            &normalization.matrix,
            self.options.singularity_tolerance,
        )?;
        let scores = Aggregator::aggregate(&total.rounded)?;
        let ranking = Ranker::rank(labels, &scores.prominence, &scores.relation);

        debug!(alternatives = ranking.len(), "ranking computed");

        Ok(DematelResult {
            crisp_matrix: crisp.to_f64_rows(),
            normalized_matrix: normalization.matrix.to_f64_rows(),
            total_relation_matrix: total.rounded.to_f64_rows(),
            scale_factor: normalization.scale.to_f64().unwrap_or(f64::NAN),
            influence_given: scores.given,
            influence_received: scores.received,
            prominence: scores.prominence,
            relation: scores.relation,
            ranking,
        })
    }

    fn log_outcome(result: &Result<DematelResult, DematelError>) {
        if let Err(err) = result {
            warn!(code = %err.code(), error = %err, "DEMATEL analysis aborted");
        }
    }
}
