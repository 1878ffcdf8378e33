//! DEMATEL Module - Cause–effect analysis from fuzzy linguistic assessments.
//!
//! # Components
//!
//! - `Codebook` - Seven-term linguistic scale and crisp decoding
//! - `AssessmentMatrix` - Resizable alternatives × criteria token grid
//! - `CrispMatrixBuilder` - Element-wise decoding with invalid-cell tracking
//! - `Normalizer` - Scaling by the largest row sum
//! - `TotalRelationSolver` - `T = X (I − X)⁻¹` over 28-digit decimals
//! - `Aggregator` - Influence given/received, prominence, relation
//! - `Ranker` - Prominence ordering with cause/effect classification
//! - `DematelAnalyzer` - Validation and orchestration of the stages above
//!
//! All stages are pure and stateless; each submission recomputes everything.

mod aggregator;
mod analyzer;
mod assessment_matrix;
mod codebook;
mod crisp_matrix;
mod errors;
mod matrix;
mod normalizer;
mod ranker;
mod total_relation;

pub use aggregator::{Aggregator, InfluenceScores, SCORE_DECIMALS};
pub use analyzer::{
    AnalysisOptions, CrispInput, DematelAnalyzer, DematelInput, DematelResult, DEFAULT_MAX_ORDER,
};
pub use assessment_matrix::{AssessmentMatrix, AssessmentMatrixBuilder, UNSET_TOKEN};
pub use codebook::{Codebook, CrispValue, FuzzyPair, LinguisticTerm};
pub use crisp_matrix::{CrispMatrix, CrispMatrixBuilder};
pub use errors::{DematelError, InvalidCell};
pub use matrix::{DecimalMatrix, MatrixError};
pub use normalizer::{Normalization, Normalizer};
pub use ranker::{InfluenceType, Ranker, RankingEntry};
pub use total_relation::{
    default_singularity_tolerance, TotalRelation, TotalRelationSolver, TOTAL_RELATION_DECIMALS,
};
