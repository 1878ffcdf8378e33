//! RunDematelHandler - Command handler for DEMATEL submissions.
//!
//! Analysis is CPU-bound (cubic in the matrix order), so each run happens on
//! the blocking pool instead of an async worker.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::dematel::{
    AssessmentMatrix, CrispInput, CrispMatrix, DematelAnalyzer, DematelInput, DematelResult,
};
use crate::domain::foundation::{DomainError, ErrorCode};

/// Command to analyze a linguistic-term matrix.
#[derive(Debug, Clone)]
pub struct RunDematelCommand {
    pub criteria: Vec<String>,
    pub alternatives: Vec<String>,
    pub weights: Vec<Option<f64>>,
    pub matrix: AssessmentMatrix,
}

/// Command to analyze a matrix of crisp values in `[0, 1]`.
#[derive(Debug, Clone)]
pub struct RunCrispDematelCommand {
    pub criteria: Vec<String>,
    pub alternatives: Vec<String>,
    pub matrix: Vec<Vec<f64>>,
}

/// Handler for DEMATEL analysis commands.
#[derive(Clone)]
pub struct RunDematelHandler {
    analyzer: Arc<DematelAnalyzer>,
}

impl RunDematelHandler {
    pub fn new(analyzer: Arc<DematelAnalyzer>) -> Self {
        Self { analyzer }
    }

    pub fn analyzer(&self) -> &DematelAnalyzer {
        &self.analyzer
    }

    pub async fn handle(&self, cmd: RunDematelCommand) -> Result<DematelResult, DomainError> {
        let input = DematelInput {
            criteria: cmd.criteria,
            alternatives: cmd.alternatives,
            weights: cmd.weights,
            matrix: cmd.matrix,
        };

        let analyzer = Arc::clone(&self.analyzer);
        let result = tokio::task::spawn_blocking(move || analyzer.analyze(&input))
            .await
            .map_err(join_failure)??;

        debug!(
            alternatives = result.ranking.len(),
            "DEMATEL analysis completed"
        );
        Ok(result)
    }

    pub async fn handle_crisp(
        &self,
        cmd: RunCrispDematelCommand,
    ) -> Result<DematelResult, DomainError> {
        let matrix = CrispMatrix::from_values(&cmd.matrix)?;
        let input = CrispInput {
            criteria: cmd.criteria,
            alternatives: cmd.alternatives,
            matrix,
        };

        let analyzer = Arc::clone(&self.analyzer);
        let result = tokio::task::spawn_blocking(move || analyzer.analyze_crisp(&input))
            .await
            .map_err(join_failure)??;

        debug!(
            alternatives = result.ranking.len(),
            "crisp DEMATEL analysis completed"
        );
        Ok(result)
    }
}

fn join_failure(err: tokio::task::JoinError) -> DomainError {
    error!(error = %err, "DEMATEL analysis task failed");
    DomainError::new(ErrorCode::InternalError, "Analysis task failed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dematel::{AnalysisOptions, InfluenceType};

    fn handler() -> RunDematelHandler {
        RunDematelHandler::new(Arc::new(DematelAnalyzer::new(AnalysisOptions::default())))
    }

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn dominant_command() -> RunDematelCommand {
        RunDematelCommand {
            criteria: names(&["Cost", "Quality"]),
            alternatives: names(&["Strong", "Weak"]),
            weights: vec![Some(0.5), Some(0.5)],
            matrix: AssessmentMatrix::try_from_rows(&[vec!["AHI", "AHI"], vec!["ALI", "ALI"]])
                .unwrap(),
        }
    }

    #[tokio::test]
    async fn handle_returns_ranking() {
        let result = handler().handle(dominant_command()).await.unwrap();

        assert_eq!(result.ranking.len(), 2);
        assert_eq!(result.ranking[0].alternative, "Strong");
        assert_eq!(result.ranking[0].influence_type, InfluenceType::Cause);
    }

    #[tokio::test]
    async fn handle_maps_domain_failures_to_error_codes() {
        let mut cmd = dominant_command();
        cmd.matrix.set(0, 1, "XX").unwrap();

        let err = handler().handle(cmd).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidTerm);
        assert_eq!(err.details.get("invalid_count").map(String::as_str), Some("1"));
    }

    #[tokio::test]
    async fn handle_crisp_rejects_out_of_range_values() {
        let cmd = RunCrispDematelCommand {
            criteria: names(&["C1", "C2"]),
            alternatives: names(&["A", "B"]),
            matrix: vec![vec![0.2, 1.5], vec![0.1, 0.0]],
        };

        let err = handler().handle_crisp(cmd).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCrispValue);
    }

    #[tokio::test]
    async fn handle_crisp_matches_linguistic_run() {
        let crisp = RunCrispDematelCommand {
            criteria: names(&["Cost", "Quality"]),
            alternatives: names(&["Strong", "Weak"]),
            matrix: vec![vec![1.0, 1.0], vec![0.0, 0.0]],
        };

        let h = handler();
        let from_terms = h.handle(dominant_command()).await.unwrap();
        let from_values = h.handle_crisp(crisp).await.unwrap();
        assert_eq!(from_terms, from_values);
    }
}
