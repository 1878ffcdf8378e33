//! Ranker - Orders alternatives by prominence and classifies cause/effect.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cause/effect group of an alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InfluenceType {
    /// Net influencer (`relation ≥ 0`).
    Cause,
    /// Net receiver (`relation < 0`).
    Effect,
}

impl InfluenceType {
    /// Classifies a relation score.
    pub fn from_relation(relation: f64) -> Self {
        if relation >= 0.0 {
            InfluenceType::Cause
        } else {
            InfluenceType::Effect
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InfluenceType::Cause => "Cause",
            InfluenceType::Effect => "Effect",
        }
    }
}

impl fmt::Display for InfluenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One row of the final ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub alternative: String,
    pub prominence: f64,
    pub relation: f64,
    #[serde(rename = "type")]
    pub influence_type: InfluenceType,
}

/// Ranking of alternatives.
pub struct Ranker;

impl Ranker {
    /// Builds the ranking, sorted by prominence (highest first).
    ///
    /// # Edge Cases
    /// - Blank or missing label: replaced by `Alt N` (1-based input position)
    /// - Equal prominence: input order is kept
    /// - Inputs of different lengths: the shorter of `prominence`/`relation` wins
    pub fn rank(labels: &[String], prominence: &[f64], relation: &[f64]) -> Vec<RankingEntry> {
        let mut ranking: Vec<RankingEntry> = prominence
            .iter()
            .zip(relation.iter())
            .enumerate()
            .map(|(i, (&p, &r))| RankingEntry {
                alternative: Self::label_for(labels, i),
                prominence: p,
                relation: r,
                influence_type: InfluenceType::from_relation(r),
            })
            .collect();

        // sort_by is stable, so ties keep input order
        ranking.sort_by(|a, b| b.prominence.total_cmp(&a.prominence));
        ranking
    }

    fn label_for(labels: &[String], index: usize) -> String {
        labels
            .get(index)
            .map(|l| l.trim())
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Alt {}", index + 1))
    }
}
