//! Assessment Matrix - Alternatives × criteria grid of linguistic term tokens.

use serde::Deserialize;

use super::DematelError;

/// Token stored in cells that have not been filled in yet.
pub const UNSET_TOKEN: &str = "";

/// Normalizes a raw token the way the entry form did: trimmed and uppercased.
fn normalize_token(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Rectangular matrix of raw linguistic tokens.
///
/// Every row always has exactly `criteria_count` entries; growing the matrix
/// pads new cells with [`UNSET_TOKEN`]. Deserializes from a plain array of
/// rows and goes through the same checks as [`AssessmentMatrix::try_from_rows`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Vec<String>>")]
pub struct AssessmentMatrix {
    rows: Vec<Vec<String>>,
    criteria_count: usize,
}

impl AssessmentMatrix {
    /// Creates an empty matrix with no alternatives and no criteria.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a matrix of the given shape with every cell unset.
    pub fn new(alternatives: usize, criteria: usize) -> Self {
        Self {
            rows: vec![vec![UNSET_TOKEN.to_string(); criteria]; alternatives],
            criteria_count: criteria,
        }
    }

    /// Creates a builder for constructing an assessment matrix row by row.
    pub fn builder() -> AssessmentMatrixBuilder {
        AssessmentMatrixBuilder::new()
    }

    /// Builds a matrix from rows of raw tokens.
    ///
    /// # Errors
    /// Returns `ShapeMismatch` if the rows have different lengths.
    pub fn try_from_rows<S: AsRef<str>>(rows: &[Vec<S>]) -> Result<Self, DematelError> {
        let criteria_count = rows.first().map(Vec::len).unwrap_or(0);
        let mut normalized = Vec::with_capacity(rows.len());

        for (i, row) in rows.iter().enumerate() {
            if row.len() != criteria_count {
                return Err(DematelError::shape_mismatch(format!(
                    "row {} has {} entries, expected {}",
                    i + 1,
                    row.len(),
                    criteria_count
                )));
            }
            normalized.push(row.iter().map(|t| normalize_token(t.as_ref())).collect());
        }

        Ok(Self {
            rows: normalized,
            criteria_count,
        })
    }

    /// Returns the number of alternatives (rows).
    pub fn alternative_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of criteria (columns).
    pub fn criteria_count(&self) -> usize {
        self.criteria_count
    }

    /// Returns true if the matrix has no cells.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.criteria_count == 0
    }

    /// Returns true if alternatives and criteria counts match.
    pub fn is_square(&self) -> bool {
        self.rows.len() == self.criteria_count
    }

    /// Gets the token at a cell.
    pub fn get(&self, alternative: usize, criterion: usize) -> Option<&str> {
        self.rows
            .get(alternative)
            .and_then(|row| row.get(criterion))
            .map(String::as_str)
    }

    /// Sets the token at a cell, normalizing it to uppercase.
    ///
    /// # Errors
    /// Returns `ShapeMismatch` if the cell is outside the matrix.
    pub fn set(
        &mut self,
        alternative: usize,
        criterion: usize,
        token: &str,
    ) -> Result<(), DematelError> {
        let (rows, cols) = (self.rows.len(), self.criteria_count);
        let cell = self
            .rows
            .get_mut(alternative)
            .and_then(|row| row.get_mut(criterion))
            .ok_or_else(|| {
                DematelError::shape_mismatch(format!(
                    "cell ({}, {}) is outside a {}×{} matrix",
                    alternative + 1,
                    criterion + 1,
                    rows,
                    cols
                ))
            })?;
        *cell = normalize_token(token);
        Ok(())
    }

    /// Appends an alternative row of unset cells.
    pub fn add_alternative(&mut self) {
        self.rows
            .push(vec![UNSET_TOKEN.to_string(); self.criteria_count]);
    }

    /// Appends a criterion column, padding every row with an unset cell.
    pub fn add_criterion(&mut self) {
        self.criteria_count += 1;
        for row in &mut self.rows {
            row.push(UNSET_TOKEN.to_string());
        }
    }

    /// Resizes to the given shape, truncating or padding with unset cells.
    pub fn resize(&mut self, alternatives: usize, criteria: usize) {
        self.criteria_count = criteria;
        for row in &mut self.rows {
            row.resize(criteria, UNSET_TOKEN.to_string());
        }
        self.rows
            .resize(alternatives, vec![UNSET_TOKEN.to_string(); criteria]);
    }

    /// Returns the rows of tokens.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Iterates over `(alternative, criterion, token)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &str)> {
        self.rows.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(move |(j, token)| (i, j, token.as_str()))
        })
    }
}

impl TryFrom<Vec<Vec<String>>> for AssessmentMatrix {
    type Error = DematelError;

    fn try_from(rows: Vec<Vec<String>>) -> Result<Self, Self::Error> {
        Self::try_from_rows(&rows)
    }
}

/// Builder for constructing AssessmentMatrix instances.
#[derive(Debug, Default)]
pub struct AssessmentMatrixBuilder {
    rows: Vec<Vec<String>>,
}

impl AssessmentMatrixBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a row of tokens.
    pub fn row(mut self, tokens: Vec<impl Into<String>>) -> Self {
        self.rows.push(tokens.into_iter().map(Into::into).collect());
        self
    }

    /// Builds the assessment matrix.
    ///
    /// # Errors
    /// Returns `ShapeMismatch` if the rows have different lengths.
    pub fn build(self) -> Result<AssessmentMatrix, DematelError> {
        AssessmentMatrix::try_from_rows(&self.rows)
    }
}
