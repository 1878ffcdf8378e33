//! Crisp Matrix Builder - Element-wise decoding of assessment tokens.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use super::codebook::{Codebook, CrispValue};
use super::matrix::DecimalMatrix;
use super::{AssessmentMatrix, DematelError, InvalidCell};

/// Numeric matrix decoded from an assessment matrix.
///
/// Undefined cells are kept in place and also recorded with their original
/// token so every invalid cell can be reported at once.
#[derive(Debug, Clone, PartialEq)]
pub struct CrispMatrix {
    cells: Vec<Vec<CrispValue>>,
    invalid: Vec<InvalidCell>,
}

impl CrispMatrix {
    /// Builds a crisp matrix from already-numeric values.
    ///
    /// # Errors
    /// - `ShapeMismatch` if the rows have different lengths
    /// - `InvalidCrispValue` if a value is not finite or lies outside [0, 1]
    pub fn from_values(rows: &[Vec<f64>]) -> Result<Self, DematelError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        let mut cells = Vec::with_capacity(rows.len());

        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(DematelError::shape_mismatch(format!(
                    "row {} has {} entries, expected {}",
                    i + 1,
                    row.len(),
                    width
                )));
            }

            let mut decoded = Vec::with_capacity(width);
            for (j, &value) in row.iter().enumerate() {
                let invalid = DematelError::InvalidCrispValue {
                    row: i,
                    column: j,
                    value,
                };
                if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                    return Err(invalid);
                }
                let decimal = Decimal::from_f64(value).ok_or(invalid)?;
                decoded.push(CrispValue::Defined(decimal));
            }
            cells.push(decoded);
        }

        Ok(Self {
            cells,
            invalid: Vec::new(),
        })
    }

    pub fn nrows(&self) -> usize {
        self.cells.len()
    }

    pub fn ncols(&self) -> usize {
        self.cells.first().map(Vec::len).unwrap_or(0)
    }

    /// Returns the decoded cell values.
    pub fn cells(&self) -> &[Vec<CrispValue>] {
        &self.cells
    }

    /// Returns the cells that could not be decoded.
    pub fn invalid_cells(&self) -> &[InvalidCell] {
        &self.invalid
    }

    /// Returns true if every cell decoded to a value.
    pub fn is_fully_defined(&self) -> bool {
        self.invalid.is_empty()
    }

    /// Fails with `InvalidTerms` if any cell is undefined.
    pub fn ensure_defined(&self) -> Result<(), DematelError> {
        if self.invalid.is_empty() {
            Ok(())
        } else {
            Err(DematelError::InvalidTerms {
                cells: self.invalid.clone(),
            })
        }
    }

    /// Converts to a decimal matrix.
    ///
    /// # Errors
    /// Returns `InvalidTerms` if any cell is undefined.
    pub fn to_decimal_matrix(&self) -> Result<DecimalMatrix, DematelError> {
        self.ensure_defined()?;
        let rows = self
            .cells
            .iter()
            .map(|row| row.iter().filter_map(CrispValue::value).collect())
            .collect();
        Ok(DecimalMatrix::from_rows(rows)?)
    }

    /// Converts to nested `f64` rows; undefined cells become NaN.
    pub fn to_f64_rows(&self) -> Vec<Vec<f64>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(CrispValue::to_f64).collect())
            .collect()
    }
}

/// Crisp matrix construction.
pub struct CrispMatrixBuilder;

impl CrispMatrixBuilder {
    /// Decodes every cell of the assessment matrix.
    ///
    /// Never fails: unknown tokens decode to [`CrispValue::Undefined`] and are
    /// listed in [`CrispMatrix::invalid_cells`].
    pub fn build(assessment: &AssessmentMatrix) -> CrispMatrix {
        let mut invalid = Vec::new();
        let cells = assessment
            .rows()
            .iter()
            .enumerate()
            .map(|(i, row)| {
                row.iter()
                    .enumerate()
                    .map(|(j, token)| {
                        let value = Codebook::decode(token);
                        if !value.is_defined() {
                            invalid.push(InvalidCell::new(i, j, token.clone()));
                        }
                        value
                    })
                    .collect()
            })
            .collect();

        CrispMatrix { cells, invalid }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assessment(rows: Vec<Vec<&str>>) -> AssessmentMatrix {
        rows.into_iter()
            .fold(AssessmentMatrix::builder(), |b, r| b.row(r))
            .build()
            .unwrap()
    }

    #[test]
    fn build_decodes_every_cell() {
        let crisp = CrispMatrixBuilder::build(&assessment(vec![
            vec!["ALI", "MI"],
            vec!["HI", "AHI"],
        ]));

        assert!(crisp.is_fully_defined());
        assert_eq!(crisp.to_f64_rows(), vec![vec![0.0, 0.45], vec![0.85, 1.0]]);
    }

    #[test]
    fn build_records_all_invalid_cells() {
        let crisp = CrispMatrixBuilder::build(&assessment(vec![
            vec!["XX", "MI"],
            vec!["HI", ""],
        ]));

        assert!(!crisp.is_fully_defined());
        assert_eq!(
            crisp.invalid_cells(),
            &[InvalidCell::new(0, 0, "XX"), InvalidCell::new(1, 1, "")]
        );
        assert!(crisp.to_f64_rows()[0][0].is_nan());
    }

    #[test]
    fn undefined_cells_block_decimal_conversion() {
        let crisp = CrispMatrixBuilder::build(&assessment(vec![vec!["XX"]]));
        assert!(matches!(
            crisp.to_decimal_matrix(),
            Err(DematelError::InvalidTerms { .. })
        ));
    }

    #[test]
    fn to_decimal_matrix_keeps_shape() {
        let crisp = CrispMatrixBuilder::build(&assessment(vec![
            vec!["LI", "FLI", "FHI"],
            vec!["MI", "HI", "AHI"],
        ]));
        let m = crisp.to_decimal_matrix().unwrap();
        assert_eq!((m.nrows(), m.ncols()), (2, 3));
        assert_eq!(m.get(0, 1), Decimal::new(25, 2));
    }

    #[test]
    fn from_values_accepts_unit_interval() {
        let crisp = CrispMatrix::from_values(&[vec![0.0, 0.5], vec![1.0, 0.25]]).unwrap();
        assert_eq!(crisp.nrows(), 2);
        assert_eq!(crisp.ncols(), 2);
        assert!(crisp.is_fully_defined());
    }

    #[test]
    fn from_values_rejects_out_of_range_and_nan() {
        assert!(matches!(
            CrispMatrix::from_values(&[vec![0.5, 1.5]]),
            Err(DematelError::InvalidCrispValue { row: 0, column: 1, .. })
        ));
        assert!(matches!(
            CrispMatrix::from_values(&[vec![f64::NAN]]),
            Err(DematelError::InvalidCrispValue { .. })
        ));
        assert!(matches!(
            CrispMatrix::from_values(&[vec![-0.1]]),
            Err(DematelError::InvalidCrispValue { .. })
        ));
    }

    #[test]
    fn from_values_rejects_ragged_rows() {
        assert!(matches!(
            CrispMatrix::from_values(&[vec![0.5, 0.5], vec![0.5]]),
            Err(DematelError::ShapeMismatch { .. })
        ));
    }
}
