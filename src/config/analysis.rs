//! Analysis engine configuration

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::dematel::AnalysisOptions;

/// Hard ceiling for `max_order`; inversion is O(n³) in 28-digit decimals.
pub const MAX_ORDER_CEILING: usize = 500;

/// DEMATEL analysis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Largest accepted matrix order
    #[serde(default = "default_max_order")]
    pub max_order: usize,

    /// Pivot magnitude at or below which a matrix counts as singular
    #[serde(default = "default_singularity_tolerance")]
    pub singularity_tolerance: f64,

    /// Reject submissions with missing criterion weights
    #[serde(default = "default_require_weights")]
    pub require_weights: bool,
}

impl AnalysisConfig {
    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_order == 0 || self.max_order > MAX_ORDER_CEILING {
            return Err(ValidationError::InvalidMaxOrder {
                max: MAX_ORDER_CEILING,
            });
        }
        if !(self.singularity_tolerance > 0.0 && self.singularity_tolerance < 1e-2) {
            return Err(ValidationError::InvalidSingularityTolerance);
        }
        Ok(())
    }

    /// Convert to analyzer options
    pub fn to_options(&self) -> Result<AnalysisOptions, ValidationError> {
        self.validate()?;
        let singularity_tolerance = Decimal::from_f64(self.singularity_tolerance)
            .filter(|t| !t.is_zero())
            .ok_or(ValidationError::InvalidSingularityTolerance)?;

        Ok(AnalysisOptions {
            max_order: self.max_order,
            singularity_tolerance,
            require_weights: self.require_weights,
        })
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_order: default_max_order(),
            singularity_tolerance: default_singularity_tolerance(),
            require_weights: default_require_weights(),
        }
    }
}

fn default_max_order() -> usize {
    50
}

fn default_singularity_tolerance() -> f64 {
    1e-12
}

fn default_require_weights() -> bool {
    true
}
