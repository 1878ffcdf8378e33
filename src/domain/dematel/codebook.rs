//! Linguistic Codebook - Fuzzy linguistic influence scale and its crisp decoding.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

use crate::domain::foundation::ValidationError;

/// Seven-point fuzzy linguistic influence scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum LinguisticTerm {
    #[serde(rename = "ALI")]
    AbsolutelyLow = 0,
    #[serde(rename = "LI")]
    Low = 1,
    #[serde(rename = "FLI")]
    FairlyLow = 2,
    #[serde(rename = "MI")]
    Medium = 3,
    #[serde(rename = "FHI")]
    FairlyHigh = 4,
    #[serde(rename = "HI")]
    High = 5,
    #[serde(rename = "AHI")]
    AbsolutelyHigh = 6,
}

/// Fuzzy pair backing a linguistic term.
///
/// Values are stored in tenths so the expected value can be computed exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzyPair {
    a: [u8; 4],
    b: [u8; 4],
}

impl FuzzyPair {
    const fn tenths(a: [u8; 4], b: [u8; 4]) -> Self {
        Self { a, b }
    }

    /// Returns the `a` quadruple.
    pub fn a(&self) -> [f64; 4] {
        self.a.map(|v| f64::from(v) / 10.0)
    }

    /// Returns the `b` quadruple.
    pub fn b(&self) -> [f64; 4] {
        self.b.map(|v| f64::from(v) / 10.0)
    }

    /// Mean of all eight values: `(sum(a) + sum(b)) / 8`.
    pub fn expected_value(&self) -> Decimal {
        let tenths: u32 = self.a.iter().chain(self.b.iter()).map(|&v| u32::from(v)).sum();
        Decimal::new(i64::from(tenths), 1) / Decimal::from(8u8)
    }
}

/// Indexed by `LinguisticTerm as usize`.
static CODEBOOK: [FuzzyPair; 7] = [
    FuzzyPair::tenths([0, 0, 0, 0], [0, 0, 0, 0]),
    FuzzyPair::tenths([0, 1, 2, 3], [0, 1, 2, 3]),
    FuzzyPair::tenths([1, 2, 3, 4], [0, 2, 3, 5]),
    FuzzyPair::tenths([3, 4, 5, 6], [2, 4, 5, 7]),
    FuzzyPair::tenths([5, 6, 7, 8], [4, 6, 7, 9]),
    FuzzyPair::tenths([7, 8, 9, 10], [7, 8, 9, 10]),
    FuzzyPair::tenths([10, 10, 10, 10], [10, 10, 10, 10]),
];

impl LinguisticTerm {
    /// All terms from lowest to highest influence.
    pub const ALL: [LinguisticTerm; 7] = [
        LinguisticTerm::AbsolutelyLow,
        LinguisticTerm::Low,
        LinguisticTerm::FairlyLow,
        LinguisticTerm::Medium,
        LinguisticTerm::FairlyHigh,
        LinguisticTerm::High,
        LinguisticTerm::AbsolutelyHigh,
    ];

    /// Returns the uppercase token used in assessment matrices.
    pub fn symbol(&self) -> &'static str {
        match self {
            LinguisticTerm::AbsolutelyLow => "ALI",
            LinguisticTerm::Low => "LI",
            LinguisticTerm::FairlyLow => "FLI",
            LinguisticTerm::Medium => "MI",
            LinguisticTerm::FairlyHigh => "FHI",
            LinguisticTerm::High => "HI",
            LinguisticTerm::AbsolutelyHigh => "AHI",
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            LinguisticTerm::AbsolutelyLow => "Absolutely Low Influence",
            LinguisticTerm::Low => "Low Influence",
            LinguisticTerm::FairlyLow => "Fairly Low Influence",
            LinguisticTerm::Medium => "Medium Influence",
            LinguisticTerm::FairlyHigh => "Fairly High Influence",
            LinguisticTerm::High => "High Influence",
            LinguisticTerm::AbsolutelyHigh => "Absolutely High Influence",
        }
    }

    /// Returns the fuzzy pair from the codebook.
    pub fn fuzzy_pair(&self) -> &'static FuzzyPair {
        &CODEBOOK[*self as usize]
    }

    /// Returns the crisp expected value.
    pub fn expected_value(&self) -> Decimal {
        self.fuzzy_pair().expected_value()
    }
}

impl fmt::Display for LinguisticTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for LinguisticTerm {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.is_empty() {
            return Err(ValidationError::empty_field("term"));
        }
        LinguisticTerm::ALL
            .iter()
            .copied()
            .find(|term| term.symbol().eq_ignore_ascii_case(token))
            .ok_or_else(|| {
                ValidationError::invalid_format("term", format!("unknown linguistic term '{}'", token))
            })
    }
}

/// Result of decoding one assessment cell.
///
/// `Undefined` is an explicit marker for tokens outside the codebook; it never
/// collapses to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrispValue {
    Defined(Decimal),
    Undefined,
}

impl CrispValue {
    /// Returns the decimal value, if defined.
    pub fn value(&self) -> Option<Decimal> {
        match self {
            CrispValue::Defined(v) => Some(*v),
            CrispValue::Undefined => None,
        }
    }

    /// Returns true unless this is the undefined marker.
    pub fn is_defined(&self) -> bool {
        matches!(self, CrispValue::Defined(_))
    }

    /// Converts to `f64`; the undefined marker becomes NaN.
    pub fn to_f64(&self) -> f64 {
        match self {
            CrispValue::Defined(v) => v.to_f64().unwrap_or(f64::NAN),
            CrispValue::Undefined => f64::NAN,
        }
    }
}

/// Decoder from raw tokens to crisp values.
pub struct Codebook;

impl Codebook {
    /// Decodes a token; anything that does not parse as a term is undefined.
    pub fn decode(token: &str) -> CrispValue {
        match token.parse::<LinguisticTerm>() {
            Ok(term) => CrispValue::Defined(term.expected_value()),
            Err(err) => {
                trace!(token, error = %err, "token outside the codebook");
                CrispValue::Undefined
            }
        }
    }

    /// Returns every term with its fuzzy pair.
    pub fn entries() -> impl Iterator<Item = (LinguisticTerm, &'static FuzzyPair)> {
        LinguisticTerm::ALL.into_iter().map(|term| (term, term.fuzzy_pair()))
    }
}
