//! Rating cell value object for the Pugh matrix (four-state cycle).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Rating of one solution against one criterion, relative to the baseline.
///
/// Serialized as its one-character symbol (`" "`, `"+"`, `"-"`, `"S"`),
/// which is the interchange format for saved matrices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatingCell {
    #[default]
    #[serde(rename = " ")]
    Unset,
    #[serde(rename = "+")]
    Better,
    #[serde(rename = "-")]
    Worse,
    #[serde(rename = "S")]
    Same,
}

impl RatingCell {
    /// All states in cycle order.
    pub const CYCLE: [RatingCell; 4] = [
        RatingCell::Unset,
        RatingCell::Better,
        RatingCell::Worse,
        RatingCell::Same,
    ];

    /// Returns the next state: `Unset -> Better -> Worse -> Same -> Unset`.
    pub fn advance(self) -> Self {
        match self {
            RatingCell::Unset => RatingCell::Better,
            RatingCell::Better => RatingCell::Worse,
            RatingCell::Worse => RatingCell::Same,
            RatingCell::Same => RatingCell::Unset,
        }
    }

    /// Returns the unweighted score contribution.
    pub fn score(self) -> i32 {
        match self {
            RatingCell::Better => 1,
            RatingCell::Worse => -1,
            RatingCell::Same | RatingCell::Unset => 0,
        }
    }

    /// Returns the wire symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            RatingCell::Unset => " ",
            RatingCell::Better => "+",
            RatingCell::Worse => "-",
            RatingCell::Same => "S",
        }
    }

    /// Parses a wire symbol. Only the four exact symbols are accepted.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            " " => Some(RatingCell::Unset),
            "+" => Some(RatingCell::Better),
            "-" => Some(RatingCell::Worse),
            "S" => Some(RatingCell::Same),
            _ => None,
        }
    }

    /// Returns the display label.
    pub fn label(self) -> &'static str {
        match self {
            RatingCell::Unset => "Unset",
            RatingCell::Better => "Better",
            RatingCell::Worse => "Worse",
            RatingCell::Same => "Same",
        }
    }

    /// Returns true if the cell has been rated.
    pub fn is_set(self) -> bool {
        self != RatingCell::Unset
    }
}

impl fmt::Display for RatingCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for RatingCell {
    type Err = ValidationError;

    /// Accepts the wire symbols plus the labels (case-insensitive), so
    /// command-line users can type `better` instead of `+`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(cell) = Self::from_symbol(s) {
            return Ok(cell);
        }
        match s.trim().to_lowercase().as_str() {
            "" | "unset" | "none" => Ok(RatingCell::Unset),
            "better" | "plus" => Ok(RatingCell::Better),
            "worse" | "minus" => Ok(RatingCell::Worse),
            "same" | "s" => Ok(RatingCell::Same),
            _ => Err(ValidationError::invalid_format(
                "rating",
                format!("expected one of ' ', '+', '-', 'S', got '{}'", s),
            )),
        }
    }
}
