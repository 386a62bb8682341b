//! Criterion importance value object (Low/Medium/High weights).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Weight multiplying a criterion's per-solution rating score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Importance {
    #[default]
    Low = 1,
    Medium = 2,
    High = 3,
}

impl Importance {
    /// Returns the integer weight.
    pub fn weight(&self) -> i32 {
        *self as i32
    }

    /// Returns the wire label.
    pub fn label(&self) -> &'static str {
        match self {
            Importance::Low => "Low",
            Importance::Medium => "Medium",
            Importance::High => "High",
        }
    }

    /// Parses the exact wire label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Low" => Some(Importance::Low),
            "Medium" => Some(Importance::Medium),
            "High" => Some(Importance::High),
            _ => None,
        }
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Importance {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" | "1" => Ok(Importance::Low),
            "medium" | "2" => Ok(Importance::Medium),
            "high" | "3" => Ok(Importance::High),
            _ => Err(ValidationError::invalid_format(
                "importance",
                format!("expected Low, Medium or High, got '{}'", s),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_are_one_two_three() {
        assert_eq!(Importance::Low.weight(), 1);
        assert_eq!(Importance::Medium.weight(), 2);
        assert_eq!(Importance::High.weight(), 3);
    }

    #[test]
    fn default_is_low() {
        assert_eq!(Importance::default(), Importance::Low);
    }

    #[test]
    fn from_label_is_exact() {
        assert_eq!(Importance::from_label("Medium"), Some(Importance::Medium));
        assert_eq!(Importance::from_label("medium"), None);
        assert_eq!(Importance::from_label(""), None);
    }

    #[test]
    fn parses_loosely_from_user_input() {
        assert_eq!("HIGH".parse::<Importance>().unwrap(), Importance::High);
        assert_eq!(" medium ".parse::<Importance>().unwrap(), Importance::Medium);
        assert_eq!("1".parse::<Importance>().unwrap(), Importance::Low);
        assert!("critical".parse::<Importance>().is_err());
    }

    #[test]
    fn serializes_as_label() {
        assert_eq!(serde_json::to_string(&Importance::High).unwrap(), "\"High\"");
        let parsed: Importance = serde_json::from_str("\"Low\"").unwrap();
        assert_eq!(parsed, Importance::Low);
    }
}
