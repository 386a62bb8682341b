//! Interchange document types and lenient parsing.
//!
//! ```json
//! {
//!     "criteria": [
//!         { "name": "Cost", "details": "", "importance": "Low",
//!           "states": { "A": "S", "B": "+" } }
//!     ],
//!     "solutions": [ { "name": "A", "details": "" } ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use tracing::warn;

use crate::domain::foundation::{Importance, RatingCell};

use super::CodecError;

/// Saved criterion row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionRecord {
    pub name: String,
    pub details: String,
    pub importance: Importance,
    pub states: BTreeMap<String, RatingCell>,
}

/// Saved solution column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolutionRecord {
    pub name: String,
    pub details: String,
}

/// The whole saved matrix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDocument {
    pub criteria: Vec<CriterionRecord>,
    pub solutions: Vec<SolutionRecord>,
}

impl StateDocument {
    /// Reads a document from parsed JSON.
    ///
    /// The two top-level lists are mandatory; everything inside an element is
    /// optional and falls back to its default.
    pub fn from_value(value: &Value) -> Result<Self, CodecError> {
        let root = value
            .as_object()
            .ok_or_else(|| CodecError::malformed("top level must be an object"))?;

        let criteria = required_list(root, "criteria")?
            .iter()
            .enumerate()
            .map(|(i, v)| CriterionRecord::from_value(i, v))
            .collect();
        let solutions = required_list(root, "solutions")?
            .iter()
            .enumerate()
            .map(|(i, v)| SolutionRecord::from_value(i, v))
            .collect();

        Ok(Self {
            criteria,
            solutions,
        })
    }
}

impl CriterionRecord {
    fn from_value(index: usize, value: &Value) -> Self {
        let Some(fields) = element_fields(index, "criteria", value) else {
            return Self::default();
        };

        let importance = match fields.get("importance") {
            None => Importance::default(),
            Some(v) => v.as_str().and_then(Importance::from_label).unwrap_or_else(|| {
                warn!(index, importance = %v, "unknown importance, using Low");
                Importance::default()
            }),
        };

        Self {
            name: text_field(fields, "name"),
            details: text_field(fields, "details"),
            importance,
            states: states_field(index, fields),
        }
    }
}

impl SolutionRecord {
    fn from_value(index: usize, value: &Value) -> Self {
        match element_fields(index, "solutions", value) {
            Some(fields) => Self {
                name: text_field(fields, "name"),
                details: text_field(fields, "details"),
            },
            None => Self::default(),
        }
    }
}

fn required_list<'a>(root: &'a Map<String, Value>, key: &str) -> Result<&'a Vec<Value>, CodecError> {
    match root.get(key) {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(CodecError::malformed(format!("'{}' must be a list", key))),
        None => Err(CodecError::malformed(format!("missing '{}' list", key))),
    }
}

fn element_fields<'a>(index: usize, section: &str, value: &'a Value) -> Option<&'a Map<String, Value>> {
    let fields = value.as_object();
    if fields.is_none() {
        warn!(section, index, "element is not an object, using defaults");
    }
    fields
}

fn text_field(fields: &Map<String, Value>, key: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn states_field(index: usize, fields: &Map<String, Value>) -> BTreeMap<String, RatingCell> {
    let Some(raw) = fields.get("states") else {
        return BTreeMap::new();
    };
    let Some(entries) = raw.as_object() else {
        warn!(index, "criterion states is not a mapping, ignoring");
        return BTreeMap::new();
    };

    entries
        .iter()
        .filter_map(|(solution, symbol)| {
            match symbol.as_str().and_then(RatingCell::from_symbol) {
                Some(cell) => Some((solution.clone(), cell)),
                None => {
                    warn!(index, solution = %solution, symbol = %symbol, "unknown rating symbol dropped");
                    None
                }
            }
        })
        .collect()
}
