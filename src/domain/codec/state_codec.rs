//! StateCodec - MatrixModel <-> interchange document.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use crate::domain::matrix::{Criterion, MatrixModel, MatrixSettings, Solution};

use super::{CodecError, CriterionRecord, SolutionRecord, StateDocument};

const INDENT: &[u8] = b"    ";

/// Stateless conversions between the model and its saved form.
pub struct StateCodec;

impl StateCodec {
    /// Captures every name, detail, importance and stored rating, in order.
    pub fn export_state(model: &MatrixModel) -> StateDocument {
        StateDocument {
            criteria: model
                .criteria()
                .iter()
                .map(|c| CriterionRecord {
                    name: c.name().to_string(),
                    details: c.details().to_string(),
                    importance: c.importance(),
                    states: c.states().clone(),
                })
                .collect(),
            solutions: model
                .solutions()
                .iter()
                .map(|s| SolutionRecord {
                    name: s.name().to_string(),
                    details: s.details().to_string(),
                })
                .collect(),
        }
    }

    /// Builds a fresh model from a document.
    ///
    /// Entities receive new identifiers. Empty sections are malformed;
    /// sections over the configured caps fail with `CapacityExceeded`.
    pub fn import_state(
        document: &StateDocument,
        settings: MatrixSettings,
    ) -> Result<MatrixModel, CodecError> {
        let criteria = document
            .criteria
            .iter()
            .map(|r| {
                Criterion::new(r.name.clone(), r.importance)
                    .with_details(r.details.clone())
                    .with_states(r.states.clone())
            })
            .collect();
        let solutions = document
            .solutions
            .iter()
            .map(|r| Solution::new(r.name.clone(), r.details.clone()))
            .collect();

        Ok(MatrixModel::from_parts(settings, criteria, solutions)?)
    }

    /// Serializes the model as four-space indented JSON.
    pub fn encode(model: &MatrixModel) -> Result<String, CodecError> {
        let document = Self::export_state(model);
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        document
            .serialize(&mut serializer)
            .map_err(|e| CodecError::Serialization(e.to_string()))?;
        String::from_utf8(buf).map_err(|e| CodecError::Serialization(e.to_string()))
    }

    /// Parses JSON text into a model.
    pub fn decode(text: &str, settings: MatrixSettings) -> Result<MatrixModel, CodecError> {
        let document = Self::parse_document(text)?;
        Self::import_state(&document, settings)
    }

    /// Parses JSON text into a document, leniently per element.
    pub fn parse_document(text: &str) -> Result<StateDocument, CodecError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| CodecError::malformed(format!("invalid JSON: {}", e)))?;
        StateDocument::from_value(&value)
    }
}
