//! Data mappings: how a widget's display slots are bound to a data source.
//!
//! Each widget carries a map from slot name (`text`, `url`, `list`, ...) to a
//! [`DataMappingEntry`]. An entry holds a literal fallback value and,
//! optionally, an operation referencing a path into the active data-source
//! example. List widgets bind their repeating items through the `list` slot.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::value::ValueType;

/// Operator applied when a mapping is materialized.
///
/// Only `interpolate` is evaluated today; the other operators are declared
/// for schema compatibility and rejected by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataMappingOperator {
    Interpolate,
    Map,
    Filter,
    Reduce,
}

impl fmt::Display for DataMappingOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Interpolate => "interpolate",
            Self::Map => "map",
            Self::Filter => "filter",
            Self::Reduce => "reduce",
        };
        f.write_str(name)
    }
}

/// A mapping operation: reference path, operator, and the expected output type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataMappingOperation {
    /// Bracket-form reference into the data-source example, e.g.
    /// `data.list[0].name`.
    #[serde(rename = "ref")]
    pub ref_path: String,
    pub operator: DataMappingOperator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<ValueType>,
}

impl DataMappingOperation {
    /// An interpolate operation over `ref_path` with the given output type.
    pub fn interpolate(ref_path: impl Into<String>, output: Option<ValueType>) -> Self {
        Self {
            ref_path: ref_path.into(),
            operator: DataMappingOperator::Interpolate,
            output,
        }
    }
}

/// One slot binding: a literal value plus optional operation and state link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataMappingEntry {
    /// Literal slot content, used directly when no operation is configured.
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub data: Value,
    /// Binding into the component's data-source example.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<DataMappingOperation>,
    /// Binding into a named state's output instead of the raw data source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<DataMappingOperation>,
}

impl DataMappingEntry {
    /// An entry carrying only literal data.
    pub fn literal(data: impl Into<Value>) -> Self {
        Self {
            data: data.into(),
            operation: None,
            state: None,
        }
    }

    /// Attach an operation (builder).
    pub fn with_operation(mut self, operation: Option<DataMappingOperation>) -> Self {
        self.operation = operation;
        self
    }

    /// Attach a state binding (builder).
    pub fn with_state(mut self, state: Option<DataMappingOperation>) -> Self {
        self.state = state;
        self
    }
}

/// Insertion-ordered map from slot name to entry.
pub type DataMappingMap = IndexMap<String, DataMappingEntry>;
