//! State schemas: named, derived values computed from a data-source field.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::source::DataSourceSchema;

/// Operator used to derive a state from a data-source field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateOperator {
    Interpolate,
    Map,
    Filter,
    Reduce,
}

impl fmt::Display for StateOperator {
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

/// How a state is recomputed: operator, its inputs, and the shape of the
/// result.
///
/// `input` holds the bracket-form reference path into the data source and,
/// for `filter`, the field name the filter compares against. `output`
/// describes the derived value's shape as a data-source schema, so a state
/// can itself be referenced like any other source field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateCalculation {
    pub operator: StateOperator,
    pub input: Vec<String>,
    pub output: DataSourceSchema,
}

/// A named derived value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateSchema {
    pub name: String,
    pub calculation: StateCalculation,
}

/// States keyed by name, insertion ordered. Later states may reference
/// earlier ones; cycles are not checked.
pub type StateCollection = IndexMap<String, StateSchema>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ValueType;
    use serde_json::json;

    #[test]
    fn state_schema_round_trips() {
        let state = StateSchema {
            name: "visibleRows".into(),
            calculation: StateCalculation {
                operator: StateOperator::Filter,
                input: vec!["data.rows".into(), "kind".into()],
                output: DataSourceSchema {
                    name: "visibleRows".into(),
                    value_type: ValueType::Object,
                    example: json!({ "kind": "a" }),
                    fields: None,
                },
            },
        };
        let text = serde_json::to_string(&state).unwrap();
        let back: StateSchema = serde_json::from_str(&text).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn operator_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&StateOperator::Filter).unwrap(), "\"filter\"");
        assert_eq!(StateOperator::Interpolate.to_string(), "interpolate");
    }
}
