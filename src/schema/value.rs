//! Runtime value typing for example payloads and mapping outputs.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The type tag carried by data-source schema nodes and mapping outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Object,
    Array,
    Number,
    String,
    Boolean,
}

impl ValueType {
    /// Probe the runtime type of a JSON value.
    ///
    /// Returns `None` for `null` — the serde surface for every example value
    /// the engine does not support (functions, dates, missing data).
    pub fn of(value: &Value) -> Option<Self> {
        match value {
            Value::Object(_) => Some(Self::Object),
            Value::Array(_) => Some(Self::Array),
            Value::Number(_) => Some(Self::Number),
            Value::String(_) => Some(Self::String),
            Value::Bool(_) => Some(Self::Boolean),
            Value::Null => None,
        }
    }

    /// The lowercase name used in serialized schemas.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
        }
    }

    /// Whether values of this type carry nested fields.
    pub fn is_composite(self) -> bool {
        matches!(self, Self::Object | Self::Array)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
