//! The data-source schema: a recursive type description of one example
//! payload.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::ValueType;

/// Root field name given to an inferred data source. Reference paths start
/// with it (`data.list[0].name`).
pub const DATA_SOURCE_ROOT: &str = "data";

/// One node in the inferred type description.
///
/// `fields` is populated only for objects and arrays that actually have
/// content; an array stores exactly one representative field, derived from
/// its first element. Every node keeps its `example` sub-value so reference
/// paths can be resolved against it later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSourceSchema {
    pub name: String,
    #[serde(rename = "type")]
    pub value_type: ValueType,
    pub example: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<DataSourceSchema>>,
}

impl DataSourceSchema {
    /// The nested fields, or an empty slice for scalars and empty composites.
    pub fn fields(&self) -> &[DataSourceSchema] {
        self.fields.as_deref().unwrap_or_default()
    }

    /// Look up a direct field by name.
    pub fn field(&self, name: &str) -> Option<&DataSourceSchema> {
        self.fields().iter().find(|field| field.name == name)
    }

    /// For an array schema, the representative element schema.
    pub fn element(&self) -> Option<&DataSourceSchema> {
        if self.value_type == ValueType::Array {
            self.fields().first()
        } else {
            None
        }
    }
}
