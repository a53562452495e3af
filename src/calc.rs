//! State calculation: derive named, reusable values from a data-source
//! schema.
//!
//! Exporting a state walks the source's fields along the user-selected path
//! and records the derived shape as a data-source schema of its own, so the
//! state can be referenced later like any other field. Deriving accessors
//! turns declared `filter` states into runtime closures over the evaluated
//! example data.

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::binding::{self, BindingError, RefPath};
use crate::form::StateFormData;
use crate::schema::{
    ComponentSchema, DataMappingOperation, StateCalculation, StateCollection, StateOperator,
    StateSchema, ValueType,
};
use crate::source::DataSourceSchema;

/// Errors from state export and accessor derivation.
#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    #[error("state '{state}': '{path}' must be an array to filter")]
    TypeMismatch { state: String, path: String },
    #[error("unsupported state operator: {0}")]
    UnsupportedOperator(StateOperator),
    #[error("field '{segment}' not found under '{parent}'")]
    UnknownField { segment: String, parent: String },
    #[error("array '{0}' has no element schema to derive a state from")]
    UnshapedArray(String),
    #[error("filter state '{0}' needs a filter field name")]
    MissingFilterField(String),
    #[error("no data source schema is attached")]
    MissingDataSource,
    #[error(transparent)]
    Binding(#[from] BindingError),
}

/// A derived state accessor: given a probe key, returns the matching items.
pub type StateAccessor = Box<dyn Fn(&Value) -> Vec<Value>>;

/// Walk `source` along the selected field path and return the field the last
/// segment names. A leading segment equal to the source's own name is the
/// picker's root entry and is skipped.
fn narrow<'a>(
    source: &'a DataSourceSchema,
    path: &[String],
) -> Result<&'a DataSourceSchema, CalcError> {
    let mut segments = path;
    if segments.first().map(String::as_str) == Some(source.name.as_str()) && segments.len() > 1 {
        segments = &segments[1..];
    }

    let mut scope = source;
    for segment in segments {
        scope = scope.field(segment).ok_or_else(|| CalcError::UnknownField {
            segment: segment.clone(),
            parent: scope.name.clone(),
        })?;
    }
    Ok(scope)
}

/// Export a state schema from the state form.
///
/// For `filter` the narrowed field must be an array; the state's output
/// shape is the array's representative element schema, renamed to the state
/// itself — from the schema's point of view the derived state looks exactly
/// like one element of the source list. Every other operator is an explicit
/// [`CalcError::UnsupportedOperator`].
pub fn export_state_schema(
    form: &StateFormData,
    source: &DataSourceSchema,
) -> Result<StateSchema, CalcError> {
    let field = narrow(source, &form.data_source)?;
    let ref_path = RefPath::from_fields(&form.data_source).to_string();

    let output = match form.state_operator {
        StateOperator::Filter => {
            if field.value_type != ValueType::Array {
                return Err(CalcError::TypeMismatch {
                    state: form.name.clone(),
                    path: ref_path,
                });
            }
            let element = field
                .element()
                .ok_or_else(|| CalcError::UnshapedArray(field.name.clone()))?;
            let mut output = element.clone();
            output.name = form.name.clone();
            output
        }
        other => return Err(CalcError::UnsupportedOperator(other)),
    };

    let mut input = vec![ref_path];
    if let Some(filter_field) = &form.filter_field {
        input.push(filter_field.clone());
    }

    debug!(state = %form.name, operator = %form.state_operator, "exported state schema");
    Ok(StateSchema {
        name: form.name.clone(),
        calculation: StateCalculation {
            operator: form.state_operator,
            input,
            output,
        },
    })
}

/// Derive runtime accessors for every state the component declares.
///
/// `filter` states evaluate their input path through the data-mapping
/// evaluator once and capture the resulting array; the accessor filters it
/// by equality on the configured field. States with any other operator
/// register no accessor — they are simply absent from the result, matching
/// how the editor treats them today.
pub fn convert_schema_to_states(
    component: &ComponentSchema,
) -> Result<IndexMap<String, StateAccessor>, CalcError> {
    derive_state_accessors(component.props.data_source_schema.as_ref(), &component.states)
}

/// Accessor derivation over an explicit source/state pair, for callers that
/// hold the pieces outside a component envelope.
pub fn derive_state_accessors(
    source: Option<&DataSourceSchema>,
    states: &StateCollection,
) -> Result<IndexMap<String, StateAccessor>, CalcError> {
    let mut result: IndexMap<String, StateAccessor> = IndexMap::new();
    let Some(source) = source else {
        return Ok(result);
    };

    for (name, state) in states {
        if state.calculation.operator != StateOperator::Filter {
            continue;
        }

        let ref_path = state.calculation.input.first().cloned().unwrap_or_default();
        let operation = DataMappingOperation::interpolate(ref_path, None);
        let data = binding::output(Some(&operation), Some(source))?.unwrap_or(Value::Null);
        let Value::Array(items) = data else {
            return Err(CalcError::TypeMismatch {
                state: name.clone(),
                path: operation.ref_path,
            });
        };

        let filter_field = state
            .calculation
            .input
            .get(1)
            .cloned()
            .ok_or_else(|| CalcError::MissingFilterField(name.clone()))?;

        let accessor: StateAccessor = Box::new(move |key| {
            items
                .iter()
                .filter(|item| item.get(filter_field.as_str()) == Some(key))
                .cloned()
                .collect()
        });
        result.insert(name.clone(), accessor);
    }

    Ok(result)
}
