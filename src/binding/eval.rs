//! The data-mapping evaluator: resolve a slot's operation against the
//! data-source example.

use serde_json::Value;

use super::path::RefPath;
use super::BindingError;
use crate::schema::{DataMappingOperation, DataMappingOperator};
use crate::source::DataSourceSchema;

/// Materialize the value a mapping operation refers to.
///
/// `Ok(None)` when either argument is absent — a slot without a binding is a
/// valid state, not an error. Otherwise the reference is resolved against
/// the source's stored example (not live data). `interpolate` returns the
/// resolved value as-is; every other operator fails with
/// [`BindingError::UnsupportedOperator`]. Interpolate is the only mapping
/// operator implemented today — keep the failure loud rather than guessing
/// semantics for the rest.
pub fn output(
    operation: Option<&DataMappingOperation>,
    source: Option<&DataSourceSchema>,
) -> Result<Option<Value>, BindingError> {
    let (Some(operation), Some(source)) = (operation, source) else {
        return Ok(None);
    };

    let path = RefPath::parse(&operation.ref_path)?;
    let resolved = path
        .resolve(&source.name, &source.example)
        .ok_or_else(|| BindingError::PathUnresolved(operation.ref_path.clone()))?;

    match operation.operator {
        DataMappingOperator::Interpolate => Ok(Some(resolved.clone())),
        other => Err(BindingError::UnsupportedOperator(other)),
    }
}
