//! Data-mapping evaluation: reference paths and the interpolate operator.

pub mod eval;
pub mod path;

use crate::schema::DataMappingOperator;

pub use eval::output;
pub use path::{PathSegment, RefPath};

/// Errors from reference parsing and mapping evaluation.
#[derive(Debug, thiserror::Error)]
pub enum BindingError {
    #[error("malformed reference '{path}': {message}")]
    Ref { path: String, message: String },
    #[error("reference '{0}' does not resolve against the data-source example")]
    PathUnresolved(String),
    #[error("unsupported mapping operator: {0}")]
    UnsupportedOperator(DataMappingOperator),
}
