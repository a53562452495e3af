//! Data-source schemas: type inference over one example payload.

pub mod infer;
pub mod schema;

pub use infer::{infer_schema, infer_schema_from_json, InferError};
pub use schema::{DataSourceSchema, DATA_SOURCE_ROOT};
