//! Schema inference: build a [`DataSourceSchema`] from one example value.
//!
//! The walk is a breadth-first pass over paired worklists: one of
//! `(field name, example sub-value)` pairs, one of slot indices into a flat
//! output arena, advanced in lockstep. Children always land behind their
//! parent, so a single reverse pass can graft every subtree before its
//! parent is taken.

use std::collections::VecDeque;

use serde_json::Value;

use super::schema::DataSourceSchema;
use crate::schema::ValueType;

/// Errors from schema inference.
#[derive(Debug, thiserror::Error)]
pub enum InferError {
    #[error("field '{field}' has an unsupported example type")]
    UnsupportedType { field: String },
    #[error("example payload is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

struct Slot {
    schema: Option<DataSourceSchema>,
    children: Vec<usize>,
}

impl Slot {
    fn blank() -> Self {
        Self {
            schema: None,
            children: Vec::new(),
        }
    }
}

/// Infer the schema of `example`, naming the root node `name`.
///
/// Objects recurse into every key in order; arrays recurse into their first
/// element only, which becomes the representative field for every item.
/// Scalars terminate. A `null` anywhere fails with
/// [`InferError::UnsupportedType`].
pub fn infer_schema(name: &str, example: &Value) -> Result<DataSourceSchema, InferError> {
    let mut slots = vec![Slot::blank()];
    let mut work: VecDeque<(String, &Value, usize)> = VecDeque::new();
    work.push_back((name.to_owned(), example, 0));

    while let Some((key, value, at)) = work.pop_front() {
        let value_type = ValueType::of(value).ok_or(InferError::UnsupportedType {
            field: key.clone(),
        })?;

        match value {
            Value::Array(items) => {
                if let Some(first) = items.first() {
                    let child = slots.len();
                    slots.push(Slot::blank());
                    slots[at].children.push(child);
                    work.push_back(("0".to_owned(), first, child));
                }
            }
            Value::Object(entries) => {
                for (field, sub_value) in entries {
                    let child = slots.len();
                    slots.push(Slot::blank());
                    slots[at].children.push(child);
                    work.push_back((field.clone(), sub_value, child));
                }
            }
            _ => {}
        }

        slots[at].schema = Some(DataSourceSchema {
            name: key,
            value_type,
            example: value.clone(),
            fields: None,
        });
    }

    let mut built: Vec<Option<DataSourceSchema>> = Vec::new();
    built.resize_with(slots.len(), || None);
    for at in (0..slots.len()).rev() {
        let slot = std::mem::replace(&mut slots[at], Slot::blank());
        let mut schema = slot.schema.expect("every slot is visited by the walk");
        if !slot.children.is_empty() {
            let fields = slot
                .children
                .into_iter()
                .map(|child| built[child].take().expect("children build before parents"))
                .collect();
            schema.fields = Some(fields);
        }
        built[at] = Some(schema);
    }

    Ok(built[0].take().expect("root slot is always built"))
}

/// Infer a schema from a JSON text payload, as supplied by the
/// example-payload collaborator.
pub fn infer_schema_from_json(name: &str, payload: &str) -> Result<DataSourceSchema, InferError> {
    let example: Value = serde_json::from_str(payload)?;
    infer_schema(name, &example)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::DATA_SOURCE_ROOT;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn scalar_example() {
        let schema = infer_schema("flag", &json!(true)).unwrap();
        assert_eq!(schema.value_type, ValueType::Boolean);
        assert_eq!(schema.example, json!(true));
        assert!(schema.fields.is_none());
    }

    #[test]
    fn object_fields_keep_key_order() {
        let schema = infer_schema(
            DATA_SOURCE_ROOT,
            &json!({ "title": "hi", "count": 3, "done": false }),
        )
        .unwrap();
        let names: Vec<&str> = schema.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["title", "count", "done"]);
        assert_eq!(schema.fields()[1].value_type, ValueType::Number);
    }

    #[test]
    fn array_stores_one_representative_field() {
        let schema = infer_schema(
            DATA_SOURCE_ROOT,
            &json!({ "list": [{ "id": 1, "name": "a" }, { "id": 2, "name": "b" }] }),
        )
        .unwrap();
        let list = schema.field("list").unwrap();
        assert_eq!(list.value_type, ValueType::Array);
        assert_eq!(list.fields().len(), 1);
        let element = list.element().unwrap();
        assert_eq!(element.name, "0");
        assert_eq!(element.fields().len(), 2);
        // The representative element is derived from element 0 only.
        assert_eq!(element.field("name").unwrap().example, json!("a"));
    }

    #[test]
    fn empty_composites_carry_no_fields() {
        let schema = infer_schema("data", &json!({ "list": [], "obj": {} })).unwrap();
        assert!(schema.field("list").unwrap().fields.is_none());
        assert!(schema.field("obj").unwrap().fields.is_none());
    }

    #[test]
    fn every_node_retains_its_example() {
        let example = json!({ "user": { "name": "A" } });
        let schema = infer_schema("data", &example).unwrap();
        assert_eq!(schema.example, example);
        assert_eq!(schema.field("user").unwrap().example, json!({ "name": "A" }));
        assert_eq!(
            schema.field("user").unwrap().field("name").unwrap().example,
            json!("A")
        );
    }

    #[test]
    fn null_is_rejected() {
        let err = infer_schema("data", &json!({ "bad": null })).unwrap_err();
        assert!(matches!(err, InferError::UnsupportedType { field } if field == "bad"));
    }

    #[test]
    fn nested_null_is_rejected() {
        let err = infer_schema("data", &json!({ "list": [{ "x": null }] })).unwrap_err();
        assert!(matches!(err, InferError::UnsupportedType { field } if field == "x"));
    }

    #[test]
    fn json_text_entry_point() {
        let schema = infer_schema_from_json("data", r#"{ "a": 1 }"#).unwrap();
        assert_eq!(schema.field("a").unwrap().value_type, ValueType::Number);
        assert!(infer_schema_from_json("data", "not json").is_err());
    }
}
