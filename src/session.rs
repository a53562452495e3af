//! The editor session: one widget schema, one data source, one state
//! collection.
//!
//! Everything the evaluator and state calculator need is threaded through
//! this context explicitly — there is no ambient global state, so sessions
//! can coexist and engine functions stay reentrant.

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::binding::{self, BindingError};
use crate::calc::{self, CalcError, StateAccessor};
use crate::form::StateFormData;
use crate::schema::{
    ComponentProps, ComponentSchema, DataMappingOperation, StateCollection, StateSchema,
    WidgetSchema,
};
use crate::source::{self, DataSourceSchema, InferError, DATA_SOURCE_ROOT};
use crate::tree::{self, WidgetTree};

/// The fixed logical key the persistence collaborator stores the schema
/// blob under.
pub const SCHEMA_STORAGE_KEY: &str = "schema";

/// Session-scoped state with single-writer semantics.
#[derive(Default)]
pub struct Session {
    widget: Option<WidgetSchema>,
    data_source: Option<DataSourceSchema>,
    states: StateCollection,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// The persisted widget-family schema, the session's source of truth.
    pub fn widget_schema(&self) -> Option<&WidgetSchema> {
        self.widget.as_ref()
    }

    pub fn set_widget_schema(&mut self, schema: WidgetSchema) {
        debug!(widget = %schema.id, "widget schema replaced");
        self.widget = Some(schema);
    }

    /// The active data-source schema.
    pub fn data_source(&self) -> Option<&DataSourceSchema> {
        self.data_source.as_ref()
    }

    /// Replace the active data source. Anything derived from the previous
    /// one is stale from here on; nothing is cached beyond the current call,
    /// so replacement is just a swap.
    pub fn set_data_source(&mut self, schema: DataSourceSchema) {
        debug!(source = %schema.name, replaced = self.data_source.is_some(), "data source set");
        self.data_source = Some(schema);
    }

    /// Infer and attach a data source from a JSON example payload.
    pub fn infer_data_source(&mut self, payload: &str) -> Result<&DataSourceSchema, InferError> {
        let schema = source::infer_schema_from_json(DATA_SOURCE_ROOT, payload)?;
        self.set_data_source(schema);
        Ok(self.data_source.as_ref().expect("just set"))
    }

    /// The declared states, keyed by name.
    pub fn states(&self) -> &StateCollection {
        &self.states
    }

    /// Register a state under its own name, replacing any previous one.
    pub fn insert_state(&mut self, state: StateSchema) {
        self.states.insert(state.name.clone(), state);
    }

    /// Export a state schema from a state form against the active data
    /// source.
    pub fn export_state_schema(&self, form: &StateFormData) -> Result<StateSchema, CalcError> {
        let source = self.data_source.as_ref().ok_or(CalcError::MissingDataSource)?;
        calc::export_state_schema(form, source)
    }

    /// Evaluate a mapping operation against the active data source.
    pub fn evaluate(
        &self,
        operation: Option<&DataMappingOperation>,
    ) -> Result<Option<Value>, BindingError> {
        binding::output(operation, self.data_source.as_ref())
    }

    /// Derive runtime accessors for the session's filter states.
    pub fn state_accessors(&self) -> Result<IndexMap<String, StateAccessor>, CalcError> {
        calc::derive_state_accessors(self.data_source.as_ref(), &self.states)
    }

    /// Expand the persisted schema into an editable tree. `None` when the
    /// session holds no schema yet.
    pub fn expand_tree(&self) -> Option<WidgetTree> {
        self.widget.as_ref().map(tree::schema_to_tree)
    }

    /// Collapse an edited tree back into the session's persisted schema.
    pub fn commit_tree(&mut self, tree: &WidgetTree) -> Option<&WidgetSchema> {
        let schema = tree::tree_to_schema(tree)?;
        self.widget = Some(schema);
        self.widget.as_ref()
    }

    /// The persisted component envelope for this session.
    pub fn export_component(&self) -> ComponentSchema {
        ComponentSchema {
            widget: self.widget.clone(),
            props: ComponentProps {
                data_source_schema: self.data_source.clone(),
            },
            states: self.states.clone(),
        }
    }

    /// Restore a session from a component envelope.
    pub fn load_component(&mut self, component: ComponentSchema) {
        self.widget = component.widget;
        self.data_source = component.props.data_source_schema;
        self.states = component.states;
    }

    /// Serialize the widget schema for the persistence collaborator.
    /// `None` when there is nothing to persist.
    pub fn export_schema_json(&self) -> Option<String> {
        let schema = self.widget.as_ref()?;
        Some(serde_json::to_string(schema).expect("widget schemas always serialize"))
    }

    /// Load the widget schema from a persisted JSON blob.
    pub fn load_schema_json(&mut self, blob: &str) -> Result<&WidgetSchema, serde_json::Error> {
        let schema: WidgetSchema = serde_json::from_str(blob)?;
        debug!(widget = %schema.id, "widget schema loaded from blob");
        self.widget = Some(schema);
        Ok(self.widget.as_ref().expect("just set"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{DataMappingOperator, StateOperator, WidgetType};
    use serde_json::json;

    fn session_with_source() -> Session {
        let mut session = Session::new();
        session
            .infer_data_source(r#"{ "list": [{ "id": "1", "kind": "a" }], "title": "t" }"#)
            .unwrap();
        session
    }

    #[test]
    fn new_session_is_empty() {
        let session = Session::new();
        assert!(session.widget_schema().is_none());
        assert!(session.data_source().is_none());
        assert!(session.states().is_empty());
        assert!(session.expand_tree().is_none());
        assert!(session.export_schema_json().is_none());
    }

    #[test]
    fn inferring_attaches_the_data_source() {
        let session = session_with_source();
        let source = session.data_source().unwrap();
        assert_eq!(source.name, DATA_SOURCE_ROOT);
        assert!(source.field("list").is_some());
    }

    #[test]
    fn replacing_the_data_source_swaps_it() {
        let mut session = session_with_source();
        session.infer_data_source(r#"{ "other": 1 }"#).unwrap();
        let source = session.data_source().unwrap();
        assert!(source.field("list").is_none());
        assert!(source.field("other").is_some());
    }

    #[test]
    fn evaluate_without_a_source_is_a_soft_miss() {
        let session = Session::new();
        let operation = DataMappingOperation::interpolate("data.title", None);
        assert_eq!(session.evaluate(Some(&operation)).unwrap(), None);
    }

    #[test]
    fn evaluate_with_a_source_resolves() {
        let session = session_with_source();
        let operation = DataMappingOperation::interpolate("data.title", None);
        assert_eq!(session.evaluate(Some(&operation)).unwrap(), Some(json!("t")));
    }

    #[test]
    fn state_export_requires_a_source() {
        let session = Session::new();
        let form = StateFormData {
            name: "rows".into(),
            data_source: vec!["list".into()],
            state_operator: StateOperator::Filter,
            filter_field: Some("kind".into()),
        };
        assert!(matches!(
            session.export_state_schema(&form),
            Err(CalcError::MissingDataSource)
        ));
    }

    #[test]
    fn exported_states_feed_accessors() {
        let mut session = session_with_source();
        let form = StateFormData {
            name: "rows".into(),
            data_source: vec!["data".into(), "list".into()],
            state_operator: StateOperator::Filter,
            filter_field: Some("kind".into()),
        };
        let state = session.export_state_schema(&form).unwrap();
        session.insert_state(state);

        let accessors = session.state_accessors().unwrap();
        let rows = &accessors["rows"];
        assert_eq!(rows(&json!("a")).len(), 1);
        assert!(rows(&json!("b")).is_empty());
    }

    #[test]
    fn expand_and_commit_round_trip() {
        let mut session = Session::new();
        let mut root = WidgetSchema::new(WidgetType::Container, "page", "");
        root.kind
            .children_mut()
            .unwrap()
            .push(WidgetSchema::new(WidgetType::Text, "caption", ""));
        session.set_widget_schema(root.clone());

        let mut tree = session.expand_tree().unwrap();
        let tree_root = tree.root().unwrap();
        tree.get_mut(tree_root).unwrap().schema.name = "edited".into();

        let committed = session.commit_tree(&tree).unwrap();
        assert_eq!(committed.name, "edited");
        assert_eq!(committed.id, root.id);
    }

    #[test]
    fn storage_key_is_fixed() {
        assert_eq!(SCHEMA_STORAGE_KEY, "schema");
    }

    #[test]
    fn schema_blob_round_trips() {
        let mut session = Session::new();
        session.set_widget_schema(WidgetSchema::new(WidgetType::Container, "page", ""));
        let blob = session.export_schema_json().unwrap();

        let mut restored = Session::new();
        restored.load_schema_json(&blob).unwrap();
        assert_eq!(
            restored.widget_schema().unwrap(),
            session.widget_schema().unwrap()
        );

        assert!(restored.load_schema_json("not json").is_err());
    }

    #[test]
    fn component_envelope_round_trips() {
        let mut session = session_with_source();
        session.set_widget_schema(WidgetSchema::new(WidgetType::Container, "page", ""));
        let component = session.export_component();

        let mut restored = Session::new();
        restored.load_component(component.clone());
        assert_eq!(restored.export_component(), component);

        assert!(component.states.is_empty());
        let operation = DataMappingOperation {
            ref_path: "data.list[0].id".into(),
            operator: DataMappingOperator::Interpolate,
            output: None,
        };
        assert_eq!(
            restored.evaluate(Some(&operation)).unwrap(),
            Some(json!("1"))
        );
    }
}
