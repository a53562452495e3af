//! The widget-family schema: the persisted, recursive description of one UI
//! node and its subtree.
//!
//! The schema is a sum type switched on the `type` tag. Container-capable
//! kinds structurally own their `children`; leaf kinds have no children field
//! at all, so a leaf carrying children is unrepresentable and any stray
//! `children` key on a leaf in persisted JSON is dropped during
//! deserialization.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::mapping::DataMappingMap;
use super::style::StyleMap;

/// Opaque unique widget id, assigned once at creation and never regenerated
/// by conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WidgetId(String);

impl WidgetId {
    /// A fresh UUID-backed id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WidgetId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for WidgetId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Widget type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetType {
    Container,
    Text,
    Link,
    Image,
    Input,
    Radio,
    Checkbox,
    Form,
    List,
    Table,
    Tree,
    Matrix,
}

impl WidgetType {
    /// Whether this kind may own child nodes.
    ///
    /// Single source of truth for the children-capability rule; the converter
    /// and every editor-facing operation go through here.
    pub fn can_have_children(self) -> bool {
        matches!(
            self,
            Self::Container | Self::List | Self::Table | Self::Form | Self::Tree
        )
    }

    /// Whether this kind repeats one child template per data item.
    pub fn can_repeat_children(self) -> bool {
        matches!(self, Self::Tree | Self::Table | Self::List)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Container => "container",
            Self::Text => "text",
            Self::Link => "link",
            Self::Image => "image",
            Self::Input => "input",
            Self::Radio => "radio",
            Self::Checkbox => "checkbox",
            Self::Form => "form",
            Self::List => "list",
            Self::Table => "table",
            Self::Tree => "tree",
            Self::Matrix => "matrix",
        }
    }
}

impl fmt::Display for WidgetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The tagged body of a widget schema. Container variants carry children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum WidgetKind {
    Container {
        #[serde(default)]
        children: Vec<WidgetSchema>,
    },
    List {
        #[serde(default)]
        children: Vec<WidgetSchema>,
    },
    Table {
        #[serde(default)]
        children: Vec<WidgetSchema>,
    },
    Form {
        #[serde(default)]
        children: Vec<WidgetSchema>,
    },
    Tree {
        #[serde(default)]
        children: Vec<WidgetSchema>,
    },
    Text,
    Link,
    Image,
    Input,
    Radio,
    Checkbox,
    Matrix,
}

impl WidgetKind {
    /// An empty body for the given type tag: containers start with no
    /// children, leaves have none to start with.
    pub fn for_type(widget_type: WidgetType) -> Self {
        match widget_type {
            WidgetType::Container => Self::Container { children: Vec::new() },
            WidgetType::List => Self::List { children: Vec::new() },
            WidgetType::Table => Self::Table { children: Vec::new() },
            WidgetType::Form => Self::Form { children: Vec::new() },
            WidgetType::Tree => Self::Tree { children: Vec::new() },
            WidgetType::Text => Self::Text,
            WidgetType::Link => Self::Link,
            WidgetType::Image => Self::Image,
            WidgetType::Input => Self::Input,
            WidgetType::Radio => Self::Radio,
            WidgetType::Checkbox => Self::Checkbox,
            WidgetType::Matrix => Self::Matrix,
        }
    }

    /// The type tag for this body.
    pub fn widget_type(&self) -> WidgetType {
        match self {
            Self::Container { .. } => WidgetType::Container,
            Self::List { .. } => WidgetType::List,
            Self::Table { .. } => WidgetType::Table,
            Self::Form { .. } => WidgetType::Form,
            Self::Tree { .. } => WidgetType::Tree,
            Self::Text => WidgetType::Text,
            Self::Link => WidgetType::Link,
            Self::Image => WidgetType::Image,
            Self::Input => WidgetType::Input,
            Self::Radio => WidgetType::Radio,
            Self::Checkbox => WidgetType::Checkbox,
            Self::Matrix => WidgetType::Matrix,
        }
    }

    /// The children slice, present only on container-capable bodies.
    pub fn children(&self) -> Option<&[WidgetSchema]> {
        match self {
            Self::Container { children }
            | Self::List { children }
            | Self::Table { children }
            | Self::Form { children }
            | Self::Tree { children } => Some(children),
            _ => None,
        }
    }

    /// Mutable children storage, present only on container-capable bodies.
    pub fn children_mut(&mut self) -> Option<&mut Vec<WidgetSchema>> {
        match self {
            Self::Container { children }
            | Self::List { children }
            | Self::Table { children }
            | Self::Form { children }
            | Self::Tree { children } => Some(children),
            _ => None,
        }
    }
}

/// One persisted widget node: identity, tagged body, naming, styles, and
/// data mappings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetSchema {
    #[serde(default)]
    pub id: WidgetId,
    #[serde(flatten)]
    pub kind: WidgetKind,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub styles: StyleMap,
    #[serde(default, rename = "dataMapping")]
    pub data_mapping: DataMappingMap,
}

impl WidgetSchema {
    /// A freshly-identified schema of the given type with empty styles and
    /// mappings.
    pub fn new(widget_type: WidgetType, name: impl Into<String>, desc: impl Into<String>) -> Self {
        let mut schema = Self::empty(widget_type);
        schema.id = WidgetId::generate();
        schema.name = name.into();
        schema.desc = desc.into();
        schema
    }

    /// A blank, unidentified schema of the given type. Conversion fills these
    /// in before they are ever observed.
    pub fn empty(widget_type: WidgetType) -> Self {
        Self {
            id: WidgetId::default(),
            kind: WidgetKind::for_type(widget_type),
            name: String::new(),
            desc: String::new(),
            styles: StyleMap::new(),
            data_mapping: DataMappingMap::new(),
        }
    }

    /// The type tag of this node.
    pub fn widget_type(&self) -> WidgetType {
        self.kind.widget_type()
    }

    /// A copy of this node with its subtree removed: container bodies keep an
    /// empty children vector, every other field is cloned as-is.
    pub fn detached(&self) -> Self {
        let mut copy = self.clone();
        if let Some(children) = copy.kind.children_mut() {
            children.clear();
        }
        copy
    }

    /// Total number of nodes in this subtree, the root included.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            if let Some(children) = node.kind.children() {
                stack.extend(children.iter());
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn capability_predicates() {
        assert!(WidgetType::Container.can_have_children());
        assert!(WidgetType::Form.can_have_children());
        assert!(!WidgetType::Text.can_have_children());
        assert!(!WidgetType::Matrix.can_have_children());

        assert!(WidgetType::List.can_repeat_children());
        assert!(WidgetType::Tree.can_repeat_children());
        assert!(!WidgetType::Container.can_repeat_children());
        assert!(!WidgetType::Form.can_repeat_children());
    }

    #[test]
    fn kind_shape_agrees_with_predicate() {
        let all = [
            WidgetType::Container,
            WidgetType::Text,
            WidgetType::Link,
            WidgetType::Image,
            WidgetType::Input,
            WidgetType::Radio,
            WidgetType::Checkbox,
            WidgetType::Form,
            WidgetType::List,
            WidgetType::Table,
            WidgetType::Tree,
            WidgetType::Matrix,
        ];
        for widget_type in all {
            let kind = WidgetKind::for_type(widget_type);
            assert_eq!(kind.widget_type(), widget_type);
            assert_eq!(
                kind.children().is_some(),
                widget_type.can_have_children(),
                "children storage must mirror the capability of {widget_type}"
            );
        }
    }

    #[test]
    fn serializes_with_type_tag_and_children() {
        let mut root = WidgetSchema::new(WidgetType::Container, "root", "");
        let child = WidgetSchema::new(WidgetType::Text, "caption", "");
        root.kind.children_mut().unwrap().push(child);

        let json = serde_json::to_value(&root).unwrap();
        assert_eq!(json["type"], "container");
        assert_eq!(json["children"][0]["type"], "text");
        assert_eq!(json["children"][0]["name"], "caption");
    }

    #[test]
    fn leaf_children_are_dropped_at_deserialization() {
        let input = json!({
            "id": "leaf-1",
            "type": "text",
            "name": "caption",
            "desc": "",
            "children": [{ "id": "x", "type": "text", "name": "stray" }]
        });
        let schema: WidgetSchema = serde_json::from_value(input).unwrap();
        assert_eq!(schema.widget_type(), WidgetType::Text);
        assert!(schema.kind.children().is_none());

        let out = serde_json::to_value(&schema).unwrap();
        assert!(out.get("children").is_none());
    }

    #[test]
    fn detached_strips_children_but_keeps_identity() {
        let mut root = WidgetSchema::new(WidgetType::List, "items", "the list");
        root.kind
            .children_mut()
            .unwrap()
            .push(WidgetSchema::new(WidgetType::Text, "item", ""));

        let detached = root.detached();
        assert_eq!(detached.id, root.id);
        assert_eq!(detached.name, "items");
        assert_eq!(detached.kind.children().unwrap().len(), 0);
        assert_eq!(root.kind.children().unwrap().len(), 1);
    }

    #[test]
    fn node_count_covers_the_subtree() {
        let mut root = WidgetSchema::new(WidgetType::Container, "root", "");
        let mut inner = WidgetSchema::new(WidgetType::Container, "inner", "");
        inner
            .kind
            .children_mut()
            .unwrap()
            .push(WidgetSchema::new(WidgetType::Text, "a", ""));
        root.kind.children_mut().unwrap().push(inner);
        root.kind
            .children_mut()
            .unwrap()
            .push(WidgetSchema::new(WidgetType::Image, "b", ""));
        assert_eq!(root.node_count(), 4);
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(WidgetId::generate(), WidgetId::generate());
    }

    #[test]
    fn round_trips_through_json() {
        let mut root = WidgetSchema::new(WidgetType::Container, "root", "top-level");
        root.kind
            .children_mut()
            .unwrap()
            .push(WidgetSchema::new(WidgetType::Link, "nav", ""));
        let text = serde_json::to_string(&root).unwrap();
        let back: WidgetSchema = serde_json::from_str(&text).unwrap();
        assert_eq!(back, root);
    }
}
