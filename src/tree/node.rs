//! Tree node types: TreeId, TreeNode.

use slotmap::new_key_type;

use crate::schema::{WidgetId, WidgetSchema, WidgetType};

new_key_type! {
    /// Unique identifier for a tree node. Copy, lightweight (u64).
    pub struct TreeId;
}

/// The editable projection of one widget schema node.
///
/// `schema` is the childless copy of the node's persisted form; edits land
/// there and survive collapsing the tree back into a schema. The subtree
/// itself lives in the arena, never inside `schema`.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    /// The widget id this node projects.
    pub key: WidgetId,
    pub widget_type: WidgetType,
    /// Display title (the schema's semantic name).
    pub title: String,
    pub expanded: bool,
    pub selected: bool,
    pub is_leaf: bool,
    /// Childless widget schema for this node.
    pub schema: WidgetSchema,
}

impl TreeNode {
    /// Project a schema node. The subtree is not copied.
    pub fn from_schema(schema: &WidgetSchema) -> Self {
        let widget_type = schema.widget_type();
        Self {
            key: schema.id.clone(),
            widget_type,
            title: schema.name.clone(),
            expanded: false,
            selected: false,
            is_leaf: !widget_type.can_have_children(),
            schema: schema.detached(),
        }
    }

    /// A blank node awaiting its paired schema during conversion.
    pub(crate) fn placeholder() -> Self {
        Self {
            key: WidgetId::default(),
            widget_type: WidgetType::Container,
            title: String::new(),
            expanded: false,
            selected: false,
            is_leaf: false,
            schema: WidgetSchema::empty(WidgetType::Container),
        }
    }
}
