//! Bidirectional conversion between the persisted widget-family schema and
//! the editable tree.
//!
//! Both directions are breadth-first passes over a worklist of
//! `(source node, destination handle)` pairs. Destination slots are
//! allocated blank before their pair is processed and filled in place, so a
//! handle obtained early observes every later write — the tree side relies
//! on this to keep arena ids stable for any view already holding one.

use std::collections::VecDeque;

use tracing::debug;

use super::arena::WidgetTree;
use super::node::TreeNode;
use crate::schema::WidgetSchema;

/// Expand a persisted schema into an editable tree.
///
/// Each container node gets one blank child slot per schema child, enqueued
/// in lockstep with the schema children so positional correspondence is 1:1.
/// The root node ends up selected. O(N) in schema nodes.
pub fn schema_to_tree(schema: &WidgetSchema) -> WidgetTree {
    let mut tree = WidgetTree::new();
    let root = tree.insert(TreeNode::placeholder());

    let mut work: VecDeque<(&WidgetSchema, _)> = VecDeque::new();
    work.push_back((schema, root));

    while let Some((source, id)) = work.pop_front() {
        let widget_type = source.widget_type();
        {
            let node = tree.get_mut(id).expect("worklist ids are live");
            node.key = source.id.clone();
            node.widget_type = widget_type;
            node.title = source.name.clone();
            node.expanded = widget_type.can_have_children();
            node.is_leaf = !widget_type.can_have_children();
            node.schema = source.detached();
        }
        if let Some(children) = source.kind.children() {
            for child in children {
                let child_id = tree
                    .insert_child(id, TreeNode::placeholder())
                    .expect("container nodes accept children");
                work.push_back((child, child_id));
            }
        }
    }

    tree.select(root);
    debug!(nodes = tree.len(), "expanded schema into tree");
    tree
}

/// Collapse an editable tree back into a persisted schema.
///
/// Every field of each node's embedded schema is carried over, so edits made
/// through the tree survive. The result is a fresh, reference-free value:
/// later tree mutation cannot touch it. Returns `None` for an empty tree.
pub fn tree_to_schema(tree: &WidgetTree) -> Option<WidgetSchema> {
    let root = tree.root()?;

    struct Slot {
        schema: Option<WidgetSchema>,
        children: Vec<usize>,
    }

    let blank = || Slot {
        schema: None,
        children: Vec::new(),
    };

    let mut slots = vec![blank()];
    let mut work = VecDeque::new();
    work.push_back((root, 0usize));

    while let Some((id, at)) = work.pop_front() {
        let node = tree.get(id).expect("worklist ids are live");
        let schema = node.schema.detached();
        if schema.widget_type().can_have_children() {
            for &child in tree.children(id) {
                let child_at = slots.len();
                slots.push(blank());
                slots[at].children.push(child_at);
                work.push_back((child, child_at));
            }
        }
        slots[at].schema = Some(schema);
    }

    // BFS order puts children behind their parent, so a reverse pass grafts
    // every subtree before its parent is taken.
    let mut built: Vec<Option<WidgetSchema>> = Vec::new();
    built.resize_with(slots.len(), || None);
    for at in (0..slots.len()).rev() {
        let slot = std::mem::replace(&mut slots[at], blank());
        let mut schema = slot.schema.expect("every slot is visited by the walk");
        if let Some(children) = schema.kind.children_mut() {
            for child_at in slot.children {
                children.push(built[child_at].take().expect("children build before parents"));
            }
        }
        built[at] = Some(schema);
    }

    debug!(nodes = tree.len(), "collapsed tree into schema");
    built[0].take()
}
