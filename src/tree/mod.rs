//! The editable tree: slotmap arena, node data, and schema conversion.

pub mod arena;
pub mod convert;
pub mod node;

pub use arena::WidgetTree;
pub use convert::{schema_to_tree, tree_to_schema};
pub use node::{TreeId, TreeNode};
