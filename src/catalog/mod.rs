//! Category hierarchy operations
//!
//! Everything that interprets the flat category collection as a two-level
//! hierarchy: partitioning into roots and children, move-to-reorder
//! planning, and cascading deletion.

pub mod cascade;
pub mod reorder;
pub mod tree;

pub use cascade::cascade_delete;
pub use reorder::{ReorderPlan, plan_move};
pub use tree::CategoryTree;
