//! Category tree builder
//!
//! Partitions a flat, ordered category list into root categories and their
//! children. Pure: no store access, no failure modes. Records whose
//! `parent_id` references a non-existent root are silently dropped rather
//! than surfaced; dangling references are a tolerated condition, not an
//! error.

use std::collections::HashMap;

use crate::model::Category;

/// The two-level category hierarchy derived from a flat list
#[derive(Debug, Clone, Default)]
pub struct CategoryTree {
    roots: Vec<Category>,
    children_by_root: HashMap<String, Vec<Category>>,
}

impl CategoryTree {
    /// Build the tree from a flat ordered sequence of categories
    ///
    /// Input order is preserved for both the root sequence and each
    /// children sequence, so a list ordered by `order` yields an ordered
    /// tree. A record whose parent id is unknown, or whose parent is itself
    /// a sub-category, is dropped.
    #[must_use]
    pub fn build(categories: &[Category]) -> Self {
        let mut roots = Vec::new();
        let mut children_by_root: HashMap<String, Vec<Category>> = HashMap::new();

        for category in categories {
            if category.is_root() {
                roots.push(category.clone());
            }
        }

        let root_ids: Vec<&str> = roots.iter().map(|c| c.id.as_str()).collect();

        for category in categories {
            if let Some(parent_id) = category.parent_id.as_deref() {
                if root_ids.contains(&parent_id) {
                    children_by_root
                        .entry(parent_id.to_string())
                        .or_default()
                        .push(category.clone());
                }
            }
        }

        Self {
            roots,
            children_by_root,
        }
    }

    /// Root categories, in input order
    #[must_use]
    pub fn roots(&self) -> &[Category] {
        &self.roots
    }

    /// Children of a root, in input order; empty for unknown ids
    #[must_use]
    pub fn children_of(&self, root_id: &str) -> &[Category] {
        self.children_by_root
            .get(root_id)
            .map_or(&[], Vec::as_slice)
    }

    /// Whether the tree holds no categories at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty() && self.children_by_root.is_empty()
    }
}
