//! Query helpers over the category collection
//!
//! The store exposes fetch-all; these helpers provide the two derived reads
//! the catalog layer needs: equality filtering on `parent_id` and sibling
//! counting. Both read the full collection and filter in memory, which is
//! the intended access pattern for an embedded store of this size.

use crate::model::Category;
use crate::store::{Store, StoreError};

impl Store {
    /// All root categories, ordered by `order` ascending
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if store iteration fails or deserialization
    /// errors occur.
    pub fn roots(&self) -> Result<Vec<Category>, StoreError> {
        let mut roots: Vec<Category> = self
            .list_categories()?
            .into_iter()
            .filter(Category::is_root)
            .collect();
        roots.sort_by_key(|c| c.order);
        Ok(roots)
    }

    /// Direct children of a category, ordered by `order` ascending
    ///
    /// Only one level is queried; with the two-level hierarchy this is the
    /// complete descendant set.
    ///
    /// # Arguments
    /// * `parent_id` - The id whose children to fetch
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if store iteration fails or deserialization
    /// errors occur.
    pub fn children_of(&self, parent_id: &str) -> Result<Vec<Category>, StoreError> {
        let mut children: Vec<Category> = self
            .list_categories()?
            .into_iter()
            .filter(|c| c.parent_id.as_deref() == Some(parent_id))
            .collect();
        children.sort_by_key(|c| c.order);
        Ok(children)
    }

    /// Count of categories sharing the given parent
    ///
    /// This is the `order` value a newly created sibling receives
    /// (append-to-end).
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if store iteration fails or deserialization
    /// errors occur.
    pub fn sibling_count(&self, parent_id: Option<&str>) -> Result<u32, StoreError> {
        let count = self
            .list_categories()?
            .iter()
            .filter(|c| c.parent_id.as_deref() == parent_id)
            .count();
        Ok(count as u32)
    }
}
