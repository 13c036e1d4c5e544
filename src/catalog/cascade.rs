//! Cascading category deletion
//!
//! Removes a category together with its direct children. One level is
//! enough: the hierarchy never nests deeper. The child deletes run
//! sequentially with no transaction around them; a failure partway leaves
//! some children deleted and the rest (plus the target) in place, which the
//! caller surfaces by re-listing.
//!
//! Products referencing the deleted ids are left untouched. They become
//! orphans and never match a concrete category or sub-category facet again;
//! rendering tolerates them.

use crate::store::{Store, StoreError};

/// Delete a category and all of its sub-categories
///
/// Children are removed first, then the target. Returns the number of
/// records actually removed (0 when the id was already gone).
///
/// # Errors
///
/// Returns the first `StoreError` encountered; earlier deletions in the
/// sequence are not undone.
pub fn cascade_delete(store: &Store, id: &str) -> Result<usize, StoreError> {
    let children = store.children_of(id)?;

    let mut removed = 0;
    for child in &children {
        if store.delete_category(&child.id)? {
            removed += 1;
        }
    }

    if store.delete_category(id)? {
        removed += 1;
    }

    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn open_temp() -> (Store, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path()).unwrap();
        (store, dir)
    }

    #[test]
    fn test_cascade_removes_target_and_children() {
        let (store, _dir) = open_temp();
        let tea = store.create_category("Tea", None).unwrap();
        let green = store.create_category("Green", Some(&tea.id)).unwrap();
        let black = store.create_category("Black", Some(&tea.id)).unwrap();

        let removed = cascade_delete(&store, &tea.id).unwrap();

        assert_eq!(removed, 3);
        assert!(store.get_category(&tea.id).unwrap().is_none());
        assert!(store.get_category(&green.id).unwrap().is_none());
        assert!(store.get_category(&black.id).unwrap().is_none());
    }

    #[test]
    fn test_cascade_leaves_other_categories_alone() {
        let (store, _dir) = open_temp();
        let tea = store.create_category("Tea", None).unwrap();
        store.create_category("Green", Some(&tea.id)).unwrap();
        let coffee = store.create_category("Coffee", None).unwrap();
        let espresso = store.create_category("Espresso", Some(&coffee.id)).unwrap();

        cascade_delete(&store, &tea.id).unwrap();

        assert!(store.get_category(&coffee.id).unwrap().is_some());
        assert!(store.get_category(&espresso.id).unwrap().is_some());
        assert_eq!(store.count_categories(), 2);
    }

    #[test]
    fn test_cascade_on_leaf_removes_only_it() {
        let (store, _dir) = open_temp();
        let tea = store.create_category("Tea", None).unwrap();
        let green = store.create_category("Green", Some(&tea.id)).unwrap();

        let removed = cascade_delete(&store, &green.id).unwrap();

        assert_eq!(removed, 1);
        assert!(store.get_category(&tea.id).unwrap().is_some());
    }

    #[test]
    fn test_cascade_on_missing_id_removes_nothing() {
        let (store, _dir) = open_temp();
        store.create_category("Tea", None).unwrap();

        let removed = cascade_delete(&store, "cat_missing").unwrap();

        assert_eq!(removed, 0);
        assert_eq!(store.count_categories(), 1);
    }

    #[test]
    fn test_products_are_orphaned_not_deleted() {
        let (store, _dir) = open_temp();
        let tea = store.create_category("Tea", None).unwrap();
        let green = store.create_category("Green", Some(&tea.id)).unwrap();

        let product = store
            .create_product(crate::model::ProductDraft {
                name: "Sencha".into(),
                base_price: 7.0,
                images: vec![],
                category_id: tea.id.clone(),
                sub_category_id: Some(green.id.clone()),
                tags: vec![],
            })
            .unwrap();

        cascade_delete(&store, &tea.id).unwrap();

        let fetched = store.get_product(&product.id).unwrap().unwrap();
        assert_eq!(fetched.category_id, tea.id);
        assert_eq!(fetched.sub_category_id.as_deref(), Some(green.id.as_str()));
    }
}
