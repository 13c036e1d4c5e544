//! Store wrapper module for shelfr
//!
//! Provides a clean API for storing and retrieving catalog records
//! using sled as the embedded database backend.
//!
//! Uses one sled tree per collection:
//! - `categories`: category records keyed by id, bulk-reordered in place
//! - `products`: product records keyed by id (read-mostly)
//! - `tags`: tag records keyed by slug (read-only reference data)
//!
//! Mutations are individual record writes. Multi-record sequences (cascade
//! delete, reorder batches) are best-effort sequential, never transactional;
//! callers re-list the affected collection after every mutation instead of
//! patching in-memory state.

use chrono::Utc;
use serde::Serialize;
use serde::de::DeserializeOwned;
use sled::{Db, Tree};

use crate::model::{Category, Product, ProductDraft, Tag};

pub mod error;
pub mod query;

pub use error::StoreError;

/// Store wrapper that encapsulates all persistence operations
///
/// Three trees back the three collections:
/// - `categories` tree: id -> `Category`
/// - `products` tree: id -> `Product`
/// - `tags` tree: slug -> `Tag`
pub struct Store {
    db: Db,
    categories: Tree,
    products: Tree,
    tags: Tree,
}

fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, StoreError> {
    Ok(bincode::serde::encode_to_vec(
        value,
        bincode::config::standard(),
    )?)
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, StoreError> {
    let (value, _) = bincode::serde::decode_from_slice(bytes, bincode::config::standard())?;
    Ok(value)
}

impl Store {
    /// Opens or creates a store at the specified path
    ///
    /// # Arguments
    /// * `path` - Path to the store directory
    ///
    /// # Examples
    /// ```no_run
    /// use shelfr::store::Store;
    /// let store = Store::open("my_store").unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the database cannot be opened or if the
    /// collection trees cannot be created.
    pub fn open<P: AsRef<std::path::Path>>(path: P) -> Result<Self, StoreError> {
        let db = sled::open(path)?;
        let categories = db.open_tree("categories")?;
        let products = db.open_tree("products")?;
        let tags = db.open_tree("tags")?;
        Ok(Self {
            db,
            categories,
            products,
            tags,
        })
    }

    /// Generate a fresh opaque record id with the given prefix
    fn next_id(&self, prefix: &str) -> Result<String, StoreError> {
        let n = self.db.generate_id()?;
        Ok(format!("{prefix}{n:08x}"))
    }

    // ---- categories ----

    /// Create a category, appended to the end of its sibling list
    ///
    /// The new record's `order` is the count of existing categories sharing
    /// the same parent. A `parent_id` must reference an existing root
    /// category; the hierarchy never nests deeper than one sub-category
    /// level.
    ///
    /// # Arguments
    /// * `name` - Display name; leading/trailing whitespace is trimmed
    /// * `parent_id` - `None` for a root category, or the id of the parent
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidInput` if the trimmed name is empty, the
    /// parent does not exist, or the parent is itself a sub-category.
    /// Returns other `StoreError` variants if persistence fails.
    pub fn create_category(
        &self,
        name: &str,
        parent_id: Option<&str>,
    ) -> Result<Category, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::InvalidInput(
                "category name must not be empty".into(),
            ));
        }

        if let Some(pid) = parent_id {
            match self.get_category(pid)? {
                None => {
                    return Err(StoreError::InvalidInput(format!(
                        "unknown parent category: {pid}"
                    )));
                }
                Some(parent) if !parent.is_root() => {
                    return Err(StoreError::InvalidInput(format!(
                        "cannot nest under sub-category '{}'",
                        parent.name
                    )));
                }
                Some(_) => {}
            }
        }

        let order = self.sibling_count(parent_id)?;
        let record = Category {
            id: self.next_id("cat_")?,
            name: name.to_string(),
            parent_id: parent_id.map(str::to_string),
            order,
            created_at: Utc::now(),
        };

        self.categories
            .insert(record.id.as_bytes(), encode(&record)?)?;
        Ok(record)
    }

    /// Get a category by id
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if store operations fail or deserialization
    /// errors occur.
    pub fn get_category(&self, id: &str) -> Result<Option<Category>, StoreError> {
        match self.categories.get(id.as_bytes())? {
            Some(value) => Ok(Some(decode(&value)?)),
            None => Ok(None),
        }
    }

    /// List all categories ordered by `order` ascending
    ///
    /// Ties are broken by the store's key iteration order. Both roots and
    /// sub-categories are returned in one flat sequence; use
    /// `catalog::CategoryTree` to partition them.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if store iteration fails or deserialization
    /// errors occur.
    pub fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let mut records = Vec::new();
        for result in &self.categories {
            let (_, value) = result?;
            records.push(decode::<Category>(&value)?);
        }
        // Stable sort preserves key order among equal `order` values.
        records.sort_by_key(|c| c.order);
        Ok(records)
    }

    /// Rewrite the `order` field of one category
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the id does not exist, or other
    /// `StoreError` variants if persistence fails.
    pub fn set_category_order(&self, id: &str, order: u32) -> Result<(), StoreError> {
        let mut record = self
            .get_category(id)?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        record.order = order;
        self.categories.insert(id.as_bytes(), encode(&record)?)?;
        Ok(())
    }

    /// Remove a single category record (no cascade at this layer)
    ///
    /// Returns whether a record was actually removed. Use
    /// `catalog::cascade_delete` to remove a category together with its
    /// sub-categories.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store operation fails.
    pub fn delete_category(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.categories.remove(id.as_bytes())?.is_some())
    }

    /// Get the number of category records
    #[must_use]
    pub fn count_categories(&self) -> usize {
        self.categories.len()
    }

    // ---- products ----

    /// Insert a product, assigning it a fresh id and timestamp
    ///
    /// The referenced `category_id` is NOT validated: imported historic data
    /// may legitimately point at categories that no longer exist, and the
    /// filter engine tolerates such orphans.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidInput` if the product name is empty, or
    /// other `StoreError` variants if persistence fails.
    pub fn create_product(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        if draft.name.trim().is_empty() {
            return Err(StoreError::InvalidInput(
                "product name must not be empty".into(),
            ));
        }

        let record = Product {
            id: self.next_id("prod_")?,
            name: draft.name.trim().to_string(),
            base_price: draft.base_price,
            images: draft.images,
            category_id: draft.category_id,
            sub_category_id: draft.sub_category_id,
            tags: draft.tags,
            created_at: Utc::now(),
        };

        self.products
            .insert(record.id.as_bytes(), encode(&record)?)?;
        Ok(record)
    }

    /// Get a product by id
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if store operations fail or deserialization
    /// errors occur.
    pub fn get_product(&self, id: &str) -> Result<Option<Product>, StoreError> {
        match self.products.get(id.as_bytes())? {
            Some(value) => Ok(Some(decode(&value)?)),
            None => Ok(None),
        }
    }

    /// List all products in insertion (id) order
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if store iteration fails or deserialization
    /// errors occur.
    pub fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let mut records = Vec::new();
        for result in &self.products {
            let (_, value) = result?;
            records.push(decode::<Product>(&value)?);
        }
        Ok(records)
    }

    /// Get the number of product records
    #[must_use]
    pub fn count_products(&self) -> usize {
        self.products.len()
    }

    // ---- tags ----

    /// Insert or replace a tag, keyed by slug
    ///
    /// The slug is derived from the name (kebab-case) unless given
    /// explicitly.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidInput` if the name is empty, or other
    /// `StoreError` variants if persistence fails.
    pub fn upsert_tag(&self, name: &str, slug: Option<&str>) -> Result<Tag, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::InvalidInput("tag name must not be empty".into()));
        }

        let record = Tag::new(name, slug);
        self.tags.insert(record.slug.as_bytes(), encode(&record)?)?;
        Ok(record)
    }

    /// Get a tag by slug
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if store operations fail or deserialization
    /// errors occur.
    pub fn get_tag(&self, slug: &str) -> Result<Option<Tag>, StoreError> {
        match self.tags.get(slug.as_bytes())? {
            Some(value) => Ok(Some(decode(&value)?)),
            None => Ok(None),
        }
    }

    /// List all tags in slug order
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if store iteration fails or deserialization
    /// errors occur.
    pub fn list_tags(&self) -> Result<Vec<Tag>, StoreError> {
        let mut records = Vec::new();
        for result in &self.tags {
            let (_, value) = result?;
            records.push(decode::<Tag>(&value)?);
        }
        Ok(records)
    }

    // ---- maintenance ----

    /// Flush all pending writes to disk
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the flush operation fails.
    pub fn flush(&self) -> Result<(), StoreError> {
        self.db.flush()?;
        Ok(())
    }

    /// Clear all collections
    ///
    /// # Warning
    /// This operation is irreversible!
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if clearing any tree fails.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.categories.clear()?;
        self.products.clear()?;
        self.tags.clear()?;
        Ok(())
    }
}

impl Drop for Store {
    fn drop(&mut self) {
        // Best-effort flush on drop. Errors are ignored since we can't
        // propagate them from Drop. Callers should explicitly flush()
        // if they need guaranteed durability.
        let _ = self.db.flush();
    }
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
    fn test_create_store() {
        let (store, _dir) = open_temp();
        assert_eq!(store.count_categories(), 0);
        assert_eq!(store.count_products(), 0);
    }

    #[test]
    fn test_create_category_appends_to_end() {
        let (store, _dir) = open_temp();

        let a = store.create_category("Tea", None).unwrap();
        let b = store.create_category("Coffee", None).unwrap();
        let c = store.create_category("Mugs", None).unwrap();

        assert_eq!(a.order, 0);
        assert_eq!(b.order, 1);
        assert_eq!(c.order, 2);

        let listed = store.list_categories().unwrap();
        let names: Vec<_> = listed.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Tea", "Coffee", "Mugs"]);
    }

    #[test]
    fn test_sub_category_order_counts_own_siblings() {
        let (store, _dir) = open_temp();

        let root = store.create_category("Tea", None).unwrap();
        store.create_category("Coffee", None).unwrap();

        let s1 = store.create_category("Green", Some(&root.id)).unwrap();
        let s2 = store.create_category("Black", Some(&root.id)).unwrap();

        // Sub-category ranks are independent of root ranks.
        assert_eq!(s1.order, 0);
        assert_eq!(s2.order, 1);
        assert_eq!(s1.parent_id.as_deref(), Some(root.id.as_str()));
    }

    #[test]
    fn test_create_category_rejects_empty_name() {
        let (store, _dir) = open_temp();
        let err = store.create_category("   ", None).unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
        assert_eq!(store.count_categories(), 0);
    }

    #[test]
    fn test_create_category_rejects_unknown_parent() {
        let (store, _dir) = open_temp();
        let err = store.create_category("Green", Some("cat_missing")).unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
    }

    #[test]
    fn test_create_category_rejects_deep_nesting() {
        let (store, _dir) = open_temp();
        let root = store.create_category("Tea", None).unwrap();
        let sub = store.create_category("Green", Some(&root.id)).unwrap();

        let err = store.create_category("Sencha", Some(&sub.id)).unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
    }

    #[test]
    fn test_set_category_order() {
        let (store, _dir) = open_temp();
        let a = store.create_category("Tea", None).unwrap();

        store.set_category_order(&a.id, 5).unwrap();
        assert_eq!(store.get_category(&a.id).unwrap().unwrap().order, 5);
    }

    #[test]
    fn test_set_category_order_missing_id() {
        let (store, _dir) = open_temp();
        let err = store.set_category_order("cat_missing", 0).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn test_delete_category_is_not_cascading() {
        let (store, _dir) = open_temp();
        let root = store.create_category("Tea", None).unwrap();
        let sub = store.create_category("Green", Some(&root.id)).unwrap();

        assert!(store.delete_category(&root.id).unwrap());
        assert!(!store.delete_category(&root.id).unwrap());

        // The child survives a plain delete; it now dangles.
        assert!(store.get_category(&sub.id).unwrap().is_some());
    }

    #[test]
    fn test_product_round_trip() {
        let (store, _dir) = open_temp();

        let created = store
            .create_product(ProductDraft {
                name: "Teapot".into(),
                base_price: 24.0,
                images: vec!["pot.jpg".into()],
                category_id: "cat_1".into(),
                sub_category_id: None,
                tags: vec!["bestseller".into()],
            })
            .unwrap();

        let fetched = store.get_product(&created.id).unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.cover_image(), Some("pot.jpg"));
        assert_eq!(store.count_products(), 1);
    }

    #[test]
    fn test_product_empty_name_rejected() {
        let (store, _dir) = open_temp();
        let err = store
            .create_product(ProductDraft {
                name: "  ".into(),
                base_price: 1.0,
                images: vec![],
                category_id: "cat_1".into(),
                sub_category_id: None,
                tags: vec![],
            })
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
    }

    #[test]
    fn test_tag_upsert_and_list() {
        let (store, _dir) = open_temp();

        store.upsert_tag("New Arrival", None).unwrap();
        store.upsert_tag("Best Seller", Some("bestseller")).unwrap();

        let tags = store.list_tags().unwrap();
        let slugs: Vec<_> = tags.iter().map(|t| t.slug.as_str()).collect();
        assert_eq!(slugs, vec!["bestseller", "new-arrival"]);

        // Re-upserting the same slug replaces the display name.
        store.upsert_tag("Bestseller!", Some("bestseller")).unwrap();
        let tag = store.get_tag("bestseller").unwrap().unwrap();
        assert_eq!(tag.name, "Bestseller!");
        assert_eq!(store.list_tags().unwrap().len(), 2);
    }

    #[test]
    fn test_reopen_existing_store() {
        let dir = TempDir::new().unwrap();

        {
            let store = Store::open(dir.path()).unwrap();
            store.create_category("Tea", None).unwrap();
            store.flush().unwrap();
        }

        {
            let store = Store::open(dir.path()).unwrap();
            assert_eq!(store.count_categories(), 1);
            let listed = store.list_categories().unwrap();
            assert_eq!(listed[0].name, "Tea");
        }
    }

    #[test]
    fn test_clear() {
        let (store, _dir) = open_temp();
        store.create_category("Tea", None).unwrap();
        store.upsert_tag("Sale", None).unwrap();

        store.clear().unwrap();

        assert_eq!(store.count_categories(), 0);
        assert!(store.list_tags().unwrap().is_empty());
    }
}
