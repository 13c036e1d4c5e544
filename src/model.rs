//! Record types stored in the catalog
//!
//! Three collections live in the store: categories, products, and tags.
//! Products and tags are read-only reference data as far as the filtering
//! core is concerned; only categories are mutated here.
//!
//! Serde field names follow the external wire schema (camelCase), so JSON
//! import/export matches what upstream admin tooling produces.

use chrono::{DateTime, Utc};
use heck::ToKebabCase;
use serde::{Deserialize, Serialize};

/// A category record
///
/// Categories form a two-level hierarchy: a record with no `parent_id` is a
/// root category, and a record whose `parent_id` references a root is a
/// sub-category. The schema itself cannot enforce the depth limit; the store
/// refuses deeper nesting at create time.
///
/// `order` is the zero-based rank among siblings sharing the same
/// `parent_id`. After any successful reorder, sibling orders are exactly
/// `0..N-1` with no gaps or duplicates.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    pub order: u32,
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Whether this category is a root (top-level) category
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// A product record
///
/// Read-only from this crate's perspective beyond initial insertion.
/// `category_id` may be stale: cascade-deleting a category leaves products
/// pointing at it untouched, and such orphans simply never match a concrete
/// category facet again. `sub_category_id` is absent on products created
/// before sub-categories existed.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub base_price: f64,
    /// Image URLs; the first entry is the cover image
    #[serde(default)]
    pub images: Vec<String>,
    pub category_id: String,
    #[serde(default)]
    pub sub_category_id: Option<String>,
    /// Tag slugs
    #[serde(default)]
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// The cover image URL, if any image is attached
    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Whether the product predates sub-category support
    #[must_use]
    pub const fn is_legacy(&self) -> bool {
        self.sub_category_id.is_none()
    }
}

/// A product record as supplied by import files or the `product add`
/// command, before the store assigns an id and timestamp
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub base_price: f64,
    #[serde(default)]
    pub images: Vec<String>,
    pub category_id: String,
    #[serde(default)]
    pub sub_category_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A tag: display name plus the slug used as the filter key
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub slug: String,
}

impl Tag {
    /// Create a tag, deriving a kebab-case slug from the name when no
    /// explicit slug is given
    #[must_use]
    pub fn new(name: &str, slug: Option<&str>) -> Self {
        let slug = slug
            .map(str::to_string)
            .unwrap_or_else(|| name.to_kebab_case());
        Self {
            name: name.to_string(),
            slug,
        }
    }
}
