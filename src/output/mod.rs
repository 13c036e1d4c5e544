//! Output formatting for CLI display
//!
//! This module provides utilities for formatting output in the CLI:
//! category tree rendering, product grid rendering, and tag listings.
//! Every formatter is `quiet`-aware; quiet output is one bare id or slug
//! per line for scripting.

use colored::Colorize;

use crate::catalog::CategoryTree;
use crate::model::{Category, Product, Tag};

/// Marker rendered when a filter matches nothing
///
/// An explicitly rendered marker, so "no matches" is distinguishable from
/// output that was never produced.
pub const EMPTY_GRID: &str = "(no products match the current filters)";

/// Render the two-level category tree
#[must_use]
pub fn category_tree(tree: &CategoryTree, quiet: bool) -> String {
    let mut lines = Vec::new();

    for root in tree.roots() {
        if quiet {
            lines.push(root.id.clone());
        } else {
            lines.push(format!("{} {}", root.name.bold(), dim_id(&root.id)));
        }
        for child in tree.children_of(&root.id) {
            if quiet {
                lines.push(child.id.clone());
            } else {
                lines.push(format!("  └─ {} {}", child.name, dim_id(&child.id)));
            }
        }
    }

    if lines.is_empty() && !quiet {
        lines.push("(no categories)".to_string());
    }
    lines.join("\n")
}

/// Render a flat ordered category list with ranks
#[must_use]
pub fn category_flat(categories: &[Category], quiet: bool) -> String {
    let lines: Vec<String> = categories
        .iter()
        .map(|c| {
            if quiet {
                c.id.clone()
            } else {
                let marker = if c.is_root() { "" } else { "  " };
                format!("{marker}{}. {} {}", c.order, c.name, dim_id(&c.id))
            }
        })
        .collect();

    if lines.is_empty() && !quiet {
        return "(no categories)".to_string();
    }
    lines.join("\n")
}

/// Render the filtered product grid
///
/// A zero-match result renders [`EMPTY_GRID`] rather than nothing.
#[must_use]
pub fn product_grid(products: &[&Product], quiet: bool) -> String {
    if products.is_empty() {
        return if quiet {
            String::new()
        } else {
            EMPTY_GRID.dimmed().to_string()
        };
    }

    products
        .iter()
        .map(|p| product_line(p, quiet))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format one product card line
#[must_use]
pub fn product_line(product: &Product, quiet: bool) -> String {
    if quiet {
        return product.id.clone();
    }

    let price = format!("${:.2}", product.base_price).green().to_string();
    let mut line = format!("{} {} {}", product.name.bold(), price, dim_id(&product.id));

    if !product.tags.is_empty() {
        line.push_str(&format!(" [{}]", product.tags.join(", ")));
    }
    if let Some(cover) = product.cover_image() {
        line.push_str(&format!("\n    {}", cover.dimmed()));
    }
    line
}

/// Format a tag with its product usage count
#[must_use]
pub fn tag_with_count(tag: &Tag, count: usize, quiet: bool) -> String {
    if quiet {
        tag.slug.clone()
    } else {
        format!("  {} ({}) - used by {} product(s)", tag.slug.bold(), tag.name, count)
    }
}

fn dim_id(id: &str) -> String {
    format!("[{id}]").dimmed().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn cat(id: &str, parent: Option<&str>, order: u32) -> Category {
        Category {
            id: id.into(),
            name: format!("Name-{id}"),
            parent_id: parent.map(str::to_string),
            order,
            created_at: Utc::now(),
        }
    }

    fn product(id: &str) -> Product {
        Product {
            id: id.into(),
            name: format!("Product-{id}"),
            base_price: 12.5,
            images: vec![],
            category_id: "c1".into(),
            sub_category_id: None,
            tags: vec![],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_grid_marker_is_rendered() {
        colored::control::set_override(false);
        let rendered = product_grid(&[], false);
        assert!(rendered.contains(EMPTY_GRID));
    }

    #[test]
    fn test_quiet_grid_lists_ids() {
        let p1 = product("prod_1");
        let p2 = product("prod_2");
        let rendered = product_grid(&[&p1, &p2], true);
        assert_eq!(rendered, "prod_1\nprod_2");
    }

    #[test]
    fn test_quiet_tree_lists_ids_depth_first() {
        let flat = vec![
            cat("c1", None, 0),
            cat("s1", Some("c1"), 0),
            cat("c2", None, 1),
        ];
        let tree = CategoryTree::build(&flat);
        assert_eq!(category_tree(&tree, true), "c1\ns1\nc2");
    }

    #[test]
    fn test_product_line_includes_tags() {
        colored::control::set_override(false);
        let mut p = product("prod_1");
        p.tags = vec!["sale".into(), "new".into()];
        let line = product_line(&p, false);
        assert!(line.contains("[sale, new]"));
        assert!(line.contains("$12.50"));
    }

    #[test]
    fn test_flat_list_shows_ranks() {
        colored::control::set_override(false);
        let categories = vec![cat("c1", None, 0), cat("c2", None, 1)];
        let rendered = category_flat(&categories, false);
        assert!(rendered.starts_with("0. Name-c1"));
        assert!(rendered.contains("1. Name-c2"));
    }
}
