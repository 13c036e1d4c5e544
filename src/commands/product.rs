//! Product commands: add, import, and the filtered grid

use std::path::Path;

use crate::ShelfrError;
use crate::filter::{Facet, Selection, filter_products};
use crate::model::ProductDraft;
use crate::output;
use crate::session::{Event, Session, TagSelectMode};
use crate::store::Store;

type Result<T> = std::result::Result<T, ShelfrError>;

/// Add a single product
///
/// Unlike import, interactive adds validate their category references: a
/// typo at the prompt should fail loudly rather than create an orphan.
///
/// # Errors
/// Returns an error if validation or store operations fail
#[allow(clippy::too_many_arguments)]
pub fn add(
    store: &Store,
    name: &str,
    price: f64,
    category: &str,
    sub_category: Option<&str>,
    tags: Vec<String>,
    images: Vec<String>,
    quiet: bool,
) -> Result<()> {
    if store.get_category(category)?.is_none() {
        return Err(ShelfrError::Validation(format!(
            "unknown category: {category}"
        )));
    }
    if let Some(sub) = sub_category {
        match store.get_category(sub)? {
            None => {
                return Err(ShelfrError::Validation(format!(
                    "unknown sub-category: {sub}"
                )));
            }
            Some(s) if s.parent_id.as_deref() != Some(category) => {
                return Err(ShelfrError::Validation(format!(
                    "sub-category '{}' does not belong to category {category}",
                    s.name
                )));
            }
            Some(_) => {}
        }
    }

    let created = store.create_product(ProductDraft {
        name: name.to_string(),
        base_price: price,
        images,
        category_id: category.to_string(),
        sub_category_id: sub_category.map(str::to_string),
        tags,
    })?;

    if quiet {
        println!("{}", created.id);
    } else {
        println!(
            "Added product '{}' ({} products total)",
            created.name,
            store.count_products()
        );
    }
    Ok(())
}

/// Import products from a JSON array file
///
/// Records are inserted sequentially and are NOT reference-checked:
/// historic exports may point at categories that no longer exist, and such
/// orphans are tolerated by the filter engine.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or if an insert
/// fails (earlier inserts stay in place)
pub fn import(store: &Store, file: &Path, quiet: bool) -> Result<()> {
    let raw = std::fs::read_to_string(file)?;
    let drafts: Vec<ProductDraft> = serde_json::from_str(&raw)?;

    let mut imported = 0usize;
    for draft in drafts {
        store.create_product(draft)?;
        imported += 1;
    }

    if !quiet {
        println!(
            "Imported {imported} product(s) ({} total)",
            store.count_products()
        );
    }
    Ok(())
}

/// Build the active selection by replaying the CLI flags as selection
/// events
///
/// The flags are fed through the session dispatcher in gesture order, so
/// its rules apply unchanged: picking a category resets the sub-category
/// facet, and repeated tag slugs follow the configured `TagSelectMode`
/// (under the toggle policy, naming the active slug again clears it).
fn selection_from_args(
    category: Option<&str>,
    sub_category: Option<&str>,
    tags: &[String],
    tag_mode: TagSelectMode,
) -> Selection {
    let mut session = Session::new(tag_mode);

    if category.is_some() {
        session.handle(Event::SelectCategory(Facet::from_arg(category)));
    }
    if sub_category.is_some() {
        session.handle(Event::SelectSubCategory(Facet::from_arg(sub_category)));
    }
    for slug in tags {
        session.handle(Event::SelectTag(Facet::from_arg(Some(slug))));
    }

    session.selection().clone()
}

/// Render the product grid through the facet filter
///
/// # Errors
/// Returns an error if store operations or JSON serialization fail
pub fn list(
    store: &Store,
    category: Option<&str>,
    sub_category: Option<&str>,
    tags: &[String],
    tag_mode: TagSelectMode,
    json: bool,
    quiet: bool,
) -> Result<()> {
    let selection = selection_from_args(category, sub_category, tags, tag_mode);

    let products = store.list_products()?;
    let filtered = filter_products(&products, &selection);

    if json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
        return Ok(());
    }

    let rendered = output::product_grid(&filtered, quiet);
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_from_args_unfiltered_by_default() {
        let selection = selection_from_args(None, None, &[], TagSelectMode::Toggle);
        assert_eq!(selection, Selection::unfiltered());
    }

    #[test]
    fn test_selection_from_args_keeps_sub_category_under_category() {
        let selection =
            selection_from_args(Some("c1"), Some("s1"), &[], TagSelectMode::Toggle);
        assert_eq!(selection.category, Facet::Id("c1".into()));
        assert_eq!(selection.sub_category, Facet::Id("s1".into()));
    }

    #[test]
    fn test_repeated_tag_clears_under_toggle_policy() {
        let tags = vec!["sale".to_string(), "sale".to_string()];
        let selection = selection_from_args(None, None, &tags, TagSelectMode::Toggle);
        assert_eq!(selection.tag, Facet::All);
    }

    #[test]
    fn test_repeated_tag_stays_under_set_policy() {
        let tags = vec!["sale".to_string(), "sale".to_string()];
        let selection = selection_from_args(None, None, &tags, TagSelectMode::Set);
        assert_eq!(selection.tag, Facet::Id("sale".into()));
    }

    #[test]
    fn test_last_distinct_tag_wins() {
        let tags = vec!["sale".to_string(), "new".to_string()];
        let selection = selection_from_args(None, None, &tags, TagSelectMode::Toggle);
        assert_eq!(selection.tag, Facet::Id("new".into()));
    }
}
