//! Tag commands: add and list

use crate::ShelfrError;
use crate::output;
use crate::store::Store;

type Result<T> = std::result::Result<T, ShelfrError>;

/// Add a tag, deriving a kebab-case slug unless one is given
///
/// # Errors
/// Returns an error if validation or store operations fail
pub fn add(store: &Store, name: &str, slug: Option<&str>, quiet: bool) -> Result<()> {
    let created = store.upsert_tag(name, slug)?;

    if quiet {
        println!("{}", created.slug);
    } else {
        println!("Added tag '{}' with slug '{}'", created.name, created.slug);
    }
    Ok(())
}

/// List all tags with product usage counts
///
/// # Errors
/// Returns an error if store operations fail
pub fn list(store: &Store, quiet: bool) -> Result<()> {
    let tags = store.list_tags()?;
    let products = store.list_products()?;

    for tag in &tags {
        let count = products
            .iter()
            .filter(|p| p.tags.iter().any(|t| *t == tag.slug))
            .count();
        println!("{}", output::tag_with_count(tag, count, quiet));
    }

    if tags.is_empty() && !quiet {
        println!("(no tags)");
    }
    Ok(())
}
