//! Category management commands: add, list, move, rm

use dialoguer::{Confirm, theme::ColorfulTheme};

use crate::ShelfrError;
use crate::catalog::{self, CategoryTree};
use crate::output;
use crate::session::{Effect, Event, Session};
use crate::store::Store;

type Result<T> = std::result::Result<T, ShelfrError>;

/// Add a category; a `parent` id makes it a sub-category
///
/// # Errors
/// Returns an error if validation or store operations fail
pub fn add(store: &Store, name: &str, parent: Option<&str>, quiet: bool) -> Result<()> {
    let created = store.create_category(name, parent)?;
    let categories = store.list_categories()?;

    if quiet {
        println!("{}", created.id);
    } else {
        let kind = if created.is_root() { "category" } else { "sub-category" };
        println!(
            "Added {kind} '{}' at rank {} ({} categories total)",
            created.name,
            created.order,
            categories.len()
        );
    }
    Ok(())
}

/// List the category hierarchy (tree by default, `flat` for the raw list)
///
/// # Errors
/// Returns an error if store operations fail
pub fn list(store: &Store, flat: bool, quiet: bool) -> Result<()> {
    let categories = store.list_categories()?;

    let rendered = if flat {
        output::category_flat(&categories, quiet)
    } else {
        output::category_tree(&CategoryTree::build(&categories), quiet)
    };
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}

/// Move a root category onto another, splice-style
///
/// The moved category lands exactly where it was dropped: after the target
/// when coming from the left, before it when coming from the right. The
/// resulting order is persisted as one sequential batch, then re-listed;
/// what is printed always reflects persisted state, even when the batch
/// failed partway.
///
/// # Errors
/// Returns an error if either id is unknown or not a root, or if
/// persistence fails
pub fn move_(store: &Store, dragged: &str, target: &str, quiet: bool) -> Result<()> {
    for id in [dragged, target] {
        match store.get_category(id)? {
            None => {
                return Err(ShelfrError::Validation(format!("unknown category: {id}")));
            }
            Some(c) if !c.is_root() => {
                return Err(ShelfrError::Validation(format!(
                    "'{}' is a sub-category; only root categories can be reordered",
                    c.name
                )));
            }
            Some(_) => {}
        }
    }

    // The command is the whole gesture: pick up, drop.
    let mut session = Session::default();
    session.handle(Event::DragStart(dragged.to_string()));
    let Effect::Reorder { dragged, target } = session.handle(Event::Drop(target.to_string()))
    else {
        if !quiet {
            println!("Nothing to move.");
        }
        return Ok(());
    };

    let roots = store.roots()?;
    let Some(plan) = catalog::plan_move(&roots, &dragged, &target) else {
        if !quiet {
            println!("Nothing to move.");
        }
        return Ok(());
    };

    let applied = plan.apply(store);
    let reloaded = store.roots()?;

    if quiet {
        for root in &reloaded {
            println!("{}", root.id);
        }
    } else {
        let heading = if applied.is_ok() {
            "New order:"
        } else {
            "Order now in the store:"
        };
        println!("{heading}");
        println!("{}", output::category_flat(&reloaded, false));
    }

    applied?;
    Ok(())
}

/// Delete a category and all of its sub-categories, with confirmation
///
/// Products referencing the deleted ids are left orphaned by design.
///
/// # Errors
/// Returns an error if the id is unknown, the prompt cannot be read, or
/// store operations fail
pub fn rm(store: &Store, id: &str, yes: bool, quiet: bool) -> Result<()> {
    let Some(category) = store.get_category(id)? else {
        return Err(ShelfrError::Validation(format!("unknown category: {id}")));
    };
    let children = store.children_of(id)?;

    if !yes {
        let prompt = if children.is_empty() {
            format!("Delete '{}'?", category.name)
        } else {
            format!(
                "Delete '{}' and {} sub-categor{}?",
                category.name,
                children.len(),
                if children.len() == 1 { "y" } else { "ies" }
            )
        };
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(|e| ShelfrError::Validation(format!("Failed to read input: {e}")))?;
        if !confirmed {
            if !quiet {
                println!("Aborted.");
            }
            return Ok(());
        }
    }

    let removed = catalog::cascade_delete(store, id)?;
    let remaining = store.list_categories()?;

    if !quiet {
        println!(
            "Removed {removed} categor{} ({} remaining)",
            if removed == 1 { "y" } else { "ies" },
            remaining.len()
        );
    }
    Ok(())
}
