//! Move-to-reorder engine for root categories
//!
//! Turns a "move A onto B" gesture into a new sibling order and persists
//! it. Only root categories are reorderable; sub-categories keep their
//! creation order.
//!
//! Planning is pure and splice-based, not a swap: the moved item lands
//! immediately after the target when it came from the left, immediately
//! before when it came from the right, so it ends up exactly where it was
//! dropped. Orders are then re-derived as zero-based indices over the whole
//! sequence, which also heals any gaps left by earlier deletions.
//!
//! Persistence is a batch of independent per-record writes, applied
//! sequentially. On failure the caller re-lists categories from the store;
//! the surfaced order therefore always reflects persisted state, and a
//! partially applied batch is visible as such rather than silently retained
//! as an unsaved optimistic order.

use crate::model::Category;
use crate::store::{Store, StoreError};

/// The order rewrites a move gesture produces
///
/// Holds only the records whose persisted `order` differs from their new
/// zero-based index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReorderPlan {
    pub writes: Vec<(String, u32)>,
}

impl ReorderPlan {
    /// Persist every rewrite sequentially
    ///
    /// Not atomic: a mid-batch failure leaves earlier writes in place.
    /// Callers re-list after calling this, successful or not.
    ///
    /// # Errors
    ///
    /// Returns the first `StoreError` encountered.
    pub fn apply(&self, store: &Store) -> Result<(), StoreError> {
        for (id, order) in &self.writes {
            store.set_category_order(id, *order)?;
        }
        Ok(())
    }
}

/// Plan the order rewrites for moving `dragged` onto `target`
///
/// `roots` is the current root sequence, ordered by rank. Returns `None`
/// for a no-op gesture: dragged and target identical, or either id not
/// present in the sequence.
///
/// # Examples
/// ```
/// # use shelfr::catalog::plan_move;
/// # use shelfr::model::Category;
/// # use chrono::Utc;
/// # let cat = |id: &str, order| Category {
/// #     id: id.into(), name: id.into(), parent_id: None, order,
/// #     created_at: Utc::now(),
/// # };
/// let roots = vec![cat("c1", 0), cat("c2", 1)];
/// let plan = plan_move(&roots, "c2", "c1").unwrap();
/// assert_eq!(plan.writes, vec![("c2".into(), 0), ("c1".into(), 1)]);
/// ```
#[must_use]
pub fn plan_move(roots: &[Category], dragged: &str, target: &str) -> Option<ReorderPlan> {
    if dragged == target {
        return None;
    }
    let from = roots.iter().position(|c| c.id == dragged)?;
    let to = roots.iter().position(|c| c.id == target)?;

    let mut sequence: Vec<&Category> = roots.iter().collect();
    let moved = sequence.remove(from);
    let target_index = sequence.iter().position(|c| c.id == target)?;

    // Coming from the left lands after the target; from the right, before.
    let insert_at = if from < to {
        target_index + 1
    } else {
        target_index
    };
    sequence.insert(insert_at, moved);

    let writes: Vec<(String, u32)> = sequence
        .iter()
        .enumerate()
        .filter(|(index, c)| c.order != *index as u32)
        .map(|(index, c)| (c.id.clone(), index as u32))
        .collect();

    if writes.is_empty() {
        return None;
    }
    Some(ReorderPlan { writes })
}
