//! Selection state machine and gesture dispatcher
//!
//! Tracks the active facet triple plus any in-flight move gesture, and maps
//! incoming events to the re-render work they require. The machine is
//! deliberately independent of any rendering surface: callers feed it
//! events and act on the returned effect.
//!
//! Changing the category facet always resets the sub-category facet to
//! `All`; a sub-category selection is only meaningful under its parent.

use serde::{Deserialize, Serialize};

use crate::filter::{Facet, Selection};

/// What re-selecting the already-active tag does
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TagSelectMode {
    /// Re-selecting the active tag clears the facet back to all
    #[default]
    Toggle,
    /// Selecting always sets, never clears
    Set,
}

/// An incoming user gesture
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SelectCategory(Facet),
    SelectSubCategory(Facet),
    SelectTag(Facet),
    DragStart(String),
    DragOver(String),
    Drop(String),
}

/// The work an event requires of the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to do
    None,
    /// Category changed: redraw the sub-category bar and the product grid
    RenderSubCategoryBarAndProducts,
    /// Sub-category or tag changed: redraw the product grid only
    RenderProducts,
    /// A completed move gesture; run the reorder engine, then reload
    Reorder { dragged: String, target: String },
}

/// Per-session selection and drag state
///
/// Lives for the process session; nothing here is persisted.
#[derive(Debug, Clone, Default)]
pub struct Session {
    selection: Selection,
    tag_mode: TagSelectMode,
    dragging: Option<String>,
    hover: Option<String>,
}

impl Session {
    /// Create a session with every facet at all
    #[must_use]
    pub fn new(tag_mode: TagSelectMode) -> Self {
        Self {
            tag_mode,
            ..Self::default()
        }
    }

    /// The current facet triple
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The item currently hovered during a drag, if any
    #[must_use]
    pub fn hover_target(&self) -> Option<&str> {
        self.hover.as_deref()
    }

    /// Dispatch one event, returning the required follow-up work
    pub fn handle(&mut self, event: Event) -> Effect {
        match event {
            Event::SelectCategory(facet) => {
                self.selection.category = facet;
                self.selection.sub_category = Facet::All;
                Effect::RenderSubCategoryBarAndProducts
            }
            Event::SelectSubCategory(facet) => {
                self.selection.sub_category = facet;
                Effect::RenderProducts
            }
            Event::SelectTag(facet) => {
                let toggled_off = self.tag_mode == TagSelectMode::Toggle
                    && !facet.is_all()
                    && self.selection.tag == facet;
                self.selection.tag = if toggled_off { Facet::All } else { facet };
                Effect::RenderProducts
            }
            Event::DragStart(id) => {
                self.dragging = Some(id);
                Effect::None
            }
            Event::DragOver(id) => {
                self.hover = Some(id);
                Effect::None
            }
            Event::Drop(target) => {
                self.hover = None;
                match self.dragging.take() {
                    Some(dragged) if dragged != target => Effect::Reorder { dragged, target },
                    _ => Effect::None,
                }
            }
        }
    }
}
