//! Shelfr - a category-driven product catalog organizer
//!
//! This library maintains a two-level product category hierarchy
//! (category -> sub-category) with persisted sibling ordering and cascading
//! deletion, and filters a product catalog by category, sub-category, and
//! tag facets using an embedded database.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod filter;
pub mod model;
pub mod output;
pub mod session;
pub mod store;

pub use model::{Category, Product, ProductDraft, Tag};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum ShelfrError {
    /// Store error
    #[error("Store error: {0}")]
    Store(#[from] store::StoreError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON import/export error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    Validation(String),
}
