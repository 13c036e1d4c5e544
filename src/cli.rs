//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for shelfr using the
//! `clap` crate.
//!
//! # Commands
//!
//! - **category**: Manage the category hierarchy (add, list, move, rm)
//! - **product**: Add or import products
//! - **products**: Render the product grid through the facet filter
//! - **tag**: Manage tags
//! - **tags**: List tags with usage counts
//!
//! # Design Features
//!
//! - Global `--quiet` flag for scripting-friendly output
//! - Global `--store` to pick a named store or an explicit path
//! - Command aliases (e.g., `cat` for `category`, `ls` for `products`)

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Shelfr - category-driven product catalog organizer
#[derive(Parser, Debug)]
#[command(name = "shelfr", version, about)]
pub struct Cli {
    /// Suppress informational output (only print results)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Store to operate on: a configured name or a filesystem path
    #[arg(short, long, global = true)]
    pub store: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the category hierarchy
    #[command(visible_alias = "cat")]
    Category {
        #[command(subcommand)]
        command: CategoryCommands,
    },

    /// Add or import products
    Product {
        #[command(subcommand)]
        command: ProductCommands,
    },

    /// Render the product grid through the facet filter
    #[command(visible_alias = "ls")]
    Products {
        /// Only products in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Only products in this sub-category
        #[arg(short = 'u', long)]
        sub_category: Option<String>,

        /// Tag slug to filter by (repeatable; under the toggle policy,
        /// repeating the active slug clears it again)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Emit the matching products as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage tags
    Tag {
        #[command(subcommand)]
        command: TagCommands,
    },

    /// List all tags with usage counts
    Tags,
}

#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// Add a category (root, or sub-category with --parent)
    #[command(visible_alias = "a")]
    Add {
        /// Display name of the new category
        name: String,

        /// Id of the parent root category
        #[arg(short, long)]
        parent: Option<String>,
    },

    /// List the category tree
    #[command(visible_alias = "l")]
    List {
        /// Print the flat ordered list instead of the tree
        #[arg(long)]
        flat: bool,
    },

    /// Move a root category onto another (it lands where it is dropped)
    #[command(visible_alias = "mv")]
    Move {
        /// Id of the category being moved
        dragged: String,

        /// Id of the category it is dropped onto
        target: String,
    },

    /// Delete a category and all of its sub-categories
    Rm {
        /// Id of the category to delete
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProductCommands {
    /// Add a single product
    Add {
        /// Display name
        name: String,

        /// Base price
        #[arg(short, long)]
        price: f64,

        /// Category id the product belongs to
        #[arg(short, long)]
        category: String,

        /// Sub-category id, if any
        #[arg(short = 'u', long)]
        sub_category: Option<String>,

        /// Tag slugs (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Image URLs (repeatable; the first is the cover)
        #[arg(short, long = "image")]
        images: Vec<String>,
    },

    /// Import products from a JSON array file
    Import {
        /// Path to the JSON file
        file: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum TagCommands {
    /// Add a tag (slug derived from the name unless given)
    Add {
        /// Display name
        name: String,

        /// Explicit slug to use as the filter key
        #[arg(long)]
        slug: Option<String>,
    },

    /// List all tags with usage counts
    List,
}
