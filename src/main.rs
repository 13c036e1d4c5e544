//! Shelfr CLI application entry point
//!
//! Command-line interface for maintaining the category hierarchy and
//! browsing the product catalog through facet filters.
//!
//! # Usage
//!
//! ```bash
//! # Build the hierarchy
//! shelfr category add "Tea"
//! shelfr category add "Green" --parent cat_1
//! shelfr category list
//!
//! # Reorder root categories (the moved one lands where it is dropped)
//! shelfr category mv cat_2 cat_1
//!
//! # Delete a category together with its sub-categories
//! shelfr category rm cat_1
//!
//! # Products and facet filtering
//! shelfr product import products.json
//! shelfr products --category cat_1 --tag bestseller
//!
//! # Quiet mode (only output ids)
//! shelfr -q products
//! ```
//!
//! # Configuration
//!
//! On first run, shelfr will prompt for initial setup. Configuration is
//! stored in the user's config directory
//! (`~/.config/shelfr/config.toml` on Linux).

use colored::Colorize;
use shelfr::{
    ShelfrError,
    cli::{CategoryCommands, Cli, Commands, ProductCommands, TagCommands},
    commands,
    config::{ShelfrConfig, first_time_setup},
    store::Store,
};

type Result<T> = std::result::Result<T, ShelfrError>;

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {e}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config = if ShelfrConfig::config_path()?.exists() {
        ShelfrConfig::load()?
    } else if cli.store.is_some() {
        // An explicit store was given; don't force the setup wizard.
        ShelfrConfig::default()
    } else {
        first_time_setup()?
    };

    let quiet = cli.quiet || config.quiet;
    let store_path = config.resolve_store(cli.store.as_deref())?;
    let store = Store::open(&store_path)?;

    match cli.command {
        Commands::Category { command } => match command {
            CategoryCommands::Add { name, parent } => {
                commands::category::add(&store, &name, parent.as_deref(), quiet)
            }
            CategoryCommands::List { flat } => commands::category::list(&store, flat, quiet),
            CategoryCommands::Move { dragged, target } => {
                commands::category::move_(&store, &dragged, &target, quiet)
            }
            CategoryCommands::Rm { id, yes } => commands::category::rm(&store, &id, yes, quiet),
        },
        Commands::Product { command } => match command {
            ProductCommands::Add {
                name,
                price,
                category,
                sub_category,
                tags,
                images,
            } => commands::product::add(
                &store,
                &name,
                price,
                &category,
                sub_category.as_deref(),
                tags,
                images,
                quiet,
            ),
            ProductCommands::Import { file } => commands::product::import(&store, &file, quiet),
        },
        Commands::Products {
            category,
            sub_category,
            tags,
            json,
        } => commands::product::list(
            &store,
            category.as_deref(),
            sub_category.as_deref(),
            &tags,
            config.tag_select,
            json,
            quiet,
        ),
        Commands::Tag { command } => match command {
            TagCommands::Add { name, slug } => {
                commands::tag::add(&store, &name, slug.as_deref(), quiet)
            }
            TagCommands::List => commands::tag::list(&store, quiet),
        },
        Commands::Tags => commands::tag::list(&store, quiet),
    }
}
