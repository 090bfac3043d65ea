//! Command-line argument definition and processing.

use std::path::PathBuf;

use clap::Parser;

use crate::args::{browse, detail, utils, wishlist};
use crate::catalog::Catalog;
use crate::config::{Settings, ensure_settings_file, load_settings, resolve_config_dir};
use crate::state::AppState;
use crate::store::{FileStore, KeyValueStore, MemoryStore, WishlistStore};

/// Error type for command-line processing.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Sportify merch - browse the merchandise catalog and manage your wishlist
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "sportify-merch")]
#[command(version)]
#[command(about = "Browse the Sportify merchandise catalog and manage your wishlist", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Only show products whose name or description contains this text
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only show products in this category; repeat to require several (e.g. -c Football -c Accessories)
    #[arg(short, long = "category")]
    pub categories: Vec<String>,

    /// Only show products that are in stock
    #[arg(long)]
    pub in_stock: bool,

    /// Sort order: newest, price_asc, price_desc, name_asc (default from settings.conf)
    #[arg(long)]
    pub sort: Option<String>,

    /// Toggle wishlist membership for a product id; may be repeated
    #[arg(short = 't', long = "toggle-wishlist")]
    pub toggle_wishlist: Vec<String>,

    /// List wishlisted products instead of the catalog
    #[arg(short = 'w', long)]
    pub wishlist: bool,

    /// Show the detail view for one product id
    #[arg(short = 'd', long)]
    pub details: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Keep wishlist changes in memory only; nothing is written to disk
    #[arg(long)]
    pub ephemeral: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration directory (default: ~/.config/sportify-merch)
    #[arg(long)]
    pub config_dir: Option<PathBuf>,
}

/// What: Build the key-value backend for this run.
///
/// Inputs:
/// - `args`: Parsed arguments (`--ephemeral`)
/// - `settings`: Loaded settings (storage file and wishlist key)
/// - `dir`: Config directory
///
/// Output:
/// - A `FileStore`, or in ephemeral mode a `MemoryStore` seeded with the persisted wishlist.
fn open_backend(args: &Args, settings: &Settings, dir: &std::path::Path) -> Box<dyn KeyValueStore> {
    let file = FileStore::open(settings.storage_path(dir));
    if !args.ephemeral {
        return Box::new(file);
    }
    let mut mem = MemoryStore::new();
    if let Some(existing) = file.get(&settings.wishlist_key)
        && let Err(e) = mem.set(&settings.wishlist_key, &existing)
    {
        tracing::warn!(error = %e, "[Args] Could not seed in-memory store");
    }
    tracing::info!("[Args] Ephemeral mode: wishlist changes stay in memory");
    Box::new(mem)
}

/// What: Run one command-line invocation.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - `Ok(())` after printing the requested view; `Err` for invalid arguments.
///
/// Details:
/// - Settings come from `settings.conf` in the config directory (a skeleton is written
///   on first run); query flags override them.
/// - Wishlist toggles are applied first, then exactly one view is printed:
///   details, wishlist, or the filtered catalog.
///
/// # Errors
/// - Unknown category or sort key, or a `--details` id not in the catalog.
pub fn process_args(args: &Args) -> Result<()> {
    let dir = resolve_config_dir(args.config_dir.as_deref());
    if let Err(e) = ensure_settings_file(&dir) {
        tracing::warn!(path = %dir.display(), error = %e, "[Args] Could not write settings skeleton");
    }
    let settings = load_settings(&dir);
    let query = utils::build_query(args, &settings)?;

    let backend = open_backend(args, &settings, &dir);
    let store = WishlistStore::load_with_key(backend, &settings.wishlist_key);
    let mut app = AppState::new(Catalog::sportify(), store, query);

    for id in &args.toggle_wishlist {
        wishlist::handle_toggle(&mut app, id);
    }

    if let Some(id) = &args.details {
        return detail::handle_details(&mut app, id, args.json);
    }
    if args.wishlist {
        wishlist::handle_list(&app, args.json)?;
        return Ok(());
    }
    if wants_browse(args) {
        browse::handle_browse(&app, args.json)?;
    }
    Ok(())
}

/// What: Decide whether the filtered catalog is printed after toggles.
///
/// Inputs:
/// - `args`: Parsed arguments (details and wishlist views already handled)
///
/// Output:
/// - `true` unless the run only toggles wishlist entries.
///
/// Details:
/// - Any explicit query or output flag (`--search`, `--category`, `--in-stock`,
///   `--sort`, `--json`) asks for the listing even alongside `--toggle-wishlist`.
#[must_use]
pub fn wants_browse(args: &Args) -> bool {
    args.toggle_wishlist.is_empty()
        || args.search.is_some()
        || !args.categories.is_empty()
        || args.in_stock
        || args.sort.is_some()
        || args.json
}
