//! Shared utilities for argument processing.

use crate::args::Args;
use crate::args::definition::Result;
use crate::config::Settings;
use crate::state::{Category, QueryParams, SortKey};

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `log_level`.
#[must_use]
pub fn determine_log_level(args: &Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Combine settings defaults and command-line flags into query parameters.
///
/// Inputs:
/// - `args`: Parsed arguments
/// - `settings`: Loaded settings
///
/// Output:
/// - `QueryParams` for the session.
///
/// # Errors
/// - Unknown category label or sort key.
pub fn build_query(args: &Args, settings: &Settings) -> Result<QueryParams> {
    let mut query = settings.initial_query();
    if let Some(term) = &args.search {
        query = query.with_search_term(term.as_str());
    }
    if !args.categories.is_empty() {
        let mut cats = Vec::with_capacity(args.categories.len());
        for raw in &args.categories {
            let Some(c) = Category::from_label(raw) else {
                let known: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
                return Err(format!("unknown category '{raw}' (expected one of: {})", known.join(", ")).into());
            };
            cats.push(c);
        }
        query = query.with_categories(cats);
    }
    if args.in_stock {
        query = query.with_in_stock_only(true);
    }
    if let Some(raw) = &args.sort {
        let Some(key) = SortKey::from_config_key(raw) else {
            let known: Vec<&str> = SortKey::ALL.iter().map(|k| k.as_config_key()).collect();
            return Err(format!("unknown sort key '{raw}' (expected one of: {})", known.join(", ")).into());
        };
        query = query.with_sort_key(key);
    }
    Ok(query)
}
