use std::fs;
use std::path::{Path, PathBuf};

use crate::config::parsing::{parse_bool, split_setting};
use crate::state::{QueryParams, SortKey};
use crate::store::DEFAULT_WISHLIST_KEY;

/// File name of the settings file inside the config directory.
pub const SETTINGS_FILE: &str = "settings.conf";

/// Commented skeleton written when no settings file exists.
pub const SETTINGS_SKELETON: &str = "\
# Sportify merchandise settings
#
# Lines are `key = value`; `#` and `//` start comments.

# Initial sort order: newest | price_asc | price_desc | name_asc
sort_mode = newest

# Only show products that are in stock (true/false)
in_stock_only = false

# Storage key holding the wishlist
wishlist_key = sportify-wishlist

# Key-value storage file, relative to this directory
storage_file = storage.json
";

/// User-adjustable settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Sort key the grid starts with.
    pub sort_mode: SortKey,
    /// Whether the in-stock switch starts on.
    pub in_stock_only: bool,
    /// Storage key for the wishlist.
    pub wishlist_key: String,
    /// Storage file name (relative paths resolve against the config dir).
    pub storage_file: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sort_mode: SortKey::Newest,
            in_stock_only: false,
            wishlist_key: DEFAULT_WISHLIST_KEY.to_string(),
            storage_file: "storage.json".to_string(),
        }
    }
}

impl Settings {
    /// Query parameters a fresh session starts with.
    #[must_use]
    pub fn initial_query(&self) -> QueryParams {
        QueryParams::default()
            .with_sort_key(self.sort_mode)
            .with_in_stock_only(self.in_stock_only)
    }

    /// Absolute location of the storage file for config dir `base`.
    #[must_use]
    pub fn storage_path(&self, base: &Path) -> PathBuf {
        base.join(&self.storage_file)
    }
}

/// What: Parse settings file content.
///
/// Inputs:
/// - `content`: Text of `settings.conf`
///
/// Output:
/// - `Settings` with recognised keys applied over the defaults.
///
/// Details:
/// - Unknown keys and unparsable values are ignored (logged at debug level).
/// - Empty `wishlist_key` / `storage_file` values keep the defaults.
#[must_use]
pub fn parse_settings(content: &str) -> Settings {
    let mut settings = Settings::default();
    for line in content.lines() {
        let Some((key, val)) = split_setting(line) else {
            continue;
        };
        match key.as_str() {
            "sort_mode" | "sort" | "results_sort" => {
                if let Some(sk) = SortKey::from_config_key(val) {
                    settings.sort_mode = sk;
                } else {
                    tracing::debug!(value = val, "[Config] Unknown sort_mode ignored");
                }
            }
            "in_stock_only" | "stock_only" => {
                settings.in_stock_only = parse_bool(val);
            }
            "wishlist_key" => {
                if !val.is_empty() {
                    settings.wishlist_key = val.to_string();
                }
            }
            "storage_file" | "storage" => {
                if !val.is_empty() {
                    settings.storage_file = val.to_string();
                }
            }
            other => {
                tracing::debug!(key = other, "[Config] Unknown setting ignored");
            }
        }
    }
    settings
}

/// What: Load settings from `dir/settings.conf`.
///
/// Inputs:
/// - `dir`: Config directory
///
/// Output:
/// - Parsed settings, or defaults when the file is missing or unreadable.
#[must_use]
pub fn load_settings(dir: &Path) -> Settings {
    let path = dir.join(SETTINGS_FILE);
    match fs::read_to_string(&path) {
        Ok(content) => {
            let s = parse_settings(&content);
            tracing::debug!(path = %path.display(), ?s, "[Config] Settings loaded");
            s
        }
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), error = %e, "[Config] Failed to read settings");
            }
            Settings::default()
        }
    }
}

/// What: Write the commented settings skeleton if no settings file exists.
///
/// Inputs:
/// - `dir`: Config directory
///
/// Output:
/// - `Ok(true)` when the skeleton was written, `Ok(false)` when a file already existed.
///
/// # Errors
/// - Returns the I/O error when the directory or file cannot be written.
pub fn ensure_settings_file(dir: &Path) -> crate::store::Result<bool> {
    let path = dir.join(SETTINGS_FILE);
    if path.exists() {
        return Ok(false);
    }
    fs::create_dir_all(dir)?;
    fs::write(&path, SETTINGS_SKELETON)?;
    tracing::info!(path = %path.display(), "[Config] Wrote settings skeleton");
    Ok(true)
}
