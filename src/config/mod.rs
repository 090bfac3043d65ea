//! Configuration: config directory layout and the `settings.conf` file.

/// Key/value line parsing helpers.
mod parsing;
/// Path resolution for config directories.
mod paths;
/// Settings type, parsing, and skeleton creation.
mod settings;

pub use paths::{config_dir, logs_dir, resolve_config_dir};
pub use settings::{
    SETTINGS_FILE, SETTINGS_SKELETON, Settings, ensure_settings_file, load_settings,
    parse_settings,
};
