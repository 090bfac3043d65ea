use std::env;
use std::path::{Path, PathBuf};

/// Directory name used under the user's config base.
const APP_DIR: &str = "sportify-merch";

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// What: Return `$HOME/.config/sportify-merch`, ensuring it exists.
///
/// Inputs: none
///
/// Output: `Some(PathBuf)` when HOME is set and the directory can be created; `None` otherwise.
fn home_config_dir() -> Option<PathBuf> {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join(APP_DIR);
        if std::fs::create_dir_all(&dir).is_ok() {
            return Some(dir);
        }
    }
    None
}

/// Config directory (ensured to exist): `$HOME/.config/sportify-merch`, else
/// `$XDG_CONFIG_HOME/sportify-merch`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(dir) = home_config_dir() {
        return dir;
    }
    let base = xdg_base_dir("XDG_CONFIG_HOME", &[".config"]);
    let dir = base.join(APP_DIR);
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// What: Pick the config directory, honouring a command-line override.
///
/// Inputs:
/// - `override_dir`: Value of `--config-dir`, if given
///
/// Output:
/// - The override (created if missing) or [`config_dir`].
#[must_use]
pub fn resolve_config_dir(override_dir: Option<&Path>) -> PathBuf {
    match override_dir {
        Some(dir) => {
            if let Err(e) = std::fs::create_dir_all(dir) {
                tracing::warn!(path = %dir.display(), error = %e, "[Config] Cannot create config dir");
            }
            dir.to_path_buf()
        }
        None => config_dir(),
    }
}

/// Logs directory under `base` (ensured to exist).
#[must_use]
pub fn logs_dir(base: &Path) -> PathBuf {
    let dir = base.join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: An explicit override is created and used verbatim; logs nest under it.
    ///
    /// Inputs:
    /// - Temp dir joined with "cfg" (not yet existing).
    ///
    /// Output:
    /// - Returned path equals the override and exists; logs dir ends with "logs" and exists.
    fn override_dir_is_created_and_used() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let want = tmp.path().join("cfg");
        let got = resolve_config_dir(Some(&want));
        assert_eq!(got, want);
        assert!(got.is_dir());
        let logs = logs_dir(&got);
        assert!(logs.ends_with("logs"));
        assert!(logs.is_dir());
    }
}
