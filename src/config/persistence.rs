use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::AppConfig;

/// Returns the platform-specific base config directory.
///
/// Resolution order:
/// 1. `XDG_CONFIG_HOME`
/// 2. `$HOME/.config`
/// 3. `%USERPROFILE%/.config`
pub(crate) fn config_base_dir() -> Option<PathBuf> {
    base_dir_from(|name| std::env::var_os(name))
}

/// Applies the resolution order to an arbitrary variable lookup.
/// Empty values count as unset.
fn base_dir_from(lookup: impl Fn(&str) -> Option<OsString>) -> Option<PathBuf> {
    let var = |name: &str| lookup(name).filter(|value| !value.is_empty());
    var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| var("HOME").map(|home| PathBuf::from(home).join(".config")))
        .or_else(|| var("USERPROFILE").map(|home| PathBuf::from(home).join(".config")))
}

/// Returns the path to `~/.config/bizrecovery/config.ron`.
fn config_path() -> Option<PathBuf> {
    config_base_dir().map(|base| base.join("bizrecovery").join("config.ron"))
}

/// Loads the config from disk, falling back to defaults on any error.
pub(crate) fn load_config() -> AppConfig {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => AppConfig::default(),
    }
}

pub(crate) fn load_config_from(path: &Path) -> AppConfig {
    let Ok(contents) = fs::read_to_string(path) else {
        return AppConfig::default();
    };
    ron::from_str(&contents).unwrap_or_else(|error| {
        debug!(path = %path.display(), %error, "ignoring unreadable config");
        AppConfig::default()
    })
}

/// Persists the config to disk. Errors are silently ignored.
pub(crate) fn save_config(config: &AppConfig) {
    if let Some(path) = config_path() {
        save_config_to(config, &path);
    }
}

pub(crate) fn save_config_to(config: &AppConfig, path: &Path) {
    let Some(dir) = path.parent() else {
        return;
    };
    if fs::create_dir_all(dir).is_err() {
        return;
    }
    let pretty = ron::ser::PrettyConfig::default();
    let Ok(serialized) = ron::ser::to_string_pretty(config, pretty) else {
        return;
    };
    let _ = fs::write(path, serialized);
}
