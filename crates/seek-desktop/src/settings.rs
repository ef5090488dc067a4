//! Locating and loading the configuration file

use std::path::{Path, PathBuf};

use seek_core::config::SearchConfig;

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "SEEK_CONFIG";

const APP_DIR: &str = "seek";
const CONFIG_FILE: &str = "config.json";

/// Pick the config path: explicit override first, then the platform config dir
pub fn resolve_config_path(
    override_path: Option<PathBuf>,
    config_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    override_path
        .filter(|path| !path.as_os_str().is_empty())
        .or_else(|| config_dir.map(|dir| dir.join(APP_DIR).join(CONFIG_FILE)))
}

/// Load the config for this process.
///
/// An unreadable or invalid file is logged and replaced by the defaults so a
/// bad edit never keeps the window from opening.
pub fn load_config() -> SearchConfig {
    let path = resolve_config_path(
        std::env::var_os(CONFIG_ENV).map(PathBuf::from),
        dirs::config_dir(),
    );

    match path {
        Some(path) => load_or_default(&path),
        None => {
            tracing::warn!("No config directory available, using defaults");
            SearchConfig::default()
        }
    }
}

fn load_or_default(path: &Path) -> SearchConfig {
    SearchConfig::load_from(path).unwrap_or_else(|e| {
        tracing::error!("Failed to load config from {}: {}", path.display(), e);
        SearchConfig::default()
    })
}
