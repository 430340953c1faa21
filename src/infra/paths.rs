// src/infra/paths.rs — Config file location
//
// SECRET_SANTA_HOME overrides everything. Otherwise config lives in
// ~/.secret-santa/.

use std::path::PathBuf;

/// Returns the SECRET_SANTA_HOME override, if set.
fn santa_home() -> Option<PathBuf> {
    std::env::var_os("SECRET_SANTA_HOME").map(PathBuf::from)
}

/// Configuration directory, or `None` when no home directory can be found.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(home) = santa_home() {
        return Some(home);
    }
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(".secret-santa"))
}

pub fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}
