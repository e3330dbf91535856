//! Configuration for schema-finder
//!
//! Config files are looked up in this order:
//! 1. the path given on the command line
//! 2. `schema-finder.toml` in the current directory
//! 3. `config.toml` in the user config directory (e.g. `~/.config/schema-finder/`)

mod app_config;

pub use app_config::AppConfig;

use anyhow::Context;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the config file in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "schema-finder.toml";

/// User-level config file, if the platform has a config directory.
pub fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "schema-finder").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Candidate config files, most specific first.
pub fn config_candidates(explicit: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(path) = explicit {
        candidates.push(path.to_path_buf());
    }
    candidates.push(PathBuf::from(LOCAL_CONFIG_FILE));
    if let Some(path) = user_config_path() {
        candidates.push(path);
    }
    candidates
}

/// Read the first existing config file.
///
/// An explicit path that cannot be read is an error; missing default
/// locations are skipped.
pub fn load_config_file(explicit: Option<&Path>) -> anyhow::Result<Option<(PathBuf, String)>> {
    if let Some(path) = explicit {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        return Ok(Some((path.to_path_buf(), content)));
    }

    for path in config_candidates(None) {
        match fs::read_to_string(&path) {
            Ok(content) => return Ok(Some((path, content))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => {
                log::warn!("Skipping unreadable config file {}: {}", path.display(), e);
            }
        }
    }

    Ok(None)
}
