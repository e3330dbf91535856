//! Application configuration
//!
//! Configuration loaded from schema-finder.toml.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration loaded from schema-finder.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Width of one column in terminal cells
    #[serde(default = "default_column_width")]
    pub column_width: u16,

    /// Accept h/j/k/l, g, G and K next to the arrow keys
    #[serde(default = "default_vim_keys")]
    pub vim_keys: bool,

    /// Mark required properties with `*` in the columns
    #[serde(default = "default_show_required_marker")]
    pub show_required_marker: bool,

    /// Log level for the log file (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_column_width() -> u16 {
    28
}

fn default_vim_keys() -> bool {
    true
}

fn default_show_required_marker() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            column_width: default_column_width(),
            vim_keys: default_vim_keys(),
            show_required_marker: default_show_required_marker(),
            log_level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load config from the explicit path, CWD, or user config dir, or use defaults
    pub fn load(explicit: Option<&Path>) -> Self {
        match crate::load_config_file(explicit) {
            Ok(Some((path, content))) => match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from {}", path.display());
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file {}: {}", path.display(), e);
                }
            },
            Ok(None) => {}
            Err(e) => {
                log::warn!("{:#}", e);
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// `log_level` as a filter, falling back to `Info` for unknown names
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}
