//! App Config Middleware
//!
//! Handles loading application configuration on bootstrap.

use std::path::PathBuf;

use crate::actions::{Action, BootstrapAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;
use finder_config::AppConfig;

/// Middleware for loading application configuration
pub struct AppConfigMiddleware {
    /// Path given with `--config`, searched before the default locations
    config_path: Option<PathBuf>,
    config_loaded: bool,
}

impl AppConfigMiddleware {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            config_loaded: false,
        }
    }
}

impl Middleware for AppConfigMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Bootstrap(BootstrapAction::Start) => {
                if !self.config_loaded {
                    log::info!("AppConfigMiddleware: Loading application configuration");
                    let config = AppConfig::load(self.config_path.as_deref());
                    log::set_max_level(config.level_filter());
                    log::info!(
                        "AppConfigMiddleware: Loaded config (column_width: {}, vim_keys: {}, log_level: {})",
                        config.column_width,
                        config.vim_keys,
                        config.log_level
                    );
                    dispatcher.dispatch(Action::Bootstrap(BootstrapAction::ConfigLoaded(config)));
                    self.config_loaded = true;
                }
                true // Pass through
            }
            _ => true, // All other actions pass through
        }
    }
}
