//! Bootstrap actions
//!
//! Actions for application initialization and configuration loading.

use finder_config::AppConfig;

#[derive(Debug, Clone)]
pub enum BootstrapAction {
    /// Bootstrap process started
    Start,
    /// Application configuration loaded
    ConfigLoaded(AppConfig),
}
