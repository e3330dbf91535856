//! File logger
//!
//! The terminal belongs to the UI, so log output goes to a file. Everything
//! down to `Trace` is accepted by the writer; the effective level is set with
//! `log::set_max_level` once the configuration is known.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use anyhow::Context;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// Level used until the configuration has been loaded
const STARTUP_LEVEL: LevelFilter = LevelFilter::Info;

/// Default log file: `<tmp>/schema-finder/schema-finder-<date>.log`
pub fn default_log_path() -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d");
    std::env::temp_dir()
        .join("schema-finder")
        .join(format!("schema-finder-{}.log", date))
}

/// Install the file logger and return the path it writes to
pub fn init(log_file: Option<&Path>) -> anyhow::Result<PathBuf> {
    let path = log_file.map_or_else(default_log_path, Path::to_path_buf);

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    }

    let file = File::options()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    WriteLogger::init(LevelFilter::Trace, config, file).context("failed to install logger")?;
    log::set_max_level(STARTUP_LEVEL);

    Ok(path)
}
