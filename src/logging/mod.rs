// src/logging/mod.rs
use std::fs::{self, OpenOptions};
use std::io;

use crate::core::config::Config;

/// Install the global `env_logger`. With `LOG_FILE` set, output goes to that
/// file (appending); otherwise to stderr.
///
/// Generated passwords must never reach the log. Only modes, counts, pool
/// sizes and tiers are logged.
pub fn init(config: &Config) -> io::Result<()> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(true)
        .parse_default_env();

    if let Some(path) = &config.log_file {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    // A second init (e.g. from tests) is harmless
    if builder.try_init().is_err() {
        log::debug!("Logger already initialised");
    }

    Ok(())
}
