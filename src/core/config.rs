// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;

use crate::models::{MemorableOptions, RandomOptions};

// Configuration for the generator service
#[derive(Debug, Clone)]
pub struct Config {
    // Web Interface
    pub web_address: String,
    pub web_port: u16,

    // Password Generation
    pub default_password_length: usize,
    pub default_password_exclude_similar: bool,
    pub min_password_length: usize,
    pub max_password_length: usize,

    // Passphrase Generation
    pub default_word_count: usize,
    pub default_separator: String,
    pub max_word_count: usize,

    // Batches
    pub max_batch_count: usize,

    // Logging
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,

    // Problems found while loading, logged once the logger is installed
    pub load_warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Web Interface
            web_address: "127.0.0.1".to_string(),
            web_port: 8080,

            // Password Generation
            default_password_length: 16,
            default_password_exclude_similar: false,
            min_password_length: 8,
            max_password_length: 128,

            // Passphrase Generation
            default_word_count: 4,
            default_separator: "-".to_string(),
            max_word_count: 20,

            // Batches
            max_batch_count: 10,

            // Logging
            log_level: LevelFilter::Info,
            log_file: None,

            load_warnings: Vec::new(),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|val| val.parse().ok())
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        // Web Interface
        if let Ok(address) = env::var("WEB_ADDRESS") {
            config.web_address = address;
        }

        if let Some(port) = parse_var("WEB_PORT") {
            config.web_port = port;
        }

        // Password Generation
        if let Some(length) = parse_var("DEFAULT_PASSWORD_LENGTH") {
            config.default_password_length = length;
        }

        if let Some(exclude) = parse_var("DEFAULT_PASSWORD_EXCLUDE_SIMILAR") {
            config.default_password_exclude_similar = exclude;
        }

        if let Some(min) = parse_var("MIN_PASSWORD_LENGTH") {
            config.min_password_length = min;
        }

        if let Some(max) = parse_var("MAX_PASSWORD_LENGTH") {
            config.max_password_length = max;
        }

        // Passphrase Generation
        if let Some(words) = parse_var("DEFAULT_WORD_COUNT") {
            config.default_word_count = words;
        }

        if let Ok(separator) = env::var("DEFAULT_SEPARATOR") {
            config.default_separator = separator;
        }

        if let Some(max) = parse_var("MAX_WORD_COUNT") {
            config.max_word_count = max;
        }

        // Batches
        if let Some(max) = parse_var::<usize>("MAX_BATCH_COUNT") {
            config.max_batch_count = max.max(1);
        }

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => config.load_warnings.push(format!(
                    "Unknown log level '{}', using {}",
                    level, config.log_level
                )),
            }
        }

        if let Ok(file) = env::var("LOG_FILE") {
            if !file.trim().is_empty() {
                config.log_file = Some(PathBuf::from(file));
            }
        }

        config.normalize();
        config
    }

    // Fall back to defaults for bounds that contradict each other
    fn normalize(&mut self) {
        let defaults = Config::default();

        if self.min_password_length > self.max_password_length {
            self.load_warnings.push(format!(
                "MIN_PASSWORD_LENGTH {} exceeds MAX_PASSWORD_LENGTH {}, using defaults",
                self.min_password_length, self.max_password_length
            ));
            self.min_password_length = defaults.min_password_length;
            self.max_password_length = defaults.max_password_length;
        }

        if self.default_password_length < self.min_password_length
            || self.default_password_length > self.max_password_length
        {
            let fallback = defaults
                .default_password_length
                .clamp(self.min_password_length, self.max_password_length);
            self.load_warnings.push(format!(
                "DEFAULT_PASSWORD_LENGTH {} is outside {}..={}, using {}",
                self.default_password_length, self.min_password_length, self.max_password_length, fallback
            ));
            self.default_password_length = fallback;
        }

        if self.max_word_count == 0 {
            self.load_warnings.push("MAX_WORD_COUNT must be at least 1, using default".to_string());
            self.max_word_count = defaults.max_word_count;
        }

        if self.default_word_count < 1 || self.default_word_count > self.max_word_count {
            let fallback = defaults.default_word_count.clamp(1, self.max_word_count);
            self.load_warnings.push(format!(
                "DEFAULT_WORD_COUNT {} is outside 1..={}, using {}",
                self.default_word_count, self.max_word_count, fallback
            ));
            self.default_word_count = fallback;
        }
    }

    pub fn default_random_options(&self) -> RandomOptions {
        RandomOptions {
            length: self.default_password_length,
            exclude_similar: self.default_password_exclude_similar,
            ..Default::default()
        }
    }

    pub fn default_memorable_options(&self) -> MemorableOptions {
        MemorableOptions {
            word_count: self.default_word_count,
            separator: self.default_separator.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_generator_defaults() {
        let config = Config::default();
        assert_eq!(config.default_random_options(), RandomOptions::default());
        assert_eq!(config.default_memorable_options(), MemorableOptions::default());
        assert_eq!(config.max_batch_count, 10);
    }

    #[test]
    fn test_default_length_outside_bounds_falls_back() {
        let mut config = Config {
            default_password_length: 4,
            ..Config::default()
        };
        config.normalize();
        assert_eq!(config.default_password_length, 16);
        assert_eq!(config.load_warnings.len(), 1);
        assert!(config.load_warnings[0].contains("DEFAULT_PASSWORD_LENGTH 4"));

        let request = config.default_random_options();
        assert!(request.validate(config.min_password_length, config.max_password_length).is_ok());
    }

    #[test]
    fn test_fallback_respects_narrow_bounds() {
        let mut config = Config {
            min_password_length: 20,
            max_password_length: 30,
            default_password_length: 50,
            ..Config::default()
        };
        config.normalize();
        assert_eq!(config.default_password_length, 20);
    }

    #[test]
    fn test_inverted_bounds_reset() {
        let mut config = Config {
            min_password_length: 64,
            max_password_length: 12,
            ..Config::default()
        };
        config.normalize();
        assert_eq!(config.min_password_length, 8);
        assert_eq!(config.max_password_length, 128);
        assert_eq!(config.default_password_length, 16);
        assert_eq!(config.load_warnings.len(), 1);
    }

    #[test]
    fn test_default_word_count_outside_bounds() {
        let mut config = Config {
            default_word_count: 30,
            ..Config::default()
        };
        config.normalize();
        assert_eq!(config.default_word_count, 4);
        assert!(config.load_warnings[0].contains("DEFAULT_WORD_COUNT 30"));
    }

    #[test]
    fn test_consistent_config_has_no_warnings() {
        let mut config = Config::default();
        config.normalize();
        assert!(config.load_warnings.is_empty());
    }
}
