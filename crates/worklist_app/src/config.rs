//! RON-backed configuration for the console binary.
//!
//! Reads `worklist.ron` from the working directory. A missing file yields
//! defaults; a malformed file logs a warning and yields defaults.

use std::fs;
use std::path::Path;

use batch_logging::batch_warn;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILENAME: &str = "worklist.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub request_timeout_secs: u64,
    pub simulate_delay_secs: u64,
    pub simulate_timeout_secs: u64,
    pub blank_rows: u32,
    pub file_prefix: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 10,
            simulate_delay_secs: 2,
            simulate_timeout_secs: 60,
            blank_rows: 10,
            file_prefix: "worklist".to_string(),
        }
    }
}

pub fn load(dir: &Path) -> AppConfig {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return AppConfig::default();
        }
        Err(err) => {
            batch_warn!("Failed to read config from {:?}: {}", path, err);
            return AppConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => config,
        Err(err) => {
            batch_warn!("Failed to parse config from {:?}: {}", path, err);
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{load, AppConfig, CONFIG_FILENAME};
    use std::fs;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load(dir.path()), AppConfig::default());
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "(request_timeout_secs: 30, file_prefix: \"crawl\")",
        )
        .unwrap();

        let config = load(dir.path());
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.file_prefix, "crawl");
        assert_eq!(config.simulate_delay_secs, 2);
        assert_eq!(config.blank_rows, 10);
    }

    #[test]
    fn malformed_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "not ron at all (").unwrap();
        assert_eq!(load(dir.path()), AppConfig::default());
    }
}
