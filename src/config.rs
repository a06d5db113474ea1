use crate::{
    constants::{APP_NAME, BASE_URL_ENV, DEFAULT_BASE_URL, DEFAULT_LOG_LEVEL},
    errors::{ChatError, ChatResult},
};
use once_cell::sync::Lazy;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::RwLock,
};

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub base_url: String,
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: config_dir()
                .map(|dir| dir.join("logs"))
                .unwrap_or_else(|_| PathBuf::from("logs")),
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

/// Loads the config file (creating it with defaults on first run), applies the
/// environment override and installs the result as the global config.
pub fn initialize_config() -> ChatResult<()> {
    let mut config = load_or_create(&get_config_path()?)?;

    if let Ok(url) = env::var(BASE_URL_ENV) {
        config.base_url = url;
    }

    validate_config(&config)?;
    *CONFIG.write().unwrap_or_else(|e| e.into_inner()) = config;

    Ok(())
}

/// Reads the config at `path`, or writes a default one there if none exists.
pub fn load_or_create(path: &Path) -> ChatResult<Config> {
    if path.exists() {
        let config_str = fs::read_to_string(path)
            .map_err(|e| ChatError::config_error(format!("Failed to read config file: {}", e)))?;

        return serde_json::from_str(&config_str)
            .map_err(|e| ChatError::config_error(format!("Failed to parse config: {}", e)));
    }

    let config = Config::default();
    write_config(path, &config)?;
    Ok(config)
}

fn write_config(path: &Path, config: &Config) -> ChatResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            ChatError::config_error(format!("Failed to create config directory: {}", e))
        })?;
    }

    let config_str = serde_json::to_string_pretty(config)
        .map_err(|e| ChatError::config_error(format!("Failed to serialize config: {}", e)))?;

    fs::write(path, config_str)
        .map_err(|e| ChatError::config_error(format!("Failed to write config file: {}", e)))
}

fn config_dir() -> ChatResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| ChatError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join(APP_NAME))
}

fn get_config_path() -> ChatResult<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn validate_config(config: &Config) -> ChatResult<()> {
    let url = Url::parse(&config.base_url).map_err(|e| {
        ChatError::config_error(format!("Invalid base URL '{}': {}", config.base_url, e))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ChatError::config_error(format!(
            "Base URL must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if !LOG_LEVELS.contains(&config.log_level.to_lowercase().as_str()) {
        return Err(ChatError::config_error(format!(
            "Unknown log level '{}'",
            config.log_level
        )));
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG.read().unwrap_or_else(|e| e.into_inner()).clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_validate_config_valid() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_invalid_url() {
        let mut config = Config::default();
        config.base_url = "not a url".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_rejects_non_http_scheme() {
        let mut config = Config::default();
        config.base_url = "ftp://example.com".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_invalid_log_level() {
        let mut config = Config::default();
        config.log_level = "loud".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_load_or_create_writes_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = load_or_create(&path).unwrap();

        assert_eq!(config, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn test_load_or_create_reads_existing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"base_url":"http://chat.local:8080","log_level":"debug","log_dir":"/tmp/chat"}"#,
        )
        .unwrap();

        let config = load_or_create(&path).unwrap();

        assert_eq!(config.base_url, "http://chat.local:8080");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_dir, PathBuf::from("/tmp/chat"));
    }

    #[test]
    fn test_load_or_create_rejects_garbage() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ nope").unwrap();

        assert!(matches!(load_or_create(&path), Err(ChatError::Config(_))));
    }
}
