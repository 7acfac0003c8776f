//! Application configuration.
//!
//! Read once at startup from an optional TOML file, then overridden by
//! environment variables. The resulting [`AppConfig`] is passed explicitly to
//! whoever needs it.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 3000
//!
//! [repository]
//! type = "local"
//!
//! [ai]
//! base_url = "http://localhost:8000"
//! api_key = "secret"
//! timeout_secs = 10
//!
//! seed_demo_data = true
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "VOYAGE_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: '{value}'")]
    InvalidEnv { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub repository: RepositorySettings,
    #[serde(default)]
    pub ai: AiSettings,
    #[serde(default)]
    pub seed_demo_data: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Repository type settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySettings {
    #[serde(rename = "type", default = "default_repo_type")]
    pub repo_type: String,
}

/// External optimization service. Disabled while `base_url` is unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiSettings {
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_repo_type() -> String {
    "local".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            repo_type: default_repo_type(),
        }
    }
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerSettings::default(),
            repository: RepositorySettings::default(),
            ai: AiSettings::default(),
            seed_demo_data: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file. Missing sections take defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `voyage.toml` from the current or `backend/` directory, if present.
    pub fn from_default_location() -> Result<Option<Self>, ConfigError> {
        let search_paths = [
            PathBuf::from("voyage.toml"),
            PathBuf::from("backend/voyage.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path).map(Some);
            }
        }
        Ok(None)
    }

    /// File (explicit or default location) or defaults, then environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let base = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::from_file(path.trim())?,
            _ => Self::from_default_location()?.unwrap_or_default(),
        };
        base.apply_env()
    }

    /// Override fields from `HOST`, `PORT`, `REPOSITORY_TYPE`, `AI_API_URL`,
    /// `AI_API_KEY`, `AI_TIMEOUT_SECS` and `SEED_DEMO_DATA`.
    pub fn apply_env(mut self) -> Result<Self, ConfigError> {
        if let Some(host) = env_var("HOST") {
            self.server.host = host;
        }
        if let Some(port) = env_var("PORT") {
            self.server.port = parse_env("PORT", port)?;
        }
        if let Some(repo_type) = env_var("REPOSITORY_TYPE") {
            self.repository.repo_type = repo_type;
        }
        if let Some(url) = env_var("AI_API_URL") {
            self.ai.base_url = Some(url);
        }
        if let Some(key) = env_var("AI_API_KEY") {
            self.ai.api_key = Some(key);
        }
        if let Some(timeout) = env_var("AI_TIMEOUT_SECS") {
            self.ai.timeout_secs = parse_env("AI_TIMEOUT_SECS", timeout)?;
        }
        if let Some(seed) = env_var("SEED_DEMO_DATA") {
            self.seed_demo_data = parse_flag("SEED_DEMO_DATA", seed)?;
        }
        Ok(self)
    }

    /// `host:port` for the listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env<T: std::str::FromStr>(key: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidEnv { key, value })
}

fn parse_flag(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidEnv { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.repository.repo_type, "local");
        assert_eq!(config.ai.timeout_secs, 10);
        assert!(config.ai.base_url.is_none());
        assert!(!config.seed_demo_data);
    }

    #[test]
    fn test_parse_partial_file() {
        let toml = r#"
seed_demo_data = true

[server]
port = 8080

[ai]
base_url = "http://optimizer:8000"
"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(toml.as_bytes()).unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.ai.base_url.as_deref(), Some("http://optimizer:8000"));
        assert_eq!(config.ai.timeout_secs, 10);
        assert_eq!(config.repository.repo_type, "local");
        assert!(config.seed_demo_data);
    }

    #[test]
    fn test_repository_type_key() {
        let config: AppConfig = toml::from_str("[repository]\ntype = \"memory\"\n").unwrap();
        assert_eq!(config.repository.repo_type, "memory");
    }

    #[test]
    fn test_parse_error_names_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[server\nport = 1").unwrap();
        let err = AppConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_missing_file() {
        let err = AppConfig::from_file("/nonexistent/voyage.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("X", "Yes".to_string()).unwrap());
        assert!(!parse_flag("X", "0".to_string()).unwrap());
        assert!(parse_flag("X", "maybe".to_string()).is_err());
    }
}
