use crate::discogs::DiscogsAuth;
use crate::search::{DEFAULT_FORMAT, DEFAULT_PER_PAGE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

const CONFIG_FILE: &str = "config.yaml";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_yaml::Error),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

/// YAML config file structure (`~/.platter/config.yaml`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfigYaml {
    /// Discogs personal access token. Takes precedence over key/secret.
    #[serde(default)]
    pub discogs_token: Option<String>,
    #[serde(default)]
    pub discogs_key: Option<String>,
    #[serde(default)]
    pub discogs_secret: Option<String>,
    /// Base URL of the collection server
    #[serde(default)]
    pub collection_server: Option<String>,
    /// Signed-in user. None = signed out.
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    /// Discogs format filter applied to every search
    #[serde(default = "default_format")]
    pub format_filter: String,
}

impl Default for ConfigYaml {
    fn default() -> Self {
        Self {
            discogs_token: None,
            discogs_key: None,
            discogs_secret: None,
            collection_server: None,
            user_id: None,
            per_page: default_per_page(),
            format_filter: default_format(),
        }
    }
}

/// Application configuration
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub config_dir: PathBuf,
    pub discogs_token: Option<String>,
    pub discogs_key: Option<String>,
    pub discogs_secret: Option<String>,
    pub collection_server: Option<String>,
    pub user_id: Option<String>,
    pub per_page: u32,
    pub format_filter: String,
}

impl Config {
    pub fn load() -> Self {
        let dev_mode = std::env::var("PLATTER_DEV_MODE").is_ok() || dotenvy::dotenv().is_ok();
        if dev_mode {
            info!("Dev mode activated - loading from .env");
            Self::from_env()
        } else {
            info!("Production mode - loading from config.yaml");
            Self::from_config_file()
        }
    }

    fn from_env() -> Self {
        let per_page = non_empty_env("PLATTER_PER_PAGE")
            .and_then(|v| match parse_per_page(&v) {
                Ok(n) => Some(n),
                Err(e) => {
                    warn!("Ignoring PLATTER_PER_PAGE={}: {}", v, e);
                    None
                }
            })
            .unwrap_or(DEFAULT_PER_PAGE);

        Self {
            config_dir: PathBuf::from("."),
            discogs_token: non_empty_env("PLATTER_DISCOGS_TOKEN"),
            discogs_key: non_empty_env("PLATTER_DISCOGS_KEY"),
            discogs_secret: non_empty_env("PLATTER_DISCOGS_SECRET"),
            collection_server: non_empty_env("PLATTER_COLLECTION_SERVER"),
            user_id: non_empty_env("PLATTER_USER_ID"),
            per_page,
            format_filter: non_empty_env("PLATTER_FORMAT").unwrap_or_else(default_format),
        }
    }

    fn from_config_file() -> Self {
        let config_dir = default_config_dir();
        match Self::load_from_dir(&config_dir) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to read {}: {}, using defaults",
                    config_dir.join(CONFIG_FILE).display(),
                    e
                );
                Self::from_yaml(config_dir, ConfigYaml::default())
            }
        }
    }

    /// Read `config.yaml` from `config_dir`. A missing file yields defaults.
    pub fn load_from_dir(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);
        if !config_path.exists() {
            info!("No config at {}, using defaults", config_path.display());
            return Ok(Self::from_yaml(config_dir.to_path_buf(), ConfigYaml::default()));
        }
        let yaml: ConfigYaml = serde_yaml::from_str(&std::fs::read_to_string(&config_path)?)?;
        check_per_page(yaml.per_page)?;
        Ok(Self::from_yaml(config_dir.to_path_buf(), yaml))
    }

    fn from_yaml(config_dir: PathBuf, yaml: ConfigYaml) -> Self {
        Self {
            config_dir,
            discogs_token: yaml.discogs_token,
            discogs_key: yaml.discogs_key,
            discogs_secret: yaml.discogs_secret,
            collection_server: yaml.collection_server,
            user_id: yaml.user_id,
            per_page: yaml.per_page,
            format_filter: yaml.format_filter,
        }
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        std::fs::create_dir_all(&self.config_dir)?;
        let yaml = ConfigYaml {
            discogs_token: self.discogs_token.clone(),
            discogs_key: self.discogs_key.clone(),
            discogs_secret: self.discogs_secret.clone(),
            collection_server: self.collection_server.clone(),
            user_id: self.user_id.clone(),
            per_page: self.per_page,
            format_filter: self.format_filter.clone(),
        };
        std::fs::write(self.config_dir.join(CONFIG_FILE), serde_yaml::to_string(&yaml)?)?;
        Ok(())
    }

    /// Credentials for the Discogs client. A token wins over key/secret.
    pub fn discogs_auth(&self) -> Option<DiscogsAuth> {
        if let Some(token) = &self.discogs_token {
            return Some(DiscogsAuth::Token(token.clone()));
        }
        match (&self.discogs_key, &self.discogs_secret) {
            (Some(key), Some(secret)) => Some(DiscogsAuth::KeySecret {
                key: key.clone(),
                secret: secret.clone(),
            }),
            _ => None,
        }
    }
}

fn default_config_dir() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(".platter"),
        None => {
            warn!("No home directory, using ./.platter");
            PathBuf::from(".platter")
        }
    }
}

fn check_per_page(per_page: u32) -> Result<u32, ConfigError> {
    if per_page == 0 {
        return Err(ConfigError::Config("per_page must be positive".to_string()));
    }
    Ok(per_page)
}

fn parse_per_page(raw: &str) -> Result<u32, ConfigError> {
    let per_page = raw
        .trim()
        .parse()
        .map_err(|e| ConfigError::Config(format!("per_page is not a number: {e}")))?;
    check_per_page(per_page)
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.is_empty())
}
