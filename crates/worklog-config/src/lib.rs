use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use worklog_engine::io::Project;
use worklog_engine::publish::{ContentMode, DEFAULT_TIMEOUT, NotionClientConfig, SyncMode};

/// Environment variable that takes precedence over `notion.api_key`.
pub const API_KEY_ENV: &str = "NOTION_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Only commits by this author are reported; everyone when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    pub projects: Vec<ProjectConfig>,
    pub notion: NotionSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectConfig {
    pub path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotionSettings {
    pub api_key: String,
    /// Page URL or ID the reports are published under.
    pub parent_page_id: String,
    pub sync_mode: SyncMode,
    pub content_mode: ContentMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy_url: Option<String>,
    pub timeout_secs: u64,
}

impl Default for NotionSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            parent_page_id: String::new(),
            sync_mode: SyncMode::default(),
            content_mode: ContentMode::default(),
            proxy_url: None,
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl NotionSettings {
    pub fn client_config(&self) -> NotionClientConfig {
        NotionClientConfig {
            token: self.api_key.clone(),
            proxy_url: self.proxy_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs.max(1)),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in project paths
        for project in &mut config.projects {
            if let Some(expanded) = Self::expand_path(&project.path) {
                project.path = expanded;
            }
        }

        Ok(Some(config))
    }

    /// Loads the default config file, then applies environment overrides.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        let config = Self::load_from_path(&config_path)?;
        Ok(config.map(|c| c.with_api_key_override(std::env::var(API_KEY_ENV).ok())))
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/worklog");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Replaces the API key with `value` when it is set and non-blank.
    pub fn with_api_key_override(mut self, value: Option<String>) -> Self {
        if let Some(key) = value.filter(|k| !k.trim().is_empty()) {
            self.notion.api_key = key;
        }
        self
    }

    /// Configured projects in the engine's terms.
    pub fn projects(&self) -> Vec<Project> {
        self.projects
            .iter()
            .map(|p| Project {
                path: p.path.clone(),
                name: p.name.clone(),
            })
            .collect()
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
