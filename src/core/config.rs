use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    FSError(#[from] std::io::Error),
    #[error(transparent)]
    SerdeError(#[from] toml::de::Error),
}

#[derive(Deserialize, Clone, Default, Debug)]
pub struct DirectoryConfig {
    pub base_url: String,
}

impl DirectoryConfig {
    fn is_valid(&self) -> bool {
        !self.base_url.trim().is_empty() && Url::parse(self.base_url.trim()).is_ok()
    }
}

fn default_listen_address() -> String {
    "0.0.0.0:3000".to_string()
}

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    #[serde(default = "default_listen_address")]
    pub listen_address: String,
    #[serde(default)]
    pub cors_hosts: Vec<String>,
    pub directory: DirectoryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_address: default_listen_address(),
            cors_hosts: vec![],
            directory: DirectoryConfig::default(),
        }
    }
}

impl Config {
    pub fn parse(path: Option<String>) -> Result<Self, ConfigError> {
        let path = path.unwrap_or("config.toml".to_string());
        let path = Path::new(path.as_str());
        let config_text = fs::read_to_string(path)?;

        let config: Config = toml::from_str(config_text.as_str())?;

        Ok(config)
    }

    pub fn is_valid(&self) -> bool {
        self.directory.is_valid()
    }
}
