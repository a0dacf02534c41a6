use crate::{git::DEFAULT_REMOTE, github::DEFAULT_API_URL};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{env, io::ErrorKind, path::PathBuf};

const DEFAULT_CONFIG_FILE_NAME: &str = "prassign.yaml";
const CONFIG_PATH_ENV: &str = "PRASSIGN_CONFIG";
const DEFAULT_TEAM: &str = "mobile";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_team")]
    pub team: String,
    #[serde(default = "Config::default_api_url")]
    pub api_url: String,
    #[serde(default = "Config::default_remote")]
    pub remote: String,
    /// `OWNER/REPO`, takes precedence over the remote url
    #[serde(default)]
    pub repo: Option<String>,
}

impl Config {
    /// Reads `$PRASSIGN_CONFIG` or `prassign.yaml`; a missing file means defaults
    pub async fn load() -> Result<Config> {
        let path = env::var_os(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE_NAME));

        let config_string = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("no config file at {}, using defaults", path.display());
                return Ok(Config::default());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("cannot read {}", path.display()))
            }
        };

        Config::from_yaml(&config_string)
            .with_context(|| format!("cannot parse {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Config> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let config = serde_yaml::from_str::<Config>(content)?;

        Ok(config)
    }

    fn default_team() -> String {
        DEFAULT_TEAM.to_owned()
    }

    fn default_api_url() -> String {
        DEFAULT_API_URL.to_owned()
    }

    fn default_remote() -> String {
        DEFAULT_REMOTE.to_owned()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            team: Config::default_team(),
            api_url: Config::default_api_url(),
            remote: Config::default_remote(),
            repo: None,
        }
    }
}
