use std::path::PathBuf;
use std::sync::Arc;

use easy_config_store::ConfigStore;
use eyre::Result;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

pub const API_URL_ENV: &str = "ROLEFIT_API_URL";

pub type Config = Arc<ConfigInner>;

pub fn config(path: PathBuf) -> Result<Config> {
    let mut inner = if path.exists() {
        let config_store = ConfigStore::<ConfigInner>::read(path, "config".to_string())?;
        info!("config parsing successful");
        (*config_store).clone()
    } else {
        warn!(
            "config file {} not found, using bundled defaults",
            path.display()
        );
        ConfigInner::default()
    };

    inner.api.base_url = resolve_base_url(&inner.api.base_url, std::env::var(API_URL_ENV).ok());
    debug!("loaded configuration:\n{}", toml::to_string_pretty(&inner)?);

    Ok(Arc::new(inner))
}

/// The environment override wins when it holds anything but whitespace.
pub fn resolve_base_url(configured: &str, env_override: Option<String>) -> String {
    env_override
        .filter(|url| !url.trim().is_empty())
        .as_deref()
        .unwrap_or(configured)
        .trim()
        .trim_end_matches('/')
        .to_string()
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ConfigInner {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct DisplayConfig {
    #[serde(default = "default_animate")]
    pub animate: bool,
    #[serde(default = "default_animation_delay_ms")]
    pub animation_delay_ms: u64,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_animate() -> bool {
    true
}

fn default_animation_delay_ms() -> u64 {
    120
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            animate: default_animate(),
            animation_delay_ms: default_animation_delay_ms(),
        }
    }
}

impl Default for ConfigInner {
    fn default() -> Self {
        let cfg = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.default.toml",));

        toml::from_str(cfg).expect("bundled config.default.toml is valid")
    }
}
