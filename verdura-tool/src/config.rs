use std::path::PathBuf;

use serde::Deserialize;
use verdura_catalog::DEFAULT_BASE_URL;

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    pub base_url: Option<String>,
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("verdura").join("config.toml"))
}

pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    let Ok(content) = std::fs::read_to_string(path) else {
        return Config::default();
    };

    toml::from_str(&content).unwrap_or_default()
}

/// Resolution order: CLI flag, then VERDURA_BASE_URL, then config file,
/// then the default local endpoint.
pub fn resolve_base_url(cli: Option<String>) -> String {
    if let Some(url) = cli {
        return url;
    }

    if let Ok(url) = std::env::var("VERDURA_BASE_URL") {
        if !url.is_empty() {
            return url;
        }
    }

    if let Some(url) = load_config().base_url {
        if !url.is_empty() {
            return url;
        }
    }

    DEFAULT_BASE_URL.to_string()
}
