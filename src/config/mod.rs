mod env;
mod types;

pub use env::{EnvironmentProvider, SystemEnvironment};
pub use types::*;

use crate::{Error, Result};
use std::io::ErrorKind;
use tracing::{debug, warn};

/// Loads `.env`, the YAML config file and environment overrides, in that order.
pub async fn load() -> Result<Config> {
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => warn!("Failed to read .env file: {}", e),
    }

    let env = SystemEnvironment;
    let config_path = env
        .get_var("CONFIG_PATH")
        .unwrap_or_else(|| "config.yaml".to_string());

    let config = load_from_path(&config_path).await?;
    apply_env_overrides(config, &env)
}

/// Reads a YAML config file. A missing or empty file yields the defaults.
pub async fn load_from_path(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = match tokio::fs::read_to_string(config_path).await {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("Config file {} not found, using defaults", config_path);
            return Ok(Config::default());
        }
        Err(e) => return Err(e.into()),
    };

    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }

    Ok(serde_yaml::from_str(&config_str)?)
}

pub fn apply_env_overrides(mut config: Config, env: &dyn EnvironmentProvider) -> Result<Config> {
    let non_blank = |key: &str| env.get_var(key).filter(|v| !v.trim().is_empty());

    if let Some(api_key) = non_blank("API_KEY") {
        config.llm.api_key = Some(api_key);
    }

    if let Some(host) = non_blank("HOST") {
        config.server.host = host;
    }

    if let Some(port) = non_blank("PORT") {
        config.server.port = port
            .trim()
            .parse()
            .map_err(|_| Error::config(format!("Invalid PORT value: '{}'", port)))?;
    }

    // Blank keys from the file are treated the same as absent ones.
    if config
        .llm
        .api_key
        .as_deref()
        .is_some_and(|k| k.trim().is_empty())
    {
        config.llm.api_key = None;
    }

    Ok(config)
}
