use thiserror::Error;

use crate::app_config::AppConfig;

/// Errors produced while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The parsing logic is decoupled from the actual environment so it can be
/// tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let api_endpoint = require("MERKATO_API_ENDPOINT")?;
    let log_level = or_default("MERKATO_LOG_LEVEL", "info");
    let user_agent = or_default("MERKATO_USER_AGENT", "merkato/0.1 (catalog-client)");

    Ok(AppConfig {
        api_endpoint,
        log_level,
        user_agent,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn build_app_config_fails_without_api_endpoint() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "MERKATO_API_ENDPOINT"),
            "expected MissingEnvVar(MERKATO_API_ENDPOINT), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_applies_defaults() {
        let mut map = HashMap::new();
        map.insert("MERKATO_API_ENDPOINT", "https://shop.example.com");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.api_endpoint, "https://shop.example.com");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.user_agent, "merkato/0.1 (catalog-client)");
    }

    #[test]
    fn build_app_config_honours_overrides() {
        let mut map = HashMap::new();
        map.insert("MERKATO_API_ENDPOINT", "https://shop.example.com");
        map.insert("MERKATO_LOG_LEVEL", "debug");
        map.insert("MERKATO_USER_AGENT", "custom-agent/2.0");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.user_agent, "custom-agent/2.0");
    }
}
