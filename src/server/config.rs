use std::{net::SocketAddr, path::PathBuf};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_MEDIA_DIR: &str = "media";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,
    /// Directory uploaded images are written to and served from.
    pub media_dir: PathBuf,
    /// Mark the session cookie `Secure`; enable when served over HTTPS.
    pub secure_cookies: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        let media_dir = lookup("MEDIA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MEDIA_DIR));

        let secure_cookies = match lookup("SECURE_COOKIES") {
            None => false,
            Some(value) => parse_bool(&value).ok_or_else(|| ConfigError::InvalidEnvVar {
                name: "SECURE_COOKIES".to_string(),
                reason: format!("expected true or false, got '{}'", value),
            })?,
        };

        Ok(Self {
            database_url,
            bind_address,
            media_dir,
            secure_cookies,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Config::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn applies_defaults() {
        let config = config(&[("DATABASE_URL", "sqlite::memory:")]).unwrap();

        assert_eq!(config.bind_address.to_string(), DEFAULT_BIND_ADDRESS);
        assert_eq!(config.media_dir, PathBuf::from("media"));
        assert!(!config.secure_cookies);
    }

    #[test]
    fn requires_database_url() {
        let result = config(&[]);

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) if name == "DATABASE_URL"
        ));
    }

    #[test]
    fn rejects_malformed_values() {
        let bad_address = config(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("BIND_ADDRESS", "localhost"),
        ]);
        assert!(matches!(
            bad_address,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));

        let bad_flag = config(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("SECURE_COOKIES", "maybe"),
        ]);
        assert!(bad_flag.is_err());

        let secure = config(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("SECURE_COOKIES", "TRUE"),
        ])
        .unwrap();
        assert!(secure.secure_cookies);
    }
}
