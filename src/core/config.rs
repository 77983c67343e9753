//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Leptos' own settings (site address, bundle paths) still come from
//! `[package.metadata.leptos]` and the `LEPTOS_*` variables.

use super::error::ConfigError;

/// Default `tracing` filter when neither `RUST_LOG` nor `LOG_LEVEL` is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing` filter directive, e.g. `info` or `pixelforge_landing=debug`
    pub log_level: String,

    /// Compress responses with brotli/gzip
    pub compression: bool,

    /// Serve `.br`/`.gz` siblings of files under `/pkg` when present
    pub precompressed_assets: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = lookup("LOG_LEVEL")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            log_level,
            compression: parse_flag("COMPRESSION", lookup("COMPRESSION"), true)?,
            precompressed_assets: parse_flag(
                "PRECOMPRESSED_ASSETS",
                lookup("PRECOMPRESSED_ASSETS"),
                true,
            )?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            compression: true,
            precompressed_assets: true,
        }
    }
}

fn parse_flag(key: &'static str, value: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(value) = value else {
        return Ok(default);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "" => Ok(default),
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value,
            expected: "a boolean (true/false, 1/0, yes/no, on/off)",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_all_fields_set() {
        let config = Config::from_lookup(lookup_from(&[
            ("LOG_LEVEL", "pixelforge_landing=debug"),
            ("COMPRESSION", "off"),
            ("PRECOMPRESSED_ASSETS", "0"),
        ]))
        .unwrap();

        assert_eq!(config.log_level, "pixelforge_landing=debug");
        assert!(!config.compression);
        assert!(!config.precompressed_assets);
    }

    #[test]
    fn test_flags_are_case_insensitive() {
        let config = Config::from_lookup(lookup_from(&[("COMPRESSION", " TRUE ")])).unwrap();
        assert!(config.compression);
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("LOG_LEVEL", "   "),
            ("COMPRESSION", ""),
        ]))
        .unwrap();

        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert!(config.compression);
    }

    #[test]
    fn test_invalid_flag_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("PRECOMPRESSED_ASSETS", "maybe")]))
            .unwrap_err();

        match &err {
            ConfigError::InvalidValue { key, value, .. } => {
                assert_eq!(*key, "PRECOMPRESSED_ASSETS");
                assert_eq!(value, "maybe");
            }
        }
        assert!(err.to_string().contains("PRECOMPRESSED_ASSETS"));
    }
}
