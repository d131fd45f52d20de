//! Server configuration read from the environment.
//!
//! A `.env` file in the working directory is loaded first (if present), then
//! every key is read with a default. Only malformed numbers are errors; a
//! missing Google token simply means the feed is served from mock data.

use common::mapper::MapperConfig;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATABASE: &str = "testimonials.sqlite";
const DEFAULT_GOOGLE_API_BASE: &str = "https://mybusinessbusinessinformation.googleapis.com";
const DEFAULT_GOOGLE_TIMEOUT_SECS: u64 = 10;
const DEFAULT_CACHE_MAX_AGE: u32 = 300;
const DEFAULT_STALE_WHILE_REVALIDATE: u32 = 86_400;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub google_location_id: Option<String>,
    pub google_access_token: Option<String>,
    pub google_api_base: String,
    /// Upper bound for one Google API request, connect to last byte.
    pub google_timeout_secs: u64,
    /// Overrides the bundled mock reviews file.
    pub mock_reviews_path: Option<PathBuf>,
    pub mapper: MapperConfig,
    pub cache_max_age: u32,
    pub stale_while_revalidate: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut mapper = MapperConfig {
            default_location: get("REVIEW_DEFAULT_LOCATION"),
            ..MapperConfig::default()
        };
        if let Some(role) = get("REVIEW_ROLE") {
            mapper.role = Some(role);
        }

        Ok(Self {
            host: get("TESTIMONIALS_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or(get("TESTIMONIALS_PORT"), "TESTIMONIALS_PORT", DEFAULT_PORT)?,
            database_path: get("TESTIMONIALS_DB")
                .unwrap_or_else(|| DEFAULT_DATABASE.to_string())
                .into(),
            google_location_id: get("GOOGLE_LOCATION_ID"),
            google_access_token: get("GOOGLE_ACCESS_TOKEN"),
            google_api_base: get("GOOGLE_API_BASE")
                .unwrap_or_else(|| DEFAULT_GOOGLE_API_BASE.to_string()),
            google_timeout_secs: parse_or(
                get("GOOGLE_TIMEOUT_SECS"),
                "GOOGLE_TIMEOUT_SECS",
                DEFAULT_GOOGLE_TIMEOUT_SECS,
            )?,
            mock_reviews_path: get("MOCK_REVIEWS_PATH").map(PathBuf::from),
            mapper,
            cache_max_age: parse_or(get("CACHE_MAX_AGE"), "CACHE_MAX_AGE", DEFAULT_CACHE_MAX_AGE)?,
            stale_while_revalidate: parse_or(
                get("STALE_WHILE_REVALIDATE"),
                "STALE_WHILE_REVALIDATE",
                DEFAULT_STALE_WHILE_REVALIDATE,
            )?,
        })
    }

    /// `Cache-Control` value for the public feed.
    pub fn cache_control(&self) -> String {
        format!(
            "s-maxage={}, stale-while-revalidate={}",
            self.cache_max_age, self.stale_while_revalidate
        )
    }
}

fn parse_or<T: std::str::FromStr>(
    raw: Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_without_environment() {
        let config = config(&[]).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.database_path, PathBuf::from("testimonials.sqlite"));
        assert_eq!(config.google_access_token, None);
        assert_eq!(config.google_timeout_secs, 10);
        assert_eq!(config.mapper, MapperConfig::default());
        assert_eq!(config.cache_control(), "s-maxage=300, stale-while-revalidate=86400");
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[
            ("TESTIMONIALS_PORT", "9090"),
            ("GOOGLE_ACCESS_TOKEN", "token"),
            ("GOOGLE_LOCATION_ID", "456"),
            ("REVIEW_DEFAULT_LOCATION", "Laval, QC"),
            ("REVIEW_ROLE", "Client"),
            ("CACHE_MAX_AGE", "60"),
            ("GOOGLE_TIMEOUT_SECS", "3"),
        ])
        .unwrap();
        assert_eq!(config.google_timeout_secs, 3);
        assert_eq!(config.port, 9090);
        assert_eq!(config.google_access_token.as_deref(), Some("token"));
        assert_eq!(config.mapper.default_location.as_deref(), Some("Laval, QC"));
        assert_eq!(config.mapper.role.as_deref(), Some("Client"));
        assert_eq!(config.cache_control(), "s-maxage=60, stale-while-revalidate=86400");
    }

    #[test]
    fn blank_values_are_unset() {
        let config = config(&[("GOOGLE_ACCESS_TOKEN", "   ")]).unwrap();
        assert_eq!(config.google_access_token, None);
    }

    #[test]
    fn bad_number_is_an_error() {
        assert_eq!(
            config(&[("TESTIMONIALS_PORT", "eighty")]),
            Err(ConfigError::Invalid {
                key: "TESTIMONIALS_PORT",
                value: "eighty".into()
            })
        );
    }
}
