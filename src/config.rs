// src/config.rs
use crate::domain::AmenityMatch;
use crate::weather::DEFAULT_BASE_URL;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_MAX_WORKERS: usize = 8;
const DEFAULT_DATASET_PATH: &str = "data/Dataset.csv";
const DEFAULT_BACKGROUND_PATH: &str = "static/background.avif";
const DEFAULT_CITIES: [&str; 3] = ["Manali", "Darjeeling", "Munnar"];
const DEFAULT_REFRESH_DELAY_MS: u64 = 2000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} has an invalid value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    pub dataset_path: PathBuf,
    pub background_path: PathBuf,
    pub weather_cities: Vec<String>,
    pub weather_url: String,
    pub weather_timeout: Option<Duration>,
    pub weather_api_key: Option<String>,
    pub refresh_delay: Duration,
    pub amenity_match: AmenityMatch,
}

impl AppConfig {
    /// Read settings from the process environment (after `.env` has been loaded).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Blank values count as unset.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = match get("FINDER_BIND_ADDR") {
            Some(v) => parse_with("FINDER_BIND_ADDR", &v, |s| s.trim().parse::<SocketAddr>())?,
            None => DEFAULT_BIND_ADDR
                .parse()
                .map_err(|e: std::net::AddrParseError| invalid("FINDER_BIND_ADDR", DEFAULT_BIND_ADDR, e))?,
        };

        let max_workers = match get("FINDER_MAX_WORKERS") {
            Some(v) => {
                let n = parse_with("FINDER_MAX_WORKERS", &v, |s| s.trim().parse::<usize>())?;
                if n == 0 {
                    return Err(invalid("FINDER_MAX_WORKERS", &v, "must be at least 1"));
                }
                n
            }
            None => DEFAULT_MAX_WORKERS,
        };

        let weather_cities = match get("FINDER_WEATHER_CITIES") {
            Some(v) => v
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect(),
            None => DEFAULT_CITIES.iter().map(|c| c.to_string()).collect(),
        };

        let weather_timeout = get("FINDER_WEATHER_TIMEOUT_SECS")
            .map(|v| parse_with("FINDER_WEATHER_TIMEOUT_SECS", &v, |s| s.trim().parse::<u64>()))
            .transpose()?
            .map(Duration::from_secs);

        let refresh_delay = get("FINDER_REFRESH_DELAY_MS")
            .map(|v| parse_with("FINDER_REFRESH_DELAY_MS", &v, |s| s.trim().parse::<u64>()))
            .transpose()?
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_millis(DEFAULT_REFRESH_DELAY_MS));

        let amenity_match = match get("FINDER_AMENITY_MATCH") {
            Some(v) => AmenityMatch::parse(&v)
                .ok_or_else(|| invalid("FINDER_AMENITY_MATCH", &v, "expected 'token' or 'substring'"))?,
            None => AmenityMatch::default(),
        };

        Ok(Self {
            bind_addr,
            max_workers,
            dataset_path: get("FINDER_DATASET_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_PATH)),
            background_path: get("FINDER_BACKGROUND_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_BACKGROUND_PATH)),
            weather_cities,
            weather_url: get("FINDER_WEATHER_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            weather_timeout,
            weather_api_key: get("OPENWEATHER_API_KEY").map(|k| k.trim().to_string()),
            refresh_delay,
            amenity_match,
        })
    }
}

fn parse_with<T, E, P>(key: &'static str, value: &str, parse: P) -> Result<T, ConfigError>
where
    P: FnOnce(&str) -> Result<T, E>,
    E: std::fmt::Display,
{
    parse(value).map_err(|e| invalid(key, value, e))
}

fn invalid(key: &'static str, value: &str, reason: impl std::fmt::Display) -> ConfigError {
    ConfigError::Invalid {
        key,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
