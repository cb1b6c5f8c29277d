//! Environment configuration.
//!
//! Values come from the process environment, after `.env` has been loaded by
//! the binary. Missing or unparsable values fall back to defaults with a log
//! line, so the service always starts.

use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

/// Default `tracing` filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "homestay_booking=info,tower_http=info";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind: String,
    pub port: u16,
    /// Allowed CORS origin; any origin when unset
    pub cors_origin: Option<String>,
    /// Upper bound on rooms per generated hotel
    pub max_rooms: u32,
    /// Longest booking, in nights, the calendar endpoints will expand
    pub max_stay_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0".to_string(),
            port: 8080,
            cors_origin: None,
            max_rooms: 50,
            max_stay_days: 365,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            bind: env::var("HOMESTAY_BIND").unwrap_or(defaults.bind),
            port: try_load("HOMESTAY_PORT", defaults.port),
            cors_origin: env::var("HOMESTAY_CORS_ORIGIN")
                .ok()
                .filter(|origin| !origin.trim().is_empty()),
            max_rooms: try_load("HOMESTAY_MAX_ROOMS", defaults.max_rooms),
            max_stay_days: try_load("HOMESTAY_MAX_STAY_DAYS", defaults.max_stay_days),
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

fn try_load<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            default
        }),
        Err(_) => {
            info!("{key} not set, using default: {default}");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.addr(), "0.0.0.0:8080");
        assert_eq!(config.max_rooms, 50);
        assert_eq!(config.max_stay_days, 365);
        assert!(config.cors_origin.is_none());
    }

    #[test]
    fn test_try_load_falls_back() {
        env::set_var("HOMESTAY_TEST_PORT_GARBAGE", "eighty");
        assert_eq!(try_load("HOMESTAY_TEST_PORT_GARBAGE", 8080u16), 8080);

        env::set_var("HOMESTAY_TEST_PORT_OK", " 9090 ");
        assert_eq!(try_load("HOMESTAY_TEST_PORT_OK", 8080u16), 9090);

        assert_eq!(try_load("HOMESTAY_TEST_PORT_MISSING", 7u32), 7);
    }
}
